use contracts::domain::a001_category::Category;
use contracts::domain::a002_brand::Brand;
use contracts::domain::a008_product::{Product, ProductDto};
use leptos::prelude::*;

use crate::shared::components::{
    bind, bind_id, bind_opt, FormCheckbox, FormModal, FormSelect, FormText, FormTextArea,
};
use crate::shared::crud::{load_options, FormContext};
use crate::shared::crud_page::CrudEntity;

#[component]
pub fn ProductDetails(
    record: Option<Product>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = FormContext::new(on_saved);
    let title = if record.is_some() { "Editar producto" } else { "Nuevo producto" };
    let form = RwSignal::new(record.as_ref().map(ProductDto::from_entity).unwrap_or_else(ProductDto::new));

    let categories = load_options::<Category>(Category::RESOURCE, |c| c.active.then(|| (c.id, c.name.clone())));
    let brands = load_options::<Brand>(Brand::RESOURCE, |b| b.active.then(|| (b.id, b.name.clone())));

    let save = Callback::new(move |_| {
        let dto = form.get_untracked().normalized();
        if let Err(e) = dto.validate() {
            ctx.fail(e);
            return;
        }
        ctx.submit(Product::RESOURCE, dto.id, dto);
    });

    view! {
        <FormModal title=title.to_string() error=ctx.error saving=ctx.saving on_save=save on_cancel=on_cancel>
            <FormText label="Nombre" maxlength=120 field=bind(form, |f| f.name.clone(), |f, v| f.name = v) />
            <div class="form__row">
                <FormSelect
                    label="Categoría"
                    empty_label="-- Seleccione --"
                    options=categories
                    field=bind_id(form, |f| f.category_id, |f, v| f.category_id = v)
                />
                <FormSelect
                    label="Marca"
                    empty_label="(sin marca)"
                    options=brands
                    field=bind_id(form, |f| f.brand_id, |f, v| f.brand_id = v)
                />
            </div>
            <FormTextArea label="Descripción" field=bind_opt(form, |f| &f.description, |f, v| f.description = v) />
            <FormCheckbox label="Activo" field=bind(form, |f| f.active, |f, v| f.active = v) />
        </FormModal>
    }
}
