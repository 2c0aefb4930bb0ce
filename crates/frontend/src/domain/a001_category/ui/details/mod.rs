use contracts::domain::a001_category::{Category, CategoryDto};
use leptos::prelude::*;

use crate::shared::components::{bind, bind_opt, FormCheckbox, FormModal, FormText, FormTextArea};
use crate::shared::crud::FormContext;
use crate::shared::crud_page::CrudEntity;

#[component]
pub fn CategoryDetails(
    record: Option<Category>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = FormContext::new(on_saved);
    let title = if record.is_some() { "Editar categoría" } else { "Nueva categoría" };
    let form = RwSignal::new(record.as_ref().map(CategoryDto::from_entity).unwrap_or_else(CategoryDto::new));

    let save = Callback::new(move |_| {
        let dto = form.get_untracked().normalized();
        if let Err(e) = dto.validate() {
            ctx.fail(e);
            return;
        }
        ctx.submit(Category::RESOURCE, dto.id, dto);
    });

    view! {
        <FormModal title=title.to_string() error=ctx.error saving=ctx.saving on_save=save on_cancel=on_cancel>
            <FormText label="Nombre" maxlength=60 field=bind(form, |f| f.name.clone(), |f, v| f.name = v) />
            <FormTextArea label="Descripción" field=bind_opt(form, |f| &f.description, |f, v| f.description = v) />
            <FormCheckbox label="Activo" field=bind(form, |f| f.active, |f, v| f.active = v) />
        </FormModal>
    }
}
