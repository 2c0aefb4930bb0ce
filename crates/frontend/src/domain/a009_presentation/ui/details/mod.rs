use contracts::domain::a003_color::Color;
use contracts::domain::a004_unit::Unit;
use contracts::domain::a008_product::Product;
use contracts::domain::a009_presentation::{margin_percent, Presentation, PresentationDto};
use leptos::prelude::*;

use crate::domain::a009_presentation::api::{self, RESOURCE};
use crate::shared::components::{
    bind, bind_id, bind_opt, FormCheckbox, FormModal, FormNumber, FormSelect, FormText,
};
use crate::shared::crud::{load_options, FormContext};
use crate::shared::crud_page::CrudEntity;
use crate::shared::number_format::format_percent;

#[component]
pub fn PresentationDetails(
    record: Option<Presentation>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = FormContext::new(on_saved);
    let title = if record.is_some() { "Editar presentación" } else { "Nueva presentación" };
    let form = RwSignal::new(
        record
            .as_ref()
            .map(PresentationDto::from_entity)
            .unwrap_or_else(PresentationDto::new),
    );

    let products = load_options::<Product>(Product::RESOURCE, |p| p.active.then(|| (p.id, p.name.clone())));
    let units = load_options::<Unit>(Unit::RESOURCE, |u| {
        u.active.then(|| (u.id, format!("{} ({})", u.name, u.abbreviation)))
    });
    let colors = load_options::<Color>(Color::RESOURCE, |c| c.active.then(|| (c.id, c.name.clone())));

    let margin = move || form.with(|f| format_percent(margin_percent(f.cost_price, f.sale_price)));

    let save = Callback::new(move |_| {
        let mut dto = form.get_untracked();
        dto.name = dto.name.trim().to_string();
        dto.barcode = dto
            .barcode
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty());
        if let Err(e) = api::validate(&dto) {
            ctx.fail(e);
            return;
        }
        ctx.submit(RESOURCE, dto.id, dto);
    });

    view! {
        <FormModal title=title.to_string() error=ctx.error saving=ctx.saving on_save=save on_cancel=on_cancel>
            <FormSelect
                label="Producto"
                empty_label="-- Seleccione --"
                options=products
                field=bind_id(form, |f| f.product_id, |f, v| f.product_id = v)
            />
            <div class="form__row">
                <FormText label="Presentación" maxlength=80 placeholder="500 ml, caja x12..."
                    field=bind(form, |f| f.name.clone(), |f, v| f.name = v) />
                <FormText label="Código de barras" maxlength=14
                    field=bind_opt(form, |f| &f.barcode, |f, v| f.barcode = v) />
            </div>
            <div class="form__row">
                <FormSelect
                    label="Unidad"
                    empty_label="-- Seleccione --"
                    options=units
                    field=bind_id(form, |f| f.unit_id, |f, v| f.unit_id = v)
                />
                <FormSelect
                    label="Color"
                    empty_label="(sin color)"
                    options=colors
                    field=bind_id(form, |f| f.color_id, |f, v| f.color_id = v)
                />
            </div>
            <div class="form__row">
                <FormNumber label="Precio de compra" field=bind(form, |f| f.cost_price, |f, v| f.cost_price = v) />
                <FormNumber label="Precio de venta" field=bind(form, |f| f.sale_price, |f, v| f.sale_price = v) />
                <FormNumber label="Stock mínimo" step="1" field=bind(form, |f| f.min_stock, |f, v| f.min_stock = v) />
            </div>
            <div class="form__hint">"Margen: " {margin}</div>
            <FormCheckbox label="Activo" field=bind(form, |f| f.active, |f, v| f.active = v) />
        </FormModal>
    }
}
