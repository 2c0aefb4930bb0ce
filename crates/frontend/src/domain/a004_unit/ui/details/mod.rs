use contracts::domain::a004_unit::{Unit, UnitDto};
use leptos::prelude::*;

use crate::shared::components::{bind, FormCheckbox, FormModal, FormText};
use crate::shared::crud::FormContext;
use crate::shared::crud_page::CrudEntity;

#[component]
pub fn UnitDetails(
    record: Option<Unit>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = FormContext::new(on_saved);
    let title = if record.is_some() { "Editar unidad" } else { "Nueva unidad" };
    let form = RwSignal::new(record.as_ref().map(UnitDto::from_entity).unwrap_or_else(UnitDto::new));

    let save = Callback::new(move |_| {
        let dto = form.get_untracked().normalized();
        if let Err(e) = dto.validate() {
            ctx.fail(e);
            return;
        }
        ctx.submit(Unit::RESOURCE, dto.id, dto);
    });

    view! {
        <FormModal title=title.to_string() error=ctx.error saving=ctx.saving on_save=save on_cancel=on_cancel width="min(480px, 95vw)">
            <FormText label="Nombre" maxlength=60 field=bind(form, |f| f.name.clone(), |f, v| f.name = v) />
            <FormText label="Abreviatura" maxlength=10 placeholder="UND" field=bind(form, |f| f.abbreviation.clone(), |f, v| f.abbreviation = v) />
            <FormCheckbox label="Activo" field=bind(form, |f| f.active, |f, v| f.active = v) />
        </FormModal>
    }
}
