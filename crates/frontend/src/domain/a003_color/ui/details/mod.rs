use contracts::domain::a003_color::{Color, ColorDto};
use leptos::prelude::*;

use crate::shared::components::{bind, bind_opt, FormCheckbox, FormModal, FormText};
use crate::shared::crud::FormContext;
use crate::shared::crud_page::CrudEntity;

#[component]
pub fn ColorDetails(
    record: Option<Color>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = FormContext::new(on_saved);
    let title = if record.is_some() { "Editar color" } else { "Nuevo color" };
    let form = RwSignal::new(record.as_ref().map(ColorDto::from_entity).unwrap_or_else(ColorDto::new));
    let hex = bind_opt(form, |f| &f.hex, |f, v| f.hex = v);

    let save = Callback::new(move |_| {
        let dto = form.get_untracked().normalized();
        if let Err(e) = dto.validate() {
            ctx.fail(e);
            return;
        }
        ctx.submit(Color::RESOURCE, dto.id, dto);
    });

    view! {
        <FormModal title=title.to_string() error=ctx.error saving=ctx.saving on_save=save on_cancel=on_cancel width="min(480px, 95vw)">
            <FormText label="Nombre" maxlength=60 field=bind(form, |f| f.name.clone(), |f, v| f.name = v) />
            <div class="form__row">
                <FormText label="Código (#RRGGBB)" maxlength=7 placeholder="#1E90FF" field=hex />
                <input
                    type="color"
                    class="form__color-picker"
                    prop:value=move || {
                        let v = hex.value.get();
                        if v.len() == 7 { v } else { "#000000".to_string() }
                    }
                    on:input=move |ev| hex.set.run(event_target_value(&ev).to_uppercase())
                />
            </div>
            <FormCheckbox label="Activo" field=bind(form, |f| f.active, |f, v| f.active = v) />
        </FormModal>
    }
}
