use contracts::domain::a005_payment_method::{PaymentMethod, PaymentMethodDto};
use leptos::prelude::*;

use crate::shared::components::{bind, FormCheckbox, FormModal, FormText};
use crate::shared::crud::FormContext;
use crate::shared::crud_page::CrudEntity;

#[component]
pub fn PaymentMethodDetails(
    record: Option<PaymentMethod>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = FormContext::new(on_saved);
    let title = if record.is_some() { "Editar método de pago" } else { "Nuevo método de pago" };
    let form = RwSignal::new(
        record
            .as_ref()
            .map(PaymentMethodDto::from_entity)
            .unwrap_or_else(PaymentMethodDto::new),
    );

    let save = Callback::new(move |_| {
        let dto = form.get_untracked().normalized();
        if let Err(e) = dto.validate() {
            ctx.fail(e);
            return;
        }
        ctx.submit(PaymentMethod::RESOURCE, dto.id, dto);
    });

    view! {
        <FormModal title=title.to_string() error=ctx.error saving=ctx.saving on_save=save on_cancel=on_cancel width="min(480px, 95vw)">
            <FormText label="Nombre" maxlength=60 field=bind(form, |f| f.name.clone(), |f, v| f.name = v) />
            <FormCheckbox label="Es efectivo (entra a la caja)" field=bind(form, |f| f.is_cash, |f, v| f.is_cash = v) />
            <FormCheckbox label="Activo" field=bind(form, |f| f.active, |f, v| f.active = v) />
        </FormModal>
    }
}
