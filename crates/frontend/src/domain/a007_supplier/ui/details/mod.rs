use contracts::domain::a007_supplier::{Supplier, SupplierDto};
use leptos::prelude::*;

use crate::shared::components::{bind, bind_opt, FormCheckbox, FormModal, FormText};
use crate::shared::crud::FormContext;
use crate::shared::crud_page::CrudEntity;

#[component]
pub fn SupplierDetails(
    record: Option<Supplier>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = FormContext::new(on_saved);
    let title = if record.is_some() { "Editar proveedor" } else { "Nuevo proveedor" };
    let form = RwSignal::new(record.as_ref().map(SupplierDto::from_entity).unwrap_or_else(SupplierDto::new));

    let save = Callback::new(move |_| {
        let dto = form.get_untracked().normalized();
        if let Err(e) = dto.validate() {
            ctx.fail(e);
            return;
        }
        ctx.submit(Supplier::RESOURCE, dto.id, dto);
    });

    view! {
        <FormModal title=title.to_string() error=ctx.error saving=ctx.saving on_save=save on_cancel=on_cancel>
            <FormText label="RUC" maxlength=11 field=bind(form, |f| f.ruc.clone(), |f, v| f.ruc = v) />
            <FormText label="Razón social" maxlength=150 field=bind(form, |f| f.business_name.clone(), |f, v| f.business_name = v) />
            <FormText label="Contacto" maxlength=100 field=bind_opt(form, |f| &f.contact_name, |f, v| f.contact_name = v) />
            <div class="form__row">
                <FormText label="Teléfono" input_type="tel" maxlength=16 field=bind_opt(form, |f| &f.phone, |f, v| f.phone = v) />
                <FormText label="Correo" input_type="email" field=bind_opt(form, |f| &f.email, |f, v| f.email = v) />
            </div>
            <FormText label="Dirección" maxlength=200 field=bind_opt(form, |f| &f.address, |f, v| f.address = v) />
            <FormCheckbox label="Activo" field=bind(form, |f| f.active, |f, v| f.active = v) />
        </FormModal>
    }
}
