use contracts::domain::a006_client::{Client, ClientDto, DocumentType};
use leptos::prelude::*;

use crate::shared::components::{
    bind, bind_opt, FormCheckbox, FormModal, FormSelect, FormText, FieldBinding,
};
use crate::shared::crud::FormContext;
use crate::shared::crud_page::CrudEntity;

#[component]
pub fn ClientDetails(
    record: Option<Client>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = FormContext::new(on_saved);
    let title = if record.is_some() { "Editar cliente" } else { "Nuevo cliente" };
    let form = RwSignal::new(record.as_ref().map(ClientDto::from_entity).unwrap_or_else(ClientDto::new));

    let doc_type = FieldBinding {
        value: Signal::derive(move || form.with(|f| f.document_type.code().to_string())),
        set: Callback::new(move |code: String| {
            if let Some(t) = DocumentType::from_code(&code) {
                form.update(|f| f.document_type = t);
            }
        }),
    };
    let doc_options: Vec<(String, String)> = DocumentType::ALL
        .iter()
        .map(|t| (t.code().to_string(), t.code().to_string()))
        .collect();

    let save = Callback::new(move |_| {
        let dto = form.get_untracked().normalized();
        if let Err(e) = dto.validate() {
            ctx.fail(e);
            return;
        }
        ctx.submit(Client::RESOURCE, dto.id, dto);
    });

    view! {
        <FormModal title=title.to_string() error=ctx.error saving=ctx.saving on_save=save on_cancel=on_cancel>
            <div class="form__row">
                <FormSelect label="Tipo de documento" field=doc_type options=doc_options />
                <FormText
                    label="Número"
                    maxlength=12
                    field=bind(form, |f| f.document_number.clone(), |f, v| f.document_number = v)
                />
            </div>
            <FormText label="Nombre / Razón social" maxlength=150 field=bind(form, |f| f.name.clone(), |f, v| f.name = v) />
            <div class="form__row">
                <FormText label="Teléfono" input_type="tel" maxlength=16 field=bind_opt(form, |f| &f.phone, |f, v| f.phone = v) />
                <FormText label="Correo" input_type="email" field=bind_opt(form, |f| &f.email, |f, v| f.email = v) />
            </div>
            <FormText label="Dirección" maxlength=200 field=bind_opt(form, |f| &f.address, |f, v| f.address = v) />
            <FormCheckbox label="Activo" field=bind(form, |f| f.active, |f, v| f.active = v) />
        </FormModal>
    }
}
