use contracts::domain::a006_client::Client;
use leptos::prelude::*;
use std::cmp::Ordering;

use super::details::ClientDetails;
use crate::shared::crud::ActiveRecord;
use crate::shared::crud_page::{col, crud_list_view, plain, text_cell, Column, CrudEntity};
use crate::shared::list_utils::{cmp_text, contains_ci, Searchable, Sortable};

impl Searchable for Client {
    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.name, needle)
            || contains_ci(&self.document_number, needle)
            || contains_ci(self.phone.as_deref().unwrap_or(""), needle)
            || contains_ci(self.email.as_deref().unwrap_or(""), needle)
    }
}

impl Sortable for Client {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "document" => self
                .document_type
                .code()
                .cmp(other.document_type.code())
                .then_with(|| self.document_number.cmp(&other.document_number)),
            "active" => self.active.cmp(&other.active),
            _ => cmp_text(&self.name, &other.name),
        }
    }
}

impl ActiveRecord for Client {
    fn id(&self) -> i64 {
        self.id
    }
    fn is_active(&self) -> bool {
        self.active
    }
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

impl CrudEntity for Client {
    const RESOURCE: &'static str = "/clients";
    const TITLE: &'static str = "Clientes";
    const PAGE_ID: &'static str = "clients--list";
    const SEARCH_HINT: &'static str = "Nombre, documento, teléfono o correo...";
    const DEFAULT_SORT: &'static str = "name";

    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            col("Documento", "document"),
            col("Nombre", "name"),
            plain("Teléfono"),
            plain("Correo"),
        ];
        COLUMNS
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn cells(&self) -> AnyView {
        view! {
            {text_cell(format!("{} {}", self.document_type.code(), self.document_number))}
            {text_cell(self.name.clone())}
            {text_cell(self.phone.clone().unwrap_or_default())}
            {text_cell(self.email.clone().unwrap_or_default())}
        }
        .into_any()
    }

    fn editor(record: Option<Self>, on_saved: Callback<()>, on_cancel: Callback<()>) -> AnyView {
        view! { <ClientDetails record=record on_saved=on_saved on_cancel=on_cancel /> }.into_any()
    }
}

#[component]
pub fn ClientsList() -> impl IntoView {
    crud_list_view::<Client>()
}
