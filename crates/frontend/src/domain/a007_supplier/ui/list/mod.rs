use contracts::domain::a007_supplier::Supplier;
use leptos::prelude::*;
use std::cmp::Ordering;

use super::details::SupplierDetails;
use crate::shared::crud::ActiveRecord;
use crate::shared::crud_page::{col, crud_list_view, plain, text_cell, Column, CrudEntity};
use crate::shared::list_utils::{cmp_text, contains_ci, Searchable, Sortable};

impl Searchable for Supplier {
    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.business_name, needle)
            || contains_ci(&self.ruc, needle)
            || contains_ci(self.contact_name.as_deref().unwrap_or(""), needle)
    }
}

impl Sortable for Supplier {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "ruc" => self.ruc.cmp(&other.ruc),
            "contact" => cmp_text(
                self.contact_name.as_deref().unwrap_or(""),
                other.contact_name.as_deref().unwrap_or(""),
            ),
            "active" => self.active.cmp(&other.active),
            _ => cmp_text(&self.business_name, &other.business_name),
        }
    }
}

impl ActiveRecord for Supplier {
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

impl CrudEntity for Supplier {
    const RESOURCE: &'static str = "/suppliers";
    const TITLE: &'static str = "Proveedores";
    const PAGE_ID: &'static str = "suppliers--list";
    const SEARCH_HINT: &'static str = "Razón social, RUC o contacto...";
    const DEFAULT_SORT: &'static str = "business_name";

    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            col("RUC", "ruc"),
            col("Razón social", "business_name"),
            col("Contacto", "contact"),
            plain("Teléfono"),
        ];
        COLUMNS
    }

    fn label(&self) -> String {
        self.business_name.clone()
    }

    fn cells(&self) -> AnyView {
        view! {
            {text_cell(self.ruc.clone())}
            {text_cell(self.business_name.clone())}
            {text_cell(self.contact_name.clone().unwrap_or_default())}
            {text_cell(self.phone.clone().unwrap_or_default())}
        }
        .into_any()
    }

    fn editor(record: Option<Self>, on_saved: Callback<()>, on_cancel: Callback<()>) -> AnyView {
        view! { <SupplierDetails record=record on_saved=on_saved on_cancel=on_cancel /> }.into_any()
    }
}

#[component]
pub fn SuppliersList() -> impl IntoView {
    crud_list_view::<Supplier>()
}
