use contracts::domain::a005_payment_method::PaymentMethod;
use leptos::prelude::*;
use std::cmp::Ordering;

use super::details::PaymentMethodDetails;
use crate::shared::crud::ActiveRecord;
use crate::shared::crud_page::{col, crud_list_view, text_cell, Column, CrudEntity};
use crate::shared::list_utils::{cmp_text, contains_ci, Searchable, Sortable};

impl Searchable for PaymentMethod {
    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.name, needle)
    }
}

impl Sortable for PaymentMethod {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "is_cash" => self.is_cash.cmp(&other.is_cash),
            "active" => self.active.cmp(&other.active),
            _ => cmp_text(&self.name, &other.name),
        }
    }
}

impl ActiveRecord for PaymentMethod {
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

impl CrudEntity for PaymentMethod {
    const RESOURCE: &'static str = "/payment-methods";
    const TITLE: &'static str = "Métodos de pago";
    const PAGE_ID: &'static str = "payment_methods--list";
    const SEARCH_HINT: &'static str = "Nombre del método...";
    const DEFAULT_SORT: &'static str = "name";

    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[col("Nombre", "name"), col("Tipo", "is_cash")];
        COLUMNS
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn cells(&self) -> AnyView {
        view! {
            {text_cell(self.name.clone())}
            {text_cell(if self.is_cash { "Efectivo" } else { "No efectivo" })}
        }
        .into_any()
    }

    fn editor(record: Option<Self>, on_saved: Callback<()>, on_cancel: Callback<()>) -> AnyView {
        view! { <PaymentMethodDetails record=record on_saved=on_saved on_cancel=on_cancel /> }.into_any()
    }
}

#[component]
pub fn PaymentMethodsList() -> impl IntoView {
    crud_list_view::<PaymentMethod>()
}
