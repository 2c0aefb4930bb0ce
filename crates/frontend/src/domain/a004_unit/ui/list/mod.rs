use contracts::domain::a004_unit::Unit;
use leptos::prelude::*;
use std::cmp::Ordering;

use super::details::UnitDetails;
use crate::shared::crud::ActiveRecord;
use crate::shared::crud_page::{col, crud_list_view, text_cell, Column, CrudEntity};
use crate::shared::list_utils::{cmp_text, contains_ci, Searchable, Sortable};

impl Searchable for Unit {
    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.name, needle) || contains_ci(&self.abbreviation, needle)
    }
}

impl Sortable for Unit {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "abbreviation" => cmp_text(&self.abbreviation, &other.abbreviation),
            "active" => self.active.cmp(&other.active),
            _ => cmp_text(&self.name, &other.name),
        }
    }
}

impl ActiveRecord for Unit {
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

impl CrudEntity for Unit {
    const RESOURCE: &'static str = "/units";
    const TITLE: &'static str = "Unidades de medida";
    const PAGE_ID: &'static str = "units--list";
    const SEARCH_HINT: &'static str = "Nombre o abreviatura...";
    const DEFAULT_SORT: &'static str = "name";

    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[col("Nombre", "name"), col("Abreviatura", "abbreviation")];
        COLUMNS
    }

    fn label(&self) -> String {
        format!("{} ({})", self.name, self.abbreviation)
    }

    fn cells(&self) -> AnyView {
        view! {
            {text_cell(self.name.clone())}
            {text_cell(self.abbreviation.clone())}
        }
        .into_any()
    }

    fn editor(record: Option<Self>, on_saved: Callback<()>, on_cancel: Callback<()>) -> AnyView {
        view! { <UnitDetails record=record on_saved=on_saved on_cancel=on_cancel /> }.into_any()
    }
}

#[component]
pub fn UnitsList() -> impl IntoView {
    crud_list_view::<Unit>()
}
