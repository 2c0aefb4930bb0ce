use contracts::domain::a002_brand::Brand;
use leptos::prelude::*;
use std::cmp::Ordering;

use super::details::BrandDetails;
use crate::shared::crud::ActiveRecord;
use crate::shared::crud_page::{col, crud_list_view, text_cell, Column, CrudEntity};
use crate::shared::list_utils::{cmp_text, contains_ci, Searchable, Sortable};

impl Searchable for Brand {
    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.name, needle)
    }
}

impl Sortable for Brand {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "active" => self.active.cmp(&other.active),
            _ => cmp_text(&self.name, &other.name),
        }
    }
}

impl ActiveRecord for Brand {
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

impl CrudEntity for Brand {
    const RESOURCE: &'static str = "/brands";
    const TITLE: &'static str = "Marcas";
    const PAGE_ID: &'static str = "brands--list";
    const SEARCH_HINT: &'static str = "Nombre de la marca...";
    const DEFAULT_SORT: &'static str = "name";

    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[col("Nombre", "name")];
        COLUMNS
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn cells(&self) -> AnyView {
        text_cell(self.name.clone()).into_any()
    }

    fn editor(record: Option<Self>, on_saved: Callback<()>, on_cancel: Callback<()>) -> AnyView {
        view! { <BrandDetails record=record on_saved=on_saved on_cancel=on_cancel /> }.into_any()
    }
}

#[component]
pub fn BrandsList() -> impl IntoView {
    crud_list_view::<Brand>()
}
