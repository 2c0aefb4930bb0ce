use contracts::domain::a001_category::Category;
use leptos::prelude::*;
use std::cmp::Ordering;

use super::details::CategoryDetails;
use crate::shared::crud::ActiveRecord;
use crate::shared::crud_page::{col, crud_list_view, plain, text_cell, Column, CrudEntity};
use crate::shared::list_utils::{cmp_text, contains_ci, Searchable, Sortable};

impl Searchable for Category {
    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.name, needle)
            || contains_ci(self.description.as_deref().unwrap_or(""), needle)
    }
}

impl Sortable for Category {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "active" => self.active.cmp(&other.active),
            _ => cmp_text(&self.name, &other.name),
        }
    }
}

impl ActiveRecord for Category {
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

impl CrudEntity for Category {
    const RESOURCE: &'static str = "/categories";
    const TITLE: &'static str = "Categorías";
    const PAGE_ID: &'static str = "categories--list";
    const SEARCH_HINT: &'static str = "Nombre o descripción...";
    const DEFAULT_SORT: &'static str = "name";

    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[col("Nombre", "name"), plain("Descripción")];
        COLUMNS
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn cells(&self) -> AnyView {
        view! {
            {text_cell(self.name.clone())}
            {text_cell(self.description.clone().unwrap_or_default())}
        }
        .into_any()
    }

    fn editor(record: Option<Self>, on_saved: Callback<()>, on_cancel: Callback<()>) -> AnyView {
        view! { <CategoryDetails record=record on_saved=on_saved on_cancel=on_cancel /> }.into_any()
    }
}

#[component]
pub fn CategoriesList() -> impl IntoView {
    crud_list_view::<Category>()
}
