use contracts::domain::a008_product::Product;
use leptos::prelude::*;
use std::cmp::Ordering;

use super::details::ProductDetails;
use crate::shared::crud::ActiveRecord;
use crate::shared::crud_page::{col, crud_list_view, plain, text_cell, Column, CrudEntity};
use crate::shared::list_utils::{cmp_text, contains_ci, Searchable, Sortable};

impl Searchable for Product {
    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.name, needle)
            || contains_ci(&self.category_name, needle)
            || contains_ci(self.brand_name.as_deref().unwrap_or(""), needle)
    }
}

impl Sortable for Product {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "category" => cmp_text(&self.category_name, &other.category_name),
            "brand" => cmp_text(
                self.brand_name.as_deref().unwrap_or(""),
                other.brand_name.as_deref().unwrap_or(""),
            ),
            "active" => self.active.cmp(&other.active),
            _ => cmp_text(&self.name, &other.name),
        }
    }
}

impl ActiveRecord for Product {
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

impl CrudEntity for Product {
    const RESOURCE: &'static str = "/products";
    const TITLE: &'static str = "Productos";
    const PAGE_ID: &'static str = "products--list";
    const SEARCH_HINT: &'static str = "Nombre, categoría o marca...";
    const DEFAULT_SORT: &'static str = "name";

    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            col("Nombre", "name"),
            col("Categoría", "category"),
            col("Marca", "brand"),
            plain("Descripción"),
        ];
        COLUMNS
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn cells(&self) -> AnyView {
        view! {
            {text_cell(self.name.clone())}
            {text_cell(self.category_name.clone())}
            {text_cell(self.brand_name.clone().unwrap_or_default())}
            {text_cell(self.description.clone().unwrap_or_default())}
        }
        .into_any()
    }

    fn editor(record: Option<Self>, on_saved: Callback<()>, on_cancel: Callback<()>) -> AnyView {
        view! { <ProductDetails record=record on_saved=on_saved on_cancel=on_cancel /> }.into_any()
    }
}

#[component]
pub fn ProductsList() -> impl IntoView {
    crud_list_view::<Product>()
}
