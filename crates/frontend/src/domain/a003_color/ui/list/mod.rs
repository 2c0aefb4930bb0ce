use contracts::domain::a003_color::Color;
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

use super::details::ColorDetails;
use crate::shared::crud::ActiveRecord;
use crate::shared::crud_page::{col, crud_list_view, text_cell, Column, CrudEntity};
use crate::shared::list_utils::{cmp_text, contains_ci, Searchable, Sortable};

impl Searchable for Color {
    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.name, needle) || contains_ci(self.hex.as_deref().unwrap_or(""), needle)
    }
}

impl Sortable for Color {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "hex" => cmp_text(
                self.hex.as_deref().unwrap_or(""),
                other.hex.as_deref().unwrap_or(""),
            ),
            "active" => self.active.cmp(&other.active),
            _ => cmp_text(&self.name, &other.name),
        }
    }
}

impl ActiveRecord for Color {
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

impl CrudEntity for Color {
    const RESOURCE: &'static str = "/colors";
    const TITLE: &'static str = "Colores";
    const PAGE_ID: &'static str = "colors--list";
    const SEARCH_HINT: &'static str = "Nombre o código...";
    const DEFAULT_SORT: &'static str = "name";

    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[col("Nombre", "name"), col("Código", "hex")];
        COLUMNS
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn cells(&self) -> AnyView {
        let hex = self.hex.clone().unwrap_or_default();
        let swatch = (!hex.is_empty()).then(|| format!("background: {};", hex));
        view! {
            {text_cell(self.name.clone())}
            <TableCell>
                <TableCellLayout>
                    {swatch.map(|style| view! { <span class="color-swatch" style=style></span> })}
                    " "
                    {hex}
                </TableCellLayout>
            </TableCell>
        }
        .into_any()
    }

    fn editor(record: Option<Self>, on_saved: Callback<()>, on_cancel: Callback<()>) -> AnyView {
        view! { <ColorDetails record=record on_saved=on_saved on_cancel=on_cancel /> }.into_any()
    }
}

#[component]
pub fn ColorsList() -> impl IntoView {
    crud_list_view::<Color>()
}
