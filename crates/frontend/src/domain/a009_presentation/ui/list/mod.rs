use contracts::domain::a001_category::Category;
use contracts::domain::a009_presentation::Presentation;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

use super::details::PresentationDetails;
use crate::domain::a009_presentation::api::{self, RESOURCE};
use crate::shared::components::{ActiveToggle, ErrorAlert, ListToolbar, MoneyCell, SortableHeader};
use crate::shared::config::use_config;
use crate::shared::crud::{self, load_options, ActiveRecord};
use crate::shared::crud_page::{text_cell, CrudEntity};
use crate::shared::export::{export_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_text, contains_ci, ListController, Searchable, Sortable};
use crate::shared::number_format::{format_money, format_percent, format_quantity};
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_LIST};
use crate::shared::toast::use_toast;

impl Searchable for Presentation {
    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.full_name(), needle)
            || contains_ci(self.barcode.as_deref().unwrap_or(""), needle)
    }
}

impl Sortable for Presentation {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_text(&self.name, &other.name),
            "cost" => self.cost_price.total_cmp(&other.cost_price),
            "sale" => self.sale_price.total_cmp(&other.sale_price),
            "margin" => self.margin_percent().total_cmp(&other.margin_percent()),
            "stock" => self.stock.total_cmp(&other.stock),
            _ => cmp_text(&self.full_name(), &other.full_name()),
        }
    }
}

impl ActiveRecord for Presentation {
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

impl CsvExportable for Presentation {
    fn headers() -> Vec<&'static str> {
        vec![
            "Producto",
            "Presentación",
            "Código de barras",
            "Precio compra",
            "Precio venta",
            "Margen %",
            "Stock",
            "Stock mínimo",
            "Activo",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.product_name.clone(),
            self.name.clone(),
            self.barcode.clone().unwrap_or_default(),
            format!("{:.2}", self.cost_price),
            format!("{:.2}", self.sale_price),
            format!("{:.2}", self.margin_percent()),
            format_quantity(self.stock),
            format_quantity(self.min_stock),
            if self.active { "Sí" } else { "No" }.to_string(),
        ]
    }
}

/// Фильтр категории (`""` = все) и «только с низким остатком»
pub fn passes_filters(p: &Presentation, category: &str, only_low: bool) -> bool {
    let category_ok = category.is_empty()
        || p.category_id.map(|c| c.to_string()).as_deref() == Some(category);
    category_ok && (!only_low || p.is_low_stock())
}

#[component]
pub fn PresentationsList() -> impl IntoView {
    let cfg = use_config();
    let toast = use_toast();
    let category = RwSignal::new(String::new());
    let only_low = RwSignal::new(false);
    let list = ListController::<Presentation>::with_filter("product", cfg.ui.page_size, move |p, _| {
        passes_filters(p, &category.get_untracked(), only_low.get_untracked())
    });
    let error = RwSignal::new(Option::<String>::None);
    let loading = RwSignal::new(false);
    let editing = RwSignal::new(Option::<Option<Presentation>>::None);
    let categories = load_options::<Category>(Category::RESOURCE, |c| c.active.then(|| (c.id, c.name.clone())));

    let load_data = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::fetch_presentations().await {
                Ok(data) => list.set_data(data),
                Err(e) => error.set(Some(e.user_message())),
            }
            loading.set(false);
        });
    };
    load_data();

    let export = move |_: leptos::ev::MouseEvent| {
        if let Err(e) = export_csv(&list.filtered(), "presentaciones.csv") {
            toast.error(e);
        }
    };
    let on_saved = Callback::new(move |_| {
        editing.set(None);
        load_data();
    });
    let on_cancel = Callback::new(move |_| editing.set(None));
    let state = list.state;

    view! {
        <PageFrame page_id="presentations--list" category=PAGE_CAT_LIST>
            <PageHeader title="Presentaciones" count=Signal::derive(move || state.with(|s| s.total_count))>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(None))>
                    {icon("plus")}
                    " Nuevo"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=export>
                    {icon("download")}
                    " CSV"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load_data() disabled=loading>
                    {icon("refresh")}
                    " Actualizar"
                </Button>
            </PageHeader>

            <div class="page__content">
                <ErrorAlert error=error />
                <ListToolbar controller=list placeholder="Producto, presentación o código...">
                    <div class="form__group">
                        <label class="form__label">"Categoría"</label>
                        <select
                            class="form__select"
                            on:change=move |ev| {
                                category.set(event_target_value(&ev));
                                list.refresh_view();
                            }
                        >
                            <option value="">"Todas"</option>
                            {move || categories.get().into_iter().map(|(id, name)| {
                                view! { <option value=id>{name}</option> }
                            }).collect_view()}
                        </select>
                    </div>
                    <label class="form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || only_low.get()
                            on:change=move |ev| {
                                only_low.set(event_target_checked(&ev));
                                list.refresh_view();
                            }
                        />
                        " Solo stock bajo"
                    </label>
                </ListToolbar>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeader controller=list field="product" label="Producto" />
                                <SortableHeader controller=list field="name" label="Presentación" />
                                <TableHeaderCell>"Código"</TableHeaderCell>
                                <SortableHeader controller=list field="cost" label="P. compra" />
                                <SortableHeader controller=list field="sale" label="P. venta" />
                                <SortableHeader controller=list field="margin" label="Margen" />
                                <SortableHeader controller=list field="stock" label="Stock" />
                                <TableHeaderCell>"Mínimo"</TableHeaderCell>
                                <TableHeaderCell>"Activo"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || state.with(|s| s.items.clone()).into_iter().map(|p| {
                                let id = p.id;
                                let label = p.full_name();
                                let low = p.is_low_stock();
                                let for_edit = p.clone();
                                view! {
                                    <TableRow>
                                        {text_cell(p.product_name.clone())}
                                        {text_cell(p.name.clone())}
                                        {text_cell(p.barcode.clone().unwrap_or_default())}
                                        <MoneyCell value=p.cost_price />
                                        <MoneyCell value=p.sale_price />
                                        {text_cell(format_percent(p.margin_percent()))}
                                        <TableCell>
                                            <span class=if low { "stock stock--low" } else { "stock" }>
                                                {format_quantity(p.stock)}
                                            </span>
                                        </TableCell>
                                        {text_cell(format_quantity(p.min_stock))}
                                        <TableCell>
                                            <ActiveToggle
                                                active=p.active
                                                on_toggle=Callback::new(move |on| crud::toggle_active(list, RESOURCE, id, on, toast))
                                            />
                                        </TableCell>
                                        <TableCell>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                size=ButtonSize::Small
                                                on_click=move |_| editing.set(Some(Some(for_edit.clone())))
                                            >
                                                {icon("edit")}
                                            </Button>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                size=ButtonSize::Small
                                                on_click=move |_| crud::delete_with_confirm(RESOURCE, id, label.clone(), toast, load_data)
                                            >
                                                {icon("delete")}
                                            </Button>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </div>
                <div class="table__footer-note">
                    {move || {
                        let low = list.all.with(|all| all.iter().filter(|p| p.active && p.is_low_stock()).count());
                        (low > 0).then(|| format!("{} presentaciones con stock bajo", low))
                    }}
                    {move || format!(" · Valor de venta: {}", format_money(
                        list.all.with(|all| all.iter().map(|p| p.stock * p.sale_price).sum::<f64>())
                    ))}
                </div>
            </div>

            {move || editing.get().map(|record| view! {
                <PresentationDetails record=record on_saved=on_saved on_cancel=on_cancel />
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pres(category: Option<i64>, stock: f64, min: f64) -> Presentation {
        Presentation {
            id: 1,
            product_id: 1,
            product_name: "Arroz".into(),
            category_id: category,
            name: "1 kg".into(),
            barcode: None,
            unit_id: Some(1),
            color_id: None,
            cost_price: 3.0,
            sale_price: 4.0,
            stock,
            min_stock: min,
            active: true,
        }
    }

    #[test]
    fn test_filters() {
        let p = pres(Some(3), 1.0, 5.0);
        assert!(passes_filters(&p, "", false));
        assert!(passes_filters(&p, "3", true));
        assert!(!passes_filters(&p, "4", false));
        assert!(!passes_filters(&pres(Some(3), 10.0, 5.0), "", true));
        assert!(!passes_filters(&pres(None, 1.0, 5.0), "3", false));
    }

    #[test]
    fn test_csv_row() {
        let row = pres(None, 2.0, 1.0).to_csv_row();
        assert_eq!(row.len(), Presentation::headers().len());
        assert_eq!(row[3], "3.00");
        assert_eq!(row[5], "25.00");
    }
}
