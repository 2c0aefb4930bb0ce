use contracts::domain::a012_sale::{Sale, SaleStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

use crate::domain::a012_sale::api;
use crate::shared::components::{ErrorAlert, ListToolbar, MoneyCell, SortableHeader};
use crate::shared::config::use_config;
use crate::shared::crud::confirm;
use crate::shared::crud_page::text_cell;
use crate::shared::date_utils::format_datetime;
use crate::shared::export::{export_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_text, contains_ci, in_date_range, ListController, Searchable, Sortable};
use crate::shared::modal_frame::{ModalFrame, ModalHeader};
use crate::shared::number_format::{format_money, format_quantity};
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_LIST};
use crate::shared::toast::use_toast;

impl Searchable for Sale {
    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.number, needle)
            || contains_ci(self.client_name.as_deref().unwrap_or(""), needle)
            || contains_ci(&self.user_name, needle)
    }
}

impl Sortable for Sale {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "number" => cmp_text(&self.number, &other.number),
            "client" => cmp_text(
                self.client_name.as_deref().unwrap_or(""),
                other.client_name.as_deref().unwrap_or(""),
            ),
            "total" => self.total.total_cmp(&other.total),
            _ => self.created_at.cmp(&other.created_at),
        }
    }
}

impl CsvExportable for Sale {
    fn headers() -> Vec<&'static str> {
        vec!["Número", "Fecha", "Cliente", "Pagos", "Subtotal", "Descuento", "Total", "Estado", "Usuario"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.number.clone(),
            self.created_at.clone(),
            self.client_name.clone().unwrap_or_default(),
            self.payment_summary(),
            format!("{:.2}", self.subtotal),
            format!("{:.2}", self.discount),
            format!("{:.2}", self.total),
            self.status.label().to_string(),
            self.user_name.clone(),
        ]
    }
}

/// Итог по списку без анулированных продаж
pub fn completed_total(sales: &[Sale]) -> f64 {
    contracts::shared::money::sum(
        sales
            .iter()
            .filter(|s| s.status == SaleStatus::Completed)
            .map(|s| s.total),
    )
}

#[component]
pub fn SalesList() -> impl IntoView {
    let cfg = use_config();
    let toast = use_toast();
    let list = ListController::<Sale>::with_filter("date", cfg.ui.page_size, |s, st| {
        in_date_range(&s.created_at, &st.date_from, &st.date_to)
    });
    list.state.update(|s| s.sort_ascending = false);
    let error = RwSignal::new(Option::<String>::None);
    let loading = RwSignal::new(false);
    let viewing = RwSignal::new(Option::<Sale>::None);

    let load_data = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::fetch_sales().await {
                Ok(data) => list.set_data(data),
                Err(e) => error.set(Some(e.user_message())),
            }
            loading.set(false);
        });
    };
    load_data();

    let void = move |sale: Sale| {
        if !confirm(&format!("¿Anular la venta {}? El stock será devuelto.", sale.number)) {
            return;
        }
        spawn_local(async move {
            match api::void_sale(sale.id).await {
                Ok(()) => {
                    log::info!("sale {} voided", sale.number);
                    toast.success(format!("Venta {} anulada", sale.number));
                    load_data();
                }
                Err(e) => toast.error(e.user_message()),
            }
        });
    };

    let state = list.state;
    let total = Signal::derive(move || {
        state.track();
        completed_total(&list.filtered())
    });

    view! {
        <PageFrame page_id="sales--list" category=PAGE_CAT_LIST>
            <PageHeader title="Ventas" count=Signal::derive(move || state.with(|s| s.total_count))>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| {
                        if let Err(e) = export_csv(&list.filtered(), "ventas.csv") {
                            toast.error(e);
                        }
                    }
                >
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
                <ListToolbar controller=list placeholder="Número, cliente o usuario..." with_dates=true />
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeader controller=list field="number" label="Número" />
                                <SortableHeader controller=list field="date" label="Fecha" />
                                <SortableHeader controller=list field="client" label="Cliente" />
                                <TableHeaderCell>"Pagos"</TableHeaderCell>
                                <SortableHeader controller=list field="total" label="Total" />
                                <TableHeaderCell>"Estado"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || state.with(|s| s.items.clone()).into_iter().map(|sale| {
                                let voided = sale.status == SaleStatus::Voided;
                                let color = if voided { BadgeColor::Danger } else { BadgeColor::Success };
                                let for_view = sale.clone();
                                let for_void = sale.clone();
                                view! {
                                    <TableRow>
                                        {text_cell(sale.number.clone())}
                                        {text_cell(format_datetime(&sale.created_at))}
                                        {text_cell(sale.client_name.clone().unwrap_or_else(|| "Público general".into()))}
                                        {text_cell(sale.payment_summary())}
                                        <MoneyCell value=sale.total />
                                        <TableCell>
                                            <Badge appearance=BadgeAppearance::Tint color=color>{sale.status.label()}</Badge>
                                        </TableCell>
                                        <TableCell>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                size=ButtonSize::Small
                                                on_click=move |_| viewing.set(Some(for_view.clone()))
                                            >
                                                {icon("eye")}
                                            </Button>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                size=ButtonSize::Small
                                                disabled=voided
                                                on_click=move |_| void(for_void.clone())
                                            >
                                                {icon("cancel")}
                                            </Button>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </div>
                <div class="table__footer-note">
                    "Total vendido (sin anuladas): " {move || format_money(total.get())}
                </div>
            </div>
            {move || viewing.get().map(|sale| view! {
                <SaleDetailsModal sale=sale on_close=Callback::new(move |_| viewing.set(None)) />
            })}
        </PageFrame>
    }
}

#[component]
fn SaleDetailsModal(sale: Sale, on_close: Callback<()>) -> impl IntoView {
    let title = format!("Venta {}", sale.number);
    view! {
        <ModalFrame on_close=on_close width="min(720px, 95vw)">
            <ModalHeader title=title on_close=on_close />
            <div class="modal__body">
                <p>
                    {format_datetime(&sale.created_at)}
                    " · "
                    {sale.client_name.clone().unwrap_or_else(|| "Público general".into())}
                    " · "
                    {sale.user_name.clone()}
                </p>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Producto"</TableHeaderCell>
                            <TableHeaderCell>"Cant."</TableHeaderCell>
                            <TableHeaderCell>"Precio"</TableHeaderCell>
                            <TableHeaderCell>"Desc."</TableHeaderCell>
                            <TableHeaderCell>"Importe"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {sale.items.iter().map(|i| {
                            let description = i.description.clone();
                            let quantity = format_quantity(i.quantity);
                            let unit_price = format_money(i.unit_price);
                            let discount = format_money(i.discount);
                            let line_total = format_money(i.line_total());
                            view! {
                                <TableRow>
                                    <TableCell>{description}</TableCell>
                                    <TableCell>{quantity}</TableCell>
                                    <TableCell>{unit_price}</TableCell>
                                    <TableCell>{discount}</TableCell>
                                    <TableCell>{line_total}</TableCell>
                                </TableRow>
                            }
                        }).collect_view()}
                    </TableBody>
                </Table>
                <div class="sale-totals">
                    <div>"Subtotal: " {format_money(sale.subtotal)}</div>
                    <div>"Descuento: " {format_money(sale.discount)}</div>
                    <div><b>"Total: " {format_money(sale.total)}</b></div>
                </div>
                <h4>"Pagos"</h4>
                <ul>
                    {sale.payments.iter().map(|p| view! {
                        <li>{p.method_name.clone()} ": " {format_money(p.amount)}</li>
                    }).collect_view()}
                </ul>
            </div>
        </ModalFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(total: f64, status: SaleStatus) -> Sale {
        Sale {
            id: 1,
            number: "V-0001".into(),
            client_id: None,
            client_name: None,
            session_id: Some(1),
            items: vec![],
            payments: vec![],
            subtotal: total,
            discount: 0.0,
            total,
            status,
            created_at: "2024-05-01T10:00:00".into(),
            user_name: "caja1".into(),
        }
    }

    #[test]
    fn test_completed_total_skips_voided() {
        let sales = vec![
            sale(10.1, SaleStatus::Completed),
            sale(5.0, SaleStatus::Voided),
            sale(0.2, SaleStatus::Completed),
        ];
        assert_eq!(completed_total(&sales), 10.3);
    }
}
