use contracts::dashboards::d400_sales_report::{
    by_payment_method, report_totals, top_products, MethodBreakdown, SalesReportRequest,
    SalesReportRow, TopProduct,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d400_sales_report::api;
use crate::shared::components::ErrorAlert;
use crate::shared::config::use_config;
use crate::shared::date_utils::{format_date, month_start_iso, today_iso};
use crate::shared::export::{export_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::number_format::{format_currency, format_money, format_percent, format_quantity};
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_REPORT};
use crate::shared::toast::use_toast;

const TOP_LIMIT: usize = 10;

impl CsvExportable for SalesReportRow {
    fn headers() -> Vec<&'static str> {
        vec!["Venta", "Fecha", "Producto", "Cantidad", "Importe", "Método de pago"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.sale_number.clone(),
            self.date.clone(),
            self.product_name.clone(),
            format_quantity(self.quantity),
            format!("{:.2}", self.amount),
            self.payment_method.clone(),
        ]
    }
}

impl CsvExportable for MethodBreakdown {
    fn headers() -> Vec<&'static str> {
        vec!["Método de pago", "Importe", "Participación %"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.method.clone(),
            format!("{:.2}", self.amount),
            format!("{:.2}", self.share),
        ]
    }
}

impl CsvExportable for TopProduct {
    fn headers() -> Vec<&'static str> {
        vec!["Producto", "Cantidad", "Importe"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.product_name.clone(),
            format_quantity(self.quantity),
            format!("{:.2}", self.amount),
        ]
    }
}

#[component]
pub fn SalesReportPage() -> impl IntoView {
    let toast = use_toast();
    let currency = StoredValue::new(use_config().cash.currency);
    let money = move |v: f64| currency.with_value(|c| format_currency(c, v));

    let date_from = RwSignal::new(month_start_iso());
    let date_to = RwSignal::new(today_iso());
    let rows = RwSignal::new(Vec::<SalesReportRow>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let totals = Memo::new(move |_| rows.with(|r| report_totals(r)));
    let methods = Memo::new(move |_| rows.with(|r| by_payment_method(r)));
    let top = Memo::new(move |_| rows.with(|r| top_products(r, TOP_LIMIT)));

    let load = move || {
        let req = SalesReportRequest {
            from: date_from.get_untracked(),
            to: date_to.get_untracked(),
        };
        if let Err(msg) = api::validate_range(&req) {
            error.set(Some(msg));
            return;
        }
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::get_sales_report(&req).await {
                Ok(data) => {
                    log::debug!("sales report {}..{}: {} rows", req.from, req.to, data.len());
                    rows.set(data);
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            loading.set(false);
        });
    };
    load();

    let export = move |what: &'static str| {
        let stamp = format!("{}_{}", date_from.get_untracked(), date_to.get_untracked());
        let result = match what {
            "methods" => export_csv(&methods.get_untracked(), &format!("ventas_por_metodo_{}.csv", stamp)),
            "top" => export_csv(&top.get_untracked(), &format!("top_productos_{}.csv", stamp)),
            _ => rows.with_untracked(|r| export_csv(r, &format!("reporte_ventas_{}.csv", stamp))),
        };
        if let Err(e) = result {
            toast.error(e);
        }
    };

    view! {
        <PageFrame page_id="reports--report" category=PAGE_CAT_REPORT>
            <PageHeader title="Reporte de ventas">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| export("rows")>
                    {icon("download")}
                    " Detalle CSV"
                </Button>
            </PageHeader>
            <div class="page__content">
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <div class="form__group">
                        <label class="form__label">"Desde"</label>
                        <input
                            type="date"
                            class="form__input"
                            prop:value=move || date_from.get()
                            on:change=move |ev| date_from.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Hasta"</label>
                        <input
                            type="date"
                            class="form__input"
                            prop:value=move || date_to.get()
                            on:change=move |ev| date_to.set(event_target_value(&ev))
                        />
                    </div>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| load() disabled=loading>
                        {icon("bar-chart")}
                        " Generar"
                    </Button>
                </Flex>
                <ErrorAlert error=error />

                <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                    <div class="stat-grid">
                        <div class="stat">
                            <span class="stat__label">"Ventas"</span>
                            <span class="stat__value">{move || totals.get().sales_count.to_string()}</span>
                        </div>
                        <div class="stat">
                            <span class="stat__label">"Unidades"</span>
                            <span class="stat__value">{move || format_quantity(totals.get().units)}</span>
                        </div>
                        <div class="stat">
                            <span class="stat__label">"Total vendido"</span>
                            <span class="stat__value">{move || money(totals.get().amount)}</span>
                        </div>
                        <div class="stat">
                            <span class="stat__label">"Ticket promedio"</span>
                            <span class="stat__value">{move || money(totals.get().average_ticket)}</span>
                        </div>
                    </div>

                    <div class="report__grid">
                        <div class="card">
                            <div class="card__header">
                                <h3 class="card__title">"Por método de pago"</h3>
                                <Button appearance=ButtonAppearance::Subtle size=ButtonSize::Small on_click=move |_| export("methods")>
                                    {icon("download")}
                                </Button>
                            </div>
                            <Table>
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>"Método"</TableHeaderCell>
                                        <TableHeaderCell>"Importe"</TableHeaderCell>
                                        <TableHeaderCell>"%"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {move || methods.get().into_iter().map(|m| view! {
                                        <TableRow>
                                            <TableCell>{m.method}</TableCell>
                                            <TableCell>{format_money(m.amount)}</TableCell>
                                            <TableCell>{format_percent(m.share)}</TableCell>
                                        </TableRow>
                                    }).collect_view()}
                                </TableBody>
                            </Table>
                        </div>

                        <div class="card">
                            <div class="card__header">
                                <h3 class="card__title">"Productos más vendidos"</h3>
                                <Button appearance=ButtonAppearance::Subtle size=ButtonSize::Small on_click=move |_| export("top")>
                                    {icon("download")}
                                </Button>
                            </div>
                            <Table>
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>"#"</TableHeaderCell>
                                        <TableHeaderCell>"Producto"</TableHeaderCell>
                                        <TableHeaderCell>"Cantidad"</TableHeaderCell>
                                        <TableHeaderCell>"Importe"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {move || top.get().into_iter().enumerate().map(|(i, p)| view! {
                                        <TableRow>
                                            <TableCell>{(i + 1).to_string()}</TableCell>
                                            <TableCell>{p.product_name}</TableCell>
                                            <TableCell>{format_quantity(p.quantity)}</TableCell>
                                            <TableCell>{format_money(p.amount)}</TableCell>
                                        </TableRow>
                                    }).collect_view()}
                                </TableBody>
                            </Table>
                        </div>
                    </div>

                    <Show when=move || rows.with(|r| r.is_empty())>
                        <div class="report__empty">
                            {move || format!(
                                "Sin ventas entre {} y {}",
                                format_date(&date_from.get()),
                                format_date(&date_to.get())
                            )}
                        </div>
                    </Show>
                </Show>
            </div>
        </PageFrame>
    }
}
