use contracts::domain::a009_presentation::Presentation;
use contracts::domain::a011_inventory::kardex::totals;
use contracts::domain::a011_inventory::{build_kardex, KardexRow, KardexTotals};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a009_presentation::api::fetch_presentations;
use crate::domain::a009_presentation::ui::picker::PresentationPicker;
use crate::domain::a011_inventory::api;
use crate::shared::components::ErrorAlert;
use crate::shared::date_utils::format_date;
use crate::shared::export::{export_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::number_format::{format_money, format_quantity};
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_REPORT};
use crate::shared::toast::use_toast;

impl CsvExportable for KardexRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "Fecha",
            "Documento",
            "Tipo",
            "Entrada cant.",
            "Entrada costo",
            "Entrada total",
            "Salida cant.",
            "Salida costo",
            "Salida total",
            "Saldo cant.",
            "Saldo costo",
            "Saldo total",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        let n = |v: f64| format!("{:.2}", v);
        vec![
            self.date.clone(),
            self.document.clone(),
            self.kind.label().to_string(),
            format_quantity(self.in_quantity),
            n(self.in_unit_cost),
            n(self.in_total),
            format_quantity(self.out_quantity),
            n(self.out_unit_cost),
            n(self.out_total),
            format_quantity(self.balance_quantity),
            n(self.balance_unit_cost),
            n(self.balance_total),
        ]
    }
}

/// Пустые ячейки вместо нулей в колонках, не относящихся к движению
fn blank_zero(value: f64, fmt: fn(f64) -> String) -> String {
    if value == 0.0 {
        String::new()
    } else {
        fmt(value)
    }
}

#[component]
pub fn KardexPage() -> impl IntoView {
    let toast = use_toast();
    let presentations = RwSignal::new(Vec::<Presentation>::new());
    let selected = RwSignal::new(Option::<Presentation>::None);
    let rows = RwSignal::new(Vec::<KardexRow>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    spawn_local(async move {
        match fetch_presentations().await {
            Ok(list) => presentations.set(list),
            Err(e) => error.set(Some(e.user_message())),
        }
    });

    let on_pick = Callback::new(move |p: Presentation| {
        let id = p.id;
        selected.set(Some(p));
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::fetch_kardex(id).await {
                Ok(movements) => rows.set(build_kardex(&movements)),
                Err(e) => {
                    rows.set(Vec::new());
                    error.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        });
    });

    let sums = Memo::new(move |_| rows.with(|r| totals(r)));

    let export = move |_: leptos::ev::MouseEvent| {
        let name = selected
            .with_untracked(|p| p.as_ref().map(|p| format!("kardex_{}.csv", p.id)))
            .unwrap_or_else(|| "kardex.csv".to_string());
        if let Err(e) = rows.with_untracked(|r| export_csv(r, &name)) {
            toast.error(e);
        }
    };

    view! {
        <PageFrame page_id="kardex--report" category=PAGE_CAT_REPORT>
            <PageHeader title="Kardex">
                <Button appearance=ButtonAppearance::Secondary on_click=export>
                    {icon("download")}
                    " CSV"
                </Button>
            </PageHeader>
            <div class="page__content">
                <ErrorAlert error=error />
                <PresentationPicker items=presentations on_pick=on_pick />
                {move || selected.get().map(|p| view! {
                    <div class="picker__selected">
                        <b>{p.full_name()}</b>
                        " · stock actual: "
                        {format_quantity(p.stock)}
                    </div>
                })}
                <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;" class="kardex-table">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Fecha"</TableHeaderCell>
                                    <TableHeaderCell>"Documento"</TableHeaderCell>
                                    <TableHeaderCell>"Ent. cant."</TableHeaderCell>
                                    <TableHeaderCell>"Ent. costo"</TableHeaderCell>
                                    <TableHeaderCell>"Ent. total"</TableHeaderCell>
                                    <TableHeaderCell>"Sal. cant."</TableHeaderCell>
                                    <TableHeaderCell>"Sal. costo"</TableHeaderCell>
                                    <TableHeaderCell>"Sal. total"</TableHeaderCell>
                                    <TableHeaderCell>"Saldo cant."</TableHeaderCell>
                                    <TableHeaderCell>"Costo prom."</TableHeaderCell>
                                    <TableHeaderCell>"Saldo valor"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || rows.get().into_iter().map(|r| {
                                    let row_class = if r.overdrawn { "kardex-row kardex-row--overdrawn" } else { "kardex-row" };
                                    view! {
                                        <TableRow class=row_class>
                                            <TableCell>{format_date(&r.date)}</TableCell>
                                            <TableCell>
                                                {r.document.clone()}
                                                {r.overdrawn.then(|| view! {
                                                    <span class="kardex-row__flag" title="Salida mayor que el saldo">" ⚠"</span>
                                                })}
                                            </TableCell>
                                            <TableCell>{blank_zero(r.in_quantity, format_quantity)}</TableCell>
                                            <TableCell>{blank_zero(r.in_unit_cost, format_money)}</TableCell>
                                            <TableCell>{blank_zero(r.in_total, format_money)}</TableCell>
                                            <TableCell>{blank_zero(r.out_quantity, format_quantity)}</TableCell>
                                            <TableCell>{blank_zero(r.out_unit_cost, format_money)}</TableCell>
                                            <TableCell>{blank_zero(r.out_total, format_money)}</TableCell>
                                            <TableCell>{format_quantity(r.balance_quantity)}</TableCell>
                                            <TableCell>{format_money(r.balance_unit_cost)}</TableCell>
                                            <TableCell>{format_money(r.balance_total)}</TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()}
                                {move || {
                                    let t: KardexTotals = sums.get();
                                    view! {
                                        <TableRow class="kardex-row kardex-row--totals">
                                            <TableCell>"Totales"</TableCell>
                                            <TableCell>""</TableCell>
                                            <TableCell>{format_quantity(t.in_quantity)}</TableCell>
                                            <TableCell>""</TableCell>
                                            <TableCell>{format_money(t.in_total)}</TableCell>
                                            <TableCell>{format_quantity(t.out_quantity)}</TableCell>
                                            <TableCell>""</TableCell>
                                            <TableCell>{format_money(t.out_total)}</TableCell>
                                            <TableCell>""</TableCell>
                                            <TableCell>""</TableCell>
                                            <TableCell>""</TableCell>
                                        </TableRow>
                                    }
                                }}
                            </TableBody>
                        </Table>
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_zero() {
        assert_eq!(blank_zero(0.0, format_money), "");
        assert_eq!(blank_zero(2.5, format_money), "2.50");
    }
}
