use contracts::domain::a010_cash_session::{CashSession, CashSessionStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

use crate::domain::a010_cash_session::api;
use crate::shared::components::{ErrorAlert, ListToolbar, SortableHeader};
use crate::shared::config::use_config;
use crate::shared::crud_page::text_cell;
use crate::shared::date_utils::format_datetime;
use crate::shared::export::{export_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_text, contains_ci, in_date_range, ListController, Searchable, Sortable};
use crate::shared::number_format::format_money;
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_LIST};
use crate::shared::toast::use_toast;

impl Searchable for CashSession {
    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.user_name, needle) || contains_ci(self.notes.as_deref().unwrap_or(""), needle)
    }
}

impl Sortable for CashSession {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        let opt = |v: Option<f64>| v.unwrap_or(0.0);
        match field {
            "user" => cmp_text(&self.user_name, &other.user_name),
            "opening" => self.opening_amount.total_cmp(&other.opening_amount),
            "difference" => opt(self.difference).total_cmp(&opt(other.difference)),
            _ => self.opened_at.cmp(&other.opened_at),
        }
    }
}

fn amount(v: Option<f64>) -> String {
    v.map(format_money).unwrap_or_else(|| "-".to_string())
}

impl CsvExportable for CashSession {
    fn headers() -> Vec<&'static str> {
        vec![
            "Apertura",
            "Cierre",
            "Usuario",
            "Monto inicial",
            "Esperado",
            "Contado",
            "Diferencia",
            "Estado",
            "Observación",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        let raw = |v: Option<f64>| v.map(|x| format!("{:.2}", x)).unwrap_or_default();
        vec![
            self.opened_at.clone(),
            self.closed_at.clone().unwrap_or_default(),
            self.user_name.clone(),
            format!("{:.2}", self.opening_amount),
            raw(self.expected_amount),
            raw(self.counted_amount),
            raw(self.difference),
            self.status.label().to_string(),
            self.notes.clone().unwrap_or_default(),
        ]
    }
}

#[component]
pub fn CashHistoryList() -> impl IntoView {
    let cfg = use_config();
    let toast = use_toast();
    let list = ListController::<CashSession>::with_filter("opened", cfg.ui.page_size, |s, st| {
        in_date_range(&s.opened_at, &st.date_from, &st.date_to)
    });
    list.state.update(|s| s.sort_ascending = false);
    let error = RwSignal::new(Option::<String>::None);
    let loading = RwSignal::new(false);

    let load_data = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::fetch_history().await {
                Ok(data) => list.set_data(data),
                Err(e) => error.set(Some(e.user_message())),
            }
            loading.set(false);
        });
    };
    load_data();

    let state = list.state;

    view! {
        <PageFrame page_id="cash_history--list" category=PAGE_CAT_LIST>
            <PageHeader title="Historial de cajas" count=Signal::derive(move || state.with(|s| s.total_count))>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| {
                        if let Err(e) = export_csv(&list.filtered(), "historial_cajas.csv") {
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
                <ListToolbar controller=list placeholder="Usuario u observación..." with_dates=true />
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeader controller=list field="opened" label="Apertura" />
                                <TableHeaderCell>"Cierre"</TableHeaderCell>
                                <SortableHeader controller=list field="user" label="Usuario" />
                                <SortableHeader controller=list field="opening" label="Inicial" />
                                <TableHeaderCell>"Esperado"</TableHeaderCell>
                                <TableHeaderCell>"Contado"</TableHeaderCell>
                                <SortableHeader controller=list field="difference" label="Diferencia" />
                                <TableHeaderCell>"Estado"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || state.with(|s| s.items.clone()).into_iter().map(|s| {
                                let color = match s.status {
                                    CashSessionStatus::Open => BadgeColor::Success,
                                    CashSessionStatus::Closed => BadgeColor::Informative,
                                };
                                view! {
                                    <TableRow>
                                        {text_cell(format_datetime(&s.opened_at))}
                                        {text_cell(s.closed_at.as_deref().map(format_datetime).unwrap_or_default())}
                                        {text_cell(s.user_name.clone())}
                                        {text_cell(format_money(s.opening_amount))}
                                        {text_cell(amount(s.expected_amount))}
                                        {text_cell(amount(s.counted_amount))}
                                        {text_cell(amount(s.difference))}
                                        <TableCell>
                                            <Badge appearance=BadgeAppearance::Tint color=color>{s.status.label()}</Badge>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_placeholder() {
        assert_eq!(amount(None), "-");
        assert_eq!(amount(Some(-0.5)), "-0.50");
    }
}
