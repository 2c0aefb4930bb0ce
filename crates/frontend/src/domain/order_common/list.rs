use contracts::domain::common::order::{Order, OrderStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

use super::details::order_details_view;
use super::{api, OrderScreen};
use crate::shared::components::{ErrorAlert, ListToolbar, MoneyCell, SortableHeader};
use crate::shared::config::use_config;
use crate::shared::crud_page::text_cell;
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::export::{export_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_text, contains_ci, in_date_range, ListController, Searchable, Sortable};
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::toast::use_toast;

impl Searchable for Order {
    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.number, needle) || contains_ci(&self.party_name, needle)
    }
}

impl Sortable for Order {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "number" => cmp_text(&self.number, &other.number),
            "party" => cmp_text(&self.party_name, &other.party_name),
            "total" => self.balance().total.total_cmp(&other.balance().total),
            "balance" => self.balance().balance.total_cmp(&other.balance().balance),
            _ => self.created_at.cmp(&other.created_at),
        }
    }
}

impl CsvExportable for Order {
    fn headers() -> Vec<&'static str> {
        vec!["Número", "Fecha", "Contraparte", "Entrega", "Total", "Pagado", "Saldo", "Estado"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        let b = self.balance();
        vec![
            self.number.clone(),
            self.created_at.clone(),
            self.party_name.clone(),
            self.expected_date.clone().unwrap_or_default(),
            format!("{:.2}", b.total),
            format!("{:.2}", b.net_paid),
            format!("{:.2}", b.balance),
            self.status.label().to_string(),
        ]
    }
}

/// Фильтр статуса: `""` = все
pub fn status_matches(order: &Order, status_code: &str) -> bool {
    status_code.is_empty() || order.status.code() == status_code
}

pub fn status_color(status: OrderStatus) -> BadgeColor {
    match status {
        OrderStatus::Draft => BadgeColor::Subtle,
        OrderStatus::Confirmed => BadgeColor::Informative,
        OrderStatus::Fulfilled => BadgeColor::Success,
        OrderStatus::Cancelled => BadgeColor::Danger,
    }
}

pub fn order_list_view<K: OrderScreen>() -> impl IntoView {
    let cfg = use_config();
    let toast = use_toast();
    let status_filter = RwSignal::new(String::new());
    let list = ListController::<Order>::with_filter("date", cfg.ui.page_size, move |o, st| {
        in_date_range(&o.created_at, &st.date_from, &st.date_to)
            && status_matches(o, &status_filter.get_untracked())
    });
    list.state.update(|s| s.sort_ascending = false);
    let error = RwSignal::new(Option::<String>::None);
    let loading = RwSignal::new(false);
    // Some(None) = новый заказ
    let editing = RwSignal::new(Option::<Option<Order>>::None);

    let load_data = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::fetch_orders::<K>().await {
                Ok(data) => {
                    log::debug!("{}: {} orders", K::RESOURCE, data.len());
                    list.set_data(data);
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            loading.set(false);
        });
    };
    load_data();

    let on_changed = Callback::new(move |_| load_data());
    let on_close = Callback::new(move |_| editing.set(None));
    let state = list.state;
    let csv_name = format!("{}.csv", K::PAGE_ID);

    view! {
        <PageFrame page_id=K::PAGE_ID category=crate::shared::page_frame::PAGE_CAT_LIST>
            <PageHeader title=K::TITLE count=Signal::derive(move || state.with(|s| s.total_count))>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(None))>
                    {icon("plus")}
                    " Nuevo pedido"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| {
                        if let Err(e) = export_csv(&list.filtered(), &csv_name) {
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
                <ListToolbar controller=list placeholder="Número o nombre..." with_dates=true>
                    <div class="form__group">
                        <label class="form__label">"Estado"</label>
                        <select
                            class="form__select"
                            on:change=move |ev| {
                                status_filter.set(event_target_value(&ev));
                                list.refresh_view();
                            }
                        >
                            <option value="">"Todos"</option>
                            {OrderStatus::ALL.iter().map(|s| view! {
                                <option value=s.code()>{s.label()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                </ListToolbar>
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeader controller=list field="number" label="Número" />
                                <SortableHeader controller=list field="date" label="Fecha" />
                                <SortableHeader controller=list field="party" label=K::PARTY_TITLE />
                                <TableHeaderCell>"Entrega"</TableHeaderCell>
                                <SortableHeader controller=list field="total" label="Total" />
                                <TableHeaderCell>"Pagado"</TableHeaderCell>
                                <SortableHeader controller=list field="balance" label="Saldo" />
                                <TableHeaderCell>"Estado"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || state.with(|s| s.items.clone()).into_iter().map(|o| {
                                let b = o.balance();
                                let for_edit = o.clone();
                                view! {
                                    <TableRow>
                                        {text_cell(o.number.clone())}
                                        {text_cell(format_datetime(&o.created_at))}
                                        {text_cell(o.party_name.clone())}
                                        {text_cell(o.expected_date.as_deref().map(format_date).unwrap_or_default())}
                                        <MoneyCell value=b.total />
                                        <MoneyCell value=b.net_paid />
                                        <MoneyCell value=b.balance />
                                        <TableCell>
                                            <Badge appearance=BadgeAppearance::Tint color=status_color(o.status)>
                                                {o.status.label()}
                                            </Badge>
                                        </TableCell>
                                        <TableCell>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                size=ButtonSize::Small
                                                on_click=move |_| editing.set(Some(Some(for_edit.clone())))
                                            >
                                                {icon("edit")}
                                            </Button>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </div>
            </div>
            {move || editing.get().map(|order| order_details_view::<K>(order, on_changed, on_close))}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_filter() {
        let order = Order {
            id: 1,
            number: "PC-0001".into(),
            party_id: 1,
            party_name: "Bodega".into(),
            items: vec![],
            payments: vec![],
            status: OrderStatus::Confirmed,
            total: 0.0,
            created_at: "2024-05-01".into(),
            expected_date: None,
            notes: None,
        };
        assert!(status_matches(&order, ""));
        assert!(status_matches(&order, "CONFIRMED"));
        assert!(!status_matches(&order, "DRAFT"));
    }
}
