//! Caja: открытие смены, сводка, движения наличных и закрытие с подсчётом по номиналам

mod close_panel;
mod movements;

use contracts::domain::a010_cash_session::{CashSession, CashSummary, Movement, OpenSessionDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::close_panel::ClosePanel;
use self::movements::MovementsPanel;
use crate::domain::a010_cash_session::api;
use crate::shared::components::ErrorAlert;
use crate::shared::components::form_fields::parse_number;
use crate::shared::config::use_config;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::number_format::format_currency;
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_FORM};
use crate::shared::toast::use_toast;

#[component]
pub fn CashRegisterPage() -> impl IntoView {
    let session = RwSignal::new(Option::<CashSession>::None);
    let summary = RwSignal::new(CashSummary::default());
    let movements = RwSignal::new(Vec::<Movement>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(Option::<String>::None);

    let load = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            let result = async {
                let current = api::fetch_current().await?;
                if let Some(s) = &current {
                    summary.set(api::fetch_summary(s.id).await?);
                    movements.set(api::fetch_movements(s.id).await?);
                }
                Ok::<_, crate::shared::api_error::ApiError>(current)
            }
            .await;
            match result {
                Ok(current) => {
                    log::debug!("cash session: {:?}", current.as_ref().map(|s| s.id));
                    session.set(current);
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            loading.set(false);
        });
    };
    load();

    let on_changed = Callback::new(move |_| load());

    view! {
        <PageFrame page_id="cash_register--form" category=PAGE_CAT_FORM>
            <PageHeader title="Caja">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load() disabled=loading>
                    {icon("refresh")}
                    " Actualizar"
                </Button>
            </PageHeader>
            <div class="page__content">
                <ErrorAlert error=error />
                {move || {
                    if loading.get() && session.with(Option::is_none) {
                        return view! { <Spinner /> }.into_any();
                    }
                    match session.get() {
                        None => view! { <OpenCashForm on_opened=on_changed /> }.into_any(),
                        Some(s) => {
                            let id = s.id;
                            let expected = Signal::derive(move || summary.with(CashSummary::expected_cash));
                            view! {
                                <SessionHeader session=s />
                                <SummaryPanel summary=summary />
                                <MovementsPanel session_id=id movements=movements summary=summary />
                                <ClosePanel session_id=id expected=expected on_closed=on_changed />
                            }
                            .into_any()
                        }
                    }
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn OpenCashForm(on_opened: Callback<()>) -> impl IntoView {
    let toast = use_toast();
    let amount = RwSignal::new(String::from("0.00"));
    let error = RwSignal::new(Option::<String>::None);
    let busy = RwSignal::new(false);

    let open = move |_: leptos::ev::MouseEvent| {
        let dto = OpenSessionDto {
            opening_amount: parse_number(&amount.get_untracked()),
        };
        busy.set(true);
        error.set(None);
        spawn_local(async move {
            match api::open_session(&dto).await {
                Ok(s) => {
                    log::info!("cash session {} opened", s.id);
                    toast.success("Caja abierta");
                    on_opened.run(());
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="card cash-open">
            <h2 class="card__title">"La caja está cerrada"</h2>
            <p>"Ingrese el monto inicial en efectivo para abrir la caja."</p>
            <ErrorAlert error=error />
            <div class="form__group">
                <label class="form__label">"Monto inicial"</label>
                <Input value=amount input_type=InputType::Number />
            </div>
            <Button appearance=ButtonAppearance::Primary on_click=open disabled=busy>
                {icon("cash")}
                " Abrir caja"
            </Button>
        </div>
    }
}

#[component]
fn SessionHeader(session: CashSession) -> impl IntoView {
    view! {
        <div class="cash-session__header">
            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>{session.status.label()}</Badge>
            <span>" Abierta por " <b>{session.user_name.clone()}</b></span>
            <span>" el " {format_datetime(&session.opened_at)}</span>
        </div>
    }
}

#[component]
fn SummaryPanel(summary: RwSignal<CashSummary>) -> impl IntoView {
    let currency = StoredValue::new(use_config().cash.currency);
    let money = move |v: f64| currency.with_value(|c| format_currency(c, v));
    let line = move |label: &'static str, value: fn(&CashSummary) -> f64| {
        view! {
            <div class="stat">
                <span class="stat__label">{label}</span>
                <span class="stat__value">{move || money(summary.with(value))}</span>
            </div>
        }
    };

    view! {
        <div class="card">
            <h3 class="card__title">"Resumen"</h3>
            <div class="stat-grid">
                {line("Monto inicial", |s| s.opening_amount)}
                {line("Ventas en efectivo", |s| s.cash_sales)}
                {line("Ingresos", |s| s.incomes)}
                {line("Egresos", |s| s.expenses)}
                {line("Devoluciones en efectivo", |s| s.cash_refunds)}
                {line("Efectivo esperado", CashSummary::expected_cash)}
            </div>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Método de pago"</TableHeaderCell>
                        <TableHeaderCell>"Total vendido"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || summary.with(|s| s.sales_by_method.clone()).into_iter().map(|m| view! {
                        <TableRow>
                            <TableCell>{m.method}</TableCell>
                            <TableCell>{money(m.amount)}</TableCell>
                        </TableRow>
                    }).collect_view()}
                    <TableRow>
                        <TableCell><b>"Total"</b></TableCell>
                        <TableCell><b>{move || money(summary.with(CashSummary::total_sales))}</b></TableCell>
                    </TableRow>
                </TableBody>
            </Table>
        </div>
    }
}
