use contracts::domain::a010_cash_session::denomination::{counted_total, empty_count, is_bill};
use contracts::domain::a010_cash_session::{CloseSessionDto, DenominationCount, Reconciliation};
use contracts::domain::common::{non_empty, EntityId};
use contracts::shared::money::to_cents;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a010_cash_session::api;
use crate::shared::api_error::ApiError;
use crate::shared::components::ErrorAlert;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::number_format::format_currency;
use crate::shared::toast::use_toast;

/// Количество из поля ввода: пусто или мусор = 0, дробные отбрасываются
pub fn parse_quantity(text: &str) -> u32 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|q| q.is_finite() && *q > 0.0)
        .map(|q| q.trunc() as u32)
        .unwrap_or(0)
}

/// Тело закрытия: только номиналы с количеством > 0
pub fn close_request(counts: &[DenominationCount], notes: &str) -> CloseSessionDto {
    CloseSessionDto {
        counted_amount: counted_total(counts),
        denominations: counts.iter().copied().filter(|c| c.quantity > 0).collect(),
        notes: non_empty(notes),
    }
}

#[component]
pub fn ClosePanel(
    session_id: EntityId,
    #[prop(into)] expected: Signal<f64>,
    on_closed: Callback<()>,
) -> impl IntoView {
    let cfg = use_config();
    let tolerance = cfg.cash.tolerance;
    let currency = StoredValue::new(cfg.cash.currency);
    let money = move |v: f64| currency.with_value(|c| format_currency(c, v));
    let toast = use_toast();

    let counts = RwSignal::new(empty_count());
    let notes = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let busy = RwSignal::new(false);

    let reconciliation = Memo::new(move |_| {
        Reconciliation::new(expected.get(), counts.with(|c| counted_total(c)), tolerance)
    });

    let close = move |_: leptos::ev::MouseEvent| {
        let rec = reconciliation.get_untracked();
        if let Err(e) = rec.check() {
            error.set(Some(ApiError::from(e).user_message()));
            return;
        }
        let dto = counts.with_untracked(|c| close_request(c, &notes.get_untracked()));
        busy.set(true);
        error.set(None);
        spawn_local(async move {
            match api::close_session(session_id, &dto).await {
                Ok(()) => {
                    log::info!("cash session {} closed, counted {:.2}", session_id, dto.counted_amount);
                    toast.success("Caja cerrada");
                    on_closed.run(());
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            busy.set(false);
        });
    };

    let row = move |idx: usize, d: DenominationCount| {
        let kind = if is_bill(to_cents(d.value)) { "Billete" } else { "Moneda" };
        view! {
            <TableRow>
                <TableCell>{kind}</TableCell>
                <TableCell>{money(d.value)}</TableCell>
                <TableCell>
                    <input
                        class="form__input form__input--number"
                        type="number"
                        min="0"
                        step="1"
                        style="width: 90px;"
                        prop:value=move || counts.with(|c| c[idx].quantity.to_string())
                        on:input=move |ev| {
                            let q = parse_quantity(&event_target_value(&ev));
                            counts.update(|c| c[idx].quantity = q);
                        }
                    />
                </TableCell>
                <TableCell>{move || money(counts.with(|c| c[idx].subtotal()))}</TableCell>
            </TableRow>
        }
    };

    view! {
        <div class="card">
            <h3 class="card__title">"Cierre de caja"</h3>
            <ErrorAlert error=error />
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Tipo"</TableHeaderCell>
                        <TableHeaderCell>"Denominación"</TableHeaderCell>
                        <TableHeaderCell>"Cantidad"</TableHeaderCell>
                        <TableHeaderCell>"Subtotal"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {counts.get_untracked().into_iter().enumerate().map(|(i, d)| row(i, d)).collect_view()}
                </TableBody>
            </Table>

            <div class="cash-close__totals">
                <div>"Esperado: " <b>{move || money(reconciliation.get().expected)}</b></div>
                <div>"Contado: " <b>{move || money(reconciliation.get().counted)}</b></div>
                <div class=move || if reconciliation.get().is_balanced() { "cash-close__diff" } else { "cash-close__diff cash-close__diff--error" }>
                    {move || {
                        let r = reconciliation.get();
                        format!("{}: {}", r.label(), money(r.difference()))
                    }}
                </div>
            </div>

            <div class="form__group">
                <label class="form__label">"Observación"</label>
                <textarea
                    class="form__textarea"
                    rows="2"
                    prop:value=move || notes.get()
                    on:input=move |ev| notes.set(event_target_value(&ev))
                />
            </div>

            <Button
                appearance=ButtonAppearance::Primary
                on_click=close
                disabled=Signal::derive(move || busy.get() || !reconciliation.get().is_balanced())
            >
                {icon("lock")}
                " Cerrar caja"
            </Button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity(" 2.9 "), 2);
        assert_eq!(parse_quantity("-1"), 0);
        assert_eq!(parse_quantity("abc"), 0);
    }

    #[test]
    fn test_close_request_skips_empty_rows() {
        let mut counts = empty_count();
        counts[0].quantity = 1; // 200
        counts[10].quantity = 5; // 0.10
        let dto = close_request(&counts, "  ");
        assert_eq!(dto.counted_amount, 200.5);
        assert_eq!(dto.denominations.len(), 2);
        assert_eq!(dto.notes, None);
    }
}
