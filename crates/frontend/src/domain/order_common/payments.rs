use contracts::domain::a005_payment_method::PaymentMethod;
use contracts::domain::common::order::{Order, OrderPaymentDto, OrderPaymentKind, OrderStatus};
use contracts::domain::common::non_empty;
use contracts::shared::money::to_cents;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::{api, OrderScreen};
use crate::shared::components::form_fields::parse_number;
use crate::shared::components::ErrorAlert;
use crate::shared::crud::load_options;
use crate::shared::crud_page::CrudEntity;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::number_format::format_money;
use crate::shared::toast::use_toast;

/// Какие операции доступны: платежи до закрытия, возвраты пока есть оплаченное
pub fn allowed_kinds(order: &Order) -> Vec<OrderPaymentKind> {
    let b = order.balance();
    let mut kinds = Vec::new();
    if order.status.accepts_payments() && to_cents(b.balance) > 0 {
        kinds.push(OrderPaymentKind::Payment);
    }
    if order.status != OrderStatus::Fulfilled && to_cents(b.net_paid) > 0 {
        kinds.push(OrderPaymentKind::Refund);
    }
    kinds
}

fn kind_code(kind: OrderPaymentKind) -> &'static str {
    match kind {
        OrderPaymentKind::Payment => "PAYMENT",
        OrderPaymentKind::Refund => "REFUND",
    }
}

pub fn payments_panel<K: OrderScreen>(order: Order, refresh: Callback<()>) -> AnyView {
    let toast = use_toast();
    let kinds = allowed_kinds(&order);
    let balance = order.balance();
    let methods = load_options::<PaymentMethod>(PaymentMethod::RESOURCE, |m| {
        m.active.then(|| (m.id, m.name.clone()))
    });

    let kind = RwSignal::new(kinds.first().copied().unwrap_or_default());
    let amount = RwSignal::new(String::new());
    let method = RwSignal::new(String::new());
    let note = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let busy = RwSignal::new(false);
    let order = StoredValue::new(order);

    let submit = move |_: leptos::ev::MouseEvent| {
        let dto = OrderPaymentDto {
            kind: kind.get_untracked(),
            amount: parse_number(&amount.get_untracked()),
            payment_method_id: method.get_untracked().parse().ok(),
            note: non_empty(&note.get_untracked()),
        };
        let order = order.get_value();
        busy.set(true);
        error.set(None);
        spawn_local(async move {
            match api::add_payment::<K>(&order, &dto).await {
                Ok(()) => {
                    log::info!("{} {} {:?} {:.2}", K::RESOURCE, order.id, dto.kind, dto.amount);
                    toast.success(format!("{} registrado", dto.kind.label()));
                    amount.set(String::new());
                    note.set(String::new());
                    refresh.run(());
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            busy.set(false);
        });
    };

    let payments = order.with_value(|o| o.payments.clone());
    let has_form = !kinds.is_empty();

    view! {
        <div class="order__payments">
            <h4>"Pagos"</h4>
            <div class="order__balance">
                <span>"Total: " <b>{format_money(balance.total)}</b></span>
                <span>" · Pagado: " {format_money(balance.paid)}</span>
                <span>" · Devuelto: " {format_money(balance.refunded)}</span>
                <span>" · Saldo: " <b>{format_money(balance.balance)}</b></span>
            </div>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Fecha"</TableHeaderCell>
                        <TableHeaderCell>"Tipo"</TableHeaderCell>
                        <TableHeaderCell>"Monto"</TableHeaderCell>
                        <TableHeaderCell>"Nota"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {payments.into_iter().map(|p| view! {
                        <TableRow>
                            <TableCell>{format_datetime(&p.created_at)}</TableCell>
                            <TableCell>{p.kind.label()}</TableCell>
                            <TableCell>{format_money(p.amount)}</TableCell>
                            <TableCell>{p.note.clone().unwrap_or_default()}</TableCell>
                        </TableRow>
                    }).collect_view()}
                </TableBody>
            </Table>

            {has_form.then(|| view! {
                <ErrorAlert error=error />
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <div class="form__group">
                        <label class="form__label">"Operación"</label>
                        <select
                            class="form__select"
                            on:change=move |ev| {
                                let code = event_target_value(&ev);
                                kind.set(if code == "REFUND" { OrderPaymentKind::Refund } else { OrderPaymentKind::Payment });
                            }
                        >
                            {kinds.iter().map(|k| {
                                let k = *k;
                                view! {
                                    <option value=kind_code(k) selected=move || kind.get() == k>{k.label()}</option>
                                }
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form__group" style="width: 130px;">
                        <label class="form__label">"Monto"</label>
                        <Input value=amount input_type=InputType::Number />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Método"</label>
                        <select class="form__select" on:change=move |ev| method.set(event_target_value(&ev))>
                            <option value="">"--"</option>
                            {move || methods.get().into_iter().map(|(id, name)| view! {
                                <option value=id>{name}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form__group" style="flex: 1;">
                        <label class="form__label">"Nota"</label>
                        <Input value=note />
                    </div>
                    <Button appearance=ButtonAppearance::Primary on_click=submit disabled=busy>
                        {icon("payments")}
                        " Registrar"
                    </Button>
                </Flex>
            })}
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::order::{OrderItem, OrderPayment};

    fn order(status: OrderStatus, paid: f64) -> Order {
        Order {
            id: 1,
            number: "PC-0002".into(),
            party_id: 1,
            party_name: "Cliente".into(),
            items: vec![OrderItem {
                presentation_id: 1,
                description: "Harina".into(),
                quantity: 2.0,
                unit_price: 5.0,
            }],
            payments: if paid > 0.0 {
                vec![OrderPayment {
                    id: Some(1),
                    kind: OrderPaymentKind::Payment,
                    amount: paid,
                    payment_method_id: None,
                    created_at: String::new(),
                    note: None,
                }]
            } else {
                vec![]
            },
            status,
            total: 10.0,
            created_at: "2024-05-01".into(),
            expected_date: None,
            notes: None,
        }
    }

    #[test]
    fn test_allowed_kinds() {
        assert_eq!(allowed_kinds(&order(OrderStatus::Draft, 0.0)), vec![OrderPaymentKind::Payment]);
        assert_eq!(
            allowed_kinds(&order(OrderStatus::Confirmed, 4.0)),
            vec![OrderPaymentKind::Payment, OrderPaymentKind::Refund]
        );
        assert_eq!(allowed_kinds(&order(OrderStatus::Cancelled, 4.0)), vec![OrderPaymentKind::Refund]);
        assert!(allowed_kinds(&order(OrderStatus::Fulfilled, 10.0)).is_empty());
        assert!(allowed_kinds(&order(OrderStatus::Cancelled, 0.0)).is_empty());
    }
}
