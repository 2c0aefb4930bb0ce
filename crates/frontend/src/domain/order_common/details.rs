use contracts::domain::a009_presentation::Presentation;
use contracts::domain::common::order::{items_total, Order, OrderDto, OrderItem, OrderStatus};
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::list::status_color;
use super::payments::payments_panel;
use super::{api, OrderScreen};
use crate::domain::a009_presentation::api::fetch_presentations;
use crate::domain::a009_presentation::ui::picker::PresentationPicker;
use crate::shared::components::form_fields::parse_number;
use crate::shared::components::{bind_id, bind_opt, ErrorAlert, FormSelect, FormText, FormTextArea};
use crate::shared::crud::confirm;
use crate::shared::icons::icon;
use crate::shared::modal_frame::{ModalFrame, ModalHeader};
use crate::shared::number_format::format_money;
use crate::shared::toast::use_toast;

/// Добавить презентацию в заказ; повторное добавление увеличивает количество
pub fn add_order_item(dto: &mut OrderDto, p: &Presentation, unit_price: f64) {
    match dto.items.iter_mut().find(|i| i.presentation_id == p.id) {
        Some(item) => item.quantity += 1.0,
        None => dto.items.push(OrderItem {
            presentation_id: p.id,
            description: p.full_name(),
            quantity: 1.0,
            unit_price,
        }),
    }
}

fn update_item(form: RwSignal<OrderDto>, id: EntityId, f: impl FnOnce(&mut OrderItem)) {
    form.update(|d| {
        if let Some(item) = d.items.iter_mut().find(|i| i.presentation_id == id) {
            f(item);
        }
    });
}

fn status_action_label(next: OrderStatus) -> &'static str {
    match next {
        OrderStatus::Confirmed => " Confirmar",
        OrderStatus::Fulfilled => " Marcar entregado",
        OrderStatus::Cancelled => " Anular",
        OrderStatus::Draft => " Borrador",
    }
}

pub fn order_details_view<K: OrderScreen>(
    order: Option<Order>,
    on_changed: Callback<()>,
    on_close: Callback<()>,
) -> AnyView {
    let toast = use_toast();
    let current = RwSignal::new(order.clone());
    let form = RwSignal::new(order.as_ref().map(OrderDto::from_order).unwrap_or_default());
    let error = RwSignal::new(Option::<String>::None);
    let saving = RwSignal::new(false);
    let presentations = RwSignal::new(Vec::<Presentation>::new());
    let parties = K::party_options();

    spawn_local(async move {
        match fetch_presentations().await {
            Ok(list) => presentations.set(list.into_iter().filter(|p| p.active).collect()),
            Err(e) => log::warn!("presentations not loaded: {}", e),
        }
    });

    let editable = Signal::derive(move || {
        current.with(|o| o.as_ref().map_or(true, |o| o.status.items_editable()))
    });
    let locked = Signal::derive(move || !editable.get());

    let title = Signal::derive(move || {
        current.with(|o| match o {
            Some(o) => format!("Pedido {}", o.number),
            None => "Nuevo pedido".to_string(),
        })
    });

    // Перечитать заказ после смены статуса или платежа
    let refresh = Callback::new(move |_| {
        let Some(id) = current.with_untracked(|o| o.as_ref().map(|o| o.id)) else {
            return;
        };
        spawn_local(async move {
            match api::fetch_order::<K>(id).await {
                Ok(o) => {
                    form.set(OrderDto::from_order(&o));
                    current.set(Some(o));
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            on_changed.run(());
        });
    });

    let save = move |_: leptos::ev::MouseEvent| {
        let mut dto = form.get_untracked();
        dto.notes = dto.notes.map(|n| n.trim().to_string()).filter(|n| !n.is_empty());
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            let result = api::save_order::<K>(&dto).await;
            saving.set(false);
            match result {
                Ok(()) => {
                    toast.success(if dto.id.is_some() { "Pedido actualizado" } else { "Pedido creado" });
                    on_changed.run(());
                    on_close.run(());
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    let transition = move |next: OrderStatus| {
        let Some(order) = current.get_untracked() else {
            return;
        };
        if !confirm(&format!("¿Cambiar el estado del pedido {} a «{}»?", order.number, next.label())) {
            return;
        }
        error.set(None);
        spawn_local(async move {
            match api::change_status::<K>(&order, next).await {
                Ok(()) => {
                    log::info!("{} {} -> {}", K::RESOURCE, order.id, next.code());
                    toast.success(format!("Pedido {}: {}", order.number, next.label()));
                    refresh.run(());
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    let add_item = Callback::new(move |p: Presentation| {
        let price = K::default_price(&p);
        form.update(|f| add_order_item(f, &p, price));
    });

    view! {
        <ModalFrame on_close=on_close width="min(900px, 96vw)">
            <ModalHeader title=title on_close=on_close />
            <div class="modal__body details-form">
                <ErrorAlert error=error />
                {move || current.get().map(|o| view! {
                    <div class="order__status">
                        <Badge appearance=BadgeAppearance::Tint color=status_color(o.status)>{o.status.label()}</Badge>
                        {o.status.next_statuses().into_iter().map(|next| view! {
                            <Button
                                appearance=if next == OrderStatus::Cancelled { ButtonAppearance::Secondary } else { ButtonAppearance::Primary }
                                size=ButtonSize::Small
                                on_click=move |_| transition(next)
                            >
                                {status_action_label(next)}
                            </Button>
                        }).collect_view()}
                    </div>
                })}

                <div class="form__row">
                    <FormSelect
                        label=K::PARTY_TITLE
                        empty_label="-- Seleccione --"
                        options=parties
                        disabled=locked
                        field=bind_id(form, |f| f.party_id, |f, v| f.party_id = v)
                    />
                    <FormText
                        label="Fecha de entrega"
                        input_type="date"
                        disabled=locked
                        field=bind_opt(form, |f| &f.expected_date, |f, v| f.expected_date = v)
                    />
                </div>

                <Show when=move || editable.get()>
                    <PresentationPicker items=presentations on_pick=add_item />
                </Show>

                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Producto"</TableHeaderCell>
                            <TableHeaderCell>"Cantidad"</TableHeaderCell>
                            <TableHeaderCell>"Precio"</TableHeaderCell>
                            <TableHeaderCell>"Importe"</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || form.with(|f| f.items.clone()).into_iter().map(|item| {
                            let id = item.presentation_id;
                            let description = item.description.clone();
                            view! {
                                <TableRow>
                                    <TableCell>{description}</TableCell>
                                    <TableCell>
                                        <input
                                            class="form__input form__input--number"
                                            type="number"
                                            min="0"
                                            step="1"
                                            style="width: 90px;"
                                            disabled=move || locked.get()
                                            prop:value=item.quantity.to_string()
                                            on:change=move |ev| {
                                                let q = parse_number(&event_target_value(&ev));
                                                update_item(form, id, |i| i.quantity = q);
                                            }
                                        />
                                    </TableCell>
                                    <TableCell>
                                        <input
                                            class="form__input form__input--number"
                                            type="number"
                                            min="0"
                                            step="0.01"
                                            style="width: 100px;"
                                            disabled=move || locked.get()
                                            prop:value=format!("{:.2}", item.unit_price)
                                            on:change=move |ev| {
                                                let v = parse_number(&event_target_value(&ev));
                                                update_item(form, id, |i| i.unit_price = v);
                                            }
                                        />
                                    </TableCell>
                                    <TableCell>{format_money(item.line_total())}</TableCell>
                                    <TableCell>
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            size=ButtonSize::Small
                                            disabled=locked
                                            on_click=move |_| form.update(|f| f.items.retain(|i| i.presentation_id != id))
                                        >
                                            {icon("delete")}
                                        </Button>
                                    </TableCell>
                                </TableRow>
                            }
                        }).collect_view()}
                    </TableBody>
                </Table>
                <div class="order__total">
                    "Total: " <b>{move || format_money(form.with(|f| items_total(&f.items)))}</b>
                </div>

                <FormTextArea label="Observaciones" field=bind_opt(form, |f| &f.notes, |f, v| f.notes = v) />

                {move || current.get().map(|o| payments_panel::<K>(o, refresh))}
            </div>
            <div class="modal__footer details-actions">
                <Show when=move || editable.get()>
                    <Button appearance=ButtonAppearance::Primary on_click=save disabled=saving>
                        {icon("save")}
                        {move || if saving.get() { " Guardando..." } else { " Guardar" }}
                    </Button>
                </Show>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    {icon("cancel")}
                    " Cerrar"
                </Button>
            </div>
        </ModalFrame>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pres(id: EntityId) -> Presentation {
        Presentation {
            id,
            product_id: 1,
            product_name: "Azúcar".into(),
            category_id: None,
            name: "1 kg".into(),
            barcode: None,
            unit_id: Some(1),
            color_id: None,
            cost_price: 3.0,
            sale_price: 4.0,
            stock: 0.0,
            min_stock: 0.0,
            active: true,
        }
    }

    #[test]
    fn test_add_order_item_merges() {
        let mut dto = OrderDto::default();
        add_order_item(&mut dto, &pres(1), 3.0);
        add_order_item(&mut dto, &pres(1), 3.0);
        add_order_item(&mut dto, &pres(2), 3.5);
        assert_eq!(dto.items.len(), 2);
        assert_eq!(dto.items[0].quantity, 2.0);
        assert_eq!(dto.items[0].description, "Azúcar 1 kg");
        assert_eq!(dto.total(), 9.5);
    }
}
