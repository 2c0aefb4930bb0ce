//! Экран продажи: корзина, скидки, оплата несколькими методами, сдача

use contracts::domain::a005_payment_method::PaymentMethod;
use contracts::domain::a006_client::Client;
use contracts::domain::a009_presentation::Presentation;
use contracts::domain::a012_sale::{NewSaleDto, SaleItem};
use contracts::domain::common::{non_empty, EntityId};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a009_presentation::api::fetch_presentations;
use crate::domain::a009_presentation::ui::picker::PresentationPicker;
use crate::domain::a010_cash_session::api::fetch_current;
use crate::domain::a012_sale::api::{self, exact_cash, payment_amount, set_payment};
use crate::shared::api_error::ApiError;
use crate::shared::components::form_fields::parse_number;
use crate::shared::components::{bind_id, ErrorAlert, FormSelect};
use crate::shared::config::use_config;
use crate::shared::crud::{self, load_options};
use crate::shared::crud_page::CrudEntity;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_currency, format_money};
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_FORM};
use crate::shared::toast::use_toast;

/// Остаток презентации из загруженного каталога
pub fn stock_lookup(presentations: &[Presentation], id: EntityId) -> Option<f64> {
    presentations.iter().find(|p| p.id == id).map(|p| p.stock)
}

fn update_item(dto: RwSignal<NewSaleDto>, id: EntityId, f: impl FnOnce(&mut SaleItem)) {
    dto.update(|d| {
        if let Some(item) = d.items.iter_mut().find(|i| i.presentation_id == id) {
            f(item);
        }
    });
}

#[component]
pub fn NewSalePage() -> impl IntoView {
    let toast = use_toast();
    let currency = StoredValue::new(use_config().cash.currency);
    let money = move |v: f64| currency.with_value(|c| format_currency(c, v));

    let session_open = RwSignal::new(Option::<bool>::None);
    let presentations = RwSignal::new(Vec::<Presentation>::new());
    let methods = RwSignal::new(Vec::<PaymentMethod>::new());
    let clients = load_options::<Client>(Client::RESOURCE, |c| {
        c.active.then(|| (c.id, format!("{} ({})", c.name, c.document_number)))
    });
    let dto = RwSignal::new(NewSaleDto::default());
    let notes = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let saving = RwSignal::new(false);

    let load = move || {
        spawn_local(async move {
            match fetch_current().await {
                Ok(current) => session_open.set(Some(current.is_some_and(|s| s.is_open()))),
                Err(e) => error.set(Some(e.user_message())),
            }
            match fetch_presentations().await {
                Ok(list) => presentations.set(list.into_iter().filter(|p| p.active).collect()),
                Err(e) => error.set(Some(e.user_message())),
            }
            match crud::fetch_all::<PaymentMethod>(PaymentMethod::RESOURCE).await {
                Ok(list) => methods.set(list.into_iter().filter(|m| m.active).collect()),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };
    load();

    let totals = Memo::new(move |_| dto.with(NewSaleDto::totals));

    let add_to_cart = Callback::new(move |p: Presentation| {
        dto.update(|d| d.add_item(p.id, &p.full_name(), p.sale_price));
    });

    let clear = move || {
        dto.set(NewSaleDto::default());
        notes.set(String::new());
        error.set(None);
    };

    let checkout = move |_: leptos::ev::MouseEvent| {
        let mut sale = dto.get_untracked();
        sale.notes = non_empty(&notes.get_untracked());
        let open = session_open.get_untracked().unwrap_or(false);
        let checked = presentations.with_untracked(|ps| sale.validate(open, |id| stock_lookup(ps, id)));
        if let Err(e) = checked {
            error.set(Some(ApiError::from(e).user_message()));
            return;
        }
        let change = totals.get_untracked().change;
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            match api::create_sale(&sale).await {
                Ok(created) => {
                    log::info!("sale {} created, total {:.2}", created.number, created.total);
                    toast.success(format!("Venta {} registrada. Vuelto: {}", created.number, format_money(change)));
                    clear();
                    load();
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            saving.set(false);
        });
    };

    view! {
        <PageFrame page_id="new_sale--form" category=PAGE_CAT_FORM>
            <PageHeader title="Nueva venta">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| clear()>
                    {icon("cancel")}
                    " Limpiar"
                </Button>
            </PageHeader>
            <div class="page__content new-sale">
                {move || (session_open.get() == Some(false)).then(|| view! {
                    <div class="alert alert--warning">
                        {icon("alert")}
                        " No hay una caja abierta. Abra la caja antes de vender."
                    </div>
                })}
                <ErrorAlert error=error />

                <div class="new-sale__grid">
                    <div class="card new-sale__cart">
                        <PresentationPicker items=presentations on_pick=add_to_cart placeholder="Buscar producto o escanear código..." />
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Producto"</TableHeaderCell>
                                    <TableHeaderCell>"Cant."</TableHeaderCell>
                                    <TableHeaderCell>"Precio"</TableHeaderCell>
                                    <TableHeaderCell>"Desc."</TableHeaderCell>
                                    <TableHeaderCell>"Importe"</TableHeaderCell>
                                    <TableHeaderCell>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || dto.with(|d| d.items.clone()).into_iter().map(|item| {
                                    let id = item.presentation_id;
                                    let stock = presentations.with_untracked(|ps| stock_lookup(ps, id)).unwrap_or(0.0);
                                    let over = item.quantity > stock;
                                    let description = item.description.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                {description}
                                                {over.then(|| view! {
                                                    <div class="new-sale__warn">{format!("Stock disponible: {}", stock)}</div>
                                                })}
                                            </TableCell>
                                            <TableCell>
                                                <input
                                                    class="form__input form__input--number"
                                                    type="number"
                                                    min="0"
                                                    step="1"
                                                    style="width: 80px;"
                                                    prop:value=item.quantity.to_string()
                                                    on:change=move |ev| {
                                                        let q = parse_number(&event_target_value(&ev));
                                                        update_item(dto, id, |i| i.quantity = q);
                                                    }
                                                />
                                            </TableCell>
                                            <TableCell>{format_money(item.unit_price)}</TableCell>
                                            <TableCell>
                                                <input
                                                    class="form__input form__input--number"
                                                    type="number"
                                                    min="0"
                                                    step="0.01"
                                                    style="width: 90px;"
                                                    prop:value=format!("{:.2}", item.discount)
                                                    on:change=move |ev| {
                                                        let v = parse_number(&event_target_value(&ev));
                                                        update_item(dto, id, |i| i.discount = v);
                                                    }
                                                />
                                            </TableCell>
                                            <TableCell>{format_money(item.line_total())}</TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    size=ButtonSize::Small
                                                    on_click=move |_| dto.update(|d| d.remove_item(id))
                                                >
                                                    {icon("delete")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()}
                            </TableBody>
                        </Table>
                        <Show when=move || dto.with(|d| d.items.is_empty())>
                            <div class="new-sale__empty">"El carrito está vacío"</div>
                        </Show>
                    </div>

                    <div class="card new-sale__checkout">
                        <FormSelect
                            label="Cliente"
                            empty_label="Público general"
                            options=clients
                            field=bind_id(dto, |d| d.client_id, |d, v| d.client_id = v)
                        />

                        <div class="form__group">
                            <label class="form__label">"Descuento global"</label>
                            <input
                                class="form__input form__input--number"
                                type="number"
                                min="0"
                                step="0.01"
                                prop:value=move || format!("{:.2}", dto.with(|d| d.discount))
                                on:change=move |ev| {
                                    let v = parse_number(&event_target_value(&ev));
                                    dto.update(|d| d.discount = v);
                                }
                            />
                        </div>

                        <h4>"Pagos"</h4>
                        {move || methods.get().into_iter().map(|m| {
                            let method_id = m.id;
                            let is_cash = m.is_cash;
                            let name = m.name.clone();
                            let method = StoredValue::new(m);
                            view! {
                                <div class="new-sale__payment">
                                    <label class="form__label">{name}</label>
                                    <input
                                        class="form__input form__input--number"
                                        type="number"
                                        min="0"
                                        step="0.01"
                                        prop:value=move || format!("{:.2}", dto.with(|d| payment_amount(&d.payments, method_id)))
                                        on:change=move |ev| {
                                            let v = parse_number(&event_target_value(&ev));
                                            method.with_value(|m| dto.update(|d| set_payment(&mut d.payments, m, v)));
                                        }
                                    />
                                    {is_cash.then(|| view! {
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            size=ButtonSize::Small
                                            on_click=move |_| method.with_value(|m| dto.update(|d| exact_cash(d, m)))
                                        >
                                            "Exacto"
                                        </Button>
                                    })}
                                </div>
                            }
                        }).collect_view()}

                        <div class="new-sale__totals">
                            <div>"Subtotal: " {move || money(totals.get().subtotal)}</div>
                            <div>"Descuento: " {move || money(totals.get().discount)}</div>
                            <div class="new-sale__total">"Total: " {move || money(totals.get().total)}</div>
                            <div>"Pagado: " {move || money(totals.get().paid)}</div>
                            <div>"Pendiente: " {move || money(totals.get().pending)}</div>
                            <div class="new-sale__change">"Vuelto: " {move || money(totals.get().change)}</div>
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
                            block=true
                            on_click=checkout
                            disabled=Signal::derive(move || saving.get() || session_open.get() != Some(true))
                        >
                            {icon("check")}
                            {move || if saving.get() { " Registrando..." } else { " Cobrar" }}
                        </Button>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_lookup() {
        let p = Presentation {
            id: 4,
            product_id: 1,
            product_name: "Leche".into(),
            category_id: None,
            name: "1 L".into(),
            barcode: None,
            unit_id: Some(1),
            color_id: None,
            cost_price: 3.0,
            sale_price: 4.5,
            stock: 7.0,
            min_stock: 2.0,
            active: true,
        };
        let list = vec![p];
        assert_eq!(stock_lookup(&list, 4), Some(7.0));
        assert_eq!(stock_lookup(&list, 5), None);
    }
}
