//! Ячейки таблиц: статус активности, суммы, сортируемые заголовки

use leptos::prelude::*;
use thaw::*;

use crate::shared::list_utils::{get_sort_class, ListController, Searchable, Sortable};
use crate::shared::number_format::format_money;

#[component]
pub fn ActiveBadge(#[prop(into)] active: Signal<bool>) -> impl IntoView {
    move || {
        if active.get() {
            view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Activo"</Badge> }.into_any()
        } else {
            view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>"Inactivo"</Badge> }.into_any()
        }
    }
}

/// Переключатель активности в строке таблицы
#[component]
pub fn ActiveToggle(active: bool, on_toggle: Callback<bool>) -> impl IntoView {
    view! {
        <label class="switch" on:click=|ev| ev.stop_propagation()>
            <input
                type="checkbox"
                prop:checked=active
                on:change=move |ev| on_toggle.run(event_target_checked(&ev))
            />
            <span class="switch__slider"></span>
        </label>
    }
}

#[component]
pub fn MoneyCell(value: f64) -> impl IntoView {
    view! {
        <TableCell>
            <TableCellLayout>
                <span class="table__cell--money">{format_money(value)}</span>
            </TableCellLayout>
        </TableCell>
    }
}

#[component]
pub fn SortableHeader<T>(
    controller: ListController<T>,
    field: &'static str,
    label: &'static str,
) -> impl IntoView
where
    T: Searchable + Sortable + Clone + Send + Sync + 'static,
{
    let state = controller.state;
    let indicator = controller.sort_indicator(field);
    view! {
        <TableHeaderCell>
            <div class="table__sortable-header" style="cursor:pointer;" on:click=move |_| controller.toggle_sort(field)>
                {label}
                <span class=move || state.with(|s| get_sort_class(&s.sort_field, field))>
                    {indicator}
                </span>
            </div>
        </TableHeaderCell>
    }
}

/// Сообщение об ошибке внутри формы или страницы
#[component]
pub fn ErrorAlert(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|e| {
            view! {
                <div class="alert alert--error">
                    {e.lines().map(|l| view! { <div>{l.to_string()}</div> }).collect_view()}
                </div>
            }
        })
    }
}
