//! Поля форм, привязанные к DTO внутри `RwSignal`, и рамка модальной формы

use leptos::prelude::*;
use thaw::*;

use super::status_cells::ErrorAlert;
use crate::shared::icons::icon;
use crate::shared::modal_frame::{ModalFrame, ModalHeader};

/// Значение поля + запись обратно в форму
pub struct FieldBinding<V: Send + Sync + 'static> {
    pub value: Signal<V>,
    pub set: Callback<V>,
}

impl<V: Send + Sync + 'static> Clone for FieldBinding<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: Send + Sync + 'static> Copy for FieldBinding<V> {}

pub fn bind<T, V>(form: RwSignal<T>, get: fn(&T) -> V, set: fn(&mut T, V)) -> FieldBinding<V>
where
    T: Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    FieldBinding {
        value: Signal::derive(move || form.with(get)),
        set: Callback::new(move |v: V| form.update(|f| set(f, v))),
    }
}

/// Текст `Option<String>`: пустая строка хранится как `None`
pub fn bind_opt<T: Send + Sync + 'static>(
    form: RwSignal<T>,
    get: fn(&T) -> &Option<String>,
    set: fn(&mut T, Option<String>),
) -> FieldBinding<String> {
    FieldBinding {
        value: Signal::derive(move || form.with(|f| get(f).clone().unwrap_or_default())),
        set: Callback::new(move |v: String| {
            form.update(|f| set(f, if v.is_empty() { None } else { Some(v) }))
        }),
    }
}

/// Идентификатор из `<select>`: пустое значение означает `None`
pub fn bind_id<T: Send + Sync + 'static>(
    form: RwSignal<T>,
    get: fn(&T) -> Option<i64>,
    set: fn(&mut T, Option<i64>),
) -> FieldBinding<String> {
    FieldBinding {
        value: Signal::derive(move || form.with(|f| get(f).map(|id| id.to_string()).unwrap_or_default())),
        set: Callback::new(move |v: String| form.update(|f| set(f, v.parse().ok()))),
    }
}

/// Число из поля ввода: пустое или нечисловое значение даёт 0
pub fn parse_number(text: &str) -> f64 {
    text.trim().replace(',', ".").parse::<f64>().unwrap_or(0.0)
}

#[component]
pub fn FormText(
    label: &'static str,
    field: FieldBinding<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] maxlength: Option<usize>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                class="form__input"
                type=input_type.unwrap_or("text")
                placeholder=placeholder
                maxlength=maxlength.map(|m| m.to_string())
                disabled=move || disabled.get()
                prop:value=move || field.value.get()
                on:input=move |ev| field.set.run(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn FormTextArea(
    label: &'static str,
    field: FieldBinding<String>,
    #[prop(optional)] rows: Option<u8>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <textarea
                class="form__textarea"
                rows=rows.unwrap_or(3).to_string()
                prop:value=move || field.value.get()
                on:input=move |ev| field.set.run(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn FormNumber(
    label: &'static str,
    field: FieldBinding<f64>,
    #[prop(optional)] step: Option<&'static str>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                class="form__input form__input--number"
                type="number"
                min="0"
                step=step.unwrap_or("0.01")
                disabled=move || disabled.get()
                prop:value=move || field.value.get().to_string()
                on:change=move |ev| field.set.run(parse_number(&event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn FormCheckbox(label: &'static str, field: FieldBinding<bool>) -> impl IntoView {
    view! {
        <label class="form__checkbox">
            <input
                type="checkbox"
                prop:checked=move || field.value.get()
                on:change=move |ev| field.set.run(event_target_checked(&ev))
            />
            " "
            {label}
        </label>
    }
}

/// Выпадающий список `(value, label)`; пустое значение означает «не выбрано»
#[component]
pub fn FormSelect(
    label: &'static str,
    field: FieldBinding<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(optional)] empty_label: Option<&'static str>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <select
                class="form__select"
                disabled=move || disabled.get()
                on:change=move |ev| field.set.run(event_target_value(&ev))
            >
                {empty_label.map(|l| view! {
                    <option value="" selected=move || field.value.with(|v| v.is_empty())>{l}</option>
                })}
                {move || options.get().into_iter().map(|(value, text)| {
                    let v = value.clone();
                    view! {
                        <option value=value selected=move || field.value.with(|cur| *cur == v)>
                            {text}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

/// Модальная форма: заголовок, ошибка, содержимое, кнопки «Guardar / Cancelar»
#[component]
pub fn FormModal(
    #[prop(into)] title: Signal<String>,
    error: RwSignal<Option<String>>,
    #[prop(optional, into)] saving: Signal<bool>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional)] width: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <ModalFrame on_close=on_cancel width=width.unwrap_or("min(640px, 95vw)")>
            <ModalHeader title=title on_close=on_cancel />
            <div class="modal__body details-form">
                <ErrorAlert error=error />
                {children()}
            </div>
            <div class="modal__footer details-actions">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_save.run(()) disabled=saving>
                    {icon("save")}
                    {move || if saving.get() { " Guardando..." } else { " Guardar" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    {icon("cancel")}
                    " Cancelar"
                </Button>
            </div>
        </ModalFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("12.5"), 12.5);
        assert_eq!(parse_number(" 3,75 "), 3.75);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("abc"), 0.0);
    }
}
