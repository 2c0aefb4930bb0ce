use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Оверлей + поверхность модального окна.
///
/// Заголовок и кнопки рисует сама форма; рамка закрывается кликом по
/// оверлею, только если нажатие и отпускание были на нём.
#[component]
pub fn ModalFrame(
    on_close: Callback<()>,
    #[prop(optional)] close_on_overlay: Option<bool>,
    /// Доп. класс поверхности (`div.modal`)
    #[prop(optional)]
    modal_class: Option<&'static str>,
    #[prop(optional)] width: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let close_on_overlay = close_on_overlay.unwrap_or(true);
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct = |ev: &ev::MouseEvent| match (ev.target(), ev.current_target()) {
        (Some(t), Some(ct)) => t == ct,
        _ => false,
    };

    let handle_mouse_down = move |ev: ev::MouseEvent| overlay_mouse_down.set(is_direct(&ev));

    let handle_click = move |ev: ev::MouseEvent| {
        let should_close = close_on_overlay && overlay_mouse_down.get() && is_direct(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // Закрытие на следующем тике: обработчик не должен удалять свой же узел
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let class = match modal_class {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };
    let style = format!(
        "position: relative; width: {};",
        width.unwrap_or("min(640px, 95vw)")
    );

    view! {
        <div class="modal-overlay" on:mousedown=handle_mouse_down on:click=handle_click>
            <div class=class style=style on:click=|ev| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}

/// Заголовок модальной формы с крестиком
#[component]
pub fn ModalHeader(#[prop(into)] title: Signal<String>, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="modal__header">
            <h3 class="modal__title">{move || title.get()}</h3>
            <button class="modal__close" on:click=move |_| on_close.run(())>
                {crate::shared::icons::icon("x")}
            </button>
        </div>
    }
}
