//! Полоса открытых вкладок над контентом

use leptos::ev;
use leptos::prelude::*;

use crate::layout::global_context::{use_app_context, Tab as TabData};
use crate::shared::icons::icon;

#[component]
fn TabButton(tab: TabData) -> impl IntoView {
    let ctx = use_app_context();
    let key = StoredValue::new(tab.key.clone());
    let is_active = Memo::new(move |_| {
        ctx.active
            .with(|a| key.with_value(|k| a.as_deref() == Some(k.as_str())))
    });

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        key.with_value(|k| ctx.close_tab(k));
    };

    view! {
        <div
            class="tab"
            class:active=is_active
            on:click=move |_| key.with_value(|k| ctx.activate_tab(k))
        >
            <span>{tab.title}</span>
            <button class="tab-close" on:click=on_close title="Cerrar">
                {icon("x")}
            </button>
        </div>
    }
}

#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="tab-bar">
            <For
                each=move || ctx.opened.get()
                key=|tab| tab.key.clone()
                children=|tab: TabData| view! { <TabButton tab=tab /> }
            />
            <Show when=move || ctx.opened.with(|t| t.is_empty())>
                <div class="tab-bar__empty">"Seleccione una opción del menú"</div>
            </Show>
        </div>
    }
}
