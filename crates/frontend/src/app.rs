use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::{self, provide_config, AppConfig};
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

/// Корень: ждёт `/config.toml`, затем поднимает контексты
#[component]
pub fn App() -> impl IntoView {
    let loaded = RwSignal::new(Option::<AppConfig>::None);
    leptos::task::spawn_local(async move {
        loaded.set(Some(config::load_config().await));
    });

    view! {
        {move || loaded.get().map(|cfg| view! { <AppRoot cfg=cfg /> })}
    }
}

#[component]
fn AppRoot(cfg: AppConfig) -> impl IntoView {
    provide_config(cfg);
    provide_context(AppGlobalContext::new());
    provide_context(ToastService::new());

    view! {
        <AuthProvider>
            <AppShell />
        </AuthProvider>
        <ToastHost />
    }
}
