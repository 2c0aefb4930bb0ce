//! Корневые компоненты приложения
//!
//! - `AppShell` - auth gate (LoginPage или MainLayout)
//! - `MainLayout` - Shell + Sidebar + вкладки

use crate::layout::global_context::{use_app_context, Tab as TabData};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Синхронизирует вкладки с `?active=` при создании
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = use_app_context();
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| view! { <TabPage tab=tab tabs_store=tabs_store /> }
                    />
                }
                .into_any()
            }
        />
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || !auth.with(|s| s.restoring)
            fallback=|| view! {
                <div class="app-loading">
                    <thaw::Spinner label="Restaurando sesión..." />
                </div>
            }
        >
            <Show
                when=move || auth.with(|s| s.is_authenticated())
                fallback=|| view! { <LoginPage /> }
            >
                <MainLayout />
            </Show>
        </Show>
    }
}
