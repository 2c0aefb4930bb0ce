use contracts::system::access::Module;
use leptos::prelude::*;

use super::context::use_auth;
use crate::shared::icons::icon;

/// Заглушка для раздела без доступа
#[component]
pub fn AccessDenied(module: Module) -> impl IntoView {
    view! {
        <div class="access-denied">
            {icon("lock")}
            <h3>"Acceso denegado"</h3>
            <p>{format!("Su rol no tiene permiso para «{}».", module.label())}</p>
        </div>
    }
}

/// Показывает содержимое только при наличии доступа к разделу
#[component]
pub fn RequireModule(module: Module, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.with(|s| s.can_access(module))
            fallback=move || view! { <AccessDenied module=module /> }
        >
            {children()}
        </Show>
    }
}
