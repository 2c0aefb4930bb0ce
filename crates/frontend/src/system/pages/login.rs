use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::ErrorAlert;
use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);

    let auth = use_auth();

    let submit = move || {
        let username_val = username.get_untracked().trim().to_lowercase();
        let password_val = password.get_untracked();
        if username_val.is_empty() || password_val.is_empty() {
            error_message.set(Some("Ingrese usuario y contraseña".to_string()));
            return;
        }

        is_loading.set(true);
        error_message.set(None);

        spawn_local(async move {
            // Успешный вход переключает AppShell на MainLayout
            if let Err(e) = do_login(auth, username_val, password_val).await {
                let msg = if e.is_unauthorized() {
                    "Usuario o contraseña incorrectos".to_string()
                } else {
                    e.user_message()
                };
                error_message.set(Some(msg));
            }
            is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Punto de Venta"</h1>
                <h2>"Iniciar sesión"</h2>

                <ErrorAlert error=error_message />

                <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit();
                }>
                    <div class="form-group">
                        <label for="username">"Usuario"</label>
                        <Input value=username placeholder="usuario" disabled=is_loading />
                    </div>

                    <div class="form-group">
                        <label for="password">"Contraseña"</label>
                        <Input
                            value=password
                            input_type=InputType::Password
                            placeholder="••••••"
                            disabled=is_loading
                        />
                    </div>

                    <Button
                        appearance=ButtonAppearance::Primary
                        button_type=ButtonType::Submit
                        disabled=is_loading
                        block=true
                    >
                        {move || if is_loading.get() { "Ingresando..." } else { "Ingresar" }}
                    </Button>
                </form>
            </div>
        </div>
    }
}
