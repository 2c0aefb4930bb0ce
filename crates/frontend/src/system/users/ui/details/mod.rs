use contracts::system::roles::Role;
use contracts::system::users::{User, UserDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::ErrorAlert;
use crate::shared::icons::icon;
use crate::shared::modal_frame::{ModalFrame, ModalHeader};
use crate::shared::toast::use_toast;
use crate::system::roles::api as roles_api;
use crate::system::users::api;

/// Модальная форма создания / редактирования пользователя
#[component]
pub fn UserDetails(
    user: Option<User>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let is_new = user.is_none();
    let form = RwSignal::new(match &user {
        Some(u) => UserDto::from_user(u),
        None => UserDto {
            password: Some(String::new()),
            active: true,
            ..UserDto::default()
        },
    });
    let roles = RwSignal::new(Vec::<Role>::new());
    let error = RwSignal::new(Option::<String>::None);
    let saving = RwSignal::new(false);

    spawn_local(async move {
        match roles_api::fetch_roles().await {
            Ok(list) => roles.set(list),
            Err(e) => error.set(Some(e.user_message())),
        }
    });

    let save = move || {
        let dto = form.get_untracked();
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            match api::save_user(&dto).await {
                Ok(()) => {
                    toast.success(if is_new { "Usuario creado" } else { "Usuario actualizado" });
                    on_saved.run(());
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            saving.set(false);
        });
    };

    let title = if is_new { "Nuevo usuario" } else { "Editar usuario" };

    view! {
        <ModalFrame on_close=on_cancel>
            <ModalHeader title=title.to_string() on_close=on_cancel />
            <div class="modal__body details-form">
                <ErrorAlert error=error />

                <div class="form__group">
                    <label class="form__label">"Usuario"</label>
                    <input
                        class="form__input"
                        type="text"
                        maxlength="30"
                        disabled=!is_new
                        prop:value=move || form.with(|f| f.username.clone())
                        on:input=move |ev| form.update(|f| f.username = event_target_value(&ev).to_lowercase())
                    />
                </div>

                {is_new.then(|| view! {
                    <div class="form__group">
                        <label class="form__label">"Contraseña"</label>
                        <input
                            class="form__input"
                            type="password"
                            prop:value=move || form.with(|f| f.password.clone().unwrap_or_default())
                            on:input=move |ev| form.update(|f| f.password = Some(event_target_value(&ev)))
                        />
                    </div>
                })}

                <div class="form__group">
                    <label class="form__label">"Nombre completo"</label>
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || form.with(|f| f.full_name.clone())
                        on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                    />
                </div>

                <div class="form__group">
                    <label class="form__label">"Correo"</label>
                    <input
                        class="form__input"
                        type="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </div>

                <div class="form__group">
                    <label class="form__label">"Rol"</label>
                    <select
                        class="form__select"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.role_id = value.parse().ok());
                        }
                    >
                        <option value="" selected=move || form.with(|f| f.role_id.is_none())>"-- Seleccione --"</option>
                        {move || roles.get().into_iter().map(|r| {
                            let id = r.id;
                            view! {
                                <option
                                    value=id.to_string()
                                    selected=move || form.with(|f| f.role_id == Some(id))
                                >
                                    {r.name}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <label class="form__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.active)
                        on:change=move |ev| form.update(|f| f.active = event_target_checked(&ev))
                    />
                    " Activo"
                </label>
            </div>

            <div class="modal__footer details-actions">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| save() disabled=saving>
                    {icon("save")}
                    {if is_new { " Crear" } else { " Guardar" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    {icon("cancel")}
                    " Cancelar"
                </Button>
            </div>
        </ModalFrame>
    }
}

/// Сброс пароля пользователя администратором
#[component]
pub fn ResetPasswordModal(user: User, on_close: Callback<()>) -> impl IntoView {
    let toast = use_toast();
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let user_id = user.id;

    let submit = move || {
        let new_password = password.get_untracked();
        if new_password != confirm.get_untracked() {
            error.set(Some("Las contraseñas no coinciden".to_string()));
            return;
        }
        error.set(None);
        spawn_local(async move {
            match api::reset_password(user_id, new_password).await {
                Ok(()) => {
                    toast.success("Contraseña restablecida");
                    on_close.run(());
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    view! {
        <ModalFrame on_close=on_close width="min(420px, 95vw)">
            <ModalHeader title=format!("Restablecer contraseña: {}", user.username) on_close=on_close />
            <div class="modal__body details-form">
                <ErrorAlert error=error />
                <div class="form__group">
                    <label class="form__label">"Nueva contraseña"</label>
                    <Input value=password input_type=InputType::Password />
                </div>
                <div class="form__group">
                    <label class="form__label">"Confirmar contraseña"</label>
                    <Input value=confirm input_type=InputType::Password />
                </div>
            </div>
            <div class="modal__footer details-actions">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| submit()>
                    {icon("key")}
                    " Restablecer"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    " Cancelar"
                </Button>
            </div>
        </ModalFrame>
    }
}
