use contracts::system::access::{MenuGroup, Module};
use contracts::system::roles::{Role, RoleDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::ErrorAlert;
use crate::shared::icons::icon;
use crate::shared::modal_frame::{ModalFrame, ModalHeader};
use crate::shared::toast::use_toast;
use crate::system::roles::api;

/// Редактор роли: чекбокс на каждый раздел, сгруппированные как в меню
#[component]
pub fn RoleDetails(
    role: Option<Role>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let is_new = role.is_none();
    let protected = role.as_ref().is_some_and(|r| r.is_protected());
    let form = RwSignal::new(role.as_ref().map(RoleDto::from_role).unwrap_or_default());
    let error = RwSignal::new(Option::<String>::None);

    let save = move || {
        let dto = form.get_untracked();
        error.set(None);
        spawn_local(async move {
            match api::save_role(&dto).await {
                Ok(()) => {
                    toast.success(if is_new { "Rol creado" } else { "Rol actualizado" });
                    on_saved.run(());
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    let groups = MenuGroup::ALL.iter().map(|group| {
        let modules: Vec<Module> = Module::ALL
            .iter()
            .copied()
            .filter(|m| m.group() == *group)
            .collect();
        view! {
            <fieldset class="role-editor__group">
                <legend>{group.label()}</legend>
                {modules.into_iter().map(|module| view! {
                    <label class="form__checkbox">
                        <input
                            type="checkbox"
                            disabled=protected
                            prop:checked=move || protected || form.with(|f| f.has(module))
                            on:change=move |ev| {
                                let on = event_target_checked(&ev);
                                form.update(|f| f.toggle(module, on));
                            }
                        />
                        " "
                        {module.label()}
                        {module.admin_only().then(|| view! { <span class="role-editor__hint">" (solo ADMIN)"</span> })}
                    </label>
                }).collect_view()}
            </fieldset>
        }
    }).collect_view();

    view! {
        <ModalFrame on_close=on_cancel width="min(720px, 95vw)">
            <ModalHeader
                title=if is_new { "Nuevo rol".to_string() } else { "Editar rol".to_string() }
                on_close=on_cancel
            />
            <div class="modal__body details-form">
                <ErrorAlert error=error />

                <div class="form__group">
                    <label class="form__label">"Nombre"</label>
                    <input
                        class="form__input"
                        type="text"
                        disabled=protected
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev).to_uppercase())
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">"Descripción"</label>
                    <textarea
                        class="form__textarea"
                        rows="2"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    />
                </div>

                {protected.then(|| view! {
                    <div class="alert alert--info">"El rol ADMIN tiene acceso a todos los módulos."</div>
                })}
                <div class="role-editor">{groups}</div>
            </div>
            <div class="modal__footer details-actions">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| save()>
                    {icon("save")}
                    " Guardar"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    {icon("cancel")}
                    " Cancelar"
                </Button>
            </div>
        </ModalFrame>
    }
}
