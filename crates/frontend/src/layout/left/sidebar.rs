//! Сайдбар: группы меню с разделами, доступными роли пользователя

use contracts::system::access::{can_access, MenuGroup, Module};
use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

/// Группы меню и их разделы, видимые для роли; пустые группы скрываются
pub fn visible_menu(role: &str, permissions: &[String]) -> Vec<(MenuGroup, Vec<Module>)> {
    MenuGroup::ALL
        .iter()
        .map(|group| {
            let modules: Vec<Module> = Module::ALL
                .iter()
                .copied()
                .filter(|m| m.group() == *group && can_access(role, permissions, *m))
                .collect();
            (*group, modules)
        })
        .filter(|(_, modules)| !modules.is_empty())
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let auth = use_auth();
    let collapsed = RwSignal::new(Vec::<&'static str>::new());

    let menu = move || {
        auth.with(|s| match &s.user_info {
            Some(u) => visible_menu(&u.role, &u.permissions),
            None => vec![],
        })
    };

    view! {
        <div class="app-sidebar__content">
            {move || menu().into_iter().map(|(group, modules)| {
                let group_key = group.label();
                let is_expanded = move || !collapsed.with(|c| c.contains(&group_key));
                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| collapsed.update(|c| {
                                if let Some(pos) = c.iter().position(|g| *g == group_key) {
                                    c.remove(pos);
                                } else {
                                    c.push(group_key);
                                }
                            })
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon())}
                                <span>{group.label()}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=is_expanded
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>
                        <Show when=is_expanded>
                            <div class="app-sidebar__children">
                                {modules.iter().map(|module| {
                                    let module = *module;
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.with(|a| a.as_deref() == Some(module.key()))
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_module(module)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(module.icon())}
                                                <span>{module.label()}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cashier_menu() {
        let perms = vec!["cash_register".to_string(), "sales".to_string(), "new_sale".to_string()];
        let menu = visible_menu("CAJERO", &perms);
        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].0, MenuGroup::Operations);
        assert_eq!(
            menu[0].1,
            vec![Module::CashRegister, Module::Sales, Module::NewSale]
        );
    }

    #[test]
    fn test_admin_menu_has_every_module() {
        let menu = visible_menu("ADMIN", &[]);
        let total: usize = menu.iter().map(|(_, m)| m.len()).sum();
        assert_eq!(total, Module::ALL.len());
        assert_eq!(menu.len(), MenuGroup::ALL.len());
    }
}
