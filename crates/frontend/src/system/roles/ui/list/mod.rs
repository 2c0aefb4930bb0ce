use contracts::system::roles::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

use crate::shared::components::{ErrorAlert, ListToolbar, SortableHeader};
use crate::shared::config::use_config;
use crate::shared::crud;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_text, contains_ci, ListController, Searchable, Sortable};
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_SYSTEM};
use crate::shared::toast::use_toast;
use crate::system::roles::api;
use crate::system::roles::ui::details::RoleDetails;

impl Searchable for Role {
    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.name, needle)
            || contains_ci(self.description.as_deref().unwrap_or(""), needle)
    }
}

impl Sortable for Role {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "permissions" => self.permissions.len().cmp(&other.permissions.len()),
            _ => cmp_text(&self.name, &other.name),
        }
    }
}

fn permissions_label(role: &Role) -> String {
    if role.is_protected() {
        "Todos".to_string()
    } else {
        format!("{} módulos", role.permissions.len())
    }
}

#[component]
pub fn RolesList() -> impl IntoView {
    let cfg = use_config();
    let toast = use_toast();
    let list = ListController::<Role>::new("name", cfg.ui.page_size);
    let error = RwSignal::new(Option::<String>::None);
    // Some(None) = новая роль
    let editing = RwSignal::new(Option::<Option<Role>>::None);

    let load_data = move || {
        error.set(None);
        spawn_local(async move {
            match api::fetch_roles().await {
                Ok(data) => list.set_data(data),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };
    load_data();

    let delete_role = move |role: Role| {
        if let Err(e) = api::check_deletable(&role) {
            toast.error(e.to_string());
            return;
        }
        crud::delete_with_confirm(api::RESOURCE, role.id, role.name, toast, load_data);
    };

    let state = list.state;

    view! {
        <PageFrame page_id="roles--list" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Roles" count=Signal::derive(move || state.with(|s| s.total_count))>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(None))>
                    {icon("plus")}
                    " Nuevo rol"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load_data()>
                    {icon("refresh")}
                    " Actualizar"
                </Button>
            </PageHeader>

            <div class="page__content">
                <ErrorAlert error=error />
                <ListToolbar controller=list placeholder="Nombre o descripción..." />

                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <SortableHeader controller=list field="name" label="Nombre" />
                            <TableHeaderCell>"Descripción"</TableHeaderCell>
                            <SortableHeader controller=list field="permissions" label="Permisos" />
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || state.with(|s| s.items.clone()).into_iter().map(|role| {
                            let for_edit = role.clone();
                            let for_delete = role.clone();
                            let protected = role.is_protected();
                            let name = role.name.clone();
                            let description = role.description.clone().unwrap_or_default();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            <a href="#" class="table__link" on:click=move |ev| {
                                                ev.prevent_default();
                                                editing.set(Some(Some(for_edit.clone())));
                                            }>
                                                {name}
                                            </a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{description}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{permissions_label(&role)}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            size=ButtonSize::Small
                                            disabled=protected
                                            on_click=move |_| delete_role(for_delete.clone())
                                        >
                                            {icon("delete")}
                                        </Button>
                                    </TableCell>
                                </TableRow>
                            }
                        }).collect_view()}
                    </TableBody>
                </Table>
            </div>

            {move || editing.get().map(|role| view! {
                <RoleDetails
                    role=role
                    on_saved=Callback::new(move |_| {
                        editing.set(None);
                        load_data();
                    })
                    on_cancel=Callback::new(move |_| editing.set(None))
                />
            })}
        </PageFrame>
    }
}
