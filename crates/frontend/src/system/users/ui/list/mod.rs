use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

use crate::shared::components::{ActiveBadge, ActiveToggle, ErrorAlert, ListToolbar, SortableHeader};
use crate::shared::config::use_config;
use crate::shared::crud::{self, ActiveRecord};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_text, contains_ci, ListController, Searchable, Sortable};
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_SYSTEM};
use crate::shared::toast::use_toast;
use crate::system::users::api;
use crate::system::users::ui::details::{ResetPasswordModal, UserDetails};

impl Searchable for User {
    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.username, needle)
            || contains_ci(self.full_name.as_deref().unwrap_or(""), needle)
            || contains_ci(self.email.as_deref().unwrap_or(""), needle)
            || contains_ci(&self.role_name, needle)
    }
}

impl Sortable for User {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "full_name" => cmp_text(
                self.full_name.as_deref().unwrap_or(""),
                other.full_name.as_deref().unwrap_or(""),
            ),
            "role" => cmp_text(&self.role_name, &other.role_name),
            "active" => self.active.cmp(&other.active),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => cmp_text(&self.username, &other.username),
        }
    }
}

impl ActiveRecord for User {
    fn id(&self) -> i64 {
        self.id
    }
    fn is_active(&self) -> bool {
        self.active
    }
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

#[derive(Clone)]
enum Dialog {
    Edit(Option<User>),
    ResetPassword(User),
}

#[component]
pub fn UsersList() -> impl IntoView {
    let cfg = use_config();
    let toast = use_toast();
    let list = ListController::<User>::new("username", cfg.ui.page_size);
    let error = RwSignal::new(Option::<String>::None);
    let loading = RwSignal::new(false);
    let dialog = RwSignal::new(Option::<Dialog>::None);

    let load_data = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(data) => list.set_data(data),
                Err(e) => error.set(Some(format!("No se pudo cargar usuarios: {}", e.user_message()))),
            }
            loading.set(false);
        });
    };

    load_data();

    let close = Callback::new(move |_| dialog.set(None));
    let saved = Callback::new(move |_| {
        dialog.set(None);
        load_data();
    });

    let state = list.state;

    view! {
        <PageFrame page_id="users--list" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Usuarios" count=Signal::derive(move || state.with(|s| s.total_count))>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| dialog.set(Some(Dialog::Edit(None)))>
                    {icon("plus")}
                    " Nuevo"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load_data() disabled=loading>
                    {icon("refresh")}
                    {move || if loading.get() { " Cargando..." } else { " Actualizar" }}
                </Button>
            </PageHeader>

            <div class="page__content">
                <ErrorAlert error=error />
                <ListToolbar controller=list placeholder="Usuario, nombre, correo o rol..." />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeader controller=list field="username" label="Usuario" />
                                <SortableHeader controller=list field="full_name" label="Nombre" />
                                <TableHeaderCell>"Correo"</TableHeaderCell>
                                <SortableHeader controller=list field="role" label="Rol" />
                                <SortableHeader controller=list field="active" label="Estado" />
                                <SortableHeader controller=list field="created_at" label="Creado" />
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || state.with(|s| s.items.clone()).into_iter().map(|user| {
                                let id = user.id;
                                let active = user.active;
                                let for_edit = user.clone();
                                let for_reset = user.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <a href="#" class="table__link" on:click=move |ev| {
                                                    ev.prevent_default();
                                                    dialog.set(Some(Dialog::Edit(Some(for_edit.clone()))));
                                                }>
                                                    {user.username.clone()}
                                                </a>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{user.full_name.clone().unwrap_or_default()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{user.email.clone().unwrap_or_default()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{user.role_name.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <ActiveToggle
                                                    active=active
                                                    on_toggle=Callback::new(move |on| crud::toggle_active(list, api::RESOURCE, id, on, toast))
                                                />
                                                <ActiveBadge active=active />
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_datetime(&user.created_at)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                size=ButtonSize::Small
                                                on_click=move |_| dialog.set(Some(Dialog::ResetPassword(for_reset.clone())))
                                            >
                                                {icon("key")}
                                            </Button>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </div>
            </div>

            {move || dialog.get().map(|d| match d {
                Dialog::Edit(user) => view! { <UserDetails user=user on_saved=saved on_cancel=close /> }.into_any(),
                Dialog::ResetPassword(user) => view! { <ResetPasswordModal user=user on_close=close /> }.into_any(),
            })}
        </PageFrame>
    }
}
