//! Типовая страница справочника: список с поиском, сортировкой и пагинацией,
//! переключатель активности, удаление и модальный редактор.

use contracts::domain::common::EntityId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use thaw::*;

use super::components::{ActiveToggle, ErrorAlert, ListToolbar, SortableHeader};
use super::config::use_config;
use super::crud::{self, ActiveRecord};
use super::icons::icon;
use super::list_utils::{ListController, Searchable, Sortable};
use super::page_frame::{PageFrame, PageHeader, PAGE_CAT_LIST};
use super::toast::use_toast;

/// Колонка таблицы; `sort` - поле для `Sortable::compare_by_field`
pub struct Column {
    pub label: &'static str,
    pub sort: Option<&'static str>,
}

pub const fn col(label: &'static str, sort: &'static str) -> Column {
    Column {
        label,
        sort: Some(sort),
    }
}

pub const fn plain(label: &'static str) -> Column {
    Column { label, sort: None }
}

pub trait CrudEntity:
    ActiveRecord + Searchable + Sortable + Clone + Send + Sync + DeserializeOwned + 'static
{
    const RESOURCE: &'static str;
    const TITLE: &'static str;
    const PAGE_ID: &'static str;
    const SEARCH_HINT: &'static str;
    const DEFAULT_SORT: &'static str;

    fn columns() -> &'static [Column];

    /// Название записи для подтверждения удаления
    fn label(&self) -> String;

    /// Ячейки строки в порядке `columns()`
    fn cells(&self) -> AnyView;

    /// Форма создания (`None`) или редактирования
    fn editor(record: Option<Self>, on_saved: Callback<()>, on_cancel: Callback<()>) -> AnyView;
}

pub fn text_cell(text: impl Into<String>) -> impl IntoView {
    let text = text.into();
    view! {
        <TableCell>
            <TableCellLayout truncate=true>{text}</TableCellLayout>
        </TableCell>
    }
}

pub fn crud_list_view<T: CrudEntity>() -> impl IntoView {
    let cfg = use_config();
    let toast = use_toast();
    let list = ListController::<T>::new(T::DEFAULT_SORT, cfg.ui.page_size);
    let error = RwSignal::new(Option::<String>::None);
    let loading = RwSignal::new(false);
    // Some(None) = новая запись
    let editing = RwSignal::new(Option::<Option<T>>::None);

    let load_data = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match crud::fetch_all::<T>(T::RESOURCE).await {
                Ok(data) => {
                    log::debug!("{}: {} records", T::RESOURCE, data.len());
                    list.set_data(data);
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            loading.set(false);
        });
    };
    load_data();

    let toggle = move |id: EntityId, on: bool| crud::toggle_active(list, T::RESOURCE, id, on, toast);
    let delete = move |id: EntityId, label: String| {
        crud::delete_with_confirm(T::RESOURCE, id, label, toast, load_data)
    };
    let on_saved = Callback::new(move |_| {
        editing.set(None);
        load_data();
    });
    let on_cancel = Callback::new(move |_| editing.set(None));

    let state = list.state;

    view! {
        <PageFrame page_id=T::PAGE_ID category=PAGE_CAT_LIST>
            <PageHeader title=T::TITLE count=Signal::derive(move || state.with(|s| s.total_count))>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(None))>
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
                <ListToolbar controller=list placeholder=T::SEARCH_HINT />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                {T::columns().iter().map(|c| match c.sort {
                                    Some(field) => view! { <SortableHeader controller=list field=field label=c.label /> }.into_any(),
                                    None => view! { <TableHeaderCell>{c.label}</TableHeaderCell> }.into_any(),
                                }).collect_view()}
                                <TableHeaderCell>"Activo"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || state.with(|s| s.items.clone()).into_iter().map(|record| {
                                let id = record.id();
                                let label = record.label();
                                let cells = record.cells();
                                let for_edit = record.clone();
                                view! {
                                    <TableRow>
                                        {cells}
                                        <TableCell>
                                            <ActiveToggle
                                                active=record.is_active()
                                                on_toggle=Callback::new(move |on| toggle(id, on))
                                            />
                                        </TableCell>
                                        <TableCell>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                size=ButtonSize::Small
                                                on_click=move |_| editing.set(Some(Some(for_edit.clone())))
                                            >
                                                {icon("edit")}
                                            </Button>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                size=ButtonSize::Small
                                                on_click=move |_| delete(id, label.clone())
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
            </div>

            {move || editing.get().map(|record| T::editor(record, on_saved, on_cancel))}
        </PageFrame>
    }
}
