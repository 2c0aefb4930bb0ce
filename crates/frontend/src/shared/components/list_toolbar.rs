//! Панель фильтров списка: поиск, диапазон дат и пагинация

use leptos::prelude::*;
use thaw::*;

use super::pagination_controls::PaginationControls;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::list_utils::{ListController, Searchable, Sortable};

#[component]
pub fn ListToolbar<T>(
    controller: ListController<T>,
    #[prop(optional)] placeholder: &'static str,
    /// Показывать поля «desde / hasta»
    #[prop(optional)]
    with_dates: bool,
    /// Доп. фильтры страницы (селекты категорий, статусов)
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView
where
    T: Searchable + Sortable + Clone + Send + Sync + 'static,
{
    let cfg = use_config();
    let search = RwSignal::new(String::new());
    let date_from = RwSignal::new(String::new());
    let date_to = RwSignal::new(String::new());
    let state = controller.state;

    let apply = move || {
        controller.set_search(search.get_untracked());
        if with_dates {
            controller.set_date_range(date_from.get_untracked(), date_to.get_untracked());
        }
    };

    let reset = move || {
        search.set(String::new());
        date_from.set(String::new());
        date_to.set(String::new());
        apply();
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left">
                    {icon("filter")}
                    <span class="filter-panel__title">"Filtros"</span>
                </div>
                <div class="filter-panel-header__center">
                    <PaginationControls
                        current_page=Signal::derive(move || state.with(|s| s.page))
                        total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                        total_count=Signal::derive(move || state.with(|s| s.total_count))
                        page_size=Signal::derive(move || state.with(|s| s.page_size))
                        on_page_change=Callback::new(move |p| controller.go_to_page(p))
                        on_page_size_change=Callback::new(move |s| controller.change_page_size(s))
                        page_size_options=cfg.ui.page_size_options.clone()
                    />
                </div>
            </div>
            <div class="filter-panel-content">
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <div style="flex: 1; max-width: 320px;">
                        <Input
                            value=search
                            placeholder=if placeholder.is_empty() { "Buscar..." } else { placeholder }
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    apply();
                                }
                            }
                        />
                    </div>
                    {with_dates.then(|| view! {
                        <div class="form__group">
                            <label class="form__label">"Desde"</label>
                            <input
                                type="date"
                                class="form__input"
                                prop:value=move || date_from.get()
                                on:change=move |ev| date_from.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Hasta"</label>
                            <input
                                type="date"
                                class="form__input"
                                prop:value=move || date_to.get()
                                on:change=move |ev| date_to.set(event_target_value(&ev))
                            />
                        </div>
                    })}
                    {children.map(|c| c())}
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| apply()>
                        {icon("search")}
                        " Buscar"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| reset()>
                        "Limpiar"
                    </Button>
                </Flex>
            </div>
        </div>
    }
}
