//! PageFrame - корневая обёртка каждой страницы внутри таба.
//!
//! Корневой элемент получает `id="{module}--{category}"` и
//! `data-page-category`, по которым страницу можно найти в DOM.

use leptos::prelude::*;

pub const PAGE_CAT_LIST: &str = "list";
pub const PAGE_CAT_FORM: &str = "form";
pub const PAGE_CAT_REPORT: &str = "report";
pub const PAGE_CAT_SYSTEM: &str = "system";

#[component]
pub fn PageFrame(
    /// `{module}--{category}`, например `"categories--list"`
    page_id: &'static str,
    /// Одна из констант PAGE_CAT_*
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_FORM => "page page--form",
        PAGE_CAT_REPORT => "page page--report",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}

/// Шапка страницы: заголовок, счётчик записей и кнопки справа
#[component]
pub fn PageHeader(
    title: &'static str,
    #[prop(optional, into)] count: Option<Signal<usize>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                {count.map(|c| view! { <thaw::Badge>{move || c.get().to_string()}</thaw::Badge> })}
            </div>
            <div class="page__header-right">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
