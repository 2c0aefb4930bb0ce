//! Поиск презентации по названию или штрихкоду (касса, корректировки, kardex)

use contracts::domain::a009_presentation::Presentation;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a009_presentation::api::search_presentations;
use crate::shared::number_format::{format_money, format_quantity};

const MAX_RESULTS: usize = 8;

#[component]
pub fn PresentationPicker(
    #[prop(into)] items: Signal<Vec<Presentation>>,
    on_pick: Callback<Presentation>,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let query = RwSignal::new(String::new());

    let results = Memo::new(move |_| {
        let q = query.get();
        items.with(|all| {
            search_presentations(all, &q, MAX_RESULTS)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let pick = move |p: Presentation| {
        query.set(String::new());
        on_pick.run(p);
    };

    view! {
        <div class="picker">
            <Input
                value=query
                placeholder=if placeholder.is_empty() { "Nombre o código de barras..." } else { placeholder }
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    // Сканер штрихкода завершает ввод Enter
                    if ev.key() == "Enter" {
                        if let Some(first) = results.get_untracked().into_iter().next() {
                            pick(first);
                        }
                    }
                }
            />
            <Show when=move || results.with(|r| !r.is_empty())>
                <ul class="picker__results">
                    {move || results.get().into_iter().map(|p| {
                        let label = p.full_name();
                        let meta = format!("{} · stock {}", format_money(p.sale_price), format_quantity(p.stock));
                        view! {
                            <li class="picker__item" on:click=move |_| pick(p.clone())>
                                <span class="picker__name">{label}</span>
                                <span class="picker__meta">{meta}</span>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}
