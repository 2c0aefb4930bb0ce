//! Общий UI заказов клиентов и поставщиков, параметризованный `OrderKind`

pub mod api;
pub mod details;
pub mod list;
pub mod payments;

use contracts::domain::a009_presentation::Presentation;
use contracts::domain::common::order::OrderKind;
use leptos::prelude::*;

/// Различия экранов: справочник контрагентов и цена по умолчанию для строки
pub trait OrderScreen: OrderKind + 'static {
    const PAGE_ID: &'static str;
    const PARTY_TITLE: &'static str;

    /// `(id, name)` активных контрагентов для выбора
    fn party_options() -> RwSignal<Vec<(String, String)>>;

    fn default_price(p: &Presentation) -> f64;
}
