use contracts::domain::a006_client::Client;
use contracts::domain::a009_presentation::Presentation;
use contracts::domain::a013_client_order::ClientOrders;
use leptos::prelude::*;

use crate::domain::order_common::list::order_list_view;
use crate::domain::order_common::OrderScreen;
use crate::shared::crud::load_options;
use crate::shared::crud_page::CrudEntity;

impl OrderScreen for ClientOrders {
    const PAGE_ID: &'static str = "client_orders--list";
    const PARTY_TITLE: &'static str = "Cliente";

    fn party_options() -> RwSignal<Vec<(String, String)>> {
        load_options::<Client>(Client::RESOURCE, |c| c.active.then(|| (c.id, c.name.clone())))
    }

    fn default_price(p: &Presentation) -> f64 {
        p.sale_price
    }
}

#[component]
pub fn ClientOrdersList() -> impl IntoView {
    order_list_view::<ClientOrders>()
}
