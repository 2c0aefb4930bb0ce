use contracts::domain::a007_supplier::Supplier;
use contracts::domain::a009_presentation::Presentation;
use contracts::domain::a014_supplier_order::SupplierOrders;
use leptos::prelude::*;

use crate::domain::order_common::list::order_list_view;
use crate::domain::order_common::OrderScreen;
use crate::shared::crud::load_options;
use crate::shared::crud_page::CrudEntity;

impl OrderScreen for SupplierOrders {
    const PAGE_ID: &'static str = "supplier_orders--list";
    const PARTY_TITLE: &'static str = "Proveedor";

    fn party_options() -> RwSignal<Vec<(String, String)>> {
        load_options::<Supplier>(Supplier::RESOURCE, |s| {
            s.active.then(|| (s.id, s.business_name.clone()))
        })
    }

    fn default_price(p: &Presentation) -> f64 {
        p.cost_price
    }
}

#[component]
pub fn SupplierOrdersList() -> impl IntoView {
    order_list_view::<SupplierOrders>()
}
