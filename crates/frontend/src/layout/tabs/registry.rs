//! Реестр вкладок: ключ раздела (`Module::key`) → страница.
//!
//! Доступ проверяется здесь же: раздел без права показывает заглушку.

use contracts::system::access::Module;
use leptos::prelude::*;

use crate::dashboards::d400_sales_report::SalesReportPage;
use crate::dashboards::d401_low_stock::LowStockReport;
use crate::domain::a001_category::ui::list::CategoriesList;
use crate::domain::a002_brand::ui::list::BrandsList;
use crate::domain::a003_color::ui::list::ColorsList;
use crate::domain::a004_unit::ui::list::UnitsList;
use crate::domain::a005_payment_method::ui::list::PaymentMethodsList;
use crate::domain::a006_client::ui::list::ClientsList;
use crate::domain::a007_supplier::ui::list::SuppliersList;
use crate::domain::a008_product::ui::list::ProductsList;
use crate::domain::a009_presentation::ui::list::PresentationsList;
use crate::domain::a010_cash_session::ui::history::CashHistoryList;
use crate::domain::a010_cash_session::ui::register::CashRegisterPage;
use crate::domain::a011_inventory::ui::adjustments::InventoryPage;
use crate::domain::a011_inventory::ui::kardex::KardexPage;
use crate::domain::a012_sale::ui::list::SalesList;
use crate::domain::a012_sale::ui::new_sale::NewSalePage;
use crate::domain::a013_client_order::ui::ClientOrdersList;
use crate::domain::a014_supplier_order::ui::SupplierOrdersList;
use crate::system::auth::guard::RequireModule;
use crate::system::roles::ui::list::RolesList;
use crate::system::users::ui::list::UsersList;

fn module_view(module: Module) -> AnyView {
    match module {
        Module::CashRegister => view! { <CashRegisterPage /> }.into_any(),
        Module::CashHistory => view! { <CashHistoryList /> }.into_any(),
        Module::Sales => view! { <SalesList /> }.into_any(),
        Module::NewSale => view! { <NewSalePage /> }.into_any(),
        Module::Inventory => view! { <InventoryPage /> }.into_any(),
        Module::Kardex => view! { <KardexPage /> }.into_any(),
        Module::ClientOrders => view! { <ClientOrdersList /> }.into_any(),
        Module::SupplierOrders => view! { <SupplierOrdersList /> }.into_any(),
        Module::Products => view! { <ProductsList /> }.into_any(),
        Module::Presentations => view! { <PresentationsList /> }.into_any(),
        Module::Categories => view! { <CategoriesList /> }.into_any(),
        Module::Brands => view! { <BrandsList /> }.into_any(),
        Module::Colors => view! { <ColorsList /> }.into_any(),
        Module::Units => view! { <UnitsList /> }.into_any(),
        Module::PaymentMethods => view! { <PaymentMethodsList /> }.into_any(),
        Module::Clients => view! { <ClientsList /> }.into_any(),
        Module::Suppliers => view! { <SuppliersList /> }.into_any(),
        Module::Reports => view! {
            <SalesReportPage />
            <LowStockReport />
        }
        .into_any(),
        Module::Users => view! { <UsersList /> }.into_any(),
        Module::Roles => view! { <RolesList /> }.into_any(),
    }
}

pub fn render_tab_content(key: &str) -> AnyView {
    match Module::from_key(key) {
        Some(module) => view! {
            <RequireModule module=module>
                {module_view(module)}
            </RequireModule>
        }
        .into_any(),
        None => {
            log::warn!("unknown tab key '{}'", key);
            view! {
                <div class="placeholder">{format!("Sección desconocida: {}", key)}</div>
            }
            .into_any()
        }
    }
}
