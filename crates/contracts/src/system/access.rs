//! Ролевой доступ к разделам приложения.
//!
//! Ключ раздела (`Module::key`) одновременно является ключом вкладки и
//! строкой разрешения в `Role::permissions`.

use serde::{Deserialize, Serialize};

pub const ADMIN_ROLE: &str = "ADMIN";
pub const WILDCARD_PERMISSION: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Module {
    CashRegister,
    CashHistory,
    Sales,
    NewSale,
    Inventory,
    Kardex,
    ClientOrders,
    SupplierOrders,
    Products,
    Presentations,
    Categories,
    Brands,
    Colors,
    Units,
    PaymentMethods,
    Clients,
    Suppliers,
    Reports,
    Users,
    Roles,
}

/// Группа меню в сайдбаре
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuGroup {
    Operations,
    Orders,
    Catalog,
    Maintenance,
    Reports,
    Administration,
}

impl MenuGroup {
    pub fn label(&self) -> &'static str {
        match self {
            MenuGroup::Operations => "Operaciones",
            MenuGroup::Orders => "Pedidos",
            MenuGroup::Catalog => "Productos",
            MenuGroup::Maintenance => "Mantenimiento",
            MenuGroup::Reports => "Reportes",
            MenuGroup::Administration => "Administración",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MenuGroup::Operations => "cash",
            MenuGroup::Orders => "orders",
            MenuGroup::Catalog => "products",
            MenuGroup::Maintenance => "settings",
            MenuGroup::Reports => "bar-chart",
            MenuGroup::Administration => "users",
        }
    }

    pub const ALL: [MenuGroup; 6] = [
        MenuGroup::Operations,
        MenuGroup::Orders,
        MenuGroup::Catalog,
        MenuGroup::Maintenance,
        MenuGroup::Reports,
        MenuGroup::Administration,
    ];
}

impl Module {
    pub const ALL: [Module; 20] = [
        Module::CashRegister,
        Module::CashHistory,
        Module::Sales,
        Module::NewSale,
        Module::Inventory,
        Module::Kardex,
        Module::ClientOrders,
        Module::SupplierOrders,
        Module::Products,
        Module::Presentations,
        Module::Categories,
        Module::Brands,
        Module::Colors,
        Module::Units,
        Module::PaymentMethods,
        Module::Clients,
        Module::Suppliers,
        Module::Reports,
        Module::Users,
        Module::Roles,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Module::CashRegister => "cash_register",
            Module::CashHistory => "cash_history",
            Module::Sales => "sales",
            Module::NewSale => "new_sale",
            Module::Inventory => "inventory",
            Module::Kardex => "kardex",
            Module::ClientOrders => "client_orders",
            Module::SupplierOrders => "supplier_orders",
            Module::Products => "products",
            Module::Presentations => "presentations",
            Module::Categories => "categories",
            Module::Brands => "brands",
            Module::Colors => "colors",
            Module::Units => "units",
            Module::PaymentMethods => "payment_methods",
            Module::Clients => "clients",
            Module::Suppliers => "suppliers",
            Module::Reports => "reports",
            Module::Users => "users",
            Module::Roles => "roles",
        }
    }

    pub fn from_key(key: &str) -> Option<Module> {
        Module::ALL.iter().copied().find(|m| m.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Module::CashRegister => "Caja",
            Module::CashHistory => "Historial de cajas",
            Module::Sales => "Ventas",
            Module::NewSale => "Nueva venta",
            Module::Inventory => "Ajustes de inventario",
            Module::Kardex => "Kardex",
            Module::ClientOrders => "Pedidos de clientes",
            Module::SupplierOrders => "Pedidos a proveedores",
            Module::Products => "Productos",
            Module::Presentations => "Presentaciones",
            Module::Categories => "Categorías",
            Module::Brands => "Marcas",
            Module::Colors => "Colores",
            Module::Units => "Unidades",
            Module::PaymentMethods => "Métodos de pago",
            Module::Clients => "Clientes",
            Module::Suppliers => "Proveedores",
            Module::Reports => "Reportes",
            Module::Users => "Usuarios",
            Module::Roles => "Roles",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Module::CashRegister | Module::CashHistory => "cash",
            Module::Sales | Module::NewSale => "shopping-cart",
            Module::Inventory => "inventory",
            Module::Kardex => "list",
            Module::ClientOrders => "orders",
            Module::SupplierOrders => "purchases",
            Module::Products | Module::Presentations => "products",
            Module::Categories | Module::Brands | Module::Colors | Module::Units => "tag",
            Module::PaymentMethods => "payments",
            Module::Clients => "customers",
            Module::Suppliers => "suppliers",
            Module::Reports => "bar-chart",
            Module::Users => "users",
            Module::Roles => "shield",
        }
    }

    pub fn group(&self) -> MenuGroup {
        match self {
            Module::CashRegister
            | Module::CashHistory
            | Module::Sales
            | Module::NewSale
            | Module::Inventory
            | Module::Kardex => MenuGroup::Operations,
            Module::ClientOrders | Module::SupplierOrders => MenuGroup::Orders,
            Module::Products | Module::Presentations => MenuGroup::Catalog,
            Module::Categories
            | Module::Brands
            | Module::Colors
            | Module::Units
            | Module::PaymentMethods
            | Module::Clients
            | Module::Suppliers => MenuGroup::Maintenance,
            Module::Reports => MenuGroup::Reports,
            Module::Users | Module::Roles => MenuGroup::Administration,
        }
    }

    pub fn admin_only(&self) -> bool {
        matches!(self, Module::Users | Module::Roles)
    }
}

pub fn is_admin_role(role: &str) -> bool {
    role.trim().eq_ignore_ascii_case(ADMIN_ROLE)
}

/// Может ли пользователь с ролью `role` и разрешениями `permissions` открыть раздел
pub fn can_access(role: &str, permissions: &[String], module: Module) -> bool {
    if is_admin_role(role) || permissions.iter().any(|p| p == WILDCARD_PERMISSION) {
        return true;
    }
    if module.admin_only() {
        return false;
    }
    permissions.iter().any(|p| p == module.key())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perms(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_admin_sees_everything() {
        for module in Module::ALL {
            assert!(can_access("admin", &[], module));
        }
    }

    #[test]
    fn test_wildcard_permission() {
        assert!(can_access("SUPERVISOR", &perms(&["*"]), Module::Users));
    }

    #[test]
    fn test_listed_permissions_only() {
        let p = perms(&["sales", "cash_register"]);
        assert!(can_access("CAJERO", &p, Module::Sales));
        assert!(can_access("CAJERO", &p, Module::CashRegister));
        assert!(!can_access("CAJERO", &p, Module::Inventory));
    }

    #[test]
    fn test_admin_only_modules_ignore_explicit_permission() {
        assert!(!can_access("CAJERO", &perms(&["users", "roles"]), Module::Users));
        assert!(!can_access("CAJERO", &perms(&["users", "roles"]), Module::Roles));
    }

    #[test]
    fn test_keys_are_unique_and_resolvable() {
        for module in Module::ALL {
            assert_eq!(Module::from_key(module.key()), Some(module));
        }
        assert_eq!(Module::from_key("unknown"), None);
    }
}
