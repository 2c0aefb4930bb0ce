use crate::domain::common::order::OrderKind;

/// Pedidos a proveedores
pub struct SupplierOrders;

impl OrderKind for SupplierOrders {
    const RESOURCE: &'static str = "/supplier-orders";
    const PARTY_LABEL: &'static str = "proveedor";
    const TITLE: &'static str = "Pedidos a proveedores";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_url() {
        assert_eq!(SupplierOrders::item_url(9), "/supplier-orders/9");
    }
}
