use crate::domain::common::order::OrderKind;

/// Pedidos de clientes
pub struct ClientOrders;

impl OrderKind for ClientOrders {
    const RESOURCE: &'static str = "/client-orders";
    const PARTY_LABEL: &'static str = "cliente";
    const TITLE: &'static str = "Pedidos de clientes";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        assert_eq!(ClientOrders::status_url(4), "/client-orders/4/status");
        assert_eq!(ClientOrders::payments_url(4), "/client-orders/4/payments");
    }
}
