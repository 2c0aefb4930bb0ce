pub mod a001_category;
pub mod a002_brand;
pub mod a003_color;
pub mod a004_unit;
pub mod a005_payment_method;
pub mod a006_client;
pub mod a007_supplier;
pub mod a008_product;
pub mod a009_presentation;
pub mod a010_cash_session;
pub mod a011_inventory;
pub mod a012_sale;
pub mod a013_client_order;
pub mod a014_supplier_order;
pub mod order_common;
