pub mod d400_sales_report;
pub mod d401_low_stock;
