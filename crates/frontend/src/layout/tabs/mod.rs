//! Вкладки: обёртка `TabPage` и реестр `tab.key → View`

pub mod page;
pub mod registry;

pub use page::TabPage;
