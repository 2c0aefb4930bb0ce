pub mod form_fields;
pub mod list_toolbar;
pub mod pagination_controls;
pub mod status_cells;

pub use form_fields::{
    bind, bind_id, bind_opt, FieldBinding, FormCheckbox, FormModal, FormNumber, FormSelect, FormText,
    FormTextArea,
};
pub use list_toolbar::ListToolbar;
pub use pagination_controls::PaginationControls;
pub use status_cells::{ActiveBadge, ActiveToggle, ErrorAlert, MoneyCell, SortableHeader};
