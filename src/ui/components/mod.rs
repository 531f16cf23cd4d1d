pub mod address_fields;
pub mod cargo_type_card;
pub mod field_error;
pub mod package_card;
pub mod summary_panel;
pub mod toast;
