//! Class helpers so every page styles inputs, cards and buttons the same way.

use crate::domain::CargoType;

// ============================================
// INPUT STYLES
// ============================================

pub fn input_class(has_error: bool) -> &'static str {
    if has_error {
        "form-input-large form-input-error"
    } else {
        "form-input-large"
    }
}

pub fn measure_input_class(has_error: bool) -> &'static str {
    if has_error {
        "form-input-large measure-input form-input-error"
    } else {
        "form-input-large measure-input"
    }
}

pub const LABEL: &str = "field-label";
pub const ERROR_TEXT: &str = "field-error";

// ============================================
// CARD STYLES
// ============================================

pub fn cargo_card(active: bool) -> &'static str {
    if active {
        "cargo-card cargo-card-active"
    } else {
        "cargo-card"
    }
}

pub fn cargo_icon(cargo_type: CargoType) -> &'static str {
    match cargo_type {
        CargoType::General => "cargo-icon cargo-icon-blue",
        CargoType::Dangerous => "cargo-icon cargo-icon-orange",
        CargoType::NonStack => "cargo-icon cargo-icon-teal",
    }
}

// ============================================
// BUTTON STYLES
// ============================================

pub const BTN_PRIMARY: &str = "btn-primary";
pub const BTN_QUOTE: &str = "btn-quote";
pub const BTN_REMOVE: &str = "btn-remove";
