//! Quote form state, validation and the derived summary live here.

pub mod app_state;
pub mod entities;
pub mod form;
pub mod reference;
pub mod summary;
pub mod validation;

pub use app_state::{AppState, QuoteRequest, QuoteRequestHandler};
pub use entities::{Address, AddressField, CargoType, Leg, Package, PackageField, ServiceLevel};
pub use form::{QuoteForm, QuoteInput};
pub use reference::{ReferenceData, ReferenceError};
pub use summary::QuoteSummary;
pub use validation::ErrorMap;
