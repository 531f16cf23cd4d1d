pub mod quote;

pub use quote::QuotePage;
