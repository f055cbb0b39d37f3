//! Port traits (interfaces for external collaborators).
//!
//! The request types depend on these traits, not on concrete implementations.

mod tax_id;

pub use tax_id::{FormatTaxIdValidator, TaxIdValidator};
