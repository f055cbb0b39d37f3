//! # PagHiper Types
//!
//! Request, response and error types for the PagHiper payment API.
//! This crate has no IO: only data structures, validation rules and the
//! tax-ID validator port.
//!
//! ## Layout
//!
//! - `domain/` - Payer, line items, the base payment request, status enums
//! - `dto/` - PIX, boleto and notification requests sent to the API
//! - `payload/` - Flattening of request parts into one JSON object
//! - `response/` - Typed responses decoded from the API envelope
//! - `ports/` - Tax-ID validator trait and the bundled format check
//! - `error/` - Validation errors and the provider rejection type

pub mod domain;
pub mod dto;
pub mod error;
pub mod payload;
pub mod ports;
pub mod response;
mod wire;

// Re-export commonly used types
pub use domain::{Address, Item, Payer, PaymentRequest, ResultStatus, TransactionStatus};
pub use dto::*;
pub use error::{ApiResult, PagHiperError, ValidationError};
pub use payload::Payload;
pub use ports::{FormatTaxIdValidator, TaxIdValidator};
pub use response::{
    BankSlip, BoletoResponse, ChargeDetails, PixCode, PixResponse, ProviderResponse,
};
