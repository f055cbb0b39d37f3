//! Domain models for PagHiper payment requests.

pub mod item;
pub mod payer;
pub mod payment;
pub mod status;

pub use item::Item;
pub use payer::{Address, Payer};
pub use payment::PaymentRequest;
pub use status::{ResultStatus, TransactionStatus};
