//! Response models decoded from the unwrapped API envelope.

use chrono::{NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::{ResultStatus, TransactionStatus};
use crate::wire;

/// A typed response the client can decode and stamp with the HTTP status.
pub trait ProviderResponse: DeserializeOwned {
    fn set_http_code(&mut self, code: u16);
}

/// Fields every charge creation response carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargeDetails {
    #[serde(deserialize_with = "wire::null_default")]
    pub result: ResultStatus,
    #[serde(deserialize_with = "wire::null_default")]
    pub response_message: String,
    /// Transaction ID generated by PagHiper
    #[serde(deserialize_with = "wire::null_default")]
    pub transaction_id: String,
    #[serde(deserialize_with = "wire::datetime")]
    pub created_date: Option<NaiveDateTime>,
    #[serde(deserialize_with = "wire::cents")]
    pub value_cents: i64,
    #[serde(deserialize_with = "wire::null_default")]
    pub status: TransactionStatus,
    #[serde(deserialize_with = "wire::null_default")]
    pub order_id: String,
    #[serde(deserialize_with = "wire::date")]
    pub due_date: Option<NaiveDate>,
}

/// QR code data for paying a PIX charge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PixCode {
    /// Base64-encoded QR code image
    #[serde(deserialize_with = "wire::null_default")]
    pub qrcode_base64: String,
    #[serde(deserialize_with = "wire::null_default")]
    pub qrcode_image_url: String,
    /// Copy-and-paste code ("Pix Copia e Cola")
    #[serde(deserialize_with = "wire::null_default")]
    pub emv: String,
    #[serde(deserialize_with = "wire::null_default")]
    pub pix_url: String,
    /// Central bank (BACEN) URL
    #[serde(deserialize_with = "wire::null_default")]
    pub bacen_url: String,
}

/// Response to a PIX creation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PixResponse {
    #[serde(flatten)]
    pub charge: ChargeDetails,
    #[serde(deserialize_with = "wire::null_default")]
    pub pix_code: PixCode,
    /// HTTP status of the response that produced this value
    pub http_code: u16,
}

impl ProviderResponse for PixResponse {
    fn set_http_code(&mut self, code: u16) {
        self.http_code = code;
    }
}

/// Printable slip data for a boleto.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankSlip {
    /// Typeable line ("linha digitável")
    #[serde(deserialize_with = "wire::null_default")]
    pub digitable_line: String,
    #[serde(deserialize_with = "wire::null_default")]
    pub url_slip: String,
    #[serde(deserialize_with = "wire::null_default")]
    pub url_slip_pdf: String,
    #[serde(deserialize_with = "wire::null_default")]
    pub bar_code_number_to_image: String,
}

/// Response to a boleto creation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoletoResponse {
    #[serde(flatten)]
    pub charge: ChargeDetails,
    #[serde(deserialize_with = "wire::null_default")]
    pub bank_slip: BankSlip,
    pub http_code: u16,
}

impl ProviderResponse for BoletoResponse {
    fn set_http_code(&mut self, code: u16) {
        self.http_code = code;
    }
}
