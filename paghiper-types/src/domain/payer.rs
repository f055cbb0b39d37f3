//! Payer domain model.

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::error::ValidationError;
use crate::ports::{FormatTaxIdValidator, TaxIdValidator};

/// The customer paying for the service or product.
///
/// Serializes to the provider's flat `payer_*` keys so it can be merged
/// next to the payment fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payer {
    /// Individual (CPF) or legal entity (CNPJ) tax ID
    #[serde(rename = "payer_cpf_cnpj")]
    pub cpf_cnpj: String,
    #[serde(rename = "payer_email")]
    pub email: String,
    #[serde(rename = "payer_name")]
    pub name: String,
    #[serde(rename = "payer_phone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<u64>,
    #[serde(rename = "payer_street", skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(rename = "payer_number", skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(rename = "payer_complement", skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    #[serde(rename = "payer_district", skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(rename = "payer_city", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Two-letter state code (e.g. `SP`)
    #[serde(rename = "payer_state", skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Kept as text so leading zeros survive (e.g. `01310100`)
    #[serde(rename = "payer_zip_code", skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
}

/// Postal address attached to a payer. Boletos print it on the slip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub number: Option<u32>,
    pub complement: Option<String>,
    pub district: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl Payer {
    /// Creates a payer with the three required identity fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        cpf_cnpj: impl Into<String>,
    ) -> Self {
        Self {
            cpf_cnpj: cpf_cnpj.into(),
            email: email.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_phone(mut self, phone: u64) -> Self {
        self.phone = Some(phone);
        self
    }

    /// Fills in the `payer_*` address fields.
    pub fn with_address(mut self, address: Address) -> Self {
        self.street = Some(address.street);
        self.number = address.number;
        self.complement = address.complement;
        self.district = Some(address.district);
        self.city = Some(address.city);
        self.state = Some(address.state);
        self.zip_code = Some(address.zip_code);
        self
    }

    /// Validates the payer using the bundled format-only tax-ID check.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_with(&FormatTaxIdValidator)
    }

    /// Validates the payer, delegating the tax-ID check to `tax_ids`.
    ///
    /// Checks run in order: email present, email well-formed, name present,
    /// tax ID present, tax ID accepted as CPF or CNPJ. The first failure is
    /// returned.
    pub fn validate_with(&self, tax_ids: &dyn TaxIdValidator) -> Result<(), ValidationError> {
        if self.email.trim().is_empty() {
            return Err(ValidationError::Required("Email"));
        }
        if !self.email.trim().validate_email() {
            return Err(ValidationError::Invalid("Email"));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::Required("Name"));
        }
        if self.cpf_cnpj.trim().is_empty() {
            return Err(ValidationError::Required("CpfCnpj"));
        }
        if !tax_ids.is_valid(&self.cpf_cnpj) {
            return Err(ValidationError::Invalid("CpfCnpj"));
        }
        Ok(())
    }
}
