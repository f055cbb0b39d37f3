//! Tax-ID validator port.
//!
//! Validating CPF/CNPJ documents is delegated to whatever the caller plugs
//! in here. The bundled [`FormatTaxIdValidator`] only checks the shape of the
//! document, not its check digits.

use std::sync::LazyLock;

use regex::Regex;

static CPF_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{11}|\d{3}\.\d{3}\.\d{3}-\d{2})$").expect("valid CPF pattern")
});

static CNPJ_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{14}|\d{2}\.\d{3}\.\d{3}/\d{4}-\d{2})$").expect("valid CNPJ pattern")
});

/// Port for Brazilian national tax-ID validation.
///
/// A document is accepted by the payer validation when either method
/// returns `true`.
pub trait TaxIdValidator: Send + Sync {
    /// Returns true if `document` is a valid individual taxpayer ID (CPF).
    fn is_cpf(&self, document: &str) -> bool;

    /// Returns true if `document` is a valid legal entity ID (CNPJ).
    fn is_cnpj(&self, document: &str) -> bool;

    /// Returns true if `document` is either a CPF or a CNPJ.
    fn is_valid(&self, document: &str) -> bool {
        self.is_cpf(document) || self.is_cnpj(document)
    }
}

/// Format-only validator: accepts the bare-digit or punctuated layouts of
/// CPF (11 digits) and CNPJ (14 digits), rejecting repeated-digit fillers
/// such as `000.000.000-00`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatTaxIdValidator;

impl FormatTaxIdValidator {
    fn has_distinct_digits(document: &str) -> bool {
        let mut digits = document.chars().filter(char::is_ascii_digit);
        match digits.next() {
            Some(first) => digits.any(|d| d != first),
            None => false,
        }
    }
}

impl TaxIdValidator for FormatTaxIdValidator {
    fn is_cpf(&self, document: &str) -> bool {
        CPF_FORMAT.is_match(document) && Self::has_distinct_digits(document)
    }

    fn is_cnpj(&self, document: &str) -> bool {
        CNPJ_FORMAT.is_match(document) && Self::has_distinct_digits(document)
    }
}
