use serde::{Deserialize, Serialize};

/// Verdict the API puts in the `result` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    #[default]
    Success,
    Reject,
}

impl AsRef<str> for ResultStatus {
    fn as_ref(&self) -> &str {
        match self {
            Self::Success => "success",
            Self::Reject => "reject",
        }
    }
}

impl std::fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// Lifecycle of a PagHiper transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Waiting for payment
    #[default]
    Pending,
    /// Boleto reserved for payment, not yet cleared
    Reserved,
    Canceled,
    Completed,
    /// Payment approved
    Paid,
    /// Under analysis
    Processing,
    Refunded,
    /// Status string this library does not know about
    #[serde(other)]
    Unknown,
}

impl AsRef<str> for TransactionStatus {
    fn as_ref(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Reserved => "reserved",
            Self::Canceled => "canceled",
            Self::Completed => "completed",
            Self::Paid => "paid",
            Self::Processing => "processing",
            Self::Refunded => "refunded",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl TransactionStatus {
    /// True once the money has been received.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Paid | Self::Completed)
    }
}
