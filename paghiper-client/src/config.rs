//! Configuration loading from environment.

use std::env;

use paghiper_types::{NotificationRequest, PaymentRequest};

use crate::{BOLETO_ENDPOINT, ClientError, PIX_ENDPOINT};

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub pix_endpoint: String,
    pub boleto_endpoint: String,
    pub api_key: String,
    /// Only needed for notification lookups
    pub token: Option<String>,
}

impl ClientConfig {
    /// Loads configuration from environment variables.
    ///
    /// `PAGHIPER_API_KEY` is required; `PAGHIPER_TOKEN`,
    /// `PAGHIPER_PIX_ENDPOINT` and `PAGHIPER_BOLETO_ENDPOINT` are optional.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`ClientConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = value("PAGHIPER_API_KEY").ok_or_else(|| {
            ClientError::Config("PAGHIPER_API_KEY environment variable is required".into())
        })?;

        Ok(Self {
            pix_endpoint: value("PAGHIPER_PIX_ENDPOINT").unwrap_or_else(|| PIX_ENDPOINT.into()),
            boleto_endpoint: value("PAGHIPER_BOLETO_ENDPOINT")
                .unwrap_or_else(|| BOLETO_ENDPOINT.into()),
            api_key,
            token: value("PAGHIPER_TOKEN"),
        })
    }

    /// Starts a payment request carrying the configured API key.
    pub fn payment_request(
        &self,
        order_id: impl Into<String>,
        days_due_date: i32,
        notification_url: impl Into<String>,
    ) -> PaymentRequest {
        PaymentRequest::new(
            self.api_key.clone(),
            order_id,
            days_due_date,
            notification_url,
        )
    }

    /// Builds a notification lookup from the IDs PagHiper posted to the
    /// caller's webhook. Requires a configured token.
    pub fn notification_request(
        &self,
        transaction_id: impl Into<String>,
        notification_id: impl Into<String>,
    ) -> Result<NotificationRequest, ClientError> {
        let token = self.token.clone().ok_or_else(|| {
            ClientError::Config("PAGHIPER_TOKEN is required for notification lookups".into())
        })?;
        Ok(NotificationRequest::new(
            self.api_key.clone(),
            token,
            transaction_id,
            notification_id,
        ))
    }
}
