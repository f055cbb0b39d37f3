//! # PagHiper Client SDK
//!
//! A typed Rust client for the PagHiper PIX and boleto API.
//!
//! Every call returns `Result<ApiResult<T>, ClientError>`: the outer error
//! covers local failures (validation, transport, malformed JSON), the inner
//! one is the provider's own rejection.

pub mod config;
pub mod executor;

use std::future::Future;
use std::sync::Arc;

use paghiper_types::{
    ApiResult, BoletoRequest, BoletoResponse, FormatTaxIdValidator, NotificationRequest, Payload,
    PixRequest, PixResponse, ProviderResponse, TaxIdValidator, ValidationError,
};
use reqwest::Client;
use serde_json::{Map, Value};
use tracing::{instrument, warn};

pub use config::ClientConfig;
use executor::{Action, classify, decode, execute};

/// Production endpoint for PIX requests.
pub const PIX_ENDPOINT: &str = "https://pix.paghiper.com/invoice/";

/// Production endpoint for boleto requests.
pub const BOLETO_ENDPOINT: &str = "https://api.paghiper.com/invoice/";

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{key} not found in response")]
    EnvelopeNotFound { key: String },

    #[error("unable to parse {key} from response")]
    EnvelopeMalformed { key: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// PagHiper API client.
#[derive(Clone)]
pub struct PagHiperClient {
    pix_endpoint: String,
    boleto_endpoint: String,
    tax_ids: Arc<dyn TaxIdValidator>,
    http: Client,
}

impl Default for PagHiperClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PagHiperClient {
    /// Creates a client pointed at the production endpoints.
    pub fn new() -> Self {
        Self {
            pix_endpoint: PIX_ENDPOINT.to_string(),
            boleto_endpoint: BOLETO_ENDPOINT.to_string(),
            tax_ids: Arc::new(FormatTaxIdValidator),
            http: Client::new(),
        }
    }

    /// Creates a client using the endpoints from `config`.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new()
            .with_pix_endpoint(&config.pix_endpoint)
            .with_boleto_endpoint(&config.boleto_endpoint)
    }

    /// Overrides the PIX endpoint. The URL must contain `pix` for the
    /// response envelope to be recognised.
    pub fn with_pix_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.pix_endpoint = normalize_endpoint(endpoint.into());
        self
    }

    pub fn with_boleto_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.boleto_endpoint = normalize_endpoint(endpoint.into());
        self
    }

    /// Replaces the format-only CPF/CNPJ check with `validator`.
    pub fn with_tax_id_validator(mut self, validator: impl TaxIdValidator + 'static) -> Self {
        self.tax_ids = Arc::new(validator);
        self
    }

    /// Uses a preconfigured HTTP client (timeouts, proxies, TLS).
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    pub fn pix_endpoint(&self) -> &str {
        &self.pix_endpoint
    }

    pub fn boleto_endpoint(&self) -> &str {
        &self.boleto_endpoint
    }

    /// Creates a PIX charge.
    ///
    /// The request is validated before anything is sent.
    #[instrument(skip_all, fields(order_id = %request.payment.order_id))]
    pub async fn create_pix(
        &self,
        request: &PixRequest,
    ) -> Result<ApiResult<PixResponse>, ClientError> {
        request.validate_with(self.tax_ids.as_ref())?;
        let payload = request.to_payload()?;
        self.create(&self.pix_endpoint, &payload).await
    }

    /// Creates a boleto.
    #[instrument(skip_all, fields(order_id = %request.payment.order_id))]
    pub async fn create_boleto(
        &self,
        request: &BoletoRequest,
    ) -> Result<ApiResult<BoletoResponse>, ClientError> {
        request.validate_with(self.tax_ids.as_ref())?;
        let payload = request.to_payload()?;
        self.create(&self.boleto_endpoint, &payload).await
    }

    /// Looks up the transaction behind a webhook notification.
    ///
    /// Returns the unwrapped status object as-is.
    #[instrument(skip(self, request), fields(transaction_id = %request.transaction_id))]
    pub async fn notification_status(
        &self,
        endpoint: &str,
        request: &NotificationRequest,
    ) -> Result<ApiResult<Map<String, Value>>, ClientError> {
        request.validate()?;
        let endpoint = normalize_endpoint(endpoint.to_string());
        Ok(self
            .call(&endpoint, Action::Notification, request)
            .await?
            .map(|(object, _)| object))
    }

    pub async fn pix_notification_status(
        &self,
        request: &NotificationRequest,
    ) -> Result<ApiResult<Map<String, Value>>, ClientError> {
        self.notification_status(&self.pix_endpoint, request).await
    }

    pub async fn boleto_notification_status(
        &self,
        request: &NotificationRequest,
    ) -> Result<ApiResult<Map<String, Value>>, ClientError> {
        self.notification_status(&self.boleto_endpoint, request)
            .await
    }

    async fn create<T: ProviderResponse>(
        &self,
        endpoint: &str,
        payload: &Payload,
    ) -> Result<ApiResult<T>, ClientError> {
        let (object, http_code) = match self.call(endpoint, Action::Create, payload).await? {
            Ok(accepted) => accepted,
            Err(rejection) => return Ok(Err(rejection)),
        };
        Ok(Ok(decode(object, http_code)?))
    }

    async fn call<P: serde::Serialize + ?Sized>(
        &self,
        endpoint: &str,
        action: Action,
        payload: &P,
    ) -> Result<ApiResult<(Map<String, Value>, u16)>, ClientError> {
        let (object, http_code) = execute(&self.http, endpoint, action, payload).await?;
        if let Some(rejection) = classify(&object, http_code) {
            warn!(
                http_code,
                message = %rejection.response_message,
                "PagHiper rejected the request"
            );
            return Ok(Err(rejection));
        }
        Ok(Ok((object, http_code)))
    }
}

fn normalize_endpoint(endpoint: String) -> String {
    if endpoint.ends_with('/') {
        endpoint
    } else {
        format!("{endpoint}/")
    }
}

/// Submits a request to PagHiper through `client`.
pub trait Create {
    type Response;

    fn create(
        &self,
        client: &PagHiperClient,
    ) -> impl Future<Output = Result<ApiResult<Self::Response>, ClientError>> + Send;
}

impl Create for PixRequest {
    type Response = PixResponse;

    fn create(
        &self,
        client: &PagHiperClient,
    ) -> impl Future<Output = Result<ApiResult<PixResponse>, ClientError>> + Send {
        client.create_pix(self)
    }
}

impl Create for BoletoRequest {
    type Response = BoletoResponse;

    fn create(
        &self,
        client: &PagHiperClient,
    ) -> impl Future<Output = Result<ApiResult<BoletoResponse>, ClientError>> + Send {
        client.create_boleto(self)
    }
}
