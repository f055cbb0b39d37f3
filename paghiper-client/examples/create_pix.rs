//! Creates a PIX charge and prints how to pay it.
//!
//! Run with: cargo run -p paghiper-client --example create_pix
//!
//! Reads `PAGHIPER_API_KEY` (and optionally `PAGHIPER_PIX_ENDPOINT`) from the
//! environment or a `.env` file.

use paghiper_client::{ClientConfig, Create, PagHiperClient};
use paghiper_types::{Item, Payer, PixRequest};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,paghiper_client=debug".into()),
        )
        .init();

    let config = ClientConfig::from_env()?;
    let client = PagHiperClient::from_config(&config);

    let request = PixRequest::new(
        config.payment_request("order-1", 5, "https://shop.example/paghiper"),
        Payer::new("Maria Silva", "maria@example.com", "529.982.247-25"),
        vec![Item::new("1", "Widget", 1, 1000)],
    );

    match request.create(&client).await? {
        Ok(pix) => {
            println!("✅ Created PIX {} ({})", pix.charge.transaction_id, pix.charge.status);
            println!("   Pay at: {}", pix.pix_code.pix_url);
            println!("   Copy and paste: {}", pix.pix_code.emv);
        }
        Err(rejection) => {
            println!(
                "❌ Rejected ({}): {}",
                rejection.http_code, rejection.response_message
            );
        }
    }

    Ok(())
}
