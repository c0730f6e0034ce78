//! Sample Hub order flow.
//!
//! Authenticates with the client credentials from the environment (or a
//! `.env` file), then places a test order for delivery to the UK.
//!
//! Run with: cargo run
//! Run with debug: RUST_LOG=hub_api=debug cargo run

use std::io::{self, Write};
use std::process::ExitCode;

use hub_api::hub::{LineItem, ShippingAddress};
use hub_api::{ConfigError, HubClient, HubConfig, HubError};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

const COUNTRY_ISO_CODE: &str = "GB";
const SHIPPING_TYPE_NAME: &str = "UK Standard";
const INVALID_CREDENTIALS_MESSAGE: &str = "ERROR: Invalid Hub API credentials.";

/// Failures of the sample flow.
#[derive(Debug, Error)]
enum SampleError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Hub(#[from] HubError),

    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("No Hub country with ISO code '{0}'")]
    CountryNotFound(&'static str),

    #[error("No '{name}' shipping type available for country {country_id}")]
    ShippingTypeNotFound {
        name: &'static str,
        country_id: u64,
    },
}

impl SampleError {
    /// The line printed to stderr for this failure.
    fn report(&self) -> String {
        match self {
            Self::Hub(HubError::Authentication(e)) if e.is_credential_failure() => {
                INVALID_CREDENTIALS_MESSAGE.to_string()
            }
            other => format!("ERROR: {other}"),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine; the variables may already be set
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let result = match HubConfig::from_env() {
        Ok(config) => run(&config, &mut io::stdout()).await,
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Sample order flow failed");
            eprintln!("{}", e.report());
            ExitCode::FAILURE
        }
    }
}

/// Runs the sample order flow, writing progress lines to `out`.
async fn run(config: &HubConfig, out: &mut impl Write) -> Result<(), SampleError> {
    let client = HubClient::connect(config).await?;

    let me = client.whoami().await?;
    writeln!(
        out,
        "Successfully authenticated as {}",
        me.name.as_deref().unwrap_or("<unknown>")
    )?;

    // Example parameters for a test order; real integrations supply their own
    let country_id = client
        .get_country_id_by_iso_code(COUNTRY_ISO_CODE)
        .await?
        .ok_or(SampleError::CountryNotFound(COUNTRY_ISO_CODE))?;

    let shipping_type = client
        .get_shipping_types_for_country(country_id, Some(SHIPPING_TYPE_NAME))
        .await?
        .into_iter()
        .next()
        .ok_or(SampleError::ShippingTypeNotFound {
            name: SHIPPING_TYPE_NAME,
            country_id,
        })?;

    let shipping_address = ShippingAddress {
        company_name: "Joe Bloggs Car Parts".to_string(),
        recipient_name: "Joe Bloggs".to_string(),
        addr_line_1: "2 Somewhere Street".to_string(),
        addr_line_2: None,
        city: "Somewheretown".to_string(),
        county: None,
        postal_code: "SW1A 1AA".to_string(),
        country_code: country_id,
    };
    let line_items =
        vec![LineItem::new("2200-48820-025", 3).with_prov_product_code("UD-SIP-SER-PRV-PH")];

    let basket = client
        .create_basket(
            "TESTORDER0001",
            shipping_address,
            shipping_type.id,
            "Use ResellerCom profile",
            line_items,
            "API Sample Order",
        )
        .await?;

    writeln!(out, "Successfully created basket {}", basket.id)?;
    writeln!(out, "{}", basket.web_url(client.base_url())?)?;

    Ok(())
}
