use crate::palette::Palette;
use crate::prelude::{eprintln, println, *};
use futures::future::join_all;
use minitools_core::calc::format_amount;
use minitools_core::remote::{
    self, CpmRequest, CpmResponse, LinkPrice, LinkPriceRequest, PaypalFeeRequest,
    PaypalFeeResponse,
};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

#[derive(Debug, clap::Parser)]
#[command(name = "remote")]
#[command(about = "Remote fee and price calculators")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,

    /// Calculation API base URL (overrides MINITOOLS_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value = "15")]
    pub timeout: u64,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Cost per mille computed by the remote service
    #[clap(name = "cpm")]
    Cpm(CpmOptions),

    /// PayPal fee for a payment amount
    #[clap(name = "paypal-fee")]
    PaypalFee(PaypalFeeOptions),

    /// Estimated link prices for a list of URLs
    #[clap(name = "link-prices")]
    LinkPrices(LinkPricesOptions),
}

#[derive(Debug, Clone, clap::Args)]
pub struct CpmOptions {
    #[arg(long)]
    pub cost: f64,

    #[arg(long)]
    pub impressions: f64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct PaypalFeeOptions {
    #[arg(long)]
    pub amount: f64,

    /// ISO country code of the payment
    #[arg(long)]
    pub country: Option<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LinkPricesOptions {
    /// URLs to price
    #[arg(required = true, num_args = 1..)]
    pub urls: Vec<String>,
}

/// Remote calculator configuration from environment variables
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl RemoteConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::resolve(None, Duration::from_secs(15))
    }

    pub fn resolve(base_url: Option<String>, timeout: Duration) -> Result<Self> {
        let base_url = match base_url {
            Some(url) => url,
            None => std::env::var("MINITOOLS_API_URL")
                .map_err(|_| eyre!("MINITOOLS_API_URL environment variable not set"))?,
        };
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/{name}", self.base_url)
    }
}

fn calculation_failed(err: impl std::fmt::Display) -> color_eyre::eyre::Report {
    log::warn!("remote calculation failed: {err}");
    eyre!("failed to calculate: {err}")
}

pub fn create_client(config: &RemoteConfig) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|e| eyre!("Failed to build HTTP client: {}", e))
}

/// POST a JSON payload and decode the JSON reply; no retry
async fn post_json<B, R>(client: &reqwest::Client, url: &str, body: &B) -> Result<R>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    log::debug!("POST {url}");
    let response = client
        .post(url)
        .json(body)
        .send()
        .await
        .map_err(|e| calculation_failed(Error::Network(e.to_string())))?;

    if !response.status().is_success() {
        return Err(calculation_failed(Error::Network(format!(
            "HTTP {}",
            response.status()
        ))));
    }

    response
        .json::<R>()
        .await
        .map_err(|e| calculation_failed(Error::UnexpectedResponse(e.to_string())))
}

pub async fn cpm_data(config: &RemoteConfig, request: CpmRequest) -> Result<CpmResponse> {
    let client = create_client(config)?;
    post_json(&client, &config.endpoint(remote::CPM_ENDPOINT), &request).await
}

pub async fn paypal_fee_data(
    config: &RemoteConfig,
    request: PaypalFeeRequest,
) -> Result<PaypalFeeResponse> {
    let client = create_client(config)?;
    post_json(&client, &config.endpoint(remote::PAYPAL_FEE_ENDPOINT), &request).await
}

/// Price every URL, sending the batches concurrently
///
/// A failed batch fails the whole lookup.
pub async fn link_prices_data(config: &RemoteConfig, urls: &[String]) -> Result<Vec<LinkPrice>> {
    let batches = remote::link_batches(urls);
    if batches.is_empty() {
        return Err(Error::Validation("at least one URL is required".to_string()).into());
    }

    let client = create_client(config)?;
    let url = config.endpoint(remote::LINK_PRICE_ENDPOINT);
    let requests = batches
        .iter()
        .map(|batch: &LinkPriceRequest| post_json::<_, Vec<LinkPrice>>(&client, &url, batch));

    let mut prices = Vec::new();
    for result in join_all(requests).await {
        prices.extend(result?);
    }
    Ok(prices)
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let config = RemoteConfig::resolve(app.api_url.clone(), Duration::from_secs(app.timeout))?;
    if global.verbose {
        eprintln!("Calculation API: {}", config.base_url);
    }
    let palette = global.palette();

    match app.command {
        Commands::Cpm(options) => {
            let request =
                CpmRequest::new(options.cost, options.impressions).map_err(Error::validation)?;
            let response = cpm_data(&config, request).await?;
            if app.json {
                println!("{}", to_json(&response)?);
            } else {
                println!(
                    "{}",
                    format_single_text("CPM", "CPM", response.result, &palette)
                );
            }
        }
        Commands::PaypalFee(options) => {
            let request = PaypalFeeRequest::new(options.amount, options.country)
                .map_err(Error::validation)?;
            let response = paypal_fee_data(&config, request).await?;
            if app.json {
                println!("{}", to_json(&response)?);
            } else {
                println!(
                    "{}",
                    format_single_text("PAYPAL FEE", "Fee", response.fee, &palette)
                );
            }
        }
        Commands::LinkPrices(options) => {
            let prices = link_prices_data(&config, &options.urls).await?;
            if app.json {
                println!("{}", to_json(&prices)?);
            } else {
                println!("{}", format_link_prices_text(&prices, &palette));
            }
        }
    }

    Ok(())
}

fn format_single_text(title: &str, label: &str, value: f64, palette: &Palette) -> String {
    let mut result = palette.banner(title);
    result.push('\n');
    result.push_str(&palette.field(label, &format_amount(value)));
    result
}

fn format_link_prices_text(prices: &[LinkPrice], palette: &Palette) -> String {
    let mut result = palette.banner("LINK PRICES");
    result.push('\n');

    let mut table = new_table();
    table.add_row(prettytable::row!["URL", "Price"]);
    for price in prices {
        table.add_row(prettytable::row![price.url, format_amount(price.price)]);
    }
    result.push_str(&table.to_string());

    let total: f64 = prices.iter().map(|price| price.price).sum();
    result.push_str(&palette.field("Total", &format_amount(total)));
    result
}
