//! Wire models for the remote fee and price calculators
//!
//! The shell owns the HTTP calls; this module only fixes the payload shapes,
//! validates requests before they leave the process, and splits link lookups
//! into batches.

use serde::{Deserialize, Serialize};

use crate::calc::CalcError;

/// Maximum number of URLs sent in a single link-price request
pub const LINK_BATCH_SIZE: usize = 20;

pub const CPM_ENDPOINT: &str = "calculateCPM";
pub const PAYPAL_FEE_ENDPOINT: &str = "calculatePaypalFee";
pub const LINK_PRICE_ENDPOINT: &str = "calculateLinkPrices";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CpmRequest {
    pub cost: f64,
    pub impressions: f64,
}

impl CpmRequest {
    pub fn new(cost: f64, impressions: f64) -> Result<Self, CalcError> {
        if !cost.is_finite() || cost < 0.0 {
            return Err(CalcError::field("cost", "must be a non-negative number"));
        }
        if !impressions.is_finite() || impressions <= 0.0 {
            return Err(CalcError::field("impressions", "must be greater than zero"));
        }
        Ok(Self { cost, impressions })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CpmResponse {
    pub result: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaypalFeeRequest {
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl PaypalFeeRequest {
    pub fn new(amount: f64, country: Option<String>) -> Result<Self, CalcError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(CalcError::field("amount", "must be greater than zero"));
        }
        let country = country
            .map(|c| c.trim().to_ascii_uppercase())
            .filter(|c| !c.is_empty());
        Ok(Self { amount, country })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaypalFeeResponse {
    pub fee: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPriceRequest {
    pub urls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkPrice {
    pub url: String,
    pub price: f64,
}

/// Trim, drop blanks and duplicates, then split into requests of at most
/// [`LINK_BATCH_SIZE`] URLs. Order of first appearance is kept.
pub fn link_batches<S: AsRef<str>>(urls: &[S]) -> Vec<LinkPriceRequest> {
    let mut seen = std::collections::HashSet::new();
    let cleaned: Vec<String> = urls
        .iter()
        .map(|url| url.as_ref().trim())
        .filter(|url| !url.is_empty())
        .filter(|url| seen.insert(url.to_string()))
        .map(str::to_string)
        .collect();

    cleaned
        .chunks(LINK_BATCH_SIZE)
        .map(|chunk| LinkPriceRequest {
            urls: chunk.to_vec(),
        })
        .collect()
}
