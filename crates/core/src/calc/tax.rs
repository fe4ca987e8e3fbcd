//! GST / sales tax

use serde::Serialize;

use super::{checked, non_negative, CalcError};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaxResult {
    pub net_price: f64,
    pub tax_amount: f64,
    pub gross_price: f64,
    pub rate_percent: f64,
}

/// Add tax on top of a net price
pub fn add(net_price: f64, rate_percent: f64) -> Result<TaxResult, CalcError> {
    let net_price = non_negative("net_price", net_price)?;
    let rate_percent = non_negative("rate_percent", rate_percent)?;
    let tax_amount = checked("tax_amount", net_price * rate_percent / 100.0)?;

    Ok(TaxResult {
        net_price,
        tax_amount,
        gross_price: net_price + tax_amount,
        rate_percent,
    })
}

/// Extract the tax already included in a gross price
pub fn remove(gross_price: f64, rate_percent: f64) -> Result<TaxResult, CalcError> {
    let gross_price = non_negative("gross_price", gross_price)?;
    let rate_percent = non_negative("rate_percent", rate_percent)?;
    let net_price = checked("net_price", gross_price / (1.0 + rate_percent / 100.0))?;

    Ok(TaxResult {
        net_price,
        tax_amount: gross_price - net_price,
        gross_price,
        rate_percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_tax() {
        let result = add(100.0, 18.0).unwrap();
        assert_eq!(result.tax_amount, 18.0);
        assert_eq!(result.gross_price, 118.0);
    }

    #[test]
    fn test_remove_tax() {
        let result = remove(118.0, 18.0).unwrap();
        assert!((result.net_price - 100.0).abs() < 1e-9);
        assert!((result.tax_amount - 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_rate() {
        assert_eq!(add(42.0, 0.0).unwrap().gross_price, 42.0);
    }

    #[test]
    fn test_negative_price_rejected() {
        assert!(matches!(
            add(-5.0, 10.0),
            Err(CalcError::InvalidField {
                field: "net_price",
                ..
            })
        ));
    }
}
