//! Loan-to-value calculator
//!
//! `loan = purchase_price - deposit` and `ltv = loan / purchase_price * 100`.
//! Any two of the four quantities determine the other two.

use serde::{Deserialize, Serialize};

use super::{checked, non_negative, percent, positive, CalcError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LtvInput {
    pub purchase_price: Option<f64>,
    pub deposit: Option<f64>,
    pub loan: Option<f64>,
    pub ltv_percent: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LtvResult {
    pub purchase_price: f64,
    pub deposit: f64,
    pub loan: f64,
    pub ltv_percent: f64,
}

fn from_price_and_loan(purchase_price: f64, loan: f64) -> Result<LtvResult, CalcError> {
    let purchase_price = positive("purchase_price", purchase_price)?;
    if loan > purchase_price {
        return Err(CalcError::field(
            "loan",
            "must not exceed the purchase price",
        ));
    }
    Ok(LtvResult {
        purchase_price,
        deposit: purchase_price - loan,
        loan,
        ltv_percent: checked("ltv_percent", loan / purchase_price * 100.0)?,
    })
}

pub fn solve(input: LtvInput) -> Result<LtvResult, CalcError> {
    let supplied = [
        input.purchase_price,
        input.deposit,
        input.loan,
        input.ltv_percent,
    ]
    .iter()
    .filter(|v| v.is_some())
    .count();
    if supplied != 2 {
        return Err(CalcError::field(
            "input",
            format!("exactly two values are required, got {supplied}"),
        ));
    }

    let price = input
        .purchase_price
        .map(|v| positive("purchase_price", v))
        .transpose()?;
    let deposit = input.deposit.map(|v| non_negative("deposit", v)).transpose()?;
    let loan = input.loan.map(|v| non_negative("loan", v)).transpose()?;
    let ltv = input.ltv_percent.map(|v| percent("ltv_percent", v)).transpose()?;

    match (price, deposit, loan, ltv) {
        (Some(price), Some(deposit), None, None) => {
            if deposit > price {
                return Err(CalcError::field(
                    "deposit",
                    "must not exceed the purchase price",
                ));
            }
            from_price_and_loan(price, price - deposit)
        }
        (Some(price), None, Some(loan), None) => from_price_and_loan(price, loan),
        (Some(price), None, None, Some(ltv)) => from_price_and_loan(price, price * ltv / 100.0),
        (None, Some(deposit), Some(loan), None) => from_price_and_loan(deposit + loan, loan),
        (None, Some(deposit), None, Some(ltv)) => {
            if ltv >= 100.0 {
                return Err(CalcError::Undefined(
                    "a 100% loan-to-value leaves no room for a deposit".to_string(),
                ));
            }
            let price = checked("purchase_price", deposit / (1.0 - ltv / 100.0))?;
            from_price_and_loan(price, price - deposit)
        }
        (None, None, Some(loan), Some(ltv)) => {
            if ltv == 0.0 {
                return Err(CalcError::field("ltv_percent", "must be greater than zero"));
            }
            let price = checked("purchase_price", loan / (ltv / 100.0))?;
            from_price_and_loan(price, loan)
        }
        _ => Err(CalcError::field("input", "exactly two values are required")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected() -> LtvResult {
        LtvResult {
            purchase_price: 200_000.0,
            deposit: 50_000.0,
            loan: 150_000.0,
            ltv_percent: 75.0,
        }
    }

    #[test]
    fn test_every_pair_reaches_the_same_result() {
        let pairs = [
            LtvInput {
                purchase_price: Some(200_000.0),
                deposit: Some(50_000.0),
                ..Default::default()
            },
            LtvInput {
                purchase_price: Some(200_000.0),
                loan: Some(150_000.0),
                ..Default::default()
            },
            LtvInput {
                purchase_price: Some(200_000.0),
                ltv_percent: Some(75.0),
                ..Default::default()
            },
            LtvInput {
                deposit: Some(50_000.0),
                loan: Some(150_000.0),
                ..Default::default()
            },
            LtvInput {
                deposit: Some(50_000.0),
                ltv_percent: Some(75.0),
                ..Default::default()
            },
            LtvInput {
                loan: Some(150_000.0),
                ltv_percent: Some(75.0),
                ..Default::default()
            },
        ];

        for input in pairs {
            assert_eq!(solve(input).unwrap(), expected(), "{input:?}");
        }
    }

    #[test]
    fn test_requires_exactly_two_values() {
        let input = LtvInput {
            purchase_price: Some(1.0),
            ..Default::default()
        };
        assert!(matches!(
            solve(input),
            Err(CalcError::InvalidField { field: "input", .. })
        ));
    }

    #[test]
    fn test_deposit_larger_than_price_rejected() {
        let input = LtvInput {
            purchase_price: Some(100.0),
            deposit: Some(150.0),
            ..Default::default()
        };
        assert!(matches!(
            solve(input),
            Err(CalcError::InvalidField { field: "deposit", .. })
        ));
    }

    #[test]
    fn test_full_ltv_from_deposit_is_undefined() {
        let input = LtvInput {
            deposit: Some(10.0),
            ltv_percent: Some(100.0),
            ..Default::default()
        };
        assert!(matches!(solve(input), Err(CalcError::Undefined(_))));
    }

    #[test]
    fn test_zero_ltv_from_loan_rejected() {
        let input = LtvInput {
            loan: Some(10.0),
            ltv_percent: Some(0.0),
            ..Default::default()
        };
        assert!(solve(input).is_err());
    }
}
