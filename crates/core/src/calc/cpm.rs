//! Cost per mille: `cpm = cost / impressions * 1000`

use serde::{Deserialize, Serialize};

use super::{checked, non_negative, positive, CalcError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CpmUnknown {
    Cost,
    Impressions,
    Cpm,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CpmInput {
    pub cost: Option<f64>,
    pub impressions: Option<f64>,
    pub cpm: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CpmResult {
    pub cost: f64,
    pub impressions: f64,
    pub cpm: f64,
}

fn required(field: &'static str, value: Option<f64>) -> Result<f64, CalcError> {
    value.ok_or_else(|| CalcError::field(field, "is required"))
}

/// Solve for the unknown field from the other two
pub fn solve(input: CpmInput, unknown: CpmUnknown) -> Result<CpmResult, CalcError> {
    match unknown {
        CpmUnknown::Cpm => {
            let cost = non_negative("cost", required("cost", input.cost)?)?;
            let impressions = positive("impressions", required("impressions", input.impressions)?)?;
            let cpm = checked("cpm", cost / impressions * 1000.0)?;
            Ok(CpmResult {
                cost,
                impressions,
                cpm,
            })
        }
        CpmUnknown::Cost => {
            let impressions =
                non_negative("impressions", required("impressions", input.impressions)?)?;
            let cpm = non_negative("cpm", required("cpm", input.cpm)?)?;
            let cost = checked("cost", cpm * impressions / 1000.0)?;
            Ok(CpmResult {
                cost,
                impressions,
                cpm,
            })
        }
        CpmUnknown::Impressions => {
            let cost = non_negative("cost", required("cost", input.cost)?)?;
            let cpm = positive("cpm", required("cpm", input.cpm)?)?;
            let impressions = checked("impressions", cost / cpm * 1000.0)?;
            Ok(CpmResult {
                cost,
                impressions,
                cpm,
            })
        }
    }
}
