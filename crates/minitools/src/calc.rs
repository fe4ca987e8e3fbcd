use crate::palette::Palette;
use crate::prelude::{println, *};
use minitools_core::calc::{
    cpm, equity, format_amount, ltv, margin, pricing, stats, tax, CalcError,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, clap::Parser)]
#[command(name = "calc")]
#[command(about = "Financial and statistical calculators")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Cost per mille; leave out the value to solve for
    #[clap(name = "cpm")]
    Cpm(CpmOptions),

    /// Loan-to-value from any two of price, deposit, loan and ratio
    #[clap(name = "ltv")]
    Ltv(LtvOptions),

    /// Earnings per share
    #[clap(name = "eps")]
    Eps(EpsOptions),

    /// Add or remove GST / sales tax
    #[clap(name = "tax")]
    Tax(TaxOptions),

    /// Profit margin, simple or broken down
    #[clap(name = "margin")]
    Margin(MarginOptions),

    /// Confidence interval around a sample mean
    #[clap(name = "ci")]
    Ci(CiOptions),

    /// Probabilities of two independent events
    #[clap(name = "probability")]
    Probability(ProbabilityOptions),

    /// Pre- and post-money valuation
    #[clap(name = "valuation")]
    Valuation(ValuationOptions),

    /// Saving and final price after a discount
    #[clap(name = "discount")]
    Discount(DiscountOptions),

    /// Percent of, what percent, percent change
    #[clap(name = "percent")]
    Percent(PercentOptions),
}

#[derive(Debug, Clone, Default, clap::Args, Deserialize)]
pub struct CpmOptions {
    /// Total campaign cost
    #[arg(long)]
    pub cost: Option<f64>,

    /// Number of impressions
    #[arg(long)]
    pub impressions: Option<f64>,

    /// Cost per thousand impressions
    #[arg(long)]
    pub cpm: Option<f64>,
}

#[derive(Debug, Clone, Default, clap::Args, Deserialize)]
pub struct LtvOptions {
    /// Purchase price of the property
    #[arg(long)]
    pub purchase_price: Option<f64>,

    /// Deposit paid up front
    #[arg(long)]
    pub deposit: Option<f64>,

    /// Loan amount
    #[arg(long)]
    pub loan: Option<f64>,

    /// Loan-to-value ratio in percent
    #[arg(long)]
    pub ltv_percent: Option<f64>,
}

#[derive(Debug, Clone, clap::Args, Deserialize)]
pub struct EpsOptions {
    #[arg(long, allow_hyphen_values = true)]
    pub net_income: f64,

    #[arg(long, default_value = "0")]
    #[serde(default)]
    pub preferred_dividends: f64,

    /// Weighted average of common shares outstanding
    #[arg(long)]
    pub common_shares: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxMode {
    /// Amount excludes tax; add it on top
    #[default]
    Add,
    /// Amount includes tax; extract it
    Remove,
}

#[derive(Debug, Clone, clap::Args, Deserialize)]
pub struct TaxOptions {
    /// Net price (add) or gross price (remove)
    pub amount: f64,

    /// Tax rate in percent
    #[arg(long)]
    pub rate: f64,

    #[arg(long, value_enum, default_value = "add")]
    #[serde(default)]
    pub mode: TaxMode,
}

#[derive(Debug, Clone, Default, clap::Args, Deserialize)]
pub struct MarginOptions {
    /// Net profit, for the simple margin
    #[arg(long, allow_hyphen_values = true)]
    pub net_profit: Option<f64>,

    /// Total sale, for the simple margin
    #[arg(long)]
    pub total_sale: Option<f64>,

    /// Revenue, for the gross/operating/net breakdown
    #[arg(long)]
    pub revenue: Option<f64>,

    /// Cost of goods sold, for the breakdown
    #[arg(long)]
    pub cost_of_goods: Option<f64>,

    #[arg(long, default_value = "0")]
    #[serde(default)]
    pub operating_expenses: f64,

    #[arg(long, default_value = "0")]
    #[serde(default)]
    pub interest_and_taxes: f64,
}

#[derive(Debug, Clone, clap::Args, Deserialize)]
pub struct CiOptions {
    #[arg(long, allow_hyphen_values = true)]
    pub mean: f64,

    #[arg(long)]
    pub std_dev: f64,

    #[arg(long)]
    pub sample_size: u64,

    /// Confidence level in percent: 80, 85, 90, 95, 98, 99, 99.5 or 99.9
    #[arg(long, default_value = "95")]
    #[serde(default = "default_confidence_level")]
    pub confidence_level: f64,
}

fn default_confidence_level() -> f64 {
    95.0
}

#[derive(Debug, Clone, clap::Args, Deserialize)]
pub struct ProbabilityOptions {
    /// Total number of equally likely outcomes
    #[arg(long)]
    pub total: u64,

    /// Favourable outcomes for event A
    #[arg(long)]
    pub a: u64,

    /// Favourable outcomes for event B
    #[arg(long)]
    pub b: u64,
}

#[derive(Debug, Clone, clap::Args, Deserialize)]
pub struct ValuationOptions {
    #[arg(long)]
    pub investment: f64,

    /// Equity percentage bought by the investment
    #[arg(long)]
    pub equity_percent: f64,
}

#[derive(Debug, Clone, clap::Args, Deserialize)]
pub struct DiscountOptions {
    #[arg(long)]
    pub original_price: f64,

    #[arg(long)]
    pub discount_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PercentMode {
    /// X percent of Y
    Of,
    /// X is what percent of Y
    What,
    /// Percent change from X to Y
    Change,
}

#[derive(Debug, Clone, clap::Args, Deserialize)]
pub struct PercentOptions {
    #[arg(value_enum)]
    pub mode: PercentMode,

    #[arg(allow_hyphen_values = true)]
    pub x: f64,

    #[arg(allow_hyphen_values = true)]
    pub y: f64,
}

/// A calculator result ready for either renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub title: &'static str,
    #[serde(skip)]
    pub rows: Vec<(&'static str, String)>,
    pub result: serde_json::Value,
}

impl Report {
    fn new<T: Serialize>(
        title: &'static str,
        result: &T,
        rows: Vec<(&'static str, String)>,
    ) -> Result<Self> {
        let result = serde_json::to_value(result)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        Ok(Self {
            title,
            rows,
            result,
        })
    }
}

fn invalid(err: CalcError) -> Error {
    Error::validation(err)
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    log::debug!("calc {:?}", app.command);
    let report = report_data(app.command)?;

    if app.json {
        println!("{}", to_json(&report.result)?);
    } else {
        println!("{}", format_report_text(&report, &global.palette()));
    }

    Ok(())
}

pub fn report_data(command: Commands) -> Result<Report> {
    match command {
        Commands::Cpm(options) => cpm_report(&options),
        Commands::Ltv(options) => ltv_report(&options),
        Commands::Eps(options) => eps_report(&options),
        Commands::Tax(options) => tax_report(&options),
        Commands::Margin(options) => margin_report(&options),
        Commands::Ci(options) => ci_report(&options),
        Commands::Probability(options) => probability_report(&options),
        Commands::Valuation(options) => valuation_report(&options),
        Commands::Discount(options) => discount_report(&options),
        Commands::Percent(options) => percent_report(&options),
    }
}

/// The single field left out is the one to solve for
pub fn cpm_unknown(options: &CpmOptions) -> Result<cpm::CpmUnknown> {
    match (options.cost, options.impressions, options.cpm) {
        (Some(_), Some(_), None) => Ok(cpm::CpmUnknown::Cpm),
        (Some(_), None, Some(_)) => Ok(cpm::CpmUnknown::Impressions),
        (None, Some(_), Some(_)) => Ok(cpm::CpmUnknown::Cost),
        _ => Err(Error::Validation(
            "provide exactly two of cost, impressions and cpm".to_string(),
        )
        .into()),
    }
}

pub fn cpm_report(options: &CpmOptions) -> Result<Report> {
    let unknown = cpm_unknown(options)?;
    let input = cpm::CpmInput {
        cost: options.cost,
        impressions: options.impressions,
        cpm: options.cpm,
    };
    let result = cpm::solve(input, unknown).map_err(invalid)?;

    Report::new(
        "CPM CALCULATOR",
        &result,
        vec![
            ("Cost", format_amount(result.cost)),
            ("Impressions", format!("{:.0}", result.impressions)),
            ("CPM", format_amount(result.cpm)),
        ],
    )
}

pub fn ltv_report(options: &LtvOptions) -> Result<Report> {
    let input = ltv::LtvInput {
        purchase_price: options.purchase_price,
        deposit: options.deposit,
        loan: options.loan,
        ltv_percent: options.ltv_percent,
    };
    let result = ltv::solve(input).map_err(invalid)?;

    Report::new(
        "LTV CALCULATOR",
        &result,
        vec![
            ("Purchase price", format_amount(result.purchase_price)),
            ("Deposit", format_amount(result.deposit)),
            ("Loan", format_amount(result.loan)),
            ("LTV", format!("{}%", format_amount(result.ltv_percent))),
        ],
    )
}

pub fn eps_report(options: &EpsOptions) -> Result<Report> {
    let eps = equity::eps(
        options.net_income,
        options.preferred_dividends,
        options.common_shares,
    )
    .map_err(invalid)?;

    Report::new(
        "EPS CALCULATOR",
        &serde_json::json!({ "eps": eps }),
        vec![("Earnings per share", format_amount(eps))],
    )
}

pub fn tax_report(options: &TaxOptions) -> Result<Report> {
    let result = match options.mode {
        TaxMode::Add => tax::add(options.amount, options.rate),
        TaxMode::Remove => tax::remove(options.amount, options.rate),
    }
    .map_err(invalid)?;

    Report::new(
        "TAX CALCULATOR",
        &result,
        vec![
            ("Net price", format_amount(result.net_price)),
            ("Tax", format_amount(result.tax_amount)),
            ("Gross price", format_amount(result.gross_price)),
            ("Rate", format!("{}%", format_amount(result.rate_percent))),
        ],
    )
}

pub fn margin_report(options: &MarginOptions) -> Result<Report> {
    if let (Some(revenue), Some(cost_of_goods)) = (options.revenue, options.cost_of_goods) {
        let result = margin::breakdown(margin::MarginInput {
            revenue,
            cost_of_goods,
            operating_expenses: options.operating_expenses,
            interest_and_taxes: options.interest_and_taxes,
        })
        .map_err(invalid)?;

        let percent = |value: f64| format!("{}%", format_amount(value));
        return Report::new(
            "MARGIN BREAKDOWN",
            &result,
            vec![
                ("Gross profit", format_amount(result.gross_profit)),
                ("Gross margin", percent(result.gross_margin)),
                ("Operating profit", format_amount(result.operating_profit)),
                ("Operating margin", percent(result.operating_margin)),
                ("Net profit", format_amount(result.net_profit)),
                ("Net margin", percent(result.net_margin)),
            ],
        );
    }

    match (options.net_profit, options.total_sale) {
        (Some(net_profit), Some(total_sale)) => {
            let result = margin::simple(net_profit, total_sale).map_err(invalid)?;
            Report::new(
                "MARGIN CALCULATOR",
                &serde_json::json!({ "margin": result }),
                vec![("Margin", format!("{}%", format_amount(result)))],
            )
        }
        _ => Err(Error::Validation(
            "provide --net-profit and --total-sale, or --revenue and --cost-of-goods".to_string(),
        )
        .into()),
    }
}

pub fn ci_report(options: &CiOptions) -> Result<Report> {
    let result = stats::confidence_interval(
        options.mean,
        options.std_dev,
        options.sample_size,
        options.confidence_level,
    )
    .map_err(invalid)?;

    Report::new(
        "CONFIDENCE INTERVAL",
        &result,
        vec![
            ("Z", format!("{:.3}", result.z)),
            ("Margin of error", format!("{:.4}", result.margin_of_error)),
            (
                "Interval",
                format!("{:.4} to {:.4}", result.lower, result.upper),
            ),
        ],
    )
}

pub fn probability_report(options: &ProbabilityOptions) -> Result<Report> {
    let p = stats::probability(options.total, options.a, options.b).map_err(invalid)?;
    let fmt = |value: f64| format!("{value:.4}");

    Report::new(
        "PROBABILITY",
        &p,
        vec![
            ("P(A)", fmt(p.a)),
            ("P(A')", fmt(p.not_a)),
            ("P(B)", fmt(p.b)),
            ("P(B')", fmt(p.not_b)),
            ("P(A and B)", fmt(p.a_and_b)),
            ("P(A or B)", fmt(p.a_or_b)),
            ("P(A xor B)", fmt(p.a_xor_b)),
            ("P(neither)", fmt(p.neither)),
        ],
    )
}

pub fn valuation_report(options: &ValuationOptions) -> Result<Report> {
    let result = equity::pre_post_money(options.investment, options.equity_percent)
        .map_err(invalid)?;

    Report::new(
        "VALUATION",
        &result,
        vec![
            ("Pre-money", format_amount(result.pre_money)),
            ("Post-money", format_amount(result.post_money)),
        ],
    )
}

pub fn discount_report(options: &DiscountOptions) -> Result<Report> {
    let result =
        pricing::discount(options.original_price, options.discount_percent).map_err(invalid)?;

    Report::new(
        "DISCOUNT",
        &result,
        vec![
            ("Original price", format_amount(result.original_price)),
            ("You save", format_amount(result.saving)),
            ("Final price", format_amount(result.final_price)),
        ],
    )
}

pub fn percent_report(options: &PercentOptions) -> Result<Report> {
    let (label, value) = match options.mode {
        PercentMode::Of => (
            format!("{}% of {}", options.x, options.y),
            pricing::percent_of(options.x, options.y),
        ),
        PercentMode::What => (
            format!("{} as a percent of {}", options.x, options.y),
            pricing::what_percent(options.x, options.y),
        ),
        PercentMode::Change => (
            format!("Change from {} to {}", options.x, options.y),
            pricing::percent_change(options.x, options.y),
        ),
    };
    let value = value.map_err(invalid)?;
    let rendered = match options.mode {
        PercentMode::Of => format_amount(value),
        PercentMode::What | PercentMode::Change => format!("{}%", format_amount(value)),
    };

    Report::new(
        "PERCENTAGE",
        &serde_json::json!({ "mode": options.mode, "result": value }),
        vec![("Expression", label), ("Result", rendered)],
    )
}

fn format_report_text(report: &Report, palette: &Palette) -> String {
    let mut result = palette.banner(report.title);
    result.push('\n');

    let mut table = new_table();
    for (label, value) in &report.rows {
        table.add_row(prettytable::row![label, value]);
    }
    result.push_str(&table.to_string());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use minitools_core::theme::{Theme, ThemeSource};

    // ============================================================================
    // cpm tests
    // ============================================================================

    #[test]
    fn test_cpm_unknown_inferred_from_missing_field() {
        let options = CpmOptions {
            cost: Some(50.0),
            impressions: Some(10_000.0),
            cpm: None,
        };
        assert_eq!(cpm_unknown(&options).unwrap(), cpm::CpmUnknown::Cpm);

        let report = cpm_report(&options).unwrap();
        assert_eq!(report.rows[2], ("CPM", "5.00".to_string()));
    }

    #[test]
    fn test_cpm_requires_exactly_two() {
        assert!(cpm_report(&CpmOptions::default()).is_err());
        let all = CpmOptions {
            cost: Some(1.0),
            impressions: Some(1.0),
            cpm: Some(1.0),
        };
        assert!(cpm_report(&all).is_err());
    }

    // ============================================================================
    // other calculators
    // ============================================================================

    #[test]
    fn test_valuation_report() {
        let report = valuation_report(&ValuationOptions {
            investment: 100_000.0,
            equity_percent: 20.0,
        })
        .unwrap();
        assert_eq!(report.result["pre_money"], 400_000.0);
        assert_eq!(report.result["post_money"], 500_000.0);
    }

    #[test]
    fn test_valuation_undefined_at_boundary() {
        let err = valuation_report(&ValuationOptions {
            investment: 100_000.0,
            equity_percent: 100.0,
        })
        .unwrap_err();
        assert!(err.to_string().starts_with("Result is undefined"));
    }

    #[test]
    fn test_margin_prefers_breakdown() {
        let report = margin_report(&MarginOptions {
            revenue: Some(1000.0),
            cost_of_goods: Some(400.0),
            operating_expenses: 200.0,
            interest_and_taxes: 100.0,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(report.title, "MARGIN BREAKDOWN");
        assert_eq!(report.rows[1].1, "60.00%");
        assert_eq!(report.rows[5].1, "30.00%");
    }

    #[test]
    fn test_margin_needs_inputs() {
        assert!(margin_report(&MarginOptions::default()).is_err());
    }

    #[test]
    fn test_percent_of() {
        let report = percent_report(&PercentOptions {
            mode: PercentMode::Of,
            x: 20.0,
            y: 150.0,
        })
        .unwrap();
        assert_eq!(report.rows[1].1, "30.00");
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: TaxOptions =
            serde_json::from_value(serde_json::json!({ "amount": 100.0, "rate": 10.0 })).unwrap();
        assert_eq!(options.mode, TaxMode::Add);
        let report = tax_report(&options).unwrap();
        assert_eq!(report.rows[2].1, "110.00");

        let options: CiOptions = serde_json::from_value(
            serde_json::json!({ "mean": 100.0, "std_dev": 15.0, "sample_size": 25 }),
        )
        .unwrap();
        assert_eq!(options.confidence_level, 95.0);
    }

    #[test]
    fn test_format_report_text() {
        let report = discount_report(&DiscountOptions {
            original_price: 200.0,
            discount_percent: 25.0,
        })
        .unwrap();
        let text = format_report_text(&report, &Palette::new(ThemeSource::new(Theme::Light)));
        assert!(text.contains("DISCOUNT"));
        assert!(text.contains("150.00"));
    }

    #[test]
    fn test_calc_module_error_passes_through() {
        let err = report_data(Commands::Eps(EpsOptions {
            net_income: 10.0,
            preferred_dividends: 0.0,
            common_shares: 0.0,
        }))
        .unwrap_err();
        assert!(err.to_string().starts_with("common_shares"));
    }
}
