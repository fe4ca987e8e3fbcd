use crate::palette::Palette;
use crate::prelude::{println, *};
use minitools_core::numeral::{self, ArithmeticOp, Radix, Representation};
use serde::Serialize;

#[derive(Debug, clap::Parser)]
#[command(name = "numeral")]
#[command(about = "Binary, octal, decimal, hexadecimal, text and ASCII conversion")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Convert input between two representations
    #[clap(name = "convert")]
    Convert(ConvertOptions),

    /// Integer arithmetic on two operands written in the same radix
    #[clap(name = "calc")]
    Calc(CalcOptions),
}

#[derive(Debug, clap::Args)]
pub struct ConvertOptions {
    /// Whitespace separated numbers, or free text when --from text
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Source: binary, octal, decimal, hexadecimal, text or ascii
    #[arg(long)]
    pub from: Representation,

    /// Target: binary, octal, decimal, hexadecimal, text or ascii
    #[arg(long)]
    pub to: Representation,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args)]
pub struct CalcOptions {
    #[arg(allow_hyphen_values = true)]
    pub lhs: String,

    /// Operation: + - * / (or add, sub, mul, div)
    #[arg(allow_hyphen_values = true)]
    pub op: ArithmeticOp,

    #[arg(allow_hyphen_values = true)]
    pub rhs: String,

    /// Radix of both operands and the result
    #[arg(long, default_value = "hex")]
    pub radix: Radix,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertOutput {
    pub input: String,
    pub from: Representation,
    pub to: Representation,
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalcOutput {
    pub lhs: String,
    pub op: ArithmeticOp,
    pub rhs: String,
    pub radix: Radix,
    pub result: String,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    let palette = global.palette();

    match app.command {
        Commands::Convert(options) => {
            log::debug!("numeral convert {} -> {}", options.from, options.to);
            let output = convert_data(&options.input, options.from, options.to)?;
            if options.json {
                println!("{}", to_json(&output)?);
            } else {
                println!("{}", format_convert_text(&output, &palette));
            }
        }
        Commands::Calc(options) => {
            log::debug!("numeral calc {:?} in {:?}", options.op, options.radix);
            let output = calc_data(&options.lhs, options.op, &options.rhs, options.radix)?;
            if options.json {
                println!("{}", to_json(&output)?);
            } else {
                println!("{}", format_calc_text(&output, &palette));
            }
        }
    }

    Ok(())
}

/// Run a conversion, turning codec errors into validation errors
pub fn convert_data(input: &str, from: Representation, to: Representation) -> Result<ConvertOutput> {
    let output = numeral::convert(input, from, to).map_err(Error::validation)?;
    Ok(ConvertOutput {
        input: input.to_string(),
        from,
        to,
        output,
    })
}

pub fn calc_data(lhs: &str, op: ArithmeticOp, rhs: &str, radix: Radix) -> Result<CalcOutput> {
    let result = numeral::arithmetic(lhs, rhs, op, radix).map_err(Error::validation)?;
    Ok(CalcOutput {
        lhs: lhs.to_string(),
        op,
        rhs: rhs.to_string(),
        radix,
        result,
    })
}

fn op_symbol(op: ArithmeticOp) -> &'static str {
    match op {
        ArithmeticOp::Add => "+",
        ArithmeticOp::Sub => "-",
        ArithmeticOp::Mul => "*",
        ArithmeticOp::Div => "/",
    }
}

fn format_convert_text(output: &ConvertOutput, palette: &Palette) -> String {
    let mut result = palette.banner(&format!(
        "{} TO {}",
        output.from.to_string().to_uppercase(),
        output.to.to_string().to_uppercase()
    ));
    result.push('\n');
    result.push_str(&palette.field("Input", &output.input));
    result.push_str(&palette.field("Output", &output.output));
    result
}

fn format_calc_text(output: &CalcOutput, palette: &Palette) -> String {
    let mut result = palette.banner(&format!("BASE-{} CALCULATOR", output.radix.base()));
    result.push('\n');
    result.push_str(&palette.field(
        "Expression",
        &format!("{} {} {}", output.lhs, op_symbol(output.op), output.rhs),
    ));
    result.push_str(&palette.field("Result", &output.result));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use minitools_core::theme::{Theme, ThemeSource};

    fn palette() -> Palette {
        Palette::new(ThemeSource::new(Theme::Dark))
    }

    #[test]
    fn test_convert_data() {
        let output = convert_data("Hi", Representation::Text, Representation::Binary).unwrap();
        assert_eq!(output.output, "01001000 01101001");
    }

    #[test]
    fn test_convert_data_surfaces_core_message() {
        let err = convert_data("12 zz", Representation::Decimal, Representation::Hexadecimal)
            .unwrap_err();
        assert!(err.to_string().contains("zz"));
    }

    #[test]
    fn test_calc_data_division_by_zero() {
        let err = calc_data("10", ArithmeticOp::Div, "0", Radix::Hexadecimal).unwrap_err();
        assert_eq!(err.to_string(), "Division by zero");
    }

    #[test]
    fn test_calc_accepts_negative_left_operand() {
        use clap::Parser;

        let app = App::try_parse_from(["numeral", "calc", "-F", "+", "2"]).unwrap();
        let Commands::Calc(options) = app.command else {
            panic!("expected the calc subcommand");
        };
        assert_eq!(options.lhs, "-F");
        let output = calc_data(&options.lhs, options.op, &options.rhs, options.radix).unwrap();
        assert_eq!(output.result, "-D");
    }

    #[test]
    fn test_format_calc_text() {
        let output = calc_data("1A", ArithmeticOp::Add, "2B", Radix::Hexadecimal).unwrap();
        let text = format_calc_text(&output, &palette());
        assert!(text.contains("BASE-16 CALCULATOR"));
        assert!(text.contains("1A + 2B"));
        assert!(text.contains("45"));
    }

    #[test]
    fn test_format_convert_text() {
        let output = convert_data("255", Representation::Decimal, Representation::Hexadecimal)
            .unwrap();
        let text = format_convert_text(&output, &palette());
        assert!(text.contains("DECIMAL TO HEXADECIMAL"));
        assert!(text.contains("FF"));
    }
}
