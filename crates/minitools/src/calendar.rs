use crate::palette::Palette;
use crate::prelude::{println, *};
use minitools_core::calendar::{
    self,
    roman::{self, Delimiter, FieldOrder, RomanDate},
    CalendarKind, CalendarView, GregorianDate, TimeFormat, TimeOfDay,
};
use serde::Serialize;

#[derive(Debug, clap::Parser)]
#[command(name = "calendar")]
#[command(about = "Gregorian to Bengali, Hijri, Roman, Hindi and English dates")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Convert a Gregorian date into another calendar
    #[clap(name = "convert")]
    Convert(ConvertOptions),

    /// Write a date in Roman numerals
    #[clap(name = "roman-date")]
    RomanDate(RomanDateOptions),

    /// Convert a number to Roman numerals or a Roman numeral to a number
    #[clap(name = "roman")]
    Roman(RomanOptions),
}

#[derive(Debug, clap::Args)]
pub struct ConvertOptions {
    /// Gregorian date as YYYY-MM-DD (default: today)
    #[arg(value_name = "DATE")]
    pub date: Option<String>,

    /// Time of day as HH:MM
    #[arg(long)]
    pub time: Option<String>,

    /// Target calendar: english, bengali, hijri, roman or hindi
    #[arg(long, default_value = "english")]
    pub to: CalendarKind,

    /// Render the time on a 12-hour clock
    #[arg(long)]
    pub h12: bool,

    /// Pull a day past the end of the month back to the last valid day
    #[arg(long)]
    pub clamp_day: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args)]
pub struct RomanDateOptions {
    /// Gregorian date as YYYY-MM-DD (default: today)
    #[arg(value_name = "DATE")]
    pub date: Option<String>,

    /// Field order: dmy, mdy or ymd
    #[arg(long, default_value = "dmy")]
    pub order: FieldOrder,

    /// Field delimiter: dot, slash, dash or space
    #[arg(long, default_value = "dot")]
    pub delimiter: Delimiter,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args)]
pub struct RomanOptions {
    /// A positive number or a Roman numeral
    #[arg(value_name = "VALUE")]
    pub value: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RomanOutput {
    pub number: u32,
    pub roman: String,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    let palette = global.palette();

    match app.command {
        Commands::Convert(options) => {
            log::debug!("calendar convert to {:?}", options.to);
            let time_format = if options.h12 {
                TimeFormat::H12
            } else {
                TimeFormat::H24
            };
            let view = convert_data(
                options.date.as_deref(),
                options.time.as_deref(),
                options.to,
                time_format,
                options.clamp_day,
            )?;
            if options.json {
                println!("{}", to_json(&view)?);
            } else {
                println!("{}", format_view_text(&view, &palette));
            }
        }
        Commands::RomanDate(options) => {
            let date = resolve_date(options.date.as_deref(), false)?;
            let output = roman::format_roman_date(date, options.order, options.delimiter);
            if options.json {
                println!("{}", to_json(&output)?);
            } else {
                println!("{}", format_roman_date_text(&output, &palette));
            }
        }
        Commands::Roman(options) => {
            let output = roman_data(&options.value)?;
            if options.json {
                println!("{}", to_json(&output)?);
            } else {
                let mut text = palette.banner("ROMAN NUMERALS");
                text.push('\n');
                text.push_str(&palette.field("Number", &output.number.to_string()));
                text.push_str(&palette.field("Roman", &output.roman));
                println!("{text}");
            }
        }
    }

    Ok(())
}

/// Parse `YYYY-MM-DD`, falling back to today's local date when absent
pub fn resolve_date(input: Option<&str>, clamp_day: bool) -> Result<GregorianDate> {
    let date = match input {
        None => chrono::Local::now()
            .date_naive()
            .to_string()
            .parse::<GregorianDate>(),
        Some(input) if clamp_day => GregorianDate::parse_clamped(input),
        Some(input) => input.parse::<GregorianDate>(),
    };
    Ok(date.map_err(Error::validation)?)
}

pub fn convert_data(
    date: Option<&str>,
    time: Option<&str>,
    kind: CalendarKind,
    time_format: TimeFormat,
    clamp_day: bool,
) -> Result<CalendarView> {
    let date = resolve_date(date, clamp_day)?;
    let time = time
        .map(|t| t.parse::<TimeOfDay>())
        .transpose()
        .map_err(Error::validation)?;

    Ok(calendar::convert(date, time, kind, time_format).map_err(Error::validation)?)
}

/// Accept either a decimal number or a Roman numeral and return both forms
pub fn roman_data(value: &str) -> Result<RomanOutput> {
    let value = value.trim();
    if let Ok(number) = value.parse::<u32>() {
        if number == 0 {
            return Err(Error::Validation("0 has no Roman numeral".to_string()).into());
        }
        return Ok(RomanOutput {
            number,
            roman: roman::to_roman(number),
        });
    }

    let number = roman::from_roman(value).map_err(Error::validation)?;
    Ok(RomanOutput {
        number,
        roman: value.to_ascii_uppercase(),
    })
}

fn format_view_text(view: &CalendarView, palette: &Palette) -> String {
    let title = match view.kind {
        CalendarKind::English => "ENGLISH DATE",
        CalendarKind::Bengali => "BENGALI DATE",
        CalendarKind::Hijri => "HIJRI DATE",
        CalendarKind::Roman => "ROMAN NUMERAL DATE",
        CalendarKind::Hindi => "HINDI DATE",
    };

    let mut result = palette.banner(title);
    result.push('\n');
    result.push_str(&format!("  {}\n\n", palette.value(&view.formatted)));

    let mut table = new_table();
    table.add_row(prettytable::row!["Gregorian", view.source]);
    table.add_row(prettytable::row!["Day", view.day]);
    table.add_row(prettytable::row!["Month", format!("{} ({})", view.month_name, view.month)]);
    table.add_row(prettytable::row!["Year", view.year]);
    table.add_row(prettytable::row!["Weekday", view.weekday]);
    if let Some(time) = &view.time {
        table.add_row(prettytable::row!["Time", time]);
    }
    result.push_str(&table.to_string());
    result
}

fn format_roman_date_text(output: &RomanDate, palette: &Palette) -> String {
    let mut result = palette.banner("ROMAN NUMERAL DATE");
    result.push('\n');
    result.push_str(&palette.field("Date", &output.arabic));
    result.push_str(&palette.field("Roman", &output.roman));
    result
}
