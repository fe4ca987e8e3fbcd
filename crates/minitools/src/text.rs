use crate::palette::Palette;
use crate::prelude::{println, *};
use minitools_core::text::{self, CaseStyle, CombineOptions, Separator, TextStats};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::io::Read;

#[derive(Debug, clap::Parser)]
#[command(name = "text")]
#[command(about = "Case conversion, counting, repetition and word combination")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Convert text to sentence, upper, lower, title, alternating or inverse case
    #[clap(name = "case")]
    Case(CaseOptions),

    /// Count characters, words, lines, sentences and paragraphs
    #[clap(name = "count")]
    Count(InputOptions),

    /// Repeat text a number of times
    #[clap(name = "repeat")]
    Repeat(RepeatOptions),

    /// Combine every pair of words from a list
    #[clap(name = "combine")]
    Combine(CombineArgs),

    /// Reverse text
    #[clap(name = "reverse")]
    Reverse(InputOptions),

    /// Collapse runs of spaces and tabs
    #[clap(name = "spaces")]
    Spaces(InputOptions),

    /// Turn text into a URL slug
    #[clap(name = "slugify")]
    Slugify(InputOptions),
}

#[derive(Debug, Clone, clap::Args)]
pub struct InputOptions {
    /// Input text; read from stdin when omitted
    pub text: Option<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct CaseOptions {
    /// sentence, upper, lower, title, alternating or inverse
    pub style: CaseStyle,

    /// Input text; read from stdin when omitted
    pub text: Option<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct RepeatOptions {
    /// Input text; read from stdin when omitted
    pub text: Option<String>,

    /// How many times to repeat
    #[arg(short = 'n', long, default_value = "2")]
    pub times: usize,

    /// none, space, newline, or any literal string
    #[arg(long, default_value = "none")]
    pub separator: Separator,
}

#[derive(Debug, Clone, clap::Args, Deserialize)]
pub struct CombineArgs {
    /// Words to combine
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,

    /// Also pair each word with itself
    #[arg(long)]
    #[serde(default)]
    pub allow_self_pairs: bool,

    /// Shuffle the combinations
    #[arg(long)]
    #[serde(default)]
    pub shuffle: bool,

    /// Seed for --shuffle, for reproducible output
    #[arg(long)]
    #[serde(default)]
    pub seed: Option<u64>,

    #[arg(long, default_value = "")]
    #[serde(default)]
    pub prefix: String,

    #[arg(long, default_value = "")]
    #[serde(default)]
    pub suffix: String,

    /// Placed between the two words of a pair
    #[arg(long, default_value = "")]
    #[serde(default)]
    pub separator: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TextOutput {
    Text { output: String },
    Stats(TextStats),
    Combinations { count: usize, combinations: Vec<String> },
}

fn read_input(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .wrap_err("Failed to read text from stdin")?;
            Ok(buffer)
        }
    }
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    log::debug!("text {:?}", app.command);

    let output = match app.command {
        Commands::Case(options) => {
            let input = read_input(options.text)?;
            case_data(&input, options.style)
        }
        Commands::Count(options) => count_data(&read_input(options.text)?),
        Commands::Repeat(options) => {
            let input = read_input(options.text)?;
            repeat_data(&input, options.times, &options.separator)?
        }
        Commands::Combine(options) => combine_data(&options)?,
        Commands::Reverse(options) => TextOutput::Text {
            output: text::reverse(&read_input(options.text)?),
        },
        Commands::Spaces(options) => TextOutput::Text {
            output: text::remove_extra_spaces(&read_input(options.text)?),
        },
        Commands::Slugify(options) => TextOutput::Text {
            output: text::slugify(&read_input(options.text)?),
        },
    };

    if app.json {
        println!("{}", to_json(&output)?);
    } else {
        println!("{}", format_output_text(&output, &global.palette()));
    }

    Ok(())
}

pub fn case_data(input: &str, style: CaseStyle) -> TextOutput {
    TextOutput::Text {
        output: text::convert_case(input, style),
    }
}

pub fn count_data(input: &str) -> TextOutput {
    TextOutput::Stats(text::count(input))
}

pub fn repeat_data(input: &str, times: usize, separator: &Separator) -> Result<TextOutput> {
    let output = text::repeat(input, times, separator).map_err(Error::validation)?;
    Ok(TextOutput::Text { output })
}

pub fn combine_data(args: &CombineArgs) -> Result<TextOutput> {
    let words: Vec<&str> = args.words.iter().map(String::as_str).collect();
    let options = CombineOptions {
        allow_self_pairs: args.allow_self_pairs,
        shuffle: args.shuffle,
        prefix: args.prefix.clone(),
        suffix: args.suffix.clone(),
        separator: args.separator.clone(),
    };

    let combinations = match args.seed {
        Some(seed) => text::combine(&words, &options, &mut StdRng::seed_from_u64(seed)),
        None => text::combine(&words, &options, &mut rand::thread_rng()),
    }
    .map_err(Error::validation)?;

    Ok(TextOutput::Combinations {
        count: combinations.len(),
        combinations,
    })
}

fn format_output_text(output: &TextOutput, palette: &Palette) -> String {
    match output {
        TextOutput::Text { output } => output.clone(),
        TextOutput::Stats(stats) => {
            let mut result = palette.banner("WORD COUNTER");
            result.push('\n');
            let mut table = new_table();
            table.add_row(prettytable::row!["Characters", stats.characters]);
            table.add_row(prettytable::row!["Characters (no spaces)", stats.characters_no_spaces]);
            table.add_row(prettytable::row!["Words", stats.words]);
            table.add_row(prettytable::row!["Lines", stats.lines]);
            table.add_row(prettytable::row!["Sentences", stats.sentences]);
            table.add_row(prettytable::row!["Paragraphs", stats.paragraphs]);
            result.push_str(&table.to_string());
            result
        }
        TextOutput::Combinations {
            count,
            combinations,
        } => {
            let mut result = palette.banner(&format!("{count} COMBINATIONS"));
            result.push('\n');
            for combination in combinations {
                result.push_str(&format!("  {combination}\n"));
            }
            result
        }
    }
}
