use crate::prelude::*;
use clap::Parser;
use minitools_core::theme::{self, ThemePreference, ThemeSource};

mod calc;
mod calendar;
mod cms;
mod error;
mod mcp;
mod numeral;
mod palette;
mod prelude;
mod remote;
mod text;
mod tools;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Numeral, calendar, finance, statistics and text mini-tools"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "MINITOOLS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,

    /// Terminal colour theme: auto, light or dark
    #[clap(long, env = "MINITOOLS_THEME", global = true, default_value = "auto")]
    theme: ThemePreference,
}

impl Global {
    /// Resolve the theme preference against the terminal and wrap it for renderers
    pub fn theme_source(&self) -> ThemeSource {
        let colorfgbg = std::env::var("COLORFGBG").ok();
        ThemeSource::new(theme::detect(self.theme, colorfgbg.as_deref()))
    }

    pub fn palette(&self) -> palette::Palette {
        palette::Palette::new(self.theme_source())
    }
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Binary, octal, decimal, hexadecimal, text and ASCII conversion
    Numeral(crate::numeral::App),

    /// Gregorian to Bengali, Hijri, Roman, Hindi and English dates
    Calendar(crate::calendar::App),

    /// Financial and statistical calculators
    Calc(crate::calc::App),

    /// Case conversion, counting, repetition and word combination
    Text(crate::text::App),

    /// Article and SEO content from the CMS
    Cms(crate::cms::App),

    /// Remote fee and price calculators
    Remote(crate::remote::App),

    /// Browse the tool catalog
    Tools(crate::tools::App),

    /// Model Context Protocol server
    MCP(crate::mcp::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();
    log::debug!("theme preference: {:?}", app.global.theme);

    match app.command {
        SubCommands::Numeral(sub_app) => crate::numeral::run(sub_app, app.global),
        SubCommands::Calendar(sub_app) => crate::calendar::run(sub_app, app.global),
        SubCommands::Calc(sub_app) => crate::calc::run(sub_app, app.global),
        SubCommands::Text(sub_app) => crate::text::run(sub_app, app.global),
        SubCommands::Cms(sub_app) => crate::cms::run(sub_app, app.global).await,
        SubCommands::Remote(sub_app) => crate::remote::run(sub_app, app.global).await,
        SubCommands::Tools(sub_app) => crate::tools::run(sub_app, app.global),
        SubCommands::MCP(sub_app) => crate::mcp::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
