use crate::palette::Palette;
use crate::prelude::{println, *};
use minitools_core::catalog::{self, Category, ToolEntry};

#[derive(Debug, clap::Parser)]
#[command(name = "tools")]
#[command(about = "Browse the tool catalog")]
pub struct App {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List every tool, grouped by category
    #[clap(name = "list")]
    List,

    /// Tools related to the given one
    #[clap(name = "related")]
    Related(RelatedOptions),
}

#[derive(Debug, Clone, clap::Args)]
pub struct RelatedOptions {
    /// Tool slug, e.g. hex-calculator
    #[arg(value_name = "SLUG")]
    pub slug: String,

    /// Maximum number of suggestions
    #[arg(short, long, default_value = "5")]
    pub limit: usize,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    let palette = global.palette();

    match app.command.unwrap_or(Commands::List) {
        Commands::List => {
            if app.json {
                println!("{}", to_json(&catalog::TOOLS)?);
            } else {
                println!("{}", format_catalog_text(&palette));
            }
        }
        Commands::Related(options) => {
            let related = related_data(&options.slug, options.limit)?;
            if app.json {
                println!("{}", to_json(&related)?);
            } else {
                let title = format!("RELATED TO {}", options.slug.to_uppercase());
                println!("{}", format_tools_text(&title, &related, &palette));
            }
        }
    }

    Ok(())
}

pub fn related_data(slug: &str, limit: usize) -> Result<Vec<&'static ToolEntry>> {
    if catalog::find(slug).is_none() {
        return Err(Error::Validation(format!("Unknown tool: {slug}")).into());
    }
    Ok(catalog::related(slug, limit))
}

fn format_tools_text(title: &str, tools: &[&ToolEntry], palette: &Palette) -> String {
    let mut result = palette.banner(title);
    result.push('\n');

    let mut table = new_table();
    for tool in tools {
        table.add_row(prettytable::row![tool.slug, tool.name, tool.description]);
    }
    result.push_str(&table.to_string());
    result
}

fn format_catalog_text(palette: &Palette) -> String {
    Category::ALL
        .iter()
        .map(|&category| {
            let tools: Vec<&ToolEntry> = catalog::by_category(category).collect();
            format_tools_text(&category.label().to_uppercase(), &tools, palette)
        })
        .collect::<Vec<_>>()
        .join("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use minitools_core::theme::{Theme, ThemeSource};

    #[test]
    fn test_related_data_rejects_unknown_slug() {
        assert!(related_data("nope", 3).is_err());
        assert_eq!(related_data("hex-calculator", 3).unwrap().len(), 3);
    }

    #[test]
    fn test_catalog_text_lists_every_tool() {
        let text = format_catalog_text(&Palette::new(ThemeSource::new(Theme::Dark)));
        for tool in catalog::TOOLS {
            assert!(text.contains(tool.slug), "missing {}", tool.slug);
        }
        assert!(text.contains("STATISTICS CALCULATORS"));
    }
}
