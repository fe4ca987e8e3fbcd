//! Shared registry of every tool in the catalog, keyed by slug
//!
//! Sidebars, breadcrumbs and the MCP tool list all read from [`TOOLS`]
//! instead of carrying their own copies.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Numeral,
    Calendar,
    Finance,
    Statistics,
    Text,
}

impl Category {
    /// Every category, in sidebar order
    pub const ALL: [Category; 5] = [
        Category::Numeral,
        Category::Calendar,
        Category::Finance,
        Category::Statistics,
        Category::Text,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Numeral => "Number Converters",
            Category::Calendar => "Date Converters",
            Category::Finance => "Financial Calculators",
            Category::Statistics => "Statistics Calculators",
            Category::Text => "Text Tools",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Category::Numeral => "number-converters",
            Category::Calendar => "date-converters",
            Category::Finance => "financial-calculators",
            Category::Statistics => "statistics-calculators",
            Category::Text => "text-tools",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.slug() == s.trim())
            .ok_or_else(|| format!("Unknown category: {s}"))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolEntry {
    pub slug: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub description: &'static str,
}

const fn tool(
    slug: &'static str,
    name: &'static str,
    category: Category,
    description: &'static str,
) -> ToolEntry {
    ToolEntry {
        slug,
        name,
        category,
        description,
    }
}

pub static TOOLS: &[ToolEntry] = &[
    tool("binary-converter", "Binary Converter", Category::Numeral, "Convert binary to text, decimal, octal and hexadecimal"),
    tool("text-to-binary", "Text to Binary", Category::Numeral, "Encode text as 8-bit binary code units"),
    tool("hex-converter", "Hex Converter", Category::Numeral, "Convert hexadecimal to text, decimal, octal and binary"),
    tool("hex-calculator", "Hex Calculator", Category::Numeral, "Add, subtract, multiply and divide hexadecimal numbers"),
    tool("octal-converter", "Octal Converter", Category::Numeral, "Convert octal numbers to other bases"),
    tool("decimal-converter", "Decimal Converter", Category::Numeral, "Convert decimal numbers to other bases"),
    tool("ascii-converter", "ASCII Converter", Category::Numeral, "Convert between text and character codes"),
    tool("english-date-converter", "English Date", Category::Calendar, "Write a date with English month and weekday names"),
    tool("bengali-date-converter", "Bengali Date Converter", Category::Calendar, "Convert a Gregorian date to the Bengali calendar"),
    tool("hijri-date-converter", "Hijri Date Converter", Category::Calendar, "Convert a Gregorian date to the Islamic calendar"),
    tool("hindi-date-converter", "Hindi Date Converter", Category::Calendar, "Write a date in Hindi with Devanagari numerals"),
    tool("roman-numeral-date-converter", "Roman Numeral Date Converter", Category::Calendar, "Write a date in Roman numerals with a chosen order and delimiter"),
    tool("roman-numeral-converter", "Roman Numeral Converter", Category::Calendar, "Convert between numbers and Roman numerals"),
    tool("cpm-calculator", "CPM Calculator", Category::Finance, "Solve cost, impressions or cost per mille"),
    tool("ltv-calculator", "LTV Calculator", Category::Finance, "Loan-to-value from any two of price, deposit, loan and ratio"),
    tool("eps-calculator", "EPS Calculator", Category::Finance, "Earnings per share"),
    tool("gst-calculator", "GST Calculator", Category::Finance, "Add or remove goods and services tax"),
    tool("sales-tax-calculator", "Sales Tax Calculator", Category::Finance, "Add or remove sales tax"),
    tool("margin-calculator", "Margin Calculator", Category::Finance, "Gross, operating and net profit margins"),
    tool("discount-calculator", "Discount Calculator", Category::Finance, "Saving and final price after a discount"),
    tool("percentage-calculator", "Percentage Calculator", Category::Finance, "Percent of, what percent and percent change"),
    tool("valuation-calculator", "Pre/Post-Money Valuation Calculator", Category::Finance, "Valuation implied by an investment and equity stake"),
    tool("paypal-fee-calculator", "PayPal Fee Calculator", Category::Finance, "Fee charged on a PayPal payment"),
    tool("link-price-calculator", "Link Price Calculator", Category::Finance, "Estimated price of links on a list of URLs"),
    tool("confidence-interval-calculator", "Confidence Interval Calculator", Category::Statistics, "Interval around a sample mean at a chosen confidence level"),
    tool("probability-calculator", "Probability Calculator", Category::Statistics, "Probabilities of two independent events"),
    tool("case-converter", "Case Converter", Category::Text, "Sentence, upper, lower, title, alternating and inverse case"),
    tool("word-counter", "Word Counter", Category::Text, "Count characters, words, lines, sentences and paragraphs"),
    tool("text-repeater", "Text Repeater", Category::Text, "Repeat text with a separator"),
    tool("word-combiner", "Word Combiner", Category::Text, "Combine every pair of words from a list"),
];

pub fn find(slug: &str) -> Option<&'static ToolEntry> {
    TOOLS.iter().find(|tool| tool.slug == slug)
}

pub fn by_category(category: Category) -> impl Iterator<Item = &'static ToolEntry> {
    TOOLS.iter().filter(move |tool| tool.category == category)
}

/// Tools to suggest next to `slug`: same category first, never the tool itself
pub fn related(slug: &str, limit: usize) -> Vec<&'static ToolEntry> {
    let category = find(slug).map(|tool| tool.category);

    let same = TOOLS
        .iter()
        .filter(|tool| Some(tool.category) == category && tool.slug != slug);
    let other = TOOLS
        .iter()
        .filter(|tool| Some(tool.category) != category && tool.slug != slug);

    same.chain(other).take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slugs_are_unique() {
        let slugs: HashSet<_> = TOOLS.iter().map(|tool| tool.slug).collect();
        assert_eq!(slugs.len(), TOOLS.len());
    }

    #[test]
    fn test_slugs_are_already_slugified() {
        for tool in TOOLS {
            assert_eq!(crate::text::slugify(tool.slug), tool.slug);
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find("hex-calculator").unwrap().category, Category::Numeral);
        assert!(find("nope").is_none());
    }

    #[test]
    fn test_related_prefers_same_category_and_excludes_self() {
        let related = related("cpm-calculator", 5);
        assert_eq!(related.len(), 5);
        assert!(related.iter().all(|tool| tool.slug != "cpm-calculator"));
        assert!(related.iter().all(|tool| tool.category == Category::Finance));
    }

    #[test]
    fn test_related_spills_into_other_categories() {
        let related = related("probability-calculator", 3);
        assert_eq!(related[0].slug, "confidence-interval-calculator");
        assert_eq!(related.len(), 3);
        assert!(related.iter().all(|tool| tool.slug != "probability-calculator"));
    }

    #[test]
    fn test_related_for_unknown_slug() {
        assert_eq!(related("unknown", 2).len(), 2);
    }

    #[test]
    fn test_by_category() {
        assert_eq!(by_category(Category::Statistics).count(), 2);
    }

    #[test]
    fn test_category_from_slug() {
        for category in Category::ALL {
            assert_eq!(category.slug().parse::<Category>().unwrap(), category);
        }
        assert!("widgets".parse::<Category>().is_err());
    }
}
