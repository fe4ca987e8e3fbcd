//! Text utilities: case conversion, counters, repetition and word combinations

use rand::seq::SliceRandom;
use rand::Rng;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

pub const MAX_REPEAT: usize = 10_000;
pub const MAX_COMBINE_WORDS: usize = 100;

static SENTENCE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[.!?]\s+)(\p{L})").unwrap());
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{L}[\p{L}\p{N}']*").unwrap());
static SENTENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]*").unwrap());
static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());
static SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());
static NON_SLUG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("{field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    Sentence,
    Upper,
    Lower,
    Title,
    Alternating,
    Inverse,
}

impl FromStr for CaseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sentence" => Ok(CaseStyle::Sentence),
            "upper" => Ok(CaseStyle::Upper),
            "lower" => Ok(CaseStyle::Lower),
            "title" => Ok(CaseStyle::Title),
            "alternating" => Ok(CaseStyle::Alternating),
            "inverse" => Ok(CaseStyle::Inverse),
            other => Err(format!("Unknown case style: {other}")),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

pub fn convert_case(input: &str, style: CaseStyle) -> String {
    match style {
        CaseStyle::Upper => input.to_uppercase(),
        CaseStyle::Lower => input.to_lowercase(),
        CaseStyle::Sentence => {
            let lower = input.to_lowercase();
            SENTENCE_START
                .replace_all(&lower, |caps: &Captures| {
                    format!("{}{}", &caps[1], caps[2].to_uppercase())
                })
                .into_owned()
        }
        CaseStyle::Title => WORD
            .replace_all(input, |caps: &Captures| capitalize(&caps[0]))
            .into_owned(),
        CaseStyle::Alternating => {
            let mut upper = false;
            input
                .chars()
                .flat_map(|c| {
                    if !c.is_alphabetic() {
                        return vec![c];
                    }
                    let out: Vec<char> = if upper {
                        c.to_uppercase().collect()
                    } else {
                        c.to_lowercase().collect()
                    };
                    upper = !upper;
                    out
                })
                .collect()
        }
        CaseStyle::Inverse => input
            .chars()
            .flat_map(|c| -> Vec<char> {
                if c.is_uppercase() {
                    c.to_lowercase().collect()
                } else if c.is_lowercase() {
                    c.to_uppercase().collect()
                } else {
                    vec![c]
                }
            })
            .collect(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub words: usize,
    pub lines: usize,
    pub sentences: usize,
    pub paragraphs: usize,
}

pub fn count_words(input: &str) -> usize {
    input.split_whitespace().count()
}

pub fn count(input: &str) -> TextStats {
    let has_content = |s: &str| s.chars().any(char::is_alphanumeric);

    TextStats {
        characters: input.chars().count(),
        characters_no_spaces: input.chars().filter(|c| !c.is_whitespace()).count(),
        words: count_words(input),
        lines: input.lines().count(),
        sentences: SENTENCE
            .find_iter(input)
            .filter(|m| has_content(m.as_str()))
            .count(),
        paragraphs: PARAGRAPH_BREAK
            .split(input)
            .filter(|p| !p.trim().is_empty())
            .count(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    #[default]
    None,
    Space,
    NewLine,
    Custom(String),
}

impl Separator {
    fn as_str(&self) -> &str {
        match self {
            Separator::None => "",
            Separator::Space => " ",
            Separator::NewLine => "\n",
            Separator::Custom(s) => s,
        }
    }
}

/// `none`, `space` and `newline` are keywords; anything else is used verbatim
impl FromStr for Separator {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "none" | "" => Separator::None,
            "space" => Separator::Space,
            "newline" | "\\n" => Separator::NewLine,
            _ => Separator::Custom(s.to_string()),
        })
    }
}

pub fn repeat(input: &str, times: usize, separator: &Separator) -> Result<String, TextError> {
    if times > MAX_REPEAT {
        return Err(TextError::InvalidField {
            field: "times",
            reason: format!("must not exceed {MAX_REPEAT}"),
        });
    }
    Ok(vec![input; times].join(separator.as_str()))
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CombineOptions {
    #[serde(default)]
    pub allow_self_pairs: bool,
    #[serde(default)]
    pub shuffle: bool,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    #[serde(default)]
    pub separator: String,
}

/// Every ordered pair of words from the list, decorated per `options`
pub fn combine<R: Rng + ?Sized>(
    words: &[&str],
    options: &CombineOptions,
    rng: &mut R,
) -> Result<Vec<String>, TextError> {
    let words: Vec<&str> = words
        .iter()
        .map(|w| w.trim())
        .filter(|w| !w.is_empty())
        .collect();

    if words.len() > MAX_COMBINE_WORDS {
        return Err(TextError::InvalidField {
            field: "words",
            reason: format!("at most {MAX_COMBINE_WORDS} words can be combined"),
        });
    }

    let mut pairs = Vec::with_capacity(words.len() * words.len());
    for (i, first) in words.iter().enumerate() {
        for (j, second) in words.iter().enumerate() {
            if i == j && !options.allow_self_pairs {
                continue;
            }
            pairs.push(format!(
                "{}{first}{}{second}{}",
                options.prefix, options.separator, options.suffix
            ));
        }
    }

    if options.shuffle {
        pairs.shuffle(rng);
    }
    Ok(pairs)
}

pub fn reverse(input: &str) -> String {
    input.chars().rev().collect()
}

/// Collapse runs of spaces and tabs and trim every line
pub fn remove_extra_spaces(input: &str) -> String {
    input
        .lines()
        .map(|line| SPACES.replace_all(line.trim(), " ").into_owned())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lower-case ASCII slug, runs of other characters become a single `-`
pub fn slugify(input: &str) -> String {
    NON_SLUG
        .replace_all(&input.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}
