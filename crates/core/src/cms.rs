//! Pure transformation functions for headless CMS page responses
//!
//! This module contains zero I/O operations and is fully testable with fixture data.

use regex::Regex;
use scraper::Html;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use crate::catalog;

static SCRIPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script>").unwrap());
static STYLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style\b[^>]*>.*?</style>").unwrap());
static VALID_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*(?:/[a-z0-9]+(?:-[a-z0-9]+)*)*$").unwrap());

/// Number of characters kept in the plain-text excerpt
const EXCERPT_LENGTH: usize = 200;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CmsError {
    #[error("Page has no article content")]
    MissingArticle,

    #[error("Invalid page slug: {0}")]
    InvalidSlug(String),
}

// ============================================================================
// Domain Models (Input from API)
// ============================================================================

/// Envelope returned by both page endpoints
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CmsResponse {
    #[serde(default)]
    pub data: CmsData,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CmsData {
    #[serde(rename = "PageArticle", default)]
    pub page_article: Option<PageArticle>,
    #[serde(rename = "PageSEO", default)]
    pub page_seo: Option<PageSeo>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PageArticle {
    #[serde(default)]
    pub content: Option<String>,
}

/// Flat SEO attribute bag; every field may be absent
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageSeo {
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Option<String>,
    pub canonical_url: Option<String>,
    pub og_image_url: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_type: Option<String>,
    pub og_site_name: Option<String>,
    pub og_locale: Option<String>,
    pub twitter_card: Option<String>,
    pub twitter_site: Option<String>,
    pub twitter_creator: Option<String>,
    pub twitter_image_url: Option<String>,
    pub noindex: Option<bool>,
}

// ============================================================================
// Output Models (Domain Model)
// ============================================================================

/// Fallback values used when the CMS omits a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeoDefaults {
    pub title: String,
    pub description: String,
    pub site_name: String,
    pub locale: String,
}

impl Default for SeoDefaults {
    fn default() -> Self {
        Self {
            title: "Free Online Calculators and Converters".to_string(),
            description: "Free online calculators, number converters, date converters and text tools.".to_string(),
            site_name: "Mini Tools".to_string(),
            locale: "en_US".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct SeoMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub canonical_url: Option<String>,
    pub og_title: String,
    pub og_description: String,
    pub og_type: String,
    pub og_site_name: String,
    pub og_locale: String,
    pub og_image_url: Option<String>,
    pub twitter_card: String,
    pub twitter_site: Option<String>,
    pub twitter_creator: Option<String>,
    pub twitter_image_url: Option<String>,
    pub noindex: bool,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub label: String,
    pub path: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ArticleOutput {
    pub html: String,
    pub markdown: String,
    pub excerpt: String,
    pub word_count: usize,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct PageOutput {
    pub slug: String,
    pub seo: SeoMetadata,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub article: Option<ArticleOutput>,
}

// ============================================================================
// Pure Helper Functions
// ============================================================================

/// Treat blank strings from the CMS as missing and decode entities
fn present(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| html_escape::decode_html_entities(v).into_owned())
}

pub fn validate_slug(slug: &str) -> Result<&str, CmsError> {
    let trimmed = slug.trim().trim_matches('/');
    if VALID_SLUG.is_match(trimmed) {
        Ok(trimmed)
    } else {
        Err(CmsError::InvalidSlug(slug.to_string()))
    }
}

pub fn resolve_seo(seo: Option<&PageSeo>, defaults: &SeoDefaults) -> SeoMetadata {
    let empty = PageSeo::default();
    let seo = seo.unwrap_or(&empty);

    let title = present(&seo.meta_title).unwrap_or_else(|| defaults.title.clone());
    let description =
        present(&seo.meta_description).unwrap_or_else(|| defaults.description.clone());
    let og_image_url = present(&seo.og_image_url);

    SeoMetadata {
        keywords: present(&seo.keywords)
            .map(|k| {
                k.split(',')
                    .map(str::trim)
                    .filter(|k| !k.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default(),
        canonical_url: present(&seo.canonical_url),
        og_title: present(&seo.og_title).unwrap_or_else(|| title.clone()),
        og_description: present(&seo.og_description).unwrap_or_else(|| description.clone()),
        og_type: present(&seo.og_type).unwrap_or_else(|| "website".to_string()),
        og_site_name: present(&seo.og_site_name).unwrap_or_else(|| defaults.site_name.clone()),
        og_locale: present(&seo.og_locale).unwrap_or_else(|| defaults.locale.clone()),
        twitter_card: present(&seo.twitter_card)
            .unwrap_or_else(|| "summary_large_image".to_string()),
        twitter_site: present(&seo.twitter_site),
        twitter_creator: present(&seo.twitter_creator),
        twitter_image_url: present(&seo.twitter_image_url).or_else(|| og_image_url.clone()),
        og_image_url,
        noindex: seo.noindex.unwrap_or(false),
        title,
        description,
    }
}

/// Remove script and style tags from HTML
pub fn clean_html(html: &str) -> String {
    let html = SCRIPT.replace_all(html, "");
    STYLE.replace_all(&html, "").into_owned()
}

/// Visible text of an HTML fragment with whitespace collapsed
pub fn plain_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let text: Vec<&str> = fragment.root_element().text().collect();
    text.join(" ").split_whitespace().collect::<Vec<_>>().join(" ")
}

fn excerpt(text: &str) -> String {
    if text.chars().count() <= EXCERPT_LENGTH {
        return text.to_string();
    }
    let cut: String = text.chars().take(EXCERPT_LENGTH).collect();
    // Prefer breaking on a word boundary
    match cut.rfind(' ') {
        Some(idx) => format!("{}...", &cut[..idx]),
        None => format!("{cut}..."),
    }
}

pub fn transform_article(article: &PageArticle) -> Result<ArticleOutput, CmsError> {
    let content = article
        .content
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .ok_or(CmsError::MissingArticle)?;
    let html = clean_html(content);
    let text = plain_text(&html);

    Ok(ArticleOutput {
        markdown: html2md::parse_html(&html).trim().to_string(),
        excerpt: excerpt(&text),
        word_count: crate::text::count_words(&text),
        html,
    })
}

fn title_case_slug(slug: &str) -> String {
    crate::text::convert_case(&slug.replace('-', " "), crate::text::CaseStyle::Title)
}

/// `Home > Category > Tool` trail for a page slug
pub fn breadcrumbs(slug: &str) -> Vec<Breadcrumb> {
    let mut trail = vec![Breadcrumb {
        label: "Home".to_string(),
        path: "/".to_string(),
    }];

    let last = slug.rsplit('/').next().unwrap_or(slug);
    match catalog::find(last) {
        Some(tool) => {
            trail.push(Breadcrumb {
                label: tool.category.label().to_string(),
                path: format!("/{}", tool.category.slug()),
            });
            trail.push(Breadcrumb {
                label: tool.name.to_string(),
                path: format!("/{}", tool.slug),
            });
        }
        None if !slug.is_empty() => trail.push(Breadcrumb {
            label: title_case_slug(last),
            path: format!("/{slug}"),
        }),
        None => {}
    }

    trail
}

/// Build the renderable page from a CMS response
///
/// A missing article is not an error here: the page still renders with its
/// SEO data and breadcrumbs.
pub fn transform_page(
    slug: &str,
    response: &CmsResponse,
    defaults: &SeoDefaults,
) -> Result<PageOutput, CmsError> {
    let slug = validate_slug(slug)?;

    let article = match &response.data.page_article {
        Some(article) => match transform_article(article) {
            Ok(output) => Some(output),
            Err(CmsError::MissingArticle) => None,
            Err(e) => return Err(e),
        },
        None => None,
    };

    Ok(PageOutput {
        slug: slug.to_string(),
        seo: resolve_seo(response.data.page_seo.as_ref(), defaults),
        breadcrumbs: breadcrumbs(slug),
        article,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> CmsResponse {
        serde_json::from_value(serde_json::json!({
            "data": {
                "PageArticle": {
                    "content": "<h2>How it works</h2><script>track()</script><p>Convert &amp; compare numbers.</p><style>p{}</style>"
                },
                "PageSEO": {
                    "metaTitle": "Hex Calculator",
                    "metaDescription": "",
                    "keywords": "hex, calculator , ,base 16",
                    "ogImageUrl": "https://cdn.example.com/hex.png",
                    "noindex": true
                }
            }
        }))
        .unwrap()
    }

    // ============================================================================
    // resolve_seo tests
    // ============================================================================

    #[test]
    fn test_resolve_seo_falls_back_to_defaults() {
        let defaults = SeoDefaults::default();
        let seo = resolve_seo(None, &defaults);
        assert_eq!(seo.title, defaults.title);
        assert_eq!(seo.description, defaults.description);
        assert_eq!(seo.og_title, defaults.title);
        assert!(!seo.noindex);
        assert!(seo.keywords.is_empty());
    }

    #[test]
    fn test_resolve_seo_blank_fields_use_defaults() {
        let response = fixture();
        let defaults = SeoDefaults::default();
        let seo = resolve_seo(response.data.page_seo.as_ref(), &defaults);

        assert_eq!(seo.title, "Hex Calculator");
        assert_eq!(seo.description, defaults.description);
        assert_eq!(seo.og_title, "Hex Calculator");
        assert_eq!(seo.keywords, vec!["hex", "calculator", "base 16"]);
        assert_eq!(
            seo.twitter_image_url.as_deref(),
            Some("https://cdn.example.com/hex.png")
        );
        assert!(seo.noindex);
    }

    #[test]
    fn test_resolve_seo_decodes_entities() {
        let seo = PageSeo {
            meta_title: Some("Tax &amp; GST".to_string()),
            ..Default::default()
        };
        assert_eq!(
            resolve_seo(Some(&seo), &SeoDefaults::default()).title,
            "Tax & GST"
        );
    }

    // ============================================================================
    // article tests
    // ============================================================================

    #[test]
    fn test_clean_html_removes_script_and_style() {
        let cleaned = clean_html("<p>a</p><script type=\"x\">evil()</script><STYLE>b{}</STYLE>");
        assert_eq!(cleaned, "<p>a</p>");
    }

    #[test]
    fn test_transform_article() {
        let response = fixture();
        let article = transform_article(response.data.page_article.as_ref().unwrap()).unwrap();

        assert!(!article.html.contains("track()"));
        assert!(article.markdown.contains("How it works"));
        assert_eq!(article.excerpt, "How it works Convert & compare numbers.");
        assert_eq!(article.word_count, 7);
    }

    #[test]
    fn test_transform_article_missing_content() {
        let article = PageArticle { content: None };
        assert_eq!(
            transform_article(&article).unwrap_err(),
            CmsError::MissingArticle
        );
    }

    #[test]
    fn test_excerpt_truncates_on_word_boundary() {
        let text = "word ".repeat(100);
        let out = excerpt(text.trim());
        assert!(out.ends_with("..."));
        assert!(out.chars().count() <= EXCERPT_LENGTH + 3);
        assert!(!out.contains("wor..."));
    }

    // ============================================================================
    // breadcrumbs / transform_page tests
    // ============================================================================

    #[test]
    fn test_breadcrumbs_for_known_tool() {
        let trail = breadcrumbs("hex-calculator");
        let labels: Vec<_> = trail.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Home", "Number Converters", "Hex Calculator"]);
        assert_eq!(trail[2].path, "/hex-calculator");
    }

    #[test]
    fn test_breadcrumbs_for_unknown_page() {
        let trail = breadcrumbs("about-us");
        assert_eq!(trail.len(), 2);
        assert_eq!(trail[1].label, "About Us");
    }

    #[test]
    fn test_transform_page() {
        let page = transform_page("/hex-calculator/", &fixture(), &SeoDefaults::default()).unwrap();
        assert_eq!(page.slug, "hex-calculator");
        assert_eq!(page.breadcrumbs.len(), 3);
        assert!(page.article.is_some());
    }

    #[test]
    fn test_transform_page_without_article() {
        let page = transform_page("about", &CmsResponse::default(), &SeoDefaults::default()).unwrap();
        assert!(page.article.is_none());
        assert_eq!(page.seo.title, SeoDefaults::default().title);
    }

    #[test]
    fn test_transform_page_rejects_bad_slug() {
        assert!(matches!(
            transform_page("../etc/passwd", &CmsResponse::default(), &SeoDefaults::default()),
            Err(CmsError::InvalidSlug(_))
        ));
    }
}
