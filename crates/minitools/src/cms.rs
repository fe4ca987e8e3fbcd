use crate::palette::Palette;
use crate::prelude::{eprintln, println, *};
use minitools_core::cms::{self, CmsResponse, PageOutput, SeoDefaults};
use std::time::Duration;

#[derive(Debug, clap::Parser)]
#[command(name = "cms")]
#[command(about = "Article and SEO content from the CMS")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Fetch a static tool page by slug
    #[clap(name = "page")]
    Page(PageOptions),

    /// Fetch a dynamic page by slug
    #[clap(name = "dynamic")]
    Dynamic(PageOptions),
}

#[derive(Debug, Clone, clap::Args)]
pub struct PageOptions {
    /// Page slug, e.g. hex-calculator
    #[arg(value_name = "SLUG")]
    pub slug: String,

    /// CMS base URL (overrides MINITOOLS_CMS_URL)
    #[arg(long)]
    pub cms_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value = "15")]
    pub timeout: u64,

    /// Print the cleaned HTML instead of Markdown
    #[arg(long)]
    pub html: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Page,
    Dynamic,
}

impl PageKind {
    fn path(self) -> &'static str {
        match self {
            PageKind::Page => "pages",
            PageKind::Dynamic => "dynamic-pages",
        }
    }
}

/// CMS configuration from environment variables
#[derive(Debug, Clone)]
pub struct CmsConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout: Duration,
}

impl CmsConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::resolve(None, Duration::from_secs(15))
    }

    /// Environment configuration with an optional base URL override
    pub fn resolve(base_url: Option<String>, timeout: Duration) -> Result<Self> {
        let base_url = match base_url {
            Some(url) => url,
            None => std::env::var("MINITOOLS_CMS_URL")
                .map_err(|_| eyre!("MINITOOLS_CMS_URL environment variable not set"))?,
        };
        let token = std::env::var("MINITOOLS_CMS_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            timeout,
        })
    }
}

/// Create an HTTP client that sends the CMS token as a bearer header
pub fn create_client(config: &CmsConfig) -> Result<reqwest::Client> {
    use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(token) = &config.token {
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| eyre!("Invalid header value: {}", e))?,
        );
    }

    reqwest::Client::builder()
        .default_headers(headers)
        .timeout(config.timeout)
        .build()
        .map_err(|e| eyre!("Failed to build HTTP client: {}", e))
}

/// `{base}/pages/{slug}` or `{base}/dynamic-pages/{slug}`, each segment url-encoded
pub fn page_url(base_url: &str, kind: PageKind, slug: &str) -> Result<String> {
    let slug = cms::validate_slug(slug).map_err(Error::validation)?;
    let encoded = slug
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");
    Ok(format!("{base_url}/{}/{encoded}", kind.path()))
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let (kind, options) = match app.command {
        Commands::Page(options) => (PageKind::Page, options),
        Commands::Dynamic(options) => (PageKind::Dynamic, options),
    };

    let config = CmsConfig::resolve(options.cms_url.clone(), Duration::from_secs(options.timeout))?;
    if global.verbose {
        eprintln!("CMS base URL: {}", config.base_url);
    }

    let page = fetch_page_data(&config, kind, &options.slug).await?;

    if options.json {
        println!("{}", to_json(&page)?);
    } else {
        println!("{}", format_page_text(&page, options.html, &global.palette()));
    }

    Ok(())
}

/// Fetch a page from the CMS and run it through the article/SEO transforms
pub async fn fetch_page_data(config: &CmsConfig, kind: PageKind, slug: &str) -> Result<PageOutput> {
    let url = page_url(&config.base_url, kind, slug)?;
    let client = create_client(config)?;

    log::debug!("GET {url}");
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| Error::Network(format!("Failed to fetch {slug}: {e}")))?;

    if !response.status().is_success() {
        return Err(Error::Network(format!(
            "Failed to fetch {slug}: HTTP {}",
            response.status()
        ))
        .into());
    }

    let body: CmsResponse = response
        .json()
        .await
        .map_err(|e| Error::UnexpectedResponse(format!("Failed to parse page {slug}: {e}")))?;

    Ok(cms::transform_page(slug, &body, &SeoDefaults::default()).map_err(Error::validation)?)
}

fn format_page_text(page: &PageOutput, html: bool, palette: &Palette) -> String {
    let mut result = palette.banner(&page.seo.title);
    result.push('\n');

    let trail = page
        .breadcrumbs
        .iter()
        .map(|crumb| crumb.label.as_str())
        .collect::<Vec<_>>()
        .join(" > ");
    result.push_str(&format!("  {}\n\n", palette.muted(&trail)));

    result.push_str(&palette.field("Description", &page.seo.description));
    if let Some(canonical) = &page.seo.canonical_url {
        result.push_str(&palette.field("Canonical", canonical));
    }
    if !page.seo.keywords.is_empty() {
        result.push_str(&palette.field("Keywords", &page.seo.keywords.join(", ")));
    }
    if page.seo.noindex {
        result.push_str(&format!("  {}\n", palette.accent("noindex")));
    }

    match &page.article {
        Some(article) => {
            result.push_str(&palette.field("Words", &article.word_count.to_string()));
            result.push('\n');
            if html {
                result.push_str(&article.html);
            } else {
                result.push_str(&article.markdown);
            }
            result.push('\n');
        }
        None => {
            result.push_str(&format!("\n  {}\n", palette.muted("No article content.")));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use minitools_core::theme::{Theme, ThemeSource};

    #[test]
    fn test_page_url_paths() {
        assert_eq!(
            page_url("https://cms.example.com", PageKind::Page, "hex-calculator").unwrap(),
            "https://cms.example.com/pages/hex-calculator"
        );
        assert_eq!(
            page_url("https://cms.example.com", PageKind::Dynamic, "/blog/post-1/").unwrap(),
            "https://cms.example.com/dynamic-pages/blog/post-1"
        );
    }

    #[test]
    fn test_page_url_rejects_invalid_slug() {
        assert!(page_url("https://cms.example.com", PageKind::Page, "../etc").is_err());
    }

    #[test]
    fn test_format_page_text_without_article() {
        let response: CmsResponse = serde_json::from_value(serde_json::json!({
            "data": { "PageSEO": { "metaTitle": "Hex Calculator", "noindex": true } }
        }))
        .unwrap();
        let page = cms::transform_page("hex-calculator", &response, &SeoDefaults::default())
            .unwrap();
        let text = format_page_text(&page, false, &Palette::new(ThemeSource::new(Theme::Dark)));
        assert!(text.contains("Hex Calculator"));
        assert!(text.contains("Home > Number Converters > Hex Calculator"));
        assert!(text.contains("noindex"));
        assert!(text.contains("No article content."));
    }
}
