//! Where the CLI gets its text from: web pages, local files or stdin.
//!
//! Uses reqwest for fetching, scraper for HTML parsing and pdf-extract for
//! PDF documents. The engine itself never fetches anything.

use reqwest::Client;
use scraper::{Html, Selector};
use std::io::Read;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// User-Agent string identifying this fetcher
const USER_AGENT: &str = concat!("summa/", env!("CARGO_PKG_VERSION"), " (https://github.com/cladam/summa)");

/// Default timeout for HTTP requests
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocks shorter than this are navigation or captions, not prose.
const MIN_BLOCK_CHARS: usize = 20;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),
    #[error("failed to read input: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to extract PDF text: {0}")]
    PdfError(String),
    #[error("no content found in {0}")]
    NoContent(String),
}

/// Text handed to the engine, with a label for display
#[derive(Debug, Clone)]
pub struct SourceText {
    /// URL, path or "stdin"
    pub origin: String,
    /// Page or document title, when one is known
    pub title: Option<String>,
    /// Raw text, possibly still containing markup
    pub text: String,
}

/// Resolve a CLI input argument: URL, file path, or stdin for `None`/`-`.
pub async fn load(input: Option<&str>) -> Result<SourceText, SourceError> {
    match input {
        None | Some("-") => read_stdin(),
        Some(url) if is_url(url) => fetch_url(url).await,
        Some(path) => read_file(Path::new(path)),
    }
}

fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Create a configured HTTP client
fn create_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
}

/// Fetch a page and extract its readable text
pub async fn fetch_url(url: &str) -> Result<SourceText, SourceError> {
    let client = create_client()?;
    let html = client.get(url).send().await?.error_for_status()?.text().await?;
    debug!(url, bytes = html.len(), "fetched page");

    let document = Html::parse_document(&html);
    let text = extract_readable(&document);
    if text.trim().is_empty() {
        return Err(SourceError::NoContent(url.to_string()));
    }

    Ok(SourceText {
        origin: url.to_string(),
        title: extract_title(&document),
        text,
    })
}

/// Read a local document; `.pdf` files go through pdf-extract
pub fn read_file(path: &Path) -> Result<SourceText, SourceError> {
    let is_pdf = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    let text = if is_pdf {
        pdf_extract::extract_text(path).map_err(|e| SourceError::PdfError(e.to_string()))?
    } else {
        std::fs::read_to_string(path)?
    };

    let origin = path.display().to_string();
    if text.trim().is_empty() {
        return Err(SourceError::NoContent(origin));
    }

    Ok(SourceText {
        title: path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned()),
        origin,
        text,
    })
}

fn read_stdin() -> Result<SourceText, SourceError> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    if text.trim().is_empty() {
        return Err(SourceError::NoContent("stdin".to_string()));
    }
    Ok(SourceText {
        origin: "stdin".to_string(),
        title: None,
        text,
    })
}

/// The page title from <title>, falling back to the first <h1>
pub fn extract_title(document: &Html) -> Option<String> {
    ["title", "h1"].into_iter().find_map(|tag| {
        let selector = Selector::parse(tag).ok()?;
        let element = document.select(&selector).next()?;
        let title = element.text().collect::<String>();
        let title = title.trim();
        (!title.is_empty()).then(|| title.to_string())
    })
}

/// Readable prose from the main content area, or the whole page.
pub fn extract_readable(document: &Html) -> String {
    let main_selectors = ["article", "main", "[role='main']", ".content", "#content"];

    for selector_str in main_selectors {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        if let Some(element) = document.select(&selector).next() {
            let text = prose_blocks(&Html::parse_fragment(&element.html()));
            if !text.trim().is_empty() {
                return text;
            }
        }
    }

    prose_blocks(document)
}

/// Paragraphs, headings and list items, excluding scripts and styles
fn prose_blocks(document: &Html) -> String {
    let Ok(block_selector) = Selector::parse("p, h1, h2, h3, h4, h5, h6, li") else {
        return String::new();
    };

    document
        .select(&block_selector)
        .map(|element| {
            let text = element.text().collect::<Vec<_>>().join(" ");
            text.split_whitespace().collect::<Vec<_>>().join(" ")
        })
        .filter(|block| block.chars().count() > MIN_BLOCK_CHARS)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PAGE: &str = r#"
        <html><head><title> Field Notes </title><script>var x = 1;</script></head>
        <body>
          <nav><p>Home</p></nav>
          <article>
            <h1>On rivers</h1>
            <p>Rivers carry sediment from the mountains to the sea.</p>
            <p>Short.</p>
            <ul><li>Deltas form where rivers meet slow water.</li></ul>
          </article>
        </body></html>"#;

    #[test]
    fn recognises_urls() {
        assert!(is_url("https://example.com"));
        assert!(is_url("http://example.com"));
        assert!(!is_url("notes/example.txt"));
    }

    #[test]
    fn extracts_title() {
        let document = Html::parse_document(PAGE);
        assert_eq!(extract_title(&document).as_deref(), Some("Field Notes"));
    }

    #[test]
    fn title_falls_back_to_heading() {
        let document = Html::parse_document("<body><h1>Heading only</h1></body>");
        assert_eq!(extract_title(&document).as_deref(), Some("Heading only"));
    }

    #[test]
    fn extracts_article_prose_only() {
        let document = Html::parse_document(PAGE);
        let text = extract_readable(&document);
        assert_eq!(
            text,
            "Rivers carry sediment from the mountains to the sea.\n\n\
             Deltas form where rivers meet slow water."
        );
    }

    #[test]
    fn reads_plain_text_files() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "Some notes worth summarising.").unwrap();
        let source = read_file(file.path()).unwrap();
        assert_eq!(source.text, "Some notes worth summarising.");
        assert!(source.title.is_some());
    }

    #[test]
    fn empty_file_has_no_content() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(matches!(
            read_file(file.path()),
            Err(SourceError::NoContent(_))
        ));
    }
}
