use super::api::ApiClient;
use super::{FeedData, FeedFetcher, NewsItem};
use crate::error::FetchError;
use async_trait::async_trait;
use scraper::{Html, Node};

pub const NEWS_PATH: &str = "news";

const BLOCK_ELEMENTS: &[&str] = &[
    "p", "br", "div", "li", "tr", "h1", "h2", "h3", "h4", "h5", "h6", "blockquote", "pre",
];

pub struct NewsFetcher {
    api: ApiClient,
}

impl NewsFetcher {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl FeedFetcher for NewsFetcher {
    async fn fetch(&self) -> Result<FeedData, FetchError> {
        let items: Vec<NewsItem> = self.api.get_json(NEWS_PATH).await?;
        Ok(FeedData::News(items))
    }
}

impl NewsItem {
    /// The body as plain text, one paragraph per line.
    pub fn body_text(&self) -> String {
        html_to_text(&self.body)
    }

    /// "Jo (Fri 01 Mar 2024 10:15)" in the board's local time zone.
    pub fn byline(&self) -> String {
        match self.created_at {
            Some(ts) => {
                let local = ts.to_zoned(jiff::tz::TimeZone::system());
                format!(
                    "{} ({})",
                    self.creator.name,
                    local.strftime("%a %d %b %Y %H:%M")
                )
            }
            None => self.creator.name.clone(),
        }
    }
}

/// Flatten an HTML fragment to text, breaking lines at block elements and
/// collapsing runs of whitespace.
pub fn html_to_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut raw = String::new();

    for node in fragment.root_element().descendants() {
        match node.value() {
            Node::Text(text) => raw.push_str(text),
            Node::Element(element) if BLOCK_ELEMENTS.contains(&element.name()) => {
                raw.push('\n')
            }
            _ => {}
        }
    }

    raw.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feeds::Creator;

    fn item(body: &str, created_at: Option<&str>) -> NewsItem {
        NewsItem {
            title: "Title".to_string(),
            body: body.to_string(),
            creator: Creator {
                name: "Jo".to_string(),
            },
            created_at: created_at.map(|s| s.parse().unwrap()),
            sticky: false,
        }
    }

    #[test]
    fn test_paragraphs_become_lines() {
        assert_eq!(
            html_to_text("<p>First   para</p><p>Second <b>bold</b> para</p>"),
            "First para\nSecond bold para"
        );
    }

    #[test]
    fn test_line_breaks() {
        assert_eq!(html_to_text("one<br>two<br/>three"), "one\ntwo\nthree");
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(html_to_text("  just text  "), "just text");
    }

    #[test]
    fn test_entities_are_decoded() {
        assert_eq!(html_to_text("<p>Tea &amp; biscuits</p>"), "Tea & biscuits");
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(item("", None).body_text(), "");
    }

    #[test]
    fn test_byline_without_timestamp() {
        assert_eq!(item("", None).byline(), "Jo");
    }

    #[test]
    fn test_byline_with_timestamp() {
        let byline = item("", Some("2024-03-01T10:15:00Z")).byline();
        assert!(byline.starts_with("Jo ("));
        assert!(byline.contains("2024"));
    }
}
