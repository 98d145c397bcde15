use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::config;

/// Abbreviated post representation as served by the list endpoint.
///
/// The content service has shipped two spellings for the image and publish
/// date fields over time, so both are accepted and reconciled by
/// [`BlogListItem::normalize`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlogListItem {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, rename = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(default, rename = "publishedAt")]
    pub published_at: Option<String>,
}

/// Full post representation from the by-slug endpoint. `content` is an HTML
/// fragment rendered verbatim into the article body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlogPostDetail {
    #[serde(flatten)]
    pub item: BlogListItem,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub read_time: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug)]
pub enum ContentError {
    Request(gloo_net::Error),
    Status(u16),
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::Request(e) => write!(f, "request failed: {}", e),
            ContentError::Status(code) => write!(f, "request failed: {}", code),
        }
    }
}

impl From<gloo_net::Error> for ContentError {
    fn from(e: gloo_net::Error) -> Self {
        ContentError::Request(e)
    }
}

impl BlogListItem {
    /// Reconcile the two field-name variants into a single canonical pair.
    /// `image` and `date` win when both spellings are present.
    pub fn normalize(mut self) -> Self {
        self.image_url = self.image.clone().or(self.image_url);
        self.published_at = self.date.clone().or(self.published_at);
        self
    }
}

impl BlogPostDetail {
    pub fn normalize(mut self) -> Self {
        self.item = self.item.normalize();
        self
    }
}

fn list_url() -> String {
    format!("{}/webhook/blogs", config::get_content_api_url())
}

fn by_slug_url(slug: &str) -> String {
    format!(
        "{}/webhook/{}/blogs/{}",
        config::get_content_api_url(),
        config::BLOG_BY_SLUG_WORKFLOW,
        urlencoding::encode(slug),
    )
}

/// Fetch the full post list. One GET, no retries, no caching.
pub async fn list_posts() -> Result<Vec<BlogListItem>, ContentError> {
    let response = Request::get(&list_url()).send().await?;
    if !response.ok() {
        return Err(ContentError::Status(response.status()));
    }
    let posts = response.json::<Vec<BlogListItem>>().await?;
    Ok(posts.into_iter().map(BlogListItem::normalize).collect())
}

/// Fetch a single post by slug.
pub async fn get_post(slug: &str) -> Result<BlogPostDetail, ContentError> {
    let response = Request::get(&by_slug_url(slug)).send().await?;
    if !response.ok() {
        return Err(ContentError::Status(response.status()));
    }
    let post = response.json::<BlogPostDetail>().await?;
    Ok(post.normalize())
}

/// Render an ISO-ish publish date for display, falling back to the raw
/// string when the service sends something unparseable.
pub fn format_publish_date(raw: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.format("%B %-d, %Y").to_string();
    }
    if let Ok(d) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.format("%B %-d, %Y").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(image: Option<&str>, image_url: Option<&str>) -> BlogListItem {
        BlogListItem {
            id: "1".into(),
            slug: "intro".into(),
            title: "Intro".into(),
            excerpt: String::new(),
            category: String::new(),
            date: None,
            image: image.map(String::from),
            image_url: image_url.map(String::from),
            published_at: None,
        }
    }

    #[test]
    fn normalize_fills_image_url_from_image() {
        let post = item(Some("https://cdn/a.webp"), None).normalize();
        assert_eq!(post.image_url.as_deref(), Some("https://cdn/a.webp"));
    }

    #[test]
    fn normalize_prefers_image_when_both_set() {
        let post = item(Some("https://cdn/a.webp"), Some("https://cdn/b.webp")).normalize();
        assert_eq!(post.image_url.as_deref(), Some("https://cdn/a.webp"));
    }

    #[test]
    fn normalize_keeps_image_url_when_image_absent() {
        let post = item(None, Some("https://cdn/b.webp")).normalize();
        assert_eq!(post.image_url.as_deref(), Some("https://cdn/b.webp"));
    }

    #[test]
    fn normalize_reconciles_publish_date() {
        let mut post = item(None, None);
        post.date = Some("2025-06-01".into());
        post.published_at = Some("ignored".into());
        let post = post.normalize();
        assert_eq!(post.published_at.as_deref(), Some("2025-06-01"));
    }

    #[test]
    fn list_items_deserialize_with_either_field_spelling() {
        let json = r#"{
            "id": "7",
            "slug": "ai-paths",
            "title": "AI Paths",
            "excerpt": "e",
            "category": "AI Trends",
            "imageUrl": "https://cdn/c.webp",
            "publishedAt": "2025-03-10"
        }"#;
        let post: BlogListItem = serde_json::from_str(json).unwrap();
        let post = post.normalize();
        assert_eq!(post.image_url.as_deref(), Some("https://cdn/c.webp"));
        assert_eq!(post.published_at.as_deref(), Some("2025-03-10"));
    }

    #[test]
    fn detail_flattens_list_fields() {
        let json = r#"{
            "id": "7",
            "slug": "ai-paths",
            "title": "AI Paths",
            "image": "https://cdn/c.webp",
            "date": "2025-03-10",
            "author": "Priya",
            "read_time": "5 min",
            "content": "<h2 id=\"intro\">Intro</h2>"
        }"#;
        let post: BlogPostDetail = serde_json::from_str(json).unwrap();
        let post = post.normalize();
        assert_eq!(post.author, "Priya");
        assert_eq!(post.item.image_url.as_deref(), Some("https://cdn/c.webp"));
    }

    #[test]
    fn publish_dates_format_for_display() {
        assert_eq!(format_publish_date("2025-03-10"), "March 10, 2025");
        assert_eq!(format_publish_date("not a date"), "not a date");
    }

    // Non-2xx responses map to a status error; the message is what the
    // pages log before switching to their explicit error state.
    #[test]
    fn status_errors_carry_the_http_code() {
        let err = ContentError::Status(500);
        assert_eq!(err.to_string(), "request failed: 500");
    }
}
