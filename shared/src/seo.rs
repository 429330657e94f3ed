//! Page metadata: what goes into `<head>` for each page.

use crate::{
    format::image_url,
    model::{Article, Category},
};

const MAX_TITLE_CHARS: usize = 88;
const MAX_DESCRIPTION_CHARS: usize = 180;

/// Head metadata for one page. `None` fields mean the tag is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMeta {
    /// Page title, trimmed to the tag limit.
    pub title: String,
    /// Meta description, trimmed to the tag limit.
    pub description: String,
    /// Open Graph type; pages without one emit no `og:*` tags.
    pub og_type: Option<&'static str>,
    /// Absolute URL of the share image.
    pub image: Option<String>,
    /// ISO-8601 publication time for articles.
    pub published_time: Option<String>,
    /// Raw JSON-LD document authored in the CMS.
    pub json_ld: Option<String>,
    /// Site-relative path used for the canonical link.
    pub path: Option<String>,
}

impl PageMeta {
    /// Plain page metadata with normalized title and description.
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: normalize_meta_text(title, MAX_TITLE_CHARS),
            description: normalize_meta_text(description, MAX_DESCRIPTION_CHARS),
            ..Self::default()
        }
    }

    /// Set the canonical path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Metadata for an article page. SEO overrides win; an SEO image that
    /// is only an id cannot be resolved and yields no image at all.
    pub fn for_article(article: &Article, media_base: &str) -> Self {
        let seo = article.seo.as_ref();
        let title = seo
            .and_then(|seo| non_blank(seo.title.as_deref()))
            .unwrap_or(&article.title);
        let description = seo
            .and_then(|seo| non_blank(seo.description.as_deref()))
            .or_else(|| non_blank(article.excerpt.as_deref()))
            .map(str::to_string)
            .unwrap_or_else(|| format!("Read {}", article.title));

        let image = match seo.and_then(|seo| seo.image.as_ref()) {
            Some(relation) => relation.populated().map(|media| media.url.as_str()),
            None => article.featured_media().map(|media| media.url.as_str()),
        }
        .filter(|url| !url.trim().is_empty())
        .map(|url| image_url(url, media_base));

        let mut meta = Self::new(title, &description);
        meta.og_type = Some("article");
        meta.image = image;
        meta.published_time = non_blank(article.published_at.as_deref()).map(str::to_string);
        meta.json_ld = non_blank(article.json_ld.as_deref()).map(str::to_string);
        if let Some(slug) = non_blank(article.slug.as_deref()) {
            meta.path = Some(format!("/articles/{slug}"));
        }
        meta
    }

    /// Metadata for a category page, with a generated fallback description.
    pub fn for_category(category: &Category) -> Self {
        let fallback = format!("Explore {} guides and tutorials", category.name);
        let description = non_blank(category.description.as_deref()).unwrap_or(&fallback);
        Self::new(&format!("{} Guides - ClonePartner", category.name), description)
            .with_path(format!("/categories/{}", category.slug))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn normalize_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_chars(value: &str, max_chars: usize) -> String {
    let mut out: String = value.chars().take(max_chars).collect();
    if value.chars().count() > max_chars {
        out.push_str("...");
    }
    out
}

/// Collapse whitespace and cap the length, marking a cut with `...`.
pub fn normalize_meta_text(value: &str, max_chars: usize) -> String {
    let compact = normalize_whitespace(value);
    if compact.chars().count() > max_chars {
        truncate_chars(&compact, max_chars)
    } else {
        compact
    }
}

/// `path` on the public site, e.g. for canonical links.
pub fn absolute_url(site_base: &str, path_or_url: &str) -> String {
    let trimmed = path_or_url.trim();
    if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
        return trimmed.to_string();
    }
    let path = trimmed.trim_start_matches('/');
    format!("{}/{}", site_base.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::BackendArticle;

    fn article(value: serde_json::Value) -> Article {
        let backend: BackendArticle =
            serde_json::from_value(value).expect("article fixture should decode");
        backend.into()
    }

    fn base() -> serde_json::Value {
        json!({
            "id": 1,
            "title": "Migrating to Attio",
            "slug": "migrating-to-attio",
            "content": { "root": { "children": [] } },
            "createdAt": "2024-01-01T00:00:00.000Z",
            "updatedAt": "2024-01-01T00:00:00.000Z"
        })
    }

    #[test]
    fn falls_back_to_title_and_read_prompt() {
        let meta = PageMeta::for_article(&article(base()), "");
        assert_eq!(meta.title, "Migrating to Attio");
        assert_eq!(meta.description, "Read Migrating to Attio");
        assert_eq!(meta.og_type, Some("article"));
        assert_eq!(meta.image, None);
        assert_eq!(meta.path.as_deref(), Some("/articles/migrating-to-attio"));
    }

    #[test]
    fn seo_overrides_win() {
        let mut value = base();
        value["excerpt"] = json!("Short excerpt");
        value["publishedAt"] = json!("2024-02-01T09:00:00.000Z");
        value["seo"] = json!({
            "title": "SEO title",
            "description": "SEO   description\nspread out",
            "image": { "id": 9, "url": "/media/og.png", "filename": "og.png" }
        });
        value["coverImage"] = json!({ "id": 3, "url": "/media/cover.png", "filename": "cover.png" });

        let meta = PageMeta::for_article(&article(value), "https://cms.example.com");
        assert_eq!(meta.title, "SEO title");
        assert_eq!(meta.description, "SEO description spread out");
        assert_eq!(meta.image.as_deref(), Some("https://cms.example.com/media/og.png"));
        assert_eq!(meta.published_time.as_deref(), Some("2024-02-01T09:00:00.000Z"));
    }

    #[test]
    fn unpopulated_seo_image_suppresses_featured_image() {
        let mut value = base();
        value["excerpt"] = json!("Excerpt wins over the read prompt");
        value["seo"] = json!({ "image": 42 });
        value["coverImage"] = json!({ "id": 3, "url": "/media/cover.png", "filename": "cover.png" });

        let meta = PageMeta::for_article(&article(value), "");
        assert_eq!(meta.description, "Excerpt wins over the read prompt");
        assert_eq!(meta.image, None);
    }

    #[test]
    fn featured_image_used_without_seo_image() {
        let mut value = base();
        value["featuredImage"] = json!({ "id": 3, "url": "/media/hero.png", "filename": "hero.png" });
        let meta = PageMeta::for_article(&article(value), "");
        assert_eq!(meta.image.as_deref(), Some("/media/hero.png"));
    }

    #[test]
    fn long_text_is_truncated() {
        let text = "word ".repeat(100);
        let out = normalize_meta_text(&text, 20);
        assert_eq!(out, "word word word word ...");
    }

    #[test]
    fn absolute_url_joins_site_base() {
        assert_eq!(
            absolute_url("https://clonepartner.com/", "/articles/x"),
            "https://clonepartner.com/articles/x"
        );
        assert_eq!(absolute_url("https://a.com", "https://b.com/x"), "https://b.com/x");
    }
}
