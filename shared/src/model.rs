//! Backend payloads and the frontend-facing shapes they are reshaped into.
//!
//! The CMS answers with Payload-style documents: relations are either a
//! populated object or a bare id, ids may be strings or numbers, and the
//! article image lives under `coverImage` on some collections and
//! `featuredImage` on others. Fields an editor never filled arrive as
//! `null`, and a relation that fails to decode degrades to
//! [`Relation::Other`] instead of failing the whole response. Everything past
//! this module only sees the normalized types.

use serde::{Deserialize, Deserializer};

use crate::{
    content::RichText,
    de::{null_as_default, ok_or_none},
};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Int(i64),
    Float(f64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(value) => value,
            RawId::Int(value) => value.to_string(),
            RawId::Float(value) => value.to_string(),
        }
    }
}

fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

/// Either a populated document or the id of an unpopulated one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Relation<T> {
    /// The backend expanded the relation.
    Populated(T),
    /// Only the id was sent.
    Id(#[serde(deserialize_with = "de_id")] String),
    /// Neither shape decoded; kept so the parent document still loads.
    Other(serde_json::Value),
}

impl<T> Relation<T> {
    /// The populated document, if any.
    pub fn populated(&self) -> Option<&T> {
        match self {
            Relation::Populated(value) => Some(value),
            Relation::Id(_) | Relation::Other(_) => None,
        }
    }

    /// Owned variant of [`Relation::populated`].
    pub fn into_populated(self) -> Option<T> {
        match self {
            Relation::Populated(value) => Some(value),
            Relation::Id(_) | Relation::Other(_) => None,
        }
    }
}

/// One resized rendition of an uploaded image. The CMS sends all-`null`
/// entries for sizes it could not generate.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MediaRendition {
    /// URL of the resized file.
    #[serde(default)]
    pub url: Option<String>,
    /// Pixel width.
    #[serde(default)]
    pub width: Option<u32>,
    /// Pixel height.
    #[serde(default)]
    pub height: Option<u32>,
}

/// Renditions generated for an upload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MediaSizes {
    /// Small square used for avatars and icons.
    #[serde(default)]
    pub thumbnail: Option<MediaRendition>,
    /// Listing card size.
    #[serde(default)]
    pub card: Option<MediaRendition>,
    /// Article body size.
    #[serde(default)]
    pub tablet: Option<MediaRendition>,
}

/// Named rendition sizes generated by the CMS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaSize {
    /// See [`MediaSizes::thumbnail`].
    Thumbnail,
    /// See [`MediaSizes::card`].
    Card,
    /// See [`MediaSizes::tablet`].
    Tablet,
}

/// Uploaded file metadata.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    /// Document id.
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    /// Alt text.
    #[serde(default)]
    pub alt: Option<String>,
    /// URL of the original upload.
    pub url: String,
    /// Stored file name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub filename: String,
    /// MIME type.
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Size in bytes.
    #[serde(default)]
    pub filesize: Option<u64>,
    /// Pixel width of the original.
    #[serde(default)]
    pub width: Option<u32>,
    /// Pixel height of the original.
    #[serde(default)]
    pub height: Option<u32>,
    /// Horizontal focal point, in percent.
    #[serde(default)]
    pub focal_x: Option<f64>,
    /// Vertical focal point, in percent.
    #[serde(default)]
    pub focal_y: Option<f64>,
    /// Generated renditions.
    #[serde(default, deserialize_with = "ok_or_none")]
    pub sizes: Option<MediaSizes>,
}

impl Media {
    /// URL of the requested rendition, or the original upload when the
    /// rendition was not generated.
    pub fn sized_url(&self, size: MediaSize) -> &str {
        let rendition = self.sizes.as_ref().and_then(|sizes| match size {
            MediaSize::Thumbnail => sizes.thumbnail.as_ref(),
            MediaSize::Card => sizes.card.as_ref(),
            MediaSize::Tablet => sizes.tablet.as_ref(),
        });
        rendition
            .and_then(|r| r.url.as_deref())
            .filter(|url| !url.is_empty())
            .unwrap_or(&self.url)
    }

    /// Alt text, or `fallback` when blank.
    pub fn alt_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.alt
            .as_deref()
            .filter(|alt| !alt.trim().is_empty())
            .unwrap_or(fallback)
    }
}

/// CMS user.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    /// Document id.
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Login email, shown when there is no name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    /// Profile picture.
    #[serde(default)]
    pub avatar: Option<Relation<Media>>,
}

impl User {
    /// Name, or the email when the name is blank.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.email)
    }

    /// Populated avatar.
    pub fn avatar(&self) -> Option<&Media> {
        self.avatar.as_ref().and_then(Relation::populated)
    }
}

/// Article author: a populated user or a free-form name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Author {
    /// Populated user document.
    User(User),
    /// Plain name.
    Name(String),
}

impl Author {
    /// Name to print in bylines.
    pub fn display_name(&self) -> &str {
        match self {
            Author::User(user) => user.display_name(),
            Author::Name(name) => name,
        }
    }

    /// Avatar of a populated user.
    pub fn avatar(&self) -> Option<&Media> {
        match self {
            Author::User(user) => user.avatar(),
            Author::Name(_) => None,
        }
    }
}

/// Per-article metadata overrides.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Seo {
    /// Page title override.
    #[serde(default)]
    pub title: Option<String>,
    /// Meta description override.
    #[serde(default)]
    pub description: Option<String>,
    /// Social preview image.
    #[serde(default)]
    pub image: Option<Relation<Media>>,
}

/// Tag or category reference attached to an article.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Taxon {
    /// Document id.
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    /// Display name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// Editorial state of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    /// Not yet public.
    Draft,
    /// Public.
    Published,
    /// Any state added to the CMS later.
    #[serde(other)]
    Other,
}

/// Article document as the backend sends it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendArticle {
    /// Document id.
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    /// Headline.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// URL slug.
    #[serde(default)]
    pub slug: Option<String>,
    /// Body; `null` reads as an empty document.
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: RichText,
    /// Editor-picked publication date.
    #[serde(default)]
    pub published_date: Option<String>,
    /// Timestamp set by the CMS on publish.
    #[serde(default)]
    pub published_at: Option<String>,
    /// Creation timestamp.
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    /// Last update timestamp.
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
    /// Author; an undecodable value reads as none.
    #[serde(default, deserialize_with = "ok_or_none")]
    pub author: Option<Author>,
    /// Image field on newer collections.
    #[serde(default)]
    pub cover_image: Option<Relation<Media>>,
    /// Image field on older collections.
    #[serde(default)]
    pub featured_image: Option<Relation<Media>>,
    /// Summary shown in listings.
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Tags, populated or as ids.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<Relation<Taxon>>,
    /// Categories, populated or as ids.
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<Relation<Taxon>>,
    /// Editorial state.
    #[serde(default)]
    pub status: Option<PublishStatus>,
    /// Hand-written JSON-LD document.
    #[serde(default)]
    pub json_ld: Option<String>,
    /// Metadata overrides; an undecodable value reads as none.
    #[serde(default, deserialize_with = "ok_or_none")]
    pub seo: Option<Seo>,
}

/// Article as the pages consume it.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    /// Document id.
    pub id: String,
    /// Headline.
    pub title: String,
    /// URL slug.
    pub slug: Option<String>,
    /// Body.
    pub content: RichText,
    /// Editor-picked publication date.
    pub published_date: Option<String>,
    /// Timestamp set by the CMS on publish.
    pub published_at: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp.
    pub updated_at: String,
    /// Author.
    pub author: Option<Author>,
    /// Cover image, from whichever image field was set.
    pub featured_image: Option<Relation<Media>>,
    /// Summary.
    pub excerpt: Option<String>,
    /// Populated tags.
    pub tags: Vec<Taxon>,
    /// Populated categories.
    pub categories: Vec<Taxon>,
    /// Editorial state.
    pub status: Option<PublishStatus>,
    /// Hand-written JSON-LD document.
    pub json_ld: Option<String>,
    /// Metadata overrides.
    pub seo: Option<Seo>,
}

impl Article {
    /// Publication timestamp, preferring the system `publishedAt`.
    pub fn published(&self) -> Option<&str> {
        self.published_at
            .as_deref()
            .or(self.published_date.as_deref())
            .filter(|value| !value.trim().is_empty())
    }

    /// Populated cover image.
    pub fn featured_media(&self) -> Option<&Media> {
        self.featured_image.as_ref().and_then(Relation::populated)
    }
}

fn populated<T>(relations: Vec<Relation<T>>) -> Vec<T> {
    relations.into_iter().filter_map(Relation::into_populated).collect()
}

impl From<BackendArticle> for Article {
    fn from(data: BackendArticle) -> Self {
        Article {
            featured_image: data.cover_image.or(data.featured_image),
            id: data.id,
            title: data.title,
            slug: data.slug,
            content: data.content,
            published_date: data.published_date,
            published_at: data.published_at,
            created_at: data.created_at,
            updated_at: data.updated_at,
            author: data.author,
            excerpt: data.excerpt,
            tags: populated(data.tags),
            categories: populated(data.categories),
            status: data.status,
            json_ld: data.json_ld,
            seo: data.seo,
        }
    }
}

/// Condensed article used by listings.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleListItem {
    /// Document id.
    pub id: String,
    /// Headline.
    pub title: String,
    /// Slug, or `article-{id}` when the document has none.
    pub slug: String,
    /// Summary.
    pub excerpt: Option<String>,
    /// Author display name.
    pub author: Option<String>,
    /// Editor date, else the publish timestamp.
    pub published_date: Option<String>,
    /// Populated cover image.
    pub featured_image: Option<Media>,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp.
    pub updated_at: String,
}

impl From<BackendArticle> for ArticleListItem {
    fn from(article: BackendArticle) -> Self {
        let slug = article
            .slug
            .filter(|slug| !slug.trim().is_empty())
            .unwrap_or_else(|| format!("article-{}", article.id));
        let featured_image = article
            .cover_image
            .and_then(Relation::into_populated)
            .or_else(|| article.featured_image.and_then(Relation::into_populated));

        ArticleListItem {
            slug,
            author: article.author.map(|author| author.display_name().to_string()),
            published_date: article.published_date.or(article.published_at),
            featured_image,
            id: article.id,
            title: article.title,
            excerpt: article.excerpt,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Category document as the backend sends it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendCategory {
    /// Document id.
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    /// Display name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// URL slug.
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    /// Short description.
    #[serde(default)]
    pub description: Option<String>,
    /// Tile image.
    #[serde(default)]
    pub cover_image: Option<Relation<Media>>,
    /// Denormalized article count.
    #[serde(default)]
    pub article_count: Option<u32>,
    /// Articles, when the list was requested with `includeArticles`.
    #[serde(default)]
    pub articles: Option<Vec<Relation<BackendArticle>>>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Category as the pages consume it.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    /// Document id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Non-blank description.
    pub description: Option<String>,
    /// Populated tile image.
    pub cover_image: Option<Media>,
    /// Denormalized count maintained by the backend.
    pub article_count: u32,
    /// Populated articles, when requested.
    pub articles: Option<Vec<ArticleListItem>>,
    /// Creation timestamp.
    pub created_at: Option<String>,
    /// Last update timestamp.
    pub updated_at: Option<String>,
}

impl From<BackendCategory> for Category {
    fn from(data: BackendCategory) -> Self {
        Category {
            id: data.id,
            name: data.name,
            slug: data.slug,
            description: data.description.filter(|d| !d.trim().is_empty()),
            cover_image: data.cover_image.and_then(Relation::into_populated),
            article_count: data.article_count.unwrap_or(0),
            articles: data.articles.map(|articles| {
                populated(articles).into_iter().map(ArticleListItem::from).collect()
            }),
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }
}

fn de_page<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<u32>::deserialize(deserializer).map(|page| page.unwrap_or(1))
}

/// Pagination metadata attached to every list response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Current page, 1-based.
    #[serde(default = "first_page", deserialize_with = "de_page")]
    pub page: u32,
    /// Page size.
    #[serde(default, deserialize_with = "null_as_default")]
    pub limit: u32,
    /// Number of pages.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_pages: u32,
    /// Number of documents across all pages.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_docs: u32,
    /// A later page exists.
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_next_page: bool,
    /// An earlier page exists.
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_prev_page: bool,
    /// Next page number.
    #[serde(default)]
    pub next_page: Option<u32>,
    /// Previous page number.
    #[serde(default)]
    pub prev_page: Option<u32>,
}

fn first_page() -> u32 {
    1
}

impl Default for PaginationMeta {
    fn default() -> Self {
        Self::single_page(0)
    }
}

impl PaginationMeta {
    /// Metadata for a single page holding `total_docs` items.
    pub fn single_page(total_docs: u32) -> Self {
        PaginationMeta {
            page: 1,
            limit: total_docs,
            total_pages: 1,
            total_docs,
            has_next_page: false,
            has_prev_page: false,
            next_page: None,
            prev_page: None,
        }
    }

    /// Metadata for `page` of a collection, the way the backend computes it.
    pub fn for_page(page: u32, limit: u32, total_docs: u32) -> Self {
        let limit = limit.max(1);
        let total_pages = total_docs.div_ceil(limit).max(1);
        let page = page.clamp(1, total_pages);
        PaginationMeta {
            page,
            limit,
            total_pages,
            total_docs,
            has_next_page: page < total_pages,
            has_prev_page: page > 1,
            next_page: (page < total_pages).then_some(page + 1),
            prev_page: (page > 1).then_some(page - 1),
        }
    }
}

/// `{ success, data }` wrapper around single documents.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    /// Backend success flag.
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    /// The document.
    pub data: T,
}

/// `{ success, data, pagination }` wrapper around list endpoints.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PagedEnvelope<T> {
    /// Backend success flag.
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    /// Documents of the page.
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<T>,
    /// Page metadata; missing reads as a single empty page.
    #[serde(default, deserialize_with = "null_as_default")]
    pub pagination: PaginationMeta,
}

/// Payload of `/categories/slug/:slug`.
#[derive(Debug, Deserialize)]
pub struct CategoryDetailEnvelope {
    /// Backend success flag.
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    /// The category.
    pub category: BackendCategory,
    /// One page of its articles.
    #[serde(default, deserialize_with = "null_as_default")]
    pub articles: Vec<Relation<BackendArticle>>,
    /// Metadata of the article page.
    #[serde(default, deserialize_with = "null_as_default")]
    pub pagination: PaginationMeta,
}

/// Normalized `/articles/list` response.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleListResponse {
    /// Backend success flag.
    pub success: bool,
    /// Articles of the page.
    pub articles: Vec<ArticleListItem>,
    /// Page metadata.
    pub pagination: PaginationMeta,
}

impl From<PagedEnvelope<BackendArticle>> for ArticleListResponse {
    fn from(envelope: PagedEnvelope<BackendArticle>) -> Self {
        ArticleListResponse {
            success: envelope.success,
            articles: envelope.data.into_iter().map(ArticleListItem::from).collect(),
            pagination: envelope.pagination,
        }
    }
}

/// Normalized `/categories/list` response.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryListResponse {
    /// Backend success flag.
    pub success: bool,
    /// Categories of the page.
    pub data: Vec<Category>,
    /// Page metadata.
    pub pagination: PaginationMeta,
}

impl From<PagedEnvelope<BackendCategory>> for CategoryListResponse {
    fn from(envelope: PagedEnvelope<BackendCategory>) -> Self {
        CategoryListResponse {
            success: envelope.success,
            data: envelope.data.into_iter().map(Category::from).collect(),
            pagination: envelope.pagination,
        }
    }
}

/// Normalized category detail response.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDetailResponse {
    /// Backend success flag.
    pub success: bool,
    /// The category.
    pub category: Category,
    /// One page of its articles.
    pub articles: Vec<ArticleListItem>,
    /// Metadata of the article page.
    pub pagination: PaginationMeta,
}

impl From<CategoryDetailEnvelope> for CategoryDetailResponse {
    fn from(envelope: CategoryDetailEnvelope) -> Self {
        CategoryDetailResponse {
            success: envelope.success,
            category: Category::from(envelope.category),
            articles: populated(envelope.articles)
                .into_iter()
                .map(ArticleListItem::from)
                .collect(),
            pagination: envelope.pagination,
        }
    }
}

fn encode_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, String)>) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, &value);
    }
    serializer.finish()
}

/// Filters accepted by `/articles/list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ArticleListParams {
    /// Page, 1-based.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
    /// Author id.
    pub author: Option<String>,
    /// Earliest publication date.
    pub date_from: Option<String>,
    /// Latest publication date.
    pub date_to: Option<String>,
    /// Full-text search term.
    pub search: Option<String>,
    /// Sort field, `-` prefixed for descending.
    pub sort: Option<String>,
}

impl ArticleListParams {
    /// Form-encoded query for the set fields; empty when nothing is set.
    pub fn query_string(&self) -> String {
        let text = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());
        let pairs = [
            ("page", self.page.filter(|p| *p > 0).map(|p| p.to_string())),
            ("limit", self.limit.filter(|l| *l > 0).map(|l| l.to_string())),
            ("author", text(&self.author)),
            ("dateFrom", text(&self.date_from)),
            ("dateTo", text(&self.date_to)),
            ("search", text(&self.search)),
            ("sort", text(&self.sort)),
        ];
        encode_pairs(
            pairs
                .into_iter()
                .filter_map(|(key, value)| value.map(|v| (key, v))),
        )
    }
}

/// Filters accepted by `/categories/list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CategoryListParams {
    /// Page, 1-based.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
    /// Embed each category's articles.
    pub include_articles: Option<bool>,
}

impl CategoryListParams {
    /// Form-encoded query for the set fields.
    pub fn query_string(&self) -> String {
        let pairs = [
            ("page", self.page.filter(|p| *p > 0).map(|p| p.to_string())),
            ("limit", self.limit.filter(|l| *l > 0).map(|l| l.to_string())),
            ("includeArticles", self.include_articles.map(|flag| flag.to_string())),
        ];
        encode_pairs(
            pairs
                .into_iter()
                .filter_map(|(key, value)| value.map(|v| (key, v))),
        )
    }
}

/// Query for the article page embedded in a category detail response.
pub fn category_detail_query(articles_page: u32, articles_limit: u32) -> String {
    encode_pairs([
        ("articlesPage", articles_page.to_string()),
        ("articlesLimit", articles_limit.to_string()),
    ])
}

/// Append `query` to `path` when it is non-empty.
pub fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn backend_article(extra: serde_json::Value) -> BackendArticle {
        let mut base = json!({
            "id": 42,
            "title": "Migrating to Attio",
            "createdAt": "2024-01-05T10:00:00.000Z",
            "updatedAt": "2024-01-06T10:00:00.000Z",
            "content": { "root": { "type": "root", "children": [] } }
        });
        if let (Some(base), Some(extra)) = (base.as_object_mut(), extra.as_object()) {
            for (key, value) in extra {
                base.insert(key.clone(), value.clone());
            }
        }
        serde_json::from_value(base).expect("article fixture should decode")
    }

    fn media(url: &str) -> serde_json::Value {
        json!({ "id": "m1", "url": url, "filename": "cover.png", "alt": "Cover" })
    }

    #[test]
    fn numeric_ids_become_strings() {
        let article = backend_article(json!({}));
        assert_eq!(article.id, "42");
    }

    #[test]
    fn cover_image_wins_over_featured_image() {
        let article = Article::from(backend_article(json!({
            "coverImage": media("/media/cover.png"),
            "featuredImage": media("/media/featured.png"),
        })));
        assert_eq!(
            article.featured_media().map(|m| m.url.as_str()),
            Some("/media/cover.png")
        );
    }

    #[test]
    fn featured_image_used_when_no_cover() {
        let article = Article::from(backend_article(json!({
            "featuredImage": media("/media/featured.png"),
        })));
        assert_eq!(
            article.featured_media().map(|m| m.url.as_str()),
            Some("/media/featured.png")
        );
    }

    #[test]
    fn unpopulated_image_is_kept_as_id() {
        let article = Article::from(backend_article(json!({ "coverImage": "abc123" })));
        assert_eq!(article.featured_image, Some(Relation::Id("abc123".to_string())));
        assert!(article.featured_media().is_none());
    }

    #[test]
    fn list_item_slug_falls_back_to_id() {
        let item = ArticleListItem::from(backend_article(json!({})));
        assert_eq!(item.slug, "article-42");

        let item = ArticleListItem::from(backend_article(json!({ "slug": "attio-setup" })));
        assert_eq!(item.slug, "attio-setup");
    }

    #[test]
    fn list_item_flattens_author_and_dates() {
        let item = ArticleListItem::from(backend_article(json!({
            "author": { "id": 7, "name": "Dana", "email": "dana@example.com" },
            "publishedAt": "2024-02-01T00:00:00Z",
        })));
        assert_eq!(item.author.as_deref(), Some("Dana"));
        assert_eq!(item.published_date.as_deref(), Some("2024-02-01T00:00:00Z"));

        let item = ArticleListItem::from(backend_article(json!({
            "author": "Guest Writer",
            "publishedDate": "2024-03-01",
            "publishedAt": "2024-02-01T00:00:00Z",
        })));
        assert_eq!(item.author.as_deref(), Some("Guest Writer"));
        assert_eq!(item.published_date.as_deref(), Some("2024-03-01"));
    }

    #[test]
    fn list_item_drops_unpopulated_images() {
        let item = ArticleListItem::from(backend_article(json!({
            "coverImage": "id-only",
            "featuredImage": media("/media/featured.png"),
        })));
        assert_eq!(
            item.featured_image.map(|m| m.url),
            Some("/media/featured.png".to_string())
        );
    }

    #[test]
    fn user_without_name_shows_email() {
        let user: User =
            serde_json::from_value(json!({ "id": "u1", "email": "ops@example.com" })).unwrap();
        assert_eq!(user.display_name(), "ops@example.com");
    }

    #[test]
    fn sized_url_falls_back_to_original() {
        let media: Media = serde_json::from_value(json!({
            "id": 1,
            "url": "/media/full.png",
            "filename": "full.png",
            "sizes": { "card": { "url": "/media/card.png", "width": 640, "height": 480 } }
        }))
        .unwrap();
        assert_eq!(media.sized_url(MediaSize::Card), "/media/card.png");
        assert_eq!(media.sized_url(MediaSize::Tablet), "/media/full.png");
    }

    #[test]
    fn category_list_envelope_normalizes() {
        let envelope: PagedEnvelope<BackendCategory> = serde_json::from_value(json!({
            "success": true,
            "data": [
                {
                    "id": 1,
                    "name": "Attio",
                    "slug": "attio",
                    "description": "",
                    "coverImage": "media-id",
                    "articleCount": 4
                },
                { "id": "2", "name": "HubSpot", "slug": "hubspot" }
            ],
            "pagination": {
                "page": 1, "limit": 12, "totalPages": 1, "totalDocs": 2,
                "hasNextPage": false, "hasPrevPage": false,
                "nextPage": null, "prevPage": null
            }
        }))
        .unwrap();
        let response = CategoryListResponse::from(envelope);
        assert!(response.success);
        assert_eq!(response.data.len(), 2);
        assert_eq!(response.data[0].article_count, 4);
        assert_eq!(response.data[0].description, None);
        assert!(response.data[0].cover_image.is_none());
        assert_eq!(response.data[1].article_count, 0);
        assert_eq!(response.pagination.total_docs, 2);
    }

    #[test]
    fn category_detail_envelope_normalizes_articles() {
        let envelope: CategoryDetailEnvelope = serde_json::from_value(json!({
            "success": true,
            "category": { "id": 3, "name": "Attio", "slug": "attio" },
            "articles": [
                { "id": 10, "title": "One", "createdAt": "", "updatedAt": "" }
            ],
            "pagination": { "page": 1, "limit": 10, "totalPages": 1, "totalDocs": 1 }
        }))
        .unwrap();
        let response = CategoryDetailResponse::from(envelope);
        assert_eq!(response.category.name, "Attio");
        assert_eq!(response.articles[0].slug, "article-10");
        assert!(!response.pagination.has_next_page);
    }

    #[test]
    fn article_params_only_encode_set_fields() {
        assert_eq!(ArticleListParams::default().query_string(), "");

        let params = ArticleListParams {
            page: Some(2),
            limit: Some(10),
            search: Some("data migration".to_string()),
            date_from: Some("2024-01-01".to_string()),
            ..Default::default()
        };
        assert_eq!(
            params.query_string(),
            "page=2&limit=10&dateFrom=2024-01-01&search=data+migration"
        );
    }

    #[test]
    fn category_params_encode_include_articles() {
        let params = CategoryListParams {
            page: Some(1),
            limit: Some(12),
            include_articles: Some(true),
        };
        assert_eq!(params.query_string(), "page=1&limit=12&includeArticles=true");
        assert_eq!(category_detail_query(1, 20), "articlesPage=1&articlesLimit=20");
        assert_eq!(with_query("/categories/list", ""), "/categories/list");
    }

    #[test]
    fn pagination_for_page_clamps_and_links() {
        let meta = PaginationMeta::for_page(9, 12, 30);
        assert_eq!(meta.page, 3);
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_prev_page);
        assert!(!meta.has_next_page);
        assert_eq!(meta.prev_page, Some(2));
        assert_eq!(meta.next_page, None);
    }

    #[test]
    fn null_renditions_fall_back_to_original() {
        let envelope: PagedEnvelope<BackendCategory> = serde_json::from_value(json!({
            "success": true,
            "data": [{
                "id": 1,
                "name": "Attio",
                "slug": "attio",
                "coverImage": {
                    "id": "m1",
                    "url": "/media/attio.png",
                    "filename": "attio.png",
                    "sizes": {
                        "thumbnail": { "url": "/media/attio-thumb.png", "width": 300, "height": 300 },
                        "tablet": { "url": null, "width": null, "height": null, "filename": null }
                    }
                }
            }],
            "pagination": { "page": 1, "limit": 12, "totalPages": 1, "totalDocs": 1 }
        }))
        .unwrap();
        let response = CategoryListResponse::from(envelope);
        let cover = response.data[0].cover_image.as_ref().expect("cover should be populated");
        assert_eq!(cover.sized_url(MediaSize::Tablet), "/media/attio.png");
        assert_eq!(cover.sized_url(MediaSize::Thumbnail), "/media/attio-thumb.png");
    }

    #[test]
    fn undecodable_relation_does_not_fail_the_parent() {
        let category: BackendCategory = serde_json::from_value(json!({
            "id": 1,
            "name": "Attio",
            "coverImage": { "id": "m1", "url": null }
        }))
        .unwrap();
        assert!(matches!(category.cover_image, Some(Relation::Other(_))));
        assert!(Category::from(category).cover_image.is_none());
    }

    #[test]
    fn article_tolerates_nulls_ids_and_new_statuses() {
        let article: BackendArticle = serde_json::from_value(json!({
            "id": 1,
            "title": "t",
            "createdAt": null,
            "updatedAt": "",
            "tags": null,
            "content": null,
            "categories": [3, { "id": 4, "name": "Attio" }],
            "status": "scheduled",
            "author": 12,
            "seo": "broken"
        }))
        .unwrap();
        assert!(article.content.is_empty());
        assert!(article.tags.is_empty());
        assert_eq!(article.status, Some(PublishStatus::Other));
        assert!(article.seo.is_none());
        assert!(article.author.is_none());

        let article = Article::from(article);
        assert_eq!(article.created_at, "");
        assert_eq!(
            article.categories,
            vec![Taxon { id: "4".into(), name: "Attio".into() }]
        );
    }

    #[test]
    fn envelope_without_pagination_is_a_single_page() {
        let envelope: PagedEnvelope<BackendArticle> = serde_json::from_value(json!({
            "success": true,
            "data": [{ "id": 1, "title": "One" }, { "id": 2, "title": null }],
            "pagination": null
        }))
        .unwrap();
        let response = ArticleListResponse::from(envelope);
        assert_eq!(response.articles.len(), 2);
        assert_eq!(response.pagination.page, 1);
        assert!(!response.pagination.has_next_page);

        let meta: PaginationMeta = serde_json::from_value(json!({ "page": null, "limit": 10 })).unwrap();
        assert_eq!(meta.page, 1);
    }
}
