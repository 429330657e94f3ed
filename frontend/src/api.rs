//! Content API client. Every call reshapes the backend payload through
//! `guides_shared::model` before handing it to the pages.

#[cfg(not(feature = "mock"))]
use gloo_net::http::Request;
#[cfg(not(feature = "mock"))]
use guides_shared::model::{
    category_detail_query, with_query, BackendArticle, BackendCategory, CategoryDetailEnvelope,
    DataEnvelope, PagedEnvelope,
};
use guides_shared::{
    model::{ArticleListParams, CategoryListParams},
    ApiError, Article, ArticleListResponse, CategoryDetailResponse, CategoryListResponse,
};
#[cfg(not(feature = "mock"))]
use serde::de::DeserializeOwned;

#[cfg(not(feature = "mock"))]
use crate::config::API_BASE;
#[cfg(feature = "mock")]
use crate::models;

/// GET `{API_BASE}{endpoint}` and decode the JSON body.
#[cfg(not(feature = "mock"))]
pub async fn fetch_api<T: DeserializeOwned>(endpoint: &str) -> Result<T, ApiError> {
    let url = format!("{}{}", API_BASE.trim_end_matches('/'), endpoint);
    log::debug!("GET {url}");

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::http(response.status(), response.status_text()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(not(feature = "mock"))]
fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Article by document id.
pub async fn get_article(id: &str) -> Result<Article, ApiError> {
    #[cfg(feature = "mock")]
    {
        return models::mock_article_by_id(id).ok_or_else(|| ApiError::http(404, "Not Found"));
    }

    #[cfg(not(feature = "mock"))]
    {
        let envelope: DataEnvelope<BackendArticle> =
            fetch_api(&format!("/articles/{}", segment(id))).await?;
        Ok(Article::from(envelope.data))
    }
}

pub async fn get_article_by_slug(slug: &str) -> Result<Article, ApiError> {
    #[cfg(feature = "mock")]
    {
        return models::mock_article_by_slug(slug).ok_or_else(|| ApiError::http(404, "Not Found"));
    }

    #[cfg(not(feature = "mock"))]
    {
        let envelope: DataEnvelope<BackendArticle> =
            fetch_api(&format!("/articles/slug/{}", segment(slug))).await?;
        Ok(Article::from(envelope.data))
    }
}

/// Article behind an `/articles/:slug` URL. Listings hand out
/// `article-{id}` for documents without a slug, so a missing slug of that
/// shape is retried as a document id.
pub async fn resolve_article(slug: &str) -> Result<Article, ApiError> {
    match get_article_by_slug(slug).await {
        Err(err) if err.is_not_found() => match slug.strip_prefix("article-") {
            Some(id) if !id.is_empty() => {
                log::debug!("slug {slug} not found, trying document id {id}");
                get_article(id).await
            },
            _ => Err(err),
        },
        other => other,
    }
}

pub async fn get_article_list(params: &ArticleListParams) -> Result<ArticleListResponse, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_article_list(params));
    }

    #[cfg(not(feature = "mock"))]
    {
        let endpoint = with_query("/articles/list", &params.query_string());
        let envelope: PagedEnvelope<BackendArticle> = fetch_api(&endpoint).await?;
        Ok(ArticleListResponse::from(envelope))
    }
}

pub async fn get_category_list(
    params: &CategoryListParams,
) -> Result<CategoryListResponse, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_category_list(params));
    }

    #[cfg(not(feature = "mock"))]
    {
        let endpoint = with_query("/categories/list", &params.query_string());
        let envelope: PagedEnvelope<BackendCategory> = fetch_api(&endpoint).await?;
        Ok(CategoryListResponse::from(envelope))
    }
}

/// Category with one page of its articles.
pub async fn get_category_by_slug(
    slug: &str,
    articles_page: u32,
    articles_limit: u32,
) -> Result<CategoryDetailResponse, ApiError> {
    #[cfg(feature = "mock")]
    {
        return models::mock_category_by_slug(slug, articles_page, articles_limit)
            .ok_or_else(|| ApiError::http(404, "Not Found"));
    }

    #[cfg(not(feature = "mock"))]
    {
        let endpoint = with_query(
            &format!("/categories/slug/{}", segment(slug)),
            &category_detail_query(articles_page, articles_limit),
        );
        let envelope: CategoryDetailEnvelope = fetch_api(&endpoint).await?;
        Ok(CategoryDetailResponse::from(envelope))
    }
}
