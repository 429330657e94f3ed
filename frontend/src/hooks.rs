use guides_shared::{
    model::{ArticleListParams, CategoryListParams},
    query::{QueryKey, QueryOptions},
    Article, ArticleListResponse, CategoryDetailResponse, CategoryListResponse, PageMeta,
};
use serde::{Deserialize, Serialize};
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::{use_location, Navigator};

use crate::{
    api,
    query::{use_query, QueryHandle},
    router::Route,
    seo,
};

const DETAIL_STALE_MS: u64 = 60_000;
const CATEGORY_LIST_STALE_MS: u64 = 5 * 60_000;
const DATA_RETRY: u32 = 3;

/// Article for an `/articles/:slug` page. Idle while the slug is empty.
#[hook]
pub fn use_article(slug: String) -> QueryHandle<Article> {
    let options = QueryOptions::default()
        .stale_time(DETAIL_STALE_MS)
        .retry(DATA_RETRY)
        .enabled(!slug.trim().is_empty());
    let key = QueryKey::new(["article", slug.as_str()]);

    use_query(key, options, move || {
        let slug = slug.clone();
        async move { api::resolve_article(&slug).await }
    })
}

#[hook]
pub fn use_article_list(params: ArticleListParams) -> QueryHandle<ArticleListResponse> {
    let options = QueryOptions::default()
        .stale_time(DETAIL_STALE_MS)
        .retry(DATA_RETRY);
    let key = QueryKey::new(["articles".to_string(), "list".to_string(), params.query_string()]);

    use_query(key, options, move || {
        let params = params.clone();
        async move { api::get_article_list(&params).await }
    })
}

/// One category and a page of its articles. Idle without a slug.
#[hook]
pub fn use_category_by_slug(
    slug: Option<String>,
    articles_page: u32,
    articles_limit: u32,
) -> QueryHandle<CategoryDetailResponse> {
    let slug = slug.filter(|s| !s.trim().is_empty());
    let options = QueryOptions::default()
        .stale_time(DETAIL_STALE_MS)
        .retry(DATA_RETRY)
        .enabled(slug.is_some());
    let key = QueryKey::new([
        "categories".to_string(),
        "detail".to_string(),
        slug.clone().unwrap_or_default(),
        articles_page.to_string(),
        articles_limit.to_string(),
    ]);

    use_query(key, options, move || {
        let slug = slug.clone().unwrap_or_default();
        async move { api::get_category_by_slug(&slug, articles_page, articles_limit).await }
    })
}

/// Categories change rarely, so they stay fresh longer than articles.
#[hook]
pub fn use_category_list(params: CategoryListParams) -> QueryHandle<CategoryListResponse> {
    let options = QueryOptions::default()
        .stale_time(CATEGORY_LIST_STALE_MS)
        .retry(DATA_RETRY);
    let key = QueryKey::new(["categories".to_string(), "list".to_string(), params.query_string()]);

    use_query(key, options, move || {
        let params = params.clone();
        async move { api::get_category_list(&params).await }
    })
}

/// `?page=&limit=&q=` state of the paginated pages. A query string that
/// does not parse counts as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

impl ListQuery {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn search(&self) -> &str {
        self.q.as_deref().map(str::trim).unwrap_or_default()
    }
}

#[hook]
pub fn use_list_query() -> ListQuery {
    use_location()
        .and_then(|location| location.query::<ListQuery>().ok())
        .unwrap_or_default()
}

/// Navigate to `route` with `query` in the URL.
pub fn push_list_query(navigator: &Navigator, route: &Route, query: &ListQuery) {
    if let Err(err) = navigator.push_with_query(route, query) {
        log::warn!("failed to update page query: {err}");
    }
}

/// Write `meta` into the document head whenever it changes.
#[hook]
pub fn use_page_meta(meta: PageMeta) {
    use_effect_with(meta, |meta| {
        seo::apply(meta);
    });
}

/// Automatically scroll the viewport to the top whenever the current route
/// changes.
///
/// Call this hook inside top-level pages to keep navigation consistent.
#[hook]
pub fn use_scroll_to_top() {
    let location = use_location();
    let path = location.map(|location| location.path().to_string());

    use_effect_with(path, move |path| {
        if path.is_some() {
            scroll_window_to_top();
        }

        || ()
    });
}

pub fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
