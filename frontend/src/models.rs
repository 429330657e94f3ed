//! Static guide entries, plus in-memory fixtures served by the API layer
//! when the `mock` feature is on.

use guides_shared::filter::Guide;
#[cfg(feature = "mock")]
use guides_shared::{
    filter::matches_query,
    model::{
        ArticleListParams, BackendArticle, BackendCategory, CategoryListParams, PaginationMeta,
    },
    Article, ArticleListItem, ArticleListResponse, Category, CategoryDetailResponse,
    CategoryListResponse,
};
#[cfg(feature = "mock")]
use serde_json::{json, Value};

/// Guides listed on the Attio landing page.
pub const GUIDES: [Guide; 5] = [
    Guide {
        id: "1",
        title: "The Ultimate Guide to Attio CRM",
        description: "From Setup to Full AI Automation. Small description that goes in max two \
                      lines.",
        slug: "ultimate-guide-attio-crm",
        icon_color: "bg-gradient-to-br from-blue-100 to-blue-200",
    },
    Guide {
        id: "2",
        title: "How to Migrate Data to Attio CRM",
        description: "Step-by-step guide for seamless data migration from any platform to Attio.",
        slug: "migrate-data-attio-crm",
        icon_color: "bg-gradient-to-br from-purple-100 to-purple-200",
    },
    Guide {
        id: "3",
        title: "Attio CRM Integration Best Practices",
        description: "Learn the best practices for integrating Attio with your existing tools \
                      and workflows.",
        slug: "attio-integration-best-practices",
        icon_color: "bg-gradient-to-br from-green-100 to-green-200",
    },
    Guide {
        id: "4",
        title: "Advanced Automation in Attio CRM",
        description: "Unlock the full potential of Attio with advanced automation techniques \
                      and workflows.",
        slug: "advanced-automation-attio",
        icon_color: "bg-gradient-to-br from-pink-100 to-pink-200",
    },
    Guide {
        id: "5",
        title: "Attio CRM Reporting and Analytics",
        description: "Master reporting and analytics to gain actionable insights from your CRM \
                      data.",
        slug: "attio-reporting-analytics",
        icon_color: "bg-gradient-to-br from-yellow-100 to-yellow-200",
    },
];

// =============== Mock data ===============

#[cfg(feature = "mock")]
const MOCK_CATEGORIES: [(&str, &str, &str); 4] = [
    ("Attio CRM", "attio", "Setting up, migrating to and automating Attio."),
    ("HubSpot", "hubspot", "Moving contacts, deals and tickets in and out of HubSpot."),
    ("Zendesk", "zendesk", "Helpdesk migrations for Zendesk Support and Guide."),
    ("Greenhouse", "greenhouse", ""),
];

#[cfg(feature = "mock")]
const MOCK_TOPICS: [&str; 5] = [
    "Data Migration Checklist",
    "Field Mapping",
    "Automation Recipes",
    "Reporting Basics",
    "Cutover Weekend",
];

#[cfg(feature = "mock")]
fn text(value: &str, format: u32) -> Value {
    json!({ "type": "text", "text": value, "format": format, "version": 1 })
}

#[cfg(feature = "mock")]
fn paragraph(children: Vec<Value>) -> Value {
    json!({ "type": "paragraph", "children": children, "indent": 0 })
}

#[cfg(feature = "mock")]
fn heading(tag: &str, value: &str) -> Value {
    json!({ "type": "heading", "tag": tag, "children": [text(value, 0)] })
}

#[cfg(feature = "mock")]
fn sample_content(topic: &str, platform: &str) -> Value {
    json!({
        "root": {
            "type": "root",
            "direction": "ltr",
            "indent": 0,
            "children": [
                paragraph(vec![
                    text(&format!("This guide walks through {} for ", topic.to_lowercase()), 0),
                    text(platform, 1),
                    text(", from the first export to the final checks.", 0),
                ]),
                heading("h2", "Before you start"),
                paragraph(vec![
                    text("Take a full export and keep it somewhere ", 0),
                    json!({
                        "type": "text",
                        "text": "read-only",
                        "format": 2,
                        "state": { "color": "text-blue", "background": "bg-yellow" }
                    }),
                    text(". Run ", 0),
                    text("attio export --all", 16),
                    text(" if you use the CLI.", 0),
                ]),
                {
                    "type": "list",
                    "listType": "bullet",
                    "tag": "ul",
                    "children": [
                        { "type": "listitem", "value": 1, "children": [text("Owners and teams", 0)] },
                        { "type": "listitem", "value": 2, "children": [text("Custom fields", 0)] },
                        { "type": "listitem", "value": 3, "children": [text("Attachments", 0)] }
                    ]
                },
                {
                    "type": "block",
                    "fields": {
                        "blockType": "callout",
                        "type": "warning",
                        "title": "Freeze edits",
                        "content": "Pause automations on the source system during cutover."
                    }
                },
                heading("h2", "Mapping fields"),
                heading("h3", "Standard objects"),
                {
                    "type": "block",
                    "fields": {
                        "blockType": "table",
                        "headers": ["Source", "Target", "Notes"],
                        "rows": [
                            ["Company", "Company", "Matched on domain"],
                            ["Contact", "Person", "Emails deduplicated"],
                            { "id": "deal", "cells": [
                                { "id": "a", "content": "Deal" },
                                { "id": "b", "content": "Deal" },
                                { "id": "c", "content": "Stages mapped by name" }
                            ] }
                        ],
                        "bordered": true,
                        "striped": true
                    }
                },
                heading("h3", "Custom fields"),
                paragraph(vec![
                    text("Keep the ", 0),
                    json!({
                        "type": "link",
                        "url": "https://attio.com/help",
                        "target": "_blank",
                        "children": [text("attribute reference", 0)]
                    }),
                    text(" open while mapping.", 0),
                ]),
                {
                    "type": "quote",
                    "children": [text("Migrate the data you need, archive the rest.", 0)]
                },
                {
                    "type": "block",
                    "fields": {
                        "blockType": "accordion",
                        "items": [
                            { "title": "How long does it take?", "content": "Most moves finish in a weekend." },
                            { "title": "Is there downtime?", "content": "No, the source stays live until cutover." }
                        ]
                    }
                },
                {
                    "type": "code",
                    "language": "bash",
                    "children": [
                        text("attio import --file companies.csv", 0),
                        { "type": "linebreak" },
                        text("attio import --file people.csv", 0)
                    ]
                },
                heading("h2", "After the move"),
                {
                    "type": "block",
                    "fields": {
                        "blockType": "quote",
                        "quote": "The cutover took one evening and nobody lost a note.",
                        "author": "Dana Reyes",
                        "authorTitle": "RevOps Lead"
                    }
                },
                {
                    "type": "block",
                    "fields": {
                        "blockType": "video",
                        "url": "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
                        "caption": "Walkthrough"
                    }
                },
                { "type": "horizontalrule" },
                paragraph(vec![])
            ]
        }
    })
}

#[cfg(feature = "mock")]
fn mock_backend_articles() -> Vec<(usize, BackendArticle)> {
    let mut items = Vec::new();
    for i in 1..=14usize {
        let category = i % MOCK_CATEGORIES.len();
        let (platform, _, _) = MOCK_CATEGORIES[category];
        let topic = MOCK_TOPICS[i % MOCK_TOPICS.len()];
        let title = format!("{platform} {topic}");
        // Every fifth article has no slug and is reached by `article-{id}`.
        let slug = (i % 5 != 0).then(|| format!("{}-{}", slug_of(&title), i));
        let author = if i % 2 == 0 {
            json!({ "id": 7, "name": "Dana Reyes", "email": "dana@clonepartner.com" })
        } else {
            json!("ClonePartner Team")
        };
        let cover = if i % 3 == 0 {
            json!({ "id": i, "url": "/assets/attio-logo.svg", "filename": "attio-logo.svg", "alt": title })
        } else {
            Value::Null
        };
        let value = json!({
            "id": i,
            "title": title,
            "slug": slug,
            "excerpt": format!("A practical walkthrough of {} for {}.", topic.to_lowercase(), platform),
            "content": sample_content(topic, platform),
            "publishedAt": format!("2024-{:02}-{:02}T09:00:00.000Z", i % 12 + 1, i + 3),
            "createdAt": format!("2024-{:02}-01T09:00:00.000Z", i % 12 + 1),
            "updatedAt": format!("2024-{:02}-02T09:00:00.000Z", i % 12 + 1),
            "author": author,
            "coverImage": cover,
            "categories": [{ "id": category + 1, "name": platform }],
            "status": "published"
        });
        match serde_json::from_value::<BackendArticle>(value) {
            Ok(article) => items.push((category, article)),
            Err(err) => log::warn!("mock article {i} does not decode: {err}"),
        }
    }
    items
}

#[cfg(feature = "mock")]
fn slug_of(title: &str) -> String {
    title
        .to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(feature = "mock")]
fn page_of<T: Clone>(items: &[T], page: u32, limit: u32) -> (Vec<T>, PaginationMeta) {
    let total = u32::try_from(items.len()).unwrap_or(u32::MAX);
    let meta = PaginationMeta::for_page(page, limit, total);
    let start = ((meta.page - 1) * meta.limit) as usize;
    let slice = items
        .iter()
        .skip(start)
        .take(meta.limit as usize)
        .cloned()
        .collect();
    (slice, meta)
}

#[cfg(feature = "mock")]
pub fn mock_article_by_id(id: &str) -> Option<Article> {
    mock_backend_articles()
        .into_iter()
        .map(|(_, article)| article)
        .find(|article| article.id == id)
        .map(Article::from)
}

#[cfg(feature = "mock")]
pub fn mock_article_by_slug(slug: &str) -> Option<Article> {
    mock_backend_articles()
        .into_iter()
        .map(|(_, article)| article)
        .find(|article| article.slug.as_deref() == Some(slug))
        .map(Article::from)
}

#[cfg(feature = "mock")]
pub fn mock_article_list(params: &ArticleListParams) -> ArticleListResponse {
    let query = params.search.as_deref().unwrap_or_default();
    let items: Vec<ArticleListItem> = mock_backend_articles()
        .into_iter()
        .map(|(_, article)| ArticleListItem::from(article))
        .filter(|item| {
            matches_query(query, [item.title.as_str(), item.excerpt.as_deref().unwrap_or("")])
        })
        .collect();
    let (articles, pagination) =
        page_of(&items, params.page.unwrap_or(1), params.limit.unwrap_or(10));
    ArticleListResponse {
        success: true,
        articles,
        pagination,
    }
}

#[cfg(feature = "mock")]
fn mock_categories() -> Vec<Category> {
    let articles = mock_backend_articles();
    MOCK_CATEGORIES
        .iter()
        .enumerate()
        .map(|(index, (name, slug, description))| {
            let count = articles.iter().filter(|(cat, _)| *cat == index).count();
            Category::from(BackendCategory {
                id: (index + 1).to_string(),
                name: name.to_string(),
                slug: slug.to_string(),
                description: Some(description.to_string()),
                cover_image: None,
                article_count: u32::try_from(count).ok(),
                articles: None,
                created_at: None,
                updated_at: None,
            })
        })
        .collect()
}

#[cfg(feature = "mock")]
pub fn mock_category_list(params: &CategoryListParams) -> CategoryListResponse {
    let (data, pagination) = page_of(
        &mock_categories(),
        params.page.unwrap_or(1),
        params.limit.unwrap_or(12),
    );
    CategoryListResponse {
        success: true,
        data,
        pagination,
    }
}

#[cfg(feature = "mock")]
pub fn mock_category_by_slug(
    slug: &str,
    articles_page: u32,
    articles_limit: u32,
) -> Option<CategoryDetailResponse> {
    let index = MOCK_CATEGORIES.iter().position(|(_, s, _)| *s == slug)?;
    let category = mock_categories().into_iter().nth(index)?;
    let items: Vec<ArticleListItem> = mock_backend_articles()
        .into_iter()
        .filter(|(cat, _)| *cat == index)
        .map(|(_, article)| ArticleListItem::from(article))
        .collect();
    let (articles, pagination) = page_of(&items, articles_page, articles_limit);
    Some(CategoryDetailResponse {
        success: true,
        category,
        articles,
        pagination,
    })
}
