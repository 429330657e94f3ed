use guides_shared::PageMeta;
use yew::prelude::*;

use crate::{
    components::{
        article_content::ArticleContent,
        article_header::ArticleHeader,
        breadcrumb::{Breadcrumb, BreadcrumbItem},
        error_message::ErrorMessage,
        footer::DarkFooter,
        loading_skeleton::LoadingSkeleton,
    },
    config,
    hooks::{use_article, use_page_meta, use_scroll_to_top},
    i18n::current::{article as t, breadcrumb, common, home},
    router::Route,
};

#[derive(Properties, Clone, PartialEq)]
pub struct ArticlePageProps {
    pub slug: String,
}

#[function_component(ArticlePage)]
pub fn article_page(props: &ArticlePageProps) -> Html {
    use_scroll_to_top();
    let article = use_article(props.slug.clone());

    let meta = match (article.data.as_ref(), article.error.as_ref()) {
        (Some(data), _) => PageMeta::for_article(data, config::MEDIA_BASE),
        (None, Some(err)) if err.is_not_found() => {
            PageMeta::new(t::NOT_FOUND_TITLE, t::NOT_FOUND_MESSAGE)
        },
        (None, Some(_)) => PageMeta::new(t::LOAD_FAILED, t::LOAD_FAILED_FALLBACK),
        (None, None) => PageMeta::new(common::SITE_NAME, home::META_DESCRIPTION),
    };
    use_page_meta(meta);

    if article.is_loading {
        return html! { <LoadingSkeleton /> };
    }

    let Some(data) = article.data.clone() else {
        return match article.error.as_ref() {
            Some(err) if !err.is_not_found() => {
                let on_retry = article.refetch.clone();
                html! {
                    <ErrorMessage
                        title={t::LOAD_FAILED}
                        message={err.to_string()}
                        on_retry={on_retry}
                    />
                }
            },
            _ => html! {
                <ErrorMessage title={t::NOT_FOUND_TITLE} message={t::NOT_FOUND_MESSAGE} />
            },
        };
    };

    let crumbs = vec![
        BreadcrumbItem::link(breadcrumb::ARTICLES, Route::Articles),
        BreadcrumbItem::current(data.title.clone()),
    ];

    html! {
        <>
            <Breadcrumb items={crumbs} />
            <div class="bg-gray-50 min-h-screen">
                <ArticleHeader article={data.clone()} />
                <ArticleContent content={data.content.clone()} />
            </div>
            <DarkFooter />
        </>
    }
}
