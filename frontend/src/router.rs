use yew::{prelude::*, suspense::Suspense};
use yew_router::prelude::*;

use crate::{
    components::{layout::Layout, loading_skeleton::LoadingSkeleton},
    pages,
    query::QueryClientProvider,
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/articles")]
    Articles,

    #[at("/articles/:slug")]
    Article { slug: String },

    #[at("/categories/:slug")]
    Category { slug: String },

    #[at("/guides/attio")]
    AttioGuides,

    /// Guide detail pages are linked from the Attio list but not published
    /// yet, so they render the not-found page.
    #[at("/guides/attio/:slug")]
    AttioGuide { slug: String },

    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::home::HomePage /> },
        Route::Articles => html! { <pages::articles::ArticlesPage /> },
        Route::Article {
            slug,
        } => {
            html! { <pages::article::ArticlePage slug={slug} /> }
        },
        Route::Category {
            slug,
        } => {
            html! { <pages::category::CategoryPage slug={slug} /> }
        },
        Route::AttioGuides => html! { <pages::guides_list::GuidesListPage /> },
        Route::AttioGuide {
            slug,
        } => {
            log::debug!("guide page {slug} is not published");
            html! { <pages::not_found::NotFoundPage /> }
        },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <QueryClientProvider>
                <Layout>
                    <Suspense fallback={html! { <LoadingSkeleton /> }}>
                        <Switch<Route> render={switch} />
                    </Suspense>
                </Layout>
            </QueryClientProvider>
        </BrowserRouter>
    }
}
