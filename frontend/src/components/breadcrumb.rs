use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    i18n::current::breadcrumb as t,
    router::Route,
};

#[derive(Clone, PartialEq)]
pub struct BreadcrumbItem {
    pub label: AttrValue,
    pub route: Option<Route>,
}

impl BreadcrumbItem {
    pub fn link(label: impl Into<AttrValue>, route: Route) -> Self {
        Self {
            label: label.into(),
            route: Some(route),
        }
    }

    pub fn current(label: impl Into<AttrValue>) -> Self {
        Self {
            label: label.into(),
            route: None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Default)]
pub enum BreadcrumbVariant {
    #[default]
    Minimal,
    Bar,
}

#[derive(Properties, PartialEq)]
pub struct BreadcrumbProps {
    pub items: Vec<BreadcrumbItem>,
    #[prop_or_default]
    pub variant: BreadcrumbVariant,
}

#[function_component(Breadcrumb)]
pub fn breadcrumb(props: &BreadcrumbProps) -> Html {
    if props.items.is_empty() {
        return Html::default();
    }

    let minimal = props.variant == BreadcrumbVariant::Minimal;
    let last = props.items.len() - 1;

    html! {
        <nav
            aria-label={t::ARIA_NAV}
            class={if minimal {
                "border-b border-gray-200/80 bg-transparent"
            } else {
                "bg-white border-b border-gray-200"
            }}
        >
            <div class="mx-auto max-w-7xl px-6 lg:px-8">
                <ol
                    role="list"
                    class={if minimal {
                        "flex items-center gap-1 sm:gap-2 py-3 text-xs sm:text-sm text-gray-500"
                    } else {
                        "flex items-center gap-2 py-3 text-sm"
                    }}
                >
                    { for props.items.iter().enumerate().map(|(index, item)| {
                        let label = match (&item.route, index == last) {
                            (_, true) => html! {
                                <span class="text-gray-500" aria-current="page">{ item.label.clone() }</span>
                            },
                            (Some(route), false) => html! {
                                <Link<Route>
                                    to={route.clone()}
                                    classes="text-gray-500 hover:text-gray-700 transition-colors"
                                >
                                    { item.label.clone() }
                                </Link<Route>>
                            },
                            (None, false) => html! {
                                <span class="text-gray-500">{ item.label.clone() }</span>
                            },
                        };
                        html! {
                            <li key={index} class="flex items-center gap-1 sm:gap-2">
                                if index > 0 {
                                    <Icon name={IconName::ChevronRight} size={16} class="text-gray-300" />
                                }
                                { label }
                            </li>
                        }
                    }) }
                </ol>
            </div>
        </nav>
    }
}
