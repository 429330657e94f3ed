use guides_shared::content::OutlineEntry;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    i18n::current::article as t,
};

/// Headings closer than this to the viewport top count as "being read".
const ACTIVE_OFFSET_PX: f64 = 100.0;

#[derive(Properties, PartialEq)]
pub struct ContentNavigationProps {
    pub entries: Vec<OutlineEntry>,
    /// Sidebar list on wide screens, floating toggle panel otherwise.
    #[prop_or_default]
    pub in_sidebar: bool,
}

/// Last heading whose top edge has scrolled past the active offset.
fn current_heading(entries: &[OutlineEntry]) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let mut active = None;
    for entry in entries {
        let Some(element) = document.get_element_by_id(&entry.id) else {
            continue;
        };
        if element.get_bounding_client_rect().top() <= ACTIVE_OFFSET_PX {
            active = Some(entry.id.clone());
        } else {
            break;
        }
    }
    active.or_else(|| entries.first().map(|entry| entry.id.clone()))
}

fn scroll_to_heading(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        log::debug!("heading #{id} is not in the document");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// "On this page" outline that follows the reader's scroll position.
#[function_component(ContentNavigation)]
pub fn content_navigation(props: &ContentNavigationProps) -> Html {
    let active_id = use_state_eq(|| None::<String>);
    let is_open = use_state(|| false);

    {
        let active_id = active_id.clone();
        use_effect_with(props.entries.clone(), move |entries| {
            let entries = entries.clone();
            let update = {
                let active_id = active_id.clone();
                move || active_id.set(current_heading(&entries))
            };
            update();

            let closure = Closure::wrap(Box::new(update) as Box<dyn Fn()>);
            let window = web_sys::window();
            if let Some(window) = window.as_ref() {
                if let Err(err) = window
                    .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
                {
                    log::warn!("failed to watch scroll position: {err:?}");
                }
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        closure.as_ref().unchecked_ref(),
                    );
                }
                drop(closure);
            }
        });
    }

    if props.entries.is_empty() {
        return Html::default();
    }

    let on_select = {
        let is_open = is_open.clone();
        Callback::from(move |id: String| {
            scroll_to_heading(&id);
            is_open.set(false);
        })
    };

    let entry_button = |entry: &OutlineEntry, sidebar: bool| {
        let is_active = active_id.as_deref() == Some(entry.id.as_str());
        let indent = f32::from(entry.level.saturating_sub(1));
        let (class, padding) = if sidebar {
            let state = if is_active {
                "text-gray-900 font-semibold"
            } else {
                "text-gray-600 hover:text-gray-900"
            };
            (
                classes!("w-full", "text-left", "py-1.5", "text-sm", "transition-colors", state),
                format!("padding-left: {}rem;", indent * 0.75),
            )
        } else {
            let state = if is_active {
                "text-blue-600 font-medium bg-blue-50/50"
            } else {
                "text-gray-600 hover:text-gray-900 hover:bg-gray-50"
            };
            (
                classes!("w-full", "text-left", "py-2", "pr-3", "text-sm", "rounded-lg", "transition-all", state),
                format!("padding-left: {}rem;", 0.625 + indent * 0.5),
            )
        };
        let onclick = {
            let on_select = on_select.clone();
            let id = entry.id.clone();
            Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
        };

        html! {
            <button
                key={entry.id.clone()}
                type="button"
                class={class}
                style={padding}
                aria-current={is_active.then_some("location")}
                onclick={onclick}
            >
                <span class="line-clamp-2">{ &entry.text }</span>
            </button>
        }
    };

    if props.in_sidebar {
        return html! {
            <nav class="space-y-1">
                { for props.entries.iter().map(|entry| entry_button(entry, true)) }
            </nav>
        };
    }

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };
    let close = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(false))
    };
    let panel_state = if *is_open {
        "translate-x-0 opacity-100"
    } else {
        "translate-x-[120%] opacity-0 pointer-events-none"
    };

    html! {
        <>
            <button
                type="button"
                onclick={toggle}
                class="lg:hidden fixed bottom-6 right-6 z-50 w-14 h-14 bg-gray-900 text-white rounded-full shadow-lg flex items-center justify-center hover:bg-gray-800 transition-colors"
                aria-label={t::TOGGLE_NAV_ARIA}
                aria-expanded={is_open.to_string()}
            >
                if *is_open {
                    <Icon name={IconName::X} size={22} />
                } else {
                    <Icon name={IconName::List} size={22} />
                }
            </button>

            if *is_open {
                <div class="lg:hidden fixed inset-0 bg-black/20 z-40" onclick={close} aria-hidden="true" />
            }

            <div class={classes!(
                "lg:hidden",
                "fixed",
                "top-24",
                "right-6",
                "w-72",
                "max-h-[70vh]",
                "overflow-y-auto",
                "bg-white",
                "rounded-2xl",
                "shadow-xl",
                "border",
                "border-gray-200",
                "z-50",
                "p-4",
                "transition-all",
                "duration-300",
                panel_state
            )}>
                <h3 class="text-sm font-semibold text-gray-900 mb-3 uppercase tracking-wide">
                    { t::ON_THIS_PAGE }
                </h3>
                <nav class="space-y-0.5">
                    { for props.entries.iter().map(|entry| entry_button(entry, false)) }
                </nav>
            </div>
        </>
    }
}
