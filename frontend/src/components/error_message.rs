use yew::prelude::*;

use crate::i18n::current::error_message as t;

const ALERT_CIRCLE: &str = "M12 22c5.523 0 10-4.477 10-10S17.523 2 12 2 2 6.477 2 12s4.477 10 10 \
                            10zM12 8v4M12 16h.01";

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    #[prop_or_else(|| AttrValue::from(t::DEFAULT_TITLE))]
    pub title: AttrValue,
    pub message: AttrValue,
    /// Shows a retry button when set.
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Red alert box for failed loads and missing documents.
#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    let retry = props.on_retry.clone().map(|on_retry| {
        let onclick = Callback::from(move |_: MouseEvent| on_retry.emit(()));
        html! {
            <button
                type="button"
                class="mt-4 px-4 py-2 bg-red-600 text-white rounded-md hover:bg-red-700 focus:outline-none focus:ring-2 focus:ring-red-500 focus:ring-offset-2 transition-colors"
                aria-label={t::RETRY_ARIA}
                onclick={onclick}
            >
                { t::RETRY }
            </button>
        }
    });

    html! {
        <div
            class="max-w-4xl mx-auto px-4 py-16 sm:px-6 lg:px-8"
            role="alert"
            aria-live="assertive"
        >
            <div class="bg-red-50 border border-red-200 rounded-lg p-6">
                <div class="flex items-start">
                    <svg
                        class="h-6 w-6 text-red-600 flex-shrink-0 mt-0.5"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        aria-hidden="true"
                    >
                        <path d={ALERT_CIRCLE} />
                    </svg>
                    <div class="ml-4 flex-1">
                        <h3 class="text-lg font-semibold text-red-900">{ props.title.clone() }</h3>
                        <p class="mt-2 text-sm text-red-700">{ props.message.clone() }</p>
                        { retry.unwrap_or_default() }
                    </div>
                </div>
            </div>
        </div>
    }
}
