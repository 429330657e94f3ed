use guides_shared::content::CodeNode;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;
use yew::prelude::*;

/// Run the page's Prism highlighter over `element`. Prism is loaded from
/// `index.html` and fetches language grammars on demand; without it the
/// block stays plain text.
fn highlight(element: &Element) {
    let Some(prism) = web_sys::window()
        .and_then(|win| js_sys::Reflect::get(&win, &JsValue::from_str("Prism")).ok())
        .filter(|prism| !prism.is_undefined())
    else {
        log::debug!("Prism is not loaded; code stays unhighlighted");
        return;
    };
    let Some(func) = js_sys::Reflect::get(&prism, &JsValue::from_str("highlightElement"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
    else {
        return;
    };
    if let Err(err) = func.call1(&prism, element) {
        log::warn!("code highlighting failed: {err:?}");
    }
}

#[derive(Properties, PartialEq)]
pub struct CodeBlockProps {
    pub code: CodeNode,
}

/// Code block. The text is written into `<code>` outside the virtual DOM
/// because the highlighter replaces its children with token spans.
#[function_component(CodeBlock)]
pub fn code_block(props: &CodeBlockProps) -> Html {
    let code_ref = use_node_ref();
    let language = props.code.language().to_string();
    let grammar = props.code.grammar();

    {
        let code_ref = code_ref.clone();
        use_effect_with((props.code.code(), grammar.clone()), move |(source, _)| {
            if let Some(element) = code_ref.cast::<Element>() {
                element.set_text_content(Some(source));
                highlight(&element);
            }
            || ()
        });
    }

    html! {
        <div class="my-4">
            <pre
                class={format!("language-{grammar} p-4 bg-gray-900 text-white rounded-lg overflow-auto text-sm")}
                data-language={language}
            >
                <code ref={code_ref} class={format!("language-{grammar}")} />
            </pre>
        </div>
    }
}
