use guides_shared::{content::TextNode, styles::text_style};
use yew::prelude::*;

/// Text run with its format wrappers, innermost first, and an optional
/// style span for editor colors and sizes on the outside.
pub(super) fn text_node(node: &TextNode) -> Html {
    let mut element = html! { { node.text.clone() } };
    for wrapper in node.format().wrappers() {
        element = html! {
            <@{wrapper.tag()} class={wrapper.class()}>{ element }</@>
        };
    }

    match node.state.as_ref().and_then(text_style) {
        Some(style) => html! { <span style={style}>{ element }</span> },
        None => element,
    }
}
