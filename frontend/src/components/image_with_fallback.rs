use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ImageWithFallbackProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    /// Shown in place of the image once it fails to load.
    pub fallback: Html,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub loading: Option<AttrValue>,
}

/// `img` that swaps itself for `fallback` when the source cannot be loaded.
#[function_component(ImageWithFallback)]
pub fn image_with_fallback(props: &ImageWithFallbackProps) -> Html {
    let failed = use_state(|| false);

    {
        let failed = failed.clone();
        use_effect_with(props.src.clone(), move |_| {
            failed.set(false);
        });
    }

    let on_image_error = {
        let failed = failed.clone();
        Callback::from(move |_: Event| failed.set(true))
    };

    if *failed {
        return props.fallback.clone();
    }

    html! {
        <img
            src={props.src.clone()}
            alt={props.alt.clone()}
            class={props.class.clone()}
            loading={props.loading.clone().unwrap_or(AttrValue::from("lazy"))}
            onerror={on_image_error}
        />
    }
}
