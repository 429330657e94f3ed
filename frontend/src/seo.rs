//! Writes [`PageMeta`] into the document head.

use guides_shared::{seo::absolute_url, PageMeta};
use serde_json::json;
use web_sys::{window, Document, Element};

use crate::{config, i18n::current::common::SITE_NAME};

const JSON_LD_SELECTOR: &str = "script[type=\"application/ld+json\"][data-guides-seo=\"page\"]";

fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

fn head() -> Option<Element> {
    let doc = document()?;
    doc.query_selector("head").ok().flatten()
}

fn upsert_head_element(selector: &str, tag_name: &str) -> Option<Element> {
    let doc = document()?;
    if let Some(found) = doc.query_selector(selector).ok().flatten() {
        return Some(found);
    }
    let head = head()?;
    let created = doc.create_element(tag_name).ok()?;
    let _ = head.append_child(&created);
    Some(created)
}

fn remove_nodes(selector: &str) {
    let Some(doc) = document() else {
        return;
    };
    let Ok(nodes) = doc.query_selector_all(selector) else {
        return;
    };

    let mut index = 0;
    while index < nodes.length() {
        if let Some(node) = nodes.item(index) {
            if let Some(parent) = node.parent_node() {
                let _ = parent.remove_child(&node);
            }
        }
        index += 1;
    }
}

fn set_meta(attr: &str, key: &str, content: Option<&str>) {
    let selector = format!("meta[{attr}=\"{key}\"]");
    let Some(content) = content.filter(|c| !c.trim().is_empty()) else {
        remove_nodes(&selector);
        return;
    };
    let Some(element) = upsert_head_element(&selector, "meta") else {
        return;
    };
    let _ = element.set_attribute(attr, key);
    let _ = element.set_attribute("content", content);
}

fn set_meta_name(name: &str, content: Option<&str>) {
    set_meta("name", name, content);
}

fn set_meta_property(property: &str, content: Option<&str>) {
    set_meta("property", property, content);
}

fn set_link_canonical(url: Option<&str>) {
    let selector = "link[rel=\"canonical\"]";
    let Some(url) = url else {
        remove_nodes(selector);
        return;
    };
    let Some(element) = upsert_head_element(selector, "link") else {
        return;
    };
    let _ = element.set_attribute("rel", "canonical");
    let _ = element.set_attribute("href", url);
}

fn set_json_ld(payload: Option<&str>) {
    let Some(payload) = payload.filter(|p| !p.trim().is_empty()) else {
        remove_nodes(JSON_LD_SELECTOR);
        return;
    };
    let Some(element) = upsert_head_element(JSON_LD_SELECTOR, "script") else {
        return;
    };
    let _ = element.set_attribute("type", "application/ld+json");
    let _ = element.set_attribute("data-guides-seo", "page");
    element.set_text_content(Some(payload));
}

pub fn set_document_title(title: &str) {
    let Some(doc) = document() else {
        return;
    };
    doc.set_title(title);
}

/// Replace the page-level head tags with `meta`. Tags the page does not
/// define are removed so nothing leaks over from the previous route.
pub fn apply(meta: &PageMeta) {
    let canonical = meta
        .path
        .as_deref()
        .map(|path| absolute_url(config::SITE_BASE_URL, path));
    let image = meta
        .image
        .as_deref()
        .map(|image| absolute_url(config::SITE_BASE_URL, image));
    let description = Some(meta.description.as_str());

    set_document_title(&meta.title);
    set_meta_name("description", description);
    set_link_canonical(canonical.as_deref());

    let og = meta.og_type.is_some();
    set_meta_property("og:type", meta.og_type);
    set_meta_property("og:site_name", og.then_some(SITE_NAME));
    set_meta_property("og:title", og.then_some(meta.title.as_str()));
    set_meta_property("og:description", description.filter(|_| og));
    set_meta_property("og:url", canonical.as_deref().filter(|_| og));
    set_meta_property("og:image", image.as_deref().filter(|_| og));
    set_meta_property("article:published_time", meta.published_time.as_deref());

    let card = if image.is_some() { "summary_large_image" } else { "summary" };
    set_meta_name("twitter:card", Some(card));
    set_meta_name("twitter:title", Some(meta.title.as_str()));
    set_meta_name("twitter:description", description);
    set_meta_name("twitter:image", image.as_deref());

    set_json_ld(meta.json_ld.as_deref());
}

/// `WebSite` structured data for the landing page.
pub fn website_json_ld() -> String {
    json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": SITE_NAME,
        "url": config::SITE_BASE_URL,
    })
    .to_string()
}
