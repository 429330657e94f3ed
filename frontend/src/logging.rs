//! `log` backend writing to the browser console.

use std::{panic, str::FromStr};

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

use crate::{config, i18n::current::crash as t};

/// Id of the notice shown after a panic.
const CRASH_NOTICE_ID: &str = "crash-notice";

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!(
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        ));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Markup of the notice that replaces a dead app. Only static strings go in.
fn crash_notice_html(reload_href: &str) -> String {
    format!(
        r#"<div id="{CRASH_NOTICE_ID}" role="alert" class="min-h-screen flex items-center justify-center px-4 bg-gray-50"><div class="max-w-md text-center"><h1 class="text-2xl font-semibold text-gray-900 mb-2">{}</h1><p class="text-gray-600 mb-6">{}</p><a href="{reload_href}" class="inline-flex items-center px-5 py-2.5 rounded-full bg-gray-900 text-white text-sm font-medium hover:bg-gray-800">{}</a></div></div>"#,
        t::TITLE,
        t::HINT,
        t::RELOAD,
    )
}

/// Swap the page body for the crash notice. After a panic the wasm app no
/// longer responds, so the notice is plain HTML with a reload link.
fn show_crash_notice() {
    let Some(document) = web_sys::window().and_then(|win| win.document()) else {
        return;
    };
    if document.get_element_by_id(CRASH_NOTICE_ID).is_some() {
        return;
    }
    if let Ok(Some(body)) = document.query_selector("body") {
        body.set_inner_html(&crash_notice_html(&config::asset_path("")));
    }
}

fn level_filter(raw: &str) -> LevelFilter {
    LevelFilter::from_str(raw.trim()).unwrap_or(LevelFilter::Info)
}

/// Install the console logger and a panic hook that reports through it.
/// Later calls are no-ops.
pub fn init() {
    if log::set_logger(&LOGGER).is_err() {
        return;
    }
    log::set_max_level(level_filter(config::LOG_LEVEL));

    panic::set_hook(Box::new(|info| {
        log::error!("panic: {info}");
        show_crash_notice();
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crash_notice_links_back_to_the_site() {
        let html = crash_notice_html("/");
        assert!(html.contains(r#"id="crash-notice""#));
        assert!(html.contains(r#"href="/""#));
        assert!(html.contains(t::TITLE));
        assert!(html.contains(t::RELOAD));
    }

    #[test]
    fn unknown_level_means_info() {
        assert_eq!(level_filter("debug"), LevelFilter::Debug);
        assert_eq!(level_filter(" WARN "), LevelFilter::Warn);
        assert_eq!(level_filter("loud"), LevelFilter::Info);
    }
}
