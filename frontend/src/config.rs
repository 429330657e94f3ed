//! Build-time configuration for the frontend application.
//!
//! Every value is read with `option_env!` when the wasm bundle is compiled,
//! so deployments set them in the build environment.

/// Base URL of the content API, without a trailing slash.
pub const API_BASE: &str = match option_env!("GUIDES_API_BASE") {
    Some(url) => url,
    None => "/api",
};

/// Origin that relative media URLs are resolved against. Empty keeps them
/// site-relative.
pub const MEDIA_BASE: &str = match option_env!("GUIDES_MEDIA_BASE") {
    Some(url) => url,
    None => "",
};

/// Public origin used for canonical links.
pub const SITE_BASE_URL: &str = match option_env!("GUIDES_SITE_URL") {
    Some(url) => url,
    None => "https://clonepartner.com",
};

/// Maximum log level, e.g. `debug`. Invalid values mean `info`.
pub const LOG_LEVEL: &str = match option_env!("GUIDES_LOG_LEVEL") {
    Some(level) => level,
    None => "info",
};

/// Base URL for static assets
/// - For local development: "/"
/// - For a sub-path deployment: set `GUIDES_BASE_URL`, e.g. "/guides-site/"
pub const BASE_URL: &str = match option_env!("GUIDES_BASE_URL") {
    Some(base) => base,
    None => "/",
};

/// Site logo, shipped under `frontend/assets/`.
pub const BRAND_LOGO: &str = "assets/brand.svg";
/// Footer banner artwork.
pub const BRAND_BANNER: &str = "assets/brand-banner.svg";
/// Logo on the Attio guides page.
pub const ATTIO_LOGO: &str = "assets/attio-logo.svg";

/// Icon of a static guide, by slug.
pub fn guide_icon(slug: &str) -> String {
    asset_path(&format!("assets/guide-icons/{slug}.svg"))
}

/// Helper function to construct asset paths
pub fn asset_path(path: &str) -> String {
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}/{}", BASE_URL.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::models::GUIDES;

    fn on_disk(path: &str) -> bool {
        Path::new(env!("CARGO_MANIFEST_DIR")).join(path).is_file()
    }

    #[test]
    fn referenced_assets_are_bundled() {
        for asset in [BRAND_LOGO, BRAND_BANNER, ATTIO_LOGO] {
            assert!(on_disk(asset), "missing {asset}");
        }
        for guide in GUIDES {
            let icon = format!("assets/guide-icons/{}.svg", guide.slug);
            assert!(on_disk(&icon), "missing {icon}");
        }
    }

    #[test]
    fn asset_path_joins_base() {
        let base = BASE_URL.trim_end_matches('/');
        assert_eq!(asset_path("/assets/brand.svg"), format!("{base}/assets/brand.svg"));
        assert_eq!(asset_path("assets/brand.svg"), format!("{base}/assets/brand.svg"));
    }
}
