//! Shared, DOM-free core of the guides site: backend payload models, the
//! rich-text tree, query caching and the small formatting rules the pages
//! rely on. Everything here builds and tests natively.

pub mod blocks;
pub mod content;
mod de;
pub mod error;
pub mod filter;
pub mod format;
pub mod model;
pub mod pagination;
pub mod query;
pub mod seo;
pub mod styles;

pub use blocks::Block;
pub use content::{Node, RichText};
pub use error::ApiError;
pub use model::{
    Article, ArticleListItem, ArticleListParams, ArticleListResponse, Category,
    CategoryDetailResponse, CategoryListParams, CategoryListResponse, Media, PaginationMeta,
};
pub use seo::PageMeta;

#[cfg(test)]
mod tests {
    const WORKSPACE_MANIFEST: &str = include_str!("../../Cargo.toml");
    const CRATE_MANIFEST: &str = include_str!("../Cargo.toml");

    fn section<'a>(manifest: &'a str, header: &str) -> Vec<&'a str> {
        manifest
            .lines()
            .skip_while(|line| line.trim() != header)
            .skip(1)
            .take_while(|line| !line.trim_start().starts_with('['))
            .map(str::trim)
            .collect()
    }

    #[test]
    fn public_api_must_stay_documented() {
        assert!(section(WORKSPACE_MANIFEST, "[workspace.lints.rust]").contains(&r#"missing_docs = "deny""#));
        assert!(section(WORKSPACE_MANIFEST, "[workspace.lints.rustdoc]")
            .contains(&r#"missing_crate_level_docs = "deny""#));
        assert!(section(CRATE_MANIFEST, "[lints]").contains(&"workspace = true"));
    }
}
