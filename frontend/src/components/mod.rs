// Reusable components live here.

pub mod article_card;
pub mod article_content;
pub mod article_header;
pub mod articles_list;
pub mod breadcrumb;
pub mod categories_section;
pub mod category_card;
pub mod content_navigation;
pub mod error_message;
pub mod footer;
pub mod guide_card;
pub mod icons;
pub mod image_with_fallback;
pub mod layout;
pub mod loading_skeleton;
pub mod pagination;
pub mod pre_footer_cta;
pub mod rich_text;
