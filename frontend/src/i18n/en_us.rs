pub mod common {
    pub const SITE_NAME: &str = "ClonePartner";
    pub const LOADING: &str = "Loading...";
    pub const SEARCH_PLACEHOLDER: &str = "Search…";
    pub const TALK_TO_US: &str = "Talk to us";
    pub const CONTACT_ARIA: &str = "Contact us via email";
    pub const SUPPORT_EMAIL: &str = "support@clonepartner.com";
    pub const INFO_EMAIL: &str = "info@clonepartner.com";
    pub const ARROW_RIGHT: &str = "→";
}

pub mod crash {
    pub const TITLE: &str = "Something went wrong";
    pub const HINT: &str = "The page stopped working. Reloading usually fixes it.";
    pub const RELOAD: &str = "Reload page";
}

pub mod layout {
    pub const SKIP_TO_CONTENT: &str = "Skip to main content";
    pub const MAIN_NAV_ARIA: &str = "Main navigation";
    pub const LOGO_ALT: &str = "ClonePartner Logo";
}

pub mod footer {
    pub const TAGLINE: &str = "Professional data migration services for customer support \
                               platforms, CRM systems, and ATS solutions.";
    pub const SERVICES: &str = "Services";
    pub const SERVICE_LINKS: [&str; 3] = ["Helpdesk Migration", "CRM Migration", "ATS Migration"];
    pub const RESOURCES: &str = "Resources";
    pub const RESOURCE_LINKS: [&str; 3] = ["Migration Process", "Become a Partner", "Blog"];
    pub const COPYRIGHT_TEMPLATE: &str = "© {} ClonePartner. All rights reserved.";
}

pub mod pre_footer_cta {
    pub const HEADING_TEMPLATE: &str = "Learn how clonepartner can help integrate with {}";
    pub const FALLBACK_PLATFORM: &str = "your platform";
}

pub mod breadcrumb {
    pub const ARIA_NAV: &str = "Breadcrumb";
    pub const GUIDES: &str = "Guides";
    pub const ARTICLES: &str = "Articles";
    pub const ATTIO: &str = "Attio CRM";
}

pub mod pagination {
    pub const ARIA_NAV: &str = "Pagination";
    pub const ARIA_PREV: &str = "Previous page";
    pub const ARIA_NEXT: &str = "Next page";
    pub const PREV: &str = "Previous";
    pub const NEXT: &str = "Next";
    pub const ARIA_GOTO_PAGE_TEMPLATE: &str = "Page {}";
    pub const MOBILE_INDICATOR_TEMPLATE: &str = "{} / {}";
    pub const PER_PAGE_LABEL: &str = "Per page";
}

pub mod error_message {
    pub const DEFAULT_TITLE: &str = "Error";
    pub const RETRY: &str = "Try Again";
    pub const RETRY_ARIA: &str = "Retry loading content";
}

pub mod loading_skeleton {
    pub const ARIA_LABEL: &str = "Loading content";
}

pub mod categories {
    pub const TITLE: &str = "Guides";
    pub const SUBTITLE: &str = "Simple one liner to introduce guides";
    pub const ALL_CATEGORIES: &str = "All Categories";
    pub const LOAD_FAILED: &str = "Failed to load categories";
    pub const EMPTY_TITLE: &str = "No categories found";
    pub const EMPTY_HINT: &str = "Try a different search or clear filters.";
    pub const CARD_ARIA_TEMPLATE: &str = "{} – {}";
}

pub mod article_list {
    pub const OPEN_ARIA_TEMPLATE: &str = "Open {}";
    pub const VIEW_GUIDE: &str = "View Guide";
    pub const VIEW_ARTICLE: &str = "View Article";
    pub const QUESTIONS_PREFIX: &str = "Have questions? Write to us on ";
}

pub mod article {
    pub const LOAD_FAILED: &str = "Failed to load article";
    pub const LOAD_FAILED_FALLBACK: &str = "An error occurred while loading the article";
    pub const NOT_FOUND_TITLE: &str = "Article not found";
    pub const NOT_FOUND_MESSAGE: &str =
        "The article you're looking for doesn't exist or has been removed.";
    pub const READ_TIME_TEMPLATE: &str = "{} min read";
    pub const ON_THIS_PAGE: &str = "On This Page";
    pub const TOGGLE_NAV_ARIA: &str = "Toggle content navigation";
    pub const NO_CONTENT: &str = "No content available";
    pub const VIDEO_TITLE_FALLBACK: &str = "Embedded video";
}

pub mod articles_page {
    pub const TITLE: &str = "Articles";
    pub const META_TITLE: &str = "Articles - ClonePartner";
    pub const META_DESCRIPTION: &str = "Browse every ClonePartner article and migration guide";
    pub const SEARCH_ARIA: &str = "Search articles";
    pub const EMPTY_TITLE: &str = "No articles found";
    pub const EMPTY_HINT: &str = "Try a different search.";
    pub const LOAD_FAILED: &str = "Failed to load articles";
    pub const HEADER_TEMPLATE: &str = "{} articles";
}

pub mod category_page {
    pub const HEADING_TEMPLATE: &str = "Clonepartner guides for {}";
    pub const LOAD_FAILED: &str = "Failed to load category";
    pub const LOAD_FAILED_FALLBACK: &str = "An error occurred while loading this category";
    pub const NOT_FOUND_TITLE: &str = "Category not found";
    pub const NOT_FOUND_MESSAGE: &str = "The category you're looking for doesn't exist";
    pub const EMPTY_TITLE: &str = "No guides found";
    pub const EMPTY_MESSAGE: &str = "This category doesn't have any guides yet.";
    pub const VIEW_ALL: &str = "View all categories";
}

pub mod home {
    pub const META_TITLE: &str = "ClonePartner Guides";
    pub const META_DESCRIPTION: &str = "Explore our collection of guides and tutorials";
}

pub mod guides_list {
    pub const META_TITLE: &str = "ClonePartner Guides for Attio CRM";
    pub const META_DESCRIPTION: &str =
        "Browse comprehensive guides for integrating and using Attio CRM with ClonePartner";
    pub const TITLE: &str = "ClonePartner guides for Attio CRM";
    pub const LOGO_ALT: &str = "Attio CRM Logo";
    pub const SEARCH_PLACEHOLDER: &str = "Search guides for Attio";
    pub const SEARCH_ARIA: &str = "Search guides";
    pub const EMPTY: &str = "No guides found matching your search.";
    pub const QUESTIONS: &str = "Have questions? ";
    pub const WRITE_TO_US: &str = "Write to us at support@clonepartner.com";
    pub const ICON_ALT_TEMPLATE: &str = "{} icon";
}

pub mod not_found {
    pub const META_TITLE: &str = "404 - Page Not Found";
    pub const META_DESCRIPTION: &str = "The page you're looking for doesn't exist";
    pub const CODE: &str = "404";
    pub const TITLE: &str = "Page Not Found";
    pub const MESSAGE: &str = "The page you're looking for doesn't exist or has been moved.";
    pub const GO_HOME: &str = "Go Home";
}
