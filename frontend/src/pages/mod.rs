pub mod article;
pub mod articles;
pub mod category;
pub mod guides_list;
pub mod home;
pub mod not_found;
