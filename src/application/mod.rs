pub mod common;
pub mod create_category;
pub mod get_category;
pub mod update_category;
