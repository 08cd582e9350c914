pub mod footer;
pub mod icons;
pub mod navbar;
pub mod project_card;
