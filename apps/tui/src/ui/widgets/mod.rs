pub mod banner;
pub mod form;
pub mod navbar;
pub mod popup;
pub mod shortcuts;
pub mod tables;
