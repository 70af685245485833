pub mod footer;
pub mod hero;
pub mod icons;
pub mod navbar;
pub mod signup_modal;
pub mod toast;
