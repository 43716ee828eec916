pub mod contact_form;
pub mod main_window;
pub mod navbar;
pub mod notification;
pub mod sections;
pub mod theme;
