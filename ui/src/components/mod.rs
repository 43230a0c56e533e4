//! Console pages and shared widgets

pub mod courses;
pub mod form_item;
pub mod lessons;
pub mod loading;
pub mod toast;
pub mod users;
