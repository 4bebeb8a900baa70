pub mod apps_script;
pub mod auth;
pub mod clipboard;
pub mod namegen;
pub mod store;
