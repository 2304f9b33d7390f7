pub mod auth_header;
pub mod ui;
