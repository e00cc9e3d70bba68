pub mod accounts;
pub mod app_state;
