pub mod components;
pub mod config;
pub mod dashboard;
pub mod editor;
pub mod error;
pub mod filter;
pub mod format;
pub mod logging;
pub mod model;
pub mod notify;
pub mod store;
pub mod summary;
pub mod supabase;
