// Library root for the MyNotes API

pub mod core;
pub mod store;
pub mod auth;
pub mod notes;
pub mod api;
pub mod config;
