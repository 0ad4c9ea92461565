//! User Management API
//!
//! In-memory user registration, listing and balance transfers over HTTP.

pub mod app_state;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod store;
pub mod user_service;
