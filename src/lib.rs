pub mod api;
pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod mail;
pub mod middleware;
pub mod state;
pub mod validation;
