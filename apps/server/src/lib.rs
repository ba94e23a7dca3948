//! Localist — business-directory backend.
//!
//! A REST service over a relational store of imported business-licence
//! records, per-user drop lists (saved businesses with an
//! application-tracking status) and per-user reviews. Search and
//! categorization read the licence data; drop-list and review mutations
//! are ownership-scoped to the authenticated caller.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
