//! Movie Catalog Library
//!
//! This library exposes modules for integration testing

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod state;
pub mod test_utils;
