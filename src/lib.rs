//! Library exports for the URL shortener
//!
//! Exposes the components for the binary and for integration tests.

pub mod config;
pub mod database;
pub mod error;
pub mod generator;
pub mod handler;
pub mod model;
pub mod route;
pub mod service;
pub mod state;
pub mod store;
