//! Pollen forecast server.
//!
//! Serves the German Weather Service (DWD) pollen forecast by region and
//! the Hexal seven-day forecast by postal code as plain HTML pages.

pub mod cache;
pub mod config;
pub mod domain;
pub mod provider;
pub mod web;
