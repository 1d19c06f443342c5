//! Core library exports for the Vitrine storefront service.
//!
//! This crate exposes the domain model, Diesel persistence layer, service
//! logic and HTTP routes used by the storefront application and its catalog
//! export/import binaries.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "server")]
pub mod services;
