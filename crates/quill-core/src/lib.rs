//! # Quill Core
//!
//! The domain layer of the Quill post service.
//! This crate contains the post model, the store port and the service
//! that drives it, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{DomainError, StoreError};
pub use service::PostService;
