//! # InternLink Core
//!
//! Core types, errors, and utilities for the InternLink API.
//!
//! - [`errors`]: error taxonomy and its conversion into the JSON envelope
//! - [`response`]: the `{ success, message, data }` response envelope
//! - [`password`]: bcrypt password hashing and verification
//! - [`object_store`]: storage for uploaded files with signed download URLs
//! - [`serde`]: lenient deserialisation helpers for form-like payloads
//!
//! # Example
//!
//! ```ignore
//! use internlink_core::errors::AppError;
//! use internlink_core::response::ApiResponse;
//!
//! let error = AppError::not_found(anyhow::anyhow!("Student not found"));
//! let ok = ApiResponse::ok("Students fetched successfully", students);
//! ```

pub mod errors;
pub mod object_store;
pub mod password;
pub mod response;
pub mod serde;

pub use errors::{AppError, ErrorKind};
pub use object_store::{LocalObjectStore, ObjectMeta, ObjectStore, StorageError, UrlSigner};
pub use password::{hash_password, verify_password};
pub use response::{ApiResponse, LoginResponse, MessageResponse};
