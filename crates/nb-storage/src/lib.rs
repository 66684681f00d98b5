//! nb-storage - Storage library for newsboard
//!
//! This crate provides a JSON file backed implementation of the core `Store`.

mod json_store;

pub use json_store::{JsonFileStore, StoreFile, CURRENT_SCHEMA_VERSION, DB_FILE_NAME};
