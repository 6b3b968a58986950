//! In-memory storage backend.
//!
//! This module provides in-memory implementations of the storage traits
//! that keep all data in HashMaps wrapped in `Arc<RwLock<_>>`. This is useful
//! for testing and development scenarios where persistence is not required.
//!
//! # Example
//!
//! ```rust,ignore
//! use recordbox::storage::inmemory::InMemoryRecordRepository;
//!
//! let repo = InMemoryRecordRepository::new("name");
//! // Use repo for testing...
//! ```

mod objects;
mod repository;

pub use objects::InMemoryObjectStore;
pub use repository::InMemoryRecordRepository;
