//! # contactbook-adapter-storage-json
//!
//! Flat-file persistence adapter: the whole store is one JSON document,
//! `{ "contacts": [...] }`.
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `contactbook-app::ports::storage`
//! - Read the document before every operation and rewrite it after every
//!   mutation (no caching, no locking; concurrent writers are last-write-wins)
//! - Optionally seed a fresh file with demo contacts
//!
//! ## Dependency rule
//! Depends on `contactbook-app` (for port traits) and `contactbook-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod contact_repo;
pub mod error;
pub mod file;
pub mod seed;

pub use contact_repo::JsonContactRepository;
pub use error::StorageError;
pub use file::{Config, JsonFile};
