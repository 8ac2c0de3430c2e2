//! # contactbook-domain
//!
//! Pure domain model for the contactbook contact manager.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Contacts** (a person with name, email, phone and status)
//! - Define the **contact list** — the ordered collection persisted as one
//!   JSON document — and the id assignment rules that go with it
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod contact;
pub mod contact_list;
