//! Brunel: referential-integrity core for construction project tracking.
//!
//! This crate sits between an HTTP API and the persisted entities of a
//! construction planning system — projects, the tasks that compose them,
//! and the resources tasks consume. It owns the rules that decide when an
//! entity may be created, mutated, linked, or deleted without leaving
//! dangling or contradictory references. Transport, storage engine, and
//! presentation are external collaborators.
//!
//! # Architecture
//!
//! Brunel follows hexagonal architecture principles:
//!
//! - **Domain**: entity records and their invariants, no infrastructure
//!   dependencies
//! - **Ports**: abstract trait interfaces for the document store
//! - **Adapters**: concrete implementations of ports (in-memory store)
//! - **Validation**: request payload checking ahead of any mutation
//! - **Services**: one orchestrated operation per API route
//!
//! # Modules
//!
//! - [`domain`]: entities, identifiers, and mutation value objects
//! - [`ports`]: repository traits the store adapter must satisfy
//! - [`adapters`]: the in-memory reference store
//! - [`validation`]: field-level request validation
//! - [`services`]: project lifecycle, task linkage, resource integrity

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
