//! Core domain types and ports for portico.
//!
//! This crate holds the hexagon: the [`Record`](record::Record) abstraction,
//! the [`TableStore`](storage::TableStore) port the storage backends plug
//! into, the generic [`Repository`](repository::Repository) built on top of
//! it, the base [`Service`](service::Service), and the auth domain
//! (credentials, claims, and the identity-verification hook). Everything
//! that does I/O lives in the outer crates.

pub mod auth;
pub mod record;
pub mod repository;
pub mod service;
pub mod storage;

#[cfg(test)]
pub(crate) mod testing;
