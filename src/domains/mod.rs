//! Domains module containing business logic organized by bounded contexts.
//!
//! The server currently exposes a single domain: data-transformation tools.

pub mod tools;
