//! Networking modules for the GraphQL task API and the session endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls (and provides the HTTP session oracle),
//! `graphql` defines documents and envelopes, and `types` defines the shared
//! wire schema.

pub mod api;
pub mod graphql;
pub mod types;
