//! Networking modules for the external prediction/chat API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `error` defines the failure taxonomy, and
//! `types` mirrors the wire schema.

pub mod api;
pub mod error;
pub mod types;
