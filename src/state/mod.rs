//! Shared application state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` is the single process-scoped authenticated-user context provided
//! at the app root; `submit` is the request state machine every widget embeds.

pub mod session;
pub mod submit;
