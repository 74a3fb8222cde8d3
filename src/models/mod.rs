//! Data models for the code generation engine.
//!
//! This module contains the core data structures used to describe the HTTP
//! request a caller wants client code for: the method enumeration and the
//! normalized request descriptor handed to every emitter.

pub mod request;

pub use request::{HttpMethod, RequestDescriptor};
