//! Code generation for HTTP requests.
//!
//! This module is the engine's entry point. It dispatches a
//! [`RequestDescriptor`](crate::models::request::RequestDescriptor) to the
//! emitter registered for the requested language id and returns the generated
//! source text. Each supported language lives in its own submodule; the set of
//! languages itself is owned by [`crate::registry`].

pub mod curl;
pub mod go;
pub mod java;
pub mod javascript;
pub mod python;
pub mod ruby;

use crate::models::request::RequestDescriptor;
use crate::registry;

/// Placeholder returned for a language id absent from the registry.
///
/// An unknown id is not treated as an error: a caller driving a dynamic
/// language selector should never crash on a stale or unrecognized id, so the
/// facade degrades to this fixed string instead.
pub const UNSUPPORTED_LANGUAGE_PLACEHOLDER: &str = "// Select a language to generate code";

/// Generates client code for the given request in the requested language.
///
/// This is the main entry point for code generation. It looks the language up
/// in the registry and invokes its emitter. The call is pure and stateless:
/// identical inputs always produce byte-identical output, and nothing is
/// cached between calls.
///
/// # Arguments
///
/// * `language_id` - Registry id of the target language (e.g. "python")
/// * `descriptor` - The HTTP request to generate code for
///
/// # Returns
///
/// The generated source text, or [`UNSUPPORTED_LANGUAGE_PLACEHOLDER`] if the
/// language id is not registered. This function never panics.
///
/// # Examples
///
/// ```
/// use api_codegen::codegen::generate_code;
/// use api_codegen::models::request::{HttpMethod, RequestDescriptor};
///
/// let descriptor = RequestDescriptor::new(HttpMethod::GET, "https://api.example.com/users");
///
/// let code = generate_code("javascript", &descriptor);
/// assert!(code.contains("fetch"));
///
/// let fallback = generate_code("brainfuck", &descriptor);
/// assert!(fallback.starts_with("//"));
/// ```
pub fn generate_code(language_id: &str, descriptor: &RequestDescriptor) -> String {
    match registry::lookup(language_id) {
        Some(emit) => emit(descriptor),
        None => UNSUPPORTED_LANGUAGE_PLACEHOLDER.to_string(),
    }
}
