//! API Code Generator
//!
//! This crate turns a single abstract HTTP request description (method, URL,
//! optional body) into ready-to-paste client code, one snippet per supported
//! target language. It serves callers that know *what* API call they want and
//! need the equivalent source in JavaScript, Python, cURL, Ruby, Go, or Java.
//!
//! # Architecture
//!
//! - **models**: the [`RequestDescriptor`](models::request::RequestDescriptor)
//!   input type and its closed [`HttpMethod`](models::request::HttpMethod)
//!   enumeration
//! - **registry**: the fixed set of supported languages, their metadata
//!   (display name, file extension), and emitter lookup
//! - **codegen**: one emitter module per language plus the
//!   [`generate_code`](codegen::generate_code) facade
//! - **samples**: built-in preset requests for quick starts
//!
//! # Usage
//!
//! ```
//! use api_codegen::codegen::generate_code;
//! use api_codegen::models::request::{HttpMethod, RequestDescriptor};
//! use api_codegen::registry;
//!
//! let descriptor = RequestDescriptor::new(HttpMethod::POST, "https://api.example.com/items")
//!     .with_body(r#"{"a":1}"#);
//!
//! for language in registry::list_languages() {
//!     let code = generate_code(language.id, &descriptor);
//!     println!("// {} ({})", language.display_name, language.file_extension);
//!     println!("{}", code);
//! }
//! ```
//!
//! # Guarantees and limitations
//!
//! Generation is pure, synchronous, in-memory text construction: no network,
//! no disk, no shared mutable state beyond the read-only registry. The facade
//! never panics; an unknown language id degrades to a fixed placeholder
//! string. The engine does **not** validate the URL or parse the body, and it
//! performs no escaping of delimiter characters spliced into the generated
//! source, so pathological inputs yield deterministic but possibly
//! syntactically broken snippets.

pub mod codegen;
pub mod models;
pub mod registry;
pub mod samples;

pub use codegen::{generate_code, UNSUPPORTED_LANGUAGE_PLACEHOLDER};
pub use models::request::{HttpMethod, RequestDescriptor};
pub use registry::{export_file_name, list_languages, LanguageDescriptor};
