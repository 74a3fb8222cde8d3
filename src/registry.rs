//! Language registry for the code generation engine.
//!
//! This module owns the closed set of supported target languages. Each entry
//! pairs a `LanguageDescriptor` (id, display name, file extension) with the
//! emitter function for that language, so adding a language means adding one
//! entry here and nothing else. The table is built once at first use and is
//! read-only afterwards, making it safe to share across threads without
//! synchronization.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::codegen::{curl, go, java, javascript, python, ruby};
use crate::models::request::RequestDescriptor;

/// Signature shared by every language emitter.
///
/// Emitters are pure functions: no I/O, no randomness, byte-identical output
/// for identical input.
pub type EmitFn = fn(&RequestDescriptor) -> String;

/// Metadata describing one supported target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageDescriptor {
    /// Stable identifier used for lookup (e.g. "javascript").
    pub id: &'static str,
    /// Human-readable name for UI enumeration (e.g. "JavaScript").
    pub display_name: &'static str,
    /// File extension for exported snippets, without the dot (e.g. "js").
    pub file_extension: &'static str,
}

/// One registry entry: language metadata plus its emitter.
struct LanguageEntry {
    descriptor: LanguageDescriptor,
    emit: EmitFn,
}

impl LanguageEntry {
    const fn new(
        id: &'static str,
        display_name: &'static str,
        file_extension: &'static str,
        emit: EmitFn,
    ) -> Self {
        Self {
            descriptor: LanguageDescriptor {
                id,
                display_name,
                file_extension,
            },
            emit,
        }
    }
}

/// The registry table, in the fixed order used for UI enumeration.
///
/// Initialized once on first access and never mutated afterwards.
static REGISTRY: Lazy<Vec<LanguageEntry>> = Lazy::new(|| {
    vec![
        LanguageEntry::new(
            "javascript",
            "JavaScript",
            "js",
            javascript::generate_fetch_code,
        ),
        LanguageEntry::new("python", "Python", "py", python::generate_requests_code),
        LanguageEntry::new("curl", "cURL", "sh", curl::generate_curl_command),
        LanguageEntry::new("ruby", "Ruby", "rb", ruby::generate_net_http_code),
        LanguageEntry::new("go", "Go", "go", go::generate_net_http_code),
        LanguageEntry::new("java", "Java", "java", java::generate_http_client_code),
    ]
});

/// Lists all supported languages in registry order.
///
/// The order is deterministic and stable across calls, suitable for driving
/// a language-selector UI.
pub fn list_languages() -> Vec<LanguageDescriptor> {
    REGISTRY.iter().map(|entry| entry.descriptor).collect()
}

/// Looks up the emitter for a language id.
///
/// # Arguments
///
/// * `id` - The language identifier (e.g. "python")
///
/// # Returns
///
/// `Some(EmitFn)` for a registered language, `None` for an unsupported one.
/// `None` is not a hard failure; callers are expected to fall back to a
/// placeholder rather than abort.
pub fn lookup(id: &str) -> Option<EmitFn> {
    REGISTRY
        .iter()
        .find(|entry| entry.descriptor.id == id)
        .map(|entry| entry.emit)
}

/// Looks up the descriptor for a language id.
pub fn descriptor(id: &str) -> Option<LanguageDescriptor> {
    REGISTRY
        .iter()
        .find(|entry| entry.descriptor.id == id)
        .map(|entry| entry.descriptor)
}

/// Returns the file extension for a language id, without the dot.
///
/// The mapping lives in the registry entries themselves, so it cannot drift
/// out of lock-step with the supported language set.
pub fn file_extension(id: &str) -> Option<&'static str> {
    descriptor(id).map(|d| d.file_extension)
}

/// Builds the export file name for a generated snippet.
///
/// # Arguments
///
/// * `id` - The language identifier
///
/// # Returns
///
/// `Some("api-client.<ext>")` for a registered language, `None` otherwise.
pub fn export_file_name(id: &str) -> Option<String> {
    file_extension(id).map(|ext| format!("api-client.{}", ext))
}
