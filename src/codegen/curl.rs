//! cURL command generation for HTTP requests.
//!
//! Emits a single command line with `-X METHOD`, a Content-Type header, and a
//! trailing `-d` flag only when the descriptor carries a non-empty body. Lines
//! are joined with backslash continuations.

use crate::models::request::RequestDescriptor;

/// Generates a cURL command for the given request.
///
/// URL and body are wrapped in single quotes but not escaped: a value
/// containing a single quote produces a broken command line. This is a
/// documented limitation of the engine.
///
/// # Arguments
///
/// * `request` - The HTTP request to generate a command for
///
/// # Returns
///
/// A string containing the cURL command with line continuations
pub fn generate_curl_command(request: &RequestDescriptor) -> String {
    let mut code = String::new();

    code.push_str(&format!(
        "curl -X {} '{}' \\\n",
        request.method.as_str(),
        request.url
    ));
    code.push_str("  -H 'Content-Type: application/json'");

    // -d flag only when a non-empty body is present
    if let Some(body) = request.body_text() {
        code.push_str(&format!(" \\\n  -d '{}'", body));
    }

    code
}
