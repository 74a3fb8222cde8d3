//! Python code generation for HTTP requests.
//!
//! Emits a requests-library call named after the lower-cased method. The
//! `json=` keyword argument is only rendered when the descriptor carries a
//! non-empty body.

use crate::models::request::RequestDescriptor;

/// Generates Python code using the requests library.
///
/// The method name is lower-cased to select the call (`requests.get`,
/// `requests.post`, ...). URL and body are spliced verbatim with no escaping.
///
/// # Arguments
///
/// * `request` - The HTTP request to generate code for
///
/// # Returns
///
/// A string containing the generated Python code
pub fn generate_requests_code(request: &RequestDescriptor) -> String {
    let method = request.method.as_str().to_lowercase();

    let mut code = String::new();

    code.push_str("import requests\n");
    code.push_str("\n");
    code.push_str(&format!("response = requests.{}(\n", method));
    code.push_str(&format!("    '{}',\n", request.url));
    code.push_str("    headers={'Content-Type': 'application/json'},");

    // json= argument only when a non-empty body is present
    if let Some(body) = request.body_text() {
        code.push_str(&format!("\n    json={}", body));
    }

    code.push_str("\n)\n");
    code.push_str("\n");
    code.push_str("print(response.json())");

    code
}
