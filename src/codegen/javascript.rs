//! JavaScript code generation for HTTP requests.
//!
//! Emits a promise-based fetch() call with a headers object. The body line is
//! only rendered when the descriptor carries a non-empty body.

use crate::models::request::RequestDescriptor;

/// Generates JavaScript code using the fetch() API.
///
/// The URL and body are spliced into the output verbatim, with no escaping of
/// embedded quote characters. A body containing a single quote therefore
/// produces syntactically broken output; this is a documented limitation of
/// the engine, not a recoverable error.
///
/// # Arguments
///
/// * `request` - The HTTP request to generate code for
///
/// # Returns
///
/// A string containing the generated JavaScript code
pub fn generate_fetch_code(request: &RequestDescriptor) -> String {
    let mut code = String::new();

    code.push_str(&format!("const response = await fetch('{}', {{\n", request.url));
    code.push_str(&format!("  method: '{}',\n", request.method.as_str()));
    code.push_str("  headers: {\n");
    code.push_str("    'Content-Type': 'application/json',\n");
    code.push_str("  },");

    // Body line only when a non-empty body is present
    if let Some(body) = request.body_text() {
        code.push_str(&format!("\n  body: JSON.stringify({}),", body));
    }

    code.push_str("\n});\n");
    code.push_str("\n");
    code.push_str("const data = await response.json();\n");
    code.push_str("console.log(data);");

    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::request::HttpMethod;

    #[test]
    fn test_simple_get() {
        let request = RequestDescriptor::new(HttpMethod::GET, "https://api.example.com/users");

        let code = generate_fetch_code(&request);

        assert!(code.contains("await fetch('https://api.example.com/users'"));
        assert!(code.contains("method: 'GET',"));
        assert!(code.contains("'Content-Type': 'application/json',"));
        assert!(code.contains("const data = await response.json();"));
        assert!(!code.contains("body:"));
    }

    #[test]
    fn test_post_with_body() {
        let request = RequestDescriptor::new(HttpMethod::POST, "https://api.example.com/users")
            .with_body(r#"{"name":"John"}"#);

        let code = generate_fetch_code(&request);

        assert!(code.contains("method: 'POST',"));
        assert!(code.contains(r#"body: JSON.stringify({"name":"John"}),"#));
    }

    #[test]
    fn test_method_upper_case_exactly_once() {
        let request = RequestDescriptor::new(HttpMethod::DELETE, "https://api.example.com/users/1");

        let code = generate_fetch_code(&request);

        assert_eq!(code.matches("DELETE").count(), 1);
    }

    #[test]
    fn test_empty_body_omits_body_line() {
        let request =
            RequestDescriptor::new(HttpMethod::POST, "https://api.example.com/users").with_body("");

        let code = generate_fetch_code(&request);

        assert!(!code.contains("body:"));
    }

    #[test]
    fn test_exact_get_output() {
        let request = RequestDescriptor::new(HttpMethod::GET, "https://api.example.com/items/1");

        let expected = "const response = await fetch('https://api.example.com/items/1', {\n  \
                        method: 'GET',\n  \
                        headers: {\n    \
                        'Content-Type': 'application/json',\n  \
                        },\n});\n\n\
                        const data = await response.json();\nconsole.log(data);";

        assert_eq!(generate_fetch_code(&request), expected);
    }

    #[test]
    fn test_url_passed_through_unescaped() {
        let request = RequestDescriptor::new(HttpMethod::GET, "not a url at all ' \" `");

        let code = generate_fetch_code(&request);

        assert!(code.contains("not a url at all ' \" `"));
    }
}
