//! Go code generation for HTTP requests.
//!
//! Emits a complete main package that builds a byte buffer from the body,
//! constructs a request with method, URL, and buffer, issues it via a client,
//! and prints the response status.

use crate::models::request::RequestDescriptor;

/// Generates Go code using net/http.
///
/// Unlike the emitters that omit body handling when the body is absent, the
/// buffer is always constructed: it wraps the body in a raw string literal
/// when present and an empty string when not. `http.NewRequest` takes an
/// `io.Reader` either way, so the generated code keeps one shape for both
/// cases. This asymmetry with the other emitters is intentional and must be
/// preserved.
///
/// # Arguments
///
/// * `request` - The HTTP request to generate code for
///
/// # Returns
///
/// A string containing a complete, runnable Go program
pub fn generate_net_http_code(request: &RequestDescriptor) -> String {
    let mut code = String::new();

    code.push_str("package main\n");
    code.push_str("\n");
    code.push_str("import (\n");
    code.push_str("\t\"bytes\"\n");
    code.push_str("\t\"fmt\"\n");
    code.push_str("\t\"net/http\"\n");
    code.push_str(")\n");
    code.push_str("\n");
    code.push_str("func main() {\n");

    // Buffer is always constructed, empty when the body is absent
    match request.body_text() {
        Some(body) => {
            code.push_str(&format!("\tdata := bytes.NewBufferString(`{}`)\n", body));
        }
        None => {
            code.push_str("\tdata := bytes.NewBufferString(\"\")\n");
        }
    }

    code.push_str(&format!(
        "\treq, _ := http.NewRequest(\"{}\", \"{}\", data)\n",
        request.method.as_str(),
        request.url
    ));
    code.push_str("\treq.Header.Add(\"Content-Type\", \"application/json\")\n");
    code.push_str("\n");
    code.push_str("\tclient := &http.Client{}\n");
    code.push_str("\tresp, _ := client.Do(req)\n");
    code.push_str("\tdefer resp.Body.Close()\n");
    code.push_str("\n");
    code.push_str("\tfmt.Println(\"Response Status:\", resp.Status)\n");
    code.push_str("}");

    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::request::HttpMethod;

    #[test]
    fn test_simple_get() {
        let request = RequestDescriptor::new(HttpMethod::GET, "https://api.example.com/users");

        let code = generate_net_http_code(&request);

        assert!(code.starts_with("package main"));
        assert!(code.contains("\tdata := bytes.NewBufferString(\"\")\n"));
        assert!(code.contains(
            "http.NewRequest(\"GET\", \"https://api.example.com/users\", data)"
        ));
        assert!(code.contains("fmt.Println(\"Response Status:\", resp.Status)"));
    }

    #[test]
    fn test_post_with_body() {
        let request = RequestDescriptor::new(HttpMethod::POST, "https://api.example.com/items")
            .with_body(r#"{"a":1}"#);

        let code = generate_net_http_code(&request);

        assert!(code.contains("data := bytes.NewBufferString(`{\"a\":1}`)"));
        assert!(code.contains(
            "http.NewRequest(\"POST\", \"https://api.example.com/items\", data)"
        ));
    }

    #[test]
    fn test_buffer_always_constructed() {
        let without_body = RequestDescriptor::new(HttpMethod::DELETE, "https://example.com");
        let with_body =
            RequestDescriptor::new(HttpMethod::DELETE, "https://example.com").with_body("x");

        assert!(generate_net_http_code(&without_body).contains("bytes.NewBufferString"));
        assert!(generate_net_http_code(&with_body).contains("bytes.NewBufferString"));
    }

    #[test]
    fn test_empty_body_uses_empty_buffer() {
        let request =
            RequestDescriptor::new(HttpMethod::PUT, "https://example.com/items/1").with_body("");

        let code = generate_net_http_code(&request);

        assert!(code.contains("bytes.NewBufferString(\"\")"));
        assert!(!code.contains('`'));
    }

    #[test]
    fn test_imports_present() {
        let request = RequestDescriptor::new(HttpMethod::GET, "https://example.com");

        let code = generate_net_http_code(&request);

        assert!(code.contains("\t\"bytes\"\n"));
        assert!(code.contains("\t\"fmt\"\n"));
        assert!(code.contains("\t\"net/http\"\n"));
    }

    #[test]
    fn test_body_spliced_verbatim_in_backticks() {
        let request = RequestDescriptor::new(HttpMethod::POST, "https://example.com")
            .with_body("line one\nline two");

        let code = generate_net_http_code(&request);

        assert!(code.contains("bytes.NewBufferString(`line one\nline two`)"));
    }
}
