//! Java code generation for HTTP requests.
//!
//! Emits a complete Main class that builds an HttpRequest with a body
//! publisher and prints the response body via java.net.http.HttpClient.

use crate::models::request::RequestDescriptor;

/// Generates Java code using java.net.http.HttpClient.
///
/// A `BodyPublishers.ofString` call is always emitted: it wraps the body
/// verbatim when present and an empty string literal (`""`) when not, because
/// `HttpRequest.Builder.method` requires a publisher for every method. This
/// differs from the omit-when-absent pattern used by the JavaScript, Python,
/// cURL, and Ruby emitters and is intentional.
///
/// A present body is spliced raw, without surrounding quotes: it is expected
/// to be a JSON literal that the caller wants visible as-is in the argument
/// position. No escaping is performed.
///
/// # Arguments
///
/// * `request` - The HTTP request to generate code for
///
/// # Returns
///
/// A string containing a complete Java class
pub fn generate_http_client_code(request: &RequestDescriptor) -> String {
    // Publisher argument: raw body text when present, "" literal when absent
    let publisher_arg = request.body_text().unwrap_or("\"\"");

    let mut code = String::new();

    code.push_str("import java.net.URI;\n");
    code.push_str("import java.net.http.HttpClient;\n");
    code.push_str("import java.net.http.HttpRequest;\n");
    code.push_str("import java.net.http.HttpResponse;\n");
    code.push_str("\n");
    code.push_str("public class Main {\n");
    code.push_str("    public static void main(String[] args) throws Exception {\n");
    code.push_str("        HttpClient client = HttpClient.newHttpClient();\n");
    code.push_str("        HttpRequest request = HttpRequest.newBuilder()\n");
    code.push_str(&format!(
        "            .uri(URI.create(\"{}\"))\n",
        request.url
    ));
    code.push_str(&format!(
        "            .method(\"{}\", HttpRequest.BodyPublishers.ofString({}))\n",
        request.method.as_str(),
        publisher_arg
    ));
    code.push_str("            .header(\"Content-Type\", \"application/json\")\n");
    code.push_str("            .build();\n");
    code.push_str("\n");
    code.push_str(
        "        HttpResponse<String> response = client.send(request, HttpResponse.BodyHandlers.ofString());\n",
    );
    code.push_str("        System.out.println(response.body());\n");
    code.push_str("    }\n");
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

        let code = generate_http_client_code(&request);

        assert!(code.starts_with("import java.net.URI;"));
        assert!(code.contains(".uri(URI.create(\"https://api.example.com/users\"))"));
        assert!(code.contains(".method(\"GET\", HttpRequest.BodyPublishers.ofString(\"\"))"));
        assert!(code.contains("System.out.println(response.body());"));
    }

    #[test]
    fn test_post_with_body() {
        let request = RequestDescriptor::new(HttpMethod::POST, "https://api.example.com/items")
            .with_body(r#"{"a":1}"#);

        let code = generate_http_client_code(&request);

        assert!(code.contains(".method(\"POST\", HttpRequest.BodyPublishers.ofString({\"a\":1}))"));
    }

    #[test]
    fn test_publisher_always_present() {
        for method in HttpMethod::all() {
            let request = RequestDescriptor::new(*method, "https://example.com");
            let code = generate_http_client_code(&request);
            assert!(
                code.contains("HttpRequest.BodyPublishers.ofString"),
                "publisher missing for {}",
                method
            );
        }
    }

    #[test]
    fn test_empty_body_wraps_empty_literal() {
        let request =
            RequestDescriptor::new(HttpMethod::PUT, "https://example.com/items/1").with_body("");

        let code = generate_http_client_code(&request);

        assert!(code.contains("BodyPublishers.ofString(\"\")"));
    }

    #[test]
    fn test_content_type_header_always_set() {
        let request = RequestDescriptor::new(HttpMethod::DELETE, "https://example.com/items/1");

        let code = generate_http_client_code(&request);

        assert!(code.contains(".header(\"Content-Type\", \"application/json\")"));
    }

    #[test]
    fn test_body_spliced_raw() {
        let request = RequestDescriptor::new(HttpMethod::POST, "https://example.com")
            .with_body("not even close to java");

        let code = generate_http_client_code(&request);

        assert!(code.contains("ofString(not even close to java)"));
    }
}
