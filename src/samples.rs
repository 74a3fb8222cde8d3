//! Built-in sample requests.
//!
//! A small set of public test APIs a caller can offer as one-click presets
//! when driving the engine from a form. Pure data; nothing here touches the
//! network.

use serde::Serialize;

use crate::models::request::{HttpMethod, RequestDescriptor};

/// A named preset request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleRequest {
    /// Short label for display (e.g. "Cat Facts").
    pub name: &'static str,
    /// The descriptor to hand to the engine.
    pub descriptor: RequestDescriptor,
}

/// Returns the built-in sample requests in a fixed order.
pub fn samples() -> Vec<SampleRequest> {
    vec![
        SampleRequest {
            name: "JSONPlaceholder",
            descriptor: RequestDescriptor::new(
                HttpMethod::GET,
                "https://jsonplaceholder.typicode.com/posts/1",
            ),
        },
        SampleRequest {
            name: "Cat Facts",
            descriptor: RequestDescriptor::new(HttpMethod::GET, "https://catfact.ninja/fact"),
        },
        SampleRequest {
            name: "Create Post",
            descriptor: RequestDescriptor::new(
                HttpMethod::POST,
                "https://jsonplaceholder.typicode.com/posts",
            )
            .with_body(r#"{"title":"foo","body":"bar","userId":1}"#),
        },
    ]
}
