#![allow(dead_code)]

pub mod config;
pub mod mock_provider;
pub mod server;

/// Request body for the robot example used across suites
pub fn robot_body(output: &str, force_mock: bool) -> serde_json::Value {
    serde_json::json!({
        "prompt": "A cheerful robot watering houseplants",
        "illustrationType": "flat vector scene",
        "style": "clean",
        "complexity": "medium",
        "palette": {
            "primary": "#57a6ff",
            "secondary": "#22d3a6",
            "accent": "#ffd166",
            "monochrome": false
        },
        "output": output,
        "forceMock": force_mock
    })
}
