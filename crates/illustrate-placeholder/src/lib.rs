//! Deterministic placeholder illustrations
//!
//! Everything here is a pure function of the request: the same request
//! always renders to the same SVG bytes.

#![allow(clippy::must_use_candidate)]

mod data_url;
mod escape;
mod seed;
mod svg;

pub use data_url::to_data_url;
pub use escape::escape_xml;
pub use seed::{hash_text, request_seed};
pub use svg::{Placeholder, shape_count, synthesize, FALLBACK_HEADLINE, HEADLINE_UNITS, HEIGHT, WIDTH};
