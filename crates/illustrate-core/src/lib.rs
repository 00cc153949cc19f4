//! Domain types shared by the placeholder generator and the generation endpoint

#![allow(clippy::must_use_candidate)]

mod error;
mod request;
pub mod text;

pub use error::ValidationError;
pub use request::{
    Complexity, GenerationRequest, HexColor, IllustrationType, OutputFormat, Palette, RawGenerationRequest, RawPalette,
    Style, MAX_PROMPT_UNITS,
};
