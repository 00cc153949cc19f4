use std::{fmt, str::FromStr, sync::OnceLock};

use regex::Regex;
use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::{error::ValidationError, text::truncate_utf16};

/// Longest prompt kept after trimming, in UTF-16 code units
pub const MAX_PROMPT_UNITS: usize = 240;

/// Kind of illustration requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantArray)]
pub enum IllustrationType {
    #[strum(serialize = "icons")]
    Icons,
    #[strum(serialize = "flat vector scene")]
    FlatVectorScene,
    #[strum(serialize = "outline")]
    Outline,
    #[strum(serialize = "isometric")]
    Isometric,
    #[strum(serialize = "sticker")]
    Sticker,
    #[strum(serialize = "minimal line art")]
    MinimalLineArt,
}

/// Visual style of the illustration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantArray)]
#[strum(serialize_all = "lowercase")]
pub enum Style {
    Clean,
    Playful,
    Corporate,
    Sketchy,
    Bold,
}

/// Amount of detail; drives the placeholder shape count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantArray)]
#[strum(serialize_all = "lowercase")]
pub enum Complexity {
    Simple,
    Medium,
    Detailed,
}

/// Requested output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantArray)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    Svg,
    Png,
}

/// A color in `#RGB` or `#RRGGBB` notation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    /// Accept `value` if it is a three or six digit hex color
    pub fn parse(value: &str) -> Option<Self> {
        fn re() -> &'static Regex {
            static RE: OnceLock<Regex> = OnceLock::new();
            RE.get_or_init(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}){1,2}$").expect("must be valid regex"))
        }

        re().is_match(value).then(|| Self(value.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub primary: HexColor,
    pub secondary: HexColor,
    pub accent: HexColor,
    pub monochrome: bool,
}

/// A validated illustration request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Trimmed, non-empty, at most [`MAX_PROMPT_UNITS`] UTF-16 code units
    pub prompt: String,
    pub illustration_type: IllustrationType,
    pub style: Style,
    pub complexity: Complexity,
    pub palette: Palette,
    pub output: OutputFormat,
    pub force_mock: bool,
}

impl GenerationRequest {
    /// Whether remote providers should be tried before the placeholder
    pub fn wants_remote(&self) -> bool {
        self.output == OutputFormat::Png && !self.force_mock
    }
}

/// Request body as received over the wire, before validation
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGenerationRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub illustration_type: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub complexity: Option<String>,
    #[serde(default)]
    pub palette: Option<RawPalette>,
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub force_mock: Option<bool>,
}

/// Palette as received over the wire
#[derive(Debug, Default, Deserialize)]
pub struct RawPalette {
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default)]
    pub secondary: Option<String>,
    #[serde(default)]
    pub accent: Option<String>,
    #[serde(default)]
    pub monochrome: Option<bool>,
}

impl TryFrom<RawGenerationRequest> for GenerationRequest {
    type Error = ValidationError;

    fn try_from(raw: RawGenerationRequest) -> Result<Self, Self::Error> {
        let prompt = raw.prompt.ok_or(ValidationError::MissingField("prompt"))?;
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(ValidationError::EmptyPrompt);
        }

        let illustration_type = parse_option("illustrationType", raw.illustration_type)?;
        let style = parse_option("style", raw.style)?;
        let complexity = parse_option("complexity", raw.complexity)?;
        let output = parse_option("output", raw.output)?;

        let palette = raw.palette.ok_or(ValidationError::MissingField("palette"))?;
        let palette = Palette {
            primary: parse_color("primary", palette.primary)?,
            secondary: parse_color("secondary", palette.secondary)?,
            accent: parse_color("accent", palette.accent)?,
            monochrome: palette.monochrome.unwrap_or(false),
        };

        Ok(Self {
            prompt: truncate_utf16(prompt, MAX_PROMPT_UNITS).to_owned(),
            illustration_type,
            style,
            complexity,
            palette,
            output,
            force_mock: raw.force_mock.unwrap_or(false),
        })
    }
}

fn parse_option<T: FromStr>(field: &'static str, value: Option<String>) -> Result<T, ValidationError> {
    let value = value.ok_or(ValidationError::MissingField(field))?;
    value
        .parse()
        .map_err(|_| ValidationError::UnknownOption { field, value })
}

fn parse_color(field: &'static str, value: Option<String>) -> Result<HexColor, ValidationError> {
    let value = value.ok_or(ValidationError::MissingField(field))?;
    HexColor::parse(&value).ok_or(ValidationError::InvalidColor { field, value })
}
