use std::fmt;

use illustrate_core::{Complexity, GenerationRequest, text::truncate_utf16};

use crate::{escape::escape_xml, seed::request_seed};

/// Canvas width in pixels
pub const WIDTH: u32 = 960;
/// Canvas height in pixels
pub const HEIGHT: u32 = 640;
/// Headline length limit in UTF-16 code units, applied before escaping
pub const HEADLINE_UNITS: usize = 86;
/// Headline used when the prompt is empty
pub const FALLBACK_HEADLINE: &str = "IllustrateLab mock output";

const SHAPE_SEED_STEP: i64 = 197;
const CARD_INSET: u32 = 56;
const FONT_FAMILY: &str = "Arial, Helvetica, sans-serif";

/// Number of circles drawn for a complexity level
pub const fn shape_count(complexity: Complexity) -> usize {
    match complexity {
        Complexity::Simple => 4,
        Complexity::Medium => 7,
        Complexity::Detailed => 11,
    }
}

/// Render the placeholder SVG for a request
pub fn synthesize(request: &GenerationRequest) -> String {
    Placeholder::new(request).to_string()
}

/// A placeholder illustration, rendered through [`fmt::Display`]
pub struct Placeholder<'a> {
    request: &'a GenerationRequest,
    seed: u32,
}

impl<'a> Placeholder<'a> {
    pub fn new(request: &'a GenerationRequest) -> Self {
        Self {
            request,
            seed: request_seed(request),
        }
    }

    /// Seed every procedural choice derives from
    pub const fn seed(&self) -> u32 {
        self.seed
    }

    /// Fill for even shapes
    fn accent_color(&self) -> &'a str {
        let palette = &self.request.palette;
        if palette.monochrome {
            palette.primary.as_str()
        } else {
            palette.accent.as_str()
        }
    }

    /// Fill for odd shapes and the gradient's end stop
    fn secondary_color(&self) -> &'a str {
        let palette = &self.request.palette;
        if palette.monochrome {
            palette.primary.as_str()
        } else {
            palette.secondary.as_str()
        }
    }

    fn circles(&self) -> impl Iterator<Item = Circle<'a>> + '_ {
        let base = i64::from(self.seed);
        (0..shape_count(self.request.complexity)).map(move |index| {
            let fill = if index % 2 == 0 {
                self.accent_color()
            } else {
                self.secondary_color()
            };
            // index < 11, the cast is lossless
            #[allow(clippy::cast_possible_wrap)]
            let seed = base + index as i64 * SHAPE_SEED_STEP;
            Circle::from_seed(seed, fill)
        })
    }

    fn headline(&self) -> String {
        let headline = escape_xml(truncate_utf16(&self.request.prompt, HEADLINE_UNITS));
        if headline.is_empty() {
            FALLBACK_HEADLINE.to_owned()
        } else {
            headline
        }
    }
}

impl fmt::Display for Placeholder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let request = self.request;
        let card_width = WIDTH - 2 * CARD_INSET;
        let card_height = HEIGHT - 2 * CARD_INSET;

        writeln!(f, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {WIDTH} {HEIGHT}" width="{WIDTH}" height="{HEIGHT}" role="img" aria-label="Mock illustration output">"#
        )?;
        writeln!(f, "  <defs>")?;
        writeln!(f, r#"    <linearGradient id="bg" x1="0" y1="0" x2="1" y2="1">"#)?;
        writeln!(f, r#"      <stop offset="0%" stop-color="{}" />"#, request.palette.primary)?;
        writeln!(f, r#"      <stop offset="100%" stop-color="{}" />"#, self.secondary_color())?;
        writeln!(f, "    </linearGradient>")?;
        writeln!(f, "  </defs>")?;
        writeln!(f, r#"  <rect width="100%" height="100%" fill="url(#bg)" />"#)?;
        writeln!(
            f,
            r#"  <rect x="{CARD_INSET}" y="{CARD_INSET}" rx="28" ry="28" width="{card_width}" height="{card_height}" fill="rgba(0, 0, 0, 0.18)" stroke="rgba(255,255,255,0.32)" />"#
        )?;

        f.write_str("  ")?;
        for circle in self.circles() {
            write!(f, "{circle}")?;
        }
        f.write_str("\n")?;

        writeln!(f, r#"  <g fill="white">"#)?;
        writeln!(
            f,
            r#"    <text x="96" y="{}" font-size="20" font-family="{FONT_FAMILY}" opacity="0.85">{} / {} / {}</text>"#,
            HEIGHT - 132,
            escape_xml(request.illustration_type.as_ref()),
            escape_xml(request.style.as_ref()),
            escape_xml(request.complexity.as_ref()),
        )?;
        writeln!(
            f,
            r#"    <text x="96" y="{}" font-size="30" font-weight="600" font-family="{FONT_FAMILY}">{}</text>"#,
            HEIGHT - 90,
            self.headline(),
        )?;
        writeln!(
            f,
            r#"    <text x="96" y="{}" font-size="16" font-family="{FONT_FAMILY}" opacity="0.9">Mode: mock</text>"#,
            HEIGHT - 52,
        )?;
        writeln!(f, "  </g>")?;
        f.write_str("</svg>")
    }
}

/// One procedurally placed circle
#[derive(Debug, PartialEq, Eq)]
struct Circle<'a> {
    /// Horizontal center, percent of canvas width
    cx: i64,
    /// Vertical center, percent of canvas height; negative for seeds past `i32::MAX`
    cy: i64,
    radius: i64,
    fill: &'a str,
    /// Opacity in hundredths
    opacity: i64,
}

impl<'a> Circle<'a> {
    fn from_seed(seed: i64, fill: &'a str) -> Self {
        // The vertical shift runs on the low 32 bits read as signed, and `%`
        // keeps the dividend's sign, so wrapped seeds land above the canvas.
        #[allow(clippy::cast_possible_truncation)]
        let shifted = i64::from((seed as i32) >> 4);

        Self {
            cx: seed % 86 + 6,
            cy: shifted % 76 + 8,
            radius: seed % 24 + 8,
            fill,
            opacity: 8 + seed % 50,
        }
    }
}

impl fmt::Display for Circle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<circle cx="{}%" cy="{}%" r="{}" fill="{}" opacity="{}.{:02}" />"#,
            self.cx,
            self.cy,
            self.radius,
            self.fill,
            self.opacity / 100,
            self.opacity % 100,
        )
    }
}
