use std::fmt::Write as _;

use illustrate_core::{Complexity, IllustrationType, OutputFormat, Style};
use illustrate_imagegen::ProviderStatus;
use illustrate_placeholder::escape_xml;
use strum::VariantArray;

const TEMPLATE: &str = include_str!("../assets/index.html");

/// Render the single-page UI for the configured providers
///
/// Option lists come from the request enums so the form can only submit
/// values the validator accepts.
pub fn render(status: ProviderStatus) -> String {
    TEMPLATE
        .replace("{{ provider_text }}", &provider_text(status))
        .replace(
            "{{ force_mock_disabled }}",
            if status.cloudflare || status.hugging_face { "" } else { "disabled" },
        )
        .replace(
            "{{ illustration_type_options }}",
            &options(IllustrationType::VARIANTS, &IllustrationType::FlatVectorScene),
        )
        .replace("{{ style_options }}", &options(Style::VARIANTS, &Style::Clean))
        .replace("{{ complexity_options }}", &options(Complexity::VARIANTS, &Complexity::Medium))
        .replace("{{ output_options }}", &options(OutputFormat::VARIANTS, &OutputFormat::Svg))
}

/// Status line text, e.g. `Cloudflare + Hugging Face`
pub fn provider_text(status: ProviderStatus) -> String {
    let mut providers = Vec::new();
    if status.cloudflare {
        providers.push("Cloudflare");
    }
    if status.hugging_face {
        providers.push("Hugging Face");
    }

    if providers.is_empty() {
        "Mock only".to_owned()
    } else {
        providers.join(" + ")
    }
}

fn options<T: AsRef<str> + PartialEq>(variants: &[T], selected: &T) -> String {
    variants.iter().fold(String::new(), |mut html, variant| {
        let value = escape_xml(variant.as_ref());
        let marker = if variant == selected { " selected" } else { "" };
        let _ = write!(html, r#"<option value="{value}"{marker}>{value}</option>"#);
        html
    })
}
