use std::sync::OnceLock;

use regex::Regex;

/// Expand `{{ env.VAR }}` placeholders in raw TOML text
///
/// `{{ env.VAR | default("fallback") }}` substitutes the fallback when the
/// variable is unset. Comment lines are copied through untouched so a
/// commented-out credential never has to exist.
pub fn expand_env(input: &str) -> Result<String, String> {
    expand_with(input, |name| std::env::var(name).ok())
}

/// [`expand_env`] with an explicit variable lookup
pub fn expand_with<F>(input: &str, lookup: F) -> Result<String, String>
where
    F: Fn(&str) -> Option<String>,
{
    fn placeholder() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        // 1: scoped key, 2: optional default
        RE.get_or_init(|| {
            Regex::new(r#"\{\{\s*([a-zA-Z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
                .expect("must be valid regex")
        })
    }

    let mut lines = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_owned());
            continue;
        }

        let mut expanded = String::with_capacity(line.len());
        let mut last_end = 0;

        for captures in placeholder().captures_iter(line) {
            let (Some(whole), Some(key)) = (captures.get(0), captures.get(1)) else {
                continue;
            };

            let var_name = key
                .as_str()
                .strip_prefix("env.")
                .filter(|name| !name.is_empty() && !name.contains('.'))
                .ok_or_else(|| format!("only variables scoped with 'env.' are supported: `{}`", key.as_str()))?;

            let value = match (lookup(var_name), captures.get(2)) {
                (Some(value), _) => value,
                (None, Some(default)) => default.as_str().to_owned(),
                (None, None) => return Err(format!("environment variable not found: `{var_name}`")),
            };

            expanded.push_str(&line[last_end..whole.start()]);
            expanded.push_str(&value);
            last_end = whole.end();
        }

        expanded.push_str(&line[last_end..]);
        lines.push(expanded);
    }

    let mut output = lines.join("\n");
    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}
