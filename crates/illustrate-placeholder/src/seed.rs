use illustrate_core::GenerationRequest;

/// Hash `text` into a non-negative seed
///
/// Folds UTF-16 code units with `hash * 31 + unit` in 32-bit signed
/// arithmetic that wraps on overflow, then takes the absolute value.
/// `i32::MIN` has no positive `i32` counterpart, hence the `u32` result.
pub fn hash_text(text: &str) -> u32 {
    text.encode_utf16()
        .fold(0_i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
        .unsigned_abs()
}

/// Seed for a request: the hash of its seven seed fields joined with `|`
pub fn request_seed(request: &GenerationRequest) -> u32 {
    let input = [
        request.prompt.as_str(),
        request.illustration_type.as_ref(),
        request.style.as_ref(),
        request.complexity.as_ref(),
        request.palette.primary.as_str(),
        request.palette.secondary.as_str(),
        request.palette.accent.as_str(),
    ]
    .join("|");

    hash_text(&input)
}
