/// Wrap an SVG document in a `data:` URL
///
/// Every byte outside the unreserved URI set is percent-encoded.
pub fn to_data_url(svg: &str) -> String {
    format!("data:image/svg+xml;charset=utf-8,{}", urlencoding::encode(svg))
}
