/// Classes for the `border` option.
///
/// `""` and `"true"` request the component's own border, `"false"` none,
/// anything else is a list of utility tokens (`"sm"`, `"t"`, `"opacity-50"`).
pub fn border_classes(prefix: &str, border: Option<&str>) -> Vec<String> {
    match border.map(str::trim) {
        None | Some("false") => Vec::new(),
        Some("") | Some("true") => vec![format!("{prefix}--border")],
        Some(tokens) => tokens
            .split_whitespace()
            .map(|token| format!("border-{token}"))
            .collect(),
    }
}
