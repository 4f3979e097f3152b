use super::StyleDecl;

/// Convert a dimension to a CSS length. Bare numbers become pixels.
///
/// Returns `None` for empty or non-finite input.
pub fn convert_to_unit(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => Some(format!("{n}px")),
        Ok(_) => None,
        Err(_) => Some(value.to_string()),
    }
}

/// Size constraints of a component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dimensions {
    pub height: Option<String>,
    pub max_height: Option<String>,
    pub max_width: Option<String>,
    pub min_height: Option<String>,
    pub min_width: Option<String>,
    pub width: Option<String>,
}

impl Dimensions {
    pub fn styles(&self) -> Vec<StyleDecl> {
        [
            ("height", &self.height),
            ("max-height", &self.max_height),
            ("max-width", &self.max_width),
            ("min-height", &self.min_height),
            ("min-width", &self.min_width),
            ("width", &self.width),
        ]
        .into_iter()
        .filter_map(|(prop, value)| {
            value
                .as_deref()
                .and_then(convert_to_unit)
                .map(|v| (prop, v))
        })
        .collect()
    }
}
