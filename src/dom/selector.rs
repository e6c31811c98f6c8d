use crate::dom::Element;
use crate::error::{ChartError, ChartResult};

/// Simple CSS selector: `.class`, `#id` or `tag`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Class(String),
    Id(String),
    Tag(String),
}

impl Selector {
    pub fn parse(input: &str) -> ChartResult<Self> {
        let trimmed = input.trim();
        let invalid = || ChartError::InvalidSelector(input.to_owned());

        let (ctor, name): (fn(String) -> Self, &str) = if let Some(name) = trimmed.strip_prefix('.')
        {
            (Self::Class, name)
        } else if let Some(name) = trimmed.strip_prefix('#') {
            (Self::Id, name)
        } else {
            (Self::Tag, trimmed)
        };

        if !is_identifier(name) {
            return Err(invalid());
        }
        Ok(ctor(name.to_owned()))
    }

    #[must_use]
    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Self::Class(class) => element.has_class(class),
            Self::Id(id) => element.attr("id") == Some(id.as_str()),
            Self::Tag(tag) => element.tag().eq_ignore_ascii_case(tag),
        }
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '-' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
