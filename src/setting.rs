/// Three-state input for a configurable field.
///
/// Precedence resolution needs to tell "the caller never provided this" apart
/// from "the caller explicitly cleared this". A plain `Option` cannot carry
/// both meanings, so the assembler takes every overridable field as a
/// `Setting`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Setting<T> {
    /// Never provided; falls through to presets, config, then the built-in
    /// default.
    #[default]
    Unset,
    /// Provided as "nothing on purpose"; wins over every fallback.
    ExplicitNone,
    Value(T),
}

impl<T> Setting<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl Setting<String> {
    /// Treats an empty or whitespace-only string as never provided, matching
    /// the "explicit argument, if provided and non-empty" precedence rule.
    pub fn from_text(s: impl Into<String>) -> Self {
        let s = s.into();
        if s.trim().is_empty() {
            Self::Unset
        } else {
            Self::Value(s)
        }
    }
}
