use std::fmt::Display;

/// When a frame loads its `src`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum FrameLoadingStyle {
    /// Load as soon as `src` is set on a connected, active frame.
    #[default]
    Eager,
    /// Only load on an explicit visit.
    Lazy,
}

impl FrameLoadingStyle {
    /// Normalizes a `loading` attribute value. Matching is case-insensitive and
    /// anything other than `lazy` reads as eager.
    pub fn from_attribute(value: &str) -> Self {
        if value.eq_ignore_ascii_case("lazy") {
            FrameLoadingStyle::Lazy
        } else {
            FrameLoadingStyle::Eager
        }
    }

    /// Attribute token written by the `loading` setter.
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameLoadingStyle::Eager => "eager",
            FrameLoadingStyle::Lazy => "lazy",
        }
    }
}

impl Display for FrameLoadingStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lazy_in_any_casing() {
        for value in ["lazy", "LAZY", "Lazy", "lAzY"] {
            assert_eq!(FrameLoadingStyle::from_attribute(value), FrameLoadingStyle::Lazy, "{value}");
        }
    }

    #[test]
    fn everything_else_is_eager() {
        for value in ["", "eager", "EAGER", " lazy", "lazy ", "lazyy", "auto", "0"] {
            assert_eq!(FrameLoadingStyle::from_attribute(value), FrameLoadingStyle::Eager, "{value:?}");
        }
        assert_eq!(FrameLoadingStyle::default(), FrameLoadingStyle::Eager);
    }

    #[test]
    fn display_matches_attribute_token() {
        assert_eq!(FrameLoadingStyle::Eager.to_string(), "eager");
        assert_eq!(FrameLoadingStyle::Lazy.to_string(), "lazy");
    }
}
