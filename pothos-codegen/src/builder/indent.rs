//! Indentation configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width.
    Spaces(u8),
    Tab,
}

impl Indent {
    /// 2-space indentation, what Prettier emits for TypeScript.
    pub const TYPESCRIPT: Self = Self::Spaces(2);

    /// The string for one indent level.
    pub fn as_str(&self) -> &'static str {
        const SPACES: &str = "        ";
        match self {
            Self::Spaces(n) => &SPACES[..(*n as usize).min(SPACES.len())],
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Spaces(12).as_str(), "        ");
        assert_eq!(Indent::Tab.as_str(), "\t");
    }

    #[test]
    fn test_default_is_typescript() {
        assert_eq!(Indent::default(), Indent::Spaces(2));
    }
}
