use super::errors::ProductError;

const CODE_MIN_LENGTH: usize = 3;
const CODE_MAX_LENGTH: usize = 20;

/// Business key of a product.
/// Unique across the catalogue and never changed after creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductCode(String);

impl ProductCode {
    /// Parses a client-supplied code, enforcing the non-blank and length rules.
    pub fn parse(code: impl Into<String>) -> Result<Self, ProductError> {
        let code = code.into();
        let length = code.chars().count();

        if code.trim().is_empty() || !(CODE_MIN_LENGTH..=CODE_MAX_LENGTH).contains(&length) {
            return Err(ProductError::InvalidCode);
        }

        Ok(Self(code))
    }

    /// Wraps a code read back from storage (no validation).
    pub fn from_repository(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Wraps a code used only to address an existing product.
    /// A code that would fail `parse` cannot be stored, so it simply matches nothing.
    pub fn lookup(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What listing an empty catalogue means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyListPolicy {
    /// An empty catalogue is a valid, empty result.
    #[default]
    Allow,
    /// An empty catalogue is reported as `ProductError::EmptyCollection`.
    Reject,
}

impl std::fmt::Display for EmptyListPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmptyListPolicy::Allow => write!(f, "allow"),
            EmptyListPolicy::Reject => write!(f, "reject"),
        }
    }
}

impl std::str::FromStr for EmptyListPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "allow" => Ok(EmptyListPolicy::Allow),
            "reject" => Ok(EmptyListPolicy::Reject),
            _ => Err(format!("Invalid empty list policy: {}", s)),
        }
    }
}
