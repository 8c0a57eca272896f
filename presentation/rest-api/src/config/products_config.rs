use business::domain::product::value_objects::EmptyListPolicy;

use super::error::ConfigError;

const EMPTY_LIST_POLICY_VAR: &str = "PRODUCTS_EMPTY_LIST_POLICY";

/// Business-rule switches for the product catalogue
#[derive(Debug, Clone, Default)]
pub struct ProductsConfig {
    pub empty_list_policy: EmptyListPolicy,
}

impl ProductsConfig {
    /// Load product settings from environment variables
    ///
    /// Environment variables:
    /// - PRODUCTS_EMPTY_LIST_POLICY: "allow" (empty list is a 200) or
    ///   "reject" (empty list is a 404) (default: "allow")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let empty_list_policy = match lookup(EMPTY_LIST_POLICY_VAR) {
            Some(value) => value
                .trim()
                .to_lowercase()
                .parse::<EmptyListPolicy>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: EMPTY_LIST_POLICY_VAR,
                    value,
                })?,
            None => EmptyListPolicy::default(),
        };

        Ok(Self { empty_list_policy })
    }
}
