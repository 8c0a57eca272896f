use crate::domain::errors::RepositoryError;

/// Failures surfaced by the product use cases.
///
/// Variants carrying a `String` hold the product code the request referred to,
/// so the message can name it back to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("a product with code '{0}' already exists")]
    DuplicateCode(String),
    #[error("the code of product '{0}' cannot be modified")]
    ImmutableFieldViolation(String),
    #[error("no product found with code '{0}'")]
    NotFound(String),
    #[error("there are no products registered")]
    EmptyCollection,
    #[error("code must be non-blank and between 3 and 20 characters")]
    InvalidCode,
    #[error("name must be non-blank and between 3 and 50 characters")]
    InvalidName,
    #[error("price must be greater than zero")]
    InvalidPrice,
    #[error("quantity must be greater than zero")]
    InvalidQuantity,
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl ProductError {
    /// Translates a repository failure for an operation addressed by `code`.
    ///
    /// `NotFound` and `Duplicated` become their code-carrying domain
    /// counterparts; anything else stays a storage failure.
    pub fn from_repository(error: RepositoryError, code: &str) -> Self {
        match error {
            RepositoryError::NotFound => ProductError::NotFound(code.to_string()),
            RepositoryError::Duplicated => ProductError::DuplicateCode(code.to_string()),
            other => ProductError::Repository(other),
        }
    }

    /// True for errors caused by the request's own field values.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ProductError::InvalidCode
                | ProductError::InvalidName
                | ProductError::InvalidPrice
                | ProductError::InvalidQuantity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_the_code_in_duplicate_message() {
        let error = ProductError::DuplicateCode("P001".to_string());
        assert_eq!(error.to_string(), "a product with code 'P001' already exists");
    }

    #[test]
    fn should_state_code_cannot_be_modified() {
        let error = ProductError::ImmutableFieldViolation("P001".to_string());
        assert!(error.to_string().contains("cannot be modified"));
    }

    #[test]
    fn should_map_repository_not_found_to_product_not_found() {
        let error = ProductError::from_repository(RepositoryError::not_found(), "NO_EXISTE");
        assert!(matches!(error, ProductError::NotFound(code) if code == "NO_EXISTE"));
    }

    #[test]
    fn should_map_repository_duplicated_to_duplicate_code() {
        let error = ProductError::from_repository(RepositoryError::duplicated(), "P001");
        assert!(matches!(error, ProductError::DuplicateCode(code) if code == "P001"));
    }

    #[test]
    fn should_keep_database_errors_as_repository_errors() {
        let error = ProductError::from_repository(RepositoryError::database_error(), "P001");
        assert!(matches!(
            error,
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }

    #[test]
    fn should_flag_only_field_errors_as_validation() {
        assert!(ProductError::InvalidName.is_validation());
        assert!(ProductError::InvalidQuantity.is_validation());
        assert!(!ProductError::NotFound("P001".to_string()).is_validation());
        assert!(!ProductError::EmptyCollection.is_validation());
    }
}
