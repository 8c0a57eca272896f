use super::errors::ProductError;
use super::value_objects::ProductCode;

const NAME_MIN_LENGTH: usize = 3;
const NAME_MAX_LENGTH: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub code: ProductCode,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
}

/// A validated product that storage has not yet assigned an id to.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub code: ProductCode,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
}

pub struct NewProductProps {
    pub code: String,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
}

/// The mutable fields of a product.
pub struct ProductChanges {
    pub name: String,
    pub price: f64,
    pub quantity: i32,
}

impl NewProduct {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        let code = ProductCode::parse(props.code)?;
        validate_fields(&props.name, props.price, props.quantity)?;

        Ok(Self {
            code,
            name: props.name,
            price: props.price,
            quantity: props.quantity,
        })
    }
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        code: ProductCode,
        name: String,
        price: f64,
        quantity: i32,
    ) -> Self {
        Self {
            id,
            code,
            name,
            price,
            quantity,
        }
    }

    /// Overwrites name, price and quantity. `id` and `code` never change.
    pub fn apply_changes(&mut self, changes: ProductChanges) -> Result<(), ProductError> {
        validate_fields(&changes.name, changes.price, changes.quantity)?;

        self.name = changes.name;
        self.price = changes.price;
        self.quantity = changes.quantity;
        Ok(())
    }
}

fn validate_fields(name: &str, price: f64, quantity: i32) -> Result<(), ProductError> {
    let name_length = name.chars().count();
    if name.trim().is_empty() || !(NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&name_length) {
        return Err(ProductError::InvalidName);
    }

    if !price.is_finite() || price <= 0.0 {
        return Err(ProductError::InvalidPrice);
    }

    if quantity <= 0 {
        return Err(ProductError::InvalidQuantity);
    }

    Ok(())
}
