use sqlx::FromRow;

use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductCode;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            ProductCode::from_repository(self.code),
            self.name,
            self.price,
            self.quantity,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_row_into_domain_product() {
        let entity = ProductEntity {
            id: 42,
            code: "P001".to_string(),
            name: "Camisa".to_string(),
            price: 50000.0,
            quantity: 10,
        };

        let product = entity.into_domain();

        assert_eq!(product.id, 42);
        assert_eq!(product.code.as_str(), "P001");
        assert_eq!(product.name, "Camisa");
        assert_eq!(product.price, 50000.0);
        assert_eq!(product.quantity, 10);
    }
}
