use poem_openapi::Object;

use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Unique product code (3-20 characters)
    #[oai(validator(min_length = 3, max_length = 20))]
    pub code: String,
    /// Product name (3-50 characters)
    #[oai(validator(min_length = 3, max_length = 50))]
    pub name: String,
    /// Unit price (greater than zero)
    pub price: f64,
    /// Units in stock (greater than zero)
    pub quantity: i32,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// Product code; must equal the code in the path
    pub code: String,
    /// Product name (3-50 characters)
    #[oai(validator(min_length = 3, max_length = 50))]
    pub name: String,
    /// Unit price (greater than zero)
    pub price: f64,
    /// Units in stock (greater than zero)
    pub quantity: i32,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Server-assigned identifier
    pub id: i64,
    /// Unique product code
    pub code: String,
    /// Product name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Units in stock
    pub quantity: i32,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            code: product.code.to_string(),
            name: product.name,
            price: product.price,
            quantity: product.quantity,
        }
    }
}

// --- Success envelopes: every route answers `{ message, payload }` ---

#[derive(Debug, Clone, Object)]
pub struct ProductEnvelope {
    pub message: String,
    pub payload: ProductResponse,
}

impl ProductEnvelope {
    pub fn new(message: &str, product: Product) -> Self {
        Self {
            message: message.to_string(),
            payload: product.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductListEnvelope {
    pub message: String,
    pub payload: Vec<ProductResponse>,
}

#[derive(Debug, Clone, Object)]
pub struct DeletedProductResponse {
    /// Code of the removed product
    pub code: String,
}

#[derive(Debug, Clone, Object)]
pub struct DeletedProductEnvelope {
    pub message: String,
    pub payload: DeletedProductResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::value_objects::ProductCode;

    #[test]
    fn should_expose_every_product_field() {
        let product = Product::from_repository(
            3,
            ProductCode::from_repository("P003"),
            "Pantalon".to_string(),
            80000.0,
            4,
        );

        let response = ProductResponse::from(product);

        assert_eq!(response.id, 3);
        assert_eq!(response.code, "P003");
        assert_eq!(response.name, "Pantalon");
        assert_eq!(response.price, 80000.0);
        assert_eq!(response.quantity, 4);
    }
}
