use serde::Deserialize;

use business::domain::cart::model::{ProductDetails, Stock};
use business::domain::shared::value_objects::ProductId;

/// Stock entry as served by `GET /stock` and `GET /stock/{id}`.
#[derive(Debug, Deserialize)]
pub struct StockDto {
    pub id: u64,
    pub amount: u32,
}

impl StockDto {
    pub fn into_domain(self) -> Stock {
        Stock::new(ProductId::new(self.id), self.amount)
    }
}

/// Catalog product as served by `GET /products/{id}`.
#[derive(Debug, Deserialize)]
pub struct ProductDto {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub image: String,
}

impl ProductDto {
    pub fn into_domain(self) -> ProductDetails {
        ProductDetails {
            title: self.title,
            price: self.price,
            image: self.image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_stock_listing() {
        let body = r#"[{"id":1,"amount":3},{"id":2,"amount":5}]"#;

        let stock: Vec<StockDto> = serde_json::from_str(body).unwrap();
        let stock: Vec<Stock> = stock.into_iter().map(StockDto::into_domain).collect();

        assert_eq!(
            stock,
            vec![
                Stock::new(ProductId::new(1), 3),
                Stock::new(ProductId::new(2), 5),
            ]
        );
    }

    #[test]
    fn should_reject_negative_stock_amount() {
        let result = serde_json::from_str::<StockDto>(r#"{"id":1,"amount":-1}"#);

        assert!(result.is_err());
    }

    #[test]
    fn should_decode_product_ignoring_unknown_fields() {
        let body = r#"{
            "id": 5,
            "title": "Tênis de Caminhada Leve Confortável",
            "price": 179.9,
            "image": "https://cdn.example.com/5.jpg",
            "priceFormatted": "R$ 179,90"
        }"#;

        let product: ProductDto = serde_json::from_str(body).unwrap();
        assert_eq!(product.id, 5);

        let details = product.into_domain();
        assert_eq!(details.title, "Tênis de Caminhada Leve Confortável");
        assert_eq!(details.price, 179.9);
    }
}
