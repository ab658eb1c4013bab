use poem_openapi::Object;

use business::domain::cart::model::Stock;

#[derive(Debug, Clone, Object)]
pub struct StockResponse {
    /// Product identifier
    pub id: u64,
    /// Units available for purchase
    pub amount: u32,
}

impl From<Stock> for StockResponse {
    fn from(stock: Stock) -> Self {
        Self {
            id: stock.product_id.value(),
            amount: stock.amount,
        }
    }
}
