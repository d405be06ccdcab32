use rust_decimal::Decimal;

use crate::error::StoreError;
use crate::types::{Goods, Order, OrderStatus};

/// Anything the order store can load the full order list from
pub trait OrderSource: Send + Sync {
    fn load_orders(&self) -> Result<Vec<Order>, StoreError>;
}

/// Hardcoded order data standing in for a backend. Never changes after construction.
#[derive(Debug, Clone)]
pub struct MockRepository {
    orders: Vec<Order>,
}

fn mock_order(id: &str, transaction_id: &str, date: &str, status: OrderStatus) -> Order {
    Order {
        id: id.to_string(),
        transaction_id: transaction_id.to_string(),
        date: date.to_string(),
        status,
        game_name: "Ernardd".to_string(),
        game_id: "1523523623".to_string(),
        amount: Decimal::new(15326, 2),
        currency: "USD".to_string(),
        goods: None,
    }
}

impl MockRepository {
    pub fn new() -> Self {
        let mut first = mock_order("1", "#15325", "12.06.2024", OrderStatus::Success);
        first.goods = Some(Goods {
            quantity: 40_500,
            change: 1_500,
            price: Decimal::new(27999, 2),
            original_price: Decimal::new(74999, 2),
        });

        let orders = vec![
            first,
            mock_order("2", "#15326", "13.06.2024", OrderStatus::Success),
            mock_order("3", "#15327", "14.06.2024", OrderStatus::Pending),
            mock_order("4", "#15328", "15.06.2024", OrderStatus::Success),
            mock_order("5", "#15329", "16.06.2024", OrderStatus::Failed),
        ];

        MockRepository { orders }
    }

    pub fn all(&self) -> &[Order] {
        &self.orders
    }

    pub fn find(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderSource for MockRepository {
    fn load_orders(&self) -> Result<Vec<Order>, StoreError> {
        Ok(self.orders.clone())
    }
}
