//! Display helpers for the order views.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::{CurrencyCode, Goods, Order};

pub const DEFAULT_GOODS_QUANTITY: u64 = 40_500;
pub const DEFAULT_GOODS_STEP: u64 = 1_500;

/// Symbol for a currency code, falling back to the code itself for unknown ones
pub fn currency_symbol(code: &str) -> String {
    code.parse::<CurrencyCode>()
        .map(|c| c.details().symbol.to_string())
        .unwrap_or_else(|_| code.to_string())
}

/// `$153.26`, halves round away from zero
pub fn format_amount(amount: Decimal, currency: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{}{:.2}", currency_symbol(currency), rounded)
}

/// `$153,26`, as shown in the order detail view
pub fn format_amount_comma(amount: Decimal, currency: &str) -> String {
    format_amount(amount, currency).replace('.', ",")
}

pub fn order_amount(order: &Order) -> String {
    format_amount(order.amount, &order.currency)
}

/// Groups thousands with commas: `40500` becomes `40,500`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Signed, grouped delta: `+1,500`
pub fn format_change(change: i64) -> String {
    let sign = if change < 0 { '-' } else { '+' };
    format!("{sign}{}", group_thousands(change.unsigned_abs()))
}

/// Goods quantity selector on the order detail page. Always steps by
/// `DEFAULT_GOODS_STEP`; the goods `change` is display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityStepper {
    quantity: u64,
    step: u64,
}

impl QuantityStepper {
    pub fn for_goods(goods: Option<&Goods>) -> Self {
        let quantity = goods
            .map(|g| g.quantity)
            .filter(|q| *q > 0)
            .unwrap_or(DEFAULT_GOODS_QUANTITY);
        QuantityStepper {
            quantity,
            step: DEFAULT_GOODS_STEP,
        }
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    pub fn increment(&mut self) -> u64 {
        self.quantity = self.quantity.saturating_add(self.step);
        self.quantity
    }
}
