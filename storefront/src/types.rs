use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Payment went through and the goods were delivered
    Success,
    /// Payment is still being processed
    Pending,
    /// Payment was declined or rolled back
    Failed,
}

impl OrderStatus {
    /// Capitalised label shown next to the status badge
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Success => "Success",
            OrderStatus::Pending => "Pending",
            OrderStatus::Failed => "Failed",
        }
    }
}

/// Digital goods attached to an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goods {
    pub quantity: u64,
    /// Quantity delta shown next to the goods, e.g. `+1,500`
    pub change: i64,
    pub price: Decimal,
    pub original_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub transaction_id: String,
    /// Display date, `DD.MM.YYYY`
    pub date: String,
    pub status: OrderStatus,
    pub game_name: String,
    pub game_id: String,
    pub amount: Decimal,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goods: Option<Goods>,
}

/// Static description of a selectable currency
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

/// Static description of a selectable language
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    #[default]
    Usd,
    Eur,
    Uah,
}

impl CurrencyCode {
    pub const ALL: [CurrencyCode; 3] = [CurrencyCode::Usd, CurrencyCode::Eur, CurrencyCode::Uah];

    pub fn details(self) -> Currency {
        match self {
            CurrencyCode::Usd => Currency {
                code: "USD",
                symbol: "$",
                name: "US Dollar",
            },
            CurrencyCode::Eur => Currency {
                code: "EUR",
                symbol: "€",
                name: "Euro",
            },
            CurrencyCode::Uah => Currency {
                code: "UAH",
                symbol: "₴",
                name: "Ukrainian Hryvnia",
            },
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LanguageCode {
    #[default]
    En,
    Ua,
    Fr,
    De,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 4] = [
        LanguageCode::En,
        LanguageCode::Ua,
        LanguageCode::Fr,
        LanguageCode::De,
    ];

    pub fn details(self) -> Language {
        match self {
            LanguageCode::En => Language {
                code: "EN",
                name: "English",
                flag: "🇬🇧",
            },
            LanguageCode::Ua => Language {
                code: "UA",
                name: "Ukrainian",
                flag: "🇺🇦",
            },
            LanguageCode::Fr => Language {
                code: "FR",
                name: "French",
                flag: "🇫🇷",
            },
            LanguageCode::De => Language {
                code: "DE",
                name: "German",
                flag: "🇩🇪",
            },
        }
    }
}

/// Returned when a code is outside the fixed currency or language set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown code: {0}")]
pub struct UnknownCode(pub String);

impl FromStr for CurrencyCode {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CurrencyCode::ALL
            .into_iter()
            .find(|code| code.details().code.eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCode(s.to_string()))
    }
}

impl FromStr for LanguageCode {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageCode::ALL
            .into_iter()
            .find(|code| code.details().code.eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCode(s.to_string()))
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.details().code)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.details().code)
    }
}

/// Placeholder account produced by login and registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl User {
    /// Mock user for an email: fixed id, name taken from the local part
    pub fn placeholder(email: &str) -> Self {
        let name = email.split('@').next().unwrap_or_default();
        User {
            id: "1".to_string(),
            email: email.to_string(),
            name: Some(name.to_string()),
        }
    }
}
