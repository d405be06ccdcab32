pub mod error;
pub mod format;
pub mod latency;
pub mod order_store;
pub mod repository;
pub mod settings;
pub mod types;
pub mod user_store;
pub mod validation;

pub use error::StoreError;
pub use latency::Latency;
pub use order_store::{OrderState, OrderStore};
pub use repository::{MockRepository, OrderSource};
pub use settings::SettingsStore;
pub use types::{Currency, CurrencyCode, Goods, Language, LanguageCode, Order, OrderStatus, User};
pub use user_store::UserStore;
