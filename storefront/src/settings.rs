use serde::Serialize;

use crate::types::{Currency, CurrencyCode, Language, LanguageCode};

/// Serializable view of the settings store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsSnapshot {
    pub current_currency: Currency,
    pub current_language: Language,
    pub is_currency_menu_open: bool,
    pub is_language_menu_open: bool,
}

/// Active currency and language plus the two selector menus.
/// At most one of the menus is open at any time.
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    currency: CurrencyCode,
    language: LanguageCode,
    currency_menu_open: bool,
    language_menu_open: bool,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn currencies() -> [Currency; 3] {
        CurrencyCode::ALL.map(CurrencyCode::details)
    }

    pub fn languages() -> [Language; 4] {
        LanguageCode::ALL.map(LanguageCode::details)
    }

    pub fn currency(&self) -> CurrencyCode {
        self.currency
    }

    pub fn language(&self) -> LanguageCode {
        self.language
    }

    pub fn is_currency_menu_open(&self) -> bool {
        self.currency_menu_open
    }

    pub fn is_language_menu_open(&self) -> bool {
        self.language_menu_open
    }

    pub fn set_currency(&mut self, currency: CurrencyCode) {
        self.currency = currency;
        self.currency_menu_open = false;
    }

    pub fn set_language(&mut self, language: LanguageCode) {
        self.language = language;
        self.language_menu_open = false;
    }

    pub fn toggle_currency_menu(&mut self) {
        self.currency_menu_open = !self.currency_menu_open;
        self.language_menu_open = false;
    }

    pub fn toggle_language_menu(&mut self) {
        self.language_menu_open = !self.language_menu_open;
        self.currency_menu_open = false;
    }

    pub fn close_all_menus(&mut self) {
        self.currency_menu_open = false;
        self.language_menu_open = false;
    }

    pub fn snapshot(&self) -> SettingsSnapshot {
        SettingsSnapshot {
            current_currency: self.currency.details(),
            current_language: self.language.details(),
            is_currency_menu_open: self.currency_menu_open,
            is_language_menu_open: self.language_menu_open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let settings = SettingsStore::new();
        assert_eq!(settings.currency(), CurrencyCode::Usd);
        assert_eq!(settings.language(), LanguageCode::En);
        assert!(!settings.is_currency_menu_open());
        assert!(!settings.is_language_menu_open());
    }

    #[test]
    fn test_toggle_language_closes_currency_menu() {
        let mut settings = SettingsStore::new();
        settings.toggle_currency_menu();
        assert!(settings.is_currency_menu_open());

        settings.toggle_language_menu();
        assert!(!settings.is_currency_menu_open());
        assert!(settings.is_language_menu_open());
    }

    #[test]
    fn test_toggle_twice_closes_menu() {
        let mut settings = SettingsStore::new();
        settings.toggle_language_menu();
        settings.toggle_language_menu();
        assert!(!settings.is_language_menu_open());
    }

    #[test]
    fn test_set_currency_closes_currency_menu() {
        for code in CurrencyCode::ALL {
            let mut settings = SettingsStore::new();
            settings.toggle_currency_menu();
            settings.set_currency(code);
            assert_eq!(settings.currency(), code);
            assert!(!settings.is_currency_menu_open());
        }
    }

    #[test]
    fn test_set_language_leaves_currency_menu_alone() {
        let mut settings = SettingsStore::new();
        settings.toggle_currency_menu();
        settings.set_language(LanguageCode::De);
        assert_eq!(settings.language(), LanguageCode::De);
        assert!(settings.is_currency_menu_open());
    }

    #[test]
    fn test_menus_never_open_together() {
        let mut settings = SettingsStore::new();
        let steps: [fn(&mut SettingsStore); 5] = [
            SettingsStore::toggle_currency_menu,
            SettingsStore::toggle_language_menu,
            SettingsStore::toggle_language_menu,
            SettingsStore::toggle_currency_menu,
            SettingsStore::close_all_menus,
        ];
        for step in steps.iter().cycle().take(40) {
            step(&mut settings);
            assert!(!(settings.is_currency_menu_open() && settings.is_language_menu_open()));
        }
    }

    #[test]
    fn test_close_all_menus() {
        let mut settings = SettingsStore::new();
        settings.toggle_language_menu();
        settings.close_all_menus();
        assert!(!settings.is_language_menu_open());
        assert!(!settings.is_currency_menu_open());
    }

    #[test]
    fn test_fixed_sets() {
        let codes: Vec<&str> = SettingsStore::currencies().iter().map(|c| c.code).collect();
        assert_eq!(codes, vec!["USD", "EUR", "UAH"]);
        assert_eq!(SettingsStore::languages().len(), 4);
    }

    #[test]
    fn test_snapshot_serialization() {
        let mut settings = SettingsStore::new();
        settings.set_currency(CurrencyCode::Eur);
        settings.toggle_language_menu();

        let value = serde_json::to_value(settings.snapshot()).unwrap();
        assert_eq!(
            value,
            json!({
                "currentCurrency": { "code": "EUR", "symbol": "€", "name": "Euro" },
                "currentLanguage": { "code": "EN", "name": "English", "flag": "🇬🇧" },
                "isCurrencyMenuOpen": false,
                "isLanguageMenuOpen": true,
            })
        );
    }
}
