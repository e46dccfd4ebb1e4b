//! Persisted display-language preference.

use crate::domain::value_objects::{Locale, LocalizedText};
use crate::storage::Storage;

/// Storage key holding the locale code as a bare JSON string.
pub const LANGUAGE_KEY: &str = "language";

#[derive(Debug)]
pub struct LanguageSetting {
    locale: Locale,
    storage: Storage,
}

impl LanguageSetting {
    /// Restores the stored locale, falling back to `default` when the key is
    /// missing or holds something other than a supported locale code.
    pub fn load(storage: Storage, default: Locale) -> Self {
        let locale = storage.get::<Locale>(LANGUAGE_KEY).unwrap_or(default);
        let setting = Self { locale, storage };
        setting.persist();
        setting
    }

    pub fn locale(&self) -> Locale { self.locale }
    pub fn is_thai(&self) -> bool { self.locale == Locale::Th }

    pub fn set(&mut self, locale: Locale) {
        self.locale = locale;
        self.persist();
    }

    pub fn toggle(&mut self) -> Locale {
        self.set(self.locale.other());
        self.locale
    }

    /// Text in the current language, with the usual fallback.
    pub fn text<'a>(&self, text: &'a LocalizedText) -> &'a str { text.get(self.locale) }

    fn persist(&self) { self.storage.set(LANGUAGE_KEY, &self.locale); }
}
