use anyhow::{Context, Result};
use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_LANG: &str = "ko";

static BUNDLED: &[(&str, &str)] = &[
    ("ko", include_str!("../locales/ko.json")),
    ("en", include_str!("../locales/en.json")),
];

#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("missing translation for key: {key} in {lang}.json")]
    MissingLocalizedString { key: String, lang: String },

    #[error("no bundled translations for {0}")]
    UnknownLanguage(String),
}

/// Flat key → string table for one language.
#[derive(Debug, Clone)]
pub struct Locale {
    lang: String,
    strings: HashMap<String, String>,
}

impl Locale {
    pub fn from_json(lang: &str, raw: &str) -> Result<Self> {
        let strings = serde_json::from_str(raw)
            .with_context(|| format!("parsing translations for {}", lang))?;
        Ok(Self {
            lang: lang.to_string(),
            strings,
        })
    }

    pub fn bundled(lang: &str) -> Result<Self> {
        let (_, raw) = BUNDLED
            .iter()
            .find(|(l, _)| *l == lang)
            .ok_or_else(|| LocaleError::UnknownLanguage(lang.to_string()))?;
        Self::from_json(lang, raw)
    }

    /// Reads `<dir>/<lang>.json` when a directory is given, else the bundled table.
    pub fn open(lang: &str, dir: Option<&Path>) -> Result<Self> {
        match dir {
            Some(dir) => {
                let path = dir.join(format!("{}.json", lang));
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading translations {}", path.display()))?;
                Self::from_json(lang, &raw)
            }
            None => Self::bundled(lang),
        }
    }

    /// Like [`Locale::open`], retrying with the default language on failure.
    pub fn load(lang: &str, dir: Option<&Path>) -> Result<Self> {
        match Self::open(lang, dir) {
            Ok(locale) => Ok(locale),
            Err(e) if lang != DEFAULT_LANG => {
                log::error!("Error loading translations: {:#}", e);
                Self::open(DEFAULT_LANG, dir)
            }
            Err(e) => Err(e),
        }
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn try_get(&self, key: &str) -> Result<&str, LocaleError> {
        self.strings
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| LocaleError::MissingLocalizedString {
                key: key.to_string(),
                lang: self.lang.clone(),
            })
    }

    /// Translation for `key`, or the key itself when missing.
    pub fn get<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        match self.try_get(key) {
            Ok(s) => Cow::Borrowed(s),
            Err(e) => {
                log::warn!("{}", e);
                Cow::Borrowed(key)
            }
        }
    }
}
