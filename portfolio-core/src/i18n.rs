//! Bilingual dictionary.
//!
//! Lookups follow a resolve-or-skip contract: anything that cannot be
//! resolved (unknown language, unknown key, `null` value, wrong entry kind)
//! comes back as `None` and the caller leaves the page as it is.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The two languages the page ships with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Zh,
    En,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::Zh, Lang::En];

    pub fn code(self) -> &'static str {
        match self {
            Lang::Zh => "zh",
            Lang::En => "en",
        }
    }

    /// Parse a language code. Regional variants (`zh-TW`, `en_US`) map onto
    /// the base language; anything else is rejected.
    pub fn from_code(code: &str) -> Option<Lang> {
        let base = code.trim().split(['-', '_']).next().unwrap_or("");
        if base.eq_ignore_ascii_case("zh") {
            Some(Lang::Zh)
        } else if base.eq_ignore_ascii_case("en") {
            Some(Lang::En)
        } else {
            None
        }
    }

    pub fn other(self) -> Lang {
        match self {
            Lang::Zh => Lang::En,
            Lang::En => Lang::Zh,
        }
    }

    /// Label of the language toggle while `self` is active. It always names
    /// the language a click would switch to first.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Lang::Zh => "EN / 中",
            Lang::En => "中 / EN",
        }
    }
}

/// One picture of a detail gallery. Both fields may be missing in stored
/// data; such an entry still renders, with an empty source or caption.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    #[serde(default)]
    pub src: String,
    #[serde(default)]
    pub caption: String,
}

/// A dictionary value: display text (may carry HTML) or an image list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Text(String),
    Images(Vec<ImageEntry>),
}

type Table = HashMap<String, Option<Entry>>;

/// Immutable `language -> key -> entry` mapping.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    tables: HashMap<Lang, Table>,
}

const BUNDLED: &str = include_str!("../../translations.json");

impl Dictionary {
    /// Parse `{ "zh": { key: value }, "en": { ... } }`. Tables for language
    /// codes other than the two supported ones are ignored.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let raw: HashMap<String, Table> = serde_json::from_str(text)?;
        let tables = raw
            .into_iter()
            .filter_map(|(code, table)| Lang::from_code(&code).map(|lang| (lang, table)))
            .collect();
        Ok(Dictionary { tables })
    }

    /// The dictionary compiled into the binary.
    pub fn bundled() -> Result<Self, serde_json::Error> {
        Self::from_json(BUNDLED)
    }

    fn entry(&self, lang: Lang, key: &str) -> Option<&Entry> {
        self.tables.get(&lang)?.get(key)?.as_ref()
    }

    pub fn text(&self, lang: Lang, key: &str) -> Option<&str> {
        match self.entry(lang, key)? {
            Entry::Text(s) => Some(s),
            Entry::Images(_) => None,
        }
    }

    pub fn images(&self, lang: Lang, key: &str) -> Option<&[ImageEntry]> {
        match self.entry(lang, key)? {
            Entry::Images(list) => Some(list),
            Entry::Text(_) => None,
        }
    }

    /// Image list serialised the way it is stored on the page (`data-images`).
    pub fn images_json(&self, lang: Lang, key: &str) -> Option<String> {
        serde_json::to_string(self.images(lang, key)?).ok()
    }

    /// Keys defined for `lang`, in no particular order.
    pub fn keys(&self, lang: Lang) -> impl Iterator<Item = &str> {
        self.tables
            .get(&lang)
            .into_iter()
            .flat_map(|t| t.keys().map(String::as_str))
    }

    pub fn is_empty(&self) -> bool {
        self.tables.values().all(HashMap::is_empty)
    }
}
