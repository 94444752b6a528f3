//! Display languages and bilingual text.
//!
//! Every user-visible string is a [`Tr`] pair looked up at render time, so a
//! language change re-renders text without any cached translations.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

/// A display language the guest can pick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    English,
    Telugu,
}

impl Language {
    /// ISO 639-1 code, also used for the `lang` attribute.
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Telugu => "te",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::English),
            "te" => Some(Self::Telugu),
            _ => None,
        }
    }

    /// The other language.
    pub fn other(self) -> Self {
        match self {
            Self::English => Self::Telugu,
            Self::Telugu => Self::English,
        }
    }

    /// Name of this language written in itself.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Telugu => "తెలుగు",
        }
    }
}

/// A string in both display languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tr {
    pub en: &'static str,
    pub te: &'static str,
}

impl Tr {
    pub const fn new(en: &'static str, te: &'static str) -> Self {
        Self { en, te }
    }

    /// Same text in both languages (names, phone numbers, "RSVP").
    pub const fn same(text: &'static str) -> Self {
        Self { en: text, te: text }
    }

    pub fn get(self, lang: Language) -> &'static str {
        match lang {
            Language::English => self.en,
            Language::Telugu => self.te,
        }
    }
}

/// Pick from a runtime bilingual caption.
pub fn caption(text: &wire::BilingualText, lang: Language) -> &str {
    match lang {
        Language::English => &text.en,
        Language::Telugu => &text.te,
    }
}
