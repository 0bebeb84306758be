//! Bilingual (English/Hindi) text values.
//!
//! Every user-facing string in the calculators is carried as a pair so that
//! both languages are always supplied. Static table text uses
//! [`BilingualText`]; text assembled at run time uses [`BilingualString`].

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;

/// Output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Hi,
}

impl Lang {
    /// ISO 639-1 code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
        }
    }
}

impl FromStr for Lang {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "hi" | "hindi" => Ok(Self::Hi),
            _ => Err(CoreError::UnknownLang(s.to_string())),
        }
    }
}

/// A static English/Hindi string pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BilingualText {
    pub en: &'static str,
    pub hi: &'static str,
}

impl BilingualText {
    pub const fn new(en: &'static str, hi: &'static str) -> Self {
        Self { en, hi }
    }

    /// The string for one language.
    pub const fn get(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::En => self.en,
            Lang::Hi => self.hi,
        }
    }

    pub fn to_owned_text(&self) -> BilingualString {
        BilingualString::new(self.en, self.hi)
    }
}

/// An owned English/Hindi string pair, for text built at run time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct BilingualString {
    pub en: String,
    pub hi: String,
}

impl BilingualString {
    pub fn new(en: impl Into<String>, hi: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            hi: hi.into(),
        }
    }

    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.en,
            Lang::Hi => &self.hi,
        }
    }

    /// Join several pairs with a separator, language by language.
    pub fn join<'a, I>(parts: I, sep: &str) -> Self
    where
        I: IntoIterator<Item = &'a BilingualText>,
    {
        let (en, hi): (Vec<&str>, Vec<&str>) = parts.into_iter().map(|t| (t.en, t.hi)).unzip();
        Self::new(en.join(sep), hi.join(sep))
    }
}

impl From<BilingualText> for BilingualString {
    fn from(t: BilingualText) -> Self {
        t.to_owned_text()
    }
}

impl Display for BilingualText {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.en, self.hi)
    }
}

impl Display for BilingualString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.en, self.hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: BilingualText = BilingualText::new("Leadership", "नेतृत्व");

    #[test]
    fn get_by_lang() {
        assert_eq!(SAMPLE.get(Lang::En), "Leadership");
        assert_eq!(SAMPLE.get(Lang::Hi), "नेतृत्व");
    }

    #[test]
    fn lang_parse() {
        assert_eq!("en".parse::<Lang>(), Ok(Lang::En));
        assert_eq!(" HI ".parse::<Lang>(), Ok(Lang::Hi));
        assert_eq!("hindi".parse::<Lang>(), Ok(Lang::Hi));
        assert!("fr".parse::<Lang>().is_err());
    }

    #[test]
    fn join_keeps_languages_apart() {
        let parts = [
            BilingualText::new("one", "एक"),
            BilingualText::new("two", "दो"),
        ];
        let joined = BilingualString::join(parts.iter(), ", ");
        assert_eq!(joined.en, "one, two");
        assert_eq!(joined.hi, "एक, दो");
    }

    #[test]
    fn owned_round_trip() {
        let owned: BilingualString = SAMPLE.into();
        assert_eq!(owned.get(Lang::En), SAMPLE.en);
        assert_eq!(owned.get(Lang::Hi), SAMPLE.hi);
    }
}
