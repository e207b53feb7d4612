//! Hadith entity and related types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Hadith identifier as assigned by the content API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HadithId(u64);

impl HadithId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for HadithId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for HadithId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| DomainError::validation(format!("Invalid hadith id: '{}'", s)))
    }
}

impl fmt::Display for HadithId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Localized rendering of a hadith
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    /// Translated text
    pub text: String,
    /// Narrator name as given by the translation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrator: Option<String>,
    /// Authenticity grade (sahih, hasan, da'if, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translator: Option<String>,
}

impl Translation {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            narrator: None,
            grade: None,
            translator: None,
        }
    }

    pub fn with_narrator(mut self, narrator: impl Into<String>) -> Self {
        self.narrator = Some(narrator.into());
        self
    }

    pub fn with_grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = Some(grade.into());
        self
    }

    pub fn with_translator(mut self, translator: impl Into<String>) -> Self {
        self.translator = Some(translator.into());
        self
    }

    /// Narrator name as given; blank values count as absent
    pub fn narrator_name(&self) -> Option<&str> {
        self.narrator
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }
}

/// A single hadith record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hadith {
    pub id: HadithId,
    /// Collection name, e.g. "Sahih al-Bukhari"
    pub collection: String,
    #[serde(default)]
    pub book_number: u32,
    /// Canonical number within the collection; may carry a suffix such as "5a"
    pub hadith_number: String,
    /// Original-language text
    #[serde(default)]
    pub arabic_text: String,
    /// Chain of transmission
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isnad: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<Translation>,
}

impl Hadith {
    pub fn new(
        id: impl Into<HadithId>,
        collection: impl Into<String>,
        hadith_number: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            collection: collection.into(),
            book_number: 0,
            hadith_number: hadith_number.into(),
            arabic_text: String::new(),
            isnad: None,
            translation: None,
        }
    }

    pub fn with_book_number(mut self, book_number: u32) -> Self {
        self.book_number = book_number;
        self
    }

    pub fn with_arabic_text(mut self, text: impl Into<String>) -> Self {
        self.arabic_text = text.into();
        self
    }

    pub fn with_isnad(mut self, isnad: impl Into<String>) -> Self {
        self.isnad = Some(isnad.into());
        self
    }

    pub fn with_translation(mut self, translation: Translation) -> Self {
        self.translation = Some(translation);
        self
    }

    /// Narrator named by the translation, if any
    pub fn narrator(&self) -> Option<&str> {
        self.translation.as_ref().and_then(Translation::narrator_name)
    }

    /// Translated text, if any
    pub fn translated_text(&self) -> Option<&str> {
        self.translation.as_ref().map(|t| t.text.as_str())
    }

    /// Numeric value of the hadith number: its leading run of ASCII digits
    pub fn number_value(&self) -> Option<i64> {
        let trimmed = self.hadith_number.trim_start();
        let digits_end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());

        trimmed[..digits_end].parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hadith_id_from_str() {
        assert_eq!("42".parse::<HadithId>().unwrap(), HadithId::new(42));
        assert_eq!(" 7 ".parse::<HadithId>().unwrap(), HadithId::new(7));
        assert!("abc".parse::<HadithId>().is_err());
        assert!("-1".parse::<HadithId>().is_err());
    }

    #[test]
    fn test_number_value() {
        assert_eq!(Hadith::new(1, "c", "13").number_value(), Some(13));
        assert_eq!(Hadith::new(1, "c", "5a").number_value(), Some(5));
        assert_eq!(Hadith::new(1, "c", "intro").number_value(), None);
        assert_eq!(Hadith::new(1, "c", "").number_value(), None);
    }

    #[test]
    fn test_blank_narrator_is_absent() {
        let hadith = Hadith::new(1, "c", "1")
            .with_translation(Translation::new("text").with_narrator("   "));
        assert_eq!(hadith.narrator(), None);

        let hadith = Hadith::new(1, "c", "1")
            .with_translation(Translation::new("text").with_narrator(" Abu Huraira "));
        assert_eq!(hadith.narrator(), Some(" Abu Huraira "));
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": 42,
            "collection": "Sahih al-Bukhari",
            "bookNumber": 2,
            "hadithNumber": "13",
            "arabicText": "...",
            "translation": {
                "text": "None of you truly believes...",
                "narrator": "Anas bin Malik",
                "grade": "sahih"
            }
        }"#;

        let hadith: Hadith = serde_json::from_str(json).unwrap();

        assert_eq!(hadith.id, HadithId::new(42));
        assert_eq!(hadith.book_number, 2);
        assert_eq!(hadith.narrator(), Some("Anas bin Malik"));
        assert!(hadith.isnad.is_none());
        assert!(hadith.translation.unwrap().translator.is_none());
    }

    #[test]
    fn test_full_record_serializes_camel_case() {
        let hadith = Hadith::new(42, "Sahih al-Bukhari", "13")
            .with_book_number(2)
            .with_arabic_text("لا يؤمن أحدكم")
            .with_isnad("Shu'bah from Qatadah from Anas")
            .with_translation(
                Translation::new("None of you truly believes...")
                    .with_narrator("Anas bin Malik")
                    .with_grade("sahih")
                    .with_translator("M. Muhsin Khan"),
            );

        let json = serde_json::to_value(&hadith).unwrap();

        assert_eq!(json["bookNumber"], 2);
        assert_eq!(json["arabicText"], "لا يؤمن أحدكم");
        assert_eq!(json["isnad"], "Shu'bah from Qatadah from Anas");
        assert_eq!(json["translation"]["grade"], "sahih");
        assert_eq!(json["translation"]["translator"], "M. Muhsin Khan");

        let decoded: Hadith = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, hadith);
    }

    #[test]
    fn test_serialize_skips_missing_optionals() {
        let hadith = Hadith::new(3, "Sahih Muslim", "8");
        let json = serde_json::to_string(&hadith).unwrap();

        assert!(json.contains("\"hadithNumber\":\"8\""));
        assert!(!json.contains("translation"));
        assert!(!json.contains("isnad"));
    }
}
