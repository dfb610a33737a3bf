//! Public advisory fixtures
//!
//! Fixed seed data for the public advisory view. Each advisory carries its
//! message in English, Hindi, and Marathi and the list of affected wards.
//! Broadcasting an advisory is simulated; no delivery happens.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use super::hospital::AlertLevel;

/// Advisory message language
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
    Mr,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[Language::En, Language::Hi, Language::Mr]
    }

    /// English name, for display and log messages
    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "Hindi",
            Language::Mr => "Marathi",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::En => write!(f, "en"),
            Language::Hi => write!(f, "hi"),
            Language::Mr => write!(f, "mr"),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "hi" => Ok(Language::Hi),
            "mr" => Ok(Language::Mr),
            other => Err(format!("unsupported language code: {}", other)),
        }
    }
}

/// A public-facing health advisory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Advisory {
    /// Stable identifier used in route paths
    pub id: String,
    pub title: String,
    pub severity: AlertLevel,
    /// Affected ward names
    pub wards: Vec<String>,
    /// Message text per language
    pub translations: BTreeMap<Language, String>,
}

impl Advisory {
    /// Message text in the requested language
    pub fn message(&self, lang: Language) -> Option<&str> {
        self.translations.get(&lang).map(String::as_str)
    }
}

/// The fixed list of active advisories
pub fn advisories() -> Vec<Advisory> {
    fn a(
        id: &str,
        title: &str,
        severity: AlertLevel,
        wards: &[&str],
        en: &str,
        hi: &str,
        mr: &str,
    ) -> Advisory {
        let mut translations = BTreeMap::new();
        translations.insert(Language::En, en.to_string());
        translations.insert(Language::Hi, hi.to_string());
        translations.insert(Language::Mr, mr.to_string());
        Advisory {
            id: id.to_string(),
            title: title.to_string(),
            severity,
            wards: wards.iter().map(|w| w.to_string()).collect(),
            translations,
        }
    }

    vec![
        a(
            "dengue-warning",
            "Dengue Outbreak Warning",
            AlertLevel::High,
            &["Kurla", "Sion", "Dharavi"],
            "Dengue cases are rising after heavy rainfall. Remove stagnant water \
             around your home, use mosquito repellent, and seek medical help if \
             fever persists beyond two days.",
            "भारी बारिश के बाद डेंगू के मामले बढ़ रहे हैं। घर के आसपास जमा पानी हटाएं, \
             मच्छर भगाने वाली दवा का उपयोग करें, और दो दिन से अधिक बुखार रहने पर \
             डॉक्टर से संपर्क करें।",
            "मुसळधार पावसानंतर डेंग्यूचे रुग्ण वाढत आहेत. घराभोवती साचलेले पाणी काढून \
             टाका, डास प्रतिबंधक वापरा, आणि दोन दिवसांपेक्षा जास्त ताप राहिल्यास \
             वैद्यकीय मदत घ्या.",
        ),
        a(
            "air-quality-alert",
            "Poor Air Quality Alert",
            AlertLevel::Moderate,
            &["Andheri East", "Chembur", "Mazgaon"],
            "AQI levels are in the poor band. Limit outdoor activity, wear an N95 \
             mask when outside, and keep children and the elderly indoors during \
             peak traffic hours.",
            "वायु गुणवत्ता खराब स्तर पर है। बाहरी गतिविधि सीमित करें, बाहर N95 मास्क \
             पहनें, और व्यस्त यातायात के समय बच्चों और बुजुर्गों को घर के अंदर रखें।",
            "हवेची गुणवत्ता खराब पातळीवर आहे. बाहेरील हालचाली मर्यादित करा, बाहेर \
             N95 मास्क घाला, आणि गर्दीच्या वेळी लहान मुले व वृद्धांना घरात ठेवा.",
        ),
        a(
            "waterlogging-advisory",
            "Waterlogging Advisory",
            AlertLevel::Low,
            &["Parel", "Hindmata", "Milan Subway"],
            "Low-lying areas may be waterlogged after overnight rain. Avoid wading \
             through stagnant water and plan alternate routes for your commute.",
            "रात की बारिश के बाद निचले इलाकों में जलभराव हो सकता है। जमा पानी से \
             गुजरने से बचें और यात्रा के लिए वैकल्पिक मार्ग चुनें।",
            "रात्रीच्या पावसानंतर सखल भागात पाणी साचू शकते. साचलेल्या पाण्यातून जाणे \
             टाळा आणि प्रवासासाठी पर्यायी मार्ग निवडा.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_advisory_has_all_translations() {
        for advisory in advisories() {
            for lang in Language::all() {
                let message = advisory.message(*lang);
                assert!(
                    message.is_some_and(|m| !m.is_empty()),
                    "{} missing {} translation",
                    advisory.id,
                    lang.name()
                );
            }
        }
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("mr".parse::<Language>().unwrap(), Language::Mr);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_advisory_ids_unique() {
        let list = advisories();
        for (i, a) in list.iter().enumerate() {
            for b in &list[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_every_advisory_names_wards() {
        for advisory in advisories() {
            assert!(!advisory.wards.is_empty(), "{} has no wards", advisory.id);
        }
    }
}
