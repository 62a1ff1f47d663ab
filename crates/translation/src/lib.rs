//! Simulated text translation helpers.
//!
//! The product offers translated UI strings without any real translation
//! backend: a built-in phrase table covers the fixed strings the
//! simulations use, and everything else passes through unchanged, marked
//! as simulated. Shells can swap this for a real service without touching
//! the quiz engine.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

/// Languages the phrase table covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
    Fr,
    Hi,
}

impl Language {
    pub fn as_tag(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::Hi => "hi",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            "fr" => Ok(Language::Fr),
            "hi" => Ok(Language::Hi),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language tag: {}", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

/// The result of a (simulated) translation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub text: String,
    pub language: Language,
    /// Always true here: the text came from the built-in table or passed
    /// through, not from a translation backend.
    pub simulated: bool,
}

// (english, spanish, french, hindi) rows for the fixed UI strings.
const PHRASES: &[(&str, &str, &str, &str)] = &[
    ("Scam", "Estafa", "Arnaque", "Ghotala"),
    ("Legitimate", "Legítimo", "Légitime", "Vaidh"),
    ("Correct!", "¡Correcto!", "Correct !", "Sahi!"),
    ("Incorrect", "Incorrecto", "Incorrect", "Galat"),
    ("Continue", "Continuar", "Continuer", "Aage badhen"),
    ("Restart", "Reiniciar", "Recommencer", "Phir se shuru karen"),
    ("Your score", "Tu puntuación", "Votre score", "Aapka score"),
    ("Red flags", "Señales de alerta", "Signaux d'alerte", "Khatre ke sanket"),
    (
        "Scenario unavailable",
        "Escenario no disponible",
        "Scénario indisponible",
        "Paridrishya uplabdh nahin",
    ),
];

/// Simulated translator over the built-in phrase table.
#[derive(Debug, Default, Clone)]
pub struct Translator;

impl Translator {
    pub fn new() -> Self {
        Translator
    }

    /// Translates a known UI string; unknown text passes through unchanged.
    pub fn translate(&self, text: &str, target: Language) -> Translation {
        let translated = PHRASES
            .iter()
            .find(|(en, _, _, _)| *en == text)
            .map(|&(en, es, fr, hi)| match target {
                Language::En => en,
                Language::Es => es,
                Language::Fr => fr,
                Language::Hi => hi,
            });

        let text = match translated {
            Some(t) => t.to_string(),
            None => {
                debug!("No {} phrase for {:?}, passing through", target, text);
                text.to_string()
            }
        };

        Translation {
            text,
            language: target,
            simulated: true,
        }
    }

    /// The languages the table covers.
    pub fn supported_languages(&self) -> Vec<Language> {
        vec![Language::En, Language::Es, Language::Fr, Language::Hi]
    }
}
