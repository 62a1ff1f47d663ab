//! Scenario domain models.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::catalog::CatalogError;

/// The simulated medium a scenario is presented in.
///
/// Each kind corresponds to one fraud-simulation catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulationKind {
    Sms,
    Email,
    Call,
    Browser,
    Crypto,
    Romance,
    Social,
}

impl SimulationKind {
    /// All known simulation kinds, in presentation order.
    pub const ALL: [SimulationKind; 7] = [
        SimulationKind::Sms,
        SimulationKind::Email,
        SimulationKind::Call,
        SimulationKind::Browser,
        SimulationKind::Crypto,
        SimulationKind::Romance,
        SimulationKind::Social,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SimulationKind::Sms => "sms",
            SimulationKind::Email => "email",
            SimulationKind::Call => "call",
            SimulationKind::Browser => "browser",
            SimulationKind::Crypto => "crypto",
            SimulationKind::Romance => "romance",
            SimulationKind::Social => "social",
        }
    }

    /// Achievement id granted for a perfect run in this category.
    pub fn expert_achievement_id(&self) -> String {
        format!("{}-expert", self.as_str())
    }
}

impl fmt::Display for SimulationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SimulationKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "sms" => Ok(SimulationKind::Sms),
            "email" => Ok(SimulationKind::Email),
            "call" => Ok(SimulationKind::Call),
            "browser" => Ok(SimulationKind::Browser),
            "crypto" => Ok(SimulationKind::Crypto),
            "romance" => Ok(SimulationKind::Romance),
            "social" => Ok(SimulationKind::Social),
            other => Err(CatalogError::UnknownKind(other.to_string())),
        }
    }
}

/// Display payload for one scenario, structured per medium.
///
/// The quiz engine never interprets this content; shells render the fields.
/// Content is structured rather than raw markup so no presentation layer
/// ever injects author-supplied markup directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ScenarioContent {
    #[serde(rename_all = "camelCase")]
    SmsMessage { sender: String, body: String },
    #[serde(rename_all = "camelCase")]
    EmailMessage {
        from_address: String,
        subject: String,
        body: String,
        link_url: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    PhoneCall {
        caller_id: String,
        script_lines: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    WebPage {
        url: String,
        uses_https: bool,
        page_title: String,
        form_fields: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    CryptoOffer {
        platform_name: String,
        pitch: String,
        promised_return_pct: Option<u32>,
    },
    #[serde(rename_all = "camelCase")]
    RomanceProfile {
        display_name: String,
        claimed_occupation: String,
        messages: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    SocialPost {
        author_handle: String,
        text: String,
        call_to_action: Option<String>,
    },
}

/// One fraud/security situation to be judged scam or legitimate.
///
/// `is_scam` is the authored ground truth, fixed at catalog construction
/// and never mutated. `flags` are red flags when `is_scam` is true and
/// positive indicators otherwise; they are rendered verbatim by shells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: String,
    pub kind: SimulationKind,
    pub content: ScenarioContent,
    pub is_scam: bool,
    pub explanation: String,
    pub flags: Vec<String>,
}
