//! Built-in scenario catalogs.
//!
//! Each simulation kind ships with one authored catalog. The catalogs are
//! data, not components: adding a simulation type means adding scenarios
//! here, not writing new engine code.

use std::sync::Arc;

use super::catalog::ScenarioCatalog;
use super::scenarios_model::{Scenario, ScenarioContent, SimulationKind};

fn scenario(
    id: &str,
    kind: SimulationKind,
    content: ScenarioContent,
    is_scam: bool,
    explanation: &str,
    flags: &[&str],
) -> Scenario {
    Scenario {
        id: id.to_string(),
        kind,
        content,
        is_scam,
        explanation: explanation.to_string(),
        flags: flags.iter().map(|f| f.to_string()).collect(),
    }
}

fn sms_scenarios() -> Vec<Scenario> {
    let kind = SimulationKind::Sms;
    vec![
        scenario(
            "sms-parcel-fee",
            kind,
            ScenarioContent::SmsMessage {
                sender: "+44 7700 900123".to_string(),
                body: "Your parcel is held at customs. Pay the $2.99 release fee within 24h: \
                       http://track-parcel-fee.info/claim"
                    .to_string(),
            },
            true,
            "Delivery services never collect customs fees over SMS links. The urgency, the tiny \
             fee designed to capture card details, and the lookalike domain are classic smishing.",
            &[
                "Unknown international sender",
                "Artificial 24-hour deadline",
                "Non-official tracking domain",
                "Requests payment via link",
            ],
        ),
        scenario(
            "sms-bank-otp",
            kind,
            ScenarioContent::SmsMessage {
                sender: "SECUREBANK".to_string(),
                body: "SecureBank: your one-time code is 482913. It expires in 10 minutes. \
                       Never share this code with anyone, including bank staff."
                    .to_string(),
            },
            false,
            "A genuine one-time passcode message: it asks for nothing, links nowhere, and \
             explicitly warns against sharing the code.",
            &[
                "No link or callback number",
                "No request for action",
                "Warns against sharing the code",
            ],
        ),
        scenario(
            "sms-family-emergency",
            kind,
            ScenarioContent::SmsMessage {
                sender: "+1 555 0142".to_string(),
                body: "Mom it's me, I broke my phone. This is my new number. I need $400 for \
                       repairs today, can you send it to this wallet? Don't call, mic is broken."
                    .to_string(),
            },
            true,
            "The 'hi mum' scam: a new number, an urgent money request, and an excuse that blocks \
             the one check that would expose it - calling back.",
            &[
                "Unverified new number",
                "Urgent money request",
                "Excuse preventing voice verification",
                "Payment to an anonymous wallet",
            ],
        ),
        scenario(
            "sms-appointment-reminder",
            kind,
            ScenarioContent::SmsMessage {
                sender: "CITYCLINIC".to_string(),
                body: "Reminder: you have an appointment at City Clinic on Thu 10:30. Reply C to \
                       confirm or call us on our main line to reschedule."
                    .to_string(),
            },
            false,
            "A routine reminder that references an existing relationship, requests no payment or \
             personal data, and points to a phone number you can verify independently.",
            &[
                "References an existing appointment",
                "No payment or credential request",
                "Contact via publicly verifiable number",
            ],
        ),
    ]
}

fn email_scenarios() -> Vec<Scenario> {
    let kind = SimulationKind::Email;
    vec![
        scenario(
            "email-account-suspension",
            kind,
            ScenarioContent::EmailMessage {
                from_address: "security@paypa1-support.com".to_string(),
                subject: "URGENT: Your account will be suspended in 24 hours".to_string(),
                body: "Dear customer, unusual activity was detected. Verify your identity \
                       immediately or your account will be permanently locked."
                    .to_string(),
                link_url: Some("http://paypa1-support.com/verify".to_string()),
            },
            true,
            "The sender domain spoofs a payment brand with a digit-for-letter swap, the greeting \
             is generic, and the deadline pressures you into clicking before thinking.",
            &[
                "Lookalike sender domain (paypa1)",
                "Generic 'Dear customer' greeting",
                "Threat of account suspension",
                "Credential-harvesting link",
            ],
        ),
        scenario(
            "email-invoice-statement",
            kind,
            ScenarioContent::EmailMessage {
                from_address: "billing@utilities.gov.example".to_string(),
                subject: "Your March statement is available".to_string(),
                body: "Hello Jordan, your monthly statement is ready in your online account. \
                       Log in via our website or mobile app to view it. No action is required."
                    .to_string(),
                link_url: None,
            },
            false,
            "A legitimate statement notice: personalized, no embedded login link, and it directs \
             you to sign in through the official channel on your own.",
            &[
                "Addresses you by name",
                "No embedded login link",
                "No urgency or threats",
            ],
        ),
        scenario(
            "email-prize-claim",
            kind,
            ScenarioContent::EmailMessage {
                from_address: "claims@intl-lottery-board.net".to_string(),
                subject: "Congratulations! You won $2,500,000".to_string(),
                body: "You were selected in the international email lottery. To release your \
                       winnings, send a copy of your passport and the $150 processing fee."
                    .to_string(),
                link_url: Some("http://intl-lottery-board.net/claim".to_string()),
            },
            true,
            "You cannot win a lottery you never entered. Advance-fee fraud always asks for a \
             small payment or identity documents to 'release' money that does not exist.",
            &[
                "Prize for a lottery never entered",
                "Advance processing fee",
                "Requests identity documents",
            ],
        ),
    ]
}

fn call_scenarios() -> Vec<Scenario> {
    let kind = SimulationKind::Call;
    vec![
        scenario(
            "call-tech-support",
            kind,
            ScenarioContent::PhoneCall {
                caller_id: "Unknown".to_string(),
                script_lines: vec![
                    "Hello, I'm calling from Microsoft technical support.".to_string(),
                    "Our servers detected a dangerous virus on your computer.".to_string(),
                    "Please install the remote access tool I'm about to send you.".to_string(),
                    "There is a one-time $99 fix fee, payable by gift card.".to_string(),
                ],
            },
            true,
            "Software vendors do not monitor personal computers or cold-call about viruses. \
             Remote-access requests and gift-card payments are the two loudest alarm bells on \
             any call.",
            &[
                "Unsolicited 'virus detected' call",
                "Requests remote access",
                "Payment by gift card",
                "Caller ID hidden",
            ],
        ),
        scenario(
            "call-fraud-team-verification",
            kind,
            ScenarioContent::PhoneCall {
                caller_id: "SecureBank Fraud Team".to_string(),
                script_lines: vec![
                    "This is SecureBank's fraud team about a flagged card transaction.".to_string(),
                    "We will never ask for your PIN or full password.".to_string(),
                    "If you prefer, hang up and call the number on the back of your card."
                        .to_string(),
                ],
            },
            false,
            "A genuine fraud-team call invites you to hang up and call back on the official \
             number, and never asks for PINs, passwords, or transfers.",
            &[
                "Offers independent callback verification",
                "Never asks for PIN or password",
                "No pressure to act during the call",
            ],
        ),
        scenario(
            "call-tax-arrest-threat",
            kind,
            ScenarioContent::PhoneCall {
                caller_id: "+1 202 555 0188".to_string(),
                script_lines: vec![
                    "This is the tax authority. You owe back taxes of $4,230.".to_string(),
                    "A warrant for your arrest will be issued within the hour.".to_string(),
                    "Stay on the line and settle now with prepaid vouchers.".to_string(),
                ],
            },
            true,
            "Tax agencies communicate by letter and never threaten immediate arrest or demand \
             prepaid vouchers. Keeping you on the line prevents you from verifying.",
            &[
                "Arrest threat with deadline",
                "Payment by prepaid vouchers",
                "Insists you stay on the line",
            ],
        ),
    ]
}

fn browser_scenarios() -> Vec<Scenario> {
    let kind = SimulationKind::Browser;
    vec![
        scenario(
            "browser-login-clone",
            kind,
            ScenarioContent::WebPage {
                url: "http://secure-bank-login.account-verify.xyz/signin".to_string(),
                uses_https: false,
                page_title: "SecureBank - Sign In".to_string(),
                form_fields: vec![
                    "Username".to_string(),
                    "Password".to_string(),
                    "Full card number".to_string(),
                    "PIN".to_string(),
                ],
            },
            true,
            "A cloned login page: wrong domain, no HTTPS, and it asks for the full card number \
             and PIN, which no real login form ever collects.",
            &[
                "Domain is not the bank's",
                "No HTTPS padlock",
                "Asks for full card number and PIN",
            ],
        ),
        scenario(
            "browser-official-banking",
            kind,
            ScenarioContent::WebPage {
                url: "https://www.securebank.example/signin".to_string(),
                uses_https: true,
                page_title: "SecureBank - Sign In".to_string(),
                form_fields: vec!["Username".to_string(), "Password".to_string()],
            },
            false,
            "The genuine article: the bank's own domain over HTTPS, collecting only the \
             credentials a login actually needs.",
            &[
                "Official domain",
                "HTTPS connection",
                "Requests only username and password",
            ],
        ),
        scenario(
            "browser-fake-av-popup",
            kind,
            ScenarioContent::WebPage {
                url: "http://system-alert-scanner.click/warning".to_string(),
                uses_https: false,
                page_title: "WARNING: 5 viruses detected!".to_string(),
                form_fields: vec!["Phone number for immediate assistance".to_string()],
            },
            true,
            "Browsers cannot scan your device from a web page. Scareware pop-ups exist to make \
             you call a 'support' number where the real scam happens.",
            &[
                "Fake in-page virus scan",
                "Alarmist full-screen warning",
                "Urges calling an unknown support line",
            ],
        ),
    ]
}

fn crypto_scenarios() -> Vec<Scenario> {
    let kind = SimulationKind::Crypto;
    vec![
        scenario(
            "crypto-guaranteed-doubling",
            kind,
            ScenarioContent::CryptoOffer {
                platform_name: "QuantumYield Pro".to_string(),
                pitch: "Our AI trading bot guarantees 20% weekly returns. Deposit today and \
                        double your stake in our launch promotion - limited spots!"
                    .to_string(),
                promised_return_pct: Some(20),
            },
            true,
            "Guaranteed high returns do not exist in any market. 'Limited spots' urgency plus \
             deposit-first mechanics is the anatomy of a Ponzi.",
            &[
                "Guaranteed returns",
                "Unrealistic 20% weekly yield",
                "Deposit-first, withdraw-later structure",
                "Artificial scarcity",
            ],
        ),
        scenario(
            "crypto-exchange-disclosure",
            kind,
            ScenarioContent::CryptoOffer {
                platform_name: "Coinbase-style licensed exchange".to_string(),
                pitch: "Buy and sell digital assets. Cryptoassets are volatile and you may lose \
                        the full value of your investment. Fees and risks disclosed before each \
                        trade."
                    .to_string(),
                promised_return_pct: None,
            },
            false,
            "A regulated venue sells access, not outcomes: it discloses risk and fees and \
             promises no returns at all.",
            &[
                "Explicit risk warning",
                "No promised returns",
                "Fee transparency",
            ],
        ),
        scenario(
            "crypto-recovery-agent",
            kind,
            ScenarioContent::CryptoOffer {
                platform_name: "CryptoFundsRecovery Ltd".to_string(),
                pitch: "Lost coins to a scam? Our certified blockchain agents recover stolen \
                        funds. Pay the 10% recovery bond upfront and share your wallet seed \
                        phrase to begin."
                    .to_string(),
                promised_return_pct: None,
            },
            true,
            "Recovery scams target prior victims. Nobody legitimate ever needs your seed \
             phrase, and upfront 'bonds' are the fee in advance-fee fraud.",
            &[
                "Targets previous scam victims",
                "Requests wallet seed phrase",
                "Upfront recovery bond",
            ],
        ),
    ]
}

fn romance_scenarios() -> Vec<Scenario> {
    let kind = SimulationKind::Romance;
    vec![
        scenario(
            "romance-oil-rig-engineer",
            kind,
            ScenarioContent::RomanceProfile {
                display_name: "Captain Mark Reynolds".to_string(),
                claimed_occupation: "Offshore oil-rig engineer / UN peacekeeper".to_string(),
                messages: vec![
                    "My love, three weeks and I already know we are destined.".to_string(),
                    "The satellite here blocks video calls, I'm sorry.".to_string(),
                    "My bank froze my account. Could you wire $1,800 for my flight home?"
                        .to_string(),
                ],
            },
            true,
            "The classic romance-scam arc: an unverifiable remote job, intense affection within \
             days, an excuse for never appearing on video, then the money request.",
            &[
                "Professes love within weeks",
                "Always unavailable for video",
                "Remote unverifiable occupation",
                "Escalates to a wire request",
            ],
        ),
        scenario(
            "romance-local-slow-burn",
            kind,
            ScenarioContent::RomanceProfile {
                display_name: "Sam P.".to_string(),
                claimed_occupation: "Schoolteacher in your city".to_string(),
                messages: vec![
                    "Happy to do a video call whenever suits you.".to_string(),
                    "How about coffee Saturday at the place on Main Street?".to_string(),
                    "No rush at all, just enjoying getting to know you.".to_string(),
                ],
            },
            false,
            "Verifiable, local, patient, and ready to meet in public - the opposite of the \
             isolation and urgency a romance scammer needs.",
            &[
                "Offers video calls",
                "Suggests a public in-person meeting",
                "No money ever mentioned",
            ],
        ),
    ]
}

fn social_scenarios() -> Vec<Scenario> {
    let kind = SimulationKind::Social;
    vec![
        scenario(
            "social-celebrity-giveaway",
            kind,
            ScenarioContent::SocialPost {
                author_handle: "@el0n.musk.official2".to_string(),
                text: "GIVEAWAY! Send 0.1 BTC to the address below and receive 1 BTC back. \
                       First 500 participants only!"
                    .to_string(),
                call_to_action: Some("Send BTC now".to_string()),
            },
            true,
            "Send-to-receive giveaways are theft by definition, and the impersonator handle \
             with trailing digits gives the account away.",
            &[
                "Impersonation handle",
                "Send-to-receive mechanics",
                "Artificial participant limit",
            ],
        ),
        scenario(
            "social-library-announcement",
            kind,
            ScenarioContent::SocialPost {
                author_handle: "@citylibrary".to_string(),
                text: "Our free 'Spot the Scam' workshop returns this Saturday, 2pm, main \
                       branch. Drop in, no registration needed."
                    .to_string(),
                call_to_action: None,
            },
            false,
            "A verified institution announcing a free public event: nothing to click, nothing \
             to send, nothing to lose.",
            &[
                "Verified institutional account",
                "No payment or data request",
                "Event verifiable offline",
            ],
        ),
        scenario(
            "social-job-fee-offer",
            kind,
            ScenarioContent::SocialPost {
                author_handle: "@remote_jobs_daily_hq".to_string(),
                text: "Earn $900/week working 2 hours a day from your phone! No experience. \
                       DM us and pay the $50 starter-kit fee to begin today."
                    .to_string(),
                call_to_action: Some("DM to apply".to_string()),
            },
            true,
            "Real employers pay you, not the reverse. Pay-to-start 'jobs' take the fee and \
             vanish, or rope you into money-mule work.",
            &[
                "Pay-to-start employment",
                "Unrealistic pay for trivial work",
                "Recruitment via DM only",
            ],
        ),
    ]
}

/// Builds the built-in catalog for one simulation kind.
///
/// Built-in content is validated like any other catalog; a failure here is a
/// defect in authored data and surfaces as a load-time error.
pub fn builtin_catalog(kind: SimulationKind) -> crate::Result<Arc<ScenarioCatalog>> {
    let scenarios = match kind {
        SimulationKind::Sms => sms_scenarios(),
        SimulationKind::Email => email_scenarios(),
        SimulationKind::Call => call_scenarios(),
        SimulationKind::Browser => browser_scenarios(),
        SimulationKind::Crypto => crypto_scenarios(),
        SimulationKind::Romance => romance_scenarios(),
        SimulationKind::Social => social_scenarios(),
    };
    Ok(Arc::new(ScenarioCatalog::new(kind, scenarios)?))
}

/// Builds every built-in catalog, in presentation order.
pub fn all_builtin_catalogs() -> crate::Result<Vec<Arc<ScenarioCatalog>>> {
    SimulationKind::ALL.iter().map(|k| builtin_catalog(*k)).collect()
}
