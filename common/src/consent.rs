//! Cookie consent banner state
//!
//! The decision is stored in a first-party cookie; the banner shows only
//! while no decision exists.

pub const CONSENT_COOKIE_NAME: &str = "ayofemimelehon-cookie-consent";

pub const CONSENT_EXPIRY_DAYS: u32 = 365;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentChoice {
    Accepted,
    Declined,
}

impl ConsentChoice {
    pub fn cookie_value(&self) -> &'static str {
        match self {
            ConsentChoice::Accepted => "true",
            ConsentChoice::Declined => "false",
        }
    }
}

/// `Set-Cookie` / `document.cookie` assignment for a decision
pub fn consent_cookie(choice: ConsentChoice) -> String {
    let max_age = u64::from(CONSENT_EXPIRY_DAYS) * 24 * 60 * 60;
    format!(
        "{}={}; Max-Age={}; Path=/; SameSite=Lax",
        CONSENT_COOKIE_NAME,
        choice.cookie_value(),
        max_age
    )
}

/// Read the stored decision from a `document.cookie` style header
pub fn consent_from_cookie_header(header: &str) -> Option<ConsentChoice> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == CONSENT_COOKIE_NAME)
        .and_then(|(_, value)| match value.trim() {
            "true" => Some(ConsentChoice::Accepted),
            "false" => Some(ConsentChoice::Declined),
            _ => None,
        })
}

pub fn should_show_banner(header: &str) -> bool {
    consent_from_cookie_header(header).is_none()
}
