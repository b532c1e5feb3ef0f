//! Field validation & sanitization — the gate every value passes before it
//! enters the document model.
//!
//! All functions here are pure and total. `sanitize` never fails; the
//! `validate_*` functions return plain booleans (or a report, for
//! passwords) and leave messaging to the caller.

use serde::{Deserialize, Serialize};
use url::Url;

/// RFC 5321 upper bound on a full address.
const MAX_EMAIL_LEN: usize = 320;

const MIN_PASSWORD_LEN: usize = 8;

const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Cleans a free-text value: trims surrounding whitespace, strips angle
/// brackets and non-whitespace control characters, caps at `max_len`
/// characters.
///
/// One policy for every section — interior whitespace (spaces, tabs,
/// newlines) is preserved.
/// Idempotent: `sanitize(sanitize(s, n), n) == sanitize(s, n)`.
pub fn sanitize(input: &str, max_len: usize) -> String {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|c| *c != '<' && *c != '>' && (!c.is_control() || c.is_whitespace()))
        .take(max_len)
        .collect();
    // Stripping or truncation can expose new edge whitespace.
    cleaned.trim().to_string()
}

/// Permissive email shape check: one `@`, non-empty local part, domain with
/// an interior dot, no whitespace anywhere, total length ≤ 320.
pub fn validate_email(email: &str) -> bool {
    if email.is_empty() || email.len() > MAX_EMAIL_LEN {
        return false;
    }
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    // The dot must be interior: "a@b.", "a@.b" are out, "a@b.co" is in.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// URL fields are optional: empty is valid. Anything else must normalize.
pub fn validate_url(raw: &str) -> bool {
    raw.is_empty() || normalize_url(raw).is_some()
}

/// Parses `raw` as an http(s) URL, prepending `https://` when no scheme is
/// present. Returns the canonical form, or `None` when the value does not
/// parse or carries a non-web scheme (`ftp://...` is rejected, not wrapped).
pub fn normalize_url(raw: &str) -> Option<String> {
    let candidate = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };
    let parsed = Url::parse(&candidate).ok()?;
    if matches!(parsed.scheme(), "http" | "https") {
        Some(parsed.to_string())
    } else {
        None
    }
}

/// Character-count cap check.
pub fn validate_text_length(text: &str, max_len: usize) -> bool {
    text.chars().count() <= max_len
}

/// Outcome of checking a password against the five strength rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordReport {
    pub is_valid: bool,
    /// Human-readable descriptions of the unmet rules, in rule order.
    pub errors: Vec<String>,
    /// 0 for an empty password, otherwise `5 - unmet` floored at 1.
    pub strength: u8,
}

/// Checks the five independent password rules and derives a strength score.
pub fn validate_password(password: &str) -> PasswordReport {
    let mut errors = Vec::new();

    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(format!("At least {MIN_PASSWORD_LEN} characters"));
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("One uppercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("One lowercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("One number".to_string());
    }
    if !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        errors.push("One special character".to_string());
    }

    let strength = if password.is_empty() {
        0
    } else {
        (5u8).saturating_sub(errors.len() as u8).max(1)
    };

    PasswordReport {
        is_valid: errors.is_empty(),
        errors,
        strength,
    }
}
