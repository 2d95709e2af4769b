//! Person model.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// How long a confirmation token stays valid.
pub const CONFIRMATION_TTL_DAYS: i64 = 7;

/// A constituent, identified by email address.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: i64,
    #[serde(skip_serializing)]
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing)]
    pub confirmation_token: Option<String>,
    #[serde(skip_serializing)]
    pub confirmation_expires: Option<DateTime<Utc>>,
    pub confirmed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Person {
    /// Only unconfirmed people without a pending token get a new one.
    pub fn needs_token(&self) -> bool {
        !self.confirmed && self.confirmation_token.is_none()
    }

    /// A token is expired once its expiry lies strictly before `now`.
    /// A missing expiry counts as expired.
    pub fn is_token_expired(&self, now: DateTime<Utc>) -> bool {
        match self.confirmation_expires {
            Some(expires) => expires < now,
            None => true,
        }
    }
}

/// Expiry of a token issued at `issued_at`.
pub fn confirmation_expiry(issued_at: DateTime<Utc>) -> DateTime<Utc> {
    issued_at + Duration::days(CONFIRMATION_TTL_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(confirmed: bool, token: Option<&str>, expires: Option<DateTime<Utc>>) -> Person {
        Person {
            id: 1,
            email: "anna@example.ch".into(),
            first_name: "Anna".into(),
            last_name: "Muster".into(),
            city: None,
            confirmation_token: token.map(String::from),
            confirmation_expires: expires,
            confirmed,
            language: Some("de".into()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_needs_token() {
        assert!(person(false, None, None).needs_token());
        assert!(!person(false, Some("abc"), None).needs_token());
        assert!(!person(true, None, None).needs_token());
    }

    #[test]
    fn test_token_expiry_window() {
        let issued = Utc::now();
        let p = person(false, Some("abc"), Some(confirmation_expiry(issued)));

        assert!(!p.is_token_expired(issued + Duration::days(6)));
        assert!(!p.is_token_expired(issued + Duration::days(7)));
        assert!(p.is_token_expired(issued + Duration::days(7) + Duration::seconds(1)));
    }

    #[test]
    fn test_missing_expiry_is_expired() {
        assert!(person(false, Some("abc"), None).is_token_expired(Utc::now()));
    }

    #[test]
    fn test_private_fields_are_not_serialized() {
        let p = person(false, Some("secret"), Some(Utc::now()));
        let value = serde_json::to_value(&p).unwrap();
        assert!(value.get("email").is_none());
        assert!(value.get("confirmationToken").is_none());
        assert!(value.get("confirmationExpires").is_none());
        assert_eq!(value["firstName"], "Anna");
    }
}
