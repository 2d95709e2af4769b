//! Lobby contact form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Field name to validation messages, as shown next to the form.
pub type FormErrors = BTreeMap<String, Vec<String>>;

/// Fields posted from the lobby page. Unknown fields (e.g. the CSRF
/// `token`) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LobbyForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Please enter your first name"))]
    pub firstname: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Please enter your last name"))]
    pub lastname: String,
    #[serde(default)]
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 255, message = "City is too long"))]
    pub city: String,
    #[serde(default)]
    pub argument: String,
    #[serde(default, rename = "optInInformation")]
    pub opt_in_information: Option<String>,
}

impl LobbyForm {
    /// Trim whitespace and lowercase the email address.
    pub fn normalized(self) -> Self {
        Self {
            firstname: self.firstname.trim().to_string(),
            lastname: self.lastname.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            city: self.city.trim().to_string(),
            argument: self.argument.trim().to_string(),
            opt_in_information: self.opt_in_information,
        }
    }

    /// Validate and collect messages per field.
    pub fn check(&self) -> Result<(), FormErrors> {
        self.validate().map_err(|e| form_errors(&e))
    }

    /// The selected argument id, if the field holds one.
    pub fn argument_id(&self) -> Option<i64> {
        self.argument.parse().ok().filter(|id| *id > 0)
    }

    /// Any value other than empty or `0` opts in.
    pub fn opted_in(&self) -> bool {
        !matches!(self.opt_in_information.as_deref(), None | Some("" | "0"))
    }

    pub fn city(&self) -> Option<String> {
        Some(self.city.clone()).filter(|c| !c.is_empty())
    }
}

/// Flatten validator output into per-field messages.
pub fn form_errors(errors: &ValidationErrors) -> FormErrors {
    let mut out = FormErrors::new();
    for (field, errs) in errors.field_errors() {
        let messages = errs
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        out.insert(field.to_string(), messages);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> LobbyForm {
        LobbyForm {
            firstname: "Anna".into(),
            lastname: "Muster".into(),
            email: "anna@example.ch".into(),
            city: "Bern".into(),
            argument: "3".into(),
            opt_in_information: Some("1".into()),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(valid_form().check().is_ok());
    }

    #[test]
    fn test_blank_names_fail_after_normalizing() {
        let form = LobbyForm {
            firstname: "   ".into(),
            ..valid_form()
        }
        .normalized();

        let errors = form.check().unwrap_err();
        assert_eq!(
            errors.get("firstname").unwrap(),
            &vec!["Please enter your first name".to_string()]
        );
        assert!(!errors.contains_key("lastname"));
    }

    #[test]
    fn test_invalid_email() {
        let form = LobbyForm {
            email: "not-an-address".into(),
            ..valid_form()
        };
        let errors = form.check().unwrap_err();
        assert!(errors.contains_key("email"));
    }

    #[test]
    fn test_normalized_lowercases_email() {
        let form = LobbyForm {
            email: "  Anna@Example.CH ".into(),
            ..valid_form()
        }
        .normalized();
        assert_eq!(form.email, "anna@example.ch");
    }

    #[test]
    fn test_argument_and_opt_in_parsing() {
        let form = valid_form();
        assert_eq!(form.argument_id(), Some(3));
        assert!(form.opted_in());

        let form = LobbyForm {
            argument: "abc".into(),
            opt_in_information: None,
            city: String::new(),
            ..valid_form()
        };
        assert_eq!(form.argument_id(), None);
        assert!(!form.opted_in());
        assert_eq!(form.city(), None);
    }

    #[test]
    fn test_opt_in_accepts_any_checkbox_value() {
        for value in ["on", "yes", "2", "false"] {
            let form = LobbyForm {
                opt_in_information: Some(value.into()),
                ..valid_form()
            };
            assert!(form.opted_in(), "{} should opt in", value);
        }
        for value in ["", "0"] {
            let form = LobbyForm {
                opt_in_information: Some(value.into()),
                ..valid_form()
            };
            assert!(!form.opted_in(), "{:?} should not opt in", value);
        }
    }
}
