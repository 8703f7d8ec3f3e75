//! User accounts: registration, login and the current user's profile.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::null_as_empty;
use crate::domain::validation::{Rule, Schema};

/// Sign-up form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterDraft {
    pub username: String,
    pub password: String,
    pub name: String,
}

crate::impl_draft!(RegisterDraft, RegisterField {
    Username => username,
    Password => password,
    Name => name,
});

impl RegisterDraft {
    pub fn page_schema() -> Schema<Self> {
        Schema::new()
            .field(RegisterField::Username, [Rule::Required("Username is required")])
            .field(RegisterField::Password, [Rule::Required("Password is required")])
            .field(RegisterField::Name, [Rule::Required("Name is required")])
    }
}

/// Sign-in form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginDraft {
    pub username: String,
    pub password: String,
}

crate::impl_draft!(LoginDraft, LoginField {
    Username => username,
    Password => password,
});

impl LoginDraft {
    pub fn page_schema() -> Schema<Self> {
        Schema::new()
            .field(LoginField::Username, [Rule::Required("Username is required")])
            .field(LoginField::Password, [Rule::Required("Password is required")])
    }
}

/// Display name of the current user, loaded from `/users/current`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

crate::impl_draft!(ProfileDraft, ProfileField {
    Name => name,
});

impl ProfileDraft {
    pub fn page_schema() -> Schema<Self> {
        Schema::new().field(ProfileField::Name, [Rule::Required("Name is required")])
    }
}

/// New password plus its confirmation. Only `password` is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordDraft {
    pub password: String,
    pub confirm_password: String,
}

crate::impl_draft!(PasswordDraft, PasswordField {
    Password => password,
    ConfirmPassword => confirm_password,
});

impl PasswordDraft {
    pub fn page_schema() -> Schema<Self> {
        Schema::new()
            .field(PasswordField::Password, [Rule::Required("Password is required")])
            .field(
                PasswordField::ConfirmPassword,
                [
                    Rule::Required("Confirm password is required"),
                    Rule::Matches {
                        other: PasswordField::Password,
                        message: "Passwords do not match",
                    },
                ],
            )
    }
}

/// The current user as returned by `/users/current`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

/// Payload of a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginToken {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::{Draft, FormField, ValidationResult};

    #[test]
    fn generated_fields_use_member_names() {
        assert_eq!(RegisterField::Username.name(), "username");
        assert_eq!(PasswordField::ConfirmPassword.name(), "confirm_password");
        assert_eq!(
            LoginDraft::fields(),
            &[LoginField::Username, LoginField::Password]
        );
    }

    #[test]
    fn set_and_value_round_through_the_enum() {
        let mut draft = RegisterDraft::default();
        draft.set(RegisterField::Name, "Eko".to_string());
        assert_eq!(draft.value(RegisterField::Name), "Eko");
        assert_eq!(draft.name, "Eko");
    }

    #[test]
    fn password_mismatch_is_reported_on_confirmation() {
        let draft = PasswordDraft {
            password: "rahasia".to_string(),
            confirm_password: "rahasia2".to_string(),
        };
        let ValidationResult::Rejected(errors) = PasswordDraft::page_schema().validate(&draft)
        else {
            panic!("expected rejection");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(PasswordField::ConfirmPassword),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn empty_confirmation_reports_presence_first() {
        let draft = PasswordDraft {
            password: "rahasia".to_string(),
            confirm_password: String::new(),
        };
        let ValidationResult::Rejected(errors) = PasswordDraft::page_schema().validate(&draft)
        else {
            panic!("expected rejection");
        };
        assert_eq!(
            errors.get(PasswordField::ConfirmPassword),
            Some("Confirm password is required")
        );
    }

    #[test]
    fn login_requires_both_fields() {
        let ValidationResult::Rejected(errors) =
            LoginDraft::page_schema().validate(&LoginDraft::default())
        else {
            panic!("expected rejection");
        };
        assert_eq!(errors.summary(), "Username is required, Password is required");
    }
}
