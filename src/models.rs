//! Frontend Models
//!
//! Data structures shown by the pages. Nothing here is persisted or sent anywhere.

use serde::{Serialize, Serializer};

/// Pet gender, drives the badge colour on cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// CSS modifier for the gender badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            Gender::Male => "gender-badge male",
            Gender::Female => "gender-badge female",
        }
    }
}

/// Adoptable pet (static catalog entry)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pet {
    pub id: u32,
    pub name: &'static str,
    pub breed: &'static str,
    pub gender: Gender,
    pub age: &'static str,
    pub image: &'static str,
    pub bio: &'static str,
}

impl Pet {
    /// Detail route for this pet
    pub fn href(&self) -> String {
        format!("/pets/{}", self.id)
    }
}

/// Donation cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DonationFrequency {
    #[default]
    OneTime,
    Monthly,
}

impl DonationFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            DonationFrequency::OneTime => "one-time",
            DonationFrequency::Monthly => "monthly",
        }
    }

    /// Suffix appended to the donate button total
    pub fn suffix(&self) -> &'static str {
        match self {
            DonationFrequency::OneTime => "",
            DonationFrequency::Monthly => "/ month",
        }
    }
}

/// Passwords never reach the console in clear text
fn redact<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&"*".repeat(value.chars().count()))
}

/// Login form fields
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoginForm {
    pub email: String,
    #[serde(serialize_with = "redact")]
    pub password: String,
    pub remember_me: bool,
}

impl LoginForm {
    /// Update a text field by its input `name` attribute. Unknown names are ignored.
    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "email" => self.email = value,
            "password" => self.password = value,
            _ => {}
        }
    }
}

/// Signup form fields
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    #[serde(serialize_with = "redact")]
    pub password: String,
    #[serde(rename = "confirmPassword", serialize_with = "redact")]
    pub confirm_password: String,
}

impl SignupForm {
    /// Update a field by its input `name` attribute. Unknown names are ignored.
    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "name" => self.name = value,
            "email" => self.email = value,
            "password" => self.password = value,
            "confirmPassword" => self.confirm_password = value,
            _ => {}
        }
    }
}

/// Render a form for the local diagnostic log line
pub fn form_summary<T: Serialize>(form: &T) -> String {
    serde_json::to_string(form).unwrap_or_else(|e| format!("<unserializable form: {}>", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_set_field() {
        let mut form = LoginForm::default();
        form.set_field("email", "a@b.c".to_string());
        form.set_field("password", "hunter2".to_string());
        form.set_field("unknown", "x".to_string());
        assert_eq!(form.email, "a@b.c");
        assert_eq!(form.password, "hunter2");
        assert!(!form.remember_me);
    }

    #[test]
    fn test_signup_set_field() {
        let mut form = SignupForm::default();
        form.set_field("name", "Sam".to_string());
        form.set_field("confirmPassword", "pw".to_string());
        assert_eq!(form.name, "Sam");
        assert_eq!(form.confirm_password, "pw");
        assert!(form.password.is_empty());
    }

    #[test]
    fn test_form_summary_redacts_passwords() {
        let form = SignupForm {
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            password: "secret".to_string(),
            confirm_password: "secret".to_string(),
        };
        let summary = form_summary(&form);
        assert!(summary.contains("\"name\":\"Sam\""));
        assert!(summary.contains("\"confirmPassword\":\"******\""));
        assert!(!summary.contains("secret"));
    }

    #[test]
    fn test_frequency_suffix() {
        assert_eq!(DonationFrequency::default(), DonationFrequency::OneTime);
        assert_eq!(DonationFrequency::OneTime.suffix(), "");
        assert_eq!(DonationFrequency::Monthly.suffix(), "/ month");
        assert_eq!(DonationFrequency::Monthly.as_str(), "monthly");
    }

    #[test]
    fn test_gender_badge() {
        assert_eq!(Gender::Female.badge_class(), "gender-badge female");
        assert_eq!(Gender::Male.as_str(), "Male");
    }
}
