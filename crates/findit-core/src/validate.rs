//! Form Validation
//!
//! Client-side checks that run before any request is sent.
//! A failed check is terminal: the caller shows the message and stops.

use thiserror::Error;

use crate::models::ItemStatus;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Upload size limit for item photos (5 MB)
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/png", "image/jpeg", "image/jpg", "image/gif"];

/// Phrase the user must type to delete their account
pub const DELETE_CONFIRMATION: &str = "DELETE";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingRequired,
    #[error("Please fill in all required fields correctly")]
    MissingReportFields(Vec<&'static str>),
    #[error("{0} is required")]
    FieldRequired(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter your password")]
    MissingPassword,
    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("You must agree to the Terms & Privacy Policy")]
    TermsNotAccepted,
    #[error("Please upload only PNG, JPG, or GIF images")]
    UnsupportedImageType,
    #[error("File size must be less than 5MB")]
    ImageTooLarge,
    #[error("Please type \"DELETE\" to confirm")]
    DeleteNotConfirmed,
}

/// `local@domain.tld` with no whitespace, same shape the server accepts
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    if !is_valid_email(email.trim()) {
        return Err(ValidationError::InvalidEmail);
    }
    if password.is_empty() {
        return Err(ValidationError::MissingPassword);
    }
    Ok(())
}

/// Registration form contents
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub terms: bool,
}

impl RegisterForm {
    /// Checks run in form order; the first failure wins
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingRequired);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if !self.terms {
            return Err(ValidationError::TermsNotAccepted);
        }
        Ok(())
    }
}

/// Claim modal: both fields required, contact must be an email
pub fn validate_claim(description: &str, contact: &str) -> Result<(), ValidationError> {
    if description.trim().is_empty() || contact.trim().is_empty() {
        return Err(ValidationError::MissingRequired);
    }
    if !is_valid_email(contact.trim()) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Edit-profile form: one error per field, shown inline
pub fn validate_profile(name: &str, email: &str) -> Vec<(&'static str, ValidationError)> {
    let mut errors = Vec::new();
    if name.trim().is_empty() {
        errors.push(("name", ValidationError::FieldRequired("Full name")));
    }
    if email.trim().is_empty() {
        errors.push(("email", ValidationError::FieldRequired("Email")));
    } else if !is_valid_email(email.trim()) {
        errors.push(("email", ValidationError::InvalidEmail));
    }
    errors
}

pub fn validate_image(mime_type: &str, size: u64) -> Result<(), ValidationError> {
    if !ALLOWED_IMAGE_TYPES.contains(&mime_type) {
        return Err(ValidationError::UnsupportedImageType);
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(ValidationError::ImageTooLarge);
    }
    Ok(())
}

pub fn confirm_delete(phrase: &str) -> Result<(), ValidationError> {
    if phrase == DELETE_CONFIRMATION {
        Ok(())
    } else {
        Err(ValidationError::DeleteNotConfirmed)
    }
}

/// Where a found item is being kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurrentLocation {
    #[default]
    WithMe,
    PoliceStation,
    LostAndFound,
}

impl CurrentLocation {
    pub const ALL: [CurrentLocation; 3] = [
        CurrentLocation::WithMe,
        CurrentLocation::PoliceStation,
        CurrentLocation::LostAndFound,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CurrentLocation::WithMe => "with-me",
            CurrentLocation::PoliceStation => "police-station",
            CurrentLocation::LostAndFound => "lost-and-found",
        }
    }

    pub fn parse(s: &str) -> Self {
        Self::ALL.into_iter().find(|c| c.as_str() == s).unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            CurrentLocation::WithMe => "With me",
            CurrentLocation::PoliceStation => "Police station",
            CurrentLocation::LostAndFound => "Venue lost & found",
        }
    }

    /// Guess from the free-text location where the item was found
    pub fn suggest(location: &str) -> Self {
        let location = location.to_lowercase();
        if location.contains("police") || location.contains("station") {
            CurrentLocation::PoliceStation
        } else if ["coffee", "shop", "store"].iter().any(|w| location.contains(w)) {
            CurrentLocation::LostAndFound
        } else {
            CurrentLocation::WithMe
        }
    }
}

/// Report lost/found form contents
#[derive(Debug, Clone, Default)]
pub struct ReportForm {
    pub item_name: String,
    pub category: String,
    pub description: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub contact_info: String,
    pub reward: String,
    pub additional_info: String,
    pub current_location: CurrentLocation,
}

impl ReportForm {
    /// Names of the empty required fields; empty means the form is complete
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("itemName", &self.item_name),
            ("category", &self.category),
            ("description", &self.description),
            ("location", &self.location),
            ("date", &self.date),
            ("contactInfo", &self.contact_info),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingReportFields(missing))
        }
    }

    /// Text fields of the multipart body, named the way the backend reads them
    pub fn multipart_fields(&self, status: ItemStatus) -> Vec<(&'static str, String)> {
        let (date_key, time_key) = match status {
            ItemStatus::Lost => ("dateLost", "timeLost"),
            _ => ("dateFound", "timeFound"),
        };
        let mut fields = vec![
            ("itemName", self.item_name.trim().to_string()),
            ("category", self.category.clone()),
            ("description", self.description.trim().to_string()),
            ("location", self.location.trim().to_string()),
            (date_key, self.date.clone()),
            (time_key, self.time.clone()),
            ("contactInfo", self.contact_info.trim().to_string()),
            ("additionalInfo", self.additional_info.trim().to_string()),
        ];
        match status {
            ItemStatus::Lost => fields.push(("reward", self.reward.trim().to_string())),
            _ => fields.push(("currentLocation", self.current_location.as_str().to_string())),
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_registration() -> RegisterForm {
        RegisterForm {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: String::new(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            terms: true,
        }
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("john@example.com"));
        assert!(is_valid_email("a.b@c.co.uk"));
        assert!(!is_valid_email("john@example"));
        assert!(!is_valid_email("john example@x.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("john@@example.com"));
        assert!(!is_valid_email("john@.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_short_password_rejected() {
        let form = RegisterForm { password: "abc".into(), confirm_password: "abc".into(), ..valid_registration() };
        assert_eq!(form.validate(), Err(ValidationError::PasswordTooShort));
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "Password must be at least 6 characters long"
        );
    }

    #[test]
    fn test_registration_rule_order() {
        assert_eq!(valid_registration().validate(), Ok(()));

        let form = RegisterForm { name: " ".into(), ..valid_registration() };
        assert_eq!(form.validate(), Err(ValidationError::MissingRequired));

        let form = RegisterForm { email: "nope".into(), ..valid_registration() };
        assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));

        let form = RegisterForm { confirm_password: "secret2".into(), ..valid_registration() };
        assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));

        let form = RegisterForm { terms: false, ..valid_registration() };
        assert_eq!(form.validate(), Err(ValidationError::TermsNotAccepted));
    }

    #[test]
    fn test_login_checks() {
        assert_eq!(validate_login("bad", "pw"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_login("a@b.com", ""), Err(ValidationError::MissingPassword));
        assert_eq!(validate_login(" a@b.com ", "pw"), Ok(()));
    }

    #[test]
    fn test_claim_checks() {
        assert_eq!(validate_claim("", "a@b.com"), Err(ValidationError::MissingRequired));
        assert_eq!(validate_claim("mine", "phone"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_claim("mine", "a@b.com"), Ok(()));
    }

    #[test]
    fn test_profile_errors_per_field() {
        let errors = validate_profile("", "bad");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].1.to_string(), "Full name is required");
        assert_eq!(errors[1], ("email", ValidationError::InvalidEmail));
        assert!(validate_profile("Jane", "jane@example.com").is_empty());
    }

    #[test]
    fn test_image_limits() {
        assert_eq!(validate_image("image/png", 1024), Ok(()));
        assert_eq!(validate_image("image/webp", 1024), Err(ValidationError::UnsupportedImageType));
        assert_eq!(validate_image("image/gif", MAX_UPLOAD_BYTES + 1), Err(ValidationError::ImageTooLarge));
    }

    #[test]
    fn test_delete_phrase_is_exact() {
        assert!(confirm_delete("DELETE").is_ok());
        assert!(confirm_delete("delete").is_err());
        assert!(confirm_delete("DELETE ").is_err());
    }

    #[test]
    fn test_current_location_suggestion() {
        assert_eq!(CurrentLocation::suggest("Near the Police HQ"), CurrentLocation::PoliceStation);
        assert_eq!(CurrentLocation::suggest("Times Square Station"), CurrentLocation::PoliceStation);
        assert_eq!(CurrentLocation::suggest("Blue Bottle Coffee"), CurrentLocation::LostAndFound);
        assert_eq!(CurrentLocation::suggest("Central Park"), CurrentLocation::WithMe);
    }

    #[test]
    fn test_report_form_fields() {
        let form = ReportForm {
            item_name: "Umbrella".into(),
            category: "other".into(),
            description: "Black".into(),
            location: "Bus 12".into(),
            date: "2024-04-01".into(),
            contact_info: "me@example.com".into(),
            reward: "$20".into(),
            ..Default::default()
        };
        assert!(form.validate().is_ok());

        let lost = form.multipart_fields(ItemStatus::Lost);
        assert!(lost.contains(&("dateLost", "2024-04-01".to_string())));
        assert!(lost.contains(&("reward", "$20".to_string())));

        let found = form.multipart_fields(ItemStatus::Found);
        assert!(found.contains(&("dateFound", "2024-04-01".to_string())));
        assert!(found.contains(&("currentLocation", "with-me".to_string())));
        assert!(!found.iter().any(|(k, _)| *k == "reward"));

        let empty = ReportForm::default();
        assert_eq!(empty.missing_fields().len(), 6);
    }
}
