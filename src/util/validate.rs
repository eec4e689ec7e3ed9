//! Client-side form validation and password strength scoring.
//!
//! DESIGN
//! ======
//! Validation runs before any network call: a form whose errors are
//! non-empty never reaches `net::api`. Messages are the exact strings shown
//! inline under the fields, so pages render them without translation.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Score a password 0-100: 25 points per satisfied class among length >= 8,
/// lowercase, uppercase, digit, and symbol, capped at 100.
pub fn password_strength(password: &str) -> u32 {
    let mut strength = 0;
    if password.len() >= 8 {
        strength += 25;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        strength += 25;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        strength += 25;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        strength += 25;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        strength += 25;
    }
    strength.min(100)
}

/// Minimum strength score accepted by the sign-up form.
pub const STRENGTH_THRESHOLD: u32 = 75;

/// Label shown next to the sign-up strength meter.
pub fn strength_label(strength: u32) -> &'static str {
    match strength {
        0..=24 => "Weak",
        25..=49 => "Fair",
        50..=74 => "Good",
        _ => "Strong",
    }
}

/// Meter modifier class for the sign-up strength bar.
pub fn strength_class(strength: u32) -> &'static str {
    match strength {
        0..=24 => "strength-meter__bar--weak",
        25..=49 => "strength-meter__bar--fair",
        50..=74 => "strength-meter__bar--good",
        _ => "strength-meter__bar--strong",
    }
}

/// Loose shape check matching `local@domain.tld` with no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    let clean = |s: &str| !s.is_empty() && !s.chars().any(char::is_whitespace);
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    clean(local) && clean(host) && clean(tld) && !domain.contains('@')
}

fn is_valid_username(username: &str) -> bool {
    !username.is_empty()
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Field errors of the sign-in form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInErrors {
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl SignInErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

/// Validate the sign-in form. An empty result permits submission.
pub fn validate_sign_in(username: &str, password: &str) -> SignInErrors {
    let mut errors = SignInErrors::default();

    if username.trim().is_empty() {
        errors.username = Some("Please enter your username");
    } else if username.len() < 3 {
        errors.username = Some("Username must be at least 3 characters");
    }

    if password.is_empty() {
        errors.password = Some("Password is required");
    } else if password.len() < 3 {
        errors.password = Some("Password must be at least 3 characters");
    }

    errors
}

/// Field errors of the sign-up form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpErrors {
    pub first_name: Option<&'static str>,
    pub last_name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
}

impl SignUpErrors {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.username.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
    }
}

/// Input fields of the sign-up form, pre-submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

/// Validate the sign-up form, including the strength threshold: a password
/// can satisfy the length minimum and still be rejected below 75.
pub fn validate_sign_up(fields: &SignUpFields) -> SignUpErrors {
    let mut errors = SignUpErrors::default();

    if fields.first_name.trim().is_empty() {
        errors.first_name = Some("First name is required");
    } else if fields.first_name.trim().len() < 2 {
        errors.first_name = Some("First name must be at least 2 characters");
    }

    if fields.last_name.trim().is_empty() {
        errors.last_name = Some("Last name is required");
    } else if fields.last_name.trim().len() < 2 {
        errors.last_name = Some("Last name must be at least 2 characters");
    }

    if fields.email.trim().is_empty() {
        errors.email = Some("Email address is required");
    } else if !is_valid_email(&fields.email) {
        errors.email = Some("Please enter a valid email address");
    }

    if fields.username.trim().is_empty() {
        errors.username = Some("Username is required");
    } else if fields.username.len() < 3 {
        errors.username = Some("Username must be at least 3 characters");
    } else if !is_valid_username(&fields.username) {
        errors.username = Some("Only letters, numbers and underscores allowed");
    }

    if fields.password.is_empty() {
        errors.password = Some("Password is required");
    } else if fields.password.len() < 8 {
        errors.password = Some("Password must be at least 8 characters");
    } else if password_strength(&fields.password) < STRENGTH_THRESHOLD {
        errors.password = Some("Please choose a stronger password");
    }

    if fields.confirm_password.is_empty() {
        errors.confirm_password = Some("Please confirm your password");
    } else if fields.password != fields.confirm_password {
        errors.confirm_password = Some("Passwords do not match");
    }

    errors
}

/// Field errors of the create-report form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportFormErrors {
    pub name: Option<&'static str>,
    pub description: Option<&'static str>,
    pub address: Option<&'static str>,
    pub report_type: Option<&'static str>,
}

impl ReportFormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.address.is_none()
            && self.report_type.is_none()
    }
}

/// Validate the create-report text fields. The image is validated
/// separately at selection time via [`validate_image`].
pub fn validate_report_form(
    name: &str,
    description: &str,
    address: &str,
    report_type: &str,
) -> ReportFormErrors {
    let mut errors = ReportFormErrors::default();

    if name.trim().is_empty() {
        errors.name = Some("Report name is required");
    } else if name.trim().len() < 3 {
        errors.name = Some("Report name must be at least 3 characters");
    }

    if description.trim().is_empty() {
        errors.description = Some("Description is required");
    } else if description.trim().len() < 10 {
        errors.description = Some("Description must be at least 10 characters");
    }

    if address.trim().is_empty() {
        errors.address = Some("Address is required");
    } else if address.trim().len() < 5 {
        errors.address = Some("Please provide a more detailed address");
    }

    if report_type.is_empty() {
        errors.report_type = Some("Please select a report type");
    }

    errors
}

/// Check a chosen photo against the upload constraints: an `image/*` MIME
/// type and at most 10 MB. Returns the field error to show, if any.
pub fn validate_image(mime_type: &str, size_bytes: f64) -> Option<&'static str> {
    if !mime_type.starts_with("image/") {
        return Some("Please select a valid image file");
    }
    if size_bytes > crate::net::api::MAX_IMAGE_BYTES {
        return Some("Image size must be less than 10MB");
    }
    None
}

/// Field errors of the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub subject: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl ContactErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.subject.is_none()
            && self.message.is_none()
    }
}

/// Validate the contact form.
pub fn validate_contact(name: &str, email: &str, subject: &str, message: &str) -> ContactErrors {
    let mut errors = ContactErrors::default();

    if name.trim().is_empty() {
        errors.name = Some("Name is required");
    }

    if email.trim().is_empty() {
        errors.email = Some("Email is required");
    } else if !is_valid_email(email) {
        errors.email = Some("Please enter a valid email address");
    }

    if subject.trim().is_empty() {
        errors.subject = Some("Subject is required");
    }

    if message.trim().is_empty() {
        errors.message = Some("Message is required");
    } else if message.trim().len() < 10 {
        errors.message = Some("Message must be at least 10 characters");
    }

    errors
}
