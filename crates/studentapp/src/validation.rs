//! Field validation for student records.
//!
//! Rules:
//! - `name`: not blank, at least 2 characters
//! - `id`: not blank, at least 3 characters (uniqueness is the store's concern)
//! - `phone`: not blank, at least 9 digits once every non-digit is stripped
//! - `address`: not blank
//!
//! "Blank" means empty or whitespace only. Lengths count characters, not bytes.
//!
//! Failures are structured: a [`Field`] plus a [`ValidationKind`]. The `Display`
//! impl gives a default English message and [`ValidationError::key`] gives a
//! stable lookup key for clients that localize.

use crate::model::Student;
use serde::Serialize;
use std::fmt;

pub const NAME_MIN_LENGTH: usize = 2;
pub const ID_MIN_LENGTH: usize = 3;
pub const PHONE_MIN_DIGITS: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Id,
    Phone,
    Address,
}

impl Field {
    fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Id => "ID",
            Field::Phone => "Phone",
            Field::Address => "Address",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ValidationKind {
    /// Value is empty or whitespace only
    Empty,
    /// Value has fewer than `min` characters
    TooShort { min: usize },
    /// Value has fewer than `min` digits
    TooFewDigits { min: usize },
}

/// Error type for field validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: Field,
    #[serde(flatten)]
    pub kind: ValidationKind,
}

impl ValidationError {
    fn new(field: Field, kind: ValidationKind) -> Self {
        Self { field, kind }
    }

    /// Stable message key, e.g. `"name.too_short"`.
    pub fn key(&self) -> &'static str {
        match (self.field, self.kind) {
            (Field::Name, ValidationKind::Empty) => "name.empty",
            (Field::Name, _) => "name.too_short",
            (Field::Id, ValidationKind::Empty) => "id.empty",
            (Field::Id, _) => "id.too_short",
            (Field::Phone, ValidationKind::Empty) => "phone.empty",
            (Field::Phone, _) => "phone.too_few_digits",
            (Field::Address, _) => "address.empty",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ValidationKind::Empty => write!(f, "{} cannot be empty", self.field.label()),
            ValidationKind::TooShort { min } => {
                write!(
                    f,
                    "{} must be at least {} characters",
                    self.field.label(),
                    min
                )
            }
            ValidationKind::TooFewDigits { min } => {
                write!(f, "Phone number must have at least {} digits", min)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult = Result<(), ValidationError>;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn digits_only(value: &str) -> String {
    value.chars().filter(|ch| ch.is_ascii_digit()).collect()
}

fn check_text(field: Field, value: &str, min: usize) -> ValidationResult {
    if is_blank(value) {
        return Err(ValidationError::new(field, ValidationKind::Empty));
    }
    if value.chars().count() < min {
        return Err(ValidationError::new(field, ValidationKind::TooShort { min }));
    }
    Ok(())
}

/// # Examples
/// ```
/// use studentapp::validation::validate_name;
///
/// assert!(validate_name("Al").is_ok());
/// assert!(validate_name("A").is_err());
/// assert!(validate_name("  ").is_err());
/// ```
pub fn validate_name(name: &str) -> ValidationResult {
    check_text(Field::Name, name, NAME_MIN_LENGTH)
}

pub fn validate_id(id: &str) -> ValidationResult {
    check_text(Field::Id, id, ID_MIN_LENGTH)
}

/// Separators are ignored: `"050-1234567"` counts as 10 digits.
pub fn validate_phone(phone: &str) -> ValidationResult {
    if is_blank(phone) {
        return Err(ValidationError::new(Field::Phone, ValidationKind::Empty));
    }
    if digits_only(phone).len() < PHONE_MIN_DIGITS {
        return Err(ValidationError::new(
            Field::Phone,
            ValidationKind::TooFewDigits {
                min: PHONE_MIN_DIGITS,
            },
        ));
    }
    Ok(())
}

pub fn validate_address(address: &str) -> ValidationResult {
    if is_blank(address) {
        return Err(ValidationError::new(Field::Address, ValidationKind::Empty));
    }
    Ok(())
}

/// Runs name, id, phone and address checks in that order and stops at the
/// first failure.
pub fn validate_student(student: &Student) -> ValidationResult {
    validate_name(&student.name)?;
    validate_id(&student.id)?;
    validate_phone(&student.phone)?;
    validate_address(&student.address)?;
    Ok(())
}

/// Regroups a phone number for display.
///
/// - 10 digits: `"0501234567"` → `"050-1234567"`
/// - 9 digits starting with `5`: `"512345678"` → `"051-2345678"`
/// - anything else is returned as given
///
/// # Examples
/// ```
/// use studentapp::validation::format_phone;
///
/// assert_eq!(format_phone("050 123 4567"), "050-1234567");
/// assert_eq!(format_phone("512345678"), "051-2345678");
/// assert_eq!(format_phone("12345"), "12345");
/// ```
pub fn format_phone(phone: &str) -> String {
    let digits = digits_only(phone);
    match digits.len() {
        10 => format!("{}-{}", &digits[..3], &digits[3..]),
        9 if digits.starts_with('5') => format!("0{}-{}", &digits[..2], &digits[2..]),
        _ => phone.to_string(),
    }
}
