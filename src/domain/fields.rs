/// Validated field values that make up a contact
///
/// Each value type checks its input once, at construction, so a Record can
/// never hold a malformed phone, email, address or birthday. The `Field` enum
/// ties them together for code that treats every field uniformly (search,
/// display).

use std::fmt;

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::DomainError;

/// Display format for birthdays, both on screen and on disk
pub const DATE_FORMAT: &str = "%d.%m.%Y";

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("Failed to compile email regex")
});

static DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,2})\.([0-9]{1,2})\.([0-9]{4})$")
        .expect("Failed to compile date regex")
});

/// Unique key of a contact; never empty and never changed after creation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactName(String);

impl ContactName {
    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(DomainError::InvalidName);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A phone number of exactly 10 ASCII digits
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate and wrap a raw phone string
    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if !Self::is_valid(&raw) {
            return Err(DomainError::InvalidPhone(raw));
        }
        Ok(Self(raw))
    }

    /// Check the 10-digit rule without allocating a value
    pub fn is_valid(raw: &str) -> bool {
        raw.len() == 10 && raw.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An email address, stored trimmed and lower-cased
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Normalize and validate a raw email string
    ///
    /// The accepted shape is `local@domain.tld`: one `@`, a domain containing
    /// at least one dot and a final label of two or more letters.
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let normalized = raw.trim().to_lowercase();
        if !EMAIL_REGEX.is_match(&normalized) {
            return Err(DomainError::InvalidEmail(raw.to_string()));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Free-form postal address; any non-blank text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostalAddress(String);

impl PostalAddress {
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidAddress);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A birthday parsed from `DD.MM.YYYY`
///
/// Day and month may be written with or without a leading zero; the year
/// always has four digits. The date must exist on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidDate(raw.to_string());

        let captures = DATE_REGEX.captures(raw).ok_or_else(invalid)?;
        let day: u32 = captures[1].parse().map_err(|_| invalid())?;
        let month: u32 = captures[2].parse().map_err(|_| invalid())?;
        let year: i32 = captures[3].parse().map_err(|_| invalid())?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(invalid)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The day this birthday is celebrated in `year`
    ///
    /// Feb 29 falls on Mar 1 in years without a leap day.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }

    /// Render as `DD.MM.YYYY`
    pub fn formatted(&self) -> String {
        self.0.format(DATE_FORMAT).to_string()
    }
}

/// Any single field of a contact, carrying its validated value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<'a> {
    Name(&'a ContactName),
    Phone(&'a PhoneNumber),
    Email(&'a EmailAddress),
    Address(&'a PostalAddress),
    Birthday(&'a Birthday),
}

impl Field<'_> {
    /// Whether this field contains `query_lower` (an already lower-cased query)
    ///
    /// Phones are digits so they are compared as-is; birthdays are compared
    /// in their `DD.MM.YYYY` form.
    pub fn matches(&self, query_lower: &str) -> bool {
        match self {
            Field::Name(name) => name.as_str().to_lowercase().contains(query_lower),
            Field::Phone(phone) => phone.as_str().contains(query_lower),
            Field::Email(email) => email.as_str().contains(query_lower),
            Field::Address(address) => address.as_str().to_lowercase().contains(query_lower),
            Field::Birthday(birthday) => birthday.formatted().contains(query_lower),
        }
    }
}

impl fmt::Display for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name(name) => write!(f, "{}", name.as_str()),
            Field::Phone(phone) => write!(f, "{}", phone.as_str()),
            Field::Email(email) => write!(f, "{}", email.as_str()),
            Field::Address(address) => write!(f, "{}", address.as_str()),
            Field::Birthday(birthday) => write!(f, "{}", birthday.formatted()),
        }
    }
}
