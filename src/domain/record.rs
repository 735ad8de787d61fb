/// Record entity holding one contact's fields
///
/// A Record is created with a name only; phones, email, address and birthday
/// are added afterwards. Every setter validates before touching state, so a
/// failed update leaves the record exactly as it was.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    Birthday, ContactName, DomainError, EmailAddress, Field, PhoneNumber, PostalAddress,
};

/// One contact in the address book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneNumber>,
    email: Option<EmailAddress>,
    address: Option<PostalAddress>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record for `name`
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            email: None,
            address: None,
            birthday: None,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    pub fn address(&self) -> Option<&PostalAddress> {
        self.address.as_ref()
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone; the same number may appear more than once
    pub fn add_phone(&mut self, raw: &str) -> Result<(), DomainError> {
        self.phones.push(PhoneNumber::new(raw)?);
        Ok(())
    }

    /// Find a phone by exact value
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| phone.as_str() == raw)
    }

    /// Remove the first phone equal to `raw`
    pub fn remove_phone(&mut self, raw: &str) -> Result<(), DomainError> {
        let index = self.phone_position(raw)?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replace the first phone equal to `old_raw`, keeping its position
    pub fn edit_phone(&mut self, old_raw: &str, new_raw: &str) -> Result<(), DomainError> {
        let index = self.phone_position(old_raw)?;
        self.phones[index] = PhoneNumber::new(new_raw)?;
        Ok(())
    }

    pub fn set_email(&mut self, raw: &str) -> Result<(), DomainError> {
        self.email = Some(EmailAddress::new(raw)?);
        Ok(())
    }

    pub fn set_address(&mut self, raw: &str) -> Result<(), DomainError> {
        self.address = Some(PostalAddress::new(raw)?);
        Ok(())
    }

    pub fn set_birthday(&mut self, raw: &str) -> Result<(), DomainError> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    /// Every populated field, name first, in display order
    pub fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![Field::Name(&self.name)];
        fields.extend(self.phones.iter().map(Field::Phone));
        fields.extend(self.email.iter().map(Field::Email));
        fields.extend(self.address.iter().map(Field::Address));
        fields.extend(self.birthday.iter().map(Field::Birthday));
        fields
    }

    /// Single-line human readable summary
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Convert into the plain structure used for persistence
    pub fn to_portable(&self) -> PortableRecord {
        PortableRecord {
            name: self.name.as_str().to_string(),
            phones: self.phones.iter().map(|p| p.as_str().to_string()).collect(),
            email: self.email.as_ref().map(|e| e.as_str().to_string()),
            address: self.address.as_ref().map(|a| a.as_str().to_string()),
            birthday: self.birthday.as_ref().map(Birthday::formatted),
        }
    }

    /// Rebuild a record from its portable form, re-running every validator
    ///
    /// Empty optional strings are treated as absent.
    pub fn from_portable(portable: &PortableRecord) -> Result<Self, DomainError> {
        let mut record = Self::new(portable.name.clone())?;

        for phone in &portable.phones {
            record.add_phone(phone)?;
        }
        if let Some(email) = non_empty(&portable.email) {
            record.set_email(email)?;
        }
        if let Some(address) = non_empty(&portable.address) {
            record.set_address(address)?;
        }
        if let Some(birthday) = non_empty(&portable.birthday) {
            record.set_birthday(birthday)?;
        }

        Ok(record)
    }

    fn phone_position(&self, raw: &str) -> Result<usize, DomainError> {
        self.phones
            .iter()
            .position(|phone| phone.as_str() == raw)
            .ok_or_else(|| DomainError::PhoneNotFound { phone: raw.to_string() })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = if self.phones.is_empty() {
            "No phones".to_string()
        } else {
            self.phones
                .iter()
                .map(PhoneNumber::as_str)
                .collect::<Vec<_>>()
                .join("; ")
        };

        write!(f, "Contact name: {}, phones: {}", self.name.as_str(), phones)?;
        if let Some(email) = &self.email {
            write!(f, ", email: {}", email.as_str())?;
        }
        if let Some(address) = &self.address {
            write!(f, ", address: {}", address.as_str())?;
        }
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday.formatted())?;
        }
        Ok(())
    }
}

/// Plain-field form of a Record as stored in the JSON file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortableRecord {
    pub name: String,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub birthday: Option<String>,
}
