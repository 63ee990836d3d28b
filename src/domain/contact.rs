use super::*;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: u64,
    pub name: String,
    pub phone: String,
    pub email: String,

    #[serde(default)]
    pub tag: Tag,
}

/// Category a contact is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Friend,
    Work,
    Family,

    // Tags written by other versions of the book fall back to `other`.
    #[default]
    #[serde(other)]
    Other,
}

/// Field values collected by a front end before calling the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInput {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub tag: Option<Tag>,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Friend => "friend",
            Tag::Work => "work",
            Tag::Family => "family",
            Tag::Other => "other",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "friend" => Ok(Tag::Friend),
            "work" => Ok(Tag::Work),
            "family" => Ok(Tag::Family),
            "other" => Ok(Tag::Other),
            other => Err(format!(
                "unknown tag '{}', expected one of friend, work, family, other",
                other
            )),
        }
    }
}

impl ContactInput {
    pub fn new(name: &str, phone: &str, email: &str, tag: Option<Tag>) -> Self {
        Self {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            tag,
        }
    }

    /// Trims every text field, mirroring what a form submission would do.
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            tag: self.tag,
        }
    }

    /// Checks this (already normalized) input against `others`.
    ///
    /// Rules are applied in a fixed order and the first failure is reported:
    /// required fields, phone uniqueness, email uniqueness, email shape.
    /// The caller decides which contacts count as "others", which is how an
    /// update excludes the contact being edited.
    pub fn validate<'a, I>(&self, others: I) -> Result<(), AppError>
    where
        I: IntoIterator<Item = &'a Contact> + Clone,
    {
        if self.name.is_empty() || self.phone.is_empty() || self.email.is_empty() {
            return Err(ValidationError::MissingField.into());
        }

        if others.clone().into_iter().any(|c| c.phone == self.phone) {
            return Err(ValidationError::DuplicatePhone.into());
        }

        if others.into_iter().any(|c| c.email == self.email) {
            return Err(ValidationError::DuplicateEmail.into());
        }

        if !validate_email(&self.email)? {
            return Err(ValidationError::InvalidEmailFormat.into());
        }

        Ok(())
    }

    pub fn into_contact(self, id: u64) -> Contact {
        Contact {
            id,
            name: self.name,
            phone: self.phone,
            email: self.email,
            tag: self.tag.unwrap_or_default(),
        }
    }
}

impl From<&Contact> for ContactInput {
    fn from(contact: &Contact) -> Self {
        Self {
            name: contact.name.clone(),
            phone: contact.phone.clone(),
            email: contact.email.clone(),
            tag: Some(contact.tag),
        }
    }
}

pub fn validate_email(email: &str) -> Result<bool, AppError> {
    // local@domain.tld, no whitespace and a single '@'
    let re = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")?;
    Ok(re.is_match(email))
}
