//! Contact — a person reachable by email and phone.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ContactBookError, ValidationError};
use crate::id::ContactId;

/// Whether a contact is currently in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    Active,
    Inactive,
}

impl ContactStatus {
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => f.write_str("active"),
            Self::Inactive => f.write_str("inactive"),
        }
    }
}

impl FromStr for ContactStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(ValidationError::InvalidStatus(other.to_string())),
        }
    }
}

/// A stored contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: ContactStatus,
}

/// A validated contact that has not been stored yet.
///
/// `id` is only set when the caller asked for a specific identifier;
/// otherwise the [`ContactList`](crate::contact_list::ContactList) assigns one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub id: Option<ContactId>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: ContactStatus,
}

impl NewContact {
    /// Create a builder for constructing a [`NewContact`].
    #[must_use]
    pub fn builder() -> NewContactBuilder {
        NewContactBuilder::default()
    }

    /// Attach the final identifier.
    #[must_use]
    pub fn into_contact(self, id: ContactId) -> Contact {
        Contact {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            status: self.status,
        }
    }
}

/// Step-by-step builder for [`NewContact`].
#[derive(Debug, Default)]
pub struct NewContactBuilder {
    id: Option<ContactId>,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    status: Option<ContactStatus>,
}

impl NewContactBuilder {
    #[must_use]
    pub fn id(mut self, id: ContactId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: ContactStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Consume the builder, validate, and return a [`NewContact`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for the first of `name`,
    /// `email`, `phone`, `status` that is absent or empty.
    pub fn build(self) -> Result<NewContact, ContactBookError> {
        Ok(NewContact {
            id: self.id,
            name: required("name", self.name)?,
            email: required("email", self.email)?,
            phone: required("phone", self.phone)?,
            status: self.status.ok_or(ValidationError::MissingField("status"))?,
        })
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ValidationError::MissingField(field)),
    }
}

/// A partial update. Absent fields keep their current value; the id is
/// never part of a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<ContactStatus>,
}

impl ContactPatch {
    /// Check that every provided field would keep the contact valid.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when a provided text field is
    /// empty.
    pub fn validate(&self) -> Result<(), ContactBookError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
        ] {
            if value.as_deref() == Some("") {
                return Err(ValidationError::MissingField(field).into());
            }
        }
        Ok(())
    }

    /// Merge the provided fields into `contact`.
    pub fn apply(self, contact: &mut Contact) {
        if let Some(name) = self.name {
            contact.name = name;
        }
        if let Some(email) = self.email {
            contact.email = email;
        }
        if let Some(phone) = self.phone {
            contact.phone = phone;
        }
        if let Some(status) = self.status {
            contact.status = status;
        }
    }
}
