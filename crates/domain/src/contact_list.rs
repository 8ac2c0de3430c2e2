//! Contact list — the ordered collection of contacts that makes up a store.
//!
//! Its serde representation is the on-disk document
//! `{ "contacts": [Contact, ...] }`. Insertion order is preserved.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::contact::{Contact, ContactPatch, ContactStatus, NewContact};
use crate::error::{ContactBookError, ValidationError};
use crate::id::ContactId;

/// Ordered collection of contacts with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Document")]
pub struct ContactList {
    contacts: Vec<Contact>,
}

/// Unchecked wire form; ids are verified in the `TryFrom` conversion.
#[derive(Deserialize)]
struct Document {
    #[serde(default)]
    contacts: Vec<Contact>,
}

impl TryFrom<Document> for ContactList {
    type Error = ValidationError;

    fn try_from(document: Document) -> Result<Self, Self::Error> {
        Self::try_new(document.contacts)
    }
}

impl ContactList {
    /// Wrap existing contacts.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateId`] for the first id that occurs
    /// twice.
    pub fn try_new(contacts: Vec<Contact>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::with_capacity(contacts.len());
        if let Some(dup) = contacts.iter().find(|c| !seen.insert(c.id)) {
            return Err(ValidationError::DuplicateId(dup.id));
        }
        Ok(Self { contacts })
    }

    #[must_use]
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    #[must_use]
    pub fn into_contacts(self) -> Vec<Contact> {
        self.contacts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// Contacts whose status equals `status`, in stored order.
    pub fn with_status(&self, status: ContactStatus) -> impl Iterator<Item = &Contact> {
        self.contacts.iter().filter(move |c| c.status == status)
    }

    /// Highest id in the list plus one, or [`ContactId::FIRST`] when empty.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::IdSpaceExhausted`] when the highest id is
    /// `u64::MAX`.
    pub fn next_id(&self) -> Result<ContactId, ValidationError> {
        match self.contacts.iter().map(|c| c.id).max() {
            None => Ok(ContactId::FIRST),
            Some(max) => max.next().ok_or(ValidationError::IdSpaceExhausted(max)),
        }
    }

    /// Append a contact, assigning an id unless one was requested. A
    /// requested id of zero counts as no request.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateId`] when the requested id is
    /// already taken, or [`ValidationError::IdSpaceExhausted`] when no id is
    /// left to assign.
    pub fn add(&mut self, new: NewContact) -> Result<&Contact, ContactBookError> {
        let id = match new.id.filter(|id| !id.is_unassigned()) {
            Some(id) if self.get(id).is_some() => {
                return Err(ValidationError::DuplicateId(id).into());
            }
            Some(id) => id,
            None => self.next_id()?,
        };
        self.contacts.push(new.into_contact(id));
        let index = self.contacts.len() - 1;
        Ok(&self.contacts[index])
    }

    /// Merge `patch` into the contact with `id`. Returns `Ok(None)` when no
    /// such contact exists, whatever the patch holds.
    ///
    /// # Errors
    ///
    /// Returns [`ContactBookError::Validation`] when the patch would blank a
    /// required field of an existing contact.
    pub fn update(
        &mut self,
        id: ContactId,
        patch: ContactPatch,
    ) -> Result<Option<&Contact>, ContactBookError> {
        let Some(contact) = self.contacts.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        patch.validate()?;
        patch.apply(contact);
        Ok(Some(&*contact))
    }

    /// Remove and return the contact with `id`, if present.
    pub fn remove(&mut self, id: ContactId) -> Option<Contact> {
        let index = self.contacts.iter().position(|c| c.id == id)?;
        Some(self.contacts.remove(index))
    }
}
