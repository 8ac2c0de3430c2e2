//! Contact service — use-cases for managing contacts.

use contactbook_domain::contact::{Contact, ContactPatch, ContactStatus, NewContact};
use contactbook_domain::error::{ContactBookError, NotFoundError};
use contactbook_domain::id::ContactId;

use crate::ports::ContactRepository;

/// Application service for contact CRUD operations.
pub struct ContactService<R> {
    repo: R,
}

fn not_found(id: ContactId) -> ContactBookError {
    NotFoundError {
        entity: "Contact",
        id: id.to_string(),
    }
    .into()
}

impl<R: ContactRepository> ContactService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all contacts.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_contacts(&self) -> Result<Vec<Contact>, ContactBookError> {
        self.repo.get_all().await
    }

    /// List contacts with the given status.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_contacts_by_status(
        &self,
        status: ContactStatus,
    ) -> Result<Vec<Contact>, ContactBookError> {
        self.repo.find_by_status(status).await
    }

    /// List contacts whose status is [`ContactStatus::Active`].
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_active_contacts(&self) -> Result<Vec<Contact>, ContactBookError> {
        self.list_contacts_by_status(ContactStatus::Active).await
    }

    /// Look up a contact by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`ContactBookError::NotFound`] when no contact with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_contact(&self, id: ContactId) -> Result<Contact, ContactBookError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Store a new contact.
    ///
    /// # Errors
    ///
    /// Returns [`ContactBookError::Validation`] when the requested id is
    /// already taken, or a storage error from the repository.
    pub async fn create_contact(&self, contact: NewContact) -> Result<Contact, ContactBookError> {
        let created = self.repo.create(contact).await?;
        tracing::info!(contact_id = %created.id, "contact created");
        Ok(created)
    }

    /// Merge a partial update into an existing contact. The id never changes.
    ///
    /// # Errors
    ///
    /// Returns [`ContactBookError::NotFound`] when no contact with `id` exists,
    /// [`ContactBookError::Validation`] if the patch blanks a field of an
    /// existing contact, or a storage error from the repository.
    pub async fn update_contact(
        &self,
        id: ContactId,
        patch: ContactPatch,
    ) -> Result<Contact, ContactBookError> {
        let updated = self
            .repo
            .update(id, patch)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!(contact_id = %id, "contact updated");
        Ok(updated)
    }

    /// Delete a contact by id, returning the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`ContactBookError::NotFound`] when no contact with `id` exists,
    /// or a storage error from the repository.
    pub async fn delete_contact(&self, id: ContactId) -> Result<Contact, ContactBookError> {
        let removed = self.repo.delete(id).await?.ok_or_else(|| not_found(id))?;
        tracing::info!(contact_id = %id, "contact deleted");
        Ok(removed)
    }
}
