//! Storage port — repository trait for contact persistence.

use std::future::Future;

use contactbook_domain::contact::{Contact, ContactPatch, ContactStatus, NewContact};
use contactbook_domain::error::ContactBookError;
use contactbook_domain::id::ContactId;

/// Persistence for contacts.
///
/// Lookups and removals report absence as `Ok(None)`; turning that into a
/// not-found error is the service's job.
pub trait ContactRepository {
    /// Every stored contact, in stored order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Contact>, ContactBookError>> + Send;

    fn get_by_id(
        &self,
        id: ContactId,
    ) -> impl Future<Output = Result<Option<Contact>, ContactBookError>> + Send;

    /// Contacts whose status equals `status`, in stored order.
    fn find_by_status(
        &self,
        status: ContactStatus,
    ) -> impl Future<Output = Result<Vec<Contact>, ContactBookError>> + Send;

    /// Store a new contact, assigning its id unless one was requested.
    fn create(
        &self,
        contact: NewContact,
    ) -> impl Future<Output = Result<Contact, ContactBookError>> + Send;

    /// Merge `patch` into an existing contact, keeping its id.
    fn update(
        &self,
        id: ContactId,
        patch: ContactPatch,
    ) -> impl Future<Output = Result<Option<Contact>, ContactBookError>> + Send;

    /// Remove a contact, returning what was removed.
    fn delete(
        &self,
        id: ContactId,
    ) -> impl Future<Output = Result<Option<Contact>, ContactBookError>> + Send;
}

impl<T: ContactRepository + Send + Sync> ContactRepository for std::sync::Arc<T> {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Contact>, ContactBookError>> + Send {
        (**self).get_all()
    }

    fn get_by_id(
        &self,
        id: ContactId,
    ) -> impl Future<Output = Result<Option<Contact>, ContactBookError>> + Send {
        (**self).get_by_id(id)
    }

    fn find_by_status(
        &self,
        status: ContactStatus,
    ) -> impl Future<Output = Result<Vec<Contact>, ContactBookError>> + Send {
        (**self).find_by_status(status)
    }

    fn create(
        &self,
        contact: NewContact,
    ) -> impl Future<Output = Result<Contact, ContactBookError>> + Send {
        (**self).create(contact)
    }

    fn update(
        &self,
        id: ContactId,
        patch: ContactPatch,
    ) -> impl Future<Output = Result<Option<Contact>, ContactBookError>> + Send {
        (**self).update(id, patch)
    }

    fn delete(
        &self,
        id: ContactId,
    ) -> impl Future<Output = Result<Option<Contact>, ContactBookError>> + Send {
        (**self).delete(id)
    }
}
