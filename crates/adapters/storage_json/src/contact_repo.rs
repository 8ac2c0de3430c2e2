//! JSON-file implementation of [`ContactRepository`].
//!
//! Each call loads the document fresh; mutating calls write it back.

use std::future::Future;

use contactbook_app::ports::ContactRepository;
use contactbook_domain::contact::{Contact, ContactPatch, ContactStatus, NewContact};
use contactbook_domain::error::ContactBookError;
use contactbook_domain::id::ContactId;

use crate::file::JsonFile;

/// File-backed contact repository.
pub struct JsonContactRepository {
    file: JsonFile,
}

impl JsonContactRepository {
    /// Create a new repository over the given file.
    #[must_use]
    pub fn new(file: JsonFile) -> Self {
        Self { file }
    }
}

impl ContactRepository for JsonContactRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Contact>, ContactBookError>> + Send {
        let file = self.file.clone();
        async move {
            let list = file.load().await?;
            Ok(list.into_contacts())
        }
    }

    fn get_by_id(
        &self,
        id: ContactId,
    ) -> impl Future<Output = Result<Option<Contact>, ContactBookError>> + Send {
        let file = self.file.clone();
        async move {
            let list = file.load().await?;
            Ok(list.get(id).cloned())
        }
    }

    fn find_by_status(
        &self,
        status: ContactStatus,
    ) -> impl Future<Output = Result<Vec<Contact>, ContactBookError>> + Send {
        let file = self.file.clone();
        async move {
            let list = file.load().await?;
            Ok(list.with_status(status).cloned().collect())
        }
    }

    fn create(
        &self,
        contact: NewContact,
    ) -> impl Future<Output = Result<Contact, ContactBookError>> + Send {
        let file = self.file.clone();
        async move {
            let mut list = file.load().await?;
            let created = list.add(contact)?.clone();
            file.store(&list).await?;
            Ok(created)
        }
    }

    fn update(
        &self,
        id: ContactId,
        patch: ContactPatch,
    ) -> impl Future<Output = Result<Option<Contact>, ContactBookError>> + Send {
        let file = self.file.clone();
        async move {
            let mut list = file.load().await?;
            let Some(updated) = list.update(id, patch)?.cloned() else {
                return Ok(None);
            };
            file.store(&list).await?;
            Ok(Some(updated))
        }
    }

    fn delete(
        &self,
        id: ContactId,
    ) -> impl Future<Output = Result<Option<Contact>, ContactBookError>> + Send {
        let file = self.file.clone();
        async move {
            let mut list = file.load().await?;
            let Some(removed) = list.remove(id) else {
                return Ok(None);
            };
            file.store(&list).await?;
            Ok(Some(removed))
        }
    }
}
