//! Shared application state for axum handlers.

use std::sync::Arc;

use contactbook_app::ports::ContactRepository;
use contactbook_app::services::contact_service::ContactService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need
/// to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<CR> {
    /// Contact CRUD service.
    pub contact_service: Arc<ContactService<CR>>,
}

impl<CR> Clone for AppState<CR> {
    fn clone(&self) -> Self {
        Self {
            contact_service: Arc::clone(&self.contact_service),
        }
    }
}

impl<CR> AppState<CR>
where
    CR: ContactRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(contact_service: ContactService<CR>) -> Self {
        Self {
            contact_service: Arc::new(contact_service),
        }
    }
}
