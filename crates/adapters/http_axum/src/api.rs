//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod contacts;

use axum::Router;
use axum::routing::get;

use contactbook_app::ports::ContactRepository;

use crate::state::AppState;

/// Build the contacts sub-router.
pub fn routes<CR>() -> Router<AppState<CR>>
where
    CR: ContactRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/contacts",
            get(contacts::list::<CR>).post(contacts::create::<CR>),
        )
        .route("/contacts/active", get(contacts::list_active::<CR>))
        .route(
            "/contacts/{id}",
            get(contacts::get::<CR>)
                .put(contacts::update::<CR>)
                .delete(contacts::delete::<CR>),
        )
}
