//! JSON REST handlers for contacts.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use contactbook_app::ports::ContactRepository;
use contactbook_domain::contact::{Contact, ContactPatch, ContactStatus, NewContact};
use contactbook_domain::error::ValidationError;
use contactbook_domain::id::ContactId;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a contact.
///
/// Every field is optional at the wire level so that a missing field is
/// reported by name instead of as a generic decoding failure.
#[derive(Deserialize)]
pub struct CreateContactRequest {
    pub id: Option<ContactId>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<String>,
}

/// Request body for updating a contact. Unknown fields, `id` included, are
/// ignored.
#[derive(Deserialize)]
pub struct UpdateContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<String>,
}

/// Body returned after a successful delete.
#[derive(Serialize)]
pub struct DeletedBody {
    pub message: &'static str,
}

/// Possible responses from the list endpoints.
pub enum ListResponse {
    Ok(Json<Vec<Contact>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Contact>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Contact>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Deleted,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted => Json(DeletedBody {
                message: "contact deleted",
            })
            .into_response(),
        }
    }
}

fn parse_id(raw: &str) -> Result<ContactId, ApiError> {
    ContactId::from_str(raw).map_err(|_| ValidationError::InvalidId(raw.to_string()).into())
}

/// An empty status counts as absent, like the other required fields.
fn parse_status(raw: Option<String>) -> Result<Option<ContactStatus>, ValidationError> {
    raw.filter(|s| !s.is_empty())
        .map(|s| s.parse())
        .transpose()
}

/// `GET /contacts`
pub async fn list<CR>(State(state): State<AppState<CR>>) -> Result<ListResponse, ApiError>
where
    CR: ContactRepository + Send + Sync + 'static,
{
    let contacts = state.contact_service.list_contacts().await?;
    Ok(ListResponse::Ok(Json(contacts)))
}

/// `GET /contacts/active`
pub async fn list_active<CR>(
    State(state): State<AppState<CR>>,
) -> Result<ListResponse, ApiError>
where
    CR: ContactRepository + Send + Sync + 'static,
{
    let contacts = state.contact_service.list_active_contacts().await?;
    Ok(ListResponse::Ok(Json(contacts)))
}

/// `GET /contacts/:id`
pub async fn get<CR>(
    State(state): State<AppState<CR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    CR: ContactRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let contact = state.contact_service.get_contact(id).await?;
    Ok(GetResponse::Ok(Json(contact)))
}

/// `POST /contacts`
pub async fn create<CR>(
    State(state): State<AppState<CR>>,
    body: Result<Json<CreateContactRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    CR: ContactRepository + Send + Sync + 'static,
{
    let Json(req) = body?;

    let mut builder = NewContact::builder();
    if let Some(id) = req.id {
        builder = builder.id(id);
    }
    if let Some(name) = req.name {
        builder = builder.name(name);
    }
    if let Some(email) = req.email {
        builder = builder.email(email);
    }
    if let Some(phone) = req.phone {
        builder = builder.phone(phone);
    }
    if let Some(status) = parse_status(req.status)? {
        builder = builder.status(status);
    }

    let contact = builder.build()?;
    let created = state.contact_service.create_contact(contact).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /contacts/:id`
pub async fn update<CR>(
    State(state): State<AppState<CR>>,
    Path(id): Path<String>,
    body: Result<Json<UpdateContactRequest>, JsonRejection>,
) -> Result<GetResponse, ApiError>
where
    CR: ContactRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let Json(req) = body?;

    // A provided-but-empty status is rejected rather than ignored, but an
    // unknown id still answers 404 first.
    let status = match req.status.map(|raw| raw.parse::<ContactStatus>()).transpose() {
        Ok(status) => status,
        Err(err) => {
            state.contact_service.get_contact(id).await?;
            return Err(err.into());
        }
    };
    let patch = ContactPatch {
        name: req.name,
        email: req.email,
        phone: req.phone,
        status,
    };

    let updated = state.contact_service.update_contact(id, patch).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /contacts/:id`
pub async fn delete<CR>(
    State(state): State<AppState<CR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    CR: ContactRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    state.contact_service.delete_contact(id).await?;
    Ok(DeleteResponse::Deleted)
}
