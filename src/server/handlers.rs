//! HTTP handlers for the contact registry.
//!
//! Each handler performs one service call and answers with a rendered page,
//! a redirect to the listing, a plain-text error, or the export file.

use crate::error::RegistryError;
use crate::export::{EXPORT_FILE_NAME, XLSX_CONTENT_TYPE};
use crate::models::{ContactFields, ContactFilter, ListParams};
use crate::server::views::{FormTemplate, IndexTemplate};
use crate::services::ContactService;
use askama::Template;
use axum::extract::{Form, Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use std::sync::Arc;
use tracing::{debug, error};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub contact_service: Arc<dyn ContactService>,
}

impl AppState {
    pub fn new(contact_service: Arc<dyn ContactService>) -> Self {
        Self { contact_service }
    }
}

type HandlerResult<T> = Result<T, RegistryError>;

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        match self {
            RegistryError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
            RegistryError::NotFound(id) => {
                debug!(%id, "No contact with this id");
                (StatusCode::NOT_FOUND, "Contact not found").into_response()
            }
            other => {
                error!(error = %other, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

/// `GET /`: listing with optional search/gender/city filters.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> HandlerResult<Html<String>> {
    let filter = ContactFilter::from(params);
    let contacts = state.contact_service.list_contacts(&filter).await?;
    let cities = state.contact_service.list_cities().await?;

    let page = IndexTemplate::new(&contacts, &filter, cities);
    Ok(Html(page.render()?))
}

/// `GET /add`: empty form.
pub async fn add_form() -> HandlerResult<Html<String>> {
    Ok(Html(FormTemplate::add().render()?))
}

/// `POST /add`
pub async fn add_contact(
    State(state): State<AppState>,
    Form(fields): Form<ContactFields>,
) -> HandlerResult<Redirect> {
    state.contact_service.create_contact(fields).await?;
    Ok(Redirect::to("/"))
}

/// `GET /edit/{id}`: form pre-filled with the stored contact.
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<Html<String>> {
    let contact = state.contact_service.get_contact(&id).await?;
    Ok(Html(FormTemplate::edit(&contact).render()?))
}

/// `POST /edit/{id}`
pub async fn edit_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(fields): Form<ContactFields>,
) -> HandlerResult<Redirect> {
    state.contact_service.update_contact(&id, fields).await?;
    Ok(Redirect::to("/"))
}

/// `GET /delete/{id}`: always back to the listing, whether or not the
/// contact existed.
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<Redirect> {
    state.contact_service.delete_contact(&id).await?;
    Ok(Redirect::to("/"))
}

/// `GET /export`: every contact as a downloadable workbook.
pub async fn export_contacts(State(state): State<AppState>) -> HandlerResult<Response> {
    let workbook = state.contact_service.export_contacts().await?;
    let disposition = format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME);

    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        workbook,
    )
        .into_response())
}
