use std::collections::HashMap;

use anyhow::Context;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::app::AppState;
use crate::domain::{NewNewsletter, NewsletterChanges, NewsletterId};
use crate::routes::{ApiError, FormFields, NewsletterSchema, PathParam};

pub const DELETED_MESSAGE: &str = "record successfully deleted";

#[derive(Deserialize)]
pub struct FormData {
    title: Option<String>,
    body: Option<String>,
}

#[tracing::instrument(name = "List newsletters", skip(state))]
pub async fn list_newsletters(
    State(state): State<AppState>,
) -> Result<Json<Vec<NewsletterSchema>>, ApiError> {
    let newsletters = state
        .store
        .list()
        .await
        .context("Failed to fetch newsletters")?;

    Ok(Json(state.links.dump_many(&newsletters)))
}

#[tracing::instrument(
    name = "Adding a new newsletter",
    skip(state, form),
    fields(title = ?form.title)
)]
pub async fn create_newsletter(
    State(state): State<AppState>,
    FormFields(form): FormFields<FormData>,
) -> Result<(StatusCode, Json<NewsletterSchema>), ApiError> {
    let new_newsletter = NewNewsletter::parse(form.title, form.body)?;
    let newsletter = state
        .store
        .insert(new_newsletter)
        .await
        .context("Failed to insert a new newsletter")?;

    tracing::info!(id = newsletter.id, "Newsletter created");
    Ok((StatusCode::CREATED, Json(state.links.dump(&newsletter))))
}

#[tracing::instrument(name = "Fetch a newsletter", skip(state))]
pub async fn get_newsletter(
    State(state): State<AppState>,
    PathParam(id): PathParam<NewsletterId>,
) -> Result<Json<NewsletterSchema>, ApiError> {
    let newsletter = state
        .store
        .get(id)
        .await
        .context("Failed to fetch a newsletter")?
        .ok_or(ApiError::NotFound(id))?;

    Ok(Json(state.links.dump(&newsletter)))
}

#[tracing::instrument(name = "Update a newsletter", skip(state, fields))]
pub async fn update_newsletter(
    State(state): State<AppState>,
    PathParam(id): PathParam<NewsletterId>,
    FormFields(fields): FormFields<HashMap<String, String>>,
) -> Result<Json<NewsletterSchema>, ApiError> {
    let changes = NewsletterChanges::parse(fields)?;

    let newsletter = if changes.is_empty() {
        state
            .store
            .get(id)
            .await
            .context("Failed to fetch a newsletter")?
    } else {
        state
            .store
            .update(id, changes)
            .await
            .context("Failed to update a newsletter")?
    }
    .ok_or(ApiError::NotFound(id))?;

    Ok(Json(state.links.dump(&newsletter)))
}

#[tracing::instrument(name = "Delete a newsletter", skip(state))]
pub async fn delete_newsletter(
    State(state): State<AppState>,
    PathParam(id): PathParam<NewsletterId>,
) -> Result<Json<Value>, ApiError> {
    let deleted = state
        .store
        .delete(id)
        .await
        .context("Failed to delete a newsletter")?;

    if !deleted {
        return Err(ApiError::NotFound(id));
    }
    Ok(Json(json!({ "message": DELETED_MESSAGE })))
}
