use anyhow::anyhow;
use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::instrument;
use utoipa::IntoParams;

use internlink_core::AppError;

use crate::state::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct SignedLink {
    /// Unix time after which the link stops working.
    pub expires: Option<i64>,
    pub signature: Option<String>,
}

/// Serves an object through a link issued by `ObjectStore::presigned_url`.
#[utoipa::path(
    get,
    path = "/files/{key}",
    params(
        ("key" = String, Path, description = "Object key"),
        SignedLink
    ),
    responses(
        (status = 200, description = "Object content"),
        (status = 401, description = "Missing, forged or expired link"),
    ),
    tag = "Files"
)]
#[instrument(skip(state, link))]
pub async fn download(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(link): Query<SignedLink>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(expires), Some(signature)) = (link.expires, link.signature) else {
        return Err(AppError::unauthorized(anyhow!("Invalid download link")));
    };

    if !state
        .url_signer
        .verify(&key, expires, &signature, Utc::now().timestamp())
    {
        return Err(AppError::unauthorized(anyhow!(
            "Download link is invalid or has expired"
        )));
    }

    let content = state.objects.get(&key).await?;
    let content_type = if key.ends_with(".pdf") {
        "application/pdf"
    } else {
        "application/octet-stream"
    };

    Ok(([(header::CONTENT_TYPE, content_type)], content))
}
