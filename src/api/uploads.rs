//! File upload endpoint

use axum::extract::State;
use axum_extra::extract::{multipart::MultipartRejection, Multipart};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    AppState,
};

/// Multipart field carrying the uploaded file
pub const UPLOAD_FIELD: &str = "image";

/// Multipart form accepted by the upload endpoint
#[derive(ToSchema)]
pub struct UploadForm {
    /// File to store under its original name
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}

/// Upload a file into the configured upload directory
#[utoipa::path(
    post,
    path = "/upload",
    tag = "uploads",
    security(("bearer_auth" = [])),
    request_body(
        content = UploadForm,
        content_type = "multipart/form-data",
        description = "File in the `image` field"
    ),
    responses(
        (status = 200, description = "File stored", body = String),
        (status = 400, description = "Missing or malformed `image` field"),
        (status = 500, description = "File could not be written")
    )
)]
pub async fn upload_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<String> {
    let mut multipart = multipart?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = field
            .file_name()
            .map(str::to_owned)
            .ok_or_else(|| AppError::BadRequest(format!("Field `{}` is not a file", UPLOAD_FIELD)))?;
        let contents = field.bytes().await?;

        let stored = state.services.uploads.save(&filename, &contents).await?;
        return Ok(format!("File uploaded successfully: {}", stored));
    }

    Err(AppError::BadRequest(format!(
        "Missing multipart field `{}`",
        UPLOAD_FIELD
    )))
}
