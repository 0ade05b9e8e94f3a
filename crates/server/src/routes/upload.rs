use actix_multipart::Multipart;
use actix_web::{post, web, HttpResponse};
use futures_util::StreamExt;
use motionforge_common::{MotionForgeError, DEFAULT_CLIP_LENGTH, MAX_CLIP_LENGTH, MIN_CLIP_LENGTH};
use motionforge_media::split_video;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{HistoryRecord, UploadQuery, UploadResponse};

const TOO_LARGE: &str = "File is too large for the server.";

/// Parse and range-check the `clip_length` query parameter
pub fn parse_clip_length(raw: Option<&str>) -> Result<u32, MotionForgeError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_CLIP_LENGTH);
    };

    let value: i64 = raw.trim().parse().map_err(|_| {
        MotionForgeError::invalid_input(format!("clip_length must be an integer, got {:?}", raw))
    })?;

    if value < MIN_CLIP_LENGTH as i64 || value > MAX_CLIP_LENGTH as i64 {
        return Err(MotionForgeError::invalid_input(format!(
            "clip_length must be between {} and {} seconds",
            MIN_CLIP_LENGTH, MAX_CLIP_LENGTH
        )));
    }

    Ok(value as u32)
}

/// Reduce a client supplied file name to a safe final path component
pub fn sanitize_filename(raw: &str) -> Option<String> {
    let name = raw.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or("").trim();

    match name {
        "" | "." | ".." => None,
        name => Some(name.to_string()),
    }
}

/// Name an upload is stored under, unique per request
pub fn stored_upload_name(raw: &str, id: &Uuid) -> String {
    match sanitize_filename(raw) {
        Some(name) => format!("{}_{}", id, name),
        None => format!("{}.mp4", id),
    }
}

/// Public URL of a processed clip
fn processed_url(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    format!("/clips/processed/{}", name)
}

/// Stream the `file` field to disk, returns (original filename, stored path)
async fn save_upload(
    payload: &mut Multipart,
    state: &AppState,
) -> Result<Option<(String, PathBuf)>, ApiError> {
    while let Some(field) = payload.next().await {
        let mut field =
            field.map_err(|e| ApiError::bad_request(format!("Invalid multipart payload: {}", e)))?;

        let content_disposition = field.content_disposition();
        if content_disposition.get_name() != Some("file") {
            continue;
        }

        let filename = content_disposition
            .get_filename()
            .unwrap_or("unknown")
            .to_string();
        let save_filename = stored_upload_name(&filename, &Uuid::new_v4());
        let filepath = state.config.get_upload_path(&save_filename);

        let mut f = tokio::fs::File::create(&filepath).await?;
        let mut written: u64 = 0;

        while let Some(chunk) = field.next().await {
            let data = match chunk {
                Ok(data) => data,
                Err(e) => {
                    drop(f);
                    let _ = tokio::fs::remove_file(&filepath).await;
                    return Err(ApiError::bad_request(format!("Upload interrupted: {}", e)));
                }
            };

            written += data.len() as u64;
            if written > state.config.max_upload_bytes {
                drop(f);
                let _ = tokio::fs::remove_file(&filepath).await;
                warn!(
                    "Rejected upload {}: exceeds {} bytes",
                    filename, state.config.max_upload_bytes
                );
                return Err(MotionForgeError::payload_too_large(TOO_LARGE).into());
            }

            f.write_all(&data).await?;
        }

        f.flush().await?;
        info!("Saved upload {} ({} bytes) to {}", filename, written, filepath.display());

        return Ok(Some((filename, filepath)));
    }

    Ok(None)
}

#[post("/upload")]
pub async fn upload(
    query: web::Query<UploadQuery>,
    mut payload: Multipart,
    state: web::Data<Arc<AppState>>,
) -> Result<HttpResponse, ApiError> {
    let clip_length = parse_clip_length(query.clip_length.as_deref())?;

    let Some((filename, saved_path)) = save_upload(&mut payload, &state).await? else {
        return Err(ApiError::unprocessable("Field 'file' is required"));
    };

    let (clips, processed) = {
        let _guard = state.split_lock.lock().await;

        let clips = split_video(
            state.tool.as_ref(),
            &saved_path,
            &state.config.clips_dir,
            clip_length as u64,
            state.config.max_clips,
        )
        .await
        .map_err(|e| {
            error!("Split failed for {}: {}", saved_path.display(), e);
            ApiError::internal(format!("Split error: {}", e))
        })?;

        let mut processed = Vec::with_capacity(clips.len());
        for clip in &clips {
            let output = state.processor.process(&clip.path).await.map_err(|e| {
                error!("Processing failed for {}: {}", clip.path.display(), e);
                ApiError::internal(format!("Processing error: {}", e))
            })?;
            processed.push(output);
        }

        (clips, processed)
    };

    let response = UploadResponse {
        message: "Upload successful + clips generated".to_string(),
        filename,
        saved_to: saved_path.to_string_lossy().to_string(),
        clip_length,
        num_clips: clips.len(),
        clips: clips
            .iter()
            .map(|c| c.path.to_string_lossy().to_string())
            .collect(),
        processed_clips: processed
            .iter()
            .map(|p| p.to_string_lossy().to_string())
            .collect(),
        clip_urls: clips
            .iter()
            .map(|c| format!("/clips/{}", c.file_name()))
            .collect(),
        processed_clip_urls: processed.iter().map(|p| processed_url(p)).collect(),
    };

    let record = HistoryRecord::from_response(Uuid::new_v4().to_string(), &response);
    if let Err(e) = state.history.write().await.add_record(record) {
        // History is best-effort
        warn!("Failed to record upload history: {}", e);
    }

    info!(
        "Generated {} clips for {} (clip_length={}s)",
        response.num_clips, response.filename, clip_length
    );

    Ok(HttpResponse::Ok().json(response))
}
