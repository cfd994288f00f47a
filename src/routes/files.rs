use std::path::Path;

use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::warn;

use crate::http::response::{Response, ResponseBuilder, StatusCode};

/// Serves the raw bytes of `name` under the files directory.
///
/// Missing files are a 404; any other read failure is a 500.
pub async fn serve(dir: &Path, name: &str) -> Response {
    let path = dir.join(name);

    match fs::read(&path).await {
        Ok(bytes) => ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", "application/octet-stream")
            .body(bytes)
            .build(),

        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Response::not_found(),

        Err(e) => {
            warn!("failed to read {}: {}", path.display(), e);
            Response::internal_error()
        }
    }
}

/// Writes `body` to a new file named `name` under the files directory.
///
/// Uses an atomic create-if-not-exists open, so concurrent POSTs to the
/// same name elect exactly one writer. An existing file is left untouched
/// and still answered with 201.
pub async fn create(dir: &Path, name: &str, body: &[u8]) -> Response {
    let path = dir.join(name);

    let file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .await;

    match file {
        Ok(mut file) => match file.write_all(body).await {
            Ok(()) => Response::created(),
            Err(e) => {
                warn!("failed to write {}: {}", path.display(), e);
                Response::internal_error()
            }
        },

        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Response::created(),

        Err(e) => {
            warn!("failed to create {}: {}", path.display(), e);
            Response::internal_error()
        }
    }
}
