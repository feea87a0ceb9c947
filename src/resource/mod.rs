//! Static resource serving.
//!
//! Resources are image files served by name from a fixed directory. The
//! only admission check is the extension allow-list; the file read
//! primitive is trusted to resolve paths.

use std::path::Path;

use tokio::fs;

use crate::config::schema::ResourceConfig;
use crate::dispatch::handler::DispatchError;

/// Extensions a resource request may name.
const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "svg", "ico", "webp", "bmp"];

/// The canonical (lowercased) extension of an allowed resource path,
/// or `None` when the path is not servable.
pub fn allowed_extension(path: &str) -> Option<String> {
    let ext = Path::new(path).extension()?.to_str()?.to_ascii_lowercase();
    ALLOWED_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

/// Content type for an allowed extension.
pub fn content_type(extension: &str) -> &'static str {
    match extension {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// Load a resource by request path.
///
/// Paths without an allowed image extension and files that cannot be
/// read both surface the same not-found error.
pub async fn load(
    config: &ResourceConfig,
    resource: &str,
) -> Result<(&'static str, Vec<u8>), DispatchError> {
    let Some(extension) = allowed_extension(resource) else {
        return Err(DispatchError::UnknownResource(resource.to_string()));
    };

    let path = Path::new(&config.dir).join(resource);
    match fs::read(&path).await {
        Ok(bytes) => Ok((content_type(&extension), bytes)),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Resource read failed");
            Err(DispatchError::UnknownResource(resource.to_string()))
        }
    }
}
