//! Camera collaborator.

use std::future::Future;
use std::path::PathBuf;

use crate::model::ImageReference;

/// Produces a photo on request. `None` means the user cancelled; no event
/// reaches the creation flow in that case.
pub trait Camera: Send + Sync + 'static {
    fn capture(&self) -> impl Future<Output = Option<ImageReference>> + Send;
}

/// Camera that "captures" an existing file, or cancels when it has none.
#[derive(Debug, Clone, Default)]
pub struct FileCamera {
    path: Option<PathBuf>,
}

impl FileCamera {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl Camera for FileCamera {
    async fn capture(&self) -> Option<ImageReference> {
        let path = self.path.as_ref()?;
        match tokio::fs::metadata(path).await {
            Ok(meta) if meta.is_file() => {
                let absolute = match tokio::fs::canonicalize(path).await {
                    Ok(absolute) => absolute,
                    Err(err) => {
                        tracing::warn!(
                            path = %path.display(),
                            error = %err,
                            "capture source unresolvable"
                        );
                        return None;
                    }
                };
                let image = ImageReference::from_path(&absolute);
                if image.is_none() {
                    tracing::warn!(path = %absolute.display(), "capture source path is not UTF-8");
                }
                image
            }
            Ok(_) => {
                tracing::warn!(path = %path.display(), "capture source is not a file");
                None
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "capture source unreadable");
                None
            }
        }
    }
}
