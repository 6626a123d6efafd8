use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VisualError {
    /// The resource id resolved to no file on disk.
    #[error("missing visual resource: {}", path.display())]
    ResourceNotFound { path: PathBuf },
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} contains no frames", path.display())]
    NoFrames { path: PathBuf },
}
