//! Transient on-disk staging for downloaded archives.
use crate::catalog::Identifier;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};

/// A downloaded archive waiting for delivery.
///
/// Each invocation gets its own file (`<appid>-<random>.zip`) so two concurrent requests for
/// the same identifier never share a path. The file is removed by [`StagedArchive::discard`],
/// or on drop if the owner bailed out early.
#[derive(Debug)]
pub struct StagedArchive {
    path: PathBuf,
    attachment_name: String,
    removed: bool,
}

impl StagedArchive {
    pub async fn create(dir: &Path, id: &Identifier) -> io::Result<(Self, File)> {
        fs::create_dir_all(dir).await?;
        let path = dir.join(format!("{id}-{:016x}.zip", rand::random::<u64>()));
        let file = File::create(&path).await?;
        Ok((
            Self {
                path,
                attachment_name: format!("{id}.zip"),
                removed: false,
            },
            file,
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Filename users see on the attachment.
    pub fn attachment_name(&self) -> &str {
        &self.attachment_name
    }

    /// Size read from file metadata.
    pub async fn size_bytes(&self) -> io::Result<u64> {
        Ok(fs::metadata(&self.path).await?.len())
    }

    pub async fn discard(mut self) -> io::Result<()> {
        self.removed = true;
        fs::remove_file(&self.path).await
    }
}

impl Drop for StagedArchive {
    fn drop(&mut self) {
        if !self.removed {
            if let Err(e) = std::fs::remove_file(&self.path) {
                tracing::warn!(target = "staging", path = %self.path.display(), error = %e, "failed to remove staged archive");
            }
        }
    }
}
