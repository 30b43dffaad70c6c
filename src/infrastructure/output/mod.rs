use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

#[derive(Debug, thiserror::Error)]
#[error("{}: {source}", path.display())]
pub struct OutputError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Write the audio payload to `path`, replacing any existing file.
/// New files are created with mode 0644 on Unix.
pub async fn write_audio(path: &Path, audio: &[u8]) -> Result<(), OutputError> {
    let wrap = |source: std::io::Error| OutputError {
        path: path.to_path_buf(),
        source,
    };

    let mut options = tokio::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o644);

    let mut file = options.open(path).await.map_err(wrap)?;
    file.write_all(audio).await.map_err(wrap)?;
    file.flush().await.map_err(wrap)?;

    tracing::debug!(path = %path.display(), bytes = audio.len(), "Audio file written");

    Ok(())
}
