use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::debug;

// file handle is dropped (closed) on every return path, including errors from write_all
pub async fn write_scratch_file(dir: &Path, name: &str, content: &[u8]) -> Result<PathBuf> {
    let path = dir.join(name);
    debug!("write scratch file, path={}, bytes={}", path.to_string_lossy(), content.len());

    let mut file = File::create(&path)
        .await
        .with_context(|| format!("failed to create scratch file, path={}", path.to_string_lossy()))?;
    file.write_all(content)
        .await
        .with_context(|| format!("failed to write scratch file, path={}", path.to_string_lossy()))?;
    file.flush()
        .await
        .with_context(|| format!("failed to flush scratch file, path={}", path.to_string_lossy()))?;

    Ok(path)
}
