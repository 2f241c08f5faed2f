//! Reading script output files back as response bodies.

use std::io::ErrorKind;
use std::path::Path;

use tokio::fs;
use tokio::io::AsyncReadExt;

use crate::error::CoreError;

/// Read the whole of `path` as text, refusing files larger than `max_bytes`.
///
/// An empty file is a valid, empty result. A missing file is
/// [`CoreError::NotFound`], distinct from other I/O failures. Invalid UTF-8
/// is replaced rather than rejected, since the scripts write plain CSV/FASTA.
pub async fn read_result_file(path: &Path, max_bytes: u64) -> Result<String, CoreError> {
    let file = fs::File::open(path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => CoreError::NotFound {
            entity: "Result file",
            id: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        },
        _ => CoreError::io(path, e),
    })?;

    let meta = file.metadata().await.map_err(|e| CoreError::io(path, e))?;
    if !meta.is_file() {
        return Err(CoreError::io(
            path,
            std::io::Error::new(ErrorKind::InvalidInput, "not a regular file"),
        ));
    }
    if meta.len() > max_bytes {
        return Err(CoreError::TooLarge {
            path: path.to_path_buf(),
            size: meta.len(),
            limit: max_bytes,
        });
    }

    // The file may still grow after the metadata check; read one byte past
    // the limit to notice.
    let mut buf = Vec::with_capacity(meta.len() as usize);
    file.take(max_bytes + 1)
        .read_to_end(&mut buf)
        .await
        .map_err(|e| CoreError::io(path, e))?;
    if buf.len() as u64 > max_bytes {
        return Err(CoreError::TooLarge {
            path: path.to_path_buf(),
            size: buf.len() as u64,
            limit: max_bytes,
        });
    }

    Ok(match String::from_utf8(buf) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}
