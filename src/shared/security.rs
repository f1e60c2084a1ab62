use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size accepted for configuration and credentials files (1 MB)
pub const MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Rejects a path that is a symbolic link
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
/// A path that does not exist yet is accepted, since the writer is about to
/// create it.
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => anyhow::bail!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        ),
    };

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Reads a small text file after checking it is a regular file within
/// [`MAX_FILE_SIZE`]
///
/// # Arguments
/// * `path` - The file to read
/// * `file_description` - Description used in error messages (e.g., "config file")
pub fn read_regular_file(path: &Path, file_description: &str) -> Result<String> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read {} metadata: {}: {}",
            file_description,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > MAX_FILE_SIZE {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            metadata.len(),
            MAX_FILE_SIZE
        );
    }

    fs::read_to_string(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read {}: {}: {}",
            file_description,
            path.display(),
            e
        )
    })
}

/// Makes a collection name safe to embed in a file name
///
/// Path separators, `..` sequences and control characters are replaced so
/// the artifact always lands inside the output directory.
pub fn sanitize_file_name_component(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '\0' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    replaced.replace("..", "__")
}
