use anyhow::{Context, Result, ensure};
use log::debug;
use std::{fs, path::Path};

/// Reads the complete content of a file.
///
/// # Errors
///
/// Returns an error if the path does not exist, is not a regular file or cannot be read.
pub fn read_all(path: &Path) -> Result<Vec<u8>> {
	ensure!(path.exists(), "file {path:?} does not exist");
	ensure!(path.is_file(), "path {path:?} must be a file");

	let bytes = fs::read(path).with_context(|| format!("Failed to read {path:?}"))?;
	debug!("read {} bytes from {path:?}", bytes.len());
	Ok(bytes)
}

/// Writes `bytes` to a file, replacing any previous content.
pub fn write_all(path: &Path, bytes: &[u8]) -> Result<()> {
	fs::write(path, bytes).with_context(|| format!("Failed to write {path:?}"))?;
	debug!("wrote {} bytes to {path:?}", bytes.len());
	Ok(())
}
