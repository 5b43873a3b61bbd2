use anyhow::Result;
use std::fs::{self, create_dir_all, File};
use std::io::{Read, Write};
use std::path::Path;

/// What a re-read of the output file found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    Ok { bytes: u64 },
    Empty,
    Missing,
}

impl Verification {
    pub fn is_ok(&self) -> bool { matches!(self, Verification::Ok { .. }) }
}

/// Write `content` to `path`, replacing whatever was there.
pub fn save_ris<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        create_dir_all(dir)?;
    }
    let mut f = File::create(path)?;
    f.write_all(content.as_bytes())?;
    f.flush()?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote ris file");
    Ok(())
}

pub fn load_ris<P: AsRef<Path>>(path: P) -> Result<String> {
    let mut f = File::open(path)?;
    let mut buf = String::new();
    f.read_to_string(&mut buf)?;
    Ok(buf)
}

/// Check that `path` is a regular file with a non-zero size. Never fails; the answer is advisory.
pub fn verify_ris<P: AsRef<Path>>(path: P) -> Verification {
    match fs::metadata(path) {
        Ok(meta) if !meta.is_file() => Verification::Missing,
        Ok(meta) if meta.len() > 0 => Verification::Ok { bytes: meta.len() },
        Ok(_) => Verification::Empty,
        Err(_) => Verification::Missing,
    }
}
