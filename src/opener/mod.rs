// src/opener/mod.rs
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("{tool} is not available on this system")]
    HandlerMissing { tool: &'static str },

    #[error("cannot open {path}: {source}")]
    Launch { path: PathBuf, source: io::Error },
}

// hand the file to the platform's default handler; the handler decides
// what "open" means
pub fn open_path(path: &Path) -> Result<(), OpenError> {
    info!("opening {:?} with the system handler", path);

    #[cfg(target_os = "macos")]
    {
        Command::new("open")
            .arg(path)
            .spawn()
            .map_err(|source| OpenError::Launch {
                path: path.to_path_buf(),
                source,
            })?;
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd")
            .args(["/C", "start", ""])
            .arg(path)
            .spawn()
            .map_err(|source| OpenError::Launch {
                path: path.to_path_buf(),
                source,
            })?;
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    {
        if which::which("xdg-open").is_err() {
            return Err(OpenError::HandlerMissing { tool: "xdg-open" });
        }
        Command::new("xdg-open")
            .arg(path)
            .spawn()
            .map_err(|source| OpenError::Launch {
                path: path.to_path_buf(),
                source,
            })?;
    }

    Ok(())
}
