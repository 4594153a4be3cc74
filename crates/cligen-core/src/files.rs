//! Filesystem helpers shared by project and command creation

use std::fs::{self, DirBuilder, File};
use std::io::ErrorKind;

use camino::Utf8Path;
use tera::Context;
use tracing::debug;

use crate::error::{Error, Result};
use crate::render::render;

/// Mode for the project root directory (rwxr-xr--)
pub const PROJECT_DIR_MODE: u32 = 0o754;

/// Mode for the command subdirectory (rwxr-x--x)
pub const COMMAND_DIR_MODE: u32 = 0o751;

/// Create `path` as a single directory level if it does not exist yet.
///
/// Parents are not created. An existing non-directory at `path` is an error.
pub fn ensure_dir(path: &Utf8Path, mode: u32) -> Result<()> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => return Ok(()),
        Ok(_) => {
            return Err(Error::NotADirectory {
                path: path.to_owned(),
            })
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(Error::create_dir(path, e)),
    }

    let mut builder = DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    builder
        .create(path)
        .map_err(|e| Error::create_dir(path, e))?;
    debug!("Created directory {}", path);
    Ok(())
}

/// Create or truncate `path` and render `body` into it.
///
/// The file is closed when this returns, on success and on error alike.
/// Bytes already written before a render failure stay on disk.
pub fn render_file(path: &Utf8Path, template_name: &str, body: &str, context: &Context) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::create_file(path, e))?;
    render(template_name, body, context, file)?;
    debug!("Wrote {} from template '{}'", path, template_name);
    Ok(())
}
