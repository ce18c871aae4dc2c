use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};

/// Input path that means "read standard input".
pub const STDIN_PATH: &str = "-";

pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

pub fn read_input(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut content = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut content)
            .map_err(Error::Stdin)?;
        return Ok(content);
    }

    debug!("reading {}", path.display());
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => Error::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}

pub fn write_output(path: &Path, content: &str) -> Result<()> {
    debug!("writing {} bytes to {}", content.len(), path.display());
    fs::write(path, content).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Puts `suffix` in place of a trailing `.md`, or after the whole file name
/// when there is none, so the result never overwrites the input.
pub fn derive_output_path(input: &Path, suffix: &str) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = file_name.strip_suffix(".md").unwrap_or(&file_name);
    input.with_file_name(format!("{stem}{suffix}"))
}
