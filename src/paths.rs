use std::{
    fs::DirBuilder,
    path::{MAIN_SEPARATOR, MAIN_SEPARATOR_STR, Path},
};

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Expand a leading `~` to the user's home directory and lexically clean the result.
///
/// Only the first character is considered, so `~/x` and `~` expand while `a/~` is
/// left alone. When the home directory cannot be determined the `~` is kept.
pub fn home_path(path: &str) -> String {
    let expanded = match path.strip_prefix('~') {
        Some(rest) => match dirs::home_dir() {
            Some(home) => format!("{}{rest}", home.display()),
            None => {
                warn!("Could not determine home directory; leaving '{}' unexpanded", path);
                path.to_string()
            }
        },
        None => path.to_string(),
    };

    clean(&expanded)
}

/// Lexically normalize a path without touching the filesystem.
///
/// Repeated separators collapse, `.` segments are dropped, `..` removes the
/// preceding segment, `..` above the root is discarded, and a trailing
/// separator is removed. An empty result becomes `.`.
pub fn clean(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let rooted = path.starts_with(is_separator);
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split(is_separator) {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|last| *last != "..") {
                    segments.pop();
                } else if !rooted {
                    segments.push("..");
                }
            }
            other => segments.push(other),
        }
    }

    let joined = segments.join(MAIN_SEPARATOR_STR);
    match (rooted, joined.is_empty()) {
        (true, _) => format!("{MAIN_SEPARATOR}{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

fn is_separator(c: char) -> bool {
    c == '/' || c == MAIN_SEPARATOR
}

/// Make sure the directory that will contain `file_path` exists, creating any
/// missing ancestors with mode 0755.
pub fn ensure_dir_exists(file_path: impl AsRef<Path>) -> Result<()> {
    let dir = match file_path.as_ref().parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if dir.is_dir() {
        return Ok(());
    }

    debug!("Creating directory: {}", dir.display());

    let mut builder = DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }

    builder.create(dir).map_err(|source| Error::Io {
        path: dir.to_path_buf(),
        source,
    })
}
