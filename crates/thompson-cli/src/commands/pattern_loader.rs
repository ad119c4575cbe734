use std::fs;
use std::io::{self, Read};
use std::path::Path;

use log::debug;

/// Load the pattern from inline text, a file, or stdin (`-`).
pub fn load_pattern(pattern: Option<&str>, file: Option<&Path>) -> Result<String, String> {
    if let Some(text) = pattern {
        return Ok(text.to_owned());
    }

    if let Some(path) = file {
        if is_stdin(path) {
            return load_stdin();
        }
        return load_file(path);
    }

    Err("pattern is required: use positional argument or -f/--file".to_string())
}

pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Drop one trailing line break (`\n` or `\r\n`) left by editors and `echo`.
pub fn strip_trailing_newline(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}

fn load_stdin() -> Result<String, String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    debug!("read pattern from stdin ({} bytes)", buf.len());
    Ok(strip_trailing_newline(&buf).to_owned())
}

fn load_file(path: &Path) -> Result<String, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;
    debug!("read pattern from '{}' ({} bytes)", path.display(), content.len());
    Ok(strip_trailing_newline(&content).to_owned())
}
