pub mod html;
pub mod text;

use std::io::{self, Write};
use std::path::Path;

use anyhow::anyhow;
use clap::ValueEnum;
use tempfile::NamedTempFile;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Html,
    Text,
}

/// Writes rendered output to `path`, or stdout when no path is given.
///
/// Files are replaced atomically through a temp file in the same directory.
#[tracing::instrument(skip(content))]
pub fn emit(path: Option<&Path>, content: &str) -> anyhow::Result<()> {
    let Some(path) = path else {
        let mut out = io::stdout().lock();
        out.write_all(content.as_bytes())?;
        if !content.ends_with('\n') {
            writeln!(out)?;
        }
        return Ok(());
    };

    debug!(file = %path.display(), bytes = content.len(), "writing output atomically");

    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(content.as_bytes())?;
    temp.flush()?;

    temp.persist(path)
        .map_err(|err| anyhow!("failed to persist {}: {}", path.display(), err))?;

    info!(file = %path.display(), "wrote calendar output");
    Ok(())
}
