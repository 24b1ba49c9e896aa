//! history.rs: append-only record of rows already reported, one per line.

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};

/// Entries known at the start of a run. Not refreshed while the run is going.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistorySnapshot {
    entries: HashSet<String>,
}

impl HistorySnapshot {
    pub fn contains(&self, entry: &str) -> bool {
        self.entries.contains(entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for HistorySnapshot {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty history. Any other read error is logged and
    /// also treated as empty. Bytes that are not UTF-8 are replaced, so the
    /// valid lines around them still count as seen.
    pub async fn load(&self) -> HistorySnapshot {
        match fs::read(&self.path).await {
            Ok(bytes) => {
                let text = String::from_utf8_lossy(&bytes);
                if let Cow::Owned(_) = text {
                    tracing::warn!(path = %self.path.display(), "history has invalid UTF-8, affected lines replaced");
                }
                parse_entries(&text)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no history yet, starting fresh");
                HistorySnapshot::default()
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "history unreadable, treating as empty: {e:#}");
                HistorySnapshot::default()
            }
        }
    }

    /// Add each entry as a new line. Existing content is never rewritten.
    /// Not atomic across entries.
    pub async fn append(&self, entries: &[String]) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("creating history dir {}", dir.display()))?;
        }

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .read(true)
            .open(&self.path)
            .await
            .with_context(|| format!("opening history {}", self.path.display()))?;

        let mut buf = String::new();
        if needs_leading_newline(&mut file).await? {
            buf.push('\n');
        }
        for e in entries {
            buf.push_str(e);
            buf.push('\n');
        }

        file.write_all(buf.as_bytes())
            .await
            .with_context(|| format!("appending to history {}", self.path.display()))?;
        file.flush().await.context("flush history")?;
        file.sync_all().await.context("sync history")?;
        Ok(())
    }
}

fn parse_entries(s: &str) -> HistorySnapshot {
    s.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

// A hand-edited file may lack its final newline; don't glue the next entry onto it.
async fn needs_leading_newline(file: &mut fs::File) -> Result<bool> {
    let len = file.metadata().await.context("history metadata")?.len();
    if len == 0 {
        return Ok(false);
    }
    file.seek(std::io::SeekFrom::Start(len - 1))
        .await
        .context("seek history")?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last).await.context("read history tail")?;
    Ok(last[0] != b'\n')
}
