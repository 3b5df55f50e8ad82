//! Logging init: file under the XDG state dir, with stderr fallback.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Initialize structured logging.
///
/// Preferred sink is `~/.local/state/fetchtask/fetchtask.log`; when the
/// state dir cannot be prepared (unwritable home, missing XDG dirs) the
/// subscriber writes to stderr instead, so the binary stays usable.
pub fn init() {
    let filter = || {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,fetchtask=debug"))
    };

    match file_writer() {
        Ok((writer, path)) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(writer)
                .with_ansi(false)
                .init();
            tracing::info!("fetchtask logging initialized at {}", path.display());
        }
        Err(_) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(io::stderr)
                .with_ansi(false)
                .init();
        }
    }
}

/// Append-mode log file writer under the XDG state dir.
fn file_writer() -> Result<(BoxMakeWriter, PathBuf)> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fetchtask")?;
    let log_dir = xdg_dirs.get_state_home().join("fetchtask");

    fs::create_dir_all(&log_dir)?;
    let log_file_path = log_dir.join("fetchtask.log");

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    Ok((BoxMakeWriter::new(FileMakeWriter(file)), log_file_path))
}

/// Hands out clones of the log file; a failed clone degrades that one
/// write to stderr.
struct FileMakeWriter(fs::File);

impl<'a> MakeWriter<'a> for FileMakeWriter {
    type Writer = FileOrStderr;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(FileOrStderr::File)
            .unwrap_or(FileOrStderr::Stderr)
    }
}

enum FileOrStderr {
    File(fs::File),
    Stderr,
}

impl io::Write for FileOrStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileOrStderr::File(f) => f.write(buf),
            FileOrStderr::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileOrStderr::File(f) => f.flush(),
            FileOrStderr::Stderr => io::stderr().lock().flush(),
        }
    }
}
