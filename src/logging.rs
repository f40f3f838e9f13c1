use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Installs a file-backed `tracing` subscriber.
///
/// Stdout belongs to the TUI, so logs only go to `path` (appended). The
/// filter comes from `RUST_LOG`, defaulting to `info`.
pub fn init_file_logging(path: &Path) -> io::Result<()> {
    let file = open_log_file(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(io::Error::other)
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::open_log_file;

    #[test]
    fn log_file_parent_is_created() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("torus-snake-log-{nanos}"));
        let path = dir.join("nested").join("game.log");

        open_log_file(&path).expect("log file should open");
        assert!(path.exists());

        let _ = fs::remove_dir_all(dir);
    }
}
