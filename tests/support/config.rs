use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Write `contents` to a fresh file in the temp directory.
pub fn write_temp_config(contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let suffix = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.push(format!("stockroom-test-{nanos}-{suffix}.toml"));
    fs::write(&path, contents).expect("write temp config");
    path
}

/// A deployment nothing listens on, with timeouts short enough to fail fast.
pub const UNREACHABLE_MONGO: &str = r#"
[mongo]
uri = "mongodb://127.0.0.1:1"
connect_timeout_ms = 200
server_selection_timeout_ms = 300
"#;
