use std::io::{self, Cursor, Write};
use std::sync::{Arc, Mutex};

use assert_fs::prelude::*;
use photo_rename::{Console, RunConfig, run};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt as tsfmt, registry};

/// Appends everything written into a shared buffer.
#[derive(Clone)]
struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` under a scoped subscriber at `level` and return the captured log text.
fn capture_logs(level: &str, f: impl FnOnce()) -> String {
    let buf = Arc::new(Mutex::new(Vec::new()));
    let make_writer = {
        let buf = buf.clone();
        move || BufferWriter(buf.clone())
    };
    let layer = tsfmt::layer()
        .with_writer(make_writer)
        .with_ansi(false)
        .with_target(false)
        .compact();
    let subscriber = registry().with(EnvFilter::new(level)).with(layer);

    // scoped, so other tests keep their own (absent) global subscriber
    let dispatch = tracing::Dispatch::new(subscriber);
    tracing::dispatcher::with_default(&dispatch, f);

    let guard = buf.lock().unwrap();
    String::from_utf8_lossy(&guard[..]).into_owned()
}

#[test]
fn run_summary_is_logged_with_counts() {
    let root = assert_fs::TempDir::new().unwrap();
    root.child("Trip/1.jpg").touch().unwrap();
    root.child("Trip/2.jpg").touch().unwrap();

    let logs = capture_logs("info", || {
        let cfg = RunConfig::new(root.path(), true, true, true, None).unwrap();
        let mut console = Console::new(Cursor::new(Vec::<u8>::new()), Vec::<u8>::new());
        run(&cfg, &mut console).unwrap();
    });

    assert!(logs.contains("run finished"), "logs: {logs}");
    assert!(logs.contains("renamed=2"), "logs: {logs}");
    assert!(logs.contains("dry_run=true"), "logs: {logs}");
    assert!(!logs.contains("relocated"), "dry run must not relocate; logs: {logs}");
}

#[test]
fn per_file_relocations_log_at_debug() {
    let root = assert_fs::TempDir::new().unwrap();
    root.child("Trip/1.jpg").touch().unwrap();

    let logs = capture_logs("debug", || {
        let cfg = RunConfig::new(root.child("Trip").path(), false, true, false, None).unwrap();
        let mut console = Console::new(Cursor::new(Vec::<u8>::new()), Vec::<u8>::new());
        run(&cfg, &mut console).unwrap();
    });

    assert!(logs.contains("relocated"), "logs: {logs}");
    assert!(logs.contains("Trip_1.jpg"), "logs: {logs}");
}

#[test]
fn quit_is_logged() {
    let root = assert_fs::TempDir::new().unwrap();
    root.child("1.jpg").touch().unwrap();

    let logs = capture_logs("info", || {
        let cfg = RunConfig::new(root.path(), false, false, false, None).unwrap();
        let mut console = Console::new(Cursor::new(b"q\n".to_vec()), Vec::<u8>::new());
        let summary = run(&cfg, &mut console).unwrap();
        assert!(summary.quit);
    });

    assert!(logs.contains("quit requested"), "logs: {logs}");
}
