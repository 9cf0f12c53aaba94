//! Tests for deduplicated warnings.

use std::io;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;
use woodstock_common::warning::{clear_warnings, warn_once};

/// Collects everything the fmt subscriber writes.
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a subscriber that records into the returned capture.
fn capture(f: impl FnOnce()) -> String {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    capture.contents()
}

// Both checks share one test: `clear_warnings` resets process-wide state.
#[test]
fn test_warn_once_deduplicates_until_cleared() {
    let output = capture(|| {
        warn_once("Test", "dedup message");
        warn_once("Test", "dedup message");
        warn_once("Other", "dedup message");
    });
    assert_eq!(output.matches("dedup message").count(), 2);
    assert!(output.contains("WARN"));
    assert!(output.contains("component=\"Test\""));

    let output = capture(|| {
        warn_once("Test", "dedup message");
        clear_warnings();
        warn_once("Test", "dedup message");
    });
    assert_eq!(output.matches("dedup message").count(), 1);
}
