//! Integration tests for rejection logging.

use std::io;
use std::sync::{Arc, Mutex};

use precept_guard::requires;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    captured.contents()
}

#[test]
fn rejection_emits_debug_event() {
    let output = capture(|| {
        let _ = requires(0_u16, "port").is_greater_than(0);
    });
    assert!(output.contains("DEBUG"), "{output}");
    assert!(output.contains("precept_guard"), "{output}");
    assert!(output.contains("argument rejected"), "{output}");
    assert!(output.contains("argument=port"), "{output}");
    assert!(output.contains("kind=out_of_range"), "{output}");
    assert!(output.contains("code=\"greater_than\""), "{output}");
}

#[test]
fn passing_checks_are_silent() {
    let output = capture(|| {
        let _ = requires(Some("x"), "v").is_not_null().and_then(|g| g.starts_with("x"));
    });
    assert!(output.is_empty(), "{output}");
}
