use std::sync::Mutex;

/// Destination for the tab-delimited export. Reports success as a flag
/// instead of an error: a clipboard that cannot be reached is a notice for
/// the operator, never a crash.
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> bool;
}

/// System clipboard via arboard.
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> bool {
        let result = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text));
        match result {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(?err, "failed to write to the system clipboard");
                false
            }
        }
    }
}

/// Captures writes for tests.
#[derive(Debug, Default)]
pub struct FakeClipboard {
    contents: Mutex<Option<String>>,
}

impl FakeClipboard {
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().unwrap().clone()
    }
}

impl Clipboard for FakeClipboard {
    fn write_text(&self, text: &str) -> bool {
        *self.contents.lock().unwrap() = Some(text.to_string());
        true
    }
}
