use crate::services::app::reporter::Reporter;
use std::cell::RefCell;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_test_logger() {
    INIT.call_once(|| {
        // Initialize logger only once
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Reporter that keeps every message for inspection.
#[derive(Default)]
pub struct MemoryReporter {
    pub messages: RefCell<Vec<(log::Level, String)>>,
}

impl MemoryReporter {
    pub fn contains(&self, level: log::Level, needle: &str) -> bool {
        self.messages
            .borrow()
            .iter()
            .any(|(l, m)| *l == level && m.contains(needle))
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, level: log::Level, message: &str) {
        self.messages
            .borrow_mut()
            .push((level, message.to_string()));
    }
}

/// Build a stored (uncompressed) zip from `(entry name, content)` pairs.
/// Entry names ending in `/` become directory entries.
pub fn create_test_zip(dir: &Path, name: &str, files: &[(&str, &[u8])]) -> PathBuf {
    let zip_path = dir.join(name);
    fs::write(&zip_path, zip_bytes(files)).unwrap();
    zip_path
}

/// Same as [`create_test_zip`] but in memory, for nesting zips inside zips.
pub fn zip_bytes(files: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let options =
        zip::write::SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    for (entry_name, content) in files {
        if entry_name.ends_with('/') {
            writer.add_directory(entry_name.to_string(), options).unwrap();
        } else {
            writer.start_file(entry_name.to_string(), options).unwrap();
            writer.write_all(content).unwrap();
        }
    }
    writer.finish().unwrap().into_inner()
}
