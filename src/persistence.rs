// File: src/persistence.rs
use crate::core::types::SyllableDictionary;
use crate::error::{ReadabilityError, Result};
use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes the dictionary as pretty JSON. The document lands in a temporary
/// file next to `path` and is renamed over it, so readers never observe a
/// partial artifact.
pub fn save_dictionary(dictionary: &SyllableDictionary, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir).map_err(|e| ReadabilityError::io(parent_dir, e))?;

    let temp_file = NamedTempFile::new_in(parent_dir).map_err(|e| ReadabilityError::io(parent_dir, e))?;
    {
        let mut writer = BufWriter::new(&temp_file);
        serde_json::to_writer_pretty(&mut writer, dictionary)
            .map_err(|e| ReadabilityError::Dictionary { path: path.to_path_buf(), source: e })?;
        writer.write_all(b"\n").map_err(|e| ReadabilityError::io(path, e))?;
        writer.flush().map_err(|e| ReadabilityError::io(path, e))?;
    }

    temp_file.persist(path)?;
    tracing::debug!(path = %path.display(), entries = dictionary.len(), "dictionary written");
    Ok(())
}

pub fn load_dictionary(path: &Path) -> Result<SyllableDictionary> {
    let file = File::open(path).map_err(|e| ReadabilityError::io(path, e))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| ReadabilityError::Dictionary { path: path.to_path_buf(), source: e })
}

/// Reads a newline-delimited word list. Files that are not UTF-8 are decoded
/// as Windows-1252, where the hyphenation list's 0xA5 boundary byte is `¥`.
pub fn read_word_list(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| ReadabilityError::io(path, e))?;
    Ok(decode_word_list(&bytes).into_owned())
}

fn decode_word_list(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            tracing::debug!("word list is not UTF-8, decoding as windows-1252");
            let (text, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            text
        }
    }
}
