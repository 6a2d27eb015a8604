use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use bincode::Options;

use crate::error::StoreError;

fn options() -> impl Options {
    bincode::DefaultOptions::new().with_no_limit()
}

pub fn save_to_disk<T: Serialize, TPath: AsRef<Path>>(data: &T, path: TPath) -> Result<(), StoreError> {
    // Write all bytes to the target file
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    options().serialize_into(&mut writer, data)?;
    writer.flush()?;
    Ok(())
}

pub fn load_from_disk<T: DeserializeOwned, TPath: AsRef<Path>>(path: TPath) -> Result<T, StoreError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(options().deserialize_from(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disk_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.bin");
        let words = vec!["hole".to_string(), "ole".to_string()];

        save_to_disk(&words, &path).unwrap();
        let loaded: Vec<String> = load_from_disk(&path).unwrap();
        assert_eq!(loaded, words);
    }

    #[test]
    fn test_truncated_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.bin");
        save_to_disk(&vec!["stop".to_string()], &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        std::fs::write(&path, &bytes[..bytes.len() - 1]).unwrap();
        let res: Result<Vec<String>, _> = load_from_disk(&path);
        assert!(matches!(res, Err(StoreError::Snapshot(_))));
    }
}
