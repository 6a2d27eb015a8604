//! Reading and writing word lists. Three formats are supported: plain text
//! (whitespace separated words), an fst set, and a versioned bincode snapshot.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use fst::{IntoStreamer, Set, SetBuilder, Streamer};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::StoreError;
use crate::utils::serialization;

const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct CorpusSnapshot {
    version: u32,
    words: Vec<String>,
}

/// Parses whitespace separated words, lowercasing them and skipping words
/// shorter than `min_length` characters
pub fn parse_word_list<R: BufRead>(reader: R, min_length: usize) -> Result<HashSet<String>, StoreError> {
    let mut words = HashSet::new();
    for line in reader.lines() {
        let line = line?;
        for word in line.split_whitespace() {
            if word.chars().count() < min_length {
                continue;
            }
            words.insert(word.to_lowercase());
        }
    }
    Ok(words)
}

pub fn read_word_list<P: AsRef<Path>>(path: P, min_length: usize) -> Result<HashSet<String>, StoreError> {
    let file = File::open(path.as_ref())?;
    let words = parse_word_list(BufReader::new(file), min_length)?;
    info!(path = %path.as_ref().display(), words = words.len(), "read word list");
    Ok(words)
}

fn sorted(words: &HashSet<String>) -> Vec<&str> {
    let mut sorted: Vec<&str> = words.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted
}

/// Builds an in-memory fst set; the fst builder needs its input sorted
pub fn build_fst(words: &HashSet<String>) -> Result<Set<Vec<u8>>, StoreError> {
    let mut build = SetBuilder::memory();
    build.extend_iter(sorted(words))?;
    Ok(build.into_set())
}

pub fn save_fst<P: AsRef<Path>>(words: &HashSet<String>, path: P) -> Result<(), StoreError> {
    let set = build_fst(words)?;
    std::fs::write(path.as_ref(), set.as_fst().as_bytes())?;
    info!(path = %path.as_ref().display(), words = words.len(), "saved fst word list");
    Ok(())
}

/// Collects every word stored in an fst set
pub fn words_from_fst<D: AsRef<[u8]>>(set: &Set<D>) -> HashSet<String> {
    let mut words = HashSet::with_capacity(set.len());
    let mut stream = set.into_stream();
    while let Some(word) = stream.next() {
        words.insert(String::from_utf8_lossy(word).into_owned());
    }
    words
}

pub fn load_fst<P: AsRef<Path>>(path: P) -> Result<HashSet<String>, StoreError> {
    let bytes = std::fs::read(path.as_ref())?;
    let set = Set::new(bytes)?;
    let words = words_from_fst(&set);
    info!(path = %path.as_ref().display(), words = words.len(), "loaded fst word list");
    Ok(words)
}

pub fn save_snapshot<P: AsRef<Path>>(words: &HashSet<String>, path: P) -> Result<(), StoreError> {
    let snapshot = CorpusSnapshot {
        version: SNAPSHOT_VERSION,
        words: sorted(words).into_iter().map(str::to_string).collect(),
    };
    serialization::save_to_disk(&snapshot, path.as_ref())?;
    info!(path = %path.as_ref().display(), words = words.len(), "saved snapshot");
    Ok(())
}

pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<HashSet<String>, StoreError> {
    let snapshot: CorpusSnapshot = serialization::load_from_disk(path.as_ref())?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(StoreError::Version {
            found: snapshot.version,
            expected: SNAPSHOT_VERSION,
        });
    }
    info!(path = %path.as_ref().display(), words = snapshot.words.len(), "loaded snapshot");
    Ok(snapshot.words.into_iter().collect())
}

/// Loads a word list, picking the format from the file extension
/// (`.fst`, `.bin`, anything else is read as text)
pub fn load_corpus<P: AsRef<Path>>(path: P, min_length: usize) -> Result<HashSet<String>, StoreError> {
    let path = path.as_ref();
    let words = match path.extension().and_then(|e| e.to_str()) {
        Some("fst") => load_fst(path)?,
        Some("bin") => load_snapshot(path)?,
        _ => return read_word_list(path, min_length),
    };
    Ok(words
        .into_iter()
        .filter(|w| w.chars().count() >= min_length)
        .collect())
}
