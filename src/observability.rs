use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io;
use std::path::Path;

/// Fingerprint of the benchmarked input, so reports taken on different
/// files are never mistaken for one another.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InputFileStats {
    pub path: String,
    pub hash: String, // SHA256 hex
    pub size_bytes: u64,
}

impl InputFileStats {
    pub fn from_path<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        let size_bytes = std::fs::metadata(path)?.len();
        let hash = compute_file_hash(path)?;
        Ok(Self {
            path: path.display().to_string(),
            hash,
            size_bytes,
        })
    }
}

/// Streamed SHA-256 of the file contents, as lowercase hex.
pub fn compute_file_hash<P: AsRef<Path>>(path: P) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_compute_file_hash_known_digest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("abc.txt");
        fs::write(&path, "abc").unwrap();

        assert_eq!(
            compute_file_hash(&path).unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_compute_file_hash_multi_buffer_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("large.csv");
        let content: String = (0..5_000).map(|i| format!("{i},{}\n", i * 2)).collect();
        fs::write(&path, &content).unwrap();

        let expected = format!("{:x}", Sha256::digest(content.as_bytes()));
        assert_eq!(compute_file_hash(&path).unwrap(), expected);
    }

    #[test]
    fn test_input_file_stats() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, "a,b\n1,2\n").unwrap();

        let stats = InputFileStats::from_path(&path).unwrap();

        assert_eq!(stats.size_bytes, 8);
        assert_eq!(stats.hash.len(), 64);
        assert!(stats.path.ends_with("data.csv"));
    }

    #[test]
    fn test_input_file_stats_missing_file() {
        let dir = tempdir().unwrap();
        let err = InputFileStats::from_path(dir.path().join("nope.csv")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
