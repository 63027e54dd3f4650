//! Relative folder paths used as the comparison key between two trees

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// A path relative to a scan root, held as the raw entry names that form it.
///
/// Segments are stored exactly as the filesystem returned them. Names that
/// are not valid UTF-8, or that contain a backslash on Unix, compare and
/// materialize as themselves. `/` only appears when the path is displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath {
    segments: Vec<OsString>,
}

impl RelativePath {
    /// The empty relative path, i.e. a scan root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a `/`-separated path written by hand. Empty segments are dropped.
    ///
    /// Backslashes are ordinary characters here; names read from disk go
    /// through [`RelativePath::join`] instead.
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(OsString::from)
                .collect(),
        }
    }

    /// Append one entry name verbatim.
    pub fn join(&self, name: impl AsRef<OsStr>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.as_ref().to_os_string());
        Self { segments }
    }

    /// The last segment.
    pub fn file_name(&self) -> Option<&OsStr> {
        self.segments.last().map(OsString::as_os_str)
    }

    /// Number of segments. The root has depth 0.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Every strict prefix of this path, shallowest first.
    ///
    /// `a/b/c` yields `a` then `a/b`.
    pub fn ancestors(&self) -> Vec<Self> {
        (1..self.segments.len())
            .map(|i| Self {
                segments: self.segments[..i].to_vec(),
            })
            .collect()
    }

    /// Platform path built one component per segment.
    pub fn to_native(&self) -> PathBuf {
        self.segments.iter().collect()
    }

    /// Raw bytes of the `/`-joined path, for substring matching.
    pub fn to_encoded_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                bytes.push(b'/');
            }
            bytes.extend_from_slice(segment.as_encoded_bytes());
        }
        bytes
    }
}

impl std::fmt::Display for RelativePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{}", segment.to_string_lossy())?;
        }
        Ok(())
    }
}

impl From<&str> for RelativePath {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for RelativePath {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}
