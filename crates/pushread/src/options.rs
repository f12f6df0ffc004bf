use std::path::PathBuf;

/// Where a [`Reader`](crate::Reader) takes its bytes from.
///
/// The mode is picked once, when the reader is opened, and never changes
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StreamMode {
    /// Read standard input one line at a time.
    ///
    /// The end of every line is reported once as end-of-input before the
    /// next line is prompted for.
    #[default]
    Console,
    /// Read the named file sequentially until end-of-file.
    File(PathBuf),
}

/// Configuration for [`Reader::open`](crate::Reader::open).
///
/// # Examples
///
/// ```rust
/// use pushread::{ReaderOptions, StreamMode};
///
/// let options = ReaderOptions {
///     mode: StreamMode::File("input.txt".into()),
/// };
/// assert_ne!(options, ReaderOptions::default());
/// ```
///
/// # Default
///
/// Console input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReaderOptions {
    /// Which byte source to read from.
    ///
    /// # Default
    ///
    /// [`StreamMode::Console`]
    pub mode: StreamMode,
}

impl ReaderOptions {
    /// Options reading from the file at `path`.
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            mode: StreamMode::File(path.into()),
        }
    }

    /// Options reading from standard input.
    #[must_use]
    pub fn console() -> Self {
        Self {
            mode: StreamMode::Console,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn deserializes_file_mode() {
        let options: ReaderOptions =
            serde_json::from_str(r#"{"mode":{"file":"data/in.txt"}}"#).unwrap();
        assert_eq!(options, ReaderOptions::file("data/in.txt"));
    }

    #[test]
    fn missing_mode_defaults_to_console() {
        let options: ReaderOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options.mode, StreamMode::Console);
    }
}
