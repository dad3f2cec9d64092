//! A candidate CV file recovered from an archive download.

/// One CV extracted from a multi-entry archive response.
///
/// The bytes are always fully materialized; nothing here borrows the
/// response body the archive arrived in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CvFile {
    /// The entry name the file carried inside the archive.
    pub filename: String,

    /// The candidate the CV belongs to, parsed from the entry name; zero
    /// when the name did not follow the documented pattern.
    pub id: i64,

    /// The candidate's name, when the entry name could be parsed.
    pub name: Option<String>,

    /// The file extension, when the entry name could be parsed.
    pub extension: Option<String>,

    /// MIME type derived from the extension.
    pub mime: String,

    /// The bytes of the file.
    pub bytes: Vec<u8>,
}
