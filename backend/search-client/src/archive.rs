//! CV archive extraction.
//!
//! CV downloads arrive as a zip archive with one entry per candidate.
//! Entry names are documented as `{forename} {surname} ({id}).{ext}` but
//! in practice arrive as `{forename} {surname} ({id} - BRAND).{ext}`, so
//! only the digits inside the parentheses are trusted for the id.

use crate::error::ArchiveError;

use models::cv::CvFile;

use std::io::{Cursor, Read};

use once_cell::sync::Lazy;
use regex::Regex;
use zip::ZipArchive;

static CV_FILENAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?P<name>.*)\((?P<id>\d*).*\)\.(?P<ext>.*$)")
        .expect("CV filename pattern is valid")
});

/// Extract every entry of a zipped CV download into memory.
///
/// Entry bytes are fully copied out before this returns; nothing borrows
/// the payload. An entry whose name does not match the documented pattern
/// degrades to a zero id with no name or extension - its bytes are still
/// returned. Entry order is preserved.
pub fn parse_cv_archive(payload: &[u8]) -> Result<Vec<CvFile>, ArchiveError> {
    let mut archive = ZipArchive::new(Cursor::new(payload))?;
    let mut files = Vec::with_capacity(archive.len());

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let filename = entry.name().to_string();
        let (name, extension, id) = parse_entry_name(&filename);

        // Sized by read_to_end; the declared entry size is untrusted
        let mut bytes = Vec::new();
        entry.read_to_end(&mut bytes)?;

        let mime = mime_for_extension(extension.as_deref()).to_string();
        files.push(CvFile {
            filename,
            id,
            name,
            extension,
            mime,
            bytes,
        });
    }

    Ok(files)
}

/// Parse an entry name into candidate name, extension and id.
/// Non-matching names yield `(None, None, 0)`.
pub(crate) fn parse_entry_name(filename: &str) -> (Option<String>, Option<String>, i64) {
    let Some(captures) = CV_FILENAME.captures(filename) else {
        return (None, None, 0);
    };

    let name = captures
        .name("name")
        .map(|group| group.as_str().trim().to_string())
        .filter(|name| !name.is_empty());

    let id = captures
        .name("id")
        .and_then(|group| group.as_str().trim().parse::<i64>().ok())
        .unwrap_or(0);

    let extension = captures
        .name("ext")
        .map(|group| group.as_str().trim().to_string())
        .filter(|extension| !extension.is_empty());

    (name, extension, id)
}

/// MIME type for the file formats expected as CVs. Anything else in the
/// archive comes back as a generic blob.
pub(crate) fn mime_for_extension(extension: Option<&str>) -> &'static str {
    let Some(extension) = extension else {
        return "application/octet-stream";
    };

    match extension.to_ascii_lowercase().as_str() {
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "pdf" => "application/pdf",
        "txt" => "text/plain; charset=UTF-8",
        "rtf" => "application/rtf",
        "md" => "text/markdown; charset=UTF-8",
        _ => "application/octet-stream",
    }
}
