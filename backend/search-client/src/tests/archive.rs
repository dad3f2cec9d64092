// Unit tests for CV archive extraction
// Tests the entry-name pattern, MIME mapping, and whole-archive parsing

use crate::archive::{mime_for_extension, parse_cv_archive, parse_entry_name};

use std::io::{Cursor, Write};

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

fn build_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, bytes) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(bytes).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// **VALUE**: Verifies the documented entry-name pattern and the
/// undocumented one actually seen in production, where a brand tag rides
/// inside the parentheses after the id.
///
/// **WHY THIS MATTERS**: The candidate id is the only link between a CV
/// file and the search result it belongs to; parsing must survive the
/// brand suffix nobody documented.
///
/// **BUG THIS CATCHES**: A pattern anchored to `({id})` exactly, which
/// loses the id on every real download.
#[test]
fn given_entry_names_when_parse_then_name_id_extension_recovered() {
    assert_eq!(
        parse_entry_name("Jane Doe (482).pdf"),
        (Some("Jane Doe".to_string()), Some("pdf".to_string()), 482)
    );

    // Brand tag after the id
    assert_eq!(
        parse_entry_name("Jane Doe (482 - BrandX).pdf"),
        (Some("Jane Doe".to_string()), Some("pdf".to_string()), 482)
    );

    // No id digits at all
    assert_eq!(
        parse_entry_name("Jane Doe ().docx"),
        (Some("Jane Doe".to_string()), Some("docx".to_string()), 0)
    );
}

/// **VALUE**: Verifies a name not matching the pattern degrades to the
/// unparsed shape instead of failing.
#[test]
fn given_unparsable_entry_name_when_parse_then_zero_id_and_no_parts() {
    assert_eq!(parse_entry_name("resume.pdf"), (None, None, 0));
    assert_eq!(parse_entry_name(""), (None, None, 0));
}

/// **VALUE**: Verifies the MIME table covers the CV formats the service
/// ships and is case-insensitive on the extension.
#[test]
fn given_extensions_when_mime_lookup_then_known_types_mapped() {
    assert_eq!(mime_for_extension(Some("pdf")), "application/pdf");
    assert_eq!(mime_for_extension(Some("PDF")), "application/pdf");
    assert_eq!(mime_for_extension(Some("doc")), "application/msword");
    assert_eq!(
        mime_for_extension(Some("docx")),
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    );
    assert_eq!(mime_for_extension(Some("rtf")), "application/rtf");
    assert_eq!(mime_for_extension(Some("txt")), "text/plain; charset=UTF-8");
    assert_eq!(mime_for_extension(Some("exe")), "application/octet-stream");
    assert_eq!(mime_for_extension(None), "application/octet-stream");
}

/// **VALUE**: Verifies a multi-entry archive extracts fully with entry
/// order, bytes and parsed metadata intact.
///
/// **BUG THIS CATCHES**: Entry iteration sharing one buffer across
/// files, or skipping entries whose names failed to parse.
#[test]
fn given_archive_when_parse_cv_archive_then_all_entries_extracted_in_order() {
    let payload = build_zip(&[
        ("Jane Doe (482 - BrandX).pdf", b"%PDF-1.7 jane"),
        ("John Smith (913).docx", b"PK john"),
        ("notes.txt", b"loose notes"),
    ]);

    let files = parse_cv_archive(&payload).unwrap();
    assert_eq!(files.len(), 3);

    assert_eq!(files[0].id, 482);
    assert_eq!(files[0].name.as_deref(), Some("Jane Doe"));
    assert_eq!(files[0].extension.as_deref(), Some("pdf"));
    assert_eq!(files[0].mime, "application/pdf");
    assert_eq!(files[0].bytes, b"%PDF-1.7 jane");

    assert_eq!(files[1].id, 913);
    assert_eq!(files[1].filename, "John Smith (913).docx");

    // Unparsable entry still carries its bytes
    assert_eq!(files[2].id, 0);
    assert!(files[2].name.is_none());
    assert_eq!(files[2].mime, "application/octet-stream");
    assert_eq!(files[2].bytes, b"loose notes");
}

/// **VALUE**: Verifies bytes that are not a zip archive fail as an
/// archive error rather than panicking or yielding an empty list.
#[test]
fn given_non_zip_payload_when_parse_cv_archive_then_error() {
    assert!(parse_cv_archive(b"<html>maintenance page</html>").is_err());
    assert!(parse_cv_archive(&[]).is_err());
}
