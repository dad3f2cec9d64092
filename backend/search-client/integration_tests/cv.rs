use crate::helpers::authenticated_client;

use std::io::{Cursor, Write};

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
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

/// **VALUE**: Verifies a batch CV download: the comma-joined id path,
/// the archive response, and per-entry extraction.
///
/// **WHY THIS MATTERS**: The archive is the only delivery format for
/// CVs; ids parsed from entry names are how callers hand each file back
/// to the right candidate.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - Ids stop being comma-joined into one path segment
/// - The zip payload is decoded as JSON
/// - Entry ids are lost to the brand tag inside the parentheses
#[tokio::test]
async fn given_candidate_ids_when_cv_then_archive_extracted() {
    let server = MockServer::start().await;
    let (client, token) = authenticated_client(&server).await;

    let payload = build_zip(&[
        ("Jane Doe (482 - BrandA).pdf", b"%PDF-1.7 jane"),
        ("John Smith (913 - BrandA).docx", b"PK john"),
    ]);

    Mock::given(method("GET"))
        .and(path("/CandidateSearchApi/cv/482,913"))
        .and(header("Authorization", "bearer bearer-1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(payload, "application/zip"))
        .expect(1)
        .mount(&server)
        .await;

    let files = client
        .cv(&token, "BrandA", &[482, 913])
        .await
        .expect("CV download failed");

    assert_eq!(files.len(), 2);
    assert_eq!(files[0].id, 482);
    assert_eq!(files[0].name.as_deref(), Some("Jane Doe"));
    assert_eq!(files[0].mime, "application/pdf");
    assert_eq!(files[0].bytes, b"%PDF-1.7 jane");
    assert_eq!(files[1].id, 913);
}

/// **VALUE**: Verifies the single-CV convenience picks the entry whose
/// parsed id matches the request.
#[tokio::test]
async fn given_matching_entry_when_cv_single_then_that_entry_returned() {
    let server = MockServer::start().await;
    let (client, token) = authenticated_client(&server).await;

    let payload = build_zip(&[("Jane Doe (482 - BrandA).pdf", b"%PDF-1.7 jane")]);
    Mock::given(method("GET"))
        .and(path("/CandidateSearchApi/cv/482"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(payload, "application/zip"))
        .mount(&server)
        .await;

    let file = client
        .cv_single(&token, "BrandA", 482)
        .await
        .expect("CV download failed")
        .expect("Expected a CV file");

    assert_eq!(file.id, 482);
    assert_eq!(file.extension.as_deref(), Some("pdf"));
}

/// **VALUE**: Verifies the fallback when no entry id matches: the first
/// entry is returned with the requested id forced onto it.
///
/// **WHY THIS MATTERS**: Entry names are not reliable; a one-entry
/// archive answering a one-id request is that candidate's CV whatever
/// the name parses to, and discarding it loses a billed download.
#[tokio::test]
async fn given_unmatched_entry_when_cv_single_then_first_entry_with_forced_id() {
    let server = MockServer::start().await;
    let (client, token) = authenticated_client(&server).await;

    let payload = build_zip(&[("resume.pdf", b"%PDF-1.7 body")]);
    Mock::given(method("GET"))
        .and(path("/CandidateSearchApi/cv/482"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(payload, "application/zip"))
        .mount(&server)
        .await;

    let file = client
        .cv_single(&token, "BrandA", 482)
        .await
        .expect("CV download failed")
        .expect("Expected the unmatched entry");

    assert_eq!(file.id, 482);
    assert_eq!(file.filename, "resume.pdf");
    assert_eq!(file.bytes, b"%PDF-1.7 body");
}

/// **VALUE**: Verifies an empty archive yields no file rather than an
/// error or a fabricated entry.
#[tokio::test]
async fn given_empty_archive_when_cv_single_then_none() {
    let server = MockServer::start().await;
    let (client, token) = authenticated_client(&server).await;

    let payload = build_zip(&[]);
    Mock::given(method("GET"))
        .and(path("/CandidateSearchApi/cv/482"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(payload, "application/zip"))
        .mount(&server)
        .await;

    let file = client
        .cv_single(&token, "BrandA", 482)
        .await
        .expect("CV download failed");

    assert!(file.is_none());
}
