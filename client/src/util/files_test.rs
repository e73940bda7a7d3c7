use super::*;

#[test]
fn is_document_accepts_pdf_and_word() {
    assert!(is_document("resume.pdf"));
    assert!(is_document("JD.DOCX"));
    assert!(is_document("old.doc"));
}

#[test]
fn is_document_rejects_other_types() {
    assert!(!is_document("photo.png"));
    assert!(!is_document("README"));
    assert!(!is_document("archive.pdf.zip"));
}

#[test]
fn format_size_picks_unit() {
    assert_eq!(format_size(512.0), "512 B");
    assert_eq!(format_size(2048.0), "2.0 KB");
    assert_eq!(format_size(1_572_864.0), "1.5 MB");
}

#[test]
fn selected_file_size_label() {
    #[cfg(not(feature = "hydrate"))]
    {
        let file = SelectedFile { name: "cv.pdf".to_owned(), size: 3072.0 };
        assert_eq!(file.size_label(), "3.0 KB");
    }
}
