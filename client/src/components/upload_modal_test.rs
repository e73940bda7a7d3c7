use super::*;

#[test]
fn targets_have_their_own_titles() {
    assert_eq!(UploadTarget::JobDescription.title(), "Upload Job Description");
    assert_eq!(UploadTarget::ConsultantProfile.title(), "Upload Consultant Profile");
    assert_ne!(UploadTarget::JobDescription.hint(), UploadTarget::ConsultantProfile.hint());
}

#[test]
fn upload_failed_message_prefixes_detail() {
    assert_eq!(upload_failed_message("File too large"), "Upload failed: File too large");
}

#[test]
fn unsupported_file_message_mentions_formats() {
    assert!(UNSUPPORTED_FILE.contains("PDF"));
    assert!(UNSUPPORTED_FILE.contains("Word"));
}
