use super::*;

#[test]
fn document_name_strips_directories() {
    assert_eq!(document_name("uploads/jd/backend_engineer.pdf"), "backend_engineer.pdf");
    assert_eq!(document_name("C:\\docs\\role.docx"), "role.docx");
    assert_eq!(document_name("plain.pdf"), "plain.pdf");
}

#[test]
fn experience_label_pluralizes() {
    assert_eq!(experience_label(1), "1 year experience");
    assert_eq!(experience_label(0), "0 years experience");
    assert_eq!(experience_label(5), "5 years experience");
}
