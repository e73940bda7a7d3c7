use super::*;

#[test]
fn id_endpoints_format_expected_paths() {
    assert_eq!(job_endpoint(12), "/jobs/12");
    assert_eq!(matching_start_endpoint(3), "/matching/start/3");
    assert_eq!(matching_status_endpoint(3), "/matching/status/3");
    assert_eq!(send_matching_email_endpoint(44), "/consultants/send-matching-email/44");
}

#[test]
fn parse_error_detail_reads_detail_string() {
    assert_eq!(
        parse_error_detail(r#"{"detail":"Incorrect email or password"}"#).as_deref(),
        Some("Incorrect email or password")
    );
}

#[test]
fn parse_error_detail_ignores_non_json() {
    assert_eq!(parse_error_detail("<html>502 Bad Gateway</html>"), None);
    assert_eq!(parse_error_detail(r#"{"message":"nope"}"#), None);
}

#[test]
fn parse_grouped_results_non_array_is_empty() {
    assert_eq!(parse_grouped_results(r#"{"detail":"none"}"#), Ok(Vec::new()));
    assert_eq!(parse_grouped_results("null"), Ok(Vec::new()));
}

#[test]
fn parse_grouped_results_decodes_rows() {
    let rows = parse_grouped_results(
        r#"[{"job_description_id":5,"job_title":"SRE","department":"Ops","top_matches":[{"consultant_name":"Kim","score":82}],"email_sent":true}]"#,
    )
    .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].job_description_id, 5);
    assert!(rows[0].email_sent);
}

#[test]
fn parse_grouped_results_rejects_malformed_json() {
    assert!(matches!(parse_grouped_results("{"), Err(ApiError::Decode(_))));
}

