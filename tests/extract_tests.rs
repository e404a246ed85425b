//! Extraction Tests
//!
//! These tests verify:
//! - Field capture for well-formed lines
//! - Silent rejection of malformed lines
//! - Line-order preservation and trailing-newline handling

use logsift::extract::{extract, parse_line};
use logsift::LogRecord;

// =============================================================================
// Well-Formed Lines
// =============================================================================

#[test]
fn test_parse_basic_line() {
    let record = parse_line(
        "127.0.0.1 - - [10/Oct/2023:13:55:36 -0700] \"GET /index.html HTTP/1.1\" 200 512",
    )
    .unwrap();

    assert_eq!(
        record,
        LogRecord {
            ip: "127.0.0.1".to_string(),
            date: "10/Oct/2023:13:55:36 -0700".to_string(),
            method: "GET".to_string(),
            url: "/index.html".to_string(),
            status: "200".to_string(),
            size: "512".to_string(),
        }
    );
}

#[test]
fn test_parse_url_with_query_string() {
    let record = parse_line(
        "10.1.2.3 - - [01/Jan/2024:00:00:00 +0000] \"GET /search?q=rust&page=2 HTTP/1.1\" 200 42",
    )
    .unwrap();

    assert_eq!(record.url, "/search?q=rust&page=2");
}

#[test]
fn test_parse_url_with_spaces() {
    // Everything between the method and the last space-delimited token
    // inside the quotes belongs to the url
    let record = parse_line(
        "10.1.2.3 - - [01/Jan/2024:00:00:00 +0000] \"GET /my files/report.pdf HTTP/1.0\" 200 99",
    )
    .unwrap();

    assert_eq!(record.method, "GET");
    assert_eq!(record.url, "/my files/report.pdf");
}

#[test]
fn test_parse_post_method() {
    let record = parse_line(
        "192.168.0.7 - - [02/Feb/2024:10:30:00 +0100] \"POST /api/login HTTP/2.0\" 401 0",
    )
    .unwrap();

    assert_eq!(record.method, "POST");
    assert_eq!(record.status, "401");
    assert_eq!(record.size, "0");
}

#[test]
fn test_parse_discards_protocol_token() {
    let record = parse_line(
        "127.0.0.1 - - [10/Oct/2023:13:55:36 -0700] \"GET /index.html HTTP/1.1\" 200 512",
    )
    .unwrap();

    assert!(!record.url.contains("HTTP"));
}

// =============================================================================
// Malformed Lines
// =============================================================================

#[test]
fn test_reject_missing_closing_quote() {
    let result = parse_line(
        "127.0.0.1 - - [10/Oct/2023:13:55:36 -0700] \"GET /index.html HTTP/1.1 200 512",
    );
    assert!(result.is_none());
}

#[test]
fn test_reject_non_numeric_status() {
    let result = parse_line(
        "127.0.0.1 - - [10/Oct/2023:13:55:36 -0700] \"GET /index.html HTTP/1.1\" abc 512",
    );
    assert!(result.is_none());
}

#[test]
fn test_reject_non_numeric_size() {
    let result = parse_line(
        "127.0.0.1 - - [10/Oct/2023:13:55:36 -0700] \"GET /index.html HTTP/1.1\" 200 -",
    );
    assert!(result.is_none());
}

#[test]
fn test_reject_truncated_line() {
    let result = parse_line("127.0.0.1 - - [10/Oct/2023:13:55:36 -0700");
    assert!(result.is_none());
}

#[test]
fn test_reject_trailing_garbage() {
    // The grammar must consume the whole line
    let result = parse_line(
        "127.0.0.1 - - [10/Oct/2023:13:55:36 -0700] \"GET /index.html HTTP/1.1\" 200 512 extra",
    );
    assert!(result.is_none());
}

#[test]
fn test_reject_hostname_instead_of_ip() {
    let result = parse_line(
        "example.com - - [10/Oct/2023:13:55:36 -0700] \"GET /index.html HTTP/1.1\" 200 512",
    );
    assert!(result.is_none());
}

#[test]
fn test_reject_missing_protocol_token() {
    // The quoted section needs method, url and a trailing protocol token
    let result =
        parse_line("127.0.0.1 - - [10/Oct/2023:13:55:36 -0700] \"GET /index.html\" 200 512");
    assert!(result.is_none());
}

#[test]
fn test_reject_empty_line() {
    assert!(parse_line("").is_none());
}

// =============================================================================
// Multi-Line Extraction
// =============================================================================

#[test]
fn test_extract_preserves_line_order() {
    let raw = "\
1.1.1.1 - - [10/Oct/2023:13:55:36 -0700] \"GET /a HTTP/1.1\" 200 10\n\
2.2.2.2 - - [10/Oct/2023:13:55:37 -0700] \"GET /b HTTP/1.1\" 404 20\n\
3.3.3.3 - - [10/Oct/2023:13:55:38 -0700] \"GET /c HTTP/1.1\" 500 30\n";

    let records = extract(raw);

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].ip, "1.1.1.1");
    assert_eq!(records[1].ip, "2.2.2.2");
    assert_eq!(records[2].ip, "3.3.3.3");
}

#[test]
fn test_extract_skips_malformed_lines() {
    let raw = "\
1.1.1.1 - - [10/Oct/2023:13:55:36 -0700] \"GET /a HTTP/1.1\" 200 10\n\
this line is noise\n\
2.2.2.2 - - [10/Oct/2023:13:55:37 -0700] \"GET /b HTTP/1.1\" 404 20\n";

    let records = extract(raw);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].ip, "1.1.1.1");
    assert_eq!(records[1].ip, "2.2.2.2");
}

#[test]
fn test_extract_trailing_newline_yields_no_extra_record() {
    let with_newline =
        "1.1.1.1 - - [10/Oct/2023:13:55:36 -0700] \"GET /a HTTP/1.1\" 200 10\n";
    let without_newline =
        "1.1.1.1 - - [10/Oct/2023:13:55:36 -0700] \"GET /a HTTP/1.1\" 200 10";

    assert_eq!(extract(with_newline).len(), 1);
    assert_eq!(extract(without_newline).len(), 1);
}

#[test]
fn test_extract_empty_input() {
    assert!(extract("").is_empty());
}

#[test]
fn test_extract_all_noise() {
    let records = extract("noise\nmore noise\n\n# comment\n");
    assert!(records.is_empty());
}
