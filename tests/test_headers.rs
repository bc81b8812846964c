use httpfromtcp::http::error::ParseError;
use httpfromtcp::http::headers::{Headers, canonicalize};

#[test]
fn test_valid_single_header() {
    let mut headers = Headers::new();
    headers.set_or_append("Host: localhost:42069").unwrap();

    assert_eq!(headers.get("Host"), Some("localhost:42069"));
    assert_eq!(headers.len(), 1);
}

#[test]
fn test_surrounding_whitespace_ignored() {
    let mut headers = Headers::new();
    headers.set_or_append("    Host:    localhost:42069    ").unwrap();

    assert_eq!(headers.get("Host"), Some("localhost:42069"));
}

#[test]
fn test_name_is_canonicalized() {
    let mut headers = Headers::new();
    headers.set_or_append("user-AGENT: curl/7.81.0").unwrap();

    assert_eq!(headers.get("User-Agent"), Some("curl/7.81.0"));
    assert_eq!(headers.get("user-agent"), None);
}

#[test]
fn test_repeated_headers_combined_in_order() {
    let mut headers = Headers::new();
    headers.set_or_append("Set-Person: lane-loves-go").unwrap();
    headers.set_or_append("set-person: prime-loves-zig").unwrap();
    headers.set_or_append("SET-PERSON: tj-loves-ocaml").unwrap();

    assert_eq!(
        headers.get("Set-Person"),
        Some("lane-loves-go, prime-loves-zig, tj-loves-ocaml")
    );
    assert_eq!(headers.len(), 1);
}

#[test]
fn test_space_before_colon_is_malformed() {
    let mut headers = Headers::new();
    let result = headers.set_or_append("Host : localhost:42069");

    assert!(matches!(result, Err(ParseError::MalformedHeaderLine(_))));
    assert!(headers.is_empty());
}

#[test]
fn test_missing_colon_is_malformed() {
    let mut headers = Headers::new();

    assert!(matches!(
        headers.set_or_append("BrokenHeader"),
        Err(ParseError::MalformedHeaderLine(_))
    ));
    assert!(matches!(
        headers.set_or_append("Host localhost"),
        Err(ParseError::MalformedHeaderLine(_))
    ));
}

#[test]
fn test_missing_space_after_colon_is_malformed() {
    let mut headers = Headers::new();
    let result = headers.set_or_append("Host:localhost");

    assert!(matches!(result, Err(ParseError::MalformedHeaderLine(_))));
}

#[test]
fn test_multi_token_value_is_malformed() {
    let mut headers = Headers::new();
    let result = headers.set_or_append("Accept: text/html, */*");

    assert!(matches!(result, Err(ParseError::MalformedHeaderLine(_))));
}

#[test]
fn test_invalid_field_name_characters() {
    let mut headers = Headers::new();

    assert!(matches!(
        headers.set_or_append("H©st: localhost:42069"),
        Err(ParseError::InvalidFieldName(_))
    ));
    assert!(matches!(
        headers.set_or_append("Ho(st): localhost"),
        Err(ParseError::InvalidFieldName(_))
    ));
    assert!(matches!(
        headers.set_or_append(": localhost"),
        Err(ParseError::InvalidFieldName(_))
    ));
}

#[test]
fn test_all_token_characters_accepted() {
    let mut headers = Headers::new();
    headers.set_or_append("x!#$%&'*+-.^_|~9: ok").unwrap();

    assert_eq!(headers.get("X!#$%&'*+-.^_|~9"), Some("ok"));
}

#[test]
fn test_canonicalize() {
    assert_eq!(canonicalize("content-type"), "Content-Type");
    assert_eq!(canonicalize("CONTENT-LENGTH"), "Content-Length");
    assert_eq!(canonicalize("host"), "Host");
    assert_eq!(canonicalize("x-forwarded-for"), "X-Forwarded-For");
}

#[test]
fn test_canonicalize_is_idempotent() {
    for name in ["content-type", "HOST", "x-REQUEST-id", "Accept", "a-b-c"] {
        let once = canonicalize(name);
        assert_eq!(canonicalize(&once), once);
    }
}

#[test]
fn test_iteration_yields_all_fields() {
    let mut headers = Headers::new();
    headers.set_or_append("Host: example.com").unwrap();
    headers.set_or_append("Accept: */*").unwrap();

    let mut names: Vec<&str> = headers.iter().map(|(k, _)| k.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["Accept", "Host"]);
    assert!(headers.contains("Accept"));
}
