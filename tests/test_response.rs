use httpfromtcp::http::response::{Response, ResponseBuilder, StatusCode};
use httpfromtcp::http::writer::{ResponseWriter, serialize_response};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::RequestTimeout.as_u16(), 408);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::RequestTimeout.reason_phrase(), "Request Timeout");
    assert_eq!(
        StatusCode::InternalServerError.reason_phrase(),
        "Internal Server Error"
    );
}

#[test]
fn test_response_builder_auto_content_length() {
    let body = b"This is the body".to_vec();
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(body.clone())
        .build();

    let content_length = response.headers.get("Content-Length").unwrap();
    assert_eq!(content_length, &body.len().to_string());
}

#[test]
fn test_response_builder_preserves_custom_content_length() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Length", "999")
        .body(b"test".to_vec())
        .build();

    assert_eq!(response.headers.get("Content-Length").unwrap(), "999");
}

#[test]
fn test_response_helpers() {
    let ok = Response::ok("Hello World!\r\n");
    assert_eq!(ok.status, StatusCode::Ok);
    assert_eq!(ok.body, b"Hello World!\r\n".to_vec());
    assert_eq!(ok.headers.get("Content-Type").unwrap(), "text/plain");
    assert_eq!(ok.headers.get("Content-Length").unwrap(), "14");

    assert_eq!(Response::bad_request().status, StatusCode::BadRequest);
    assert_eq!(Response::request_timeout().status, StatusCode::RequestTimeout);
    assert_eq!(
        Response::internal_error().body,
        b"500 Internal Server Error".to_vec()
    );
}

#[test]
fn test_serialize_response_wire_format() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(b"OK".to_vec())
        .build();
    let wire = serialize_response(&response);

    assert_eq!(
        &wire[..],
        b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\nOK"
    );
}

#[test]
fn test_serialize_response_keeps_explicit_connection_header() {
    let response = ResponseBuilder::new(StatusCode::BadRequest)
        .header("Connection", "keep-alive")
        .build();
    let wire = String::from_utf8(serialize_response(&response).to_vec()).unwrap();

    assert!(wire.starts_with("HTTP/1.1 400 Bad Request\r\n"));
    assert!(wire.contains("Connection: keep-alive\r\n"));
    assert!(!wire.contains("Connection: close"));
    assert!(wire.ends_with("\r\n\r\n"));
}

#[tokio::test]
async fn test_response_writer_writes_everything() {
    let response = Response::ok("Hello World!\r\n");
    let mut out: Vec<u8> = Vec::new();

    let mut writer = ResponseWriter::new(&response);
    writer.write_to_stream(&mut out).await.unwrap();

    assert_eq!(out, serialize_response(&response).to_vec());
    assert!(out.ends_with(b"\r\n\r\nHello World!\r\n"));
}
