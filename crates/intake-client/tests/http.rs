use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use intake_client::api::IntakeApi;
use intake_client::config::ClientConfig;
use intake_client::error::ClientError;
use intake_client::http::HttpApi;
use intake_core::models::tracking::{AbandonmentEvent, TrackingState};

/// Serve exactly one request with a canned reply and hand back what was
/// received as `(request line, body)`.
fn one_shot(status: &str, reply: &'static str) -> (ClientConfig, JoinHandle<(String, String)>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let status = status.to_string();

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();

        let mut content_length = 0usize;
        loop {
            let mut header = String::new();
            reader.read_line(&mut header).unwrap();
            let header = header.trim_end();
            if header.is_empty() {
                break;
            }
            if let Some((name, value)) = header.split_once(':')
                && name.eq_ignore_ascii_case("content-length")
            {
                content_length = value.trim().parse().unwrap();
            }
        }
        let mut body = vec![0u8; content_length];
        reader.read_exact(&mut body).unwrap();

        let mut stream = stream;
        write!(
            stream,
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{reply}",
            reply.len()
        )
        .unwrap();
        stream.flush().unwrap();

        (
            request_line.trim_end().to_string(),
            String::from_utf8(body).unwrap(),
        )
    });

    let config = ClientConfig::from_json(&format!(r#"{{"base_url":"http://{addr}/"}}"#)).unwrap();
    (config, handle)
}

fn event() -> AbandonmentEvent {
    AbandonmentEvent {
        session_id: uuid::Uuid::new_v4(),
        current_segment_snapshot: serde_json::json!({ "state": "CA" }),
        last_segment_index: 3,
        state: TrackingState::InProgress,
        question_name: "State".to_string(),
        timestamp: "2026-10-18T12:00:00Z".parse().unwrap(),
    }
}

#[test]
fn tracking_posts_numeric_state_to_abandonment_endpoint() {
    let (config, server) = one_shot("200 OK", "{}");
    let api = HttpApi::new(&config);

    api.track(&event()).unwrap();

    let (request_line, body) = server.join().unwrap();
    assert_eq!(request_line, "POST /api/abandonment HTTP/1.1");
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["state"], 0);
    assert_eq!(body["lastSegmentIndex"], 3);
    assert_eq!(body["questionName"], "State");
    assert_eq!(body["currentSegmentSnapshot"]["state"], "CA");
}

#[test]
fn server_errors_surface_as_status() {
    let (config, server) = one_shot(
        "500 Internal Server Error",
        r#"{"success":false,"message":"database unavailable"}"#,
    );
    let api = HttpApi::new(&config);

    let err = api.track(&event()).unwrap_err();
    server.join().unwrap();
    assert!(matches!(err, ClientError::Status { status: 500, .. }));
}

#[test]
fn unreachable_server_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ClientConfig::from_json(&format!(r#"{{"base_url":"http://{addr}"}}"#)).unwrap();
    let err = HttpApi::new(&config).track(&event()).unwrap_err();
    assert!(matches!(err, ClientError::Transport { .. }));
}
