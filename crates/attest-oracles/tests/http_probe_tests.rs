//! Probe tests against an in-process HTTP responder

use attest_domain::{HttpProbe, OracleFailure, ProbeMethod};
use attest_oracles::{HttpConfig, ReqwestProbe};
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;

/// Serve every connection with a response built from the request line
fn serve(respond: fn(&str, u16) -> String) -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { break };
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut request_line = String::new();
            if reader.read_line(&mut request_line).is_err() {
                continue;
            }
            // Drain headers
            let mut header = String::new();
            while reader.read_line(&mut header).map(|n| n > 2).unwrap_or(false) {
                header.clear();
            }
            let _ = stream.write_all(respond(&request_line, port).as_bytes());
        }
    });
    port
}

fn probe() -> ReqwestProbe {
    ReqwestProbe::new(&HttpConfig::default()).unwrap()
}

#[test]
fn test_status_is_reported() {
    let port = serve(|_, _| {
        "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_string()
    });
    let status = probe()
        .probe(ProbeMethod::Head, &format!("http://127.0.0.1:{port}/missing"))
        .unwrap();
    assert_eq!(status, 404);
}

#[test]
fn test_redirects_are_followed() {
    let port = serve(|line, port| {
        if line.contains("/final") {
            "HTTP/1.1 200 OK\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_string()
        } else {
            format!(
                "HTTP/1.1 302 Found\r\nLocation: http://127.0.0.1:{port}/final\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
            )
        }
    });
    let status = probe()
        .probe(ProbeMethod::Get, &format!("http://127.0.0.1:{port}/start"))
        .unwrap();
    assert_eq!(status, 200);
}

#[test]
fn test_redirect_loop_hits_cap() {
    let port = serve(|_, port| {
        format!(
            "HTTP/1.1 302 Found\r\nLocation: http://127.0.0.1:{port}/again\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
        )
    });
    let err = probe()
        .probe(ProbeMethod::Head, &format!("http://127.0.0.1:{port}/loop"))
        .unwrap_err();
    assert_eq!(err, OracleFailure::TooManyRedirects);
}

#[test]
fn test_refused_connection_fails() {
    // Bind then drop to get a port with nothing listening
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let err = probe()
        .probe(ProbeMethod::Head, &format!("http://127.0.0.1:{port}/"))
        .unwrap_err();
    assert!(matches!(err, OracleFailure::Failed(_)));
}
