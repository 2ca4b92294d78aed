use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use assert_cmd::Command;
use chrono::{TimeDelta, Utc};

pub fn cmd() -> Command {
    Command::cargo_bin("solrwatch").expect("solrwatch binary")
}

/// Serve a single canned HTTP response on a local port and return the port.
pub fn serve_once(status_line: &str, body: &str) -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server");
    let port = listener.local_addr().expect("local addr").port();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });

    port
}

/// A port nothing is listening on.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe");
    listener.local_addr().expect("local addr").port()
}

/// RFC 3339 timestamp `secs` seconds in the past.
pub fn ago(secs: i64) -> String {
    (Utc::now() - TimeDelta::seconds(secs)).to_rfc3339()
}

/// A core admin status body with the given (name, numDocs, lastModified) cores.
pub fn status_body(status: i64, cores: &[(&str, u64, String)]) -> String {
    let cores: Vec<String> = cores
        .iter()
        .map(|(name, docs, modified)| {
            format!(
                r#""{name}":{{"name":"{name}","index":{{"numDocs":{docs},"lastModified":"{modified}"}}}}"#
            )
        })
        .collect();
    format!(
        r#"{{"responseHeader":{{"status":{}}},"status":{{{}}}}}"#,
        status,
        cores.join(",")
    )
}
