// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only)

use std::{io::{Read, Write}, net::TcpStream, time::Duration};
use crate::config::consts::HOST;

/// A fetched page. Non-200 statuses are returned, not raised, so callers
/// can skip an entity without aborting the batch.
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

pub fn http_get(path: &str, timeout: Duration) -> Result<Response, Box<dyn std::error::Error>> {
    let mut s = TcpStream::connect((HOST, 80))?;
    s.set_read_timeout(Some(timeout))?;
    s.set_write_timeout(Some(timeout))?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: shot_scrape/0.3\r\nConnection: close\r\n\r\n",
        path, HOST
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    let resp = String::from_utf8_lossy(&buf);

    let status_line = resp.split("\r\n").next().unwrap_or("");
    let status: u16 = status_line
        .split_whitespace()
        .nth(1)
        .and_then(|c| c.parse().ok())
        .ok_or_else(|| format!("Malformed status line: {status_line}"))?;

    let body_idx = resp.find("\r\n\r\n").ok_or("Malformed HTTP response")? + 4;
    Ok(Response { status, body: resp[body_idx..].to_string() })
}
