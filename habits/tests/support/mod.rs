#![allow(dead_code)]

use std::{
    io::{BufRead, BufReader, Read, Write},
    net::{TcpListener, TcpStream},
    sync::mpsc::{self, Receiver},
    thread,
    time::Duration,
};

/// A request as seen by the mock service.
#[derive(Debug, Clone)]
pub struct Captured {
    pub method: String,
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Captured {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

/// Throw-away HTTP server answering one connection per canned response.
pub struct MockService {
    pub url: String,
    requests: Receiver<Captured>,
}

impl MockService {
    pub fn start(responses: Vec<String>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            for response in responses {
                let Ok((mut stream, _)) = listener.accept() else {
                    return;
                };
                if let Some(captured) = read_request(&mut stream) {
                    let _ = tx.send(captured);
                }
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            }
        });

        Self {
            url: format!("http://{addr}"),
            requests: rx,
        }
    }

    /// Next captured request, waiting a little for the server thread.
    pub fn next_request(&self) -> Option<Captured> {
        self.requests.recv_timeout(Duration::from_secs(5)).ok()
    }

    /// Whether a request arrived within a short grace period.
    pub fn received_any(&self) -> bool {
        self.requests
            .recv_timeout(Duration::from_millis(200))
            .is_ok()
    }
}

/// Url of a local port nothing listens on.
pub fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn json_response(status: u16, reason: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

pub fn ok_json(body: &str) -> String {
    json_response(200, "OK", body)
}

pub fn prediction_body(model: &str, prediction: &str) -> String {
    format!(
        r#"{{"model":"{model}","input":{{"Age":30,"SleepHours":7.5,"TeaCoffeePerDay":2,"ExerciseDays":3,"HealthyMeals":2,"MealsPerDay":3}},"prediction":"{prediction}"}}"#
    )
}

fn read_request(stream: &mut TcpStream) -> Option<Captured> {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).ok()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_string();
    let target = parts.next()?.to_string();

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).ok()?;
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((k, v)) = line.split_once(':') {
            headers.push((k.trim().to_string(), v.trim().to_string()));
        }
    }

    let length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);

    let mut body = vec![0; length];
    reader.read_exact(&mut body).ok()?;

    Some(Captured {
        method,
        target,
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}
