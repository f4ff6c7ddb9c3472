use std::{
    io::{Read, Write},
    net::TcpListener,
    thread::{self, JoinHandle},
};

pub struct CannedResponse {
    pub status: &'static str,
    pub body: &'static str,
}

impl CannedResponse {
    pub fn ok(body: &'static str) -> Self {
        Self {
            status: "200 OK",
            body,
        }
    }
}

/// Serve `responses` in order, one per connection, on a local port. Joining
/// the handle yields the request line of every request served.
pub fn serve(responses: Vec<CannedResponse>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = format!("http://{}", listener.local_addr().unwrap());
    let handle = thread::spawn(move || {
        let mut request_lines = Vec::new();
        for response in responses {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let count = stream.read(&mut buf).unwrap();
                if count == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..count]);
            }
            let request = String::from_utf8_lossy(&request);
            request_lines.push(request.lines().next().unwrap_or_default().to_string());

            write!(
                stream,
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                response.status,
                response.body.len(),
                response.body
            )
            .unwrap();
        }
        request_lines
    });
    (endpoint, handle)
}

/// An endpoint nothing is listening on.
pub fn refused_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    endpoint
}
