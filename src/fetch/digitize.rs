// src/fetch/digitize.rs

use anyhow::{Context, Result};
use reqwest::blocking::{multipart, Client, ClientBuilder};
use serde_json::Value;
use tracing::{info, instrument, warn};

use super::payload::parse_payload;
use crate::config::Config;

/// Blocking client for the document-digitization endpoint. One call per
/// document; no retries.
pub struct DigitizeClient {
    client: Client,
    config: Config,
}

/// Builder for the HTTP client. The blocking client's 30s default timeout is
/// cleared: multi-page OCR runs longer than that.
pub fn client_builder() -> ClientBuilder {
    Client::builder().timeout(None)
}

impl DigitizeClient {
    pub fn new(config: Config) -> Result<Self> {
        let client = client_builder()
            .build()
            .context("building HTTP client")?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: Config) -> Self {
        Self { client, config }
    }

    fn form(&self, document: Vec<u8>, file_name: &str) -> Result<multipart::Form> {
        let part = multipart::Part::bytes(document)
            .file_name(file_name.to_string())
            .mime_str("application/pdf")
            .context("building document part")?;
        Ok(multipart::Form::new()
            .part("document", part)
            .text("model", self.config.model.clone())
            .text("ocr", "force")
            .text("coordinates", "true")
            .text("output_formats", r#"["html"]"#)
            .text("base64_encoding", "['table']"))
    }

    /// Send a PDF and return the parsed JSON reply.
    ///
    /// Transport errors fail the call. A non-success status or a body that is
    /// not JSON only logs a warning; the caller then finds no fragments.
    #[instrument(level = "info", skip(self, document), fields(bytes = document.len()))]
    pub fn digitize(&self, document: Vec<u8>, file_name: &str) -> Result<Value> {
        let api_key = self.config.require_api_key()?;
        let url = self.config.endpoint.clone();

        let resp = self
            .client
            .post(url.clone())
            .bearer_auth(api_key)
            .multipart(self.form(document, file_name)?)
            .send()
            .with_context(|| format!("POST {} failed", url))?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%status, "digitization service returned an error status");
        }
        let body = resp
            .text()
            .with_context(|| format!("reading body from {}", url))?;
        info!(%status, len = body.len(), "digitization response");

        Ok(parse_payload(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;
    use std::time::{Duration, Instant};

    /// Serve exactly one request with `status` and `body`, handing back the raw
    /// request text.
    fn serve_once(status: &'static str, body: &'static str) -> (String, thread::JoinHandle<String>) {
        serve_once_after(Duration::ZERO, status, body)
    }

    fn serve_once_after(
        delay: Duration,
        status: &'static str,
        body: &'static str,
    ) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            while !request_complete(&request) {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            thread::sleep(delay);
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });
        (format!("http://{addr}/v1/document-digitization"), handle)
    }

    /// Headers read, then either `content-length` bytes or a final empty chunk.
    fn request_complete(request: &[u8]) -> bool {
        let text = String::from_utf8_lossy(request);
        let Some(head_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let head = text[..head_end].to_ascii_lowercase();
        let body_len = request.len() - (head_end + 4);
        match head
            .lines()
            .find_map(|l| l.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
        {
            Some(len) => body_len >= len,
            None => request.ends_with(b"0\r\n\r\n") && body_len > 0,
        }
    }

    fn client_for(endpoint: &str) -> DigitizeClient {
        let config = Config::from_lookup(|key| match key {
            "UPSTAGE_API_KEY" => Some("test-key".into()),
            "UPSTAGE_ENDPOINT" => Some(endpoint.into()),
            _ => None,
        })
        .unwrap();
        let client = client_builder().no_proxy().build().unwrap();
        DigitizeClient::with_client(client, config)
    }

    #[test]
    fn posts_document_with_form_fields() -> Result<()> {
        let (endpoint, server) =
            serve_once("200 OK", r#"{"elements":[{"content":{"html":"<table></table>"}}]}"#);
        let payload = client_for(&endpoint).digitize(b"%PDF-1.4".to_vec(), "doc.pdf")?;
        let request = server.join().unwrap();

        assert!(request.starts_with("POST /v1/document-digitization"));
        assert!(request.contains("Bearer test-key"));
        assert!(request.contains("name=\"document\"; filename=\"doc.pdf\""));
        assert!(request.contains("document-parse-250508"));
        assert!(request.contains("force"));
        assert_eq!(
            crate::fetch::html_fragments(&payload),
            vec!["<table></table>".to_string()]
        );
        Ok(())
    }

    #[test]
    fn error_status_with_html_body_degrades() -> Result<()> {
        let (endpoint, server) = serve_once("502 Bad Gateway", "<html>bad gateway</html>");
        let payload = client_for(&endpoint).digitize(b"%PDF".to_vec(), "doc.pdf")?;
        server.join().unwrap();
        assert_eq!(payload, Value::Null);
        Ok(())
    }

    #[test]
    fn missing_key_fails_before_sending() {
        let config = Config::from_lookup(|_| None).unwrap();
        let err = DigitizeClient::new(config)
            .unwrap()
            .digitize(Vec::new(), "doc.pdf")
            .unwrap_err();
        assert!(err.to_string().contains("UPSTAGE_API_KEY"));
    }

    #[test]
    fn slow_service_is_awaited_past_thirty_seconds() -> Result<()> {
        let (endpoint, server) = serve_once_after(
            Duration::from_secs(32),
            "200 OK",
            r#"{"elements":[{"content":{"html":"<table></table>"}}]}"#,
        );
        let start = Instant::now();
        let payload = client_for(&endpoint).digitize(b"%PDF".to_vec(), "doc.pdf")?;
        server.join().unwrap();

        assert!(start.elapsed() >= Duration::from_secs(32));
        assert_eq!(crate::fetch::html_fragments(&payload).len(), 1);
        Ok(())
    }
}
