//! Blocking translation client for the remote endpoint

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::USER_AGENT;
use tracing::debug;

use crate::core::config::TranslationConfig;
use crate::core::errors::{Result, TranslateError};

/// The endpoint rejects requests without a recognizable browser user agent,
/// so every request carries this value verbatim.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

/// Percent-encode everything except RFC 3986 unreserved characters, so a
/// space becomes `%20` inside the query component.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Blocking client for a templated translation endpoint.
///
/// Each call is a single stateless request/response round trip: no retries,
/// no caching, no connection reuse contract between calls.
#[derive(Debug, Clone)]
pub struct TranslatorClient {
    /// Underlying HTTP client
    http: reqwest::blocking::Client,
    /// Endpoint template and language pair
    config: TranslationConfig,
}

impl TranslatorClient {
    /// Create a new client after validating the configuration.
    pub fn new(config: TranslationConfig) -> Result<Self> {
        config.validate()?;
        let http = reqwest::blocking::Client::new();
        Ok(Self { http, config })
    }

    /// Access the configuration this client was built with.
    pub fn config(&self) -> &TranslationConfig {
        &self.config
    }

    /// Build the request URL for `text`.
    ///
    /// `text` is percent-encoded as UTF-8 and substituted together with the
    /// target and source language codes into the template's `{0}`, `{1}` and
    /// `{2}` placeholders, in that fixed order. Only the text field is
    /// encoded; the language codes are substituted as-is.
    pub fn build_request_url(&self, text: &str) -> String {
        let encoded = utf8_percent_encode(text, QUERY_ENCODE_SET).to_string();
        self.config
            .url_template
            .replace("{0}", &encoded)
            .replace("{1}", &self.config.target_lang)
            .replace("{2}", &self.config.source_lang)
    }

    /// Translate `text` with one blocking GET against the endpoint.
    ///
    /// The response body is opaque text, not a documented API format: it is
    /// read as UTF-8 lines and concatenated with no separator. Any transport
    /// failure, non-2xx status or decoding failure is an error; nothing is
    /// retried.
    pub fn translate(&self, text: &str) -> Result<String> {
        let url = self.build_request_url(text);
        debug!("Requesting translation from {}", url);

        let response = self
            .http
            .get(&url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .send()
            .map_err(|e| TranslateError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::EndpointStatus {
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .map_err(|e| TranslateError::NetworkError {
                message: e.to_string(),
            })?;
        let body = String::from_utf8(bytes.to_vec()).map_err(|e| {
            TranslateError::DecodingError {
                message: e.to_string(),
            }
        })?;

        // Line boundaries in the body are discarded.
        Ok(body.lines().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    fn client_for(template: &str) -> TranslatorClient {
        TranslatorClient::new(TranslationConfig::new(template, "es", "en")).unwrap()
    }

    /// Serve exactly one canned HTTP response and hand back the raw request.
    fn one_shot_server(response: &'static str) -> (u16, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 4096];
            let n = stream.read(&mut buf).unwrap();
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8_lossy(&buf[..n]).to_string()
        });
        (port, handle)
    }

    #[test]
    fn test_build_request_url_encodes_text_only() {
        let client = client_for("http://x/?q={0}&to={1}&from={2}");
        assert_eq!(
            client.build_request_url("hello world"),
            "http://x/?q=hello%20world&to=es&from=en"
        );
    }

    #[test]
    fn test_build_request_url_substitution_order() {
        let client = client_for("http://x/{2}/{1}?q={0}");
        assert_eq!(client.build_request_url("abc"), "http://x/en/es?q=abc");
    }

    #[test]
    fn test_translate_concatenates_body_lines() {
        let (port, server) = one_shot_server(
            "HTTP/1.1 200 OK\r\nContent-Length: 10\r\nConnection: close\r\n\r\nhola\nmundo",
        );
        let client = client_for(&format!("http://127.0.0.1:{}/?q={{0}}&to={{1}}&from={{2}}", port));

        let translated = client.translate("hello world").unwrap();
        assert_eq!(translated, "holamundo");

        let request = server.join().unwrap();
        assert!(request.starts_with("GET /?q=hello%20world&to=es&from=en HTTP/1.1"));
        assert!(request.contains("user-agent: Mozilla/5.0"));
    }

    #[test]
    fn test_translate_non_2xx_is_an_error() {
        let (port, server) = one_shot_server(
            "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        let client = client_for(&format!("http://127.0.0.1:{}/?q={{0}}&to={{1}}&from={{2}}", port));

        let err = client.translate("text").unwrap_err();
        assert!(matches!(err, TranslateError::EndpointStatus { status: 503 }));
        server.join().unwrap();
    }

    #[test]
    fn test_translate_connection_refused_is_network_error() {
        // Bind then drop to find a port nothing is listening on.
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = client_for(&format!("http://127.0.0.1:{}/?q={{0}}&to={{1}}&from={{2}}", port));

        let err = client.translate("text").unwrap_err();
        assert!(matches!(err, TranslateError::NetworkError { .. }));
    }

    #[test]
    fn test_translate_invalid_utf8_is_decoding_error() {
        // U+FFFD is three bytes; the declared length truncates the body to
        // the first two, which is not a complete UTF-8 sequence.
        let (port, server) = one_shot_server(
            "HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\n\u{fffd}",
        );
        let client = client_for(&format!("http://127.0.0.1:{}/?q={{0}}&to={{1}}&from={{2}}", port));

        let result = client.translate("text");
        server.join().unwrap();
        assert!(matches!(result, Err(TranslateError::DecodingError { .. })));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = TranslationConfig::new("http://x/?q={0}", "es", "en");
        assert!(TranslatorClient::new(config).is_err());
    }
}
