//! No-WASM class sources
//!
//! [`NoWasmClient`] fetches over HTTP with reqwest, [`FileSource`] reads a
//! local JSON file, and [`NativeSource`] picks one of them from a location
//! string.

use std::path::PathBuf;

use reqwest::Client;

use crate::error::{ErrorKind, Result};
use crate::interface::ClassSource;
use crate::model::{decode_class_list, ClassRecord};

/// HTTP class source for no-WASM environments
#[derive(Debug, Clone)]
pub struct NoWasmClient {
    client: Client,
    url: String,
}

impl NoWasmClient {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, url))
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ClassSource for NoWasmClient {
    async fn fetch_classes(&self) -> Result<Vec<ClassRecord>> {
        let resp = self.client.get(&self.url).send().await?;

        log::debug!("Response status: {:?}", resp.status());

        let status = resp.status();
        if !status.is_success() {
            return Err(ErrorKind::HttpStatus(status.as_u16()).into());
        }

        let body = resp.text().await?;
        decode_class_list(&body)
    }
}

/// Reads the class list from a JSON file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ClassSource for FileSource {
    async fn fetch_classes(&self) -> Result<Vec<ClassRecord>> {
        let body = tokio::fs::read_to_string(&self.path).await?;
        decode_class_list(&body)
    }
}

/// HTTP(S) URLs go through [`NoWasmClient`], anything else is a file path
#[derive(Debug, Clone)]
pub enum NativeSource {
    Http(NoWasmClient),
    File(FileSource),
}

impl NativeSource {
    pub fn from_location(location: &str) -> Result<Self> {
        if location.starts_with("http://") || location.starts_with("https://") {
            Ok(NativeSource::Http(NoWasmClient::new(location)?))
        } else {
            Ok(NativeSource::File(FileSource::new(location)))
        }
    }
}

impl ClassSource for NativeSource {
    async fn fetch_classes(&self) -> Result<Vec<ClassRecord>> {
        match self {
            NativeSource::Http(client) => client.fetch_classes().await,
            NativeSource::File(file) => file.fetch_classes().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Failure;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves exactly one canned HTTP response and returns its URL
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request: Vec<u8> = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{addr}/master_classes.json")
    }

    fn local_client(url: String) -> NoWasmClient {
        let client = Client::builder().no_proxy().build().unwrap();
        NoWasmClient::with_client(client, url)
    }

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn fetches_and_decodes_over_http() {
        let url = serve_once(
            "200 OK",
            r#"[{"day":"Mon","time":"10:00","presenter":"A","title":"X","link":"l1"}]"#,
        )
        .await;

        let classes = local_client(url).fetch_classes().await.unwrap();
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].title.as_deref(), Some("X"));
    }

    #[tokio::test]
    async fn server_error_is_a_fetch_failure() {
        let url = serve_once("500 Internal Server Error", "").await;

        let err = local_client(url).fetch_classes().await.unwrap_err();
        assert_eq!(err.failure(), Failure::Fetch);
        assert!(matches!(err.kind(), ErrorKind::HttpStatus(500)));
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_failure() {
        let url = serve_once("200 OK", "[{\"day\": ").await;

        let err = local_client(url).fetch_classes().await.unwrap_err();
        assert_eq!(err.failure(), Failure::Decode);
    }

    #[tokio::test]
    async fn unreachable_host_is_a_fetch_failure() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = local_client(format!("http://{addr}/master_classes.json"))
            .fetch_classes()
            .await
            .unwrap_err();
        assert_eq!(err.failure(), Failure::Fetch);
    }

    #[tokio::test]
    async fn reads_classes_from_file() {
        let path = temp_file(
            "classes.json",
            r#"[{"day":"Tue","time":"08:00","presenter":"C","title":"Z"}]"#,
        );

        let source = NativeSource::from_location(path.to_str().unwrap()).unwrap();
        assert!(matches!(source, NativeSource::File(_)));
        let classes = source.fetch_classes().await.unwrap();
        assert_eq!(classes[0].day.as_deref(), Some("Tue"));
        assert_eq!(classes[0].link, None);

        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn missing_file_is_a_fetch_failure() {
        let err = FileSource::new("/nonexistent/master_classes.json")
            .fetch_classes()
            .await
            .unwrap_err();
        assert_eq!(err.failure(), Failure::Fetch);
    }

    #[test]
    fn urls_select_the_http_source() {
        let source = NativeSource::from_location("https://example.org/master_classes.json").unwrap();
        match source {
            NativeSource::Http(client) => {
                assert_eq!(client.url(), "https://example.org/master_classes.json")
            }
            NativeSource::File(_) => panic!("expected an HTTP source"),
        }
    }
}
