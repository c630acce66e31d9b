//! JSON-lines toast producer
//!
//! Each line is an object like `{"type": "success", "message": "Saved"}`.
//! Blank lines are ignored and malformed lines are logged and skipped.

use crate::toast::{ToastKind, ToastStore};
use serde::Deserialize;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid toast request: {0}")]
    Parse(String),
}

/// A request to show one toast
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToastRequest {
    #[serde(rename = "type")]
    pub kind: ToastKind,
    pub message: String,
}

pub fn parse_request(line: &str) -> Result<Option<ToastRequest>, FeedError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(line)
        .map(Some)
        .map_err(|e| FeedError::Parse(e.to_string()))
}

/// Read requests until EOF, adding one toast per valid line.
/// Returns how many toasts were added.
pub async fn run_feed<R>(reader: R, store: &ToastStore) -> Result<usize, FeedError>
where
    R: AsyncBufRead + Unpin,
{
    let mut reader = reader;
    let mut buf = Vec::new();
    let mut added = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let parsed = std::str::from_utf8(&buf)
            .map_err(|e| FeedError::Parse(e.to_string()))
            .and_then(parse_request);
        match parsed {
            Ok(Some(request)) => {
                store.add(request.kind, request.message);
                added += 1;
            }
            Ok(None) => {}
            Err(e) => warn!("Skipping feed line: {}", e),
        }
    }

    info!("Toast feed ended after {} toasts", added);
    Ok(added)
}

/// Feed toasts from stdin on a dedicated thread with its own runtime
pub fn spawn_stdin_feed(store: ToastStore) {
    let spawned = std::thread::Builder::new()
        .name("toast-feed".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    error!("Failed to start toast feed runtime: {}", e);
                    return;
                }
            };

            let reader = BufReader::new(tokio::io::stdin());
            if let Err(e) = runtime.block_on(run_feed(reader, &store)) {
                error!("Toast feed stopped: {}", e);
            }
        });

    if let Err(e) = spawned {
        error!("Failed to spawn toast feed thread: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request() {
        let request = parse_request(r#"{"type": "error", "message": "Failed"}"#)
            .unwrap()
            .unwrap();
        assert_eq!(
            request,
            ToastRequest {
                kind: ToastKind::Error,
                message: "Failed".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_blank_line() {
        assert!(parse_request("   ").unwrap().is_none());
    }

    #[test]
    fn test_parse_rejects_unknown_type() {
        let err = parse_request(r#"{"type": "warning", "message": "Hmm"}"#).unwrap_err();
        assert!(matches!(err, FeedError::Parse(_)));
    }

    #[tokio::test]
    async fn test_run_feed_skips_invalid_utf8() {
        let mut input = b"{\"type\": \"success\", \"message\": \"Saved\"}\n".to_vec();
        input.extend_from_slice(&[0xff, 0xfe, b'\n']);
        input.extend_from_slice(b"{\"type\": \"error\", \"message\": \"Failed\"}");
        let store = ToastStore::new();

        let added = run_feed(input.as_slice(), &store).await.unwrap();

        assert_eq!(added, 2);
        let messages: Vec<_> = store.snapshot().into_iter().map(|t| t.message).collect();
        assert_eq!(messages, vec!["Saved", "Failed"]);
    }

    #[tokio::test]
    async fn test_run_feed_skips_bad_lines() {
        let input = concat!(
            "{\"type\": \"success\", \"message\": \"Saved\"}\n",
            "not json\n",
            "\n",
            "{\"type\": \"info\", \"message\": \"Synced\"}\n",
        );
        let store = ToastStore::new();

        let added = run_feed(input.as_bytes(), &store).await.unwrap();

        assert_eq!(added, 2);
        let toasts = store.snapshot();
        assert_eq!(toasts[0].kind, ToastKind::Success);
        assert_eq!(toasts[0].message, "Saved");
        assert_eq!(toasts[1].kind, ToastKind::Info);
        assert_eq!(toasts[1].message, "Synced");
    }
}
