//! Background fetch job for the transactions listing.
//!
//! The GUI thread never blocks on the network. A fetch runs on its own OS
//! thread with a current-thread tokio runtime and hands its result back over
//! an mpsc channel that the update loop polls once per frame.

use crate::api::{ApiError, TransactionsClient};
use crate::config::Config;
use crate::transaction::Transaction;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use tokio::runtime::Builder;

type FetchResult = Result<Vec<Transaction>, ApiError>;

/// A single in-flight transactions fetch.
///
/// At most one of these exists at a time; the refresh control is disabled
/// while [`FetchJob::is_running`] is true.
pub struct FetchJob {
    receiver: Option<Receiver<FetchResult>>,
}

impl FetchJob {
    /// Spawn a worker thread that fetches the transactions listing.
    pub fn spawn(config: Config) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let result = match Builder::new_current_thread().enable_all().build() {
                Ok(runtime) => runtime.block_on(async {
                    let client = TransactionsClient::new(&config);
                    client.fetch_transactions().await
                }),
                Err(e) => {
                    tracing::error!("failed to create async runtime for fetch: {}", e);
                    Err(ApiError::Background(format!("runtime error: {}", e)))
                }
            };
            let _ = tx.send(result);
        });
        Self { receiver: Some(rx) }
    }

    /// Poll for completion. Returns `Some(result)` exactly once when the
    /// worker finishes, `None` while it is still running.
    pub fn poll(&mut self) -> Option<FetchResult> {
        if let Some(rx) = &self.receiver {
            match rx.try_recv() {
                Ok(result) => {
                    self.receiver = None;
                    return Some(result);
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    self.receiver = None;
                    return Some(Err(ApiError::Background(
                        "worker task disconnected".to_string(),
                    )));
                }
            }
        }
        None
    }

    pub fn is_running(&self) -> bool {
        self.receiver.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_with_channel() -> (mpsc::Sender<FetchResult>, FetchJob) {
        let (tx, rx) = mpsc::channel();
        (tx, FetchJob { receiver: Some(rx) })
    }

    #[test]
    fn test_poll_returns_none_while_pending() {
        let (_tx, mut job) = job_with_channel();
        assert!(job.poll().is_none());
        assert!(job.is_running());
    }

    #[test]
    fn test_poll_delivers_result_once() {
        let (tx, mut job) = job_with_channel();
        tx.send(Ok(Vec::new())).unwrap();

        match job.poll() {
            Some(Ok(txs)) => assert!(txs.is_empty()),
            other => panic!("expected delivered result, got {:?}", other.is_some()),
        }
        assert!(!job.is_running());
        assert!(job.poll().is_none());
    }

    #[test]
    fn test_disconnected_worker_surfaces_as_error() {
        let (tx, mut job) = job_with_channel();
        drop(tx);

        match job.poll() {
            Some(Err(ApiError::Background(msg))) => {
                assert!(msg.contains("disconnected"));
            }
            _ => panic!("expected background error"),
        }
        assert!(!job.is_running());
    }

    #[test]
    fn test_spawn_completes_against_closed_port() {
        let mut job = FetchJob::spawn(Config::new("http://127.0.0.1:9"));
        // The connection is refused locally, so the worker finishes quickly.
        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(10);
        loop {
            if let Some(result) = job.poll() {
                assert!(result.is_err());
                break;
            }
            assert!(std::time::Instant::now() < deadline, "fetch job never completed");
            thread::sleep(std::time::Duration::from_millis(10));
        }
    }
}
