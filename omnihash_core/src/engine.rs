//! Digest engine: synchronous buffer path and cancellable streaming file path
//!
//! Buffers are hashed eagerly on the caller's thread. Files are streamed by
//! a background task that feeds every chunk to all registered hashers in a
//! single read pass, polls a cancellation token between reads, and reports
//! progress and results over an event channel. Per-algorithm results are
//! only emitted after the whole input has been read; a cancelled or failed
//! run emits no results at all.

use crate::digest::{AlgorithmRegistry, DigestResult, StreamingHasher};
use crate::error::{Error, InternalError, IoError, Result, ValidationError};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::io::AsyncReadExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Default read chunk size for the streaming path
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Engine tuning knobs
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Read chunk size in bytes for the streaming file path
    pub chunk_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(ValidationError::invalid_configuration("chunk_size must be non-zero").into());
        }
        Ok(())
    }
}

/// One computation input, consumed by a single pass
#[derive(Debug, Clone)]
pub enum InputSource {
    /// In-memory buffer, hashed synchronously
    Buffer(Vec<u8>),
    /// File on disk, streamed by a background task
    File(PathBuf),
}

/// Shared cancellation flag for one streaming run
///
/// Clones observe the same flag. Cancellation is cooperative: the worker
/// polls between chunk reads, so a set flag stops the run at the next
/// chunk boundary.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of the associated run
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

/// Event emitted by a streaming file computation
///
/// A run emits any number of `Progress` events, then on success one
/// `Result` per registered algorithm, then exactly one terminal event.
#[derive(Debug)]
pub enum DigestEvent {
    /// Bytes read so far; total is known when file metadata was readable
    Progress {
        bytes_processed: u64,
        total_bytes: Option<u64>,
    },
    /// One algorithm's final result (only after a complete read)
    Result(DigestResult),
    /// Terminal: all results were delivered
    Completed,
    /// Terminal: the run observed its cancellation token
    Cancelled,
    /// Terminal: the run stopped on an error
    Failed(Error),
}

impl DigestEvent {
    /// Whether this event ends its run
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            DigestEvent::Completed | DigestEvent::Cancelled | DigestEvent::Failed(_)
        )
    }
}

/// Handle to one in-flight streaming computation
struct FileHashJob {
    events: mpsc::Receiver<DigestEvent>,
    cancel: CancelToken,
    handle: JoinHandle<()>,
}

impl FileHashJob {
    /// Cancel, drain remaining events, and wait for the worker to exit
    ///
    /// Returns the terminal event observed while draining, if any.
    async fn shut_down(mut self) -> Option<DigestEvent> {
        self.cancel.cancel();
        let mut terminal = None;
        while let Some(event) = self.events.recv().await {
            if event.is_terminal() {
                terminal = Some(event);
            }
        }
        if self.handle.await.is_err() {
            warn!("file hashing worker panicked during shutdown");
        }
        terminal
    }
}

/// Multi-algorithm digest engine
///
/// Owns at most one in-flight file computation; starting a new one
/// supersedes the previous job (cancel, await terminal state, then spawn).
pub struct DigestEngine {
    config: EngineConfig,
    current: Option<FileHashJob>,
}

impl DigestEngine {
    /// Create an engine with default configuration
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            current: None,
        }
    }

    /// Create an engine with explicit configuration
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            current: None,
        })
    }

    /// Compute every registered algorithm over an in-memory buffer
    ///
    /// Runs synchronously on the caller's thread and returns results in
    /// registry order.
    pub fn compute_all(&self, data: &[u8], uppercase: bool) -> Result<Vec<DigestResult>> {
        let registry = AlgorithmRegistry::global();
        let mut results = Vec::with_capacity(registry.len());
        for (index, entry) in registry.entries().iter().enumerate() {
            let value = entry.compute_bytes(data)?;
            let output = value.render(uppercase);
            results.push(DigestResult {
                algorithm: entry.algorithm(),
                index,
                value,
                output,
            });
        }
        Ok(results)
    }

    /// Start a streaming computation over a file
    ///
    /// Any previous in-flight job is cancelled and awaited first. Events
    /// for the new job arrive through [`DigestEngine::next_event`]. The
    /// returned token cancels this run from anywhere.
    pub async fn start_file(
        &mut self,
        path: impl Into<PathBuf>,
        uppercase: bool,
    ) -> Result<CancelToken> {
        if let Some(previous) = self.current.take() {
            let terminal = previous.shut_down().await;
            debug!("superseded in-flight file job (terminal: {terminal:?})");
        }

        let path = path.into();
        let cancel = CancelToken::new();
        let (tx, rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);

        debug!("starting file hash job for {}", path.display());
        let worker_cancel = cancel.clone();
        let chunk_size = self.config.chunk_size;
        let handle = tokio::spawn(async move {
            if let Err(error) = stream_file(&path, uppercase, chunk_size, &worker_cancel, &tx).await
            {
                let _ = tx.send(DigestEvent::Failed(error)).await;
            }
        });

        self.current = Some(FileHashJob {
            events: rx,
            cancel: cancel.clone(),
            handle,
        });
        Ok(cancel)
    }

    /// Receive the next event of the current file job
    ///
    /// Returns `None` when no job is running or after the current job's
    /// terminal event has been delivered and the worker has exited.
    pub async fn next_event(&mut self) -> Option<DigestEvent> {
        let job = self.current.as_mut()?;
        match job.events.recv().await {
            Some(event) => Some(event),
            None => {
                if let Some(job) = self.current.take()
                    && job.handle.await.is_err()
                {
                    warn!("file hashing worker panicked");
                }
                None
            }
        }
    }

    /// Whether a file job is currently in flight
    pub fn is_running(&self) -> bool {
        self.current.is_some()
    }

    /// Cancel the current file job, if any, and await its terminal state
    pub async fn cancel_current(&mut self) {
        if let Some(job) = self.current.take() {
            job.shut_down().await;
        }
    }

    /// Stream a file to completion and collect all results
    pub async fn compute_file(
        &mut self,
        path: impl Into<PathBuf>,
        uppercase: bool,
    ) -> Result<Vec<DigestResult>> {
        self.start_file(path, uppercase).await?;

        let mut results = Vec::new();
        while let Some(event) = self.next_event().await {
            match event {
                DigestEvent::Progress { .. } => {}
                DigestEvent::Result(result) => results.push(result),
                DigestEvent::Completed => return Ok(results),
                DigestEvent::Cancelled => {
                    return Err(InternalError::assertion(
                        "file computation was cancelled through a leaked token",
                    )
                    .into());
                }
                DigestEvent::Failed(error) => return Err(error),
            }
        }
        Err(InternalError::assertion("file job ended without a terminal event").into())
    }

    /// Compute over any input source
    pub async fn compute(
        &mut self,
        source: InputSource,
        uppercase: bool,
    ) -> Result<Vec<DigestResult>> {
        match source {
            InputSource::Buffer(data) => self.compute_all(&data, uppercase),
            InputSource::File(path) => self.compute_file(path, uppercase).await,
        }
    }
}

impl Default for DigestEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Worker body for one file job
///
/// Sends `Cancelled` or the full result set plus `Completed` on the event
/// channel and returns `Ok`; returns `Err` only for faults the caller
/// turns into a `Failed` event. A closed channel means the job was
/// abandoned; the worker then stops quietly.
async fn stream_file(
    path: &Path,
    uppercase: bool,
    chunk_size: usize,
    cancel: &CancelToken,
    tx: &mpsc::Sender<DigestEvent>,
) -> Result<()> {
    let mut file = match tokio::fs::File::open(path).await {
        Ok(file) => file,
        Err(source) => {
            return Err(match source.kind() {
                std::io::ErrorKind::NotFound => IoError::file_not_found(path).into(),
                std::io::ErrorKind::PermissionDenied => {
                    IoError::permission_denied(path, source).into()
                }
                _ => IoError::from_std(source).with_path(path).into(),
            });
        }
    };
    let total_bytes = file.metadata().await.ok().map(|meta| meta.len());

    let registry = AlgorithmRegistry::global();
    let mut hashers: Vec<Box<dyn StreamingHasher>> = registry
        .entries()
        .iter()
        .map(|entry| entry.create_hasher())
        .collect();

    let mut buffer = vec![0u8; chunk_size];
    let mut bytes_processed = 0u64;
    loop {
        if cancel.is_cancelled() {
            debug!("file hash job cancelled at {bytes_processed} bytes");
            let _ = tx.send(DigestEvent::Cancelled).await;
            return Ok(());
        }

        let read = file
            .read(&mut buffer)
            .await
            .map_err(|source| IoError::read_failed(path, source))?;
        if read == 0 {
            break;
        }

        for hasher in &mut hashers {
            hasher.update(&buffer[..read]);
        }
        bytes_processed += read as u64;

        if tx
            .send(DigestEvent::Progress {
                bytes_processed,
                total_bytes,
            })
            .await
            .is_err()
        {
            return Ok(());
        }
    }

    for (entry, hasher) in registry.entries().iter().zip(hashers) {
        let value = hasher.finalize()?;
        let output = value.render(uppercase);
        let result = DigestResult {
            algorithm: entry.algorithm(),
            index: entry.algorithm().index(),
            value,
            output,
        };
        if tx.send(DigestEvent::Result(result)).await.is_err() {
            return Ok(());
        }
    }

    debug!("file hash job completed ({bytes_processed} bytes)");
    let _ = tx.send(DigestEvent::Completed).await;
    Ok(())
}
