use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Options forwarded to the cache collaborator alongside a directory path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheOptions {
    /// Files the collaborator may hash to decide whether a save is needed
    pub digest_sources: Vec<PathBuf>,
}

/// The host's cache storage surface.
///
/// Implemented by the embedding orchestrator; this crate only ever calls
/// it. Outcomes are deliberately coarse: `false` covers "nothing cached",
/// "contents unchanged" and "backend unavailable" alike, and the hooks
/// treat every one of them as non-fatal. Retry, timeout and transport
/// policy all belong to the implementation behind this trait.
#[async_trait]
pub trait BuildCache: Send + Sync {
    /// Materialize a previously saved directory at `path`.
    ///
    /// Returns true if restoration occurred, false if skipped or
    /// unavailable.
    async fn restore(&self, path: &Path, opts: &CacheOptions) -> bool;

    /// Persist the directory at `path`, tagged with the digest sources in
    /// `opts`.
    ///
    /// Returns true if a save occurred, false if skipped (unchanged or
    /// missing).
    async fn save(&self, path: &Path, opts: &CacheOptions) -> bool;
}
