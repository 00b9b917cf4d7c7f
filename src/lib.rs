// Library interface for Larder
// Build cache persistence hooks: restore a build tool's incremental cache
// before the build, save it again afterwards.

pub mod cache;
pub mod config;
pub mod hooks;
pub mod logging;
pub mod paths;
pub mod status;

// Re-export commonly used types
pub use cache::{BuildCache, CacheOptions};
pub use config::{BridgeInputs, InputsError};
pub use hooks::{on_post_build, on_pre_build, run_hook, BuildEvent, HookContext};
pub use paths::{resolve, DirRoot, ResolvedPaths};
pub use status::{StatusReport, StatusSink, TracingStatus};
