use std::sync::Arc;
use tracing::{debug, error, info};

use crate::cache::{BuildCache, CacheOptions};
use crate::config::BridgeInputs;
use crate::paths::{self, DirRoot};
use crate::status::{StatusReport, StatusSink};

/// Everything a single hook invocation needs: the host's collaborators and
/// the configuration inputs it supplied.
pub struct HookContext {
    pub cache: Arc<dyn BuildCache>,
    pub status: Arc<dyn StatusSink>,
    pub inputs: BridgeInputs,
}

/// Lifecycle points the orchestrator drives hooks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildEvent {
    /// Before the build tool runs
    PreBuild,
    /// After the build step, whether or not it succeeded
    PostBuild,
}

/// Dispatch a lifecycle event to its hook.
///
/// For orchestrators that drive plugins by event name rather than calling
/// [`on_pre_build`] / [`on_post_build`] directly.
pub async fn run_hook(event: BuildEvent, ctx: &HookContext) {
    match event {
        BuildEvent::PreBuild => on_pre_build(ctx).await,
        BuildEvent::PostBuild => on_post_build(ctx).await,
    }
}

/// Pre-build hook: best-effort restore of the cached build directory.
///
/// A `false` outcome is routine (first build ever, or the folder already
/// exists locally) and never aborts the build; the hook has no way to
/// fail by construction.
pub async fn on_pre_build(ctx: &HookContext) {
    let resolved = paths::resolve(&DirRoot::from_inputs(&ctx.inputs));

    let restored = ctx
        .cache
        .restore(&resolved.build_dir, &CacheOptions::default())
        .await;

    if restored {
        info!(
            operation = "restore",
            status = "success",
            path = %resolved.build_dir.display(),
            "restored {} from cache",
            resolved.dir_name
        );
        ctx.status.show(StatusReport {
            title: None,
            summary: format!("Restored the {} folder", resolved.dir_name),
            text: Some(format!(
                "Restored the cached {} folder at {}",
                resolved.dir_name,
                resolved.build_dir.display()
            )),
        });
    } else {
        // The existence check is diagnostic only; the outcome above already
        // decided the control flow.
        debug!(
            operation = "restore",
            status = "miss",
            path = %resolved.build_dir.display(),
            dir_present = resolved.build_dir.exists(),
            "no cached {} folder to restore",
            resolved.dir_name
        );
    }
}

/// Post-build hook: persist the build directory for the next run.
///
/// The manifest path rides along as a digest source so the collaborator
/// can skip the save when contents are unchanged. Runs after the build
/// step unconditionally, including after failed builds, so a saved cache
/// can reflect a partial build; known limitation of the lifecycle.
pub async fn on_post_build(ctx: &HookContext) {
    let resolved = paths::resolve(&DirRoot::from_inputs(&ctx.inputs));

    let opts = CacheOptions {
        digest_sources: vec![resolved.manifest.clone()],
    };
    let saved = ctx.cache.save(&resolved.build_dir, &opts).await;

    if saved {
        info!(
            operation = "save",
            status = "success",
            path = %resolved.build_dir.display(),
            "cached {} for the next build",
            resolved.dir_name
        );
        ctx.status.show(StatusReport {
            title: None,
            summary: format!("Cached the {} folder", resolved.dir_name),
            text: Some(format!(
                "Cached the {} folder at {}",
                resolved.dir_name,
                resolved.build_dir.display()
            )),
        });
    } else {
        error!(
            operation = "save",
            status = "skipped",
            path = %resolved.build_dir.display(),
            "could not cache the {} folder",
            resolved.dir_name
        );
    }
}
