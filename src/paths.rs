use std::path::PathBuf;

use crate::config::BridgeInputs;

/// Manifest file used as a change-detection digest source on save.
pub const MANIFEST_FILE: &str = "build-manifest.json";

/// Folder cached in the host-root variant.
const HOST_DIR_NAME: &str = ".next";

/// Source of the directory root the cached folder lives under.
///
/// Two layouts exist in the wild: a project-relative root configured through
/// plugin inputs, and a fixed build directory handed down by the host. Both
/// resolve through [`resolve`] so the restore/save pair always agrees on
/// location, instead of each hook variant carrying its own path logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirRoot {
    /// Cache lives at `<base>/<dir_name>/cache`.
    Project { base: PathBuf, dir_name: String },
    /// Cache is the `.next` folder directly under the host build directory.
    Host { build_dir: PathBuf },
}

impl DirRoot {
    /// Select the root variant from orchestrator-supplied inputs.
    pub fn from_inputs(inputs: &BridgeInputs) -> Self {
        match &inputs.host_build_dir {
            Some(dir) => DirRoot::Host {
                build_dir: PathBuf::from(dir),
            },
            None => DirRoot::Project {
                base: PathBuf::from(&inputs.build_dir_path),
                dir_name: inputs.custom_build_dir_name.clone(),
            },
        }
    }
}

/// Paths a single hook invocation operates on.
///
/// Constructed fresh on every hook call and discarded when the hook
/// returns. The manifest always sits in the parent of `build_dir`, so both
/// root variants share one digest-source rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Directory handed to the cache collaborator.
    pub build_dir: PathBuf,
    /// Digest source for save-time change detection.
    pub manifest: PathBuf,
    /// Folder name used in human-readable reports.
    pub dir_name: String,
}

/// Resolve the cache directory and its manifest from a directory root.
///
/// Pure path construction: no I/O and no failure modes. Identical roots
/// yield identical paths, which is what lets the pre-build and post-build
/// hooks agree on location even when they run in separate process
/// instances.
pub fn resolve(root: &DirRoot) -> ResolvedPaths {
    match root {
        DirRoot::Project { base, dir_name } => {
            let parent = base.join(dir_name);
            ResolvedPaths {
                build_dir: parent.join("cache"),
                manifest: parent.join(MANIFEST_FILE),
                dir_name: dir_name.clone(),
            }
        }
        DirRoot::Host { build_dir } => ResolvedPaths {
            build_dir: build_dir.join(HOST_DIR_NAME),
            manifest: build_dir.join(MANIFEST_FILE),
            dir_name: HOST_DIR_NAME.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_resolve_default_inputs() {
        let inputs = BridgeInputs::default();
        let resolved = resolve(&DirRoot::from_inputs(&inputs));

        assert_eq!(resolved.build_dir, Path::new("./.next/cache"));
        assert_eq!(resolved.manifest, Path::new("./.next/build-manifest.json"));
        assert_eq!(resolved.dir_name, ".next");
    }

    #[test]
    fn test_resolve_custom_inputs() {
        let inputs = BridgeInputs {
            custom_build_dir_name: "build".to_string(),
            build_dir_path: "frontend".to_string(),
            host_build_dir: None,
        };
        let resolved = resolve(&DirRoot::from_inputs(&inputs));

        assert_eq!(resolved.build_dir, Path::new("frontend/build/cache"));
        assert_eq!(
            resolved.manifest,
            Path::new("frontend/build/build-manifest.json")
        );
        assert_eq!(resolved.dir_name, "build");
    }

    #[test]
    fn test_resolve_host_root() {
        let root = DirRoot::Host {
            build_dir: PathBuf::from("/opt/build/repo"),
        };
        let resolved = resolve(&root);

        assert_eq!(resolved.build_dir, Path::new("/opt/build/repo/.next"));
        assert_eq!(
            resolved.manifest,
            Path::new("/opt/build/repo/build-manifest.json")
        );
        assert_eq!(resolved.dir_name, ".next");
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let inputs = BridgeInputs {
            custom_build_dir_name: "dist".to_string(),
            build_dir_path: "apps/web".to_string(),
            host_build_dir: None,
        };

        let first = resolve(&DirRoot::from_inputs(&inputs));
        let second = resolve(&DirRoot::from_inputs(&inputs));
        assert_eq!(first, second);
    }

    #[test]
    fn test_manifest_is_sibling_of_build_dir() {
        let roots = [
            DirRoot::Project {
                base: PathBuf::from("."),
                dir_name: ".next".to_string(),
            },
            DirRoot::Project {
                base: PathBuf::from("packages/site"),
                dir_name: "out".to_string(),
            },
            DirRoot::Host {
                build_dir: PathBuf::from("/opt/build/repo"),
            },
        ];

        for root in &roots {
            let resolved = resolve(root);
            let parent = resolved.build_dir.parent().unwrap();
            assert_eq!(resolved.manifest, parent.join(MANIFEST_FILE));
        }
    }

    #[test]
    fn test_resolve_empty_inputs_are_defined() {
        let inputs = BridgeInputs {
            custom_build_dir_name: String::new(),
            build_dir_path: String::new(),
            host_build_dir: None,
        };
        let resolved = resolve(&DirRoot::from_inputs(&inputs));

        // Degenerate but well-defined: everything collapses toward the
        // current directory.
        assert_eq!(resolved.build_dir, Path::new("cache"));
        assert_eq!(resolved.manifest, Path::new(MANIFEST_FILE));
    }

    #[test]
    fn test_host_root_ignores_project_inputs() {
        let inputs = BridgeInputs {
            custom_build_dir_name: "build".to_string(),
            build_dir_path: "frontend".to_string(),
            host_build_dir: Some("/opt/build/repo".to_string()),
        };
        let resolved = resolve(&DirRoot::from_inputs(&inputs));

        assert_eq!(resolved.build_dir, Path::new("/opt/build/repo/.next"));
        assert_eq!(resolved.dir_name, ".next");
    }
}
