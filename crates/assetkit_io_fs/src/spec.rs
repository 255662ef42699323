//! Organizer specification models and top-level error types.

use std::fmt;
use std::path::{Path, PathBuf};

////////////////////////////////////////////////////////////////////////////////
// #region EnumsInit

/// Pattern matching mode for bulk-copy rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumCopyPatternMode {
    /// Shell-like wildcards (`*`, `?`, character classes).
    #[default]
    Glob,
    /// Regular expression pattern.
    Regex,
    /// Exact basename match.
    Literal,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region StructsAndErrors

/// One explicit `(source, destination)` copy pair.
///
/// Paths are relative to the manifest source/destination roots until the
/// manifest is resolved with [`SpecAssetManifest::resolve_under`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecAssetMapping {
    /// Source file path.
    pub path_src: PathBuf,
    /// Destination file path (may rename the source).
    pub path_dst: PathBuf,
}

impl SpecAssetMapping {
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(path_src: P, path_dst: Q) -> Self {
        Self {
            path_src: path_src.into(),
            path_dst: path_dst.into(),
        }
    }
}

/// Pattern-based rule copying every matching file of one folder into another,
/// keeping the original filenames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecBulkCopyRule {
    /// Console label for the section header.
    pub label: String,
    /// Source directory (scanned non-recursively).
    pub path_dir_src: PathBuf,
    /// Destination directory.
    pub path_dir_dst: PathBuf,
    /// Filename pattern applied to the entry basename.
    pub pattern: String,
    /// Pattern interpretation mode.
    pub rule_pattern: EnumCopyPatternMode,
}

impl SpecBulkCopyRule {
    /// Glob rule, the common case.
    pub fn glob<P, Q>(label: &str, path_dir_src: P, path_dir_dst: Q, pattern: &str) -> Self
    where
        P: Into<PathBuf>,
        Q: Into<PathBuf>,
    {
        Self {
            label: label.to_string(),
            path_dir_src: path_dir_src.into(),
            path_dir_dst: path_dir_dst.into(),
            pattern: pattern.to_string(),
            rule_pattern: EnumCopyPatternMode::Glob,
        }
    }
}

/// Full organizer input: destination layout, explicit mappings and bulk rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecAssetManifest {
    /// Source tree root.
    pub path_dir_src_root: PathBuf,
    /// Destination tree root.
    pub path_dir_dst_root: PathBuf,
    /// Folder names created under the destination root, in order.
    pub folders: Vec<String>,
    /// Explicit mappings, source relative to `path_dir_src_root`,
    /// destination relative to `path_dir_dst_root`.
    pub mappings: Vec<SpecAssetMapping>,
    /// Bulk-copy rules, roots applied the same way as `mappings`.
    pub rules_bulk: Vec<SpecBulkCopyRule>,
}

impl SpecAssetManifest {
    /// Join every relative path onto its root, with both roots placed under
    /// `path_dir_base`. Absolute entries are kept as they are.
    pub fn resolve_under(&self, path_dir_base: &Path) -> Self {
        let path_dir_src_root = path_dir_base.join(&self.path_dir_src_root);
        let path_dir_dst_root = path_dir_base.join(&self.path_dir_dst_root);

        let mappings = self
            .mappings
            .iter()
            .map(|m| SpecAssetMapping {
                path_src: path_dir_src_root.join(&m.path_src),
                path_dst: path_dir_dst_root.join(&m.path_dst),
            })
            .collect();
        let rules_bulk = self
            .rules_bulk
            .iter()
            .map(|r| SpecBulkCopyRule {
                path_dir_src: path_dir_src_root.join(&r.path_dir_src),
                path_dir_dst: path_dir_dst_root.join(&r.path_dir_dst),
                ..r.clone()
            })
            .collect();

        Self {
            path_dir_src_root,
            path_dir_dst_root,
            folders: self.folders.clone(),
            mappings,
            rules_bulk,
        }
    }
}

/// Fatal organizer errors. Missing sources are not errors; they land in the
/// report instead.
#[derive(Debug)]
pub enum OrganizeError {
    /// Invalid bulk-copy pattern.
    InvalidPattern(String),
    /// Manifest references a destination outside the declared layout.
    InvalidManifest(String),
    /// Destination directory creation failed.
    DestinationInitFailed {
        /// Directory that failed to be created.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
    /// Bulk-copy source directory could not be listed.
    ReadDirFailed {
        /// Directory being listed.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
    /// Copy of an existing source failed.
    CopyFailed {
        /// Source file.
        source: PathBuf,
        /// Destination file.
        destination: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
}

impl fmt::Display for OrganizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern(msg) => write!(f, "{msg}"),
            Self::InvalidManifest(msg) => write!(f, "{msg}"),
            Self::DestinationInitFailed { path, message } => {
                write!(
                    f,
                    "Failed to create destination directory {}: {message}",
                    path.display()
                )
            }
            Self::ReadDirFailed { path, message } => {
                write!(f, "Failed to read directory {}: {message}", path.display())
            }
            Self::CopyFailed {
                source,
                destination,
                message,
            } => write!(
                f,
                "Failed to copy {} -> {}: {message}",
                source.display(),
                destination.display()
            ),
        }
    }
}

impl std::error::Error for OrganizeError {}

// #endregion
////////////////////////////////////////////////////////////////////////////////
