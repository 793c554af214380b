//! Driven ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the outside world.
//! The `turbogen-adapters` crate provides implementations.

use std::path::Path;

use crate::error::TurbogenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `turbogen_adapters::LocalFilesystem` (production)
/// - `turbogen_adapters::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Creating an existing
    /// directory is not an error.
    fn create_dir_all(&self, path: &Path) -> TurbogenResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> TurbogenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the bundled, read-only template resources.
///
/// Resources are addressed by their resource path (`"service.tmpl"`,
/// `"app/Dockerfile.tmpl"`). Implemented by:
/// - `turbogen_adapters::BuiltinTemplates` (compile-time bundle)
/// - `turbogen_adapters::MemoryTemplates` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateProvider: Send + Sync {
    /// Read a template's raw content by resource path.
    fn read(&self, resource: &str) -> TurbogenResult<String>;
}
