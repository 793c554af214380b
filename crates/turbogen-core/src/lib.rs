//! Turbogen Core - domain and application layers.
//!
//! This crate provides the entity model and generation logic for the
//! turbogen monorepo scaffolding tool, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          turbogen-cli (CLI)             │
//! │        (dispatcher + presentation)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          GeneratorService               │
//! │     (orchestrates one CreateEntity)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Filesystem, TemplateProvider)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    turbogen-adapters (Infrastructure)   │
//! │ (LocalFilesystem, BuiltinTemplates, ..) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │  (EntityKind, EntityData, layout rules) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use turbogen_core::{application::GeneratorService, domain::EntityKind};
//!
//! # fn demo(filesystem: Box<dyn turbogen_core::application::ports::Filesystem>,
//! #         templates: Box<dyn turbogen_core::application::ports::TemplateProvider>)
//! #         -> turbogen_core::error::TurbogenResult<()> {
//! let service = GeneratorService::new(filesystem, templates);
//! let report =
//!     service.create_entity(EntityKind::Service, "checkout", Path::new("/repo/apps/orders"))?;
//! println!("created {} file(s)", report.files.len());
//! # Ok(())
//! # }
//! ```

// Domain layer (stable, well-defined API)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Unified error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GeneratorService, validate_workspace_context,
        ports::{Filesystem, TemplateProvider},
    };
    pub use crate::domain::{
        ENTITY_KINDS, EntityData, EntityKind, EntityKindInfo, ScaffoldReport, validate_entity_name,
    };
    pub use crate::error::{TurbogenError, TurbogenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
