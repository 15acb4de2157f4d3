//! classwright core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the classwright
//! class generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         classwright-cli (CLI)           │
//! │  (Drives GenerateService, Notifier impl) │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (GenerateService)            │
//! │      validate → dirs → render → write   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Store, Filesystem, Render, Notifier)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   classwright-adapters (Infrastructure) │
//! │ (DiskTemplateStore, LocalFilesystem...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ArgumentSet, PathResolver, RenderCtx)  │
//! │               No I/O                    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use classwright_core::prelude::*;
//!
//! let service = GenerateService::new(store, renderer, filesystem, notifier, options);
//! let report = service.generate(RawArguments {
//!     name: Some("Widget".into()),
//!     path: Some("./".into()),
//!     root_namespace: Some("App".into()),
//!     sub_namespace: Some("Sub\\Ns".into()),
//!     base_test_name: Some("AppTest".into()),
//! })?;
//! println!("{}", report.summary());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateService, GenerationOptions, GenerationReport, GenerationStage,
        ports::{Filesystem, Notifier, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        ArgumentSet, Flag, GeneratedFileSpec, PathResolver, RawArguments, RenderContext,
        TemplateCatalog, TemplateDescriptor, TemplateKind,
    };
    pub use crate::error::{ClasswrightError, ClasswrightResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
