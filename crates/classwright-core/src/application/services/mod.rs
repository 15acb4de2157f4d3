//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a class".

pub mod generate_service;
pub mod report;

pub use generate_service::{GenerateService, GenerationOptions};
pub use report::{FailedTarget, GenerationReport, GenerationStage};
