//! Reusable reply templates
//!
//! Stored per-user templates whose bodies may carry `{placeholder}` tokens,
//! filled in at processing time from a caller-supplied variable map.

pub mod manager;
pub mod renderer;
pub mod types;

pub use manager::TemplateManager;
pub use renderer::TemplateRenderer;
pub use types::{CreateTemplateRequest, Template, UpdateTemplateRequest};
