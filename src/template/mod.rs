// ABOUTME: Template engine module for the page builder
// ABOUTME: Provides page contexts, helper functions and Handlebars rendering

pub mod context;
pub mod engine;
pub mod error;
pub mod helpers;

pub use context::{PageContext, SiteInfo, SystemInfo};
pub use engine::TemplateEngine;
pub use error::{Result, TemplateError};
pub use helpers::{PageHelpers, StandardHelpers};
