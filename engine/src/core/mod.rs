//! Core business logic modules
//!
//! This module contains pure logic with no I/O dependencies beyond the
//! one-shot catalog load. Given the same inputs and the same choice source,
//! every function returns the same output.

pub mod catalog;
pub mod classifier;
pub mod dialogue;
pub mod phrases;
pub mod preview;
pub mod quick_actions;
pub mod resolver;

pub use catalog::TemplateCatalog;
pub use classifier::classify;
pub use dialogue::{DialogueController, Turn};
pub use preview::{Preview, Previewer};
pub use quick_actions::QuickAction;
pub use resolver::{RenderedDocument, TemplateResolver, render};
