//! Conversation engine for the guided website builder
//!
//! This library holds the pure core of the builder: a finite-state dialogue
//! controller that classifies free text into a business category and walks a
//! session through fixed steps, and a template resolver that picks and
//! parametrizes a website template for preview. Every operation is a pure
//! function of its inputs plus the read-only catalog; randomness comes in
//! through an injected [`ChoiceSource`].

pub mod core;
pub mod error;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use core::{
    DialogueController, Preview, Previewer, QuickAction, RenderedDocument, TemplateCatalog,
    TemplateResolver, Turn, classify,
};
pub use error::{EngineError, EngineResult};
pub use services::RngChoiceSource;
pub use traits::ChoiceSource;
