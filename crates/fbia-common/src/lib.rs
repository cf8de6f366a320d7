//! Shared pieces of the fbia workspace.
//!
//! The article document model, the markup tree renderers build and
//! serialize, plus errors, configuration and (optionally) telemetry.

pub mod article;
pub mod config;
pub mod error;
pub mod markup;
#[cfg(feature = "telemetry")]
pub mod telemetry;

pub use crate::article::{Block, Embed, EmbedBlock, EmbedKind, FigureProps, TextRun};
pub use crate::error::{ConfigError, FbiaError, ParseError};
pub use crate::markup::{Element, Node};
pub use smol_str::SmolStr;
