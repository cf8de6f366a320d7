//! Facebook Instant Articles renderer.
//!
//! Turns an article (an ordered list of blocks, `None` entries allowed) into
//! one `<article>` markup string in two passes:
//!
//! 1. [`normalize`] resolves every embed's `<figure>` attributes from the
//!    [`presentation`] table, keeping explicit `figureProps`.
//! 2. The [`composer`] walks the blocks, handing each embed to
//!    [`FbiaEmbeds`] for its body.
//!
//! The tree is then serialized and its line breaks repaired.
//!
//! ```
//! let html = fbia_renderer::from_json(
//!     r#"[{"type":"paragraph","children":[{"type":"text","content":"hi"}]}]"#,
//! )
//! .unwrap();
//! assert_eq!(html, "<article><p>hi</p></article>");
//! ```

pub mod composer;
pub mod embed_renderer;
pub mod normalize;
pub mod presentation;
pub mod serialize;

use fbia_common::config::Config;
use fbia_common::{Block, Node, ParseError};

pub use crate::composer::{ArticleComposer, EmbedRenderer};
pub use crate::embed_renderer::FbiaEmbeds;
pub use crate::normalize::normalize_blocks;
pub use crate::presentation::presentation_defaults;

/// Knobs for the final string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Rewrite `<br></br>` as `<br/>` after serializing.
    pub repair_line_breaks: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            repair_line_breaks: true,
        }
    }
}

impl From<&Config> for RenderOptions {
    fn from(config: &Config) -> Self {
        Self {
            repair_line_breaks: config.repair_line_breaks,
        }
    }
}

/// Render an article with default options.
pub fn to_fbia(blocks: &[Option<Block>]) -> String {
    to_fbia_with(blocks, &RenderOptions::default())
}

pub fn to_fbia_with(blocks: &[Option<Block>], options: &RenderOptions) -> String {
    let _span = tracing::debug_span!("to_fbia", blocks = blocks.len()).entered();
    let html = serialize::serialize(&render_tree(blocks), options);
    tracing::debug!(bytes = html.len(), "rendered article");
    html
}

/// Normalize and compose, stopping short of serialization.
pub fn render_tree(blocks: &[Option<Block>]) -> Node {
    let normalized = normalize_blocks(blocks);
    ArticleComposer::new(&FbiaEmbeds).compose(&normalized)
}

/// Decode an article from JSON and render it.
pub fn from_json(input: &str) -> Result<String, ParseError> {
    let article = fbia_common::article::from_json(input)?;
    Ok(to_fbia(&article))
}
