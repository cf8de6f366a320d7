//! Default `<figure>` attributes per embed kind.

use fbia_common::{EmbedKind, FigureProps};

/// Marks a figure for likes and comments.
pub const FEEDBACK: &str = "fb:likes,fb:comments";
/// Marks a figure whose content the reader can interact with.
pub const INTERACTIVE: &str = "op-interactive";

/// Presentation defaults for an embed kind.
///
/// `None` for kinds without defaults; normalization leaves those blocks
/// untouched.
pub fn presentation_defaults(kind: EmbedKind) -> Option<FigureProps> {
    let props = match kind {
        EmbedKind::Youtube
        | EmbedKind::Giphy
        | EmbedKind::Vimeo
        | EmbedKind::Vine
        | EmbedKind::Instagram => FigureProps::new(Some(FEEDBACK), Some(INTERACTIVE)),
        EmbedKind::Image | EmbedKind::Video => FigureProps::new(Some(FEEDBACK), None),
        EmbedKind::Spotify | EmbedKind::Twitter | EmbedKind::Tumblr => {
            FigureProps::new(None, Some(INTERACTIVE))
        }
        EmbedKind::Facebook | EmbedKind::Custom => return None,
    };
    Some(props)
}
