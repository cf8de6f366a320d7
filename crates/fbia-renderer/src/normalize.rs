use fbia_common::{Block, EmbedBlock};

use crate::presentation::presentation_defaults;

/// Resolve presentation attributes for every top-level embed.
///
/// Returns a new article the same length as `blocks`. Embeds whose kind has
/// table defaults get them, unless the block already carries explicit
/// `figure_props`, which always win. Everything else is copied as is.
pub fn normalize_blocks(blocks: &[Option<Block>]) -> Vec<Option<Block>> {
    blocks
        .iter()
        .map(|block| match block {
            Some(Block::Embed(embed)) => Some(Block::Embed(normalize_embed(embed))),
            other => other.clone(),
        })
        .collect()
}

/// Overlay an embed's own fields on its kind's defaults.
pub fn normalize_embed(embed: &EmbedBlock) -> EmbedBlock {
    let Some(defaults) = presentation_defaults(embed.kind()) else {
        return embed.clone();
    };
    let mut normalized = embed.clone();
    if normalized.figure_props.is_none() {
        tracing::debug!(embed_type = %embed.kind(), "applying presentation defaults");
        normalized.figure_props = Some(defaults);
    }
    normalized
}
