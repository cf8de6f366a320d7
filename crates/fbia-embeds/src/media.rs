//! Players and plain media.

use fbia_common::article::VideoSource;
use fbia_common::{Element, Node};
use smol_str::{ToSmolStr, format_smolstr};

const PLAYER_WIDTH: u32 = 640;
const PLAYER_HEIGHT: u32 = 360;

const GIPHY_WIDTH: u32 = 480;
const GIPHY_HEIGHT: u32 = 270;

/// A borderless iframe pointing at `src`.
pub fn iframe(src: &str, width: Option<u32>, height: Option<u32>) -> Element {
    Element::new("iframe")
        .attr("src", src)
        .attr_opt("width", width.map(|w| w.to_smolstr()))
        .attr_opt("height", height.map(|h| h.to_smolstr()))
        .attr("frameborder", "0")
}

fn player(src: &str, width: u32, height: u32) -> Node {
    iframe(src, Some(width), Some(height))
        .attr("allowfullscreen", "true")
        .into()
}

pub fn youtube(youtube_id: &str) -> Node {
    player(
        &format_smolstr!("https://www.youtube.com/embed/{youtube_id}"),
        PLAYER_WIDTH,
        PLAYER_HEIGHT,
    )
}

pub fn giphy(id: &str) -> Node {
    player(
        &format_smolstr!("https://giphy.com/embed/{id}"),
        GIPHY_WIDTH,
        GIPHY_HEIGHT,
    )
}

pub fn vimeo(id: &str) -> Node {
    player(
        &format_smolstr!("https://player.vimeo.com/video/{id}"),
        PLAYER_WIDTH,
        PLAYER_HEIGHT,
    )
}

/// Vine players are square.
pub fn vine(url: &str, size: u32) -> Node {
    iframe(url, Some(size), Some(size)).into()
}

pub fn image(src: &str) -> Node {
    Element::new("img").attr("src", src).into()
}

pub fn video(sources: &[VideoSource], width: Option<u32>, height: Option<u32>) -> Node {
    let sources = sources.iter().map(|source| {
        Node::from(
            Element::new("source")
                .attr("src", source.src.as_str())
                .attr_opt("type", source.mime_type.as_deref()),
        )
    });
    Element::new("video")
        .attr_opt("width", width.map(|w| w.to_smolstr()))
        .attr_opt("height", height.map(|h| h.to_smolstr()))
        .children(sources)
        .into()
}

pub fn custom(src: &str, width: Option<u32>, height: Option<u32>) -> Node {
    iframe(src, width, height).into()
}
