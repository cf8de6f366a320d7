//! Embed bodies for Instant Articles.
//!
//! Projects each embed's fields into an [`EmbedRequest`] for the generator
//! crate, then applies the wrapping the platform needs:
//!
//! - media players and plain media go out as generated
//! - social posts are placed in an `<iframe>` next to their platform script
//! - spotify is sized here without the generator
//! - custom embeds render only when marked secure

use fbia_common::article::{
    CustomEmbed, FacebookEmbed, GiphyEmbed, ImageEmbed, InstagramEmbed, SpotifyEmbed, TumblrEmbed,
    TwitterEmbed, VideoEmbed, VimeoEmbed, VineEmbed, YoutubeEmbed,
};
use fbia_common::{Element, Embed, Node};
use fbia_embeds::{EmbedRequest, render};
use smol_str::ToSmolStr;

use crate::composer::EmbedRenderer;

/// Vine players are square at this size.
pub const VINE_SIZE: u32 = 480;

pub const SPOTIFY_WIDTH: u32 = 300;
/// Players up to this height use the compact layout.
pub const SPOTIFY_COMPACT_HEIGHT: u32 = 80;
pub const SPOTIFY_FULL_HEIGHT: u32 = 380;

/// A platform script tag that hydrates a social embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptInclude {
    pub src: &'static str,
    pub async_load: bool,
    pub defer: bool,
    pub charset: Option<&'static str>,
}

pub const FACEBOOK_SDK: ScriptInclude = ScriptInclude {
    src: "https://connect.facebook.net/en_US/sdk.js#xfbml=1&version=v3.0",
    async_load: true,
    defer: true,
    charset: None,
};

pub const TWITTER_WIDGETS: ScriptInclude = ScriptInclude {
    src: "//platform.twitter.com/widgets.js",
    async_load: true,
    defer: false,
    charset: Some("utf-8"),
};

pub const INSTAGRAM_EMBED: ScriptInclude = ScriptInclude {
    src: "//www.instagram.com/embed.js",
    async_load: true,
    defer: true,
    charset: None,
};

pub const TUMBLR_POST: ScriptInclude = ScriptInclude {
    src: "https://secure.assets.tumblr.com/post.js",
    async_load: true,
    defer: false,
    charset: None,
};

impl ScriptInclude {
    pub fn to_element(&self) -> Element {
        Element::new("script")
            .attr_opt("async", self.async_load.then_some("true"))
            .attr_opt("defer", self.defer.then_some("true"))
            .attr("src", self.src)
            .attr_opt("charset", self.charset)
    }
}

/// `<iframe>{body}<script …></script></iframe>`
pub fn wrap_with_script(body: Node, script: &ScriptInclude) -> Node {
    Element::new("iframe")
        .child(body)
        .child(script.to_element())
        .into()
}

/// Spotify player height: compact for short players, full otherwise
/// (including when no height was given).
pub fn spotify_height(height: Option<u32>) -> u32 {
    match height {
        Some(height) if height <= SPOTIFY_COMPACT_HEIGHT => SPOTIFY_COMPACT_HEIGHT,
        _ => SPOTIFY_FULL_HEIGHT,
    }
}

pub fn render_spotify(player: &SpotifyEmbed) -> Node {
    Element::new("iframe")
        .attr("src", player.url.as_str())
        .attr("width", SPOTIFY_WIDTH.to_smolstr())
        .attr("height", spotify_height(player.height).to_smolstr())
        .attr("frameborder", "0")
        .into()
}

pub fn render_custom(frame: &CustomEmbed) -> Node {
    if !frame.is_secure() {
        tracing::debug!(src = %frame.src, "skipping insecure custom embed");
        return Node::empty();
    }
    render(&EmbedRequest::Custom {
        src: &frame.src,
        width: frame.width,
        height: frame.height,
    })
}

/// Body markup for any embed.
pub fn render_embed(embed: &Embed) -> Node {
    tracing::trace!(embed_type = %embed.kind(), "rendering embed");
    match embed {
        Embed::Youtube(YoutubeEmbed { youtube_id }) => {
            render(&EmbedRequest::Youtube { youtube_id })
        }
        Embed::Giphy(GiphyEmbed { id }) => render(&EmbedRequest::Giphy { id }),
        Embed::Vimeo(VimeoEmbed { id }) => render(&EmbedRequest::Vimeo { id }),
        Embed::Image(ImageEmbed { src, .. }) => render(&EmbedRequest::Image { src }),
        Embed::Video(VideoEmbed {
            sources,
            width,
            height,
        }) => render(&EmbedRequest::Video {
            sources,
            width: *width,
            height: *height,
        }),
        Embed::Vine(VineEmbed { url }) => render(&EmbedRequest::Vine {
            url,
            size: VINE_SIZE,
        }),
        Embed::Facebook(post) => wrap_with_script(render_facebook(post), &FACEBOOK_SDK),
        Embed::Twitter(tweet) => wrap_with_script(render_twitter(tweet), &TWITTER_WIDGETS),
        Embed::Instagram(post) => wrap_with_script(render_instagram(post), &INSTAGRAM_EMBED),
        Embed::Tumblr(post) => wrap_with_script(render_tumblr(post), &TUMBLR_POST),
        Embed::Spotify(player) => render_spotify(player),
        Embed::Custom(frame) => render_custom(frame),
    }
}

fn render_facebook(post: &FacebookEmbed) -> Node {
    render(&EmbedRequest::Facebook {
        url: &post.url,
        user: post.user.as_ref(),
        text: post.text.as_deref(),
        headline: post.headline.as_deref(),
        date: post.date.as_deref(),
    })
}

fn render_twitter(tweet: &TwitterEmbed) -> Node {
    render(&EmbedRequest::Twitter {
        embed_as: tweet.embed_as,
        text: tweet.text.as_deref(),
        url: &tweet.url,
        date: tweet.date.as_deref(),
        user: tweet.user.as_ref(),
        id: tweet.id.as_deref(),
    })
}

fn render_instagram(post: &InstagramEmbed) -> Node {
    render(&EmbedRequest::Instagram {
        url: &post.url,
        text: post.text.as_deref(),
        user: post.user.as_ref(),
        date: post.date.as_deref(),
    })
}

fn render_tumblr(post: &TumblrEmbed) -> Node {
    render(&EmbedRequest::Tumblr {
        did: &post.did,
        url: &post.url,
        text: post.text.as_deref(),
    })
}

/// The Instant Articles embed set.
///
/// Captions are cited: `<figcaption><cite>…</cite></figcaption>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FbiaEmbeds;

impl EmbedRenderer for FbiaEmbeds {
    fn render_embed(&self, embed: &Embed) -> Node {
        render_embed(embed)
    }

    fn render_caption(&self, caption: Vec<Node>) -> Node {
        Element::new("figcaption")
            .child(Element::new("cite").children(caption))
            .into()
    }
}
