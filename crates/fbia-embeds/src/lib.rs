//! Markup generators for third-party embeds.
//!
//! Each generator takes the handful of fields its platform needs (an
//! [`EmbedRequest`]) and returns the platform's embed body as a markup
//! [`Node`]. Generators know nothing about figures, captions or script
//! includes; the article renderer decides how a body gets wrapped.
//!
//! # Generators
//!
//! - [`media`]: players and plain media (`youtube`, `giphy`, `vimeo`,
//!   `vine`, `image`, `video`, `custom`)
//! - [`social`]: post embeds that rely on a platform script to hydrate
//!   (`facebook`, `twitter`, `instagram`, `tumblr`)

use fbia_common::Node;
use fbia_common::article::{TextRun, TweetKind, User, VideoSource};

pub mod media;
pub mod social;

/// The field projection handed to a generator, tagged by platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedRequest<'a> {
    Youtube {
        youtube_id: &'a str,
    },
    Giphy {
        id: &'a str,
    },
    Vimeo {
        id: &'a str,
    },
    Image {
        src: &'a str,
    },
    Video {
        sources: &'a [VideoSource],
        width: Option<u32>,
        height: Option<u32>,
    },
    Vine {
        url: &'a str,
        size: u32,
    },
    Facebook {
        url: &'a str,
        user: Option<&'a User>,
        text: Option<&'a [TextRun]>,
        headline: Option<&'a str>,
        date: Option<&'a str>,
    },
    Twitter {
        embed_as: Option<TweetKind>,
        text: Option<&'a [TextRun]>,
        url: &'a str,
        date: Option<&'a str>,
        user: Option<&'a User>,
        id: Option<&'a str>,
    },
    Instagram {
        url: &'a str,
        text: Option<&'a str>,
        user: Option<&'a User>,
        date: Option<&'a str>,
    },
    Tumblr {
        did: &'a str,
        url: &'a str,
        text: Option<&'a [TextRun]>,
    },
    Custom {
        src: &'a str,
        width: Option<u32>,
        height: Option<u32>,
    },
}

impl EmbedRequest<'_> {
    /// The platform name, matching the article's `embedType`.
    pub fn kind(&self) -> &'static str {
        match self {
            EmbedRequest::Youtube { .. } => "youtube",
            EmbedRequest::Giphy { .. } => "giphy",
            EmbedRequest::Vimeo { .. } => "vimeo",
            EmbedRequest::Image { .. } => "image",
            EmbedRequest::Video { .. } => "video",
            EmbedRequest::Vine { .. } => "vine",
            EmbedRequest::Facebook { .. } => "facebook",
            EmbedRequest::Twitter { .. } => "twitter",
            EmbedRequest::Instagram { .. } => "instagram",
            EmbedRequest::Tumblr { .. } => "tumblr",
            EmbedRequest::Custom { .. } => "custom",
        }
    }
}

/// Generate the embed body for a request.
pub fn render(request: &EmbedRequest<'_>) -> Node {
    tracing::trace!(kind = request.kind(), "generating embed markup");
    match *request {
        EmbedRequest::Youtube { youtube_id } => media::youtube(youtube_id),
        EmbedRequest::Giphy { id } => media::giphy(id),
        EmbedRequest::Vimeo { id } => media::vimeo(id),
        EmbedRequest::Image { src } => media::image(src),
        EmbedRequest::Video {
            sources,
            width,
            height,
        } => media::video(sources, width, height),
        EmbedRequest::Vine { url, size } => media::vine(url, size),
        EmbedRequest::Custom { src, width, height } => media::custom(src, width, height),
        EmbedRequest::Facebook {
            url,
            user,
            text,
            headline,
            date,
        } => social::facebook(url, user, text, headline, date),
        EmbedRequest::Twitter {
            embed_as,
            text,
            url,
            date,
            user,
            id,
        } => social::twitter(embed_as.unwrap_or_default(), text, url, date, user, id),
        EmbedRequest::Instagram {
            url,
            text,
            user,
            date,
        } => social::instagram(url, text, user, date),
        EmbedRequest::Tumblr { did, url, text } => social::tumblr(did, url, text),
    }
}
