//! Whole documents through the JSON entry point.

use fbia_renderer::from_json;

fn render(json: &str) -> String {
    match from_json(json) {
        Ok(html) => html,
        Err(err) => panic!("fixture failed to parse: {err:?}"),
    }
}

#[test]
fn test_blocks() {
    let html = render(
        r#"[{
            "type": "paragraph",
            "children": [
                { "type": "text", "href": "http://mic.com", "content": "link" },
                { "type": "linebreak" },
                { "type": "text", "content": "normal text" },
                { "type": "text", "bold": true, "content": "bold text" },
                { "type": "text", "italic": true, "content": "italic text" }
            ]
        }, {
            "type": "paragraph",
            "children": [{ "type": "text", "content": "other text" }]
        }, {
            "type": "header3",
            "children": [{ "type": "text", "content": "header text" }]
        }]"#,
    );
    assert_eq!(
        html,
        r#"<article><p><a href="http://mic.com">link</a><br/>normal text<b>bold text</b><i>italic text</i></p><p>other text</p><h3>header text</h3></article>"#
    );
}

#[test]
fn test_headers() {
    let html = render(
        r#"[
            { "type": "header1", "children": [{ "type": "text", "content": "header1" }] },
            { "type": "header2", "children": [{ "type": "text", "content": "header2" }] },
            { "type": "header3", "children": [{ "type": "text", "content": "header3" }] },
            { "type": "header4", "children": [{ "type": "text", "content": "header4" }] },
            { "type": "header5", "children": [{ "type": "text", "content": "header5" }] },
            { "type": "header6", "children": [{ "type": "text", "content": "header6" }] }
        ]"#,
    );
    assert_eq!(
        html,
        "<article><h1>header1</h1><h2>header2</h2><h3>header3</h3><h4>header4</h4><h5>header5</h5><h6>header6</h6></article>"
    );
}

#[test]
fn test_null_blocks_render_nothing() {
    let html = render(
        r#"[null, { "type": "paragraph", "children": [{ "type": "text", "content": "x" }] }, null]"#,
    );
    assert_eq!(html, "<article><p>x</p></article>");
}

#[test]
fn test_image() {
    let html = render(
        r#"[{
            "type": "embed",
            "embedType": "image",
            "src": "http://example.com/image.jpg",
            "width": 600,
            "height": 200
        }]"#,
    );
    insta::assert_snapshot!(html, @r#"<article><figure data-feedback="fb:likes,fb:comments"><img src="http://example.com/image.jpg"></img></figure></article>"#);
}

#[test]
fn test_image_with_caption() {
    let html = render(
        r#"[{
            "type": "embed",
            "embedType": "image",
            "src": "http://example.com/image.jpg",
            "width": 600,
            "height": 200,
            "caption": [{
                "type": "text",
                "content": "Source: ",
                "href": null,
                "italic": false,
                "bold": false
            }, {
                "type": "text",
                "content": "Author",
                "href": "http://example.com/author",
                "italic": false,
                "bold": false
            }]
        }]"#,
    );
    insta::assert_snapshot!(html, @r#"<article><figure data-feedback="fb:likes,fb:comments"><img src="http://example.com/image.jpg"></img><figcaption><cite>Source: <a href="http://example.com/author">Author</a></cite></figcaption></figure></article>"#);
}

#[test]
fn test_video() {
    let html = render(
        r#"[{
            "type": "embed",
            "embedType": "video",
            "sources": [{ "src": "http://example.com/video.mp4" }],
            "width": 600,
            "height": 200
        }]"#,
    );
    insta::assert_snapshot!(html, @r#"<article><figure data-feedback="fb:likes,fb:comments"><video width="600" height="200"><source src="http://example.com/video.mp4"></source></video></figure></article>"#);
}

#[test]
fn test_video_with_explicit_bare_figure() {
    let html = render(
        r#"[{
            "type": "embed",
            "embedType": "video",
            "sources": [{ "src": "http://example.com/video.mp4" }],
            "width": 600,
            "height": 200,
            "figureProps": {}
        }]"#,
    );
    assert!(html.starts_with("<article><figure><video"), "{html}");
}

#[test]
fn test_youtube() {
    let html = render(r#"[{ "type": "embed", "embedType": "youtube", "youtubeId": "abc" }]"#);
    insta::assert_snapshot!(html, @r#"<article><figure data-feedback="fb:likes,fb:comments" class="op-interactive"><iframe src="https://www.youtube.com/embed/abc" width="640" height="360" frameborder="0" allowfullscreen="true"></iframe></figure></article>"#);
}

#[test]
fn test_twitter() {
    let html = render(
        r#"[{
            "type": "embed",
            "embedType": "twitter",
            "embedAs": "tweet",
            "text": [
                { "content": "GIF vs. JIF… This ", "href": null },
                { "content": "pic.twitter.com/qFAHWgdbL6", "href": "https://t.co/qFAHWgdbL6" }
            ],
            "url": "https://twitter.com/MattNavarra/status/684690494841028608",
            "date": "January 6, 2016",
            "user": { "slug": "MattNavarra", "name": "Matt (foo) Navarra" },
            "id": "684690494841028608"
        }]"#,
    );
    insta::assert_snapshot!(html, @r#"<article><figure class="op-interactive"><iframe><blockquote class="twitter-tweet" data-lang="en"><p lang="en" dir="ltr">GIF vs. JIF… This <a href="https://t.co/qFAHWgdbL6">pic.twitter.com/qFAHWgdbL6</a></p>&mdash; Matt (foo) Navarra (@MattNavarra) <a href="https://twitter.com/MattNavarra/status/684690494841028608">January 6, 2016</a></blockquote><script async="true" src="//platform.twitter.com/widgets.js" charset="utf-8"></script></iframe></figure></article>"#);
}

#[test]
fn test_vine() {
    let html = render(
        r#"[{ "type": "embed", "embedType": "vine", "url": "https://vine.co/v/bjHh0zHdgZT/embed/simple" }]"#,
    );
    insta::assert_snapshot!(html, @r#"<article><figure data-feedback="fb:likes,fb:comments" class="op-interactive"><iframe src="https://vine.co/v/bjHh0zHdgZT/embed/simple" width="480" height="480" frameborder="0"></iframe></figure></article>"#);
}

fn spotify(height: u32) -> String {
    render(&format!(
        r#"[{{
            "type": "embed",
            "embedType": "spotify",
            "url": "https://embed.spotify.com/?uri=spotify:user:spotify:playlist:3rgsDhGHZxZ9sB9DQWQfuf",
            "spotifyUri": "spotify:user:spotify:playlist:3rgsDhGHZxZ9sB9DQWQfuf",
            "width": 400,
            "height": {height}
        }}]"#
    ))
}

#[test]
fn test_spotify_small() {
    insta::assert_snapshot!(spotify(80), @r#"<article><figure class="op-interactive"><iframe src="https://embed.spotify.com/?uri=spotify:user:spotify:playlist:3rgsDhGHZxZ9sB9DQWQfuf" width="300" height="80" frameborder="0"></iframe></figure></article>"#);
}

#[test]
fn test_spotify_large() {
    insta::assert_snapshot!(spotify(300), @r#"<article><figure class="op-interactive"><iframe src="https://embed.spotify.com/?uri=spotify:user:spotify:playlist:3rgsDhGHZxZ9sB9DQWQfuf" width="300" height="380" frameborder="0"></iframe></figure></article>"#);
}

#[test]
fn test_instagram() {
    let html = render(
        r#"[{
            "type": "embed",
            "embedType": "instagram",
            "url": "https://www.instagram.com/p/BfLwpWoHfUo",
            "date": "February 14, 2018",
            "user": { "slug": "barackobama", "name": "Barack Obama" }
        }]"#,
    );
    insta::assert_snapshot!(html, @r#"<article><figure data-feedback="fb:likes,fb:comments" class="op-interactive"><iframe><blockquote class="instagram-media" data-instgrm-permalink="https://www.instagram.com/p/BfLwpWoHfUo" data-instgrm-version="8"><div><p><a href="https://www.instagram.com/p/BfLwpWoHfUo" target="_blank">A post shared by Barack Obama (@barackobama)</a> on <time>February 14, 2018</time></p></div></blockquote><script async="true" defer="true" src="//www.instagram.com/embed.js"></script></iframe></figure></article>"#);
}

#[test]
fn test_blockquote() {
    let html = render(
        r#"[{
            "type": "blockquote",
            "children": [{
                "type": "paragraph",
                "children": [{ "type": "text", "content": "abc" }]
            }, {
                "type": "paragraph",
                "children": [{ "type": "text", "content": "def", "bold": true }]
            }]
        }]"#,
    );
    assert_eq!(
        html,
        "<article><blockquote><p>abc</p><p><b>def</b></p></blockquote></article>"
    );
}

#[test]
fn test_tumblr() {
    let html = render(
        r#"[{
            "caption": [],
            "type": "embed",
            "embedType": "tumblr",
            "did": "7c08ba46cb75162284770cdee2a59365891a5e18",
            "url": "https://embed.tumblr.com/embed/post/8_SX4ALNOf1fYyEcjq78YQ/147291233392",
            "text": [{
                "content": "http://jencita.tumblr.com/post/147291233392/tswiftdaily-taylor-swift-at-lady-cilento",
                "href": "http://jencita.tumblr.com/post/147291233392/tswiftdaily-taylor-swift-at-lady-cilento"
            }]
        }]"#,
    );
    insta::assert_snapshot!(html, @r#"<article><figure class="op-interactive"><iframe><div class="tumblr-post" data-href="https://embed.tumblr.com/embed/post/8_SX4ALNOf1fYyEcjq78YQ/147291233392" data-did="7c08ba46cb75162284770cdee2a59365891a5e18"><a href="http://jencita.tumblr.com/post/147291233392/tswiftdaily-taylor-swift-at-lady-cilento">http://jencita.tumblr.com/post/147291233392/tswiftdaily-taylor-swift-at-lady-cilento</a></div><script async="true" src="https://secure.assets.tumblr.com/post.js"></script></iframe></figure></article>"#);
}

#[test]
fn test_custom_secure_iframe() {
    let html = render(
        r#"[{
            "type": "embed",
            "embedType": "custom",
            "src": "https://example.com/frame",
            "width": 600,
            "height": 200,
            "secure": true,
            "caption": []
        }]"#,
    );
    assert_eq!(
        html,
        r#"<article><figure><iframe src="https://example.com/frame" width="600" height="200" frameborder="0"></iframe></figure></article>"#
    );
}

#[test]
fn test_custom_insecure_iframe() {
    let html = render(
        r#"[{
            "type": "embed",
            "embedType": "custom",
            "src": "http://example.com/frame",
            "width": 600,
            "height": 200,
            "secure": false,
            "caption": []
        }]"#,
    );
    assert_eq!(html, "<article><figure></figure></article>");
}

#[test]
fn test_custom_without_secure_flag_is_dropped() {
    let html = render(
        r#"[{ "type": "embed", "embedType": "custom", "src": "https://example.com/frame" }]"#,
    );
    assert_eq!(html, "<article><figure></figure></article>");
}

#[test]
fn test_facebook_has_no_defaults() {
    let html = render(
        r#"[{ "type": "embed", "embedType": "facebook", "url": "https://www.facebook.com/mic/posts/1" }]"#,
    );
    assert!(html.starts_with("<article><figure><iframe><div class=\"fb-post\""), "{html}");
    assert!(html.contains("sdk.js#xfbml=1&amp;version=v3.0"), "{html}");
}

#[test]
fn test_unknown_embed_type_is_a_parse_error() {
    let err = from_json(r#"[{ "type": "embed", "embedType": "myspace" }]"#).unwrap_err();
    assert_eq!(err.line_col().0, 1);
    assert!(err.to_string().contains("myspace"), "{err}");
}

#[test]
fn test_runs_without_type_decode_as_text() {
    let html = render(
        r#"[{"type":"paragraph","children":[{"content":"a","href":"http://x"},{"content":"b"}]}]"#,
    );
    assert_eq!(html, r#"<article><p><a href="http://x">a</a>b</p></article>"#);
}

#[test]
fn test_caption_with_linebreak() {
    let html = render(
        r#"[{
            "type": "embed",
            "embedType": "image",
            "src": "http://example.com/image.jpg",
            "caption": [
                { "type": "text", "content": "a" },
                { "type": "linebreak" },
                { "type": "text", "content": "b" }
            ]
        }]"#,
    );
    insta::assert_snapshot!(html, @r#"<article><figure data-feedback="fb:likes,fb:comments"><img src="http://example.com/image.jpg"></img><figcaption><cite>a<br/>b</cite></figcaption></figure></article>"#);
}

#[test]
fn test_fractional_dimensions_round_up() {
    let html = render(
        r#"[{
            "type": "embed",
            "embedType": "video",
            "sources": [{ "src": "http://example.com/video.mp4" }],
            "width": 600.5,
            "height": 200.0
        }]"#,
    );
    assert!(html.contains(r#"<video width="601" height="200">"#), "{html}");
}

#[test]
fn test_fractional_spotify_height_is_full_size() {
    let html = render(
        r#"[{ "type": "embed", "embedType": "spotify", "url": "https://embed.spotify.com/?uri=x", "height": 80.5 }]"#,
    );
    assert!(html.contains(r#"width="300" height="380""#), "{html}");
}

#[test]
fn test_bad_child_type_points_at_the_child() {
    let err = from_json(
        r#"[{
            "type": "paragraph",
            "children": [
                { "type": "text", "content": "fine" },
                { "type": "txt", "content": "typo" }
            ]
        }]"#,
    )
    .unwrap_err();
    assert_eq!(err.line_col().0, 5);
    assert!(err.to_string().contains("unknown variant `txt`"), "{err}");
}
