// ABOUTME: Integration tests for the full bootstrapify content pipeline.
// ABOUTME: Covers pass ordering, exclusions, pass-through and the embed dimension stripper.

use bootstrapify_content::{strip_embed_dimensions, transform, Bootstrapify, Pass};
use pretty_assertions::assert_eq;

const BQ: &str = "blockquote border-start p-4 bg-light";
const HEADING: &str = "flex-fill border-bottom pb-2 mt-5 mb-3";

#[test]
fn transforms_a_typical_post() {
    let input = concat!(
        "<h2 id=\"intro\">Intro</h2>\n",
        "<p>Text with <img src=\"a.jpg\" alt=\"A\"></p>\n",
        "<blockquote>Quote</blockquote>\n",
        "<blockquote class=\"twitter-tweet\"><p>t</p></blockquote>\n",
        "<figure class=\"wp-block-embed\"><iframe src=\"https://www.youtube.com/embed/abc\"></iframe></figure>",
    );

    let expected = format!(
        concat!(
            "<h2 class=\"{heading}\" id=\"intro\">Intro</h2>\n",
            "<p>Text with <img src=\"a.jpg\" alt=\"A\" class=\"w-100 img-fluid\"></p>\n",
            "<figure><blockquote class=\"{bq}\">Quote</blockquote></figure>\n",
            "<blockquote class=\"twitter-tweet\"><p>t</p></blockquote>\n",
            "<figure class=\"wp-block-embed\"><div class=\"ratio ratio-16x9\"><iframe src=\"https://www.youtube.com/embed/abc\"></iframe></div></figure>",
        ),
        heading = HEADING,
        bq = BQ,
    );

    assert_eq!(transform(input), expected);
}

#[test]
fn tweet_blockquote_is_byte_identical() {
    let input = r#"<blockquote class="twitter-tweet" data-width="550"><p lang="en" dir="ltr">Hello</p>&mdash; Someone (@someone) <a href="https://twitter.com/x/status/1">June 1, 2021</a></blockquote>"#;
    assert_eq!(transform(input), input);
}

#[test]
fn oembed_fallback_is_byte_identical() {
    let input = "<blockquote class=\"wp-embedded-content\" data-secret=\"s3cr3t\"><a href=\"https://example.org/post/\">A post</a></blockquote>\n<p><iframe class=\"wp-embedded-content\" sandbox=\"allow-scripts\" src=\"https://example.org/post/embed/\" width=\"500\" height=\"282\"></iframe></p>";
    assert_eq!(transform(input), input);
}

#[test]
fn plain_blockquote_gets_figure() {
    assert_eq!(
        transform("<blockquote>Quote text</blockquote>"),
        format!("<figure><blockquote class=\"{}\">Quote text</blockquote></figure>", BQ)
    );
}

#[test]
fn heading_gets_classes() {
    let out = transform("<h2>Title</h2>");
    assert_eq!(out, format!("<h2 class=\"{}\">Title</h2>", HEADING));
}

#[test]
fn image_in_paragraph_and_bare_image() {
    assert_eq!(
        transform(r#"<p><img src="a.jpg"></p>"#),
        r#"<p><img src="a.jpg" class="w-100 img-fluid"></p>"#
    );
    let bare = r#"<img src="a.jpg">"#;
    assert_eq!(transform(bare), bare);
}

#[test]
fn youtube_iframe_wrapped() {
    assert_eq!(
        transform(r#"<iframe src="https://www.youtube.com/embed/x"></iframe>"#),
        r#"<div class="ratio ratio-16x9"><iframe src="https://www.youtube.com/embed/x"></iframe></div>"#
    );
}

#[test]
fn content_without_targets_passes_through() {
    let input = "<p>Plain <strong>text</strong> &amp; more</p>\n<ul>\n  <li>One</li>\n</ul>";
    assert_eq!(transform(input), input);
}

#[test]
fn fresh_input_gives_same_output_every_time() {
    let input = "<blockquote>Q</blockquote><h3>H</h3><div><img src=\"x.png\"></div>";
    assert_eq!(transform(input), transform(input));
}

#[test]
fn pipeline_is_not_idempotent_for_blockquotes() {
    let once = transform("<blockquote>Q</blockquote>");
    let twice = transform(&once);
    assert_eq!(
        twice,
        format!("<figure><figure><blockquote class=\"{}\">Q</blockquote></figure></figure>", BQ)
    );
}

#[test]
fn malformed_markup_does_not_fail() {
    let out = transform("<blockquote>Unclosed <p>para");
    assert_eq!(
        out,
        format!("<figure><blockquote class=\"{}\">Unclosed <p>para</p></blockquote></figure>", BQ)
    );
}

#[test]
fn non_ascii_text_survives_tree_passes() {
    let out = transform("<p>Zoë’s café <img src=\"ü.jpg\"> — 東京</p><blockquote>«Привет»</blockquote>");
    assert!(out.contains("Zoë’s café "));
    assert!(out.contains(" — 東京</p>"));
    assert!(out.contains(">«Привет»</blockquote>"));
    assert!(out.contains("src=\"ü.jpg\""));
}

#[test]
fn untouched_preformatted_text_keeps_leading_blank_line() {
    let out = transform("<blockquote>q</blockquote><pre>\n\nline</pre><textarea>\n\nhi</textarea>");
    assert_eq!(
        out,
        format!(
            "<figure><blockquote class=\"{}\">q</blockquote></figure><pre>\n\nline</pre><textarea>\n\nhi</textarea>",
            BQ
        )
    );
}

#[test]
fn untouched_foreign_attributes_keep_their_prefix() {
    let out = transform(
        r##"<blockquote>q</blockquote><svg><use xlink:href="#icon"></use></svg><math><mi xml:lang="en">x</mi></math>"##,
    );
    assert!(out.ends_with(r##"<svg><use xlink:href="#icon"></use></svg><math><mi xml:lang="en">x</mi></math>"##));
}

#[test]
fn skipped_passes_leave_their_targets_alone() {
    let pipeline = Bootstrapify::builder()
        .skip(Pass::Blockquote)
        .skip(Pass::VideoEmbed)
        .build();
    let input = "<blockquote>Q</blockquote><iframe src=\"https://vimeo.com/1\"></iframe><h4>H</h4>";
    assert_eq!(
        pipeline.transform(input),
        format!(
            "<blockquote>Q</blockquote><iframe src=\"https://vimeo.com/1\"></iframe><h4 class=\"{}\">H</h4>",
            HEADING
        )
    );
}

#[test]
fn embed_dimensions_stripped() {
    let out = strip_embed_dimensions(
        r#"<iframe width="200" height="100" src="https://www.youtube.com/embed/x"></iframe>"#,
    );
    assert!(!out.contains("width="));
    assert!(!out.contains("height="));
    assert!(out.contains(r#"src="https://www.youtube.com/embed/x""#));
}
