//! Test utilities and helper functions for the distill test suite

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once; level comes from `RUST_LOG`.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Creates a test HTML document with specified content
#[allow(dead_code)]
pub fn create_test_html(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
</head>
<body>
    {}
</body>
</html>"#,
        html_escape::encode_text(title),
        body
    )
}

/// A news-style page with page chrome around a real article
#[allow(dead_code)]
pub fn create_article_html() -> String {
    r##"<!DOCTYPE html>
<html>
<head>
    <title>Release Notes | Example Project</title>
    <meta name="description" content="What changed in the latest release of Example Project.">
    <meta name="keywords" content="release, changelog, example">
    <meta property="article:tag" content="engineering">
    <style>body { color: red; }</style>
    <script>window.analytics = true;</script>
</head>
<body>
    <header><h1>Example Project Site Header</h1></header>
    <nav><a href="/">Home</a> <a href="/blog">Blog</a></nav>
    <main>
        <h1>Version 2.0 Released</h1>
        <p>Version 2.0 brings a redesigned configuration system and faster startup times.</p>
        <p>The old configuration format is still read, but a warning is logged when it is used.</p>
        <p>See the <a href="upgrade.html">upgrade guide</a> or the <a href="#changes">full list</a>.</p>
        <img src="/img/startup.png" alt="Startup time chart">
        <div class="ad-banner">Buy now! Limited offer on premium plans.</div>
        <div class="share-buttons"><a href="https://social.example/share">Share this post</a></div>
    </main>
    <aside>Related posts you might like to read next week.</aside>
    <footer>Copyright Example Project contributors</footer>
</body>
</html>"##
        .to_string()
}

/// Compares two markdown strings, normalizing whitespace
#[allow(dead_code)]
pub fn assert_markdown_eq(actual: &str, expected: &str) {
    let normalize = |s: &str| {
        s.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    };

    let actual_normalized = normalize(actual);
    let expected_normalized = normalize(expected);

    if actual_normalized != expected_normalized {
        println!("=== ACTUAL ===\n{actual}\n");
        println!("=== EXPECTED ===\n{expected}\n");
        panic!("Markdown content does not match");
    }
}
