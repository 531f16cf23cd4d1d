use std::sync::OnceLock;

use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

const STYLESHEET: &str = "main.css";
const FAVICON: &str = "favicon.svg";

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_URI: OnceLock<String> = OnceLock::new();

/// The quote page stylesheet. Empty if the asset failed to embed.
pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| embedded_text(STYLESHEET).unwrap_or_default())
}

/// The SVG favicon as an inline `data:` URI.
pub fn favicon_data_uri() -> &'static str {
    FAVICON_URI.get_or_init(|| {
        embedded_text(FAVICON)
            .map(|svg| svg_data_uri(&svg))
            .unwrap_or_default()
    })
}

fn embedded_text(name: &str) -> Option<String> {
    let Some(file) = EmbeddedAssets::get(name) else {
        tracing::warn!(asset = name, "embedded asset not found");
        return None;
    };
    match String::from_utf8(file.data.into_owned()) {
        Ok(text) => Some(text),
        Err(err) => {
            tracing::warn!(asset = name, "embedded asset is not UTF-8: {err}");
            None
        }
    }
}

/// SVG is text, so percent-escaping the few reserved characters is enough.
fn svg_data_uri(svg: &str) -> String {
    let mut uri = String::from("data:image/svg+xml,");
    for ch in svg.trim().chars() {
        match ch {
            '"' => uri.push('\''),
            '%' => uri.push_str("%25"),
            '#' => uri.push_str("%23"),
            '<' => uri.push_str("%3C"),
            '>' => uri.push_str("%3E"),
            '\n' | '\r' => uri.push(' '),
            other => uri.push(other),
        }
    }
    uri
}
