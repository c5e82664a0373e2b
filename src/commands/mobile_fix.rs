//! `mobile-fix` tool — surgical mobile UX patches
//!
//! Applies the same edits that were validated by hand on the Flonest
//! frontend: viewport interactive-widget, 100vh to 100dvh, safe-area
//! bottom inset, and a blurred semi-transparent header. Every edit is
//! idempotent; re-running the tool changes nothing.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;

static APP_HEIGHT_VH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\.app\s*\{[^}]*height:\s*)100vh").expect("valid regex"));

const VIEWPORT_BASE: &str = r#"content="width=device-width, initial-scale=1.0""#;
const VIEWPORT_PATCHED: &str =
    r#"content="width=device-width, initial-scale=1.0, interactive-widget=resizes-content""#;

pub fn apply_mobile_fixes(root: &Path) -> Result<()> {
    let index_html = root.join("index.html");
    let css_file = root.join("src").join("App.css");

    if index_html.exists() {
        let text = std::fs::read_to_string(&index_html)?;
        if !text.contains("interactive-widget") {
            let patched = text.replace(VIEWPORT_BASE, VIEWPORT_PATCHED);
            std::fs::write(&index_html, patched)?;
            println!("Patched viewport in {}", index_html.display());
        }
    }

    if css_file.exists() {
        let css = std::fs::read_to_string(&css_file)?;
        let patched = patch_css(&css);
        if patched != css {
            std::fs::write(&css_file, patched)?;
            println!("Patched {}", css_file.display());
        }
    }

    Ok(())
}

fn patch_css(css: &str) -> String {
    // 100vh -> 100dvh on the .app container
    let mut css = APP_HEIGHT_VH.replace_all(css, "${1}100dvh").into_owned();

    // Header transparency + blur
    css = css.replace(
        "background: rgba(255, 255, 255, 0.9);",
        "background: rgba(255, 255, 255, 0.85);",
    );
    if !css.contains("-webkit-backdrop-filter") {
        css = css.replace(
            "backdrop-filter: blur(10px);",
            "backdrop-filter: blur(10px);\n-webkit-backdrop-filter: blur(10px);",
        );
    }

    // Safe area for the input container; first occurrence only
    if !css.contains("env(safe-area-inset-bottom") {
        css = css.replacen("bottom: 0;", "bottom: env(safe-area-inset-bottom, 0px);", 1);
    }

    css
}
