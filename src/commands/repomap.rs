//! `repomap` tool — aider-style repo map for the Flonest frontend
//!
//! Regex-scans a fixed set of frontend source files for key symbols
//! (components, functions, hooks, exports, CSS classes) and writes
//! AIDER_REPOMAP.md at the repo root. This is intentionally light-weight
//! string scanning, not a parser.

use std::collections::BTreeSet;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;

static FUNCTION_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^function\s+(\w+)").expect("valid regex"));
static CONST_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:export\s+)?const\s+(\w+)").expect("valid regex"));
static CSS_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.([a-zA-Z0-9_-]+)\s*\{").expect("valid regex"));

/// Files scanned for the map, relative to the repo root
const SCANNED_FILES: &[&str] = &["src/App.jsx", "src/embeddings.js", "src/db.js", "src/App.css"];

/// Maximum number of CSS classes listed per file
const CSS_CLASS_LIMIT: usize = 30;

#[derive(Debug, Default)]
struct Symbols {
    components: Vec<String>,
    functions: Vec<String>,
    hooks: Vec<String>,
    exports: Vec<String>,
}

impl Symbols {
    fn sections(&self) -> [(&'static str, &[String]); 4] {
        [
            ("Components", &self.components),
            ("Functions", &self.functions),
            ("Hooks", &self.hooks),
            ("Exports", &self.exports),
        ]
    }
}

/// Extract components, functions, hooks and exports from JS/JSX source
fn extract_symbols(text: &str) -> Symbols {
    let mut symbols = Symbols::default();

    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        let s = line.trim();

        if let Some(captures) = FUNCTION_DECL.captures(s) {
            let name = &captures[1];
            bucket_for(&mut symbols, name).push(format!("{name}() @L{line_no}"));
        }

        // const Foo = () => {}
        if (s.starts_with("const ") || s.starts_with("export const")) && s.contains("=>") {
            if let Some(captures) = CONST_DECL.captures(s) {
                let name = &captures[1];
                bucket_for(&mut symbols, name).push(format!("{name}() @L{line_no}"));
            }
        }

        if s.contains("useState(") || s.contains("useEffect(") || s.contains("useRef(") {
            symbols.hooks.push(format!("hook @L{line_no}"));
        }

        if s.starts_with("export ") {
            symbols.exports.push(format!("export @L{line_no}"));
        }
    }

    symbols
}

/// Uppercase-leading names read as React components
fn bucket_for<'a>(symbols: &'a mut Symbols, name: &str) -> &'a mut Vec<String> {
    if name.chars().next().is_some_and(|c| c.is_uppercase()) {
        &mut symbols.components
    } else {
        &mut symbols.functions
    }
}

/// Sorted, deduplicated CSS class names, capped at the listing limit
fn extract_css_classes(text: &str) -> Vec<String> {
    let classes: BTreeSet<String> = CSS_CLASS
        .captures_iter(text)
        .map(|c| c[1].to_string())
        .collect();
    classes.into_iter().take(CSS_CLASS_LIMIT).collect()
}

/// Generate AIDER_REPOMAP.md at the repo root
pub fn generate_repomap(root: &Path) -> Result<()> {
    let mut out = vec!["# AIDER-STYLE REPOMAP".to_string(), String::new()];

    for relative in SCANNED_FILES {
        let path = root.join(relative);
        if !path.exists() {
            continue;
        }
        let text = std::fs::read_to_string(&path)?;
        out.push(format!("## {relative}"));

        match path.extension().and_then(|e| e.to_str()) {
            Some("js") | Some("jsx") => {
                let symbols = extract_symbols(&text);
                for (label, entries) in symbols.sections() {
                    if !entries.is_empty() {
                        out.push(format!("- {label}: {}", entries.join(", ")));
                    }
                }
            }
            Some("css") => {
                let classes = extract_css_classes(&text);
                if !classes.is_empty() {
                    out.push(format!("- Classes: {}", classes.join(", ")));
                }
            }
            _ => {}
        }

        out.push(String::new());
    }

    let target = root.join("AIDER_REPOMAP.md");
    std::fs::write(&target, out.join("\n"))?;
    println!("Generated {}", target.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_declarations_split_by_case() {
        let src = "function App() {\n  return null;\n}\nfunction helper() {}\n";
        let symbols = extract_symbols(src);
        assert_eq!(symbols.components, vec!["App() @L1"]);
        assert_eq!(symbols.functions, vec!["helper() @L4"]);
    }

    #[test]
    fn test_arrow_consts_require_arrow() {
        let src = "const Widget = () => <div/>;\nconst limit = 3;\nexport const useThing = () => {};\n";
        let symbols = extract_symbols(src);
        assert_eq!(symbols.components, vec!["Widget() @L1"]);
        // plain const without => is not a function
        assert_eq!(symbols.functions, vec!["useThing() @L3"]);
    }

    #[test]
    fn test_hooks_and_exports_recorded_by_line() {
        let src = "export default App;\nconst [x, setX] = useState(0);\nuseEffect(() => {}, []);\n";
        let symbols = extract_symbols(src);
        assert_eq!(symbols.hooks, vec!["hook @L2", "hook @L3"]);
        assert_eq!(symbols.exports, vec!["export @L1"]);
    }

    #[test]
    fn test_css_classes_sorted_and_deduplicated() {
        let css = ".zebra { color: red; }\n.app { height: 100vh; }\n.app { margin: 0; }";
        assert_eq!(extract_css_classes(css), vec!["app", "zebra"]);
    }

    #[test]
    fn test_css_class_listing_is_capped() {
        let css: String = (0..50).map(|i| format!(".c{i:02} {{ }}\n")).collect();
        assert_eq!(extract_css_classes(&css).len(), CSS_CLASS_LIMIT);
    }

    #[test]
    fn test_generates_map_and_skips_missing_files() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("src")).unwrap();
        std::fs::write(
            dir.path().join("src/App.jsx"),
            "function App() {}\nexport default App;\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("src/App.css"), ".app { height: 100vh; }").unwrap();
        // embeddings.js and db.js absent on purpose

        generate_repomap(dir.path()).unwrap();

        let map = std::fs::read_to_string(dir.path().join("AIDER_REPOMAP.md")).unwrap();
        assert!(map.contains("## src/App.jsx"));
        assert!(map.contains("Components: App() @L1"));
        assert!(map.contains("## src/App.css"));
        assert!(map.contains("Classes: app"));
        assert!(!map.contains("embeddings.js"));
    }
}
