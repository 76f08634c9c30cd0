//! Static quiz page rendering and JSON output.
//!
//! A rendered page is self-contained: the template's stylesheet link and
//! script tag are replaced inline with the CSS and JS, and the question
//! payload is embedded into the JS at its placeholder line. Substitution is
//! best-effort string replacement; a template without a given placeholder is
//! simply left as-is.

use std::path::Path;

use chrono::Datelike;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::question::Question;

const MODULE_PLACEHOLDER: &str = "{{ MODULE }}";
const YEAR_PLACEHOLDER: &str = "{{ YEAR }}";
const JSON_PLACEHOLDER: &str = "{{ JSON_CONTENT }}";
const CSS_LINK: &str = "<link rel=\"stylesheet\" href=\"styles.css\">";
const JS_SCRIPT: &str = "<script src=\"main.js\"></script>";

/// The three template files a quiz page is assembled from.
#[derive(Debug)]
pub struct TemplateSet {
    /// Page skeleton (`index.html`).
    pub page: String,
    /// Stylesheet (`styles.css`), inlined over the link tag.
    pub css: String,
    /// Quiz logic (`main.js`), inlined over the script tag with the JSON
    /// payload substituted.
    pub js: String,
}

impl TemplateSet {
    /// Load `index.html`, `styles.css` and `main.js` from a directory.
    pub fn load(dir: &Path) -> Result<Self> {
        Ok(Self {
            page: read_template(&dir.join("index.html"))?,
            css: read_template(&dir.join("styles.css"))?,
            js: read_template(&dir.join("main.js"))?,
        })
    }
}

fn read_template(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Render one module's standalone quiz page.
pub fn render_module(
    templates: &TemplateSet,
    module: &str,
    questions: &[Question],
) -> Result<String> {
    // The payload sits inside a JS literal indented 12 spaces; 4-space
    // inner indentation matches the hand-written template around it.
    let payload = to_json_indented(questions)?;
    let js = templates.js.replace(
        &format!("{}{JSON_PLACEHOLDER}", " ".repeat(12)),
        &indent_lines(&payload, 12),
    );

    let year = chrono::Local::now().year().to_string();
    let page = templates
        .page
        .replace(MODULE_PLACEHOLDER, module)
        .replace(YEAR_PLACEHOLDER, &year)
        .replace(
            CSS_LINK,
            &format!("<style>\n{}\n    </style>", indent_lines(&templates.css, 8)),
        )
        .replace(
            JS_SCRIPT,
            &format!("<script>\n{}\n    </script>", indent_lines(&js, 8)),
        );
    Ok(page)
}

/// Serialize questions pretty-printed with 4-space indentation.
fn to_json_indented(questions: &[Question]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    questions.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn indent_lines(text: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    text.lines()
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write questions as pretty-printed UTF-8 JSON. Non-ASCII characters are
/// preserved literally. The file is only touched once the full record set
/// exists in memory.
pub fn write_json(path: &Path, questions: &[Question]) -> Result<()> {
    let json = serde_json::to_string_pretty(questions)?;
    std::fs::write(path, json).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Write an already-built JSON value, e.g. a translated tree.
pub fn write_json_value(path: &Path, value: &serde_json::Value) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
