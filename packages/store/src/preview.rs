//! Assembly of a project's three files into one HTML document.
//!
//! The markup blob is embedded inside a fixed skeleton after removing any
//! `<!DOCTYPE html>`, `<html>`, `</html>`, `<body>` and `</body>` tags it carries.
//! Nothing is validated or sanitised. The result must only be rendered inside a
//! sandboxed frame, see [`SANDBOX`] and [`CONTENT_SECURITY_POLICY`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::ProjectFiles;

/// `sandbox` attribute for frames showing a combined document.
pub const SANDBOX: &str = "allow-scripts";

/// CSP header for responses that are a combined document.
pub const CONTENT_SECURITY_POLICY: &str = "sandbox allow-scripts";

static DOCUMENT_TAGS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<!DOCTYPE html>|</?html>|</?body>").expect("static regex"));

/// Remove the document-level tags from a markup blob.
pub fn strip_document_tags(html: &str) -> String {
    DOCUMENT_TAGS.replace_all(html, "").into_owned()
}

/// Build the combined document for preview and share rendering.
pub fn combine_document(files: &ProjectFiles) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n  <head>\n    <style>{css}</style>\n  </head>\n  <body>\n    {html}\n    <script>{js}</script>\n  </body>\n</html>\n",
        css = files.css,
        html = strip_document_tags(&files.html),
        js = files.javascript,
    )
}
