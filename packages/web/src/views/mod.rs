//! Server-rendered pages.
//!
//! Every page is a Dioxus component rendered once to a string with
//! `dioxus-ssr`. Nothing is hydrated; the editor's behaviour lives in
//! `assets/editor.js`.

use axum::response::Html;
use dioxus::prelude::*;

mod access_denied;
pub use access_denied::AccessDenied;

mod code_view;
pub use code_view::CodeView;

mod dashboard;
pub use dashboard::Dashboard;

mod editor;
pub use editor::Editor;

mod home;
pub use home::Home;

mod layout;
use layout::Layout;

mod not_found;
pub use not_found::NotFound;

mod playground;
pub use playground::Playground;

mod share;
pub use share::Share;

/// Render a page element to a complete HTML document.
pub fn render(page: Element) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html><html lang=\"en\">{}</html>",
        dioxus_ssr::render_element(page)
    ))
}
