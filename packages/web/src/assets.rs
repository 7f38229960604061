use axum::{http::header, response::IntoResponse, routing::get, Router};

const MAIN_CSS: &str = include_str!("../assets/main.css");
const EDITOR_JS: &str = include_str!("../assets/editor.js");

pub(crate) fn router<S: Clone + Send + Sync + 'static>() -> Router<S> {
    Router::new()
        .route("/assets/main.css", get(main_css))
        .route("/assets/editor.js", get(editor_js))
}

async fn main_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], MAIN_CSS)
}

async fn editor_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        EDITOR_JS,
    )
}
