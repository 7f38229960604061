use api::{auth, settings, AppState};
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use store::{MemoryStore, Repository};

fn app(state: AppState) -> axum::Router {
    let sessions = settings::Session {
        secure: false,
        expiry_days: 7,
    };
    api::router()
        .with_state(state)
        .layer(auth::session_layer(
            tower_sessions::MemoryStore::default(),
            &sessions,
        ))
}

fn new_state() -> AppState {
    AppState::new(Repository::new(MemoryStore::new()))
}

fn client(state: &AppState) -> TestServer {
    TestServer::builder()
        .save_cookies()
        .build(app(state.clone()))
        .unwrap()
}

async fn signed_in(state: &AppState, name: &str, email: &str) -> TestServer {
    let server = client(state);
    let resp = server
        .post("/api/auth/register")
        .json(&json!({ "name": name, "email": email, "password": "hunter2hunter2" }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::CREATED);
    server
}

async fn create(server: &TestServer, name: &str) {
    let resp = server
        .post("/api/projects")
        .json(&json!({ "project_name": name, "project_description": "demo" }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::CREATED);
}

#[tokio::test]
async fn created_project_is_retrievable_by_name() {
    let state = new_state();
    let server = signed_in(&state, "Ada Lovelace", "ada@example.com").await;

    let resp = server
        .post("/api/projects")
        .json(&json!({ "project_name": "engine", "project_description": "demo" }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::CREATED);
    let body: Value = resp.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["redirect_url"], "/Ada/engine");

    let by_query = server.get("/api/projects").add_query_param("pname", "engine").await;
    assert_eq!(by_query.status_code(), StatusCode::OK);
    let body: Value = by_query.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["project"]["project_name"], "engine");
    assert_eq!(body["project"]["project_description"], "demo");
    assert_eq!(
        body["project"]["files"]["javascript"],
        "console.log('Hello World!')"
    );

    let by_path = server.get("/api/projects/engine").await;
    assert_eq!(by_path.status_code(), StatusCode::OK);
    assert_eq!(by_path.json::<Value>()["project"], body["project"]);

    let list: Value = server.get("/api/projectlist").await.json();
    assert_eq!(list["projects"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn duplicate_project_name_is_rejected() {
    let state = new_state();
    let server = signed_in(&state, "Ada", "ada@example.com").await;
    create(&server, "engine").await;

    let resp = server
        .post("/api/projects")
        .json(&json!({ "project_name": "engine", "project_description": "again" }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::CONFLICT);
    assert_eq!(resp.json::<Value>()["success"], false);
}

#[tokio::test]
async fn endpoints_require_a_session() {
    let state = new_state();
    let server = client(&state);

    assert_eq!(
        server.get("/api/projects?pname=x").await.status_code(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        server.get("/api/projects/x").await.status_code(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        server
            .put("/api/saveproject")
            .json(&json!({ "project_name": "x" }))
            .await
            .status_code(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        server
            .put("/api/saveProjectDetails")
            .json(&json!({ "project_name": "x", "newProjectName": "y", "newProjectDescription": "z" }))
            .await
            .status_code(),
        StatusCode::UNAUTHORIZED
    );
    let resp = server
        .delete("/api/deleteproject")
        .json(&json!({ "project_name": "x" }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(resp.json::<Value>()["error"], "Unauthorized");
}

#[tokio::test]
async fn missing_fields_are_bad_requests() {
    let state = new_state();
    let server = signed_in(&state, "Ada", "ada@example.com").await;

    let resp = server.get("/api/projects").await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["error"], "Project name is required");

    let resp = server.put("/api/saveproject").json(&json!({ "html": "<p></p>" })).await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);

    let resp = server
        .put("/api/saveProjectDetails")
        .json(&json!({ "project_name": "x", "newProjectName": "y" }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["error"], "All fields are required");

    let resp = server.delete("/api/deleteproject").json(&json!({})).await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_project_is_not_found() {
    let state = new_state();
    let server = signed_in(&state, "Ada", "ada@example.com").await;

    assert_eq!(
        server.get("/api/projects/ghost").await.status_code(),
        StatusCode::NOT_FOUND
    );
    let resp = server
        .put("/api/saveproject")
        .json(&json!({ "project_name": "ghost", "css": "" }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(resp.json::<Value>()["error"], "Project not found");
}

#[tokio::test]
async fn saving_files_is_idempotent() {
    let state = new_state();
    let server = signed_in(&state, "Ada", "ada@example.com").await;
    create(&server, "engine").await;

    let save = json!({ "project_name": "engine", "html": "<h2>x</h2>", "javascript": "1" });

    let first = server.put("/api/saveproject").json(&save).await;
    assert_eq!(first.status_code(), StatusCode::OK);
    assert_eq!(first.json::<Value>()["message"], "Project updated successfully");
    let after_first: Value = server.get("/api/projects/engine").await.json();

    server.put("/api/saveproject").json(&save).await;
    let after_second: Value = server.get("/api/projects/engine").await.json();

    assert_eq!(after_first, after_second);
    assert_eq!(after_second["project"]["files"]["html"], "<h2>x</h2>");
    assert_eq!(after_second["project"]["files"]["javascript"], "1");
    // untouched blob keeps its starter content
    assert_eq!(
        after_second["project"]["files"]["css"],
        "body {margin: 0;background: black;}h1 {color: white;}"
    );
}

#[tokio::test]
async fn deleted_project_then_404s() {
    let state = new_state();
    let server = signed_in(&state, "Ada", "ada@example.com").await;
    create(&server, "engine").await;

    let resp = server
        .delete("/api/deleteproject")
        .json(&json!({ "project_name": "engine" }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(
        resp.json::<Value>()["message"],
        "Project - engine deleted successfully"
    );

    assert_eq!(
        server.get("/api/projects/engine").await.status_code(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        server
            .delete("/api/deleteproject")
            .json(&json!({ "project_name": "engine" }))
            .await
            .status_code(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn share_endpoint_is_public() {
    let state = new_state();
    let owner = signed_in(&state, "Ada", "ada@example.com").await;
    create(&owner, "engine").await;

    let stranger = client(&state);
    let resp = stranger
        .get("/api/shareproject")
        .add_query_param("user_name", "Ada")
        .add_query_param("project_name", "engine")
        .await;
    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(resp.json::<Value>()["project"]["project_name"], "engine");

    let other = signed_in(&state, "Grace", "grace@example.com").await;
    let resp = other
        .get("/api/shareproject?user_name=Ada&project_name=engine")
        .await;
    assert_eq!(resp.status_code(), StatusCode::OK);

    // the owner-only endpoint does not see someone else's project
    assert_eq!(
        other.get("/api/projects/engine").await.status_code(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn share_endpoint_errors() {
    let state = new_state();
    let owner = signed_in(&state, "Ada", "ada@example.com").await;
    create(&owner, "engine").await;

    let stranger = client(&state);
    let resp = stranger.get("/api/shareproject?user_name=Ada").await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.json::<Value>()["error"],
        "Project name and User name are required"
    );

    let resp = stranger
        .get("/api/shareproject?user_name=Nobody&project_name=engine")
        .await;
    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(resp.json::<Value>()["error"], "User not found");

    let resp = stranger
        .get("/api/shareproject?user_name=Ada&project_name=ghost")
        .await;
    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn rename_changes_the_key() {
    let state = new_state();
    let server = signed_in(&state, "Ada", "ada@example.com").await;
    create(&server, "old").await;

    let resp = server
        .put("/api/saveProjectDetails")
        .json(&json!({
            "project_name": "old",
            "newProjectName": "new",
            "newProjectDescription": "renamed"
        }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(
        resp.json::<Value>()["message"],
        "Project details updated successfully"
    );

    assert_eq!(
        server.get("/api/projects/old").await.status_code(),
        StatusCode::NOT_FOUND
    );
    let fetched: Value = server.get("/api/projects/new").await.json();
    assert_eq!(fetched["project"]["project_description"], "renamed");

    let save = server
        .put("/api/saveproject")
        .json(&json!({ "project_name": "new", "css": "p{}" }))
        .await;
    assert_eq!(save.status_code(), StatusCode::OK);

    let delete = server
        .delete("/api/deleteproject")
        .json(&json!({ "project_name": "new" }))
        .await;
    assert_eq!(delete.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn raw_document_and_preview_are_sandboxed() {
    let state = new_state();
    let owner = signed_in(&state, "Ada", "ada@example.com").await;
    create(&owner, "engine").await;

    let stranger = client(&state);
    let raw = stranger.get("/Ada/engine/raw").await;
    assert_eq!(raw.status_code(), StatusCode::OK);
    assert_eq!(raw.header("content-security-policy"), "sandbox allow-scripts");
    let text = raw.text();
    assert!(text.starts_with("<!DOCTYPE html>"));
    assert!(text.contains("<h1>Welcome to My Website</h1>"));

    let preview = stranger
        .post("/api/preview")
        .json(&json!({ "html": "<body><b>hi</b></body>", "css": "b{}", "javascript": "" }))
        .await;
    assert_eq!(preview.status_code(), StatusCode::OK);
    assert_eq!(
        preview.header("content-security-policy"),
        "sandbox allow-scripts"
    );
    let text = preview.text();
    assert!(text.contains("<b>hi</b>"));
    assert!(text.contains("<style>b{}</style>"));
}

#[tokio::test]
async fn malformed_input_gets_json_error_body() {
    let state = new_state();
    let server = signed_in(&state, "Ada", "ada@example.com").await;
    create(&server, "engine").await;

    let no_body = server.delete("/api/deleteproject").await;
    assert_eq!(no_body.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = no_body.json();
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());

    let wrong_type = server
        .put("/api/saveproject")
        .json(&json!({ "project_name": 5 }))
        .await;
    assert_eq!(wrong_type.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(wrong_type.json::<Value>()["success"], false);

    let bad_query = server.get("/api/projects?pname=a&pname=b").await;
    assert_eq!(bad_query.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(bad_query.json::<Value>()["success"], false);

    // the project survives the rejected delete
    assert_eq!(
        server.get("/api/projects/engine").await.status_code(),
        StatusCode::OK
    );
}

#[tokio::test]
async fn download_is_a_zip_of_the_saved_files() {
    use std::io::{Cursor, Read};

    let state = new_state();
    let owner = signed_in(&state, "Ada", "ada@example.com").await;
    create(&owner, "engine").await;
    owner
        .put("/api/saveproject")
        .json(&json!({
            "project_name": "engine",
            "html": "<p>hi</p>",
            "css": "p { margin: 0; }",
            "javascript": ""
        }))
        .await;

    let resp = client(&state).get("/Ada/engine/download").await;
    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(resp.header("content-type"), "application/zip");
    assert_eq!(
        resp.header("content-disposition"),
        "attachment; filename=\"project.zip\""
    );

    let mut archive = zip::ZipArchive::new(Cursor::new(resp.as_bytes().to_vec())).unwrap();
    let mut html = String::new();
    archive
        .by_name("index.html")
        .unwrap()
        .read_to_string(&mut html)
        .unwrap();
    assert_eq!(html, "<p>hi</p>");
    assert!(archive.by_name("styles.css").is_ok());
    assert!(archive.by_name("script.js").is_ok());

    let missing = client(&state).get("/Ada/nothing/download").await;
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
}
