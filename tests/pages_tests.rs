
use reqwest::StatusCode;
use serde_json::{json, Value};
use test_utils::*;

#[actix_rt::test]
async fn empty_site_home_has_null_sections() {
    let app = TestApp::spawn().await;

    let response = app.get("/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert!(body["about"].is_null());
    assert!(body["about_html"].is_null());
    assert!(body["social_settings"].is_null());
    assert_eq!(body["skills_by_category"], json!({}));
    assert_eq!(body["projects"], json!([]));
}

#[actix_rt::test]
async fn home_bundle_renders_markdown_and_groups_skills() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    app.admin_post(&token, "/api/v1/admin/about", &json!({ "content": "Hello **world**" })).await;
    for (name, category, years) in [("Python", "Languages", 8), ("Docker", "Tools", 5), ("Rust", "Languages", 4)] {
        let response = app
            .admin_post(
                &token,
                "/api/v1/admin/skills",
                &json!({ "name": name, "category": category, "years_of_experience": years }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
    app.admin_post(
        &token,
        "/api/v1/admin/projects",
        &json!({
            "title": "Portfolio",
            "description": "This *site*",
            "technologies": "Rust, actix-web , PostgreSQL",
            "featured": true
        }),
    )
    .await;

    let body: Value = app.get("/").await.json().await.unwrap();

    assert_eq!(body["about"]["title"], "About Me");
    assert!(body["about_html"].as_str().unwrap().contains("<strong>world</strong>"));

    let categories: Vec<&String> = body["skills_by_category"].as_object().unwrap().keys().collect();
    assert_eq!(categories, vec!["Languages", "Tools"]);
    assert_eq!(body["skills_by_category"]["Languages"][0]["name"], "Python");
    assert_eq!(body["skills_by_category"]["Languages"][1]["name"], "Rust");

    assert_eq!(body["projects"][0]["technologies_list"], json!(["Rust", "actix-web", "PostgreSQL"]));
}

#[actix_rt::test]
async fn social_settings_are_attached_to_every_page() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    app.admin_post(
        &token,
        "/api/v1/admin/social-settings",
        &json!({ "github_url": "https://github.com/someone" }),
    )
    .await;

    for path in ["/", "/blog"] {
        let body: Value = app.get(path).await.json().await.unwrap();
        assert_eq!(body["social_settings"]["github_url"], "https://github.com/someone", "{path}");
    }
}

#[actix_rt::test]
async fn project_detail_renders_description() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let created: Value = app
        .admin_post(
            &token,
            "/api/v1/admin/projects",
            &json!({
                "title": "CLI",
                "description": "```rust\nfn main() {}\n```",
                "technologies": "Rust",
                "github_url": "https://github.com/someone/cli"
            }),
        )
        .await
        .json()
        .await
        .unwrap();

    let response = app.get(&format!("/project/{}", created["id"].as_str().unwrap())).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert!(body["description_html"].as_str().unwrap().contains("codehilite"));
    assert_eq!(body["technologies_list"], json!(["Rust"]));
}

#[actix_rt::test]
async fn unknown_or_malformed_project_is_not_found() {
    let app = TestApp::spawn().await;

    assert_eq!(app.get("/project/42").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        app.get("/project/5d1f7f36-6a43-4b3e-9f63-6b3f1c2a9e11").await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_rt::test]
async fn blog_list_paginates_published_posts_only() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    for i in 0..11 {
        app.create_post(&token, json!({ "title": format!("Post {i}"), "content": "Body", "published": true }))
            .await;
    }
    app.create_post(&token, json!({ "title": "Draft", "content": "Body" })).await;

    let first: Value = app.get("/blog").await.json().await.unwrap();
    assert_eq!(first["title"], "Blog");
    assert_eq!(first["posts"].as_array().unwrap().len(), 10);
    assert_eq!(first["pagination"]["total_items"], 11);
    assert_eq!(first["pagination"]["total_pages"], 2);
    assert_eq!(first["pagination"]["has_next"], true);

    let second: Value = app.get("/blog?page=2").await.json().await.unwrap();
    assert_eq!(second["posts"].as_array().unwrap().len(), 1);
    assert_eq!(second["pagination"]["has_previous"], true);

    let slugs: Vec<&str> = first["posts"]
        .as_array()
        .unwrap()
        .iter()
        .chain(second["posts"].as_array().unwrap())
        .map(|p| p["slug"].as_str().unwrap())
        .collect();
    assert!(!slugs.contains(&"draft"));
}

#[actix_rt::test]
async fn invalid_blog_pages_are_not_found() {
    let app = TestApp::spawn().await;

    assert_eq!(app.get("/blog?page=1").await.status(), StatusCode::OK);
    for query in ["page=2", "page=0", "page=abc", "page=-1"] {
        let response = app.get(&format!("/blog?{query}")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{query}");
    }
}

#[actix_rt::test]
async fn blog_detail_hides_drafts() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    app.create_post(&token, json!({ "title": "Secret Plans", "content": "# Hidden" })).await;

    let response = app.get("/blog/secret-plans").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let text = response.text().await.unwrap();
    assert!(!text.contains("Hidden"));
}

#[actix_rt::test]
async fn blog_detail_renders_published_post() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    app.create_post(
        &token,
        json!({
            "title": "Hello, World",
            "content": "| a | b |\n|---|---|\n| 1 | 2 |\n\n<script>alert(1)</script>",
            "published": true
        }),
    )
    .await;

    let response = app.get("/blog/hello-world").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    let html = body["post_html"].as_str().unwrap();
    assert!(html.contains("<table>"));
    assert!(!html.contains("<script"));
    assert!(body["post"]["published_at"].is_string());
}
