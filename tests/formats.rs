//! The spec is served in JSON and YAML; all representations must agree.

use aide::openapi::OpenApi;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::util::ServiceExt;

use chimichangapp::state::AppState;

fn test_app() -> axum::Router {
    chimichangapp::app(AppState::seeded())
}

async fn fetch(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, body.to_vec())
}

#[test]
fn test_all_formats_identical() {
    let rt = tokio::runtime::Runtime::new().unwrap();

    let (json_spec, yaml_spec, yml_spec) = rt.block_on(async {
        let (status, json_body) = fetch(test_app(), "/api.json").await;
        assert_eq!(status, StatusCode::OK);
        let json_spec: OpenApi = serde_json::from_slice(&json_body).unwrap();

        let (status, yaml_body) = fetch(test_app(), "/api.yaml").await;
        assert_eq!(status, StatusCode::OK);
        let yaml_spec: OpenApi = serde_yaml::from_slice(&yaml_body).unwrap();

        let (status, yml_body) = fetch(test_app(), "/api.yml").await;
        assert_eq!(status, StatusCode::OK);
        let yml_spec: OpenApi = serde_yaml::from_slice(&yml_body).unwrap();

        (json_spec, yaml_spec, yml_spec)
    });

    assert_eq!(
        json_spec.info.title, yaml_spec.info.title,
        "JSON and YAML should have same title"
    );
    assert_eq!(
        json_spec.info.title, yml_spec.info.title,
        "JSON and YML should have same title"
    );

    let json_paths = json_spec.paths.as_ref().unwrap().paths.len();
    let yaml_paths = yaml_spec.paths.as_ref().unwrap().paths.len();
    let yml_paths = yml_spec.paths.as_ref().unwrap().paths.len();

    assert_eq!(json_paths, yaml_paths, "Should have same number of paths");
    assert_eq!(json_paths, yml_paths, "Should have same number of paths");
}

#[test]
fn test_swagger_ui_is_served() {
    let rt = tokio::runtime::Runtime::new().unwrap();

    rt.block_on(async {
        let (status, body) = fetch(test_app(), "/docs").await;

        assert_eq!(status, StatusCode::OK, "Should serve the Swagger UI");
        assert!(!body.is_empty());
    });
}

#[test]
fn test_yaml_has_yaml_content_type() {
    let rt = tokio::runtime::Runtime::new().unwrap();

    rt.block_on(async {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api.yaml")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let content_type = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .unwrap();
        assert_eq!(content_type, "application/yaml");
    });
}
