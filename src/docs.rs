//! API-level metadata and the documentation plumbing routes.

use aide::axum::ApiRouter;
use aide::openapi::{Contact, Info, License, OpenApi, Tag};
use aide::swagger::Swagger;
use axum::http::header;
use axum::response::{IntoResponse, Json};
use axum::routing::get;
use axum::Extension;

use crate::error::ApiError;

const API_DESCRIPTION: &str = "\
ChimichangApp API helps you do awesome stuff. 🚀

## Items

You can **read items** and submit updated ones.

## Users

You can **browse the demo directory** and look individual users up by id.
";

/// Build the OpenAPI document skeleton: everything except the paths, which
/// are filled in by `finish_api`.
pub fn api_docs() -> OpenApi {
    OpenApi {
        info: Info {
            title: "ChimichangApp".to_owned(),
            description: Some(API_DESCRIPTION.to_owned()),
            version: "0.0.1".to_owned(),
            terms_of_service: Some("http://example.com/terms/".to_owned()),
            contact: Some(Contact {
                name: Some("Deadpoolio the Amazing".to_owned()),
                url: Some("http://x-force.example.com/contact/".to_owned()),
                email: Some("dp@x-force.example.com".to_owned()),
                ..Contact::default()
            }),
            license: Some(License {
                name: "Apache 2.0".to_owned(),
                url: Some("https://www.apache.org/licenses/LICENSE-2.0.html".to_owned()),
                ..License::default()
            }),
            ..Info::default()
        },
        tags: vec![
            Tag {
                name: "users".to_owned(),
                description: Some("Operations with users in the demo directory.".to_owned()),
                ..Tag::default()
            },
            Tag {
                name: "items".to_owned(),
                description: Some(
                    "Manage items. So _fancy_ they have their own docs.".to_owned(),
                ),
                ..Tag::default()
            },
        ],
        ..OpenApi::default()
    }
}

/// The documentation plumbing: Swagger UI plus the raw spec in JSON and YAML.
///
/// Registered as plain routes so none of them appear in the spec itself.
pub fn docs_routes<S>() -> ApiRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    ApiRouter::new()
        .route("/docs", Swagger::new("/api.json").axum_route())
        .route("/api.json", get(serve_api_json))
        .route("/api.yaml", get(serve_api_yaml))
        .route("/api.yml", get(serve_api_yaml))
}

async fn serve_api_json(Extension(api): Extension<OpenApi>) -> Json<OpenApi> {
    Json(api)
}

async fn serve_api_yaml(
    Extension(api): Extension<OpenApi>,
) -> Result<impl IntoResponse, ApiError> {
    let yaml = serde_yaml::to_string(&api)?;

    Ok(([(header::CONTENT_TYPE, "application/yaml")], yaml))
}
