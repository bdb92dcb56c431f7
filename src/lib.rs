//! ChimichangApp: a small HTTP API that exists to show off its own
//! documentation.
//!
//! Every business route is registered together with a documentation function
//! that fills in the operation's summary, description, tags, response
//! metadata and examples, so the served OpenAPI document is as much a part of
//! the application as the handlers themselves.
//!
//! # Example
//! ```ignore
//! let state = AppState::seeded();
//! let app = chimichangapp::app(state);
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! ```

use axum::Extension;

pub mod config;
pub mod docs;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;

use crate::state::AppState;

/// Assemble the complete application router.
///
/// Business routes carry their documentation functions, the documentation
/// plumbing (Swagger UI plus the raw spec endpoints) is merged in as plain
/// routes so it never shows up in the spec, and the finished [`OpenApi`]
/// document is attached as an extension for the spec endpoints to serve.
///
/// [`OpenApi`]: aide::openapi::OpenApi
pub fn app(state: AppState) -> axum::Router {
    let mut api = docs::api_docs();

    routes::api_routes()
        .merge(docs::docs_routes())
        .with_state(state)
        .finish_api(&mut api)
        .layer(Extension(api))
}
