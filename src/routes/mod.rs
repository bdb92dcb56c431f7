//! HTTP handlers and their documentation functions.
//!
//! Each handler is paired with a `*_docs` function that fills in the
//! operation's documentation, wired up through `get_with`/`put_with` so the
//! two always travel together.

use aide::axum::routing::{get_with, put_with};
use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::response::Json;

use crate::models::Greeting;
use crate::state::AppState;

pub mod items;
pub mod users;

/// All business routes of the API.
pub fn api_routes() -> ApiRouter<AppState> {
    ApiRouter::new()
        .api_route("/", get_with(root, root_docs))
        .api_route("/items/", get_with(items::get_items, items::get_items_docs))
        .api_route(
            "/items/{item_id}",
            put_with(items::update_item, items::update_item_docs),
        )
        .api_route(
            "/new_items/",
            get_with(items::read_new_items, items::read_new_items_docs),
        )
        .api_route("/users/", get_with(users::get_users, users::get_users_docs))
        .api_route(
            "/get-user",
            get_with(users::get_user, users::get_user_docs),
        )
}

async fn root() -> Json<Greeting> {
    Json(Greeting::default())
}

fn root_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Greet the world.")
        .description("Returns the fixed greeting object.")
        .response_with::<200, Json<Greeting>, _>(|res| {
            res.description("The greeting.").example(Greeting::default())
        })
}
