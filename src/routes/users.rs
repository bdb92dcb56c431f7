//! User endpoints: the fixed list and the directory lookup with its
//! three-way status outcome.

use aide::axum::IntoApiResponse;
use aide::transform::TransformOperation;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Json};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::error::ApiError;
use crate::models::{ErrorReply, UserLookup, UserName};
use crate::state::{AppState, RESERVED_USER_ID};

/// Query parameters of the user list endpoint.
#[derive(Deserialize, JsonSchema)]
pub struct UsersQuery {
    /// Identifier to highlight in the listing.
    #[schemars(title = "Query string", extend("example" = "010"))]
    pub id: Option<String>,
}

/// Query parameters of the user lookup endpoint.
#[derive(Deserialize, JsonSchema)]
pub struct GetUserQuery {
    /// Identifier of the user to look up.
    #[schemars(extend("example" = "001"))]
    pub id: String,
}

pub async fn get_users(Query(_query): Query<UsersQuery>) -> Json<Vec<UserName>> {
    Json(vec![
        UserName {
            name: "Harry".to_owned(),
        },
        UserName {
            name: "Ron".to_owned(),
        },
    ])
}

pub fn get_users_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List users.")
        .description("Returns the fixed demo user list.")
        .tag("users")
        .response_with::<200, Json<Vec<UserName>>, _>(|res| res.description("The demo users."))
}

pub async fn get_user(
    State(state): State<AppState>,
    Query(query): Query<GetUserQuery>,
) -> impl IntoApiResponse {
    if query.id == RESERVED_USER_ID {
        return ApiError::Forbidden("Insufficient privileges!".to_owned()).into_response();
    }

    match state.lookup_user(&query.id) {
        Some(name) => Json(UserLookup::success(&query.id, name)).into_response(),
        None => ApiError::NotFound("User not found!".to_owned()).into_response(),
    }
}

pub fn get_user_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Look a user up by id.")
        .description("Resolves an id against the demo user directory.")
        .tag("users")
        .response_with::<200, Json<UserLookup>, _>(|res| {
            res.description("The user was found.")
                .example(UserLookup::success("001", "Wai Foong"))
        })
        .response_with::<403, Json<ErrorReply>, _>(|res| {
            res.description("The id is reserved and may not be queried.")
        })
        .response_with::<404, Json<ErrorReply>, _>(|res| {
            res.description("No user with that id exists.")
        })
}
