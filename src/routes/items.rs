//! Item endpoints: the fixed list, the update echo, and the documented
//! search with its length-constrained query string.

use aide::axum::IntoApiResponse;
use aide::transform::TransformOperation;
use axum::extract::{Path, Query};
use axum::response::{IntoResponse, Json};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::error::ApiError;
use crate::models::{ErrorReply, Item, ItemName, ItemRef, ItemSearch, ItemUpdate};

/// Minimum number of characters accepted for the `q` search string.
const MIN_QUERY_LEN: usize = 3;

/// Query parameters of the new-items endpoint.
#[derive(Deserialize, JsonSchema)]
pub struct NewItemsQuery {
    /// Query string for the items to search in the database that have a good match.
    #[schemars(title = "Query string", length(min = 3))]
    pub q: Option<String>,
}

pub async fn get_items() -> Json<Vec<ItemName>> {
    Json(vec![
        ItemName {
            name: "wand".to_owned(),
        },
        ItemName {
            name: "flying broom".to_owned(),
        },
    ])
}

pub fn get_items_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List items.")
        .description("Returns the fixed demo item list.")
        .tag("items")
        .response_with::<200, Json<Vec<ItemName>>, _>(|res| res.description("The demo items."))
}

pub async fn update_item(Path(item_id): Path<u64>, Json(item): Json<Item>) -> Json<ItemUpdate> {
    Json(ItemUpdate { item_id, item })
}

pub fn update_item_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Update an item.")
        .description("Echoes back the path id together with the submitted item.")
        .tag("items")
        .response_with::<200, Json<ItemUpdate>, _>(|res| {
            res.description("The submitted item together with its id.")
                .example(ItemUpdate {
                    item_id: 42,
                    item: Item::default(),
                })
        })
}

pub async fn read_new_items(Query(query): Query<NewItemsQuery>) -> impl IntoApiResponse {
    if let Some(q) = &query.q {
        if q.chars().count() < MIN_QUERY_LEN {
            return ApiError::Validation(format!(
                "q must be at least {MIN_QUERY_LEN} characters long"
            ))
            .into_response();
        }
    }

    Json(ItemSearch {
        items: vec![
            ItemRef {
                item_id: "Foo".to_owned(),
            },
            ItemRef {
                item_id: "Bar".to_owned(),
            },
        ],
        q: query.q,
    })
    .into_response()
}

pub fn read_new_items_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Search new items.")
        .description("This API is for creating new items.")
        .tag("items")
        .response_with::<200, Json<ItemSearch>, _>(|res| {
            res.description("The matching items, echoing q back when it was supplied.")
        })
        .response_with::<422, Json<ErrorReply>, _>(|res| {
            res.description("The supplied q was shorter than three characters.")
        })
}
