use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::shelf::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::shelf::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::shelf::command::save_book_cmd::{SaveBookCommand, SaveBookCommandRequest, SaveBookCommandResponse};
use crate::shelf::domain::ShelfService;
use crate::shelf::factory;

fn build_service(state: &AppState) -> Box<dyn ShelfService> {
    factory::create_shelf_service(&state.config, state.book_repository.clone())
}

pub(crate) async fn save_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<SaveBookCommandResponse>, ServerError> {
    let req: SaveBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(&state);
    let res = SaveBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let svc = build_service(&state);
    let res = ListBooksCommand::new(svc).execute(ListBooksCommandRequest {}).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<i64>) -> Result<StatusCode, ServerError> {
    let req = RemoveBookCommandRequest::new(book_id);
    let svc = build_service(&state);
    let _ = RemoveBookCommand::new(svc).execute(req).await?;
    Ok(StatusCode::NO_CONTENT)
}
