use axum::{
    extract::{Query, State},
    response::Json,
};
use tracing::info;
use crate::catalog::command::probe_catalog_cmd::{ProbeCatalogCommand, ProbeCatalogCommandRequest};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest, SearchBooksCommandResponse};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, ServerError};

fn build_service(state: &AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(&state.config, state.catalog_client.clone())
}

pub(crate) async fn search_books(
    State(state): State<AppState>,
    Query(req): Query<SearchBooksCommandRequest>) -> Result<Json<SearchBooksCommandResponse>, ServerError> {
    let svc = build_service(&state);
    let res = SearchBooksCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn probe_catalog(
    State(state): State<AppState>) -> Result<String, ServerError> {
    let svc = build_service(&state);
    let res = ProbeCatalogCommand::new(svc).execute(ProbeCatalogCommandRequest {}).await?;
    info!("catalog probe returned {} books", res.found);
    Ok(res.message)
}
