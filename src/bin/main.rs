use std::net::SocketAddr;
use lambda_http::{run, Error};
use tracing::info;
use bookfinder::core::controller::{AppState, build_router};
use bookfinder::core::domain::Configuration;
use bookfinder::utils::logs::setup_tracing;

// See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let config = Configuration::from_env()?;
    let port = config.port;
    info!("starting book finder with {:?} store", config.store);
    let state = AppState::build(config).await?;

    if std::env::var("AWS_LAMBDA_RUNTIME_API").is_ok() {
        run(build_router::<lambda_http::Body>(state)).await
    } else {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        info!("listening on {}", addr);
        axum::Server::bind(&addr)
            .serve(build_router::<axum::body::Body>(state).into_make_service())
            .await?;
        Ok(())
    }
}
