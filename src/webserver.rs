use std::net::SocketAddr;

use log::info;

use recommender::libs::config::Config;
use recommender::libs::http::{router, AppState};
use recommender::libs::source::CsvSource;
use recommender::libs::version::print_version;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    print_version();

    let config = Config::from_env();
    info!("Starting recommend service, CSV at {}", config.csv_path.display());

    let state = AppState::new(CsvSource::new(config.csv_path.clone()));
    let app = router(state);

    let addr = config.socket_addr()?;
    info!("Listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service_with_connect_info::<SocketAddr>())
        .await?;

    Ok(())
}
