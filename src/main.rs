use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

use activities_board::config::AppConfig;
use activities_board::services::activities_api_service::HttpActivitiesApi;
use activities_board::services::board_service::BoardService;
use activities_board::web;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env().expect("invalid configuration");
    info!(
        build = env!("ACTIVITIES_BOARD_BUILD_ID"),
        api = %config.api_base_url,
        "starting activities board"
    );

    let api = Arc::new(HttpActivitiesApi::from_config(&config));
    let service = BoardService::new(api, config.message_hide_after);
    let app = web::router(service);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("cannot parse HOST/PORT");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback: SocketAddr = format!("{}:{}", config.host, config.port.saturating_add(1))
                .parse()
                .expect("cannot parse fallback HOST/PORT");
            warn!("cannot bind {}: {}, trying {}", addr, e, fallback);
            tokio::net::TcpListener::bind(fallback)
                .await
                .expect("cannot bind fallback port")
        }
    };

    let bound_addr = listener.local_addr().expect("listener has no local address");
    info!("listening on http://{}", bound_addr);

    axum::serve(listener, app).await.expect("server error");
}
