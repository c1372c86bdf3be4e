use std::sync::Arc;

use outcome_http::catalog::Catalog;
use outcome_http::HttpConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    outcome_observability::init()?;

    let config = HttpConfig::from_env()?;
    let app = outcome_http::app::build_app(Arc::new(Catalog::new()), config.mapping());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
