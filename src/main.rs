use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::{Context, Result};
use log::{info, warn};
use rate_chart::{
    HttpTransport, LatestChart, QueryOutcome, RateQueryEngine, SelectionCoordinator, Settings,
    routes,
};

#[actix_web::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let settings = Settings::from_env()?;
    let transport = HttpTransport::new(settings.http_timeout)?;
    let engine = RateQueryEngine::new(&settings.base_url, transport)?;
    let coordinator = web::Data::new(SelectionCoordinator::new(
        engine,
        LatestChart::default(),
        settings.default_currency.clone(),
        settings.window_days,
    ));

    if let QueryOutcome::Failed(err) = coordinator.initialize().await {
        warn!("Initial rate query failed: {}", err);
    }

    info!("Listening on {}", settings.bind_addr);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(coordinator.clone())
            .configure(routes::configure::<HttpTransport>)
    })
    .bind(&settings.bind_addr)
    .with_context(|| format!("Can't bind to {}", settings.bind_addr))?
    .run()
    .await?;

    Ok(())
}
