use actix_files::{Files, NamedFile};
use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Context;
use std::path::PathBuf;

mod api;
mod config;

use api::auth::{AuthRelay, signup};
use config::Config;

struct SpaIndex(PathBuf);

async fn spa(index: web::Data<SpaIndex>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open(&index.0)?)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    let relay = web::Data::new(AuthRelay::new(config.auth_backend_url.clone())?);
    match relay.upstream() {
        Some(url) => log::info!("relaying sign up to {url}"),
        None => log::warn!("AUTH_BACKEND_URL not set, sign up will answer 503"),
    }

    let index = web::Data::new(SpaIndex(config.dist_dir.join("index.html")));
    let dist = config.dist_dir.clone();
    let assets = config.assets_dir.clone();

    log::info!(
        "serving {} on {}:{}",
        dist.display(),
        config.bind_addr,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(relay.clone())
            .app_data(index.clone())
            .service(signup)
            .service(Files::new("/assets", &assets))
            // SPA bundle built by Trunk
            .service(Files::new("/", &dist).index_file("index.html"))
            // anything else -> SPA
            .default_service(web::get().to(spa))
    })
    .bind((config.bind_addr.as_str(), config.port))
    .with_context(|| format!("binding {}:{}", config.bind_addr, config.port))?
    .run()
    .await?;

    Ok(())
}
