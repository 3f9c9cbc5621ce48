use detachd_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    let (_state, router) = detachd_api::setup::initialize_app(config.clone())?;

    detachd_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
