#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> Result<(), waggy::server::ServerError> {
    use tracing_subscriber::EnvFilter;

    // Load env vars
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("waggy=info,tower_http=info")),
        )
        .init();

    let config = waggy::config::ServerConfig::from_env()?;
    waggy::server::serve(config).await
}

#[cfg(all(feature = "csr", not(feature = "server")))]
fn main() {
    waggy::mount();
}

#[cfg(not(any(feature = "csr", feature = "server")))]
fn main() {
    // Built with neither `csr` nor `server`: library and tests only
}
