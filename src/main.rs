#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> std::process::ExitCode {
    use smart_saver_web::core::config::Config;
    use std::process::ExitCode;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing_subscriber::fmt::init();
            tracing::error!("invalid configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };

    match config.env_filter() {
        Ok(filter) => tracing_subscriber::fmt().with_env_filter(filter).init(),
        Err(err) => {
            tracing_subscriber::fmt::init();
            tracing::warn!("{}; falling back to default filter", err);
        }
    }

    tracing::info!(
        "Config loaded: addr_override={}, log_filter={}",
        config.has_addr_override(),
        config.log_filter
    );

    match smart_saver_web::server::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("server stopped: {}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
