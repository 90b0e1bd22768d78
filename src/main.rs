//! # rootweb - Entry Point
//! src/main.rs

use rootweb::config::Config;
use rootweb::logging;
use rootweb::server::Server;

fn main() {
    let config = Config::new();
    logging::init(&config.log_level);

    tracing::info!("rootweb HTTP/1.1 server v{}", env!("CARGO_PKG_VERSION"));
    config.print_summary();

    let server = match Server::bind(config) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!(error = %e, "no se pudo iniciar el servidor");
            std::process::exit(1);
        }
    };

    // Bloquea el thread principal
    if let Err(e) = server.run() {
        tracing::error!(error = %e, "error fatal");
        std::process::exit(1);
    }
}
