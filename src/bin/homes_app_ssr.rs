use homes_app::{server, logging, Variant};

fn main() {
    logging::init();

    if let Err(e) = homes_app::bootstrap(Variant::Server, server::app_config()) {
        tracing::error!("failed to start {}: {}", Variant::Server, e);
        std::process::exit(1);
    }
}
