use homes_app::{client, logging, Variant};

fn main() {
    logging::init();

    if let Err(e) = homes_app::bootstrap(Variant::Client, client::app_config()) {
        tracing::error!("failed to start {}: {}", Variant::Client, e);
        std::process::exit(1);
    }
}
