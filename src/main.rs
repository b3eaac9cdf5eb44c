//=========================================================================
// Glidebox binary
//
// Initializes logging (`RUST_LOG`, default `info`) and runs the app.
//
//=========================================================================

use glidebox::AppBuilder;

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();

    if let Err(e) = AppBuilder::new().build().run() {
        log::error!("Fatal: {}", e);
        std::process::exit(1);
    }
}
