use tracing_subscriber::EnvFilter;
use xhs_copilot::config::{AppConfig, load_dotenv};

fn main() {
    load_dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,xhs_copilot=debug")),
        )
        .init();

    // Missing credentials only warn; the UI still loads and requests fail later.
    AppConfig::from_env().warn_if_unconfigured();

    dioxus::launch(xhs_copilot::ui::App);
}
