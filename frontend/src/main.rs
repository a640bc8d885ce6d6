use clinic_admin_frontend::components::{App, AppProps};
use clinic_admin_frontend::config::BackendConfig;
use clinic_admin_frontend::logging;

fn main() {
    let config = BackendConfig::from_build_env();
    logging::init(&config);

    if let Err(err) = config.validate() {
        tracing::error!(error = %err, "invalid backend configuration");
    }

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
