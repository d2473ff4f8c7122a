use crate::{fatal, server, success};

pub async fn serve(addr: Option<String>) {
    let mut config = super::load_config();
    if let Some(addr) = addr {
        config.server_addr = addr;
    }

    success!(
        "Serving now-playing on http://{} ({} allowed origins)",
        config.server_addr,
        config.cors.allowed_origins().len()
    );

    if let Err(e) = server::start_api_server(config).await {
        fatal!("Server stopped. Err: {}", e);
    }
}
