use anyhow::{Ok, Result};

use super::config_model::{Auth, DotEnvyConfig, NodeApi, PortalServer};

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let portal_server = PortalServer {
        port: std::env::var("SERVER_PORT_PORTAL")
            .expect("SERVER_PORT_PORTAL is invalid")
            .parse()?,
        body_limit: std::env::var("SERVER_BODY_LIMIT")
            .expect("SERVER_BODY_LIMIT is invalid")
            .parse()?,
        timeout: std::env::var("SERVER_TIMEOUT")
            .expect("SERVER_TIMEOUT is invalid")
            .parse()?,
    };

    let node_api = NodeApi {
        base_url: std::env::var("NODE_API_BASE_URL").expect("NODE_API_BASE_URL is invalid"),
        api_key: std::env::var("NODE_API_KEY").expect("NODE_API_KEY is invalid"),
    };

    let auth = Auth {
        jwt_secret: std::env::var("PORTAL_JWT_SECRET").expect("PORTAL_JWT_SECRET is invalid"),
    };

    Ok(DotEnvyConfig {
        portal_server,
        node_api,
        auth,
    })
}
