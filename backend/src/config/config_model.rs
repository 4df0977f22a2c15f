#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub portal_server: PortalServer,
    pub node_api: NodeApi,
    pub auth: Auth,
}

#[derive(Debug, Clone)]
pub struct PortalServer {
    pub port: u16,
    pub body_limit: u64,
    pub timeout: u64,
}

/// Connection details for the external billing API.
#[derive(Debug, Clone)]
pub struct NodeApi {
    pub base_url: String,
    pub api_key: String,
}

#[derive(Debug, Clone)]
pub struct Auth {
    pub jwt_secret: String,
}
