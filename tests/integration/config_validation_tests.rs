//! Configuration validation integration tests

#[cfg(test)]
mod tests {
    use keygate::config::{ApiKeyAuthConfig, Config, CorsConfig, GatewayConfig, ServerConfig};
    use keygate::server::ServerBuilder;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_gateway_config_valid() {
        let config = Config {
            gateway: GatewayConfig::default(),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_auth_config_surfaces_as_config_error() {
        let mut config = Config::default();
        config.gateway.auth = ApiKeyAuthConfig {
            header_name: "bad header".to_string(),
            ..ApiKeyAuthConfig::default()
        };

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Auth config error"));
    }

    #[test]
    fn test_invalid_server_config_surfaces_as_config_error() {
        let mut config = Config::default();
        config.gateway.server = ServerConfig {
            api_prefix: "/".to_string(),
            ..ServerConfig::default()
        };

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Server config error"));
    }

    #[test]
    fn test_cors_wildcard_with_credentials_rejected() {
        let mut config = Config::default();
        config.gateway.server.cors = CorsConfig {
            allow_credentials: true,
            ..CorsConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder_rejects_invalid_auth_config() {
        let mut config = Config::default();
        config.gateway.auth.header_name = "authorization".to_string();
        assert!(ServerBuilder::new().with_config(config).build().is_err());
    }

    #[tokio::test]
    async fn test_yaml_file_never_carries_keys() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"auth:\n  keys_env: STOREFRONT_API_KEYS\n").unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.auth().keys_env, "STOREFRONT_API_KEYS");

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("keys_env: STOREFRONT_API_KEYS"));
    }

    #[tokio::test]
    async fn test_unknown_log_format_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"logging:\n  format: xml\n").unwrap();

        assert!(Config::from_file(file.path()).await.is_err());
    }
}
