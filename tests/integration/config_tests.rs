//! Configuration loading tests

#[cfg(test)]
mod tests {
    use items_rs::config::Config;
    use items_rs::server::ServerBuilder;
    use items_rs::storage::StorageBackend;

    fn shipped_config_path() -> String {
        format!("{}/config/items.yaml", env!("CARGO_MANIFEST_DIR"))
    }

    #[tokio::test]
    async fn test_shipped_config_matches_defaults() {
        let config = Config::from_file(shipped_config_path()).await.unwrap();
        let defaults = Config::default();

        assert_eq!(config.server.address(), defaults.server.address());
        assert_eq!(config.batch.workers, defaults.batch.workers);
        assert_eq!(config.batch.unit_delay_ms, defaults.batch.unit_delay_ms);
        assert_eq!(config.storage.database.enabled, defaults.storage.database.enabled);
        assert_eq!(config.logging.level, defaults.logging.level);
    }

    #[tokio::test]
    async fn test_server_builds_from_database_config() {
        let config = Config::from_yaml(
            r#"
storage:
  database:
    enabled: true
    url: "sqlite::memory:"
batch:
  workers: 3
"#,
        )
        .unwrap();

        let server = ServerBuilder::new().with_config(config).build().await.unwrap();

        assert_eq!(server.state().storage.backend(), StorageBackend::Database);
        assert_eq!(server.state().processor.pool().size(), 3);
        assert!(server.state().storage.health_check().await.is_ok());
    }

    #[test]
    fn test_enabled_database_needs_url() {
        let result = Config::from_yaml(
            r#"
storage:
  database:
    enabled: true
    url: ""
"#,
        );
        assert!(result.is_err());
    }
}
