// ============================================================================
// Configuration - read from the process environment
// ============================================================================

const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    /// sqlx connection string, e.g. `sqlite://orders.db` or `sqlite::memory:`
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>, max_connections: u32) -> Self {
        let url = url.into();
        // Every connection to `:memory:` opens its own empty database.
        let max_connections = if is_in_memory(&url) {
            1
        } else {
            max_connections.max(1)
        };

        Self { url, max_connections }
    }

    pub fn in_memory() -> Self {
        Self::new(DEFAULT_DATABASE_URL, 1)
    }

    /// `DATABASE_URL` and `DATABASE_MAX_CONNECTIONS`, falling back to an
    /// in-memory database.
    pub fn from_env() -> Self {
        let url = std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| {
                s.parse()
                    .map_err(|e| {
                        tracing::warn!("Invalid DATABASE_MAX_CONNECTIONS value '{}': {}", s, e);
                        e
                    })
                    .ok()
            })
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        let config = Self::new(url, max_connections);
        tracing::info!(
            url = %config.url,
            max_connections = config.max_connections,
            "Database configuration loaded"
        );
        config
    }

    pub fn is_in_memory(&self) -> bool {
        is_in_memory(&self.url)
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_is_single_connection() {
        let config = DatabaseConfig::new("sqlite::memory:", 10);

        assert!(config.is_in_memory());
        assert_eq!(config.max_connections, 1);
    }

    #[test]
    fn test_file_database_keeps_pool_size() {
        let config = DatabaseConfig::new("sqlite://orders.db", 8);

        assert!(!config.is_in_memory());
        assert_eq!(config.max_connections, 8);
    }

    #[test]
    fn test_zero_connections_is_raised_to_one() {
        let config = DatabaseConfig::new("sqlite://orders.db", 0);
        assert_eq!(config.max_connections, 1);
    }

    #[test]
    fn test_default_is_in_memory() {
        assert_eq!(DatabaseConfig::default(), DatabaseConfig::in_memory());
    }
}
