pub const DEFAULT_DATABASE_PATH: &str = "tournament.db";
pub const DEFAULT_POOL_SIZE: u32 = 4;
pub const DEFAULT_CONNECTION_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseSettings {
    pub path: String,
    pub pool_size: u32,
    /// How long a pool checkout may wait before giving up.
    pub connection_timeout_ms: u64,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATABASE_PATH.to_string(),
            pool_size: DEFAULT_POOL_SIZE,
            connection_timeout_ms: DEFAULT_CONNECTION_TIMEOUT_MS,
        }
    }
}

impl DatabaseSettings {
    /// Reads `DATABASE_PATH`, `DATABASE_POOL_SIZE` and
    /// `DATABASE_CONNECTION_TIMEOUT_MS`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let path = lookup("DATABASE_PATH")
            .filter(|p| !p.trim().is_empty())
            .unwrap_or(defaults.path);

        let pool_size = positive_or_default(&lookup, "DATABASE_POOL_SIZE", defaults.pool_size);
        let connection_timeout_ms = positive_or_default(
            &lookup,
            "DATABASE_CONNECTION_TIMEOUT_MS",
            defaults.connection_timeout_ms,
        );

        Self {
            path,
            pool_size,
            connection_timeout_ms,
        }
    }
}

fn positive_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + PartialOrd + Default + std::fmt::Display + Copy,
{
    match lookup(key) {
        Some(raw) => parse_positive(&raw).unwrap_or_else(|| {
            log::warn!("Ignoring invalid {} {:?}, using {}", key, raw, default);
            default
        }),
        None => default,
    }
}

fn parse_positive<T>(raw: &str) -> Option<T>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    raw.trim().parse::<T>().ok().filter(|value| *value > T::default())
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub database: DatabaseSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            database: DatabaseSettings::from_env(),
        }
    }

    /// Replaces the database path when one was given on the command line.
    pub fn with_database_path(mut self, path: Option<String>) -> Self {
        if let Some(path) = path {
            self.database.path = path;
        }
        self
    }
}
