use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

const DEFAULT_ENVIRONMENT: &str = "development";

// 内置默认值，配置文件缺失时也能启动
const STRING_DEFAULTS: &[(&str, &str)] = &[
    ("app.system_name", "Classroom"),
    ("app.environment", DEFAULT_ENVIRONMENT),
    ("app.log_level", "info"),
    ("server.host", "127.0.0.1"),
    ("server.unix_socket_path", ""),
    ("database.url", "classroom.db"),
    ("upload.dir", "uploads"),
    ("vocabulary.path", "vocabulary.json"),
    ("seed.teacher_name", "Teacher"),
    ("seed.teacher_email", "teacher@localhost"),
];

const NUMBER_DEFAULTS: &[(&str, i64)] = &[
    ("server.port", 5000),
    ("server.workers", 0),
    ("server.max_workers", 8),
    ("server.timeouts.client_request", 5000),
    ("server.timeouts.client_disconnect", 1000),
    ("server.timeouts.keep_alive", 30),
    ("server.limits.max_payload_size", 20 * 1024 * 1024),
    ("database.pool_size", 10),
    ("database.timeout", 30),
    ("cors.max_age", 3600),
    ("upload.max_size", 20 * 1024 * 1024),
];

// 部署环境常用的变量名，优先级最高
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("APP_ENV", "app.environment"),
    ("RUST_LOG", "app.log_level"),
    ("SERVER_HOST", "server.host"),
    ("SERVER_PORT", "server.port"),
    ("UNIX_SOCKET", "server.unix_socket_path"),
    ("CPU_COUNT", "server.workers"),
    ("DATABASE_URL", "database.url"),
    ("UPLOAD_DIR", "upload.dir"),
    ("VOCABULARY_PATH", "vocabulary.path"),
];

/// workers 为 0 时按 CPU 核数决定，且不超过 max_workers
fn resolve_workers(workers: usize, max_workers: usize, cpus: usize) -> usize {
    if workers == 0 {
        cpus.clamp(1, max_workers.max(1))
    } else {
        workers
    }
}

impl AppConfig {
    fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let mut builder = Config::builder();
        for (key, value) in STRING_DEFAULTS {
            builder = builder.set_default(*key, *value)?;
        }
        for (key, value) in NUMBER_DEFAULTS {
            builder = builder.set_default(*key, *value)?;
        }
        Ok(builder)
    }

    /// 加载配置
    ///
    /// 优先级从低到高：内置默认值、`config.toml`、`config.{APP_ENV}.toml`、
    /// `CLASSROOM__*` 环境变量、`ENV_OVERRIDES` 中的变量。
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("APP_ENV").unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());

        let mut builder = Self::with_defaults()?
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name(&format!("config.{environment}")).required(false))
            .add_source(
                Environment::with_prefix("CLASSROOM")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        for (var, key) in ENV_OVERRIDES {
            builder = builder.set_override_option(*key, std::env::var(var).ok())?;
        }

        let mut app_config: AppConfig = builder.build()?.try_deserialize()?;
        app_config.server.workers = resolve_workers(
            app_config.server.workers,
            app_config.server.max_workers,
            num_cpus::get(),
        );

        if app_config.upload.max_size == 0 {
            return Err(ConfigError::Message(
                "upload.max_size must be greater than 0".to_string(),
            ));
        }

        Ok(app_config)
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))
    }

    pub fn is_development(&self) -> bool {
        self.app.environment == DEFAULT_ENVIRONMENT
    }

    /// TCP 监听地址
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Unix 套接字路径，未配置时为 None
    #[cfg(unix)]
    pub fn unix_socket_path(&self) -> Option<&str> {
        Some(self.server.unix_socket_path.as_str()).filter(|p| !p.is_empty())
    }
}
