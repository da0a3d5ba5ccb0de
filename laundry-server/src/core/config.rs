/// 服务器配置 - 订单台账服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (也可以写在 `.env` 中)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 4000 | HTTP 服务端口 |
/// | DATABASE_URL | mem:// | SurrealDB 连接串 (mem:// / rocksdb://path / ws://host:port) |
/// | DB_NAMESPACE | laundry | SurrealDB namespace |
/// | DB_NAME | laundry | SurrealDB database |
/// | DB_USER / DB_PASS | - | 远程数据库 root 登录 (可选) |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | - | 日志目录 (设置后按天滚动写文件) |
/// | LOG_JSON | false | 是否输出 JSON 日志 |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// DATABASE_URL=rocksdb://data/ledger HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 数据库连接串
    pub database_url: String,
    /// 数据库 namespace
    pub db_namespace: String,
    /// 数据库名
    pub db_name: String,
    /// 数据库登录用户 (仅远程连接需要)
    pub db_user: Option<String>,
    /// 数据库登录密码
    pub db_pass: Option<String>,
    /// 日志级别
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<String>,
    /// JSON 日志
    pub log_json: bool,
    /// 运行环境: development | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(4000),
            database_url: std::env::var("DATABASE_URL").unwrap_or_else(|_| "mem://".into()),
            db_namespace: std::env::var("DB_NAMESPACE").unwrap_or_else(|_| "laundry".into()),
            db_name: std::env::var("DB_NAME").unwrap_or_else(|_| "laundry".into()),
            db_user: std::env::var("DB_USER").ok().filter(|v| !v.is_empty()),
            db_pass: std::env::var("DB_PASS").ok().filter(|v| !v.is_empty()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|v| !v.is_empty()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 使用内存数据库的配置
    ///
    /// 常用于测试场景
    pub fn in_memory() -> Self {
        Self {
            http_port: 0,
            database_url: "mem://".into(),
            db_namespace: "test".into(),
            db_name: "test".into(),
            db_user: None,
            db_pass: None,
            log_level: "debug".into(),
            log_dir: None,
            log_json: false,
            environment: "development".into(),
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否使用内存数据库 (重启后数据丢失)
    pub fn is_ephemeral_store(&self) -> bool {
        self.database_url.starts_with("mem:")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
