use std::sync::Arc;
use std::time::Instant;

use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::{CredentialRepository, OrderRepository};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc / 句柄实现浅拷贝，每个请求拿到的都是同一组服务。
/// 状态本身不可变，请求之间不共享可变数据。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Arc<Config> | 配置项 (不可变) |
/// | db | DbService | SurrealDB 连接 |
/// | orders | OrderRepository | 订单表访问 |
/// | credentials | CredentialRepository | 凭据表访问 (只读) |
/// | started_at | Instant | 启动时间 (health 使用) |
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub db: DbService,
    pub orders: OrderRepository,
    pub credentials: CredentialRepository,
    pub started_at: Instant,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 数据库连接失败不会中断启动 (见 [`DbService::connect`])。
    pub async fn initialize(config: &Config) -> Self {
        let db = DbService::connect(config).await;
        Self::with_db(config.clone(), db)
    }

    /// 使用已有的数据库连接构建状态
    pub fn with_db(config: Config, db: DbService) -> Self {
        Self {
            config: Arc::new(config),
            orders: OrderRepository::new(db.db.clone()),
            credentials: CredentialRepository::new(db.db.clone()),
            db,
            started_at: Instant::now(),
        }
    }

    /// 运行时长 (秒)
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
