//! Laundry Server - 洗衣订单台账后端
//!
//! # 架构概述
//!
//! 单进程 HTTP 服务，提供以下核心功能：
//!
//! - **PIN 校验** (`auth`): PBKDF2-HMAC-SHA256 派生 + 常量时间比较
//! - **订单台账** (`db`): SurrealDB 存储的订单列表、新建和状态更新
//! - **HTTP API** (`api`): JSON 接口，允许任意来源跨域访问
//!
//! # 模块结构
//!
//! ```text
//! laundry-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── auth/          # 凭据派生与校验
//! ├── api/           # HTTP 路由和处理器
//! ├── middleware/    # 请求日志
//! ├── utils/         # 日志、校验、提取器
//! └── db/            # 数据库层
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod middleware;
pub mod utils;

// Re-export 公共类型
pub use auth::StoredCredential;
pub use core::{Config, Server, ServerState};
pub use db::DbService;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 事件写入 "security" target，不带任何凭据内容
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr $(, $key:ident = $value:expr)* $(,)?) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value,)*
            "security event"
        );
    };
}

pub fn print_banner() {
    println!(
        r#"
    __                          __
   / /   ____ ___  ______  ____/ /______  __
  / /   / __ `/ / / / __ \/ __  / ___/ / / /
 / /___/ /_/ / /_/ / / / / /_/ / /  / /_/ /
/_____/\__,_/\__,_/_/ /_/\__,_/_/   \__, /
                                   /____/
    "#
    );
}
