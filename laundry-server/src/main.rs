use laundry_server::{Config, Server, ServerState, init_logger_with_file, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 加载 .env (不存在时忽略)
    dotenv::dotenv().ok();

    // 2. 加载配置
    let config = Config::from_env();

    // 3. 初始化日志 (guard 需要活到进程结束)
    let _log_guard = init_logger_with_file(
        Some(&config.log_level),
        Some(config.log_json),
        config.log_dir.as_deref(),
    );

    print_banner();
    tracing::info!(
        environment = %config.environment,
        database = %config.database_url,
        "Laundry server starting..."
    );

    if config.is_production() && config.is_ephemeral_store() {
        tracing::warn!("Production environment is running on an in-memory store");
    }

    // 4. 初始化服务器状态 (数据库连接失败不会中断启动)
    let state = ServerState::initialize(&config).await;

    // 5. 启动 HTTP 服务器
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
