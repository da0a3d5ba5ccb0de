use std::net::SocketAddr;

use thiserror::Error;

/// 服务器启动 / 运行期错误
///
/// 请求级错误走 [`shared::error::AppError`]，这里只覆盖进程级故障。
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("http server error: {0}")]
    Serve(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
