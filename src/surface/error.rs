//! ### English
//! Error types for render callbacks and render-thread startup.
//!
//! ### 中文
//! 渲染回调与渲染线程启动相关的错误类型。

use thiserror::Error;

/// ### English
/// Failure reported by a render callback or a native window call.
///
/// These never escape the render loop: they are logged and the loop moves on.
///
/// ### 中文
/// 渲染回调或原生窗口调用报告的失败。
///
/// 这些错误不会逃出渲染循环：记录日志后循环继续。
#[derive(Debug, Error)]
pub enum RenderError {
    /// ### English
    /// A native entry point reported failure (the name identifies the call).
    ///
    /// ### 中文
    /// 原生入口报告失败（名称标识具体调用）。
    #[error("native call `{0}` reported failure")]
    Native(&'static str),
    /// ### English
    /// Native window init was requested while no platform surface is attached.
    ///
    /// ### 中文
    /// 请求初始化原生窗口时没有挂载平台 surface。
    #[error("no platform surface is attached")]
    NoSurface,
    #[error("{0}")]
    Message(String),
}

/// ### English
/// The dedicated render thread could not be started.
///
/// ### 中文
/// 无法启动独立渲染线程。
#[derive(Debug, Error)]
pub enum SpawnError {
    #[error("failed to spawn render thread `{name}`: {source}")]
    Thread {
        name: String,
        #[source]
        source: std::io::Error,
    },
}
