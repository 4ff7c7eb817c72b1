//! ### English
//! Render-thread configuration.
//!
//! ### 中文
//! 渲染线程配置。

/// ### English
/// Default name given to the dedicated render thread.
///
/// ### 中文
/// 独立渲染线程的默认名称。
pub const DEFAULT_THREAD_NAME: &str = "SurfaceThread";

/// ### English
/// Options applied when spawning the dedicated render thread.
///
/// ### 中文
/// 创建独立渲染线程时使用的选项。
#[derive(Clone, Debug)]
pub struct SurfaceThreadOptions {
    /// ### English
    /// Thread name (shows up in logs, debuggers and `/proc`).
    ///
    /// ### 中文
    /// 线程名称（会出现在日志、调试器与 `/proc` 中）。
    pub name: String,
    /// ### English
    /// Stack size in bytes; `None` uses the platform default.
    ///
    /// ### 中文
    /// 栈大小（字节）；`None` 表示使用平台默认值。
    pub stack_size: Option<usize>,
}

impl Default for SurfaceThreadOptions {
    fn default() -> Self {
        Self {
            name: DEFAULT_THREAD_NAME.to_string(),
            stack_size: None,
        }
    }
}

impl SurfaceThreadOptions {
    /// ### English
    /// Builds options from raw embedder values.
    ///
    /// An empty `name` falls back to the default name; `stack_size = 0` means "platform default".
    ///
    /// #### Parameters
    /// - `name`: Optional thread name.
    /// - `stack_size`: Stack size in bytes (`0` means default).
    ///
    /// ### 中文
    /// 根据宿主传入的原始值构建选项。
    ///
    /// `name` 为空时使用默认名称；`stack_size = 0` 表示“平台默认”。
    ///
    /// #### 参数
    /// - `name`：可选的线程名称。
    /// - `stack_size`：栈大小（字节，`0` 表示默认）。
    pub fn from_raw(name: Option<String>, stack_size: usize) -> Self {
        let name = name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_THREAD_NAME.to_string());
        let stack_size = (stack_size != 0).then_some(stack_size);
        Self { name, stack_size }
    }

    pub(crate) fn builder(&self) -> std::thread::Builder {
        let builder = std::thread::Builder::new().name(self.name.clone());
        match self.stack_size {
            Some(size) => builder.stack_size(size),
            None => builder,
        }
    }
}
