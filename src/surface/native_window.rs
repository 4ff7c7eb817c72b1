//! ### English
//! Bridge from the render callback contract to a native engine window
//! (init/resize/draw/exit bound to a platform surface).
//!
//! ### 中文
//! 从渲染回调约定到原生引擎窗口的桥接
//! （绑定平台 surface 的 init/resize/draw/exit）。

use std::ffi::c_void;
use std::sync::Arc;

use dpi::PhysicalSize;
use parking_lot::Mutex;

use super::callback::RenderCallback;
use super::error::RenderError;

/// ### English
/// Opaque platform surface (e.g. an `ANativeWindow*`), stored as an address so it can cross
/// threads. This crate never dereferences it; it is only handed to the native engine.
///
/// ### 中文
/// 不透明的平台 surface（例如 `ANativeWindow*`），以地址形式保存以便跨线程传递。
/// 本 crate 从不解引用它，只会把它交给原生引擎。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceHandle(usize);

impl SurfaceHandle {
    /// ### English
    /// Wraps a raw surface pointer. Returns `None` for NULL.
    ///
    /// ### 中文
    /// 包装原始 surface 指针；NULL 返回 `None`。
    pub fn from_ptr(ptr: *mut c_void) -> Option<Self> {
        (!ptr.is_null()).then_some(Self(ptr as usize))
    }

    pub fn as_ptr(self) -> *mut c_void {
        self.0 as *mut c_void
    }
}

/// ### English
/// The surface currently attached by the platform; written by the UI thread, read by the
/// renderer when it (re)initializes the native window.
///
/// ### 中文
/// 平台当前挂载的 surface；由 UI 线程写入，渲染器（重新）初始化原生窗口时读取。
#[derive(Debug, Default)]
pub struct SurfaceSlot {
    current: Mutex<Option<SurfaceHandle>>,
}

impl SurfaceSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&self, surface: SurfaceHandle) {
        *self.current.lock() = Some(surface);
    }

    pub fn detach(&self) -> Option<SurfaceHandle> {
        self.current.lock().take()
    }

    pub fn get(&self) -> Option<SurfaceHandle> {
        *self.current.lock()
    }
}

/// ### English
/// Native engine window entry points.
///
/// ### 中文
/// 原生引擎窗口入口。
pub trait NativeWindow: Send + 'static {
    /// ### English
    /// Creates the native window bound to `surface`.
    ///
    /// ### 中文
    /// 创建绑定到 `surface` 的原生窗口。
    fn init_window(
        &mut self,
        size: PhysicalSize<u32>,
        surface: SurfaceHandle,
    ) -> Result<(), RenderError>;

    fn resize_window(&mut self, size: PhysicalSize<u32>) -> Result<(), RenderError>;

    fn draw_window(&mut self) -> Result<(), RenderError>;

    /// ### English
    /// Tears the native window down.
    ///
    /// ### 中文
    /// 销毁原生窗口。
    fn exit_window(&mut self) -> Result<(), RenderError>;
}

/// ### English
/// `RenderCallback` that drives a `NativeWindow`.
///
/// - The window is created lazily on the first `on_surface_changed` (the size is only known then).
/// - Later changes resize it; frames are drawn only once it exists.
/// - A new surface instance (`on_surface_created`) tears the old window down first.
///
/// ### 中文
/// 驱动 `NativeWindow` 的 `RenderCallback`。
///
/// - 窗口在第一次 `on_surface_changed` 时才创建（此时才知道尺寸）。
/// - 之后的尺寸变化会 resize；窗口存在后才绘制帧。
/// - 新的 surface 实例（`on_surface_created`）会先销毁旧窗口。
#[derive(Debug)]
pub struct NativeWindowRenderer<W> {
    window: W,
    surface: Arc<SurfaceSlot>,
    /// ### English
    /// Whether `init_window` succeeded and the window has not been torn down since.
    ///
    /// ### 中文
    /// `init_window` 是否成功且此后尚未销毁窗口。
    started: bool,
}

impl<W: NativeWindow> NativeWindowRenderer<W> {
    pub fn new(window: W, surface: Arc<SurfaceSlot>) -> Self {
        Self {
            window,
            surface,
            started: false,
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    fn stop(&mut self) -> Result<(), RenderError> {
        if !self.started {
            return Ok(());
        }
        self.started = false;
        self.window.exit_window()
    }
}

impl<W: NativeWindow> RenderCallback for NativeWindowRenderer<W> {
    fn on_surface_created(&mut self) -> Result<(), RenderError> {
        self.stop()
    }

    fn on_surface_changed(&mut self, size: PhysicalSize<u32>) -> Result<(), RenderError> {
        if self.started {
            return self.window.resize_window(size);
        }

        let surface = self.surface.get().ok_or(RenderError::NoSurface)?;
        self.window.init_window(size, surface)?;
        self.started = true;
        log::info!(
            "native window started at {}x{} on surface {:p}",
            size.width,
            size.height,
            surface.as_ptr()
        );
        Ok(())
    }

    fn on_draw_frame(&mut self) -> Result<(), RenderError> {
        if !self.started {
            return Ok(());
        }
        self.window.draw_window()
    }

    fn on_destroy(&mut self) -> Result<(), RenderError> {
        self.stop()
    }
}
