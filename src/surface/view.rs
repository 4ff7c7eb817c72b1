//! ### English
//! Surface view facade: the object the platform view layer talks to.
//!
//! ### 中文
//! Surface view 门面：平台 view 层直接交互的对象。

use std::sync::Arc;

use dpi::PhysicalSize;

use super::callback::RenderCallback;
use super::controller::LifecycleController;
use super::error::SpawnError;
use super::native_window::{NativeWindow, NativeWindowRenderer, SurfaceHandle, SurfaceSlot};
use super::options::SurfaceThreadOptions;

/// ### English
/// Forwards platform view/activity events to the render thread, if one is running, and keeps
/// track of the attached platform surface.
///
/// ### 中文
/// 将平台 view/Activity 事件转发给渲染线程（若已启动），并记录当前挂载的平台 surface。
#[derive(Debug, Default)]
pub struct SurfaceView {
    /// ### English
    /// Render thread controller; `None` until a renderer is started.
    ///
    /// ### 中文
    /// 渲染线程控制器；启动渲染器之前为 `None`。
    thread: Option<LifecycleController>,
    surface: Arc<SurfaceSlot>,
}

impl SurfaceView {
    /// ### English
    /// Creates a view and starts a render thread driving `window`.
    ///
    /// ### 中文
    /// 创建 view 并启动驱动 `window` 的渲染线程。
    pub fn new<W: NativeWindow>(
        window: W,
        options: SurfaceThreadOptions,
    ) -> Result<Self, SpawnError> {
        let mut view = Self::default();
        let renderer = NativeWindowRenderer::new(window, view.surface.clone());
        view.start_renderer(options, renderer)?;
        Ok(view)
    }

    /// ### English
    /// Starts a render thread for `renderer`. An already running renderer is shut down first.
    ///
    /// ### 中文
    /// 为 `renderer` 启动渲染线程；若已有渲染器在运行，会先将其关闭。
    pub fn start_renderer<C: RenderCallback>(
        &mut self,
        options: SurfaceThreadOptions,
        renderer: C,
    ) -> Result<(), SpawnError> {
        if let Some(previous) = self.thread.take() {
            previous.blocking_exit();
        }
        self.thread = Some(LifecycleController::spawn_with(options, renderer)?);
        Ok(())
    }

    pub fn surface_slot(&self) -> &Arc<SurfaceSlot> {
        &self.surface
    }

    pub fn controller(&self) -> Option<&LifecycleController> {
        self.thread.as_ref()
    }

    pub fn on_pause(&self) {
        if let Some(thread) = &self.thread {
            thread.on_pause();
        }
    }

    pub fn on_resume(&self) {
        if let Some(thread) = &self.thread {
            thread.on_resume();
        }
    }

    /// ### English
    /// The platform created `surface`; it becomes the surface the native window binds to.
    ///
    /// ### 中文
    /// 平台创建了 `surface`；它将成为原生窗口绑定的 surface。
    pub fn surface_created(&self, surface: SurfaceHandle) {
        self.surface.attach(surface);
        if let Some(thread) = &self.thread {
            thread.on_surface_created();
        }
    }

    /// ### English
    /// The platform surface changed size.
    ///
    /// ### 中文
    /// 平台 surface 尺寸变化。
    pub fn surface_changed(&self, size: PhysicalSize<u32>) {
        if let Some(thread) = &self.thread {
            thread.on_surface_changed(size);
        }
    }

    pub fn surface_destroyed(&self) {
        if let Some(thread) = &self.thread {
            thread.on_surface_destroyed();
        }
        self.surface.detach();
    }

    /// ### English
    /// Blocks until the render thread has torn the renderer down.
    ///
    /// ### 中文
    /// 阻塞直到渲染线程完成渲染器的销毁。
    pub fn on_destroy(&self) {
        if let Some(thread) = &self.thread {
            thread.blocking_exit();
        }
    }
}
