//! ### English
//! Render callback contract invoked by the dedicated render thread.
//!
//! ### 中文
//! 由独立渲染线程调用的渲染回调约定。

use dpi::PhysicalSize;

use super::error::RenderError;

/// ### English
/// Native-engine side of the render loop.
///
/// Every method is called from the render thread only, one at a time, and never while the
/// lifecycle monitor is held, so implementations may block (they usually cross into native code).
///
/// Call order while becoming ready: `on_resume` → `on_surface_created` → `on_surface_changed`
/// → `on_draw_frame`. `on_destroy` is terminal and called exactly once.
///
/// ### 中文
/// 渲染循环的原生引擎侧接口。
///
/// 所有方法仅在渲染线程上逐个调用，且调用时不持有生命周期监视器锁，因此实现可以阻塞
/// （通常会进入原生代码）。
///
/// 进入 ready 时的调用顺序：`on_resume` → `on_surface_created` → `on_surface_changed`
/// → `on_draw_frame`。`on_destroy` 为终止调用，且只调用一次。
pub trait RenderCallback: Send + 'static {
    /// ### English
    /// Called once per surface instance before any draw; binds engine state to the surface.
    ///
    /// ### 中文
    /// 每个 surface 实例在首次绘制前调用一次；将引擎状态绑定到该 surface。
    fn on_surface_created(&mut self) -> Result<(), RenderError>;

    /// ### English
    /// Called whenever the surface geometry changes while ready. Either dimension may be 0.
    ///
    /// ### 中文
    /// ready 状态下 surface 尺寸变化时调用；宽高都可能为 0。
    fn on_surface_changed(&mut self, size: PhysicalSize<u32>) -> Result<(), RenderError>;

    /// ### English
    /// Called once per loop iteration while ready.
    ///
    /// ### 中文
    /// ready 状态下每次循环调用一次。
    fn on_draw_frame(&mut self) -> Result<(), RenderError>;

    fn on_pause(&mut self) -> Result<(), RenderError> {
        Ok(())
    }

    fn on_resume(&mut self) -> Result<(), RenderError> {
        Ok(())
    }

    /// ### English
    /// Terminal call: release every native resource tied to the surface.
    ///
    /// ### 中文
    /// 终止调用：释放与 surface 相关的全部原生资源。
    fn on_destroy(&mut self) -> Result<(), RenderError>;
}

impl<C: RenderCallback + ?Sized> RenderCallback for Box<C> {
    fn on_surface_created(&mut self) -> Result<(), RenderError> {
        (**self).on_surface_created()
    }

    fn on_surface_changed(&mut self, size: PhysicalSize<u32>) -> Result<(), RenderError> {
        (**self).on_surface_changed(size)
    }

    fn on_draw_frame(&mut self) -> Result<(), RenderError> {
        (**self).on_draw_frame()
    }

    fn on_pause(&mut self) -> Result<(), RenderError> {
        (**self).on_pause()
    }

    fn on_resume(&mut self) -> Result<(), RenderError> {
        (**self).on_resume()
    }

    fn on_destroy(&mut self) -> Result<(), RenderError> {
        (**self).on_destroy()
    }
}
