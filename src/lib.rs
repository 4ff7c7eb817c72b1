/// ### English
/// `lanox2d_surface` crate root.
/// Exposes the C ABI via `ffi`; the render-surface lifecycle coordinator lives under `surface`.
///
/// ### 中文
/// `lanox2d_surface` 的 crate 根。
/// 通过 `ffi` 导出 C ABI；渲染 surface 生命周期协调器位于 `surface` 模块。
pub mod ffi;
pub mod surface;

pub use surface::{
    LifecycleController, NativeWindow, NativeWindowRenderer, RenderCallback, RenderError,
    SpawnError, SurfaceHandle, SurfaceSlot, SurfaceThreadOptions, SurfaceView,
};
