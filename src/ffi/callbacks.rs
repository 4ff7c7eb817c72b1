//! ### English
//! C callback tables and their adapters onto `RenderCallback` / `NativeWindow`.
//!
//! ### 中文
//! C 回调表及其到 `RenderCallback` / `NativeWindow` 的适配器。

use std::ffi::c_void;

use dpi::PhysicalSize;

use crate::surface::{NativeWindow, RenderCallback, RenderError, SurfaceHandle};

/// ### English
/// Callback taking only `user_data`. Returning `false` reports failure (logged, not fatal).
///
/// ### 中文
/// 只接收 `user_data` 的回调；返回 `false` 表示失败（会记录日志，但不致命）。
pub type Lanox2dCallback = Option<unsafe extern "C" fn(user_data: *mut c_void) -> bool>;

/// ### English
/// Callback taking `user_data` and a surface size in pixels (either may be 0).
///
/// ### 中文
/// 接收 `user_data` 与 surface 像素尺寸的回调（宽高都可能为 0）。
pub type Lanox2dSizeCallback =
    Option<unsafe extern "C" fn(user_data: *mut c_void, width: u32, height: u32) -> bool>;

/// ### English
/// Native window init: `user_data`, size in pixels and the platform surface pointer.
///
/// ### 中文
/// 原生窗口初始化：`user_data`、像素尺寸以及平台 surface 指针。
pub type Lanox2dInitWindowCallback = Option<
    unsafe extern "C" fn(user_data: *mut c_void, width: u32, height: u32, surface: *mut c_void) -> bool,
>;

/// ### English
/// Releases `user_data` once the table is no longer used.
///
/// ### 中文
/// 回调表不再使用时释放 `user_data`。
pub type Lanox2dReleaseCallback = Option<unsafe extern "C" fn(user_data: *mut c_void)>;

#[repr(C)]
#[derive(Clone, Copy, Debug)]
/// ### English
/// Render callback table. Every entry is optional; a NULL entry is treated as a successful no-op.
///
/// All entries are invoked on the dedicated render thread, one at a time. `release` is invoked
/// once on the render thread after `on_destroy`, or on the calling thread if the render thread
/// could not be started.
///
/// ### 中文
/// 渲染回调表。每一项都是可选的；NULL 项视为成功的空操作。
///
/// 所有回调都在独立渲染线程上逐个调用。`release` 会在 `on_destroy` 之后于渲染线程调用一次；
/// 若渲染线程未能启动，则在调用线程上调用。
pub struct Lanox2dRenderCallbacks {
    pub user_data: *mut c_void,
    pub on_surface_created: Lanox2dCallback,
    pub on_surface_changed: Lanox2dSizeCallback,
    pub on_draw_frame: Lanox2dCallback,
    pub on_pause: Lanox2dCallback,
    pub on_resume: Lanox2dCallback,
    pub on_destroy: Lanox2dCallback,
    pub release: Lanox2dReleaseCallback,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
/// ### English
/// Native window table used by the surface view. `init_window` is required; the other entries
/// are optional and a NULL entry is treated as a successful no-op.
///
/// ### 中文
/// surface view 使用的原生窗口回调表。`init_window` 为必填；其它项可选，NULL 项视为成功的空操作。
pub struct Lanox2dNativeWindowCallbacks {
    pub user_data: *mut c_void,
    pub init_window: Lanox2dInitWindowCallback,
    pub resize_window: Lanox2dSizeCallback,
    pub draw_window: Lanox2dCallback,
    pub exit_window: Lanox2dCallback,
    pub release: Lanox2dReleaseCallback,
}

/// ### English
/// Calls an optional `user_data`-only callback.
///
/// # Safety
/// `f` must be NULL or a valid function pointer accepting `user_data`.
///
/// ### 中文
/// 调用可选的仅 `user_data` 回调。
///
/// # Safety
/// `f` 必须为 NULL，或为接受 `user_data` 的有效函数指针。
unsafe fn call(
    f: Lanox2dCallback,
    user_data: *mut c_void,
    name: &'static str,
) -> Result<(), RenderError> {
    match f {
        Some(f) if !unsafe { f(user_data) } => Err(RenderError::Native(name)),
        _ => Ok(()),
    }
}

unsafe fn call_size(
    f: Lanox2dSizeCallback,
    user_data: *mut c_void,
    size: PhysicalSize<u32>,
    name: &'static str,
) -> Result<(), RenderError> {
    match f {
        Some(f) if !unsafe { f(user_data, size.width, size.height) } => {
            Err(RenderError::Native(name))
        }
        _ => Ok(()),
    }
}

/// ### English
/// `RenderCallback` backed by a C callback table.
///
/// ### 中文
/// 由 C 回调表实现的 `RenderCallback`。
pub(super) struct ExternRenderCallback {
    table: Lanox2dRenderCallbacks,
}

// SAFETY: the embedder guarantees (see `ExternRenderCallback::new`) that the table and its
// `user_data` may be used from the render thread; the render thread is the only user.
unsafe impl Send for ExternRenderCallback {}

impl ExternRenderCallback {
    /// ### English
    /// # Safety
    /// The function pointers must be valid and callable from another thread, and `user_data`
    /// must stay valid until `release` is called.
    ///
    /// ### 中文
    /// # Safety
    /// 函数指针必须有效且可以在其它线程调用；`user_data` 必须在 `release` 调用之前保持有效。
    pub(super) unsafe fn new(table: Lanox2dRenderCallbacks) -> Self {
        Self { table }
    }
}

impl RenderCallback for ExternRenderCallback {
    fn on_surface_created(&mut self) -> Result<(), RenderError> {
        unsafe {
            call(
                self.table.on_surface_created,
                self.table.user_data,
                "on_surface_created",
            )
        }
    }

    fn on_surface_changed(&mut self, size: PhysicalSize<u32>) -> Result<(), RenderError> {
        unsafe {
            call_size(
                self.table.on_surface_changed,
                self.table.user_data,
                size,
                "on_surface_changed",
            )
        }
    }

    fn on_draw_frame(&mut self) -> Result<(), RenderError> {
        unsafe { call(self.table.on_draw_frame, self.table.user_data, "on_draw_frame") }
    }

    fn on_pause(&mut self) -> Result<(), RenderError> {
        unsafe { call(self.table.on_pause, self.table.user_data, "on_pause") }
    }

    fn on_resume(&mut self) -> Result<(), RenderError> {
        unsafe { call(self.table.on_resume, self.table.user_data, "on_resume") }
    }

    fn on_destroy(&mut self) -> Result<(), RenderError> {
        unsafe { call(self.table.on_destroy, self.table.user_data, "on_destroy") }
    }
}

impl Drop for ExternRenderCallback {
    fn drop(&mut self) {
        if let Some(release) = self.table.release {
            unsafe { release(self.table.user_data) };
        }
    }
}

/// ### English
/// `NativeWindow` backed by a C callback table.
///
/// ### 中文
/// 由 C 回调表实现的 `NativeWindow`。
pub(super) struct ExternNativeWindow {
    table: Lanox2dNativeWindowCallbacks,
}

// SAFETY: same contract as `ExternRenderCallback`.
unsafe impl Send for ExternNativeWindow {}

impl ExternNativeWindow {
    /// ### English
    /// # Safety
    /// Same contract as `ExternRenderCallback::new`.
    ///
    /// ### 中文
    /// # Safety
    /// 约定与 `ExternRenderCallback::new` 相同。
    pub(super) unsafe fn new(table: Lanox2dNativeWindowCallbacks) -> Self {
        Self { table }
    }
}

impl NativeWindow for ExternNativeWindow {
    fn init_window(
        &mut self,
        size: PhysicalSize<u32>,
        surface: SurfaceHandle,
    ) -> Result<(), RenderError> {
        let Some(init) = self.table.init_window else {
            return Err(RenderError::Native("init_window"));
        };
        if unsafe { init(self.table.user_data, size.width, size.height, surface.as_ptr()) } {
            Ok(())
        } else {
            Err(RenderError::Native("init_window"))
        }
    }

    fn resize_window(&mut self, size: PhysicalSize<u32>) -> Result<(), RenderError> {
        unsafe {
            call_size(
                self.table.resize_window,
                self.table.user_data,
                size,
                "resize_window",
            )
        }
    }

    fn draw_window(&mut self) -> Result<(), RenderError> {
        unsafe { call(self.table.draw_window, self.table.user_data, "draw_window") }
    }

    fn exit_window(&mut self) -> Result<(), RenderError> {
        unsafe { call(self.table.exit_window, self.table.user_data, "exit_window") }
    }
}

impl Drop for ExternNativeWindow {
    fn drop(&mut self) {
        if let Some(release) = self.table.release {
            unsafe { release(self.table.user_data) };
        }
    }
}
