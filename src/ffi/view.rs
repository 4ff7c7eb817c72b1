//! ### English
//! C ABI bindings for the surface view (render thread driving a native window).
//!
//! ### 中文
//! surface view 的 C ABI 绑定（渲染线程驱动原生窗口）。

use std::ffi::{c_char, c_void};

use super::callbacks::{ExternNativeWindow, Lanox2dNativeWindowCallbacks};
use super::{Lanox2dSurfaceView, surface_size, thread_options};
use crate::surface::{SurfaceHandle, SurfaceView};

#[unsafe(no_mangle)]
/// ### English
/// Creates a surface view and starts its render thread.
///
/// Returns NULL if `window` is NULL, `window.init_window` is NULL, or the thread could not be
/// spawned.
///
/// # Safety
/// See `Lanox2dNativeWindowCallbacks`.
///
/// ### 中文
/// 创建 surface view 并启动其渲染线程。
///
/// 当 `window` 为 NULL、`window.init_window` 为 NULL 或线程无法创建时返回 NULL。
///
/// # Safety
/// 参见 `Lanox2dNativeWindowCallbacks`。
pub unsafe extern "C" fn lanox2d_surface_view_create(
    window: *const Lanox2dNativeWindowCallbacks,
    name: *const c_char,
    stack_size: u32,
) -> *mut Lanox2dSurfaceView {
    if window.is_null() {
        return std::ptr::null_mut();
    }
    let table = unsafe { *window };
    if table.init_window.is_none() {
        return std::ptr::null_mut();
    }

    let window = unsafe { ExternNativeWindow::new(table) };
    let options = unsafe { thread_options(name, stack_size) };
    match SurfaceView::new(window, options) {
        Ok(view) => Box::into_raw(Box::new(Lanox2dSurfaceView { view })),
        Err(err) => {
            log::error!("{err}");
            std::ptr::null_mut()
        }
    }
}

#[unsafe(no_mangle)]
/// ### English
/// Destroys a surface view, blocking until its render thread has exited the native window.
///
/// ### 中文
/// 销毁 surface view，阻塞直到其渲染线程完成原生窗口的退出。
pub unsafe extern "C" fn lanox2d_surface_view_destroy(view: *mut Lanox2dSurfaceView) {
    if view.is_null() {
        return;
    }
    let view = unsafe { Box::from_raw(view) };
    view.view.on_destroy();
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn lanox2d_surface_view_pause(view: *mut Lanox2dSurfaceView) {
    if view.is_null() {
        return;
    }
    unsafe { (*view).view.on_pause() };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn lanox2d_surface_view_resume(view: *mut Lanox2dSurfaceView) {
    if view.is_null() {
        return;
    }
    unsafe { (*view).view.on_resume() };
}

#[unsafe(no_mangle)]
/// ### English
/// Attaches the platform surface (e.g. `ANativeWindow*`). NULL surfaces are ignored.
///
/// ### 中文
/// 挂载平台 surface（例如 `ANativeWindow*`）；NULL surface 会被忽略。
pub unsafe extern "C" fn lanox2d_surface_view_surface_created(
    view: *mut Lanox2dSurfaceView,
    surface: *mut c_void,
) {
    if view.is_null() {
        return;
    }
    let Some(surface) = SurfaceHandle::from_ptr(surface) else {
        return;
    };
    unsafe { (*view).view.surface_created(surface) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn lanox2d_surface_view_surface_changed(
    view: *mut Lanox2dSurfaceView,
    width: i32,
    height: i32,
) {
    if view.is_null() {
        return;
    }
    unsafe { (*view).view.surface_changed(surface_size(width, height)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn lanox2d_surface_view_surface_destroyed(view: *mut Lanox2dSurfaceView) {
    if view.is_null() {
        return;
    }
    unsafe { (*view).view.surface_destroyed() };
}
