//! ### English
//! C ABI bindings for a render thread driven by a callback table.
//!
//! ### 中文
//! 由回调表驱动的渲染线程的 C ABI 绑定。

use std::ffi::c_char;

use super::callbacks::{ExternRenderCallback, Lanox2dRenderCallbacks};
use super::{Lanox2dSurfaceThread, surface_size, thread_options};
use crate::surface::LifecycleController;

#[unsafe(no_mangle)]
/// ### English
/// Starts a render thread that invokes `callbacks`.
///
/// `name` is an optional NUL-terminated UTF-8 thread name (NULL or empty means default).
/// `stack_size = 0` means the platform default.
///
/// Returns NULL if `callbacks` is NULL or the thread could not be spawned.
///
/// # Safety
/// See `Lanox2dRenderCallbacks`: the callbacks must be callable from the render thread and
/// `user_data` must stay valid until `release` is called.
///
/// ### 中文
/// 启动一个调用 `callbacks` 的渲染线程。
///
/// `name` 为可选的 NUL 结尾 UTF-8 线程名（NULL 或空表示默认）；`stack_size = 0` 表示平台默认。
///
/// 当 `callbacks` 为 NULL 或线程无法创建时返回 NULL。
///
/// # Safety
/// 参见 `Lanox2dRenderCallbacks`：回调必须可在渲染线程调用，`user_data` 在 `release` 前必须保持有效。
pub unsafe extern "C" fn lanox2d_surface_thread_create(
    callbacks: *const Lanox2dRenderCallbacks,
    name: *const c_char,
    stack_size: u32,
) -> *mut Lanox2dSurfaceThread {
    if callbacks.is_null() {
        return std::ptr::null_mut();
    }

    let callback = unsafe { ExternRenderCallback::new(*callbacks) };
    let options = unsafe { thread_options(name, stack_size) };
    match LifecycleController::spawn_with(options, callback) {
        Ok(controller) => Box::into_raw(Box::new(Lanox2dSurfaceThread { controller })),
        Err(err) => {
            log::error!("{err}");
            std::ptr::null_mut()
        }
    }
}

#[unsafe(no_mangle)]
/// ### English
/// Destroys a render thread created by `lanox2d_surface_thread_create`.
///
/// Blocks until the render thread has called `on_destroy` and terminated.
///
/// ### 中文
/// 销毁由 `lanox2d_surface_thread_create` 创建的渲染线程。
///
/// 会阻塞直到渲染线程调用 `on_destroy` 并终止。
pub unsafe extern "C" fn lanox2d_surface_thread_destroy(thread: *mut Lanox2dSurfaceThread) {
    if thread.is_null() {
        return;
    }
    unsafe {
        drop(Box::from_raw(thread));
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn lanox2d_surface_thread_pause(thread: *mut Lanox2dSurfaceThread) {
    if thread.is_null() {
        return;
    }
    unsafe { (*thread).controller.on_pause() };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn lanox2d_surface_thread_resume(thread: *mut Lanox2dSurfaceThread) {
    if thread.is_null() {
        return;
    }
    unsafe { (*thread).controller.on_resume() };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn lanox2d_surface_thread_surface_created(
    thread: *mut Lanox2dSurfaceThread,
) {
    if thread.is_null() {
        return;
    }
    unsafe { (*thread).controller.on_surface_created() };
}

#[unsafe(no_mangle)]
/// ### English
/// Reports the current surface size. Negative values are clamped to 0.
///
/// ### 中文
/// 上报当前 surface 尺寸；负值会被钳制为 0。
pub unsafe extern "C" fn lanox2d_surface_thread_surface_changed(
    thread: *mut Lanox2dSurfaceThread,
    width: i32,
    height: i32,
) {
    if thread.is_null() {
        return;
    }
    unsafe {
        (*thread)
            .controller
            .on_surface_changed(surface_size(width, height))
    };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn lanox2d_surface_thread_surface_destroyed(
    thread: *mut Lanox2dSurfaceThread,
) {
    if thread.is_null() {
        return;
    }
    unsafe { (*thread).controller.on_surface_destroyed() };
}

#[unsafe(no_mangle)]
/// ### English
/// Requests exit and blocks until the render thread has terminated. The handle stays valid and
/// must still be destroyed; further lifecycle calls are ignored.
///
/// ### 中文
/// 请求退出并阻塞直到渲染线程终止。句柄仍然有效且仍需 destroy；之后的生命周期调用会被忽略。
pub unsafe extern "C" fn lanox2d_surface_thread_blocking_exit(thread: *mut Lanox2dSurfaceThread) {
    if thread.is_null() {
        return;
    }
    unsafe { (*thread).controller.blocking_exit() };
}

#[unsafe(no_mangle)]
/// ### English
/// Returns whether the render thread has terminated (`true` for NULL).
///
/// ### 中文
/// 返回渲染线程是否已终止（NULL 返回 `true`）。
pub unsafe extern "C" fn lanox2d_surface_thread_is_exited(
    thread: *const Lanox2dSurfaceThread,
) -> bool {
    if thread.is_null() {
        return true;
    }
    unsafe { (*thread).controller.is_exited() }
}
