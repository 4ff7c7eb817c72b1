//! ### English
//! C ABI surface for `lanox2d_surface`.
//!
//! All exported symbols are `extern "C"` functions; structs are `#[repr(C)]`.
//! Every function accepts a NULL handle and treats it as a no-op.
//! Thread names passed from Java/JNI must be NUL-terminated UTF-8 (C string).
//!
//! ### 中文
//! `lanox2d_surface` 的 C ABI 接口层。
//!
//! 所有导出符号均为 `extern "C"` 函数；结构体使用 `#[repr(C)]`。
//! 所有函数都接受 NULL 句柄，并将其视为空操作。
//! Java/JNI 传入的线程名必须是以 NUL 结尾的 UTF-8（C 字符串）。
mod abi;
mod callbacks;
mod thread;
mod view;

use std::ffi::{CStr, c_char};

use dpi::PhysicalSize;

use crate::surface::{LifecycleController, SurfaceThreadOptions, SurfaceView};

pub use abi::lanox2d_surface_abi_version;
pub use callbacks::{
    Lanox2dCallback, Lanox2dInitWindowCallback, Lanox2dNativeWindowCallbacks,
    Lanox2dReleaseCallback, Lanox2dRenderCallbacks, Lanox2dSizeCallback,
};
pub use thread::*;
pub use view::*;

#[repr(C)]
/// ### English
/// Opaque handle owning a render thread driven by a C callback table.
///
/// ### 中文
/// 不透明句柄，持有由 C 回调表驱动的渲染线程。
pub struct Lanox2dSurfaceThread {
    controller: LifecycleController,
}

#[repr(C)]
/// ### English
/// Opaque handle owning a surface view whose render thread drives a native window.
///
/// ### 中文
/// 不透明句柄，持有一个 surface view，其渲染线程驱动原生窗口。
pub struct Lanox2dSurfaceView {
    view: SurfaceView,
}

/// ### English
/// C ABI version for `lanox2d_surface`.
///
/// ### 中文
/// `lanox2d_surface` 的 C ABI 版本号。
const LANOX2D_SURFACE_ABI_VERSION: u32 = 1;

/// ### English
/// Builds thread options from an optional NUL-terminated UTF-8 name and a stack size.
///
/// NULL, invalid UTF-8 or empty names fall back to the default name.
///
/// # Safety
/// `name` must be NULL or point to a NUL-terminated string for the duration of the call.
///
/// ### 中文
/// 由可选的 NUL 结尾 UTF-8 名称与栈大小构建线程选项。
///
/// NULL、非法 UTF-8 或空名称会回退到默认名称。
///
/// # Safety
/// `name` 必须为 NULL，或在本次调用期间指向以 NUL 结尾的字符串。
unsafe fn thread_options(name: *const c_char, stack_size: u32) -> SurfaceThreadOptions {
    let name = if name.is_null() {
        None
    } else {
        unsafe { CStr::from_ptr(name) }
            .to_str()
            .ok()
            .map(str::to_owned)
    };
    SurfaceThreadOptions::from_raw(name, stack_size as usize)
}

/// ### English
/// Converts JNI-style signed dimensions into a surface size (negative values clamp to 0).
///
/// ### 中文
/// 将 JNI 风格的有符号尺寸转换为 surface 尺寸（负值钳制为 0）。
fn surface_size(width: i32, height: i32) -> PhysicalSize<u32> {
    PhysicalSize::new(width.max(0) as u32, height.max(0) as u32)
}
