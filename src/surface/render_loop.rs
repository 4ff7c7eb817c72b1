//! ### English
//! Dedicated render thread: waits on the lifecycle monitor and drives the render callback.
//!
//! ### 中文
//! 独立渲染线程：等待生命周期监视器并驱动渲染回调。

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use super::callback::RenderCallback;
use super::error::RenderError;
use super::state::{SharedLifecycle, Step};

/// ### English
/// Marks the loop exited on every way out of `run_render_loop` (including unwinding), so a
/// waiting `blocking_exit` is always released.
///
/// ### 中文
/// 在 `run_render_loop` 的任何退出路径（包括 unwind）上标记循环已退出，
/// 保证等待中的 `blocking_exit` 一定会被唤醒。
struct ExitGuard<'a> {
    shared: &'a SharedLifecycle,
    name: &'a str,
}

impl Drop for ExitGuard<'_> {
    fn drop(&mut self) {
        self.shared.update(|state| {
            state.should_exit = true;
            state.exited = true;
        });
        log::debug!("render thread `{}` exited", self.name);
    }
}

/// ### English
/// Render thread entry function.
/// Returns only after an exit request was observed, `on_destroy` was called and the callback
/// was dropped.
///
/// ### 中文
/// 渲染线程入口函数。
/// 只有在观察到退出请求、调用 `on_destroy` 并释放回调之后才会返回。
pub(super) fn run_render_loop<C: RenderCallback>(
    shared: Arc<SharedLifecycle>,
    callback: C,
    name: String,
) {
    let _guard = ExitGuard {
        shared: &shared,
        name: &name,
    };
    log::debug!("render thread `{name}` started");
    // `callback` is owned by `drive`, so it is dropped (also when unwinding) before the guard
    // marks the loop exited.
    drive(&shared, callback, &name);
}

fn drive<C: RenderCallback>(shared: &SharedLifecycle, mut callback: C, name: &str) {
    loop {
        match shared.wait_step() {
            Step::Exit => {
                invoke(name, "on_destroy", || callback.on_destroy());
                return;
            }
            Step::Pause => {
                invoke(name, "on_pause", || callback.on_pause());
            }
            Step::Draw(transitions) => {
                if transitions.resume {
                    invoke(name, "on_resume", || callback.on_resume());
                }
                if transitions.create {
                    invoke(name, "on_surface_created", || callback.on_surface_created());
                }
                if let Some(size) = transitions.resize {
                    log::debug!(
                        "render thread `{name}` resizing to {}x{}",
                        size.width,
                        size.height
                    );
                    invoke(name, "on_surface_changed", || {
                        callback.on_surface_changed(size)
                    });
                }
                invoke(name, "on_draw_frame", || callback.on_draw_frame());
            }
        }
    }
}

/// ### English
/// Invokes one callback, swallowing (and logging) both errors and panics.
///
/// ### 中文
/// 调用单个回调；错误与 panic 都会被吞掉（并记录日志）。
fn invoke(thread: &str, what: &str, f: impl FnOnce() -> Result<(), RenderError>) {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(())) => {}
        Ok(Err(err)) => log::warn!("render thread `{thread}`: {what} failed: {err}"),
        Err(payload) => log::error!(
            "render thread `{thread}`: {what} panicked: {}",
            panic_message(payload.as_ref())
        ),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "<non-string panic payload>"
    }
}
