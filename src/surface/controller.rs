//! ### English
//! UI-thread facade that owns the dedicated render thread and feeds it lifecycle events.
//!
//! ### 中文
//! 持有独立渲染线程并向其投递生命周期事件的 UI 线程门面。

use std::sync::Arc;
use std::thread::{self, ThreadId};

use dpi::PhysicalSize;
use parking_lot::Mutex;

use super::callback::RenderCallback;
use super::error::SpawnError;
use super::options::SurfaceThreadOptions;
use super::render_loop;
use super::state::{LifecycleState, SharedLifecycle};

/// ### English
/// Lifecycle controller that owns the dedicated render thread.
///
/// Every method only mutates the shared lifecycle state and wakes the render thread; render
/// callbacks are invoked exclusively on the render thread. The controller is `Send + Sync`, so
/// the platform may deliver events from whichever thread it uses.
///
/// ### 中文
/// 持有独立渲染线程的生命周期控制器。
///
/// 所有方法只修改共享生命周期状态并唤醒渲染线程；渲染回调只会在渲染线程上调用。
/// 控制器是 `Send + Sync` 的，平台可以从任意线程投递事件。
#[derive(Debug)]
pub struct LifecycleController {
    /// ### English
    /// Monitor shared with the render thread.
    ///
    /// ### 中文
    /// 与渲染线程共享的监视器。
    shared: Arc<SharedLifecycle>,
    /// ### English
    /// Join handle for the render thread; taken by the first completed `blocking_exit`.
    ///
    /// ### 中文
    /// 渲染线程的 join handle；由第一次完成的 `blocking_exit` 取走。
    thread: Mutex<Option<thread::JoinHandle<()>>>,
    /// ### English
    /// Render thread ID, used to detect `blocking_exit` calls made from inside a callback.
    ///
    /// ### 中文
    /// 渲染线程 ID，用于识别在回调内部调用的 `blocking_exit`。
    thread_id: ThreadId,
    name: String,
}

impl LifecycleController {
    /// ### English
    /// Spawns the render thread with default options.
    ///
    /// ### 中文
    /// 使用默认选项创建渲染线程。
    pub fn spawn<C: RenderCallback>(callback: C) -> Result<Self, SpawnError> {
        Self::spawn_with(SurfaceThreadOptions::default(), callback)
    }

    /// ### English
    /// Spawns the render thread. All lifecycle flags start cleared, so nothing is drawn until
    /// both a surface (`on_surface_changed`) and a resume (`on_resume`) have been reported.
    ///
    /// #### Parameters
    /// - `options`: Thread name / stack size.
    /// - `callback`: Render callback moved onto the render thread.
    ///
    /// ### 中文
    /// 创建渲染线程。所有生命周期标记初始均为 false，因此在同时收到 surface
    /// （`on_surface_changed`）与 resume（`on_resume`）之前不会绘制。
    ///
    /// #### 参数
    /// - `options`：线程名称/栈大小。
    /// - `callback`：移交到渲染线程的渲染回调。
    pub fn spawn_with<C: RenderCallback>(
        options: SurfaceThreadOptions,
        callback: C,
    ) -> Result<Self, SpawnError> {
        let shared = Arc::new(SharedLifecycle::new());
        let shared_for_thread = shared.clone();
        let name = options.name.clone();
        let name_for_thread = name.clone();

        let thread = options
            .builder()
            .spawn(move || {
                render_loop::run_render_loop(shared_for_thread, callback, name_for_thread);
            })
            .map_err(|source| SpawnError::Thread {
                name: name.clone(),
                source,
            })?;

        let thread_id = thread.thread().id();
        log::info!("spawned render thread `{name}`");

        Ok(Self {
            shared,
            thread: Mutex::new(Some(thread)),
            thread_id,
            name,
        })
    }

    /// ### English
    /// Returns the render thread name.
    ///
    /// ### 中文
    /// 返回渲染线程名称。
    pub fn name(&self) -> &str {
        &self.name
    }

    /// ### English
    /// Returns whether the render thread has terminated.
    ///
    /// ### 中文
    /// 返回渲染线程是否已终止。
    pub fn is_exited(&self) -> bool {
        self.shared.is_exited()
    }

    /// ### English
    /// The app went to the background.
    ///
    /// ### 中文
    /// 应用进入后台。
    pub fn on_pause(&self) {
        self.post("on_pause", |state| state.app_resumed = false);
    }

    /// ### English
    /// The app came to the foreground.
    ///
    /// ### 中文
    /// 应用回到前台。
    pub fn on_resume(&self) {
        self.post("on_resume", |state| state.app_resumed = true);
    }

    /// ### English
    /// The platform created a surface. Readiness is driven by `on_surface_changed`, which the
    /// platform always sends right after, so this only records the event.
    ///
    /// ### 中文
    /// 平台创建了 surface。ready 状态由紧随其后的 `on_surface_changed` 驱动，
    /// 因此这里只记录该事件。
    pub fn on_surface_created(&self) {
        log::debug!("render thread `{}`: surface created", self.name);
    }

    /// ### English
    /// The platform destroyed the surface. The next surface gets a fresh `on_surface_created`.
    ///
    /// ### 中文
    /// 平台销毁了 surface。下一个 surface 会重新收到 `on_surface_created`。
    pub fn on_surface_destroyed(&self) {
        self.post("on_surface_destroyed", |state| {
            if state.has_surface {
                state.has_surface = false;
                state.surface_lost = true;
            }
        });
    }

    /// ### English
    /// The surface exists with the given size (0 is legal and forwarded as-is).
    ///
    /// ### 中文
    /// surface 存在且尺寸如参数所示（允许为 0，原样转发）。
    pub fn on_surface_changed(&self, size: PhysicalSize<u32>) {
        self.post("on_surface_changed", |state| {
            state.has_surface = true;
            state.surface_changed = true;
            state.surface_size = size;
        });
    }

    /// ### English
    /// Requests exit and blocks until the render thread has called `on_destroy` and terminated.
    ///
    /// After this returns no render callback will run again, so the caller may release the
    /// surface and anything the renderer referenced. Calling it again returns immediately.
    /// Called from the render thread itself (inside a callback) it only requests the exit.
    ///
    /// ### 中文
    /// 请求退出，并阻塞直到渲染线程调用 `on_destroy` 并终止。
    ///
    /// 返回后不会再有任何渲染回调执行，调用方可以安全释放 surface 以及渲染器引用的资源。
    /// 重复调用会立即返回。若在渲染线程自身（回调内部）调用，则只发出退出请求。
    pub fn blocking_exit(&self) {
        if thread::current().id() == self.thread_id {
            log::warn!(
                "render thread `{}`: blocking_exit called from the render thread; not waiting",
                self.name
            );
            self.shared.update(|state| state.should_exit = true);
            return;
        }

        if !self.shared.is_exited() {
            log::info!("waiting on exit for `{}`", self.name);
        }
        self.shared.request_exit_and_wait();

        let thread = self.thread.lock().take();
        if let Some(thread) = thread {
            if thread.join().is_err() {
                log::error!("render thread `{}` panicked while exiting", self.name);
            }
        }
    }

    fn post(&self, what: &str, f: impl FnOnce(&mut LifecycleState)) {
        self.shared.update(|state| {
            if state.should_exit {
                log::debug!("render thread `{}`: ignoring {what} after exit", self.name);
                return;
            }
            f(state);
        });
    }
}

impl Drop for LifecycleController {
    /// ### English
    /// Ensures the render thread is shut down when the controller is dropped.
    ///
    /// ### 中文
    /// 确保控制器 drop 时关闭渲染线程。
    fn drop(&mut self) {
        self.blocking_exit();
    }
}
