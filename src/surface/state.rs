//! ### English
//! Lifecycle state shared between the UI thread and the render thread, guarded by a monitor
//! (mutex + condition variable).
//!
//! ### 中文
//! UI 线程与渲染线程共享的生命周期状态，由监视器（互斥锁 + 条件变量）保护。

use dpi::PhysicalSize;
use parking_lot::{Condvar, Mutex};

/// ### English
/// Latest known surface/app status plus the render loop's own bookkeeping.
///
/// Only mutated while holding the monitor lock. The `renderer_*` mirrors are written by the
/// render thread only.
///
/// ### 中文
/// 最新已知的 surface/应用状态，以及渲染循环自身的记录。
///
/// 仅在持有监视器锁时修改。`renderer_*` 镜像字段只由渲染线程写入。
#[derive(Debug, Default)]
pub(crate) struct LifecycleState {
    /// ### English
    /// A usable surface currently exists.
    ///
    /// ### 中文
    /// 当前存在可用的 surface。
    pub(crate) has_surface: bool,
    /// ### English
    /// A resize is pending and not yet delivered.
    ///
    /// ### 中文
    /// 存在尚未投递的 resize。
    pub(crate) surface_changed: bool,
    /// ### English
    /// Latest known surface size (0 is legal).
    ///
    /// ### 中文
    /// 最新已知的 surface 尺寸（允许为 0）。
    pub(crate) surface_size: PhysicalSize<u32>,
    /// ### English
    /// The app/activity is in the resumed state.
    ///
    /// ### 中文
    /// 应用/Activity 处于 resumed 状态。
    pub(crate) app_resumed: bool,
    /// ### English
    /// Whether the render loop believes the renderer is live.
    ///
    /// ### 中文
    /// 渲染循环是否认为渲染器处于活跃状态。
    pub(crate) renderer_resumed: bool,
    /// ### English
    /// Whether `on_surface_created` already fired for the current surface instance.
    ///
    /// ### 中文
    /// 当前 surface 实例是否已触发过 `on_surface_created`。
    pub(crate) renderer_initialized: bool,
    /// ### English
    /// Set by the UI thread when `has_surface` goes true→false; consumed by the render loop,
    /// which then resets `renderer_initialized`.
    ///
    /// ### 中文
    /// `has_surface` 由 true 变为 false 时由 UI 线程置位；渲染循环消费后重置
    /// `renderer_initialized`。
    pub(crate) surface_lost: bool,
    /// ### English
    /// Exit was requested (write-once).
    ///
    /// ### 中文
    /// 已请求退出（只写一次）。
    pub(crate) should_exit: bool,
    /// ### English
    /// The render loop has terminated.
    ///
    /// ### 中文
    /// 渲染循环已终止。
    pub(crate) exited: bool,
}

/// ### English
/// Callbacks to deliver before the next frame, in this order: resume, create, resize.
///
/// ### 中文
/// 下一帧之前需要投递的回调，顺序为：resume、create、resize。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Transitions {
    pub(crate) resume: bool,
    pub(crate) create: bool,
    pub(crate) resize: Option<PhysicalSize<u32>>,
}

/// ### English
/// What the render loop does after releasing the monitor.
///
/// ### 中文
/// 渲染循环释放监视器后要执行的动作。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    /// ### English
    /// Call `on_destroy` and terminate.
    ///
    /// ### 中文
    /// 调用 `on_destroy` 并终止。
    Exit,
    /// ### English
    /// Readiness was lost while resumed: call `on_pause`, no draw.
    ///
    /// ### 中文
    /// resumed 状态下失去 ready：调用 `on_pause`，不绘制。
    Pause,
    /// ### English
    /// Ready: deliver the transitions, then draw one frame.
    ///
    /// ### 中文
    /// ready：先投递状态迁移回调，再绘制一帧。
    Draw(Transitions),
}

impl LifecycleState {
    #[inline]
    pub(crate) fn is_ready(&self) -> bool {
        self.has_surface && self.app_resumed
    }

    /// ### English
    /// Decides the render loop's next step and updates the mirrors accordingly.
    /// Returns `None` when there is nothing to do and the loop should wait.
    ///
    /// Must only be called from the render thread.
    ///
    /// ### 中文
    /// 决定渲染循环的下一步，并相应更新镜像字段。
    /// 无事可做、循环应等待时返回 `None`。
    ///
    /// 只能在渲染线程调用。
    pub(crate) fn next_step(&mut self) -> Option<Step> {
        if self.should_exit {
            return Some(Step::Exit);
        }

        if self.surface_lost {
            self.surface_lost = false;
            self.renderer_initialized = false;
        }

        if self.is_ready() {
            let mut transitions = Transitions::default();
            if !self.renderer_resumed {
                self.renderer_resumed = true;
                transitions.resume = true;
            }
            // Checked outside the resume branch: the surface may have been replaced while the
            // renderer stayed resumed.
            if !self.renderer_initialized {
                self.renderer_initialized = true;
                transitions.create = true;
            }
            if self.surface_changed {
                self.surface_changed = false;
                transitions.resize = Some(self.surface_size);
            }
            return Some(Step::Draw(transitions));
        }

        if self.renderer_resumed {
            self.renderer_resumed = false;
            return Some(Step::Pause);
        }

        None
    }
}

/// ### English
/// The monitor: lifecycle state plus the condition variable both threads wait on.
///
/// ### 中文
/// 监视器：生命周期状态以及两个线程共同等待的条件变量。
#[derive(Debug, Default)]
pub(crate) struct SharedLifecycle {
    state: Mutex<LifecycleState>,
    cond: Condvar,
}

impl SharedLifecycle {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// ### English
    /// Mutates the state under the lock and wakes every waiter.
    ///
    /// ### 中文
    /// 持锁修改状态并唤醒所有等待者。
    pub(crate) fn update<R>(&self, f: impl FnOnce(&mut LifecycleState) -> R) -> R {
        let mut state = self.state.lock();
        let result = f(&mut state);
        self.cond.notify_all();
        result
    }

    /// ### English
    /// Blocks until `next_step` yields something to do (render thread only).
    ///
    /// ### 中文
    /// 阻塞直到 `next_step` 给出要执行的动作（仅渲染线程）。
    pub(crate) fn wait_step(&self) -> Step {
        let mut state = self.state.lock();
        loop {
            if let Some(step) = state.next_step() {
                return step;
            }
            self.cond.wait(&mut state);
        }
    }

    pub(crate) fn is_exited(&self) -> bool {
        self.state.lock().exited
    }

    /// ### English
    /// Requests exit (write-once) and blocks until the render loop has marked itself exited.
    /// Returns immediately when the loop already exited.
    ///
    /// ### 中文
    /// 请求退出（只写一次），并阻塞直到渲染循环标记自身已退出。
    /// 若循环已退出则立即返回。
    pub(crate) fn request_exit_and_wait(&self) {
        let mut state = self.state.lock();
        if !state.exited {
            state.should_exit = true;
            self.cond.notify_all();
        }
        while !state.exited {
            self.cond.wait(&mut state);
        }
    }
}
