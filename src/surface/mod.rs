//! ### English
//! Render-surface lifecycle coordination (dedicated render thread + UI-thread facade).
//!
//! ### 中文
//! 渲染 surface 生命周期协调（独立渲染线程 + UI 线程门面）。

mod callback;
mod controller;
mod error;
mod native_window;
mod options;
mod render_loop;
mod state;
mod view;

pub use callback::RenderCallback;
pub use controller::LifecycleController;
pub use error::{RenderError, SpawnError};
pub use native_window::{NativeWindow, NativeWindowRenderer, SurfaceHandle, SurfaceSlot};
pub use options::SurfaceThreadOptions;
pub use view::SurfaceView;
