mod support;

use std::ffi::{CString, c_void};
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

use lanox2d_surface::ffi::*;
use support::wait_until;

#[derive(Default)]
struct Counters {
    created: AtomicUsize,
    width: AtomicU32,
    height: AtomicU32,
    draws: AtomicUsize,
    destroyed: AtomicUsize,
    released: AtomicUsize,
    surface: AtomicUsize,
}

fn counters(user_data: *mut c_void) -> &'static Counters {
    unsafe { &*(user_data as *const Counters) }
}

unsafe extern "C" fn on_created(user_data: *mut c_void) -> bool {
    counters(user_data).created.fetch_add(1, Ordering::SeqCst);
    true
}

unsafe extern "C" fn on_changed(user_data: *mut c_void, width: u32, height: u32) -> bool {
    let counters = counters(user_data);
    counters.width.store(width, Ordering::SeqCst);
    counters.height.store(height, Ordering::SeqCst);
    true
}

unsafe extern "C" fn on_draw(user_data: *mut c_void) -> bool {
    counters(user_data).draws.fetch_add(1, Ordering::SeqCst);
    std::thread::sleep(std::time::Duration::from_micros(200));
    // Reported failures are logged and ignored.
    false
}

unsafe extern "C" fn on_destroy(user_data: *mut c_void) -> bool {
    counters(user_data).destroyed.fetch_add(1, Ordering::SeqCst);
    true
}

unsafe extern "C" fn release(user_data: *mut c_void) {
    counters(user_data).released.fetch_add(1, Ordering::SeqCst);
}

unsafe extern "C" fn init_window(
    user_data: *mut c_void,
    width: u32,
    height: u32,
    surface: *mut c_void,
) -> bool {
    let counters = counters(user_data);
    counters.created.fetch_add(1, Ordering::SeqCst);
    counters.width.store(width, Ordering::SeqCst);
    counters.height.store(height, Ordering::SeqCst);
    counters.surface.store(surface as usize, Ordering::SeqCst);
    true
}

#[test]
fn abi_version_is_stable() {
    assert_eq!(lanox2d_surface_abi_version(), 1);
}

#[test]
fn null_handles_are_ignored() {
    unsafe {
        assert!(lanox2d_surface_thread_create(std::ptr::null(), std::ptr::null(), 0).is_null());
        lanox2d_surface_thread_pause(std::ptr::null_mut());
        lanox2d_surface_thread_resume(std::ptr::null_mut());
        lanox2d_surface_thread_surface_changed(std::ptr::null_mut(), 1, 1);
        lanox2d_surface_thread_blocking_exit(std::ptr::null_mut());
        assert!(lanox2d_surface_thread_is_exited(std::ptr::null()));
        lanox2d_surface_thread_destroy(std::ptr::null_mut());

        assert!(lanox2d_surface_view_create(std::ptr::null(), std::ptr::null(), 0).is_null());
        lanox2d_surface_view_surface_created(std::ptr::null_mut(), std::ptr::null_mut());
        lanox2d_surface_view_destroy(std::ptr::null_mut());
    }
}

#[test]
fn callback_table_drives_the_render_thread() {
    support::init_logging();
    let state = Arc::new(Counters::default());
    let table = Lanox2dRenderCallbacks {
        user_data: Arc::as_ptr(&state) as *mut c_void,
        on_surface_created: Some(on_created),
        on_surface_changed: Some(on_changed),
        on_draw_frame: Some(on_draw),
        on_pause: None,
        on_resume: None,
        on_destroy: Some(on_destroy),
        release: Some(release),
    };
    let name = CString::new("FfiSurfaceThread").unwrap();

    unsafe {
        let thread = lanox2d_surface_thread_create(&table, name.as_ptr(), 0);
        assert!(!thread.is_null());

        lanox2d_surface_thread_surface_created(thread);
        lanox2d_surface_thread_surface_changed(thread, -5, 600);
        lanox2d_surface_thread_resume(thread);
        wait_until(|| state.draws.load(Ordering::SeqCst) > 3);

        assert_eq!(state.created.load(Ordering::SeqCst), 1);
        assert_eq!(state.width.load(Ordering::SeqCst), 0);
        assert_eq!(state.height.load(Ordering::SeqCst), 600);

        lanox2d_surface_thread_blocking_exit(thread);
        assert!(lanox2d_surface_thread_is_exited(thread));
        assert_eq!(state.destroyed.load(Ordering::SeqCst), 1);
        assert_eq!(state.released.load(Ordering::SeqCst), 1);

        lanox2d_surface_thread_destroy(thread);
    }
    assert_eq!(state.destroyed.load(Ordering::SeqCst), 1);
    assert_eq!(state.released.load(Ordering::SeqCst), 1);
}

#[test]
fn native_window_view_binds_the_attached_surface() {
    support::init_logging();
    let state = Arc::new(Counters::default());
    let table = Lanox2dNativeWindowCallbacks {
        user_data: Arc::as_ptr(&state) as *mut c_void,
        init_window: Some(init_window),
        resize_window: Some(on_changed),
        draw_window: Some(on_draw),
        exit_window: Some(on_destroy),
        release: Some(release),
    };

    unsafe {
        let view = lanox2d_surface_view_create(&table, std::ptr::null(), 0);
        assert!(!view.is_null());

        lanox2d_surface_view_surface_created(view, 0x1234 as *mut c_void);
        lanox2d_surface_view_surface_changed(view, 320, 240);
        lanox2d_surface_view_resume(view);
        wait_until(|| state.draws.load(Ordering::SeqCst) > 3);

        assert_eq!(state.created.load(Ordering::SeqCst), 1);
        assert_eq!(state.surface.load(Ordering::SeqCst), 0x1234);
        assert_eq!(state.width.load(Ordering::SeqCst), 320);
        assert_eq!(state.height.load(Ordering::SeqCst), 240);

        lanox2d_surface_view_surface_changed(view, -640, 480);
        wait_until(|| state.height.load(Ordering::SeqCst) == 480);
        assert_eq!(state.width.load(Ordering::SeqCst), 0);
        assert_eq!(state.created.load(Ordering::SeqCst), 1);

        lanox2d_surface_view_pause(view);
        lanox2d_surface_view_surface_destroyed(view);
        lanox2d_surface_view_destroy(view);
    }
    assert_eq!(state.destroyed.load(Ordering::SeqCst), 1);
    assert_eq!(state.released.load(Ordering::SeqCst), 1);
}

#[test]
fn view_without_init_window_is_rejected() {
    let state = Arc::new(Counters::default());
    let table = Lanox2dNativeWindowCallbacks {
        user_data: Arc::as_ptr(&state) as *mut c_void,
        init_window: None,
        resize_window: None,
        draw_window: None,
        exit_window: None,
        release: Some(release),
    };
    unsafe {
        assert!(lanox2d_surface_view_create(&table, std::ptr::null(), 0).is_null());
    }
    assert_eq!(state.released.load(Ordering::SeqCst), 0);
}
