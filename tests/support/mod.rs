#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock, Weak};
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use dpi::PhysicalSize;
use lanox2d_surface::{LifecycleController, RenderCallback, RenderError};

pub const TIMEOUT: Duration = Duration::from_secs(5);

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Transition events as seen by the renderer. Frames are only reported once per streak
/// (the first draw after a transition); the total lives in `Harness::frames`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Resume,
    Created,
    Changed(u32, u32),
    Draw,
    Pause,
    Destroy,
}

#[derive(Default)]
pub struct Behavior {
    pub fail_resume: bool,
    pub fail_draw: bool,
    pub fail_destroy: bool,
    pub panic_on_destroy: bool,
    pub panic_on_draw: bool,
    /// Calls `blocking_exit` on this controller from inside the first draw.
    pub exit_from_draw: Option<Arc<OnceLock<Weak<LifecycleController>>>>,
}

pub struct Recorder {
    tx: Sender<Event>,
    frames: Arc<AtomicUsize>,
    violations: Arc<AtomicUsize>,
    behavior: Behavior,
    drawing: bool,
    resumed: bool,
    destroyed: bool,
}

impl Recorder {
    fn record(&mut self, event: Event) {
        if self.destroyed {
            self.violations.fetch_add(1, Ordering::SeqCst);
        }
        if event != Event::Draw {
            self.drawing = false;
        }
        let _ = self.tx.send(event);
    }
}

impl RenderCallback for Recorder {
    fn on_surface_created(&mut self) -> Result<(), RenderError> {
        self.record(Event::Created);
        Ok(())
    }

    fn on_surface_changed(&mut self, size: PhysicalSize<u32>) -> Result<(), RenderError> {
        self.record(Event::Changed(size.width, size.height));
        Ok(())
    }

    fn on_draw_frame(&mut self) -> Result<(), RenderError> {
        if !self.resumed || self.destroyed {
            self.violations.fetch_add(1, Ordering::SeqCst);
        }
        self.frames.fetch_add(1, Ordering::SeqCst);
        if !self.drawing {
            self.drawing = true;
            let _ = self.tx.send(Event::Draw);
        }

        thread::sleep(Duration::from_micros(200));

        if let Some(cell) = self.behavior.exit_from_draw.take() {
            if let Some(controller) = cell.get().and_then(Weak::upgrade) {
                controller.blocking_exit();
            }
        }
        if self.behavior.panic_on_draw {
            panic!("draw exploded");
        }
        if self.behavior.fail_draw {
            return Err(RenderError::Message("draw failed".into()));
        }
        Ok(())
    }

    fn on_pause(&mut self) -> Result<(), RenderError> {
        self.resumed = false;
        self.record(Event::Pause);
        Ok(())
    }

    fn on_resume(&mut self) -> Result<(), RenderError> {
        self.resumed = true;
        self.record(Event::Resume);
        if self.behavior.fail_resume {
            return Err(RenderError::Native("on_resume"));
        }
        Ok(())
    }

    fn on_destroy(&mut self) -> Result<(), RenderError> {
        self.record(Event::Destroy);
        self.destroyed = true;
        if self.behavior.panic_on_destroy {
            panic!("destroy exploded");
        }
        if self.behavior.fail_destroy {
            return Err(RenderError::Native("on_destroy"));
        }
        Ok(())
    }
}

pub struct Harness {
    pub controller: LifecycleController,
    pub events: Receiver<Event>,
    frames: Arc<AtomicUsize>,
    violations: Arc<AtomicUsize>,
}

impl Harness {
    pub fn spawn() -> Self {
        Self::spawn_with(Behavior::default())
    }

    pub fn spawn_with(behavior: Behavior) -> Self {
        init_logging();
        let (recorder, events, frames, violations) = recorder(behavior);
        let controller = LifecycleController::spawn(recorder).expect("spawn render thread");
        Self {
            controller,
            events,
            frames,
            violations,
        }
    }

    pub fn frames(&self) -> usize {
        self.frames.load(Ordering::SeqCst)
    }

    pub fn violations(&self) -> usize {
        self.violations.load(Ordering::SeqCst)
    }

    pub fn next(&self) -> Event {
        self.events
            .recv_timeout(TIMEOUT)
            .expect("timed out waiting for a render callback")
    }

    pub fn expect(&self, expected: &[Event]) {
        let actual: Vec<Event> = expected.iter().map(|_| self.next()).collect();
        assert_eq!(actual, expected);
    }

    /// Collects events up to and including `last`.
    pub fn collect_until(&self, last: Event) -> Vec<Event> {
        let mut events = Vec::new();
        loop {
            let event = self.next();
            events.push(event);
            if event == last {
                return events;
            }
        }
    }

    pub fn assert_quiet(&self) {
        thread::sleep(Duration::from_millis(50));
        assert_eq!(self.events.try_recv().ok(), None);
    }

    pub fn wait_for_frames(&self, count: usize) {
        let start = self.frames();
        wait_until(|| self.frames() >= start + count);
    }

    pub fn make_ready(&self, width: u32, height: u32) {
        self.controller
            .on_surface_changed(PhysicalSize::new(width, height));
        self.controller.on_resume();
        self.expect(&[
            Event::Resume,
            Event::Created,
            Event::Changed(width, height),
            Event::Draw,
        ]);
    }

    /// Exits and returns every event delivered after the ones already consumed.
    pub fn finish(self) -> (Vec<Event>, usize) {
        self.controller.blocking_exit();
        assert!(self.controller.is_exited());
        let Self {
            controller,
            events,
            violations,
            ..
        } = self;
        // The recorder (and its sender) is dropped once the render thread is joined.
        let rest = events.iter().collect();
        drop(controller);
        (rest, violations.load(Ordering::SeqCst))
    }
}

pub fn recorder(
    behavior: Behavior,
) -> (Recorder, Receiver<Event>, Arc<AtomicUsize>, Arc<AtomicUsize>) {
    let (tx, rx) = crossbeam_channel::unbounded();
    let frames = Arc::new(AtomicUsize::new(0));
    let violations = Arc::new(AtomicUsize::new(0));
    let recorder = Recorder {
        tx,
        frames: frames.clone(),
        violations: violations.clone(),
        behavior,
        drawing: false,
        resumed: false,
        destroyed: false,
    };
    (recorder, rx, frames, violations)
}

pub fn wait_until(mut condition: impl FnMut() -> bool) {
    let deadline = Instant::now() + TIMEOUT;
    while !condition() {
        assert!(Instant::now() < deadline, "condition not reached in time");
        thread::sleep(Duration::from_millis(1));
    }
}
