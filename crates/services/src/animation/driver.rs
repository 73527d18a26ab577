use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use physix_core::sim::{
    AnimationParameters, ClockPolicy, Frame, Readout, SceneKind, SimulationClock,
};

use crate::error::DriverError;

//
// ─── SCHEDULING ────────────────────────────────────────────────────────────────
//

/// Identifier of one requested frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameRequest(u64);

impl FrameRequest {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Host primitive that calls back once per display frame.
///
/// A request fires at most once. The host reports the firing by calling
/// [`FrameDriver::fire`] with the returned request.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameRequest;

    fn cancel_frame(&mut self, request: FrameRequest);
}

/// Scheduler that fires only when told to. Used by tests and headless rendering.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: Vec<FrameRequest>,
    cancelled: Vec<FrameRequest>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests not yet fired or cancelled, oldest first.
    #[must_use]
    pub fn pending(&self) -> &[FrameRequest] {
        &self.pending
    }

    #[must_use]
    pub fn cancelled(&self) -> &[FrameRequest] {
        &self.cancelled
    }

    /// Removes and returns the oldest pending request, as the host would when firing it.
    pub fn take_next(&mut self) -> Option<FrameRequest> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameRequest {
        self.next_id += 1;
        let request = FrameRequest(self.next_id);
        self.pending.push(request);
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        self.pending.retain(|r| *r != request);
        self.cancelled.push(request);
    }
}

impl<T: FrameScheduler + ?Sized> FrameScheduler for &mut T {
    fn request_frame(&mut self) -> FrameRequest {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        (**self).cancel_frame(request);
    }
}

//
// ─── HANDLE ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Default)]
struct HandleState {
    cancelled: AtomicBool,
    reset_requested: AtomicBool,
}

/// Shared cancellation token and reset latch of a running driver.
///
/// Cloned into event handlers that must not borrow the driver itself.
#[derive(Debug, Clone, Default)]
pub struct DriverHandle {
    state: Arc<HandleState>,
}

impl DriverHandle {
    /// Ask the driver to stop before it schedules its next frame.
    pub fn cancel(&self) {
        self.state.cancelled.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.state.cancelled.load(Ordering::SeqCst)
    }

    /// Ask the driver to zero its clock on the next frame.
    pub fn request_reset(&self) {
        self.state.reset_requested.store(true, Ordering::SeqCst);
    }

    /// Consumes a pending reset request.
    pub fn take_reset(&self) -> bool {
        self.state.reset_requested.swap(false, Ordering::SeqCst)
    }

    fn rearm(&self) {
        self.state.cancelled.store(false, Ordering::SeqCst);
        self.state.reset_requested.store(false, Ordering::SeqCst);
    }
}

//
// ─── DRIVER ────────────────────────────────────────────────────────────────────
//

/// Output of one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFrame {
    pub frame: Frame,
    pub readouts: Vec<Readout>,
    /// Simulation clock value the frame was drawn at.
    pub time: f64,
    /// Frames since start or the last reset, starting at 1.
    pub frame_index: u64,
}

pub type RenderCallback = Box<dyn FnMut(RenderedFrame)>;

/// Runs one scene: advances its clock once per fired frame and hands the drawing to a
/// callback.
///
/// Parameters are passed to every [`fire`](Self::fire), so edits show on the next frame
/// without restarting. At most one frame is pending at a time.
pub struct FrameDriver<S: FrameScheduler> {
    scene: SceneKind,
    policy: ClockPolicy,
    clock: SimulationClock,
    scheduler: S,
    pending: Option<FrameRequest>,
    handle: DriverHandle,
    render: Option<RenderCallback>,
}

impl<S: FrameScheduler> FrameDriver<S> {
    #[must_use]
    pub fn new(scene: SceneKind, scheduler: S) -> Self {
        Self {
            scene,
            policy: scene.scene().clock_policy(),
            clock: SimulationClock::new(),
            scheduler,
            pending: None,
            handle: DriverHandle::default(),
            render: None,
        }
    }

    #[must_use]
    pub fn scene(&self) -> SceneKind {
        self.scene
    }

    #[must_use]
    pub fn clock(&self) -> SimulationClock {
        self.clock
    }

    #[must_use]
    pub fn handle(&self) -> DriverHandle {
        self.handle.clone()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.render.is_some()
    }

    #[must_use]
    pub fn pending(&self) -> Option<FrameRequest> {
        self.pending
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Begin rendering from a zeroed clock.
    ///
    /// # Errors
    ///
    /// Returns `DriverError::AlreadyRunning` if started twice without `stop`.
    pub fn start(
        &mut self,
        render: impl FnMut(RenderedFrame) + 'static,
    ) -> Result<(), DriverError> {
        if self.is_running() {
            return Err(DriverError::AlreadyRunning);
        }
        self.clock.reset();
        self.handle.rearm();
        self.render = Some(Box::new(render));
        self.pending = Some(self.scheduler.request_frame());
        log::debug!("frame driver started for {:?}", self.scene);
        Ok(())
    }

    /// Handle a fired frame. Returns whether anything was rendered.
    ///
    /// Frames that are not the pending request, or that fire after a cancel, draw
    /// nothing.
    pub fn fire(&mut self, request: FrameRequest, params: &AnimationParameters) -> bool {
        if self.handle.is_cancelled() {
            self.stop();
        }
        if self.pending != Some(request) {
            log::trace!("dropping stale frame {} for {:?}", request.id(), self.scene);
            return false;
        }
        self.pending = None;

        if self.handle.take_reset() {
            self.clock.reset();
        }
        let time = self.clock.advance(&self.policy, params);
        let rendered = RenderedFrame {
            frame: self.scene.scene().render(params, time),
            readouts: self.scene.scene().readouts(params, time),
            time,
            frame_index: self.clock.frames(),
        };
        let Some(render) = self.render.as_mut() else {
            return false;
        };
        render(rendered);

        // the callback may have cancelled through a cloned handle
        if self.handle.is_cancelled() {
            self.stop();
        } else {
            self.pending = Some(self.scheduler.request_frame());
        }
        true
    }

    /// Draw the scene at the current clock without advancing it.
    #[must_use]
    pub fn snapshot(&self, params: &AnimationParameters) -> RenderedFrame {
        let time = self.clock.value();
        RenderedFrame {
            frame: self.scene.scene().render(params, time),
            readouts: self.scene.scene().readouts(params, time),
            time,
            frame_index: self.clock.frames(),
        }
    }

    /// Cancel the pending frame and drop the callback. No render happens after this.
    pub fn stop(&mut self) {
        if let Some(request) = self.pending.take() {
            self.scheduler.cancel_frame(request);
        }
        if self.render.take().is_some() {
            log::debug!(
                "frame driver stopped for {:?} after {} frames",
                self.scene,
                self.clock.frames()
            );
        }
    }
}

impl<S: FrameScheduler> Drop for FrameDriver<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<S: FrameScheduler> fmt::Debug for FrameDriver<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameDriver")
            .field("scene", &self.scene)
            .field("clock", &self.clock)
            .field("pending", &self.pending)
            .field("running", &self.is_running())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use physix_core::sim::scenes::{atom, waves};

    fn collect() -> (Rc<RefCell<Vec<RenderedFrame>>>, impl FnMut(RenderedFrame) + 'static) {
        let frames = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&frames);
        (frames, move |f| sink.borrow_mut().push(f))
    }

    fn fire_next(driver: &mut FrameDriver<ManualScheduler>, params: &AnimationParameters) -> bool {
        let request = driver.scheduler_mut().take_next().unwrap();
        driver.fire(request, params)
    }

    #[test]
    fn each_frame_advances_clock_then_requests_next() {
        let params = AnimationParameters::new(SceneKind::Atom.controls());
        let mut driver = FrameDriver::new(SceneKind::Atom, ManualScheduler::new());
        let (frames, sink) = collect();
        driver.start(sink).unwrap();
        assert_eq!(driver.scheduler().pending().len(), 1);

        assert!(fire_next(&mut driver, &params));
        assert!(fire_next(&mut driver, &params));
        let frames = frames.borrow();
        assert_eq!(frames.len(), 2);
        // default speed 50 -> 0.05 per frame
        assert!((frames[0].time - 0.05).abs() < 1e-12);
        assert!((frames[1].time - 0.1).abs() < 1e-12);
        assert_eq!(frames[1].frame_index, 2);
        assert_eq!(driver.scheduler().pending().len(), 1);
    }

    #[test]
    fn parameter_changes_show_on_next_frame() {
        let mut params = AnimationParameters::new(SceneKind::Atom.controls());
        let mut driver = FrameDriver::new(SceneKind::Atom, ManualScheduler::new());
        let (frames, sink) = collect();
        driver.start(sink).unwrap();
        fire_next(&mut driver, &params);
        params.set_number(atom::SPEED.key, 100.0).unwrap();
        fire_next(&mut driver, &params);
        let frames = frames.borrow();
        assert!((frames[1].time - 0.15).abs() < 1e-12);
        assert!(driver.is_running());
    }

    #[test]
    fn stop_cancels_pending_and_drops_stale_frames() {
        let params = AnimationParameters::new(SceneKind::Atom.controls());
        let mut driver = FrameDriver::new(SceneKind::Atom, ManualScheduler::new());
        let (frames, sink) = collect();
        driver.start(sink).unwrap();
        let stale = driver.pending().unwrap();
        driver.stop();
        assert!(driver.scheduler().pending().is_empty());
        assert_eq!(driver.scheduler().cancelled(), &[stale]);
        assert!(!driver.fire(stale, &params));
        assert!(frames.borrow().is_empty());
    }

    #[test]
    fn cancel_through_handle_stops_before_next_schedule() {
        let params = AnimationParameters::new(SceneKind::Atom.controls());
        let mut driver = FrameDriver::new(SceneKind::Atom, ManualScheduler::new());
        let handle = driver.handle();
        let frames = Rc::new(RefCell::new(0));
        let count = Rc::clone(&frames);
        driver
            .start(move |_| {
                *count.borrow_mut() += 1;
                handle.cancel();
            })
            .unwrap();
        assert!(fire_next(&mut driver, &params));
        assert!(!driver.is_running());
        assert!(driver.scheduler().pending().is_empty());
        assert_eq!(*frames.borrow(), 1);
    }

    #[test]
    fn double_start_is_rejected_and_restart_zeroes_clock() {
        let params = AnimationParameters::new(SceneKind::Atom.controls());
        let mut driver = FrameDriver::new(SceneKind::Atom, ManualScheduler::new());
        driver.start(|_| {}).unwrap();
        assert_eq!(driver.start(|_| {}), Err(DriverError::AlreadyRunning));
        fire_next(&mut driver, &params);
        assert!(driver.clock().value() > 0.0);

        driver.stop();
        driver.start(|_| {}).unwrap();
        assert_eq!(driver.clock(), SimulationClock::new());
    }

    #[test]
    fn paused_simulator_keeps_rendering_frozen_frames() {
        let mut params = AnimationParameters::new(SceneKind::WaveSimulator.controls());
        let mut driver = FrameDriver::new(SceneKind::WaveSimulator, ManualScheduler::new());
        let (frames, sink) = collect();
        driver.start(sink).unwrap();
        fire_next(&mut driver, &params);
        params.set_flag(waves::PLAYING.key, true).unwrap();
        fire_next(&mut driver, &params);
        fire_next(&mut driver, &params);

        driver.handle().request_reset();
        params.set_flag(waves::PLAYING.key, false).unwrap();
        fire_next(&mut driver, &params);

        let times: Vec<f64> = frames.borrow().iter().map(|f| f.time).collect();
        assert_eq!(times[0], 0.0);
        assert!((times[2] - 0.2).abs() < 1e-12);
        assert_eq!(times[3], 0.0);
        assert_eq!(frames.borrow()[3].frame_index, 1);
    }

    #[test]
    fn snapshot_does_not_advance() {
        let params = AnimationParameters::new(SceneKind::Bernoulli.controls());
        let driver = FrameDriver::new(SceneKind::Bernoulli, ManualScheduler::new());
        let shot = driver.snapshot(&params);
        assert_eq!(shot.time, 0.0);
        assert_eq!(shot.frame_index, 0);
        assert!(!shot.frame.is_empty());
    }

    #[test]
    fn drop_cancels_pending_frame() {
        let mut scheduler = ManualScheduler::new();
        {
            let mut driver = FrameDriver::new(SceneKind::Atom, &mut scheduler);
            driver.start(|_| {}).unwrap();
        }
        assert!(scheduler.pending().is_empty());
        assert_eq!(scheduler.cancelled().len(), 1);
    }
}
