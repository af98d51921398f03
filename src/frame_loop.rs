#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Running,
    Paused,
}

/// What to do with a frame request that just fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Update, draw, and schedule the next request.
    Render,
    /// The loop was paused in the meantime; do nothing.
    Halt,
}

/// Self-rescheduling frame loop.
///
/// The loop never cancels a request it already issued. Pausing only clears
/// `active`, and the outstanding request stops the loop when it fires. At most
/// one request is outstanding at any time.
#[derive(Debug)]
pub struct FrameLoop {
    phase: Phase,
    active: bool,
    pending: bool,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self {
            phase: Phase::Uninitialized,
            active: false,
            pending: false,
        }
    }
}

impl FrameLoop {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[cfg(test)]
    pub fn has_pending_request(&self) -> bool {
        self.pending
    }

    /// Enters the running state. Returns `true` when the caller must issue a frame request.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Uninitialized {
            return false;
        }
        self.phase = Phase::Running;
        self.active = true;
        self.request()
    }

    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            log::debug!("frame loop paused");
            self.phase = Phase::Paused;
            self.active = false;
        }
    }

    /// Returns `true` when the caller must issue a frame request.
    ///
    /// A request still in flight from before the pause is reused instead of
    /// issuing a second one.
    pub fn resume(&mut self) -> bool {
        if self.phase != Phase::Paused {
            return false;
        }
        log::debug!("frame loop resumed");
        self.phase = Phase::Running;
        self.active = true;
        self.request()
    }

    /// Called when a frame request fires. On `Tick::Render` the request stays
    /// outstanding and the caller must issue the next one.
    pub fn fired(&mut self) -> Tick {
        if self.active {
            self.pending = true;
            Tick::Render
        } else {
            self.pending = false;
            Tick::Halt
        }
    }

    fn request(&mut self) -> bool {
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running() -> FrameLoop {
        let mut frame_loop = FrameLoop::default();
        assert!(frame_loop.start());
        frame_loop
    }

    #[test]
    fn starts_uninitialized_and_idle() {
        let frame_loop = FrameLoop::default();
        assert_eq!(frame_loop.phase(), Phase::Uninitialized);
        assert!(!frame_loop.is_active());
        assert!(!frame_loop.has_pending_request());
    }

    #[test]
    fn start_issues_one_request_once() {
        let mut frame_loop = running();
        assert_eq!(frame_loop.phase(), Phase::Running);
        assert!(frame_loop.has_pending_request());
        assert!(!frame_loop.start());
    }

    #[test]
    fn running_loop_renders_every_fired_frame() {
        let mut frame_loop = running();
        for _ in 0..5 {
            assert_eq!(frame_loop.fired(), Tick::Render);
            assert!(frame_loop.has_pending_request());
        }
    }

    #[test]
    fn pause_is_idempotent() {
        let mut frame_loop = running();
        frame_loop.pause();
        frame_loop.pause();
        assert_eq!(frame_loop.phase(), Phase::Paused);
        assert!(!frame_loop.is_active());
    }

    #[test]
    fn in_flight_request_halts_after_pause() {
        let mut frame_loop = running();
        frame_loop.pause();
        assert_eq!(frame_loop.fired(), Tick::Halt);
        assert!(!frame_loop.has_pending_request());
    }

    #[test]
    fn resume_while_active_is_a_no_op() {
        let mut frame_loop = running();
        assert!(!frame_loop.resume());
        assert!(frame_loop.has_pending_request());
    }

    #[test]
    fn resume_after_halt_issues_a_fresh_request() {
        let mut frame_loop = running();
        frame_loop.pause();
        assert_eq!(frame_loop.fired(), Tick::Halt);

        assert!(frame_loop.resume());
        assert_eq!(frame_loop.phase(), Phase::Running);
        assert!(!frame_loop.resume());
        assert_eq!(frame_loop.fired(), Tick::Render);
    }

    #[test]
    fn resume_before_halt_reuses_the_in_flight_request() {
        let mut frame_loop = running();
        frame_loop.pause();
        assert!(!frame_loop.resume());
        assert!(frame_loop.has_pending_request());
        assert_eq!(frame_loop.fired(), Tick::Render);
    }

    #[test]
    fn pause_and_resume_do_nothing_before_start() {
        let mut frame_loop = FrameLoop::default();
        frame_loop.pause();
        assert!(!frame_loop.resume());
        assert_eq!(frame_loop.phase(), Phase::Uninitialized);
        assert!(!frame_loop.has_pending_request());
    }
}
