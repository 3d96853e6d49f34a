use crate::field::Starfield;

/// One-shot tick scheduling abstraction.
///
/// `arm` requests exactly one future tick callback from the host clock
/// (`requestAnimationFrame` on the web); `cancel` revokes a pending one.
/// Decouples the update logic from any specific host API.
pub trait TickSource {
    fn arm(&mut self);
    fn cancel(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Running,
    Paused,
}

/// Frame driver: advances the starfield once per host tick and owns the
/// RUNNING/PAUSED lifecycle.
///
/// Pausing withholds scheduling rather than interrupting: an in-flight tick
/// still runs to completion, only the next one is never armed.
pub struct FrameDriver<S: TickSource> {
    pub field: Starfield,
    source: S,
    state: DriverState,
    armed: bool,
    disposed: bool,
}

impl<S: TickSource> FrameDriver<S> {
    pub fn new(field: Starfield, source: S) -> Self {
        Self {
            field,
            source,
            state: DriverState::Running,
            armed: false,
            disposed: false,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Arm the first tick. Safe to call more than once.
    pub fn start(&mut self) {
        if self.disposed || self.armed || self.state != DriverState::Running {
            return;
        }
        self.source.arm();
        self.armed = true;
    }

    /// RUNNING -> PAUSED. Cancels the pending callback; a second call is a
    /// no-op (no double-cancel).
    pub fn pause(&mut self) {
        if self.disposed || self.state == DriverState::Paused {
            return;
        }
        self.state = DriverState::Paused;
        if self.armed {
            self.source.cancel();
            self.armed = false;
        }
        log::debug!("[driver] paused");
    }

    /// PAUSED -> RUNNING. Re-arms only if no callback is already pending,
    /// so repeated calls never double-schedule.
    pub fn resume(&mut self) {
        if self.disposed || self.state == DriverState::Running {
            return;
        }
        self.state = DriverState::Running;
        if !self.armed {
            self.source.arm();
            self.armed = true;
        }
        log::debug!("[driver] resumed");
    }

    /// Consume the armed callback. While RUNNING, advances the field and
    /// arms the next tick; returns whether the field advanced (the caller
    /// then issues the draw call).
    pub fn on_tick(&mut self, dt_sec: f32) -> bool {
        self.armed = false;
        if self.disposed || self.state == DriverState::Paused {
            return false;
        }
        self.field.advance(dt_sec);
        self.source.arm();
        self.armed = true;
        true
    }

    /// Cancel any pending callback and latch the driver off. Idempotent;
    /// drawable resources are released by dropping the host renderer.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        if self.armed {
            self.source.cancel();
            self.armed = false;
        }
        self.state = DriverState::Paused;
        self.disposed = true;
        log::debug!("[driver] disposed");
    }
}
