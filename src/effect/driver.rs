//! Cooperative animation driver.
//!
//! Two independent periodic timers advance the glow: one steps the wave phase, the other steps
//! the mesh gradient clock. Time only moves while the driver is running; the host feeds elapsed
//! wall or frame time through [`GlowDriver::advance`].

use std::f64::consts::TAU;
use std::time::Duration;

use crate::foundation::core::Fps;
use crate::foundation::error::{GlowError, GlowResult};
use crate::mesh::gradient::MeshClock;

/// Upper bound on ticks of one timer per `advance` call. Backlog beyond it is dropped.
pub const MAX_CATCH_UP_TICKS: u32 = 240;

/// Animation state read by the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GlowState {
    /// Wave phase in radians, kept in `[0, TAU)`.
    pub phase: f64,
    pub mesh: MeshClock,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickSchedule {
    pub phase_interval: Duration,
    /// Radians added to the phase per phase tick.
    pub phase_step: f64,
    pub mesh_interval: Duration,
    /// Mesh timer increment per mesh tick.
    pub mesh_speed: f64,
}

impl Default for TickSchedule {
    fn default() -> Self {
        Self {
            phase_interval: Duration::from_millis(20),
            phase_step: 0.08,
            mesh_interval: Duration::from_millis(20),
            mesh_speed: MeshClock::default().speed,
        }
    }
}

impl TickSchedule {
    pub fn validate(&self) -> GlowResult<()> {
        if self.phase_interval.is_zero() || self.mesh_interval.is_zero() {
            return Err(GlowError::validation("tick intervals must be > 0"));
        }
        if !self.phase_step.is_finite() || !self.mesh_speed.is_finite() {
            return Err(GlowError::validation("tick steps must be finite"));
        }
        Ok(())
    }
}

/// Ticks run by one [`GlowDriver::advance`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub phase_ticks: u32,
    pub mesh_ticks: u32,
}

impl TickReport {
    pub fn is_idle(&self) -> bool {
        self.phase_ticks == 0 && self.mesh_ticks == 0
    }
}

#[derive(Debug)]
pub struct GlowDriver {
    schedule: TickSchedule,
    initial: GlowState,
    state: GlowState,
    running: bool,
    phase_acc: Duration,
    mesh_acc: Duration,
}

impl GlowDriver {
    pub fn new(schedule: TickSchedule) -> GlowResult<Self> {
        let initial = GlowState {
            phase: 0.0,
            mesh: MeshClock {
                timer: 0.0,
                speed: schedule.mesh_speed,
            },
        };
        Self::with_state(schedule, initial)
    }

    /// Driver starting (and resetting) to `initial`. The schedule's mesh speed wins over the
    /// speed stored in `initial`.
    pub fn with_state(schedule: TickSchedule, mut initial: GlowState) -> GlowResult<Self> {
        schedule.validate()?;
        initial.mesh.speed = schedule.mesh_speed;
        Ok(Self {
            schedule,
            initial,
            state: initial,
            running: false,
            phase_acc: Duration::ZERO,
            mesh_acc: Duration::ZERO,
        })
    }

    pub fn schedule(&self) -> &TickSchedule {
        &self.schedule
    }

    pub fn state(&self) -> &GlowState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            tracing::debug!(
                phase = self.state.phase,
                mesh_timer = self.state.mesh.timer,
                "glow driver started"
            );
        }
    }

    /// Stop both timers. Partially elapsed intervals are discarded.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            tracing::debug!("glow driver stopped");
        }
        self.phase_acc = Duration::ZERO;
        self.mesh_acc = Duration::ZERO;
    }

    /// Restore the initial state. Running status is unchanged.
    pub fn reset(&mut self) {
        self.state = self.initial;
        self.phase_acc = Duration::ZERO;
        self.mesh_acc = Duration::ZERO;
    }

    /// Feed `elapsed` time to both timers and run every interval that completed, at most
    /// [`MAX_CATCH_UP_TICKS`] per timer.
    pub fn advance(&mut self, elapsed: Duration) -> TickReport {
        self.run(elapsed, Some(u64::from(MAX_CATCH_UP_TICKS)))
    }

    /// Like [`advance`](Self::advance) but never drops backlog. Used for offline seeking; the
    /// cost does not grow with `elapsed`.
    pub fn fast_forward(&mut self, elapsed: Duration) -> TickReport {
        self.run(elapsed, None)
    }

    /// Advance by the duration of `frames` frames at `fps`.
    pub fn advance_frames(&mut self, fps: Fps, frames: u64) -> TickReport {
        match Duration::try_from_secs_f64(fps.frames_to_secs(frames)) {
            Ok(elapsed) => self.fast_forward(elapsed),
            Err(_) => TickReport::default(),
        }
    }

    /// Start the driver for the lifetime of the returned guard.
    pub fn session(&mut self) -> GlowSession<'_> {
        self.start();
        GlowSession { driver: self }
    }

    fn run(&mut self, elapsed: Duration, cap: Option<u64>) -> TickReport {
        if !self.running {
            return TickReport::default();
        }

        self.phase_acc = self.phase_acc.saturating_add(elapsed);
        let phase_ticks = drain_ticks(&mut self.phase_acc, self.schedule.phase_interval, cap);
        self.tick_phase(phase_ticks);

        self.mesh_acc = self.mesh_acc.saturating_add(elapsed);
        let mesh_ticks = drain_ticks(&mut self.mesh_acc, self.schedule.mesh_interval, cap);
        self.tick_mesh(mesh_ticks);

        if phase_ticks > 1 || mesh_ticks > 1 {
            tracing::debug!(phase_ticks, mesh_ticks, "glow driver tick burst");
        }
        TickReport {
            phase_ticks: u32::try_from(phase_ticks).unwrap_or(u32::MAX),
            mesh_ticks: u32::try_from(mesh_ticks).unwrap_or(u32::MAX),
        }
    }

    fn tick_phase(&mut self, ticks: u64) {
        if ticks == 0 {
            return;
        }
        let sweep = (self.schedule.phase_step * ticks as f64).rem_euclid(TAU);
        self.state.phase = (self.state.phase + sweep).rem_euclid(TAU);
    }

    fn tick_mesh(&mut self, ticks: u64) {
        self.state.mesh.step_by(ticks);
    }
}

/// Whole intervals contained in `acc`, limited to `cap`; the remainder stays in `acc`.
/// Backlog beyond the cap is dropped.
fn drain_ticks(acc: &mut Duration, interval: Duration, cap: Option<u64>) -> u64 {
    let step = interval.as_nanos();
    if step == 0 {
        *acc = Duration::ZERO;
        return 0;
    }
    let total = acc.as_nanos();
    let n = total / step;
    if let Some(max) = cap
        && n > u128::from(max)
    {
        tracing::debug!(
            dropped = u64::try_from(n - u128::from(max)).unwrap_or(u64::MAX),
            "glow driver dropped tick backlog"
        );
        *acc = Duration::ZERO;
        return max;
    }
    let rem = total % step;
    *acc = Duration::new(
        u64::try_from(rem / 1_000_000_000).unwrap_or(u64::MAX),
        (rem % 1_000_000_000) as u32,
    );
    u64::try_from(n).unwrap_or(u64::MAX)
}

/// Running driver scoped to a visible lifetime; stops the driver on drop.
#[derive(Debug)]
pub struct GlowSession<'a> {
    driver: &'a mut GlowDriver,
}

impl GlowSession<'_> {
    pub fn advance(&mut self, elapsed: Duration) -> TickReport {
        self.driver.advance(elapsed)
    }

    pub fn advance_frames(&mut self, fps: Fps, frames: u64) -> TickReport {
        self.driver.advance_frames(fps, frames)
    }

    pub fn state(&self) -> &GlowState {
        self.driver.state()
    }
}

impl Drop for GlowSession<'_> {
    fn drop(&mut self) {
        self.driver.stop();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effect/driver.rs"]
mod tests;
