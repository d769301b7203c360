/// Logo splash fade: three equal phases (fade in, hold, fade out) driven by
/// accumulated frame time.
#[derive(Debug, Clone)]
pub struct LogoFade {
    phase_secs: f32,
    timer: f32,
}

impl LogoFade {
    pub fn new(phase_secs: f32) -> Self {
        Self {
            phase_secs: phase_secs.max(f32::EPSILON),
            timer: 0.0,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.timer += dt;
    }

    /// True once the full fade-in/hold/fade-out schedule has elapsed.
    pub fn finished(&self) -> bool {
        self.timer > self.phase_secs * 3.0
    }

    pub fn reset(&mut self) {
        self.timer = 0.0;
    }

    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Current opacity in `[0, 1]`:
    /// ramp up over the first phase, hold at 1, ramp down over the last.
    pub fn alpha(&self) -> f32 {
        let p = self.phase_secs;
        let t = self.timer;

        if t <= p {
            (t / p).max(0.0)
        } else if t <= 2.0 * p {
            1.0
        } else if t <= 3.0 * p {
            1.0 - (t - 2.0 * p) / p
        } else {
            0.0
        }
    }
}

/// Visibility toggle for the "Press Any Key" prompt. Starts visible and
/// flips every `interval_secs`; the remainder is discarded on each flip.
#[derive(Debug, Clone)]
pub struct Blinker {
    interval_secs: f32,
    timer: f32,
    visible: bool,
}

impl Blinker {
    pub fn new(interval_secs: f32) -> Self {
        Self {
            interval_secs,
            timer: 0.0,
            visible: true,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.timer += dt;
        if self.timer >= self.interval_secs {
            self.visible = !self.visible;
            self.timer = 0.0;
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn reset(&mut self) {
        self.timer = 0.0;
        self.visible = true;
    }
}
