use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;
use crate::input::{Key, KeySet};

/// Screen dimensions in cells. The host queries these fresh every frame, so
/// resizing the terminal mid-game just works.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned sprite rectangle. Intersection is strict: rectangles that
/// only share an edge do not collide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Hitbox {
    pub fn at(pos: Vec2, size: (f32, f32)) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            w: size.0,
            h: size.1,
        }
    }

    pub fn overlaps(&self, other: &Hitbox) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

/// The gameplay state: player and target positions, score, and the play
/// clock. Only the Playing screen ticks it; the Paused screen renders it
/// frozen.
#[derive(Debug)]
pub struct Playfield {
    config: GameConfig,
    pub player: Vec2,
    pub target: Vec2,
    pub score: u32,
    pub play_time: f32,
    rng: StdRng,
}

impl Playfield {
    /// `seed` pins the target-spawn sequence for deterministic runs; `None`
    /// draws from OS entropy.
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            player: Vec2::ZERO,
            target: Vec2::ZERO,
            score: 0,
            play_time: 0.0,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// New game: zero the counters, center the player, respawn the target.
    pub fn reset(&mut self, bounds: Bounds) {
        self.score = 0;
        self.play_time = 0.0;
        self.center_player(bounds);
        self.spawn_target(bounds);
    }

    /// One gameplay frame: clock, movement, clamp, collision. The clamp
    /// runs unconditionally so a shrinking terminal can never leave the
    /// player stranded off screen.
    pub fn tick(&mut self, dt: f32, keys: &KeySet, bounds: Bounds) {
        self.play_time += dt;
        self.apply_movement(dt, keys);
        self.clamp_player(bounds);
        self.check_collision(bounds);
    }

    fn center_player(&mut self, bounds: Bounds) {
        let (pw, ph) = self.config.player_size;
        self.player = Vec2::new((bounds.width - pw) / 2.0, (bounds.height - ph) / 2.0);
    }

    /// WASD and the arrows both steer. The combined direction is normalized
    /// so diagonal movement is no faster than axis-aligned movement.
    fn apply_movement(&mut self, dt: f32, keys: &KeySet) {
        let mut dir = Vec2::ZERO;

        if keys.is_down(Key::W) || keys.is_down(Key::Up) {
            dir.y -= 1.0;
        }
        if keys.is_down(Key::S) || keys.is_down(Key::Down) {
            dir.y += 1.0;
        }
        if keys.is_down(Key::A) || keys.is_down(Key::Left) {
            dir.x -= 1.0;
        }
        if keys.is_down(Key::D) || keys.is_down(Key::Right) {
            dir.x += 1.0;
        }

        self.player += dir.normalize_or_zero() * self.config.player_speed * dt;
    }

    /// Keeps the player fully on screen. A sprite at least as large as the
    /// screen pins to the origin instead of producing an inverted range.
    fn clamp_player(&mut self, bounds: Bounds) {
        let (pw, ph) = self.config.player_size;
        self.player.x = self.player.x.clamp(0.0, (bounds.width - pw).max(0.0));
        self.player.y = self.player.y.clamp(0.0, (bounds.height - ph).max(0.0));
    }

    fn check_collision(&mut self, bounds: Bounds) {
        let player = Hitbox::at(self.player, self.config.player_size);
        let target = Hitbox::at(self.target, self.config.target_size);

        if player.overlaps(&target) {
            self.score += 1;
            self.spawn_target(bounds);
        }
    }

    /// Uniform draw over the valid top-left positions. A degenerate axis
    /// (target at least as wide/tall as the screen) collapses to 0.
    pub fn spawn_target(&mut self, bounds: Bounds) {
        let (tw, th) = self.config.target_size;
        self.target = Vec2::new(
            self.random_coord(bounds.width - tw),
            self.random_coord(bounds.height - th),
        );
    }

    fn random_coord(&mut self, max: f32) -> f32 {
        if max > 0.0 {
            self.rng.gen_range(0.0..max)
        } else {
            0.0
        }
    }
}
