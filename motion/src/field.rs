//! Floating particle field: independent point masses integrated with a
//! one-step Euler update and reflected at the viewport edges.
//!
//! Two configurations exist. The header runs a monochrome field whose
//! particle count scales with viewport width and whose close pairs get
//! connecting lines. The hero runs a fixed-size field of palette-colored
//! particles whose opacity oscillates between two bounds.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::consts::{
    GLOW_OPACITY_MAX, GLOW_OPACITY_MIN, GLOW_PARTICLES, LINK_DISTANCE_PX, LINKED_PARTICLES_MAX,
    LINKED_PARTICLES_PER_PX,
};

/// Palette for the hero glow variant.
const GLOW_PALETTE: [&str; 5] = ["#4F46E5", "#7C3AED", "#EC4899", "#3B82F6", "#8B5CF6"];

/// One point mass. `opacity_delta` is zero for non-pulsing fields.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub vx: f64,
    pub vy: f64,
    pub color: &'static str,
    pub opacity: f64,
    pub opacity_delta: f64,
}

/// How many particles a field seeds for a given viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParticleCount {
    Fixed(usize),
    /// One particle per N pixels of width, capped.
    PerWidth(f64),
}

impl ParticleCount {
    #[must_use]
    fn resolve(self, width: f64) -> usize {
        match self {
            Self::Fixed(n) => n,
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Self::PerWidth(px) => {
                let n = (width / px).floor().max(1.0) as usize;
                n.min(LINKED_PARTICLES_MAX)
            }
        }
    }
}

/// Field tuning shared by both variants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldConfig {
    pub count: ParticleCount,
    pub size_min: f64,
    pub size_max: f64,
    /// Velocity components are drawn uniformly from `[-speed/2, speed/2]`.
    pub speed: f64,
    /// Pairs closer than this get a connecting line when set.
    pub link_distance: Option<f64>,
    /// Opacity oscillation bounds when set.
    pub pulse: Option<(f64, f64)>,
    pub palette: &'static [&'static str],
}

impl FieldConfig {
    /// Monochrome linked web behind the navigation header.
    #[must_use]
    pub fn header() -> Self {
        Self {
            count: ParticleCount::PerWidth(LINKED_PARTICLES_PER_PX),
            size_min: 0.5,
            size_max: 2.5,
            speed: 0.5,
            link_distance: Some(LINK_DISTANCE_PX),
            pulse: None,
            palette: &[],
        }
    }

    /// Colored glow drift behind the hero section.
    #[must_use]
    pub fn hero() -> Self {
        Self {
            count: ParticleCount::Fixed(GLOW_PARTICLES),
            size_min: 1.0,
            size_max: 6.0,
            speed: 0.5,
            link_distance: None,
            pulse: Some((GLOW_OPACITY_MIN, GLOW_OPACITY_MAX)),
            palette: &GLOW_PALETTE,
        }
    }
}

/// The running simulation. Seeded once per mount; `resize` re-seeds so
/// particles always cover the current viewport.
pub struct ParticleField {
    config: FieldConfig,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    rng: SmallRng,
}

impl ParticleField {
    #[must_use]
    pub fn new(config: FieldConfig, width: f64, height: f64, seed: u64) -> Self {
        let mut field = Self {
            config,
            width: width.max(1.0),
            height: height.max(1.0),
            particles: Vec::new(),
            rng: SmallRng::seed_from_u64(seed),
        };
        field.seed_particles();
        field
    }

    /// Re-seed for a new viewport size.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
        self.seed_particles();
    }

    fn seed_particles(&mut self) {
        let count = self.config.count.resolve(self.width);
        let (width, height) = (self.width, self.height);
        let config = self.config;
        self.particles.clear();
        for _ in 0..count {
            let color = if config.palette.is_empty() {
                ""
            } else {
                config.palette[self.rng.random_range(0..config.palette.len())]
            };
            let (opacity, opacity_delta) = match config.pulse {
                Some((lo, hi)) => {
                    let opacity = self.rng.random_range(lo..hi);
                    let delta = self.rng.random_range(0.0..0.01);
                    let delta = if self.rng.random_bool(0.5) { delta } else { -delta };
                    (opacity, delta)
                }
                None => (1.0, 0.0),
            };
            self.particles.push(Particle {
                x: self.rng.random_range(0.0..width),
                y: self.rng.random_range(0.0..height),
                size: self.rng.random_range(config.size_min..config.size_max),
                vx: (self.rng.random::<f64>() - 0.5) * config.speed,
                vy: (self.rng.random::<f64>() - 0.5) * config.speed,
                color,
                opacity,
                opacity_delta,
            });
        }
    }

    /// Advance every particle one frame: Euler integration, boundary
    /// reflection with clamping, and the opacity oscillator.
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        let pulse = self.config.pulse;
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;

            if p.x < 0.0 || p.x > width {
                p.vx = -p.vx;
                p.x = p.x.clamp(0.0, width);
            }
            if p.y < 0.0 || p.y > height {
                p.vy = -p.vy;
                p.y = p.y.clamp(0.0, height);
            }

            if let Some((lo, hi)) = pulse {
                p.opacity += p.opacity_delta;
                if p.opacity > hi || p.opacity < lo {
                    p.opacity_delta = -p.opacity_delta;
                    p.opacity = p.opacity.clamp(lo, hi);
                }
            }
        }
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Whether this field draws pair links.
    #[must_use]
    pub fn linked(&self) -> bool {
        self.config.link_distance.is_some()
    }

    /// Index pairs closer than the configured link distance (i < j).
    #[must_use]
    pub fn links(&self) -> Vec<(usize, usize)> {
        let Some(max_dist) = self.config.link_distance else {
            return Vec::new();
        };
        let mut pairs = Vec::new();
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let dx = self.particles[i].x - self.particles[j].x;
                let dy = self.particles[i].y - self.particles[j].y;
                if (dx * dx + dy * dy).sqrt() < max_dist {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }
}
