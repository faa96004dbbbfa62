//! Software-projected 3D neural scene: layered spheres and connecting
//! lines slowly orbiting the y-axis, with randomly refreshed "active"
//! neurons and edges to suggest inference traffic.
//!
//! No data backs the scene; the structure (layer shape, projection,
//! refresh cadence) is the contract.

#[cfg(test)]
#[path = "orbit_test.rs"]
mod orbit_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::consts::{
    ORBIT_CAMERA_Z, ORBIT_LAYER_DISTANCE, ORBIT_LAYERS, ORBIT_NEURON_SIZE, ORBIT_REFRESH_FRAMES,
    ORBIT_SPIN_STEP,
};

/// Vertical pitch between stacked neurons in a layer.
const NEURON_PITCH: f64 = ORBIT_NEURON_SIZE * 2.5;

/// Fraction of each layer highlighted as active.
const ACTIVE_NEURON_RATIO: f64 = 0.4;

/// Fraction of each adjacent layer pair sampled for active edges.
const ACTIVE_EDGE_RATIO: f64 = 0.3;

/// Input/hidden/output sphere colors plus the active highlight pair.
pub const COLOR_INPUT: &str = "#4f46e5";
pub const COLOR_HIDDEN: &str = "#8b5cf6";
pub const COLOR_OUTPUT: &str = "#ec4899";
pub const COLOR_EDGE: &str = "#94a3b8";
pub const COLOR_ACTIVE_NEURON: &str = "#f59e0b";
pub const COLOR_ACTIVE_EDGE: &str = "#10b981";

/// A neuron's world-space position and layer address.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neuron {
    pub layer: usize,
    pub index: usize,
    pub pos: [f64; 3],
}

impl Neuron {
    /// Base sphere color by layer role.
    #[must_use]
    pub fn color(&self) -> &'static str {
        if self.layer == 0 {
            COLOR_INPUT
        } else if self.layer == ORBIT_LAYERS.len() - 1 {
            COLOR_OUTPUT
        } else {
            COLOR_HIDDEN
        }
    }
}

/// A neuron projected into screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    /// Perspective scale factor; multiply world sizes by this.
    pub scale: f64,
    /// Camera-space depth, larger = closer.
    pub depth: f64,
}

pub struct OrbitScene {
    neurons: Vec<Neuron>,
    /// Every adjacent-layer pair as (neuron index, neuron index).
    edges: Vec<(usize, usize)>,
    active_neurons: Vec<(usize, usize)>,
    active_edges: Vec<(usize, usize)>,
    angle: f64,
    frame: u32,
    rng: SmallRng,
}

impl OrbitScene {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut neurons = Vec::new();
        #[allow(clippy::cast_precision_loss)]
        let span = (ORBIT_LAYERS.len() as f64 - 1.0) * ORBIT_LAYER_DISTANCE;
        for (layer, &count) in ORBIT_LAYERS.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let x = layer as f64 * ORBIT_LAYER_DISTANCE - span / 2.0;
            #[allow(clippy::cast_precision_loss)]
            let y_offset = (count as f64 - 1.0) * NEURON_PITCH / 2.0;
            for index in 0..count {
                #[allow(clippy::cast_precision_loss)]
                let y = index as f64 * NEURON_PITCH - y_offset;
                neurons.push(Neuron { layer, index, pos: [x, y, 0.0] });
            }
        }

        let mut edges = Vec::new();
        let mut offset = 0;
        for layer in 0..ORBIT_LAYERS.len() - 1 {
            let next_offset = offset + ORBIT_LAYERS[layer];
            for i in 0..ORBIT_LAYERS[layer] {
                for j in 0..ORBIT_LAYERS[layer + 1] {
                    edges.push((offset + i, next_offset + j));
                }
            }
            offset = next_offset;
        }

        let mut scene = Self {
            neurons,
            edges,
            active_neurons: Vec::new(),
            active_edges: Vec::new(),
            angle: 0.0,
            frame: 0,
            rng: SmallRng::seed_from_u64(seed),
        };
        scene.refresh_active();
        scene
    }

    /// Advance one frame: spin, and periodically re-randomize the active sets.
    pub fn step(&mut self) {
        self.angle = (self.angle + ORBIT_SPIN_STEP) % std::f64::consts::TAU;
        self.frame = self.frame.wrapping_add(1);
        if self.frame % ORBIT_REFRESH_FRAMES == 0 {
            self.refresh_active();
        }
    }

    fn refresh_active(&mut self) {
        self.active_neurons.clear();
        for (layer, &count) in ORBIT_LAYERS.iter().enumerate() {
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let picks = (count as f64 * ACTIVE_NEURON_RATIO).ceil() as usize;
            for _ in 0..picks {
                self.active_neurons.push((layer, self.rng.random_range(0..count)));
            }
        }

        self.active_edges.clear();
        let mut offset = 0;
        for layer in 0..ORBIT_LAYERS.len() - 1 {
            let next_offset = offset + ORBIT_LAYERS[layer];
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let sources = (ORBIT_LAYERS[layer] as f64 * ACTIVE_EDGE_RATIO).ceil() as usize;
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let targets = (ORBIT_LAYERS[layer + 1] as f64 * ACTIVE_EDGE_RATIO).ceil() as usize;
            for _ in 0..sources * targets {
                let from = offset + self.rng.random_range(0..ORBIT_LAYERS[layer]);
                let to = next_offset + self.rng.random_range(0..ORBIT_LAYERS[layer + 1]);
                self.active_edges.push((from, to));
            }
            offset = next_offset;
        }
    }

    /// Rotate about the y-axis and project through the perspective camera.
    /// Screen origin is the canvas center; `focal` scales world units to
    /// pixels (callers pass something proportional to viewport height).
    #[must_use]
    pub fn project(&self, pos: [f64; 3], focal: f64) -> Projected {
        let (sin, cos) = self.angle.sin_cos();
        let x = pos[0] * cos + pos[2] * sin;
        let z = -pos[0] * sin + pos[2] * cos;
        let denom = (ORBIT_CAMERA_Z - z).max(0.1);
        let scale = focal / denom;
        Projected { x: x * scale, y: -pos[1] * scale, scale, depth: z }
    }

    /// Sinusoidal scale pulse applied to active neurons.
    #[must_use]
    pub fn pulse_scale(&self) -> f64 {
        1.0 + (f64::from(self.frame) * 0.066).sin() * 0.1
    }

    #[must_use]
    pub fn is_neuron_active(&self, neuron: &Neuron) -> bool {
        self.active_neurons.contains(&(neuron.layer, neuron.index))
    }

    #[must_use]
    pub fn is_edge_active(&self, edge: (usize, usize)) -> bool {
        self.active_edges.contains(&edge)
    }

    #[must_use]
    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    #[must_use]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[must_use]
    pub fn active_neurons(&self) -> &[(usize, usize)] {
        &self.active_neurons
    }

    #[must_use]
    pub fn active_edges(&self) -> &[(usize, usize)] {
        &self.active_edges
    }
}
