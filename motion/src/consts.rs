//! Shared numeric constants for the animation simulations.

/// Pixel radius within which two linked-field particles get a connecting line.
pub const LINK_DISTANCE_PX: f64 = 100.0;

/// One linked-field particle per this many CSS pixels of width.
pub const LINKED_PARTICLES_PER_PX: f64 = 15.0;

/// Hard cap on linked-field particles; the pairwise link pass is O(n²).
pub const LINKED_PARTICLES_MAX: usize = 96;

/// Fixed particle count for the hero glow field.
pub const GLOW_PARTICLES: usize = 50;

/// Hero glow opacity oscillates between these bounds.
pub const GLOW_OPACITY_MIN: f64 = 0.1;
pub const GLOW_OPACITY_MAX: f64 = 0.6;

/// Neurons per layer in the signal-flow network.
pub const FLOW_LAYERS: [usize; 4] = [5, 10, 10, 5];

/// Concurrent moving signals are capped at this many.
pub const FLOW_MAX_SIGNALS: usize = 15;

/// Per-frame chance of spawning a fresh signal at the input layer.
pub const FLOW_SPAWN_CHANCE: f64 = 0.03;

/// Node pulse decay per frame after a signal arrives.
pub const FLOW_PULSE_DECAY: f64 = 0.02;

/// Neurons per layer in the 3D scene.
pub const ORBIT_LAYERS: [usize; 5] = [6, 10, 8, 4, 2];

/// World-unit distance between adjacent 3D layers.
pub const ORBIT_LAYER_DISTANCE: f64 = 1.5;

/// World-unit radius of a 3D neuron sphere.
pub const ORBIT_NEURON_SIZE: f64 = 0.15;

/// Camera distance from the origin along +z.
pub const ORBIT_CAMERA_Z: f64 = 7.5;

/// Y-axis rotation per simulation frame (slow auto-spin).
pub const ORBIT_SPIN_STEP: f64 = 0.003;

/// Frames between re-randomizations of the active neuron/edge sets
/// (~1.2 s at the 33 ms animation tick).
pub const ORBIT_REFRESH_FRAMES: u32 = 36;
