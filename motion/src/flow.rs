//! Signal-flow network: a fixed layered graph with randomized forward
//! edges and moving signal dots that pulse nodes on arrival.
//!
//! Purely illustrative: the graph carries no data. Layout, edge choice,
//! and signal timing are randomized per mount; the structural invariants
//! (signal cap, pulse decay, forward-only edges) are what matter.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::consts::{FLOW_LAYERS, FLOW_MAX_SIGNALS, FLOW_PULSE_DECAY, FLOW_SPAWN_CHANCE};

/// Node palette, cycled per layer.
const FLOW_PALETTE: [&str; 4] = ["#4F46E5", "#7C3AED", "#8B5CF6", "#EC4899"];

/// Fraction of an edge kept (edges are dropped with probability 0.2).
const EDGE_KEEP_CHANCE: f64 = 0.8;

/// Initial signals seeded at construction.
const INITIAL_SIGNALS: usize = 3;

/// Chance that an expired output-layer signal spawns a replacement.
const RESPAWN_CHANCE: f64 = 0.3;

#[derive(Clone, Debug)]
pub struct FlowNode {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub layer: usize,
    pub color: &'static str,
    /// 1.0 right after a signal arrives, decaying to 0.
    pub pulse: f64,
}

#[derive(Clone, Debug)]
pub struct FlowSignal {
    pub from: usize,
    pub to: usize,
    /// Position along the edge in `[0, 1]`.
    pub progress: f64,
    pub speed: f64,
    pub color: &'static str,
    pub size: f64,
}

pub struct FlowNet {
    width: f64,
    height: f64,
    nodes: Vec<FlowNode>,
    /// Outgoing edge targets per node index (always into the next layer).
    edges: Vec<Vec<usize>>,
    signals: Vec<FlowSignal>,
    rng: SmallRng,
}

impl FlowNet {
    #[must_use]
    pub fn new(width: f64, height: f64, seed: u64) -> Self {
        let mut net = Self {
            width: width.max(1.0),
            height: height.max(1.0),
            nodes: Vec::new(),
            edges: Vec::new(),
            signals: Vec::new(),
            rng: SmallRng::seed_from_u64(seed),
        };
        net.build();
        net
    }

    /// Rebuild layout and edges for a new viewport; live signals reset.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
        self.build();
    }

    fn build(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.signals.clear();

        let widest = FLOW_LAYERS.iter().copied().max().unwrap_or(1);
        let margin = self.height * 0.12;
        let available = self.height - margin * 2.0;
        #[allow(clippy::cast_precision_loss)]
        let spacing = available / widest as f64;

        for (layer, &count) in FLOW_LAYERS.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let layer_x = self.width * (layer as f64 + 1.0) / (FLOW_LAYERS.len() as f64 + 1.0);
            #[allow(clippy::cast_precision_loss)]
            let layer_height = (count as f64 - 1.0) * spacing;
            for i in 0..count {
                #[allow(clippy::cast_precision_loss)]
                let y = margin + (available / 2.0 - layer_height / 2.0) + i as f64 * spacing;
                self.nodes.push(FlowNode {
                    x: layer_x,
                    y,
                    radius: 10.0,
                    layer,
                    color: FLOW_PALETTE[layer % FLOW_PALETTE.len()],
                    pulse: self.rng.random::<f64>(),
                });
            }
        }

        // Forward edges: each next-layer node is reachable with high
        // probability so signals rarely dead-end before the output layer.
        for i in 0..self.nodes.len() {
            let layer = self.nodes[i].layer;
            let mut out = Vec::new();
            if layer + 1 < FLOW_LAYERS.len() {
                let next_start = self.layer_start(layer + 1);
                for j in 0..FLOW_LAYERS[layer + 1] {
                    if self.rng.random::<f64>() < EDGE_KEEP_CHANCE {
                        out.push(next_start + j);
                    }
                }
            }
            self.edges.push(out);
        }

        for _ in 0..INITIAL_SIGNALS {
            self.spawn_signal();
        }
    }

    /// Index of the first node in `layer`.
    fn layer_start(&self, layer: usize) -> usize {
        FLOW_LAYERS[..layer].iter().sum()
    }

    fn spawn_signal(&mut self) {
        let input_count = FLOW_LAYERS[0];
        let start = self.rng.random_range(0..input_count);
        if self.edges[start].is_empty() {
            return;
        }
        let to = self.edges[start][self.rng.random_range(0..self.edges[start].len())];
        let signal = FlowSignal {
            from: start,
            to,
            progress: 0.0,
            speed: 0.01 + self.rng.random::<f64>() * 0.02,
            color: self.nodes[start].color,
            size: 3.0 + self.rng.random::<f64>() * 2.0,
        };
        self.signals.push(signal);
    }

    /// Advance one frame: move signals, hand them off at arrivals, decay
    /// node pulses, and occasionally spawn new input signals.
    pub fn step(&mut self) {
        let mut i = self.signals.len();
        while i > 0 {
            i -= 1;
            self.signals[i].progress += self.signals[i].speed;
            if self.signals[i].progress < 1.0 {
                continue;
            }

            let arrived_at = self.signals[i].to;
            self.nodes[arrived_at].pulse = 1.0;

            let last_layer = self.nodes[arrived_at].layer + 1 >= FLOW_LAYERS.len();
            if !last_layer && !self.edges[arrived_at].is_empty() {
                let next =
                    self.edges[arrived_at][self.rng.random_range(0..self.edges[arrived_at].len())];
                let size = self.signals[i].size;
                self.signals[i] = FlowSignal {
                    from: arrived_at,
                    to: next,
                    progress: 0.0,
                    speed: 0.01 + self.rng.random::<f64>() * 0.02,
                    color: self.nodes[arrived_at].color,
                    size,
                };
            } else {
                self.signals.remove(i);
                if self.rng.random::<f64>() < RESPAWN_CHANCE {
                    self.spawn_signal();
                }
            }
        }

        if self.signals.len() < FLOW_MAX_SIGNALS && self.rng.random::<f64>() < FLOW_SPAWN_CHANCE {
            self.spawn_signal();
        }

        for node in &mut self.nodes {
            if node.pulse > 0.0 {
                node.pulse = (node.pulse - FLOW_PULSE_DECAY).max(0.0);
            }
        }
    }

    /// Current x/y of a moving signal, interpolated along its edge.
    #[must_use]
    pub fn signal_position(&self, signal: &FlowSignal) -> (f64, f64) {
        let a = &self.nodes[signal.from];
        let b = &self.nodes[signal.to];
        let t = signal.progress.clamp(0.0, 1.0);
        (a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }

    #[must_use]
    pub fn nodes(&self) -> &[FlowNode] {
        &self.nodes
    }

    #[must_use]
    pub fn edges(&self) -> &[Vec<usize>] {
        &self.edges
    }

    #[must_use]
    pub fn signals(&self) -> &[FlowSignal] {
        &self.signals
    }
}
