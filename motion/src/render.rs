//! Canvas 2D drawing for the animation simulations.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It reads simulation state and
//! produces pixels; it never mutates a simulation.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! Hosts treat a failure the same as a missing context: the effect simply
//! stops drawing.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::ORBIT_NEURON_SIZE;
use crate::field::ParticleField;
use crate::flow::FlowNet;
use crate::orbit::{COLOR_ACTIVE_EDGE, COLOR_ACTIVE_NEURON, COLOR_EDGE, OrbitScene};

/// Scene background for the 3D view (slate-900).
const ORBIT_BACKGROUND: &str = "#0f172a";

/// Clear the full canvas.
pub fn clear(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.clear_rect(0.0, 0.0, width, height);
}

/// Draw the monochrome linked field: dots plus pair-connection lines.
///
/// `fill`/`stroke` come from the host so the header can match the theme.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_linked_field(
    ctx: &CanvasRenderingContext2d,
    field: &ParticleField,
    fill: &str,
    stroke: &str,
) -> Result<(), JsValue> {
    clear(ctx, field.width(), field.height());
    ctx.set_fill_style_str(fill);
    ctx.set_stroke_style_str(stroke);
    ctx.set_line_width(1.0);

    let particles = field.particles();
    for p in particles {
        ctx.begin_path();
        ctx.arc(p.x, p.y, p.size, 0.0, 2.0 * PI)?;
        ctx.fill();
    }

    for (i, j) in field.links() {
        let (a, b) = (&particles[i], &particles[j]);
        ctx.begin_path();
        ctx.move_to(a.x, a.y);
        ctx.line_to(b.x, b.y);
        ctx.stroke();
    }
    Ok(())
}

/// Draw the colored glow field with per-particle opacity.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_glow_field(ctx: &CanvasRenderingContext2d, field: &ParticleField) -> Result<(), JsValue> {
    clear(ctx, field.width(), field.height());
    for p in field.particles() {
        ctx.set_global_alpha(p.opacity);
        ctx.set_fill_style_str(p.color);
        ctx.begin_path();
        ctx.arc(p.x, p.y, p.size, 0.0, 2.0 * PI)?;
        ctx.fill();
    }
    ctx.set_global_alpha(1.0);
    Ok(())
}

/// Draw the signal-flow network: edges, moving signals with glow, nodes
/// with pulse halos.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_flow(
    ctx: &CanvasRenderingContext2d,
    net: &FlowNet,
    width: f64,
    height: f64,
) -> Result<(), JsValue> {
    clear(ctx, width, height);

    ctx.set_stroke_style_str("rgba(255, 255, 255, 0.15)");
    ctx.set_line_width(1.5);
    for (i, targets) in net.edges().iter().enumerate() {
        let from = &net.nodes()[i];
        for &t in targets {
            let to = &net.nodes()[t];
            ctx.begin_path();
            ctx.move_to(from.x, from.y);
            ctx.line_to(to.x, to.y);
            ctx.stroke();
        }
    }

    for signal in net.signals() {
        let (x, y) = net.signal_position(signal);

        ctx.set_fill_style_str(signal.color);
        ctx.begin_path();
        ctx.arc(x, y, signal.size, 0.0, 2.0 * PI)?;
        ctx.fill();

        let glow = ctx.create_radial_gradient(x, y, 0.0, x, y, signal.size * 3.0)?;
        glow.add_color_stop(0.0, signal.color)?;
        glow.add_color_stop(1.0, "rgba(0, 0, 0, 0)")?;
        ctx.set_fill_style_canvas_gradient(&glow);
        ctx.set_global_alpha(0.3);
        ctx.begin_path();
        ctx.arc(x, y, signal.size * 3.0, 0.0, 2.0 * PI)?;
        ctx.fill();
        ctx.set_global_alpha(1.0);
    }

    for node in net.nodes() {
        if node.pulse > 0.0 {
            let halo = node.radius * (1.0 + node.pulse * 2.0);
            let glow = ctx.create_radial_gradient(node.x, node.y, node.radius, node.x, node.y, halo)?;
            glow.add_color_stop(0.0, node.color)?;
            glow.add_color_stop(1.0, "rgba(0, 0, 0, 0)")?;
            ctx.set_fill_style_canvas_gradient(&glow);
            ctx.begin_path();
            ctx.arc(node.x, node.y, halo, 0.0, 2.0 * PI)?;
            ctx.fill();
        }

        ctx.set_fill_style_str(node.color);
        ctx.begin_path();
        ctx.arc(node.x, node.y, node.radius, 0.0, 2.0 * PI)?;
        ctx.fill();

        ctx.set_fill_style_str("rgba(255, 255, 255, 0.8)");
        ctx.begin_path();
        ctx.arc(node.x, node.y, node.radius * 0.4, 0.0, 2.0 * PI)?;
        ctx.fill();
    }
    Ok(())
}

/// Draw the 3D neural scene: perspective-projected edges then depth-sorted
/// neuron discs, active elements highlighted.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_orbit(
    ctx: &CanvasRenderingContext2d,
    scene: &OrbitScene,
    width: f64,
    height: f64,
) -> Result<(), JsValue> {
    ctx.set_fill_style_str(ORBIT_BACKGROUND);
    ctx.fill_rect(0.0, 0.0, width, height);

    let focal = height * 0.85;
    let (cx, cy) = (width / 2.0, height / 2.0);

    for &(a, b) in scene.edges() {
        let pa = scene.project(scene.neurons()[a].pos, focal);
        let pb = scene.project(scene.neurons()[b].pos, focal);
        let active = scene.is_edge_active((a, b));
        ctx.set_stroke_style_str(if active { COLOR_ACTIVE_EDGE } else { COLOR_EDGE });
        ctx.set_global_alpha(if active { 1.0 } else { 0.4 });
        ctx.set_line_width(1.0);
        ctx.begin_path();
        ctx.move_to(cx + pa.x, cy + pa.y);
        ctx.line_to(cx + pb.x, cy + pb.y);
        ctx.stroke();
    }
    ctx.set_global_alpha(1.0);

    // Painter's order: farthest neurons first.
    let mut order: Vec<usize> = (0..scene.neurons().len()).collect();
    order.sort_by(|&a, &b| {
        let da = scene.project(scene.neurons()[a].pos, focal).depth;
        let db = scene.project(scene.neurons()[b].pos, focal).depth;
        da.total_cmp(&db)
    });

    for i in order {
        let neuron = &scene.neurons()[i];
        let proj = scene.project(neuron.pos, focal);
        let active = scene.is_neuron_active(neuron);
        let pulse = if active { scene.pulse_scale() } else { 1.0 };
        let radius = (ORBIT_NEURON_SIZE * proj.scale * pulse).max(0.5);

        ctx.set_fill_style_str(if active { COLOR_ACTIVE_NEURON } else { neuron.color() });
        ctx.begin_path();
        ctx.arc(cx + proj.x, cy + proj.y, radius, 0.0, 2.0 * PI)?;
        ctx.fill();
    }

    Ok(())
}
