use super::*;

fn net() -> FlowNet {
    FlowNet::new(900.0, 400.0, 42)
}

#[test]
fn node_count_matches_layer_shape() {
    let net = net();
    assert_eq!(net.nodes().len(), FLOW_LAYERS.iter().sum::<usize>());
    for layer in 0..FLOW_LAYERS.len() {
        let count = net.nodes().iter().filter(|n| n.layer == layer).count();
        assert_eq!(count, FLOW_LAYERS[layer]);
    }
}

#[test]
fn edges_only_point_to_the_next_layer() {
    let net = net();
    for (i, targets) in net.edges().iter().enumerate() {
        for &t in targets {
            assert_eq!(net.nodes()[t].layer, net.nodes()[i].layer + 1);
        }
    }
    // Output layer has no outgoing edges.
    for node in net.nodes().iter().enumerate().filter(|(_, n)| n.layer == FLOW_LAYERS.len() - 1) {
        assert!(net.edges()[node.0].is_empty());
    }
}

#[test]
fn signal_count_never_exceeds_cap() {
    let mut net = net();
    for _ in 0..5_000 {
        net.step();
        assert!(net.signals().len() <= FLOW_MAX_SIGNALS);
    }
}

#[test]
fn signals_progress_within_unit_range_between_valid_nodes() {
    let mut net = net();
    for _ in 0..2_000 {
        net.step();
        for s in net.signals() {
            assert!(s.progress < 1.0 + s.speed);
            assert!(s.from < net.nodes().len());
            assert!(s.to < net.nodes().len());
            let (x, y) = net.signal_position(s);
            assert!(x.is_finite() && y.is_finite());
        }
    }
}

#[test]
fn pulses_decay_to_zero_and_never_go_negative() {
    let mut net = net();
    for _ in 0..2_000 {
        net.step();
        for n in net.nodes() {
            assert!(n.pulse >= 0.0 && n.pulse <= 1.0);
        }
    }
}

#[test]
fn layout_keeps_nodes_inside_the_viewport_margins() {
    let net = FlowNet::new(600.0, 300.0, 9);
    for n in net.nodes() {
        assert!(n.x > 0.0 && n.x < 600.0);
        assert!(n.y >= 300.0 * 0.12 - 1e-9);
        assert!(n.y <= 300.0 * 0.88 + 1e-9);
    }
}

#[test]
fn resize_rebuilds_layout() {
    let mut net = net();
    net.resize(300.0, 150.0);
    assert_eq!(net.nodes().len(), FLOW_LAYERS.iter().sum::<usize>());
    for n in net.nodes() {
        assert!(n.x < 300.0 && n.y < 150.0);
    }
}
