use super::*;

#[test]
fn neuron_count_and_edge_count_match_layer_shape() {
    let scene = OrbitScene::new(5);
    assert_eq!(scene.neurons().len(), ORBIT_LAYERS.iter().sum::<usize>());

    let expected_edges: usize = ORBIT_LAYERS.windows(2).map(|w| w[0] * w[1]).sum();
    assert_eq!(scene.edges().len(), expected_edges);
}

#[test]
fn edges_connect_adjacent_layers_only() {
    let scene = OrbitScene::new(5);
    for &(a, b) in scene.edges() {
        assert_eq!(scene.neurons()[b].layer, scene.neurons()[a].layer + 1);
    }
}

#[test]
fn layer_colors_follow_role() {
    let scene = OrbitScene::new(5);
    for n in scene.neurons() {
        let expected = if n.layer == 0 {
            COLOR_INPUT
        } else if n.layer == ORBIT_LAYERS.len() - 1 {
            COLOR_OUTPUT
        } else {
            COLOR_HIDDEN
        };
        assert_eq!(n.color(), expected);
    }
}

#[test]
fn active_sets_refresh_on_the_interval_and_stay_index_valid() {
    let mut scene = OrbitScene::new(11);
    let initial = scene.active_neurons().to_vec();

    for _ in 0..ORBIT_REFRESH_FRAMES {
        scene.step();
    }
    // Refreshed picks are index-valid for their layer.
    for &(layer, index) in scene.active_neurons() {
        assert!(index < ORBIT_LAYERS[layer]);
    }
    for &(from, to) in scene.active_edges() {
        assert!(from < scene.neurons().len());
        assert!(to < scene.neurons().len());
        assert_eq!(scene.neurons()[to].layer, scene.neurons()[from].layer + 1);
    }
    // Same pick-count contract before and after refresh.
    assert_eq!(scene.active_neurons().len(), initial.len());
}

#[test]
fn equal_depth_neurons_project_at_equal_scale() {
    let scene = OrbitScene::new(3);
    // Two neurons in the same layer share x and z, so depth and scale match.
    let same_layer: Vec<_> = scene.neurons().iter().filter(|n| n.layer == 1).collect();
    let a = scene.project(same_layer[0].pos, 300.0);
    let b = scene.project(same_layer[1].pos, 300.0);
    assert!((a.depth - b.depth).abs() < 1e-12);
    assert!((a.scale - b.scale).abs() < 1e-12);
}

#[test]
fn spin_advances_and_wraps() {
    let mut scene = OrbitScene::new(3);
    let start = scene.angle();
    scene.step();
    assert!(scene.angle() > start);
    for _ in 0..5_000_000 / ORBIT_REFRESH_FRAMES as usize {
        scene.step();
    }
    assert!(scene.angle() >= 0.0 && scene.angle() < std::f64::consts::TAU);
}

#[test]
fn projection_scale_shrinks_with_distance() {
    let scene = OrbitScene::new(3);
    let near = scene.project([0.0, 0.0, 2.0], 300.0);
    let far = scene.project([0.0, 0.0, -2.0], 300.0);
    assert!(near.scale > far.scale);
}

#[test]
fn pulse_scale_stays_near_unity() {
    let mut scene = OrbitScene::new(3);
    for _ in 0..500 {
        scene.step();
        let s = scene.pulse_scale();
        assert!((0.9..=1.1).contains(&s));
    }
}
