//! Scene Session Tests
//!
//! Tests for:
//! - Tile raise / lower through pointer clicks and moves
//! - Single-raised invariant and steady-state heights
//! - Board <-> Immersive transitions and the hard reset on return
//! - Exit control hover and hover-gated spin
//! - Camera yaw, resize, and the wasm facade's scalar surface

use glam::{Vec2, Vec3};

use floor_engine::{FloorWorld, Mode, SceneConfig, SceneSession};

const W: u32 = 1280;
const H: u32 = 720;
const EPSILON: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn session() -> SceneSession {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = SceneConfig { board_size: 12, ..SceneConfig::default() };
    SceneSession::new(config, W, H, 1.0).unwrap()
}

fn ndc_of(s: &SceneSession, p: Vec3) -> Vec2 {
    let n = s.camera().project(p);
    Vec2::new(n.x, n.y)
}

fn tile(s: &SceneSession, i: usize, j: usize) -> usize {
    s.grid().index(i, j).unwrap()
}

fn tile_ndc(s: &SceneSession, i: usize, j: usize) -> Vec2 {
    ndc_of(s, s.grid().position(tile(s, i, j)))
}

fn floor_ndc(s: &SceneSession, idx: usize) -> Vec2 {
    ndc_of(s, s.grid().floor_position(s.grid().floor_of(idx).unwrap()))
}

fn exit_ndc(s: &SceneSession) -> Vec2 {
    ndc_of(s, s.exit().position)
}

fn client_of(ndc: Vec2, w: u32, h: u32) -> (f32, f32) {
    ((ndc.x + 1.0) / 2.0 * w as f32, (1.0 - ndc.y) / 2.0 * h as f32)
}

fn settle(s: &mut SceneSession) {
    for _ in 0..200 {
        s.tick(0.0);
    }
}

/// Click a dark tile, let it rise, then click the floor it uncovered
fn enter_immersive_via(s: &mut SceneSession, i: usize, j: usize) {
    s.click_ndc(tile_ndc(s, i, j));
    settle(s);
    let idx = tile(s, i, j);
    s.click_ndc(floor_ndc(s, idx));
    assert_eq!(s.mode(), Mode::Immersive);
}

fn off_tiles_at_rest(s: &SceneSession) -> usize {
    let g = s.grid();
    (0..g.len()).filter(|&idx| g.y[idx] != g.original[idx]).count()
}

// ============================================================================
// Tile raise / lower
// ============================================================================

#[test]
fn click_dark_tile_raises_it() {
    let mut s = session();
    let idx = tile(&s, 6, 5);
    let (cx, cy) = client_of(tile_ndc(&s, 6, 5), W, H);

    s.click(cx, cy);

    let g = s.grid();
    let f = g.floor_of(idx).unwrap();
    assert_eq!(g.target[idx], g.original[idx] + 400.0);
    assert!(g.raised[idx]);
    assert!(g.floors.visible[f]);
    assert_eq!(g.floors.target[f], 1.0);
    assert_eq!(s.raised_tile(), Some(idx));
}

#[test]
fn pointer_leaving_floor_lowers_tile() {
    let mut s = session();
    let idx = tile(&s, 6, 5);
    s.click_ndc(tile_ndc(&s, 6, 5));
    settle(&mut s);

    let (cx, cy) = client_of(tile_ndc(&s, 5, 4), W, H);
    s.pointer_move(cx, cy);

    let g = s.grid();
    let f = g.floor_of(idx).unwrap();
    assert_eq!(g.target[idx], g.original[idx]);
    assert_eq!(g.floors.target[f], 0.0);
    assert!(!g.raised[idx]);
    assert_eq!(s.raised_tile(), None);
}

#[test]
fn pointer_on_own_floor_keeps_tile_raised() {
    let mut s = session();
    let idx = tile(&s, 6, 5);
    s.click_ndc(tile_ndc(&s, 6, 5));
    settle(&mut s);

    s.pointer_move_ndc(floor_ndc(&s, idx));

    assert_eq!(s.raised_tile(), Some(idx));
    assert_eq!(s.grid().target[idx], s.grid().original[idx] + 400.0);
}

#[test]
fn raised_tile_settles_exactly_on_target() {
    let mut s = session();
    let idx = tile(&s, 6, 5);
    s.click_ndc(tile_ndc(&s, 6, 5));
    settle(&mut s);

    let g = s.grid();
    let f = g.floor_of(idx).unwrap();
    assert_eq!(g.y[idx], 0.0);
    assert_eq!(g.floors.opacity[f], 1.0);
    assert!(g.floors.visible[f]);
}

#[test]
fn light_tile_click_is_a_noop() {
    let mut s = session();
    let idx = tile(&s, 6, 4);
    assert!(!s.grid().dark[idx]);
    assert_eq!(s.grid().floor_of(idx), None);

    s.click_ndc(tile_ndc(&s, 6, 4));

    assert_eq!(s.raised_tile(), None);
    assert_eq!(s.grid().target[idx], s.grid().original[idx]);
}

#[test]
fn click_on_empty_space_is_a_noop() {
    let mut s = session();
    s.click_ndc(Vec2::new(0.0, 0.9));
    s.pointer_move_ndc(Vec2::new(0.0, 0.9));
    assert_eq!(s.raised_tile(), None);
    assert_eq!(s.mode(), Mode::Board);
}

#[test]
fn clicking_the_raised_tile_again_keeps_it_raised() {
    let mut s = session();
    let idx = tile(&s, 6, 5);
    let at = tile_ndc(&s, 6, 5);

    s.click_ndc(at);
    // No tick in between: the tile has not moved, so this lands on it, not its floor.
    s.click_ndc(at);
    assert_eq!(s.mode(), Mode::Board);
    assert_eq!(s.raised_tile(), Some(idx));

    let g = s.grid();
    let f = g.floor_of(idx).unwrap();
    assert_eq!(g.target[idx], g.original[idx] + 400.0);
    assert_eq!(g.floors.target[f], 1.0);
    assert!(g.raised[idx]);
    assert_eq!(g.raised_count(), 1);

    settle(&mut s);
    assert_eq!(s.grid().y[idx], s.grid().original[idx] + 400.0);
    assert_eq!(off_tiles_at_rest(&s), 1);
}

#[test]
fn light_tile_click_keeps_current_raise() {
    let mut s = session();
    let idx = tile(&s, 6, 5);
    s.click_ndc(tile_ndc(&s, 6, 5));
    s.click_ndc(tile_ndc(&s, 6, 4));
    assert_eq!(s.raised_tile(), Some(idx));
}

// ============================================================================
// Single-raised invariant
// ============================================================================

#[test]
fn raising_another_tile_lowers_the_first() {
    let mut s = session();
    let first = tile(&s, 6, 5);
    let second = tile(&s, 5, 4);

    s.click_ndc(tile_ndc(&s, 6, 5));
    settle(&mut s);
    s.click_ndc(tile_ndc(&s, 5, 4));

    let g = s.grid();
    assert_eq!(g.target[first], g.original[first]);
    assert_eq!(g.floors.target[g.floor_of(first).unwrap()], 0.0);
    assert_eq!(g.target[second], g.original[second] + 400.0);
    assert_eq!(s.raised_tile(), Some(second));

    settle(&mut s);
    let g = s.grid();
    assert_eq!(g.y[first], g.original[first]);
    assert_eq!(g.y[second], g.original[second] + 400.0);
    assert_eq!(off_tiles_at_rest(&s), 1);
}

#[test]
fn at_most_one_tile_is_raised() {
    let mut s = session();
    // Far to near, so a lifted or settling tile never sits on a later click's ray.
    let clicks = [(5, 2), (7, 2), (5, 4), (7, 4), (6, 5)];

    for (n, &(i, j)) in clicks.iter().enumerate() {
        s.click_ndc(tile_ndc(&s, i, j));
        assert_eq!(s.raised_tile(), Some(tile(&s, i, j)));
        assert!(s.grid().raised_count() <= 1, "two tiles raised after click {n}");
        for _ in 0..7 {
            s.tick(0.0);
            assert!(s.grid().raised_count() <= 1);
        }
    }

    settle(&mut s);
    assert_eq!(s.grid().raised_count(), 1);
    assert_eq!(off_tiles_at_rest(&s), 1);
}

#[test]
fn heights_are_idempotent_at_rest() {
    let mut s = session();
    s.click_ndc(tile_ndc(&s, 6, 5));
    settle(&mut s);

    let heights = s.grid().y.clone();
    let opacity = s.grid().floors.opacity.clone();
    for _ in 0..10 {
        s.tick(0.0);
    }
    assert_eq!(s.grid().y, heights);
    assert_eq!(s.grid().floors.opacity, opacity);
}

// ============================================================================
// Mode transitions
// ============================================================================

#[test]
fn clicking_revealed_floor_enters_immersive() {
    let mut s = session();
    let idx = tile(&s, 6, 5);
    s.click_ndc(tile_ndc(&s, 6, 5));
    settle(&mut s);

    s.click_ndc(floor_ndc(&s, idx));

    assert_eq!(s.mode(), Mode::Immersive);
    assert!(s.exit().visible);
    assert!(!s.grid().visible);
    assert_eq!(s.surface().clear_color, 0xffffff);
    assert_eq!(s.raised_tile(), None);
    let f = s.grid().floor_of(idx).unwrap();
    assert!(!s.grid().floors.visible[f], "clicked floor hides immediately");
}

#[test]
fn immersive_round_trip_restores_board() {
    let mut s = session();
    let before_color = s.surface().clear_color;
    let before_visible = s.grid().visible;

    enter_immersive_via(&mut s, 6, 5);
    s.click_ndc(exit_ndc(&s));

    assert_eq!(s.mode(), Mode::Board);
    assert_eq!(s.surface().clear_color, before_color);
    assert_eq!(s.grid().visible, before_visible);
    assert!(!s.exit().visible);
}

#[test]
fn return_from_immersive_hard_resets_board() {
    let mut s = session();
    s.click_ndc(tile_ndc(&s, 6, 5));
    settle(&mut s);
    // (6, 5) was raised before (5, 4) took over.
    enter_immersive_via(&mut s, 5, 4);

    s.click_ndc(exit_ndc(&s));

    let g = s.grid();
    for idx in 0..g.len() {
        assert_eq!(g.y[idx], g.original[idx]);
        assert_eq!(g.target[idx], g.original[idx]);
        assert!(!g.raised[idx]);
    }
    assert!(g.floors.visible.iter().all(|&v| !v));
    assert!(g.floors.opacity.iter().all(|&o| o == 0.0));
    assert!(g.floors.target.iter().all(|&o| o == 0.0));
    assert_eq!(s.raised_tile(), None);

    // Nothing drifts afterwards.
    settle(&mut s);
    assert_eq!(off_tiles_at_rest(&s), 0);
    assert!(s.grid().floors.visible.iter().all(|&v| !v));
}

#[test]
fn board_input_is_ignored_in_immersive() {
    let mut s = session();
    enter_immersive_via(&mut s, 6, 5);

    let heights = s.grid().target.clone();
    s.click_ndc(tile_ndc(&s, 5, 4));
    assert_eq!(s.mode(), Mode::Immersive);
    assert_eq!(s.grid().target, heights);
    assert_eq!(s.raised_tile(), None);
}

// ============================================================================
// Exit control
// ============================================================================

#[test]
fn hovering_exit_spins_it_without_changing_mode() {
    let mut s = session();
    enter_immersive_via(&mut s, 6, 5);

    s.pointer_move_ndc(exit_ndc(&s));
    assert!(s.exit().hovered);
    assert_eq!(s.mode(), Mode::Immersive);

    for _ in 0..3 {
        s.tick(0.0);
    }
    assert!(approx(s.exit().spin, 0.06));

    s.pointer_move_ndc(Vec2::new(-0.9, -0.9));
    assert!(!s.exit().hovered);
    s.tick(0.0);
    assert!(approx(s.exit().spin, 0.06));
}

#[test]
fn clicking_exit_clears_hover() {
    let mut s = session();
    enter_immersive_via(&mut s, 6, 5);

    let target = exit_ndc(&s);
    s.pointer_move_ndc(target);
    s.click_ndc(target);

    assert_eq!(s.mode(), Mode::Board);
    assert!(!s.exit().hovered);
    let spin = s.exit().spin;
    s.tick(0.0);
    assert_eq!(s.exit().spin, spin);
}

#[test]
fn click_beside_exit_stays_immersive() {
    let mut s = session();
    enter_immersive_via(&mut s, 6, 5);
    s.click_ndc(Vec2::new(-0.9, 0.9));
    assert_eq!(s.mode(), Mode::Immersive);
}

#[test]
fn exit_is_hidden_on_the_board() {
    let mut s = session();
    s.pointer_move_ndc(exit_ndc(&s));
    assert!(!s.exit().hovered);
    assert!(!s.exit().visible);
}

// ============================================================================
// Camera and surface
// ============================================================================

#[test]
fn board_camera_yaw_follows_wall_clock() {
    let mut s = session();
    s.tick(1_000.0);
    assert!(approx(s.camera().yaw, 0.0));
    s.tick(41_000.0);
    assert!(approx(s.camera().yaw, 1.0));
    assert_eq!(s.camera().pitch, 0.0);
}

#[test]
fn immersive_camera_is_pinned() {
    let mut s = session();
    enter_immersive_via(&mut s, 6, 5);
    s.tick(90_000.0);
    assert_eq!(s.camera().yaw, 0.0);
    assert_eq!(s.camera().pitch, 0.0);
    assert_eq!(s.camera().position, Vec3::new(0.0, -350.0, 0.0));
}

#[test]
fn resize_updates_aspect_and_surface() {
    let mut s = session();
    s.resize(800, 800, 3.0);
    assert!(approx(s.camera().aspect, 1.0));
    assert_eq!((s.surface().width, s.surface().height), (800, 800));
    assert_eq!(s.surface().pixel_ratio, 2.0);

    // Pointer coordinates are read against the new size.
    let idx = tile(&s, 6, 5);
    let (cx, cy) = client_of(tile_ndc(&s, 6, 5), 800, 800);
    s.click(cx, cy);
    assert_eq!(s.raised_tile(), Some(idx));
}

#[test]
fn every_tick_produces_a_frame() {
    let mut s = session();
    enter_immersive_via(&mut s, 6, 5);
    let before = s.encoder().frame();
    s.tick(0.0);
    s.tick(0.0);
    assert_eq!(s.encoder().frame(), before + 2);
}

#[test]
fn invalid_config_is_rejected() {
    let config = SceneConfig { tile_size: 0.0, ..SceneConfig::default() };
    assert!(SceneSession::new(config, W, H, 1.0).is_err());
}

// ============================================================================
// Facade
// ============================================================================

#[test]
fn facade_starts_on_the_board() {
    let mut world = FloorWorld::new(W, H, 1.0);
    world.tick(0.0);
    assert!(!world.immersive());
    assert!(world.grid_visible());
    assert!(!world.exit_visible());
    assert_eq!(world.clear_color(), 0xf5f5f5);
    assert_eq!(world.tile_count(), 120 * 120);
    assert_eq!(world.floor_count(), 120 * 120 / 2);
    assert_eq!(world.texture_size(), 128);
}

#[test]
fn facade_accepts_json_config() {
    let world = FloorWorld::with_config(r#"{ "board_size": 8 }"#, W, H, 1.0).ok().unwrap();
    assert_eq!(world.tile_count(), 64);

    let scene: serde_json::Value = serde_json::from_str(&world.scene_json().ok().unwrap()).unwrap();
    assert_eq!(scene["board"]["size"], 8);
    assert_eq!(scene["exit"]["segments"], 35);
}
