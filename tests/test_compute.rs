use bird_shooter::assets::{Assets, BuiltinCatalog};
use bird_shooter::compute::*;
use bird_shooter::consts::{FIELD_HEIGHT, FIELD_WIDTH, HIT_EXPLOSION_LIFE};
use bird_shooter::entities::*;
use bird_shooter::geometry::{in_bounds, Rect};
use bird_shooter::input::{HeldKeys, MoveKey};
use bird_shooter::GameConfig;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn assets() -> Assets {
    Assets::load(&BuiltinCatalog).unwrap()
}

fn make_state() -> PlayState {
    new_play_state(&assets(), &GameConfig::default())
}

fn keys(list: &[MoveKey]) -> HeldKeys {
    list.iter().fold(HeldKeys::none(), |held, key| held.with(*key))
}

fn inside(rect: &Rect) -> bool {
    in_bounds(rect, FIELD_WIDTH, FIELD_HEIGHT) == (true, true)
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── new_play_state ────────────────────────────────────────────────────────────

#[test]
fn play_state_starts_at_spawn_facing_right() {
    let s = make_state();
    assert_eq!(s.player.rect.center(), (900, 400));
    assert_eq!(s.player.direction, Direction::Right);
    assert_eq!(s.player.speed, 10);
    // side bird scaled by 0.8
    assert_eq!(s.player.rect.size(), (72, 64));
}

#[test]
fn play_state_empty_collections() {
    let s = make_state();
    assert!(s.beams.is_empty());
    assert!(s.explosions.is_empty());
    assert_eq!(s.life.value, 10);
    assert_eq!(s.frame, 0);
}

#[test]
fn play_state_uses_configured_life() {
    let config = GameConfig { initial_life: 3, ..GameConfig::default() };
    let s = new_play_state(&assets(), &config);
    assert_eq!(s.life.value, 3);
}

// ── player_sprites ────────────────────────────────────────────────────────────

#[test]
fn every_facing_has_a_sprite_pointing_that_way() {
    let table = player_sprites(&assets());
    for direction in Direction::ALL {
        assert_eq!(
            table.get(direction).octant(),
            direction.octant(),
            "sprite for {direction:?} points the wrong way"
        );
    }
}

// ── move_player ───────────────────────────────────────────────────────────────

#[test]
fn move_single_key() {
    let s = make_state();
    let p = move_player(&s.player, keys(&[MoveKey::Left]));
    assert_eq!(p.rect, s.player.rect.translated(-10, 0));
    assert_eq!(p.direction, Direction::Left);
    assert_eq!(p.rect.size(), s.player.rect.size());
}

#[test]
fn move_diagonal_up_right() {
    let s = make_state();
    let p = move_player(&s.player, keys(&[MoveKey::Up, MoveKey::Right]));
    assert_eq!(p.rect, s.player.rect.translated(10, -10));
    assert_eq!(p.direction, Direction::UpRight);
    assert_eq!(p.image(), p.sprites.get(Direction::UpRight));
}

#[test]
fn move_diagonal_blocked_at_top_edge_still_turns() {
    let mut player = make_state().player;
    player.rect.y = 0;
    let p = move_player(&player, keys(&[MoveKey::Up, MoveKey::Right]));
    // rigid: no slide along the free axis
    assert_eq!(p.rect, player.rect);
    assert_eq!(p.direction, Direction::UpRight);
}

#[test]
fn move_blocked_at_right_edge() {
    let mut player = make_state().player;
    player.rect.x = FIELD_WIDTH - player.rect.w - 5;
    let p = move_player(&player, keys(&[MoveKey::Right]));
    assert_eq!(p.rect, player.rect);
    assert_eq!(p.direction, Direction::Right);
}

#[test]
fn move_exactly_to_edge_is_allowed() {
    let mut player = make_state().player;
    player.rect.x = 10;
    let p = move_player(&player, keys(&[MoveKey::Left]));
    assert_eq!(p.rect.x, 0);
}

#[test]
fn opposing_keys_keep_position_and_facing() {
    let s = make_state();
    let p = move_player(&s.player, keys(&[MoveKey::Up, MoveKey::Down]));
    assert_eq!(p.rect, s.player.rect);
    assert_eq!(p.direction, Direction::Right);
}

#[test]
fn three_keys_resolve_to_the_uncancelled_axis() {
    let s = make_state();
    let p = move_player(&s.player, keys(&[MoveKey::Left, MoveKey::Up, MoveKey::Right]));
    assert_eq!(p.rect, s.player.rect.translated(0, -10));
    assert_eq!(p.direction, Direction::Up);
}

#[test]
fn facing_persists_while_idle() {
    let s = make_state();
    let mut p = move_player(&s.player, keys(&[MoveKey::Down, MoveKey::Left]));
    assert_eq!(p.direction, Direction::DownLeft);
    for _ in 0..25 {
        p = move_player(&p, HeldKeys::none());
        assert_eq!(p.direction, Direction::DownLeft);
        assert_eq!(p.image(), p.sprites.get(Direction::DownLeft));
    }
}

#[test]
fn player_never_leaves_the_field() {
    let mut rng = seeded_rng();
    let mut p = make_state().player;
    for _ in 0..5_000 {
        let mut held = HeldKeys::none();
        for key in MoveKey::ALL {
            held.set(key, rng.gen_bool(0.4));
        }
        p = move_player(&p, held);
        assert!(inside(&p.rect), "player escaped to {:?}", p.rect);
    }
}

// ── spawn_beam / advance_beams ────────────────────────────────────────────────

#[test]
fn fire_while_idle_facing_right() {
    let s = make_state();
    let beam = spawn_beam(&s.player, &assets());
    assert_eq!(beam.velocity.0, 1.0);
    assert_eq!(beam.velocity.1, 0.0);
    assert_eq!(beam.speed, 10.0);
    assert_eq!(beam.travelled, 0);
    let (cx, cy) = s.player.rect.center();
    assert_eq!(beam.rect.center(), (cx + s.player.rect.w / 2, cy));
}

#[test]
fn fire_up_leaves_from_top_edge() {
    let mut player = make_state().player;
    player.direction = Direction::Up;
    let beam = spawn_beam(&player, &assets());
    assert_eq!(advance_beams(&[beam])[0].rect, beam.rect.translated(0, -10));
    let (cx, cy) = player.rect.center();
    assert_eq!(beam.rect.center(), (cx, cy - player.rect.h / 2));
    // rotated image stands upright
    assert_eq!(beam.sprite.glyph(), '┃');
}

#[test]
fn diagonal_beam_has_unit_velocity() {
    let mut player = make_state().player;
    player.direction = Direction::DownLeft;
    let beam = spawn_beam(&player, &assets());
    let (vx, vy) = beam.velocity;
    assert!(((vx * vx + vy * vy) - 1.0).abs() < 1e-6);
    assert!(vx < 0.0 && vy > 0.0);
    assert_eq!(beam.speed, 10.0);
}

#[test]
fn diagonal_beam_keeps_full_speed() {
    let mut player = make_state().player;
    player.rect = Rect::centered_at((550, 325), player.rect.size());
    player.direction = Direction::UpRight;
    let spawn = spawn_beam(&player, &assets());
    let mut beams = vec![spawn];
    for _ in 0..20 {
        beams = advance_beams(&beams);
    }
    let (x0, y0) = spawn.rect.center();
    let (x1, y1) = beams[0].rect.center();
    // 200 units along the diagonal, not 20 rounded steps of 7
    assert_eq!((x1 - x0, y1 - y0), (141, -141));
    let length = (((x1 - x0).pow(2) + (y1 - y0).pow(2)) as f32).sqrt();
    assert!((length - 200.0).abs() < 1.0, "travelled {length}");
}

#[test]
fn beam_travels_in_a_straight_line_until_removed() {
    let assets = assets();
    for direction in Direction::ALL {
        let mut player = make_state().player;
        player.rect = Rect::centered_at((550, 325), player.rect.size());
        player.direction = direction;
        let spawn = spawn_beam(&player, &assets);
        let (x0, y0) = spawn.rect.center();

        let mut beams = vec![spawn];
        let mut frames = 0;
        while let Some(beam) = beams.first() {
            let distance = 10.0 * frames as f32;
            let expected = (
                (x0 as f32 + distance * spawn.velocity.0).round() as i32,
                (y0 as f32 + distance * spawn.velocity.1).round() as i32,
            );
            assert_eq!(beam.rect.center(), expected, "{direction:?} at frame {frames}");
            assert_eq!(beam.rect.size(), spawn.rect.size());
            if frames > 0 {
                assert!(inside(&beam.rect));
            }
            beams = advance_beams(&beams);
            frames += 1;
            assert!(frames < 200, "{direction:?} beam never left the field");
        }
    }
}

#[test]
fn beam_removed_the_frame_it_would_exit() {
    let mut player = make_state().player;
    player.rect.x = FIELD_WIDTH - player.rect.w - 1;
    let beam = spawn_beam(&player, &assets());
    // the spawn straddles the edge already
    assert!(!inside(&beam.rect));
    assert!(advance_beams(&[beam]).is_empty());
}

#[test]
fn advance_beams_keeps_the_others() {
    let s = make_state();
    let inner = spawn_beam(&s.player, &assets());
    let mut outer = inner;
    outer.origin.0 = FIELD_WIDTH - outer.rect.w / 2 - 3;
    let left = advance_beams(&[outer, inner, outer]);
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].rect, inner.rect.translated(10, 0));
}

// ── explosions ────────────────────────────────────────────────────────────────

#[test]
fn explosion_spawns_centred_on_target() {
    let target = Rect::new(200, 200, 40, 40);
    let e = spawn_explosion(&target, 30, &assets());
    assert_eq!(e.rect.center(), target.center());
    assert_eq!(e.frame, 0);
    assert_eq!(e.life, 30);
}

#[test]
fn explosion_flickers_every_ten_frames_then_expires() {
    let life = 35;
    let mut exps = vec![spawn_explosion(&Rect::new(500, 300, 10, 10), life, &assets())];
    for t in 1..=life {
        exps = advance_explosions(&exps);
        assert_eq!(exps.len(), 1, "gone too early at t={t}");
        assert_eq!(exps[0].frame as i32, ((life - t) / 10) % 2, "t={t}");
    }
    exps = advance_explosions(&exps);
    assert!(exps.is_empty());
}

#[test]
fn explosion_frames_are_mirror_images() {
    let e = spawn_explosion(&Rect::new(0, 0, 10, 10), 5, &assets());
    assert_ne!(e.frames[0].glyph(), e.frames[1].glyph());
    assert_eq!(e.frames[0].size(), e.frames[1].size());
}

// ── player_fire / damage_player ───────────────────────────────────────────────

#[test]
fn fire_adds_one_beam() {
    let s = make_state();
    let s2 = player_fire(&s, &assets());
    let s3 = player_fire(&s2, &assets());
    assert_eq!(s2.beams.len(), 1);
    assert_eq!(s3.beams.len(), 2);
    assert!(s.beams.is_empty());
}

#[test]
fn damage_costs_one_life_and_explodes_on_player() {
    let s = make_state();
    let s2 = damage_player(&s, &assets());
    assert_eq!(s2.life.value, 9);
    assert_eq!(s2.explosions.len(), 1);
    assert_eq!(s2.explosions[0].life, HIT_EXPLOSION_LIFE);
    assert_eq!(s2.explosions[0].rect.center(), s.player.rect.center());
}

#[test]
fn damage_saturates_at_zero() {
    let mut s = make_state();
    s.life.value = 0;
    assert_eq!(damage_player(&s, &assets()).life.value, 0);
}

// ── tick ──────────────────────────────────────────────────────────────────────

#[test]
fn tick_increments_frame() {
    let s = make_state();
    let s2 = tick(&s, HeldKeys::none());
    assert_eq!(s2.frame, 1);
    assert_eq!(tick(&s2, HeldKeys::none()).frame, 2);
}

#[test]
fn tick_moves_everything() {
    let assets = assets();
    let s = damage_player(&player_fire(&make_state(), &assets), &assets);
    let s2 = tick(&s, HeldKeys::none().with(MoveKey::Up));
    assert_eq!(s2.player.rect, s.player.rect.translated(0, -10));
    assert_eq!(s2.beams[0].rect, s.beams[0].rect.translated(10, 0));
    assert_eq!(s2.explosions[0].life, s.explosions[0].life - 1);
    assert_eq!(s2.life.value, s.life.value);
}

#[test]
fn everything_stays_inside_after_each_tick() {
    let assets = assets();
    let mut rng = seeded_rng();
    let mut s = make_state();
    for _ in 0..2_000 {
        let mut held = HeldKeys::none();
        for key in MoveKey::ALL {
            held.set(key, rng.gen_bool(0.35));
        }
        if rng.gen_ratio(1, 6) {
            s = player_fire(&s, &assets);
        }
        s = tick(&s, held);
        assert!(inside(&s.player.rect));
        for beam in &s.beams {
            assert!(inside(&beam.rect), "beam escaped to {:?}", beam.rect);
        }
    }
}
