use flappy_tui::core::{GameSnapshot, GameState};
use flappy_tui::term::{FieldLayout, FrameBuffer, GameView, Viewport};
use flappy_tui::types::{Difficulty, GameAction, Phase, BIRD_X, TICK_MS};

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render(snap: &GameSnapshot, vp: Viewport) -> FrameBuffer {
    GameView::new().render(snap, vp)
}

#[test]
fn term_view_idle_shows_welcome_overlay() {
    let snap = GameState::new(Difficulty::Hard, 1).snapshot();
    let text = screen_text(&render(&snap, Viewport::new(80, 40)));

    assert!(text.contains("FLAPPY BIRD"));
    assert!(text.contains("Mode  Hard"));
    assert!(text.contains("Press SPACE"));
    assert!(!text.contains("GAME OVER"));
}

#[test]
fn term_view_playing_hides_overlays() {
    let mut state = GameState::new(Difficulty::Easy, 1);
    state.apply_action(GameAction::Flap);
    state.tick(TICK_MS);
    let text = screen_text(&render(&state.snapshot(), Viewport::new(80, 40)));

    assert!(!text.contains("Press SPACE"));
    assert!(!text.contains("GAME OVER"));
}

#[test]
fn term_view_game_over_shows_scores() {
    let mut snap = GameState::new(Difficulty::Easy, 1).snapshot();
    snap.phase = Phase::GameOver;
    snap.game_over = true;
    snap.score = 3;
    snap.high_score = 5;

    let text = screen_text(&render(&snap, Viewport::new(80, 40)));
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("Score  3"));
    assert!(text.contains("High Score  5"));
}

#[test]
fn term_view_game_over_lines_stay_distinct_on_small_field() {
    let mut snap = GameState::new(Difficulty::Easy, 1).snapshot();
    snap.phase = Phase::GameOver;
    snap.score = 12;
    snap.high_score = 40;

    let text = screen_text(&render(&snap, Viewport::new(30, 16)));
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("Score  12"));
    assert!(text.contains("High Score  40"));
}

#[test]
fn term_view_draws_bird_at_its_position() {
    let snap = GameState::new(Difficulty::Easy, 1).snapshot();
    let vp = Viewport::new(45, 40);
    let fb = render(&snap, vp);
    let layout = FieldLayout::fit(vp).unwrap();

    let cx = layout.to_cell_x(BIRD_X + 10.0) as u16;
    let cy = layout.to_cell_y(snap.bird.y + 24.0) as u16;
    let cell = fb.get(cx, cy).unwrap();
    let sky = fb.get(layout.to_cell_x(300.0) as u16, cy).unwrap();
    assert_ne!(cell.style.bg, sky.style.bg);
}

#[test]
fn term_view_draws_pipe_outside_gap_only() {
    let mut snap = GameState::new(Difficulty::Easy, 1).snapshot();
    snap.pipes[0].x = 250.0;
    snap.pipes[0].gap_start = 300;
    snap.pipes[0].gap_height = 250;
    snap.phase = Phase::Playing;

    let vp = Viewport::new(45, 40);
    let fb = render(&snap, vp);
    let layout = FieldLayout::fit(vp).unwrap();
    let col = layout.to_cell_x(300.0) as u16;

    assert_eq!(fb.get(col, layout.to_cell_y(150.0) as u16).unwrap().ch, '█');
    assert_eq!(fb.get(col, layout.to_cell_y(420.0) as u16).unwrap().ch, ' ');
    assert_eq!(fb.get(col, layout.to_cell_y(700.0) as u16).unwrap().ch, '█');
}

#[test]
fn term_view_offscreen_pipes_do_not_leak_into_margin() {
    let snap = GameState::new(Difficulty::Easy, 1).snapshot();
    // Field is 45 wide, centred in 120 columns: the pipes at x=864/1204 are
    // right of the field and must not be drawn in the margin.
    let fb = render(&snap, Viewport::new(120, 40));
    let layout = FieldLayout::fit(Viewport::new(120, 40)).unwrap();
    let right_margin = layout.origin_x + layout.cols as i32;
    for y in 0..fb.height() {
        for x in right_margin as u16..fb.width() {
            assert_eq!(fb.get(x, y).unwrap().ch, ' ');
        }
    }
}

#[test]
fn term_view_tiny_terminal_shows_hint() {
    let snap = GameState::new(Difficulty::Easy, 1).snapshot();
    let fb = render(&snap, Viewport::new(40, 8));
    assert!(fb.row_text(0).starts_with("enlarge the terminal"));
}

#[test]
fn term_view_floor_scrolls_with_floor_x() {
    let mut snap = GameState::new(Difficulty::Easy, 1).snapshot();
    snap.phase = Phase::Playing;
    let vp = Viewport::new(45, 40);

    let a = render(&snap, vp);
    snap.floor_x = -24.0;
    let b = render(&snap, vp);
    assert_ne!(a, b);

    snap.floor_x = -48.0;
    let c = render(&snap, vp);
    assert_eq!(a, c);
}
