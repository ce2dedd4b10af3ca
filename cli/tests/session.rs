use std::io::Cursor;

use sapper_cli::{Format, Session};
use sapper_core::{
    CellView, FixedLayout, GameConfig, GameState, GameStatus, MINE_COUNT, MineLayout,
};

fn play(session: &mut Session<FixedLayout>, script: &str) -> String {
    let mut out = Vec::new();
    session.run(Cursor::new(script), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn corner_mine_session() -> Session<FixedLayout> {
    let layout = MineLayout::from_mine_coords((4, 4), &[(3, 3)]).unwrap();
    let game = GameState::new(GameConfig::new((4, 4), 1).unwrap(), FixedLayout(layout)).unwrap();
    Session::new(game, Format::Text)
}

#[test]
fn first_click_cascades_and_wins() {
    let mut session = corner_mine_session();

    let text = play(&mut session, "reveal 0 0\n");

    assert_eq!(session.game().status(), GameStatus::Won);
    assert!(text.starts_with("Flags: 1  Playing\n"));
    assert!(text.contains("Flags: 1  You won!"));
    assert!(text.contains("  3  .  .  1  #"));
}

#[test]
fn bad_lines_are_reported_and_skipped() {
    let mut session = corner_mine_session();

    let text = play(&mut session, "dig 1 1\nflag 3 3\n");

    assert!(text.contains("error: unknown command `dig`"));
    assert_eq!(session.game().cell_at((3, 3)), Some(CellView::Flagged));
    assert_eq!(session.game().flags_remaining(), 0);
}

#[test]
fn quit_ends_before_remaining_input() {
    let mut session = corner_mine_session();

    let text = play(&mut session, "q\nreveal 0 0\n");

    assert_eq!(text.lines().filter(|line| line.starts_with("Flags:")).count(), 1);
    assert!(session.game().first_click_pending());
}

#[test]
fn any_click_after_loss_starts_new_round() {
    let layout = MineLayout::from_mine_coords((2, 2), &[(1, 1)]).unwrap();
    let mut session = Session::new(GameState::from_layout(layout).unwrap(), Format::Text);

    let text = play(&mut session, "click left 50 110\nclick left 20 80\n");

    assert!(text.contains("Game over!"));
    assert_eq!(session.game().status(), GameStatus::Playing);
    assert!(session.game().first_click_pending());
}

#[test]
fn json_frames_follow_each_change() {
    let layout = MineLayout::from_mine_coords((4, 4), &[(3, 3)]).unwrap();
    let game = GameState::new(GameConfig::new((4, 4), 1).unwrap(), FixedLayout(layout)).unwrap();
    let mut session = Session::new(game, Format::Json);

    let text = play(&mut session, "flag 1 1\nflag 1 1\n");

    let frames: Vec<_> = text.lines().collect();
    assert_eq!(frames.len(), 3);
    assert!(frames[1].contains("\"flags_remaining\":0"));
    assert!(frames[2].contains("\"flags_remaining\":1"));
}

#[test]
fn standard_seeded_game_starts_with_full_flag_count() {
    let game = GameState::with_seed(GameConfig::standard().unwrap(), 5);
    let mut session = Session::new(game, Format::Text);
    let mut out = Vec::new();

    session.run(Cursor::new("r 8 8\n"), &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with(&format!("Flags: {MINE_COUNT}  Playing")));
    assert_ne!(session.game().status(), GameStatus::Lost);
    assert_eq!(session.viewport().window_size(), (520, 580));
}

#[test]
fn ignored_commands_draw_nothing() {
    let mut session = corner_mine_session();

    let text = play(&mut session, "flag 9 9\nclick left 5 5\nflag 3 3\nreveal 3 3\n");

    assert_eq!(text.lines().filter(|line| line.starts_with("Flags:")).count(), 2);
    assert_eq!(session.game().cell_at((3, 3)), Some(CellView::Flagged));
    assert_eq!(session.game().status(), GameStatus::Playing);
}
