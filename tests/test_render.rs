use catch_game::compute::{new_game, toggle_pause};
use catch_game::entities::*;
use catch_game::render::*;
use catch_game::surface::{DrawCommand, DrawList};
use catch_game::{GameConfig, Theme};

fn make_state() -> GameState {
    new_game(GameConfig::default()).unwrap()
}

fn draw(state: &GameState) -> DrawList {
    let mut list = DrawList::new();
    render(state, &mut list);
    list
}

#[test]
fn background_then_player_first() {
    let s = make_state();
    let list = draw(&s);
    let dark = Theme::dark();
    assert_eq!(
        list.commands[0],
        DrawCommand::Rect { x: 0.0, y: 0.0, width: 600.0, height: 800.0, color: dark.background }
    );
    assert_eq!(
        list.commands[1],
        DrawCommand::Rect { x: 275.0, y: 740.0, width: 50.0, height: 50.0, color: dark.player }
    );
}

#[test]
fn hud_shows_score_and_high_score() {
    let mut s = make_state();
    s.score = 12;
    s.high_score = 40;
    let list = draw(&s);
    let hud = list
        .commands
        .iter()
        .find(|c| matches!(c, DrawCommand::Text { .. }))
        .unwrap();
    assert_eq!(
        *hud,
        DrawCommand::Text {
            x: 20.0,
            y: 30.0,
            text: "Score: 12 | High Score: 40".to_string(),
            color: Theme::dark().text,
        }
    );
}

#[test]
fn entities_drawn_as_circles_in_theme_colors() {
    let mut s = make_state();
    s.items.push(FallingEntity::new(EntityKind::Item, 100.0, 200.0));
    s.items.push(FallingEntity::new(EntityKind::Item, 150.0, 250.0));
    s.giants.push(FallingEntity::new(EntityKind::Giant, 300.0, 300.0));
    s.obstacles.push(FallingEntity::new(EntityKind::Obstacle, 400.0, 400.0));
    let list = draw(&s);
    let dark = Theme::dark();

    let items: Vec<_> = list.circles_of(dark.item).collect();
    assert_eq!(items.len(), 2);
    assert_eq!(
        *items[0],
        DrawCommand::Circle { cx: 100.0, cy: 200.0, radius: 10.0, color: dark.item }
    );

    // Glow rings plus the solid core
    let giant_core: Vec<_> = list.circles_of(dark.giant).collect();
    assert_eq!(giant_core.len(), 1);
    let halo = dark.giant.over(dark.background, 100);
    assert_eq!(list.circles_of(halo).count(), 5);

    assert_eq!(list.circles_of(dark.obstacle).count(), 1);
    let spikes = list
        .commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Line { .. }))
        .count();
    assert_eq!(spikes, 8);
}

#[test]
fn glow_rings_widen_outward_first() {
    let mut s = make_state();
    s.giants.push(FallingEntity::new(EntityKind::Giant, 300.0, 300.0));
    let list = draw(&s);
    let radii: Vec<f32> = list
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Circle { radius, .. } => Some(*radius),
            _ => None,
        })
        .collect();
    assert_eq!(radii, vec![25.0, 23.0, 21.0, 19.0, 17.0, 15.0]);
}

#[test]
fn uses_current_theme() {
    let mut s = make_state();
    s.theme_index = 1;
    let list = draw(&s);
    assert!(matches!(
        list.commands[0],
        DrawCommand::Rect { color, .. } if color == Theme::light().background
    ));
}

#[test]
fn game_over_overlay() {
    let mut s = make_state();
    assert!(!draw(&s).texts().any(|t| t == GAME_OVER_TEXT));
    s.status = GameStatus::GameOver;
    let list = draw(&s);
    assert!(list.texts().any(|t| t == GAME_OVER_TEXT));
    assert!(list.commands.contains(&DrawCommand::Text {
        x: 150.0,
        y: 400.0,
        text: GAME_OVER_TEXT.to_string(),
        color: Theme::dark().text,
    }));
}

#[test]
fn paused_overlay() {
    let mut s = make_state();
    toggle_pause(&mut s);
    let texts: Vec<String> = draw(&s).texts().map(str::to_string).collect();
    assert_eq!(texts, vec![hud_text(&s), PAUSED_TEXT.to_string()]);
}

#[test]
fn render_leaves_state_untouched() {
    let mut s = make_state();
    s.items.push(FallingEntity::new(EntityKind::Item, 100.0, 200.0));
    let before = s.clone();
    draw(&s);
    assert_eq!(s.items, before.items);
    assert_eq!(s.player, before.player);
    assert_eq!(s.score, before.score);
}

#[test]
fn draw_list_reused_across_frames() {
    let mut s = make_state();
    let mut list = DrawList::new();
    render(&s, &mut list);
    let first = list.commands.len();

    s.items.push(FallingEntity::new(EntityKind::Item, 100.0, 200.0));
    list.clear();
    render(&s, &mut list);
    assert!(list.commands.len() > first);
    assert_eq!(list.commands, draw(&s).commands);
}
