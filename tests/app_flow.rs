use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hockey_sim_tui::app::{InitParams, Msg, SimApp, Status};
use hockey_sim_tui::engine::{FixtureEngine, World};
use hockey_sim_tui::model::TeamRow;
use hockey_sim_tui::screens::{Screen, ScreenId};
use hockey_sim_tui::tui::snapshot::render_lines;
use hockey_sim_tui::tui::{Runtime, Theme};

const WORLD: &str = include_str!("fixtures/world.json");

/// Start the app on `start` against `world` and drain every pending engine call
fn runtime_with(world: World, start: ScreenId) -> Runtime<SimApp> {
    let engine = Arc::new(FixtureEngine::new(world));
    let params = InitParams {
        start,
        ..InitParams::new(engine)
    };
    let mut runtime = Runtime::new(params, Theme::default());
    settle(&mut runtime);
    runtime
}

fn runtime_at(start: ScreenId) -> Runtime<SimApp> {
    runtime_with(serde_json::from_str(WORLD).unwrap(), start)
}

/// Fixture calls finish on first poll, but results may queue follow-up calls
fn settle(runtime: &mut Runtime<SimApp>) {
    for _ in 0..10 {
        runtime.poll_async().unwrap();
        if !runtime.has_pending() {
            return;
        }
    }
    panic!("engine calls did not settle");
}

fn screen(runtime: &Runtime<SimApp>) -> &Screen {
    runtime.state().screens.screen().expect("a mounted screen")
}

#[test]
fn test_round_robin_standings_and_schedules() {
    let mut runtime = runtime_at(ScreenId::Competition(1));
    assert_eq!(runtime.state().screens.current(), Some(ScreenId::Competition(1)));

    let lines = render_lines(&mut runtime, 140, 50).unwrap();
    let first = lines
        .iter()
        .position(|l| l.contains("1st") && l.contains("Tappara"))
        .expect("first standings row");
    let second = lines
        .iter()
        .position(|l| l.contains("2nd") && l.contains("Ilves"))
        .expect("second standings row");
    assert!(first < second);

    assert!(lines.iter().any(|l| l.contains("Previous games from 2024-01-01.")));
    assert!(lines.iter().any(|l| l.contains("Next games on 2024-01-08.")));
    assert!(lines.iter().any(|l| l.contains("3 - 2")));
    assert!(lines.iter().any(|l| l.contains("Points W 3, OTW 2, D 1, OTL 1, L 0.")));
}

#[test]
fn test_clicking_team_link_opens_team() {
    let mut runtime = runtime_at(ScreenId::Competition(1));
    render_lines(&mut runtime, 140, 50).unwrap();

    let rect = runtime
        .registry()
        .links()
        .find(|(_, link)| link.kind == "team" && link.id == 10)
        .map(|(rect, _)| rect)
        .expect("Tappara link");
    runtime.click(rect.x, rect.y).unwrap();
    settle(&mut runtime);

    assert_eq!(runtime.state().screens.current(), Some(ScreenId::Team(10)));
    let lines = render_lines(&mut runtime, 140, 50).unwrap();
    assert!(lines.iter().any(|l| l.contains("Christian Heljanko")));
    // Only one screen is ever in the content region
    assert!(!lines.iter().any(|l| l.contains("Next games on")));
}

#[test]
fn test_later_navigation_wins() {
    let mut runtime = runtime_at(ScreenId::Competition(1));
    runtime.dispatch(Msg::Navigate(ScreenId::Team(10)));
    runtime.dispatch(Msg::Navigate(ScreenId::Player(3)));
    settle(&mut runtime);

    assert_eq!(runtime.state().screens.current(), Some(ScreenId::Player(3)));
}

#[test]
fn test_unknown_format_keeps_previous_screen() {
    let mut world: World = serde_json::from_str(WORLD).unwrap();
    if let Some(format) = world.competitions.get_mut(&1).and_then(|c| c.format.as_mut()) {
        format.kind = "Swiss".to_string();
    }
    let mut runtime = runtime_with(world, ScreenId::Competition(3));
    assert_eq!(runtime.state().screens.current(), Some(ScreenId::Competition(3)));

    runtime.dispatch(Msg::Navigate(ScreenId::Competition(1)));
    settle(&mut runtime);

    assert_eq!(runtime.state().screens.current(), Some(ScreenId::Competition(3)));
    match &runtime.state().status {
        Some(Status::Error(message)) => assert!(message.contains("Swiss")),
        other => panic!("expected an error status, got {:?}", other),
    }
}

#[test]
fn test_parent_and_tree_variants() {
    let mut runtime = runtime_at(ScreenId::Competition(2));
    let lines = render_lines(&mut runtime, 140, 50).unwrap();
    assert!(lines.iter().any(|l| l.contains("Liiga Playoffs")));
    let links: Vec<u32> = runtime
        .registry()
        .links()
        .filter(|(_, link)| link.kind == "comp")
        .map(|(_, link)| link.id)
        .collect();
    assert_eq!(links, vec![1, 3]);

    runtime.dispatch(Msg::Navigate(ScreenId::Competition(4)));
    settle(&mut runtime);
    let lines = render_lines(&mut runtime, 140, 50).unwrap();
    assert!(lines.iter().any(|l| l.contains("Semifinals") && l.contains("Final")));
    assert!(lines.iter().any(|l| l.contains("Frölunda")));
}

#[test]
fn test_tournament_tree_shows_both_schedules() {
    let mut world: World = serde_json::from_str(WORLD).unwrap();
    let season = &mut world.competitions.get_mut(&4).expect("tournament").season;
    season.played_games = serde_json::from_str(
        r#"[{"home": {"id": 10, "name": "Tappara", "seed": 1, "goals": 2},
             "away": {"id": 20, "name": "Frölunda", "seed": 2, "goals": 1},
             "date": "2024-03-01", "is_over": true}]"#,
    )
    .unwrap();
    season.upcoming_games = serde_json::from_str(
        r#"[{"home": {"id": 20, "name": "Frölunda", "seed": 2},
             "away": {"id": 10, "name": "Tappara", "seed": 1},
             "date": "2024-03-03"}]"#,
    )
    .unwrap();

    let mut runtime = runtime_with(world, ScreenId::Competition(4));
    let lines = render_lines(&mut runtime, 140, 50).unwrap();
    let tree = lines
        .iter()
        .position(|l| l.contains("Semifinals"))
        .expect("tree columns");
    let previous = lines
        .iter()
        .position(|l| l.contains("Previous games from 2024-03-01."))
        .expect("previous games caption");
    assert!(tree < previous);
    assert!(lines.iter().any(|l| l.contains("Next games on 2024-03-03.")));
    assert!(lines.iter().any(|l| l.contains("(1.)") && l.contains("2 - 1")));
}

#[test]
fn test_knockout_round_shows_seeds() {
    let mut runtime = runtime_at(ScreenId::Competition(3));
    let lines = render_lines(&mut runtime, 140, 50).unwrap();
    assert!(lines.iter().any(|l| l.contains("Final")));
    assert!(lines.iter().any(|l| l.contains("(1.)") && l.contains("4 - 3 OT")));
}

#[test]
fn test_placeholder_competition_is_ignored() {
    let mut runtime = runtime_at(ScreenId::Competition(1));
    runtime.dispatch(Msg::CompetitionChosen(0));
    assert!(!runtime.has_pending());
    assert_eq!(runtime.state().screens.current(), Some(ScreenId::Competition(1)));
}

#[test]
fn test_create_manager_then_offer_contract() {
    let mut runtime = runtime_at(ScreenId::Home);
    assert_eq!(runtime.state().screens.current(), Some(ScreenId::CreateManager));

    runtime.dispatch(Msg::ManagerCompetitionChosen(1));
    settle(&mut runtime);
    match screen(&runtime) {
        Screen::CreateManager(s) => assert_eq!(s.teams.len(), 3),
        other => panic!("unexpected screen {:?}", other.id()),
    }

    runtime.dispatch(Msg::ManagerTeamChosen(11));
    runtime.dispatch(Msg::CreateManager);
    settle(&mut runtime);
    assert_eq!(runtime.state().screens.current(), Some(ScreenId::Home));
    assert_eq!(runtime.state().screens.human().and_then(|h| h.team_id()), Some(11));

    let lines = render_lines(&mut runtime, 140, 50).unwrap();
    assert!(lines.iter().any(|l| l.contains("Actions remaining: 2")));

    runtime.dispatch(Msg::Navigate(ScreenId::Player(200)));
    settle(&mut runtime);
    runtime.dispatch(Msg::OfferContract { player_id: 200, years: 2 });
    settle(&mut runtime);

    assert_eq!(
        runtime.state().status,
        Some(Status::Notice("Contract offer sent.".to_string()))
    );
    match screen(&runtime) {
        Screen::Player(s) => assert_eq!(s.player.offers.len(), 1),
        other => panic!("unexpected screen {:?}", other.id()),
    }
    assert_eq!(runtime.state().screens.human().map(|h| h.actions_remaining()), Some(1));
}

#[test]
fn test_continue_advances_date() {
    let mut runtime = runtime_at(ScreenId::Competition(1));
    runtime.dispatch(Msg::ContinueDay);
    settle(&mut runtime);
    assert_eq!(runtime.state().screens.chrome().map(|c| c.date.as_str()), Some("2024-01-06"));
    assert_eq!(runtime.state().screens.current(), Some(ScreenId::Competition(1)));

    runtime.dispatch(Msg::SkipDays);
    settle(&mut runtime);
    assert_eq!(runtime.state().screens.chrome().map(|c| c.date.as_str()), Some("2024-01-13"));
}

#[test]
fn test_scouting_filter_hides_approached() {
    use hockey_sim_tui::model::{HumanPackage, HumanTeamPackage};
    use hockey_sim_tui::view::PlayerFilter;

    let mut world: World = serde_json::from_str(WORLD).unwrap();
    world.human = HumanPackage {
        team: Some(HumanTeamPackage {
            id: 10,
            actions_remaining: 2,
            roster_overview: vec![],
            approached_players: vec![200],
        }),
    };
    let mut runtime = runtime_with(world, ScreenId::PlayerSearch);

    let lines = render_lines(&mut runtime, 140, 50).unwrap();
    assert!(lines.iter().any(|l| l.contains("Oskar Lindqvist")));
    assert!(lines.iter().any(|l| l.contains("No. of Offers")));

    runtime.dispatch(Msg::PlayerFilterChanged(PlayerFilter::NotApproached));
    let lines = render_lines(&mut runtime, 140, 50).unwrap();
    assert!(!lines.iter().any(|l| l.contains("Oskar Lindqvist")));
    assert!(lines.iter().any(|l| l.contains("Tomas Novak")));
}

/// Press a key the way the terminal loop would
fn press(runtime: &mut Runtime<SimApp>, code: KeyCode) {
    runtime.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
}

#[test]
fn test_long_standings_scroll_into_view() {
    let mut world: World = serde_json::from_str(WORLD).unwrap();
    let season = &mut world.competitions.get_mut(&1).expect("league").season;
    let template = season.teams[0].clone();
    season.teams = (1..=16)
        .map(|i| TeamRow {
            id: 100 + i,
            name: format!("Club {}", i),
            rank: format!("{}.", i),
            ..template.clone()
        })
        .collect();
    let mut runtime = runtime_with(world, ScreenId::Competition(1));

    let lines = render_lines(&mut runtime, 100, 24).unwrap();
    assert!(lines.iter().any(|l| l.contains("Club 1 ")));
    assert!(!lines.iter().any(|l| l.contains("Club 16")));
    assert!(lines.iter().any(|l| l.contains('↓')));

    press(&mut runtime, KeyCode::PageDown);
    press(&mut runtime, KeyCode::PageDown);
    let lines = render_lines(&mut runtime, 100, 24).unwrap();
    assert!(lines.iter().any(|l| l.contains("Club 16")));
    assert!(lines.iter().any(|l| l.contains('↑')));
    // Pinned header stays above the remaining rows
    assert!(lines.iter().any(|l| l.contains("Rank") && l.contains("Pts")));

    for _ in 0..10 {
        runtime.wheel(10, 12, false).unwrap();
    }
    assert_eq!(runtime.state().scroll, 0);
    let lines = render_lines(&mut runtime, 100, 24).unwrap();
    assert!(!lines.iter().any(|l| l.contains("Club 16")));

    press(&mut runtime, KeyCode::PageDown);
    runtime.dispatch(Msg::Navigate(ScreenId::Competition(3)));
    settle(&mut runtime);
    assert_eq!(runtime.state().scroll, 0);
}

#[test]
fn test_offer_does_not_pull_user_back() {
    use hockey_sim_tui::model::{HumanPackage, HumanTeamPackage};

    let mut world: World = serde_json::from_str(WORLD).unwrap();
    world.human = HumanPackage {
        team: Some(HumanTeamPackage {
            id: 10,
            actions_remaining: 2,
            roster_overview: vec![],
            approached_players: vec![],
        }),
    };
    let mut runtime = runtime_with(world, ScreenId::Player(200));

    runtime.dispatch(Msg::OfferContract { player_id: 200, years: 1 });
    runtime.dispatch(Msg::Navigate(ScreenId::Team(11)));
    settle(&mut runtime);

    assert_eq!(runtime.state().screens.current(), Some(ScreenId::Team(11)));
    assert_eq!(runtime.state().screens.human().map(|h| h.actions_remaining()), Some(1));
}
