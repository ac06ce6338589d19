use hockey_sim_tui::model::{KnockoutPair, KnockoutRound, KnockoutSide};
use hockey_sim_tui::view::{build_round, build_tree};

/// One side of a pairing
fn side(id: u32, seed: u8, wins: u8) -> KnockoutSide {
    KnockoutSide { id, name: format!("Team {}", id), wins, seed }
}

fn pair(home: KnockoutSide, away: KnockoutSide) -> KnockoutPair {
    KnockoutPair { home, away }
}

#[test]
fn test_round_keeps_engine_order() {
    let pairs = vec![pair(side(4, 4, 0), side(5, 5, 3)), pair(side(1, 1, 2), side(8, 8, 2))];
    let list = build_round(&pairs);

    let rows: Vec<(String, u32, u8)> = list.rows().map(|r| (r.seed_label.clone(), r.team_id, r.wins)).collect();
    assert_eq!(
        rows,
        vec![
            ("4.".to_string(), 4, 0),
            ("5.".to_string(), 5, 3),
            ("1.".to_string(), 1, 2),
            ("8.".to_string(), 8, 2),
        ]
    );
}

#[test]
fn test_tree_has_one_column_per_round() {
    let rounds = vec![
        KnockoutRound {
            name: "Quarterfinals".into(),
            pairs: vec![pair(side(1, 1, 4), side(8, 8, 0)), pair(side(2, 2, 4), side(7, 7, 3))],
        },
        KnockoutRound {
            name: String::new(),
            pairs: vec![pair(side(1, 1, 0), side(2, 2, 0))],
        },
    ];
    let tree = build_tree(&rounds);

    assert_eq!(tree.columns.len(), 2);
    assert_eq!(tree.columns[0].title, "Quarterfinals");
    assert_eq!(tree.columns[0].pairs.len(), 2);
    assert_eq!(tree.columns[1].title, "Round 2");
    assert_eq!(tree.columns[1].rows().count(), 2);
}

#[test]
fn test_no_rounds_renders_placeholder() {
    let tree = build_tree(&[]);
    assert!(tree.is_empty());
    match tree.to_element::<()>() {
        hockey_sim_tui::tui::Element::Text { content, .. } => assert_eq!(content, "No rounds scheduled yet."),
        other => panic!("expected placeholder text, got {:?}", other),
    }
}
