use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    AiCombatant, Combatant, Coordinate, Grid, GridError, MatchController, Orientation,
    Resolution, Side, TurnState, Vessel,
};

/// Fires at a fixed list of targets.
struct Scripted {
    targets: VecDeque<Coordinate>,
}

impl Scripted {
    fn boxed(targets: &[(i32, i32)]) -> Box<dyn Combatant> {
        Box::new(Self {
            targets: targets.iter().map(|&t| Coordinate::from(t)).collect(),
        })
    }
}

impl Combatant for Scripted {
    fn name(&self) -> &str {
        "scripted"
    }

    fn choose_target(
        &mut self,
        _rng: &mut SmallRng,
        _own: &Grid,
        _opponent: &Grid,
    ) -> anyhow::Result<Coordinate> {
        self.targets
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))
    }
}

/// Scripted shooter that records every rejection reported back to it.
struct Rejections {
    script: Scripted,
    seen: Rc<RefCell<Vec<(Coordinate, GridError)>>>,
}

impl Combatant for Rejections {
    fn name(&self) -> &str {
        "rejections"
    }

    fn choose_target(
        &mut self,
        rng: &mut SmallRng,
        own: &Grid,
        opponent: &Grid,
    ) -> anyhow::Result<Coordinate> {
        self.script.choose_target(rng, own, opponent)
    }

    fn rejected(&mut self, target: Coordinate, err: &GridError) {
        self.seen.borrow_mut().push((target, err.clone()));
    }
}

/// Grid with a length-2 horizontal vessel at (0,0) and a single cell at (4,4).
fn small_grid(reveal: bool) -> Grid {
    let mut grid = Grid::new(reveal);
    grid.place_vessel(Vessel::new(2, Coordinate::new(0, 0), Orientation::Horizontal))
        .unwrap();
    grid.place_vessel(Vessel::new(1, Coordinate::new(4, 4), Orientation::Vertical))
        .unwrap();
    grid
}

fn scripted_match(human: &[(i32, i32)], automated: &[(i32, i32)]) -> MatchController {
    MatchController::from_grids(
        small_grid(true),
        small_grid(false),
        Scripted::boxed(human),
        Scripted::boxed(automated),
        SmallRng::seed_from_u64(0),
    )
}

#[test]
fn test_out_of_bounds_keeps_turn_and_board() {
    let mut game = scripted_match(&[(-1, 0), (0, 6)], &[]);
    let before = game.grid(Side::Automated).clone();

    for _ in 0..2 {
        let report = game.play_turn().unwrap().unwrap();
        assert_eq!(report.side, Side::Human);
        assert_eq!(report.resolution, Resolution::OutOfBounds);
        assert_eq!(report.next, TurnState::AwaitingShot(Side::Human));
    }
    assert_eq!(game.grid(Side::Automated), &before);
    assert_eq!(game.shots(Side::Human), 0);
}

#[test]
fn test_hit_retains_turn_and_miss_passes_it() {
    let mut game = scripted_match(&[(0, 0), (3, 3)], &[(5, 0)]);

    let report = game.play_turn().unwrap().unwrap();
    assert_eq!(report.resolution, Resolution::Hit);
    assert_eq!(report.next, TurnState::AwaitingShot(Side::Human));

    let report = game.play_turn().unwrap().unwrap();
    assert_eq!(report.resolution, Resolution::Miss);
    assert_eq!(report.next, TurnState::AwaitingShot(Side::Automated));

    let report = game.play_turn().unwrap().unwrap();
    assert_eq!(report.side, Side::Automated);
    assert_eq!(report.resolution, Resolution::Miss);
    assert_eq!(report.next, TurnState::AwaitingShot(Side::Human));
    assert_eq!(game.shots(Side::Human), 2);
    assert_eq!(game.shots(Side::Automated), 1);
}

#[test]
fn test_rejected_hook_fires_from_advance() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let human = Rejections {
        script: Scripted {
            targets: [Coordinate::new(6, 0), Coordinate::new(0, 0)].into(),
        },
        seen: Rc::clone(&seen),
    };
    let mut game = MatchController::from_grids(
        small_grid(true),
        small_grid(false),
        Box::new(human),
        Scripted::boxed(&[]),
        SmallRng::seed_from_u64(0),
    );

    let state = game.advance().unwrap();
    assert!(matches!(
        state,
        TurnState::Resolved { resolution: Resolution::OutOfBounds, .. }
    ));
    let off = Coordinate::new(6, 0);
    assert_eq!(*seen.borrow(), vec![(off, GridError::TargetOutOfBounds(off))]);
    assert_eq!(game.advance().unwrap(), TurnState::AwaitingShot(Side::Human));

    let report = game.play_turn().unwrap().unwrap();
    assert_eq!(report.resolution, Resolution::Hit);
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn test_advance_passes_through_resolved() {
    let mut game = scripted_match(&[(4, 4)], &[]);
    assert_eq!(game.state(), TurnState::AwaitingShot(Side::Human));

    let state = game.advance().unwrap();
    assert!(matches!(
        state,
        TurnState::Resolved { side: Side::Human, resolution: Resolution::Sunk(_), .. }
    ));
    assert_eq!(game.advance().unwrap(), TurnState::AwaitingShot(Side::Human));
    assert_eq!(game.grid(Side::Automated).live_vessel_count(), 1);
}

#[test]
fn test_match_over_right_after_last_sink() {
    let mut game = scripted_match(&[(0, 0), (0, 1), (4, 4), (5, 5)], &[]);

    let mut last = None;
    while let Some(report) = game.play_turn().unwrap() {
        assert!(game.winner().is_none() || report.next == TurnState::MatchOver(Side::Human));
        last = Some(report);
    }
    let last = last.unwrap();
    assert!(matches!(last.resolution, Resolution::Sunk(_)));
    assert_eq!(last.target, Coordinate::new(4, 4));
    assert_eq!(last.next, TurnState::MatchOver(Side::Human));
    assert_eq!(game.winner(), Some(Side::Human));
    assert_eq!(game.grid(Side::Automated).live_vessel_count(), 0);

    // terminal: nothing else happens
    assert_eq!(game.advance().unwrap(), TurnState::MatchOver(Side::Human));
    assert!(game.play_turn().unwrap().is_none());

    let summary = game.summary().unwrap();
    assert_eq!(summary.winner, Side::Human);
    assert_eq!(summary.shots_human, 3);
    assert_eq!(summary.shots_automated, 0);
    assert_eq!(summary.vessels_left_automated, 0);
    assert_eq!(summary.vessels_left_human, 2);
}

#[test]
fn test_automated_side_can_win() {
    let mut game = scripted_match(&[(5, 5)], &[(0, 0), (0, 1), (4, 4)]);
    let summary = game.run().unwrap();
    assert_eq!(summary.winner, Side::Automated);
    assert_eq!(game.grid(Side::Human).live_vessel_count(), 0);
    assert_eq!(game.grid(Side::Automated).live_vessel_count(), 2);
}

#[test]
fn test_combatant_error_propagates() {
    let mut game = scripted_match(&[], &[]);
    assert!(game.play_turn().is_err());
    assert_eq!(game.state(), TurnState::AwaitingShot(Side::Human));
}

#[test]
fn test_ai_vs_ai_game() {
    let mut game = MatchController::new(
        Box::new(AiCombatant::new()),
        Box::new(AiCombatant::new()),
        SmallRng::seed_from_u64(123),
    )
    .unwrap();
    assert_eq!(game.grid(Side::Human).live_vessel_count(), 7);
    assert_eq!(game.grid(Side::Automated).live_vessel_count(), 7);
    assert!(game.grid(Side::Human).reveals());
    assert!(!game.grid(Side::Automated).reveals());

    let summary = game.run().unwrap();
    assert!(summary.shots_human <= 36);
    assert!(summary.shots_automated <= 36);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn turn_ownership_follows_outcomes(seed in any::<u64>()) {
        let mut game = MatchController::new(
            Box::new(AiCombatant::new()),
            Box::new(AiCombatant::new()),
            SmallRng::seed_from_u64(seed),
        )
        .unwrap();

        while let Some(report) = game.play_turn().unwrap() {
            let loser = report.side.other();
            if game.grid(loser).live_vessel_count() == 0 {
                prop_assert_eq!(report.next, TurnState::MatchOver(report.side));
            } else {
                prop_assert!(game.winner().is_none());
                let expected = match report.resolution {
                    Resolution::Miss => report.side.other(),
                    _ => report.side,
                };
                prop_assert_eq!(report.next, TurnState::AwaitingShot(expected));
            }
        }

        let winner = game.winner().unwrap();
        prop_assert_eq!(game.grid(winner.other()).live_vessel_count(), 0);
        prop_assert!(game.grid(winner).live_vessel_count() > 0);
    }
}

#[cfg(feature = "std")]
mod human_side {
    use std::io::{self, Cursor, Write};

    use seabattle::HumanCombatant;

    use super::*;

    /// Writer whose contents stay readable after the combatant is boxed.
    #[derive(Clone, Default)]
    struct SharedOutput(Rc<RefCell<Vec<u8>>>);

    impl SharedOutput {
        fn text(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }
    }

    impl Write for SharedOutput {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn human_match(input: &str, automated: &[(i32, i32)]) -> (MatchController, SharedOutput) {
        let output = SharedOutput::default();
        let human = HumanCombatant::new(Cursor::new(input.as_bytes().to_vec()), output.clone());
        let game = MatchController::from_grids(
            small_grid(true),
            small_grid(false),
            Box::new(human),
            Scripted::boxed(automated),
            SmallRng::seed_from_u64(0),
        );
        (game, output)
    }

    #[test]
    fn test_typed_hit_then_miss() {
        let (mut game, output) = human_match("A1\nC3\n", &[(5, 5)]);

        let report = game.play_turn().unwrap().unwrap();
        assert_eq!(report.side, Side::Human);
        assert_eq!(report.target, Coordinate::new(0, 0));
        assert_eq!(report.resolution, Resolution::Hit);
        assert_eq!(report.next, TurnState::AwaitingShot(Side::Human));

        let report = game.play_turn().unwrap().unwrap();
        assert_eq!(report.target, Coordinate::new(2, 2));
        assert_eq!(report.resolution, Resolution::Miss);
        assert_eq!(report.next, TurnState::AwaitingShot(Side::Automated));
        assert_eq!(game.shots(Side::Human), 2);

        let text = output.text();
        assert_eq!(text.matches("Enter target").count(), 2);
        assert!(text.contains("Opponent grid:"));
        assert!(text.contains("HIT at A1! Fire again."));
        assert!(text.contains("Miss at C3."));
    }

    #[test]
    fn test_typed_win_ends_match() {
        let (mut game, output) = human_match("A1\nB1\nE5\n", &[]);
        let summary = game.run().unwrap();
        assert_eq!(summary.winner, Side::Human);
        assert_eq!(summary.shots_human, 3);
        let text = output.text();
        assert!(text.contains("destroyed the last enemy vessel"));
        assert!(!text.ends_with("Fire again.\n"));
    }

    #[test]
    fn test_closed_input_keeps_human_to_move() {
        let (mut game, _) = human_match("", &[]);
        assert!(game.play_turn().is_err());
        assert_eq!(game.state(), TurnState::AwaitingShot(Side::Human));

        let (mut game, output) = human_match("A1\n", &[]);
        assert_eq!(
            game.play_turn().unwrap().unwrap().next,
            TurnState::AwaitingShot(Side::Human)
        );
        assert!(game.play_turn().is_err());
        assert_eq!(game.state(), TurnState::AwaitingShot(Side::Human));
        assert_eq!(game.shots(Side::Human), 1);
        assert_eq!(output.text().matches("Enter target").count(), 2);
    }
}
