use broadside::{
    place_fleet, random_placement, Board, BoardError, Direction, Occupancy, BOARD_SIZE, SHIPS,
    TOTAL_SHIP_CELLS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn random_fleet(seed: u64) -> (Board, SmallRng) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::human();
    place_fleet(&mut board, &mut rng).unwrap();
    (board, rng)
}

fn cell_strategy() -> impl Strategy<Value = (usize, usize)> {
    (0..BOARD_SIZE, 0..BOARD_SIZE)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fleet_covers_exactly_seventeen_cells(seed in any::<u64>()) {
        let (board, _) = random_fleet(seed);
        prop_assert_eq!(board.count(Occupancy::Ship), TOTAL_SHIP_CELLS);
        prop_assert_eq!(board.ship_count(), TOTAL_SHIP_CELLS);
        prop_assert_eq!(board.count(Occupancy::OrientationPreview), 0);
    }

    #[test]
    fn legitimate_directions_fit(seed in any::<u64>(), placed in 0..SHIPS.len(), start in cell_strategy(), length in 2usize..=5) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::human();
        for def in SHIPS.iter().take(placed) {
            let (s, d) = random_placement(&board, &mut rng, def.length()).unwrap();
            board.commit_placement(s, d, def.length()).unwrap();
        }
        match board.find_legitimate_directions(start, length) {
            Ok(dirs) => {
                prop_assert!(!dirs.is_empty());
                for dir in dirs {
                    for i in 0..length {
                        let cell = dir.walk(start, i);
                        prop_assert!(cell.is_some());
                        prop_assert_eq!(board.occupancy(cell.unwrap()).unwrap(), Occupancy::Empty);
                    }
                }
            }
            Err(e) => {
                prop_assert_eq!(e, BoardError::NoValidOrientation);
                for dir in Direction::ALL {
                    let fits = (0..length).all(|i| {
                        dir.walk(start, i)
                            .map(|c| board.occupancy(c).unwrap() == Occupancy::Empty)
                            .unwrap_or(false)
                    });
                    prop_assert!(!fits);
                }
            }
        }
    }

    #[test]
    fn shots_keep_board_consistent(seed in any::<u64>(), shots in prop::collection::vec(cell_strategy(), 0..96)) {
        let (mut board, mut rng) = random_fleet(seed);
        for target in shots {
            let before = board.clone();
            match board.apply_shot(target, &mut rng) {
                Ok(_) => {}
                Err(e) => {
                    prop_assert_eq!(e, BoardError::AlreadyGuessed);
                    prop_assert!(before.occupancy(target).unwrap().is_resolved());
                    prop_assert_eq!(&board, &before);
                }
            }
            prop_assert_eq!(board.ship_count(), TOTAL_SHIP_CELLS - board.count(Occupancy::Hit));
            for end in board.chain_ends() {
                prop_assert_eq!(board.occupancy(end.anchor()).unwrap(), Occupancy::Hit);
            }
        }
    }
}
