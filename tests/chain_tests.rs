use std::collections::HashSet;

use broadside::{choose_target, Board, ChainEnd, Direction, Occupancy};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn board_with_ship(start: (usize, usize), dir: Direction, len: usize) -> Board {
    let mut board = Board::human();
    board.commit_placement(start, dir, len).unwrap();
    board
}

#[test]
fn test_fresh_hit_queues_all_four_directions() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut board = board_with_ship((3, 3), Direction::East, 2);
    board.apply_shot((3, 3), &mut rng).unwrap();

    let ends = board.chain_ends();
    assert_eq!(ends.len(), 4);
    assert!(ends.iter().all(|e| e.anchor() == (3, 3)));
    let dirs: HashSet<Direction> = ends.iter().map(|e| e.end()).collect();
    assert_eq!(dirs.len(), 4);

    let cell = board.cell((3, 3)).unwrap();
    assert!(cell.is_in_chain());
    assert_eq!(cell.fragments().count(), 4);
}

#[test]
fn test_fresh_hit_order_depends_on_rng() {
    let orders: HashSet<Vec<Direction>> = (0..32)
        .map(|seed| {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut board = board_with_ship((3, 3), Direction::East, 2);
            board.apply_shot((3, 3), &mut rng).unwrap();
            board.chain_ends().iter().map(|e| e.end()).collect()
        })
        .collect();
    assert!(orders.len() > 1);
}

#[test]
fn test_colinear_hit_prunes_side_guesses() {
    let mut rng = SmallRng::seed_from_u64(2);
    let mut board = board_with_ship((3, 3), Direction::East, 3);
    board.apply_shot((3, 3), &mut rng).unwrap();
    board.apply_shot((3, 4), &mut rng).unwrap();

    let ends = board.chain_ends();
    assert!(!ends.contains(&ChainEnd::new((3, 3), Direction::North)));
    assert!(!ends.contains(&ChainEnd::new((3, 3), Direction::South)));
    assert!(ends.contains(&ChainEnd::new((3, 3), Direction::West)));
    assert!(ends.contains(&ChainEnd::new((3, 4), Direction::East)));
    assert_eq!(ends.len(), 3);
    assert_eq!(ends.last(), Some(&ChainEnd::new((3, 4), Direction::East)));
}

#[test]
fn test_extension_towards_west() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut board = board_with_ship((5, 2), Direction::East, 2);
    board.apply_shot((5, 3), &mut rng).unwrap();
    board.apply_shot((5, 2), &mut rng).unwrap();

    let ends = board.chain_ends();
    assert_eq!(ends.last(), Some(&ChainEnd::new((5, 2), Direction::West)));
    assert!(ends
        .iter()
        .all(|e| !matches!(e.end(), Direction::North | Direction::South)));
}

#[test]
fn test_vertical_extension_prunes_east_west() {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut board = board_with_ship((1, 6), Direction::South, 4);
    board.apply_shot((2, 6), &mut rng).unwrap();
    board.apply_shot((3, 6), &mut rng).unwrap();

    let ends = board.chain_ends();
    assert!(ends
        .iter()
        .all(|e| !matches!(e.end(), Direction::West | Direction::East)));
    assert!(ends.contains(&ChainEnd::new((3, 6), Direction::South)));
    assert!(ends.contains(&ChainEnd::new((2, 6), Direction::North)));
}

#[test]
fn test_computer_board_keeps_no_chains() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut board = Board::computer();
    board.commit_placement((0, 0), Direction::South, 2).unwrap();
    board.apply_shot((0, 0), &mut rng).unwrap();
    assert!(board.chain_ends().is_empty());
    assert!(!board.cell((0, 0)).unwrap().is_in_chain());
}

#[test]
fn test_misses_never_start_chains() {
    let mut rng = SmallRng::seed_from_u64(6);
    let mut board = Board::human();
    board.apply_shot((4, 4), &mut rng).unwrap();
    assert!(board.chain_ends().is_empty());
}

#[test]
fn test_target_follows_newest_chain_end() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = board_with_ship((3, 3), Direction::East, 2);
    board.apply_shot((3, 3), &mut rng).unwrap();

    let last = *board.chain_ends().last().unwrap();
    let target = choose_target(&mut board, &mut rng);
    assert_eq!(Some(target), last.candidate());
    // an open candidate is not consumed
    assert_eq!(board.chain_ends().len(), 4);
}

#[test]
fn test_corner_hit_skips_off_board_ends() {
    let mut rng = SmallRng::seed_from_u64(8);
    let mut board = board_with_ship((0, 0), Direction::East, 2);
    board.apply_shot((0, 0), &mut rng).unwrap();

    for _ in 0..4 {
        let target = choose_target(&mut board, &mut rng);
        assert!(target == (1, 0) || target == (0, 1));
        assert!(board.chain_ends().last().unwrap().candidate().is_some());
    }
}

#[test]
fn test_exhausted_chain_falls_back_to_random() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut board = board_with_ship((3, 3), Direction::East, 2);
    for target in [(3, 3), (2, 3), (4, 3), (3, 2), (3, 4)] {
        board.apply_shot(target, &mut rng).unwrap();
    }
    assert_eq!(choose_target(&mut board, &mut rng), (3, 5));

    board.apply_shot((3, 5), &mut rng).unwrap();
    let target = choose_target(&mut board, &mut rng);
    assert!(board.chain_ends().is_empty());
    assert!(target.0 < 8 && target.1 < 8);
    assert_eq!(board.ship_count(), 15);
}

#[test]
fn test_chain_anchors_are_hits() {
    let mut rng = SmallRng::seed_from_u64(10);
    let mut board = board_with_ship((2, 2), Direction::East, 5);
    board.commit_placement((3, 2), Direction::East, 4).unwrap();
    for target in [(2, 4), (3, 4), (2, 5), (3, 3), (4, 4)] {
        board.apply_shot(target, &mut rng).unwrap();
    }
    for end in board.chain_ends() {
        assert_eq!(board.occupancy(end.anchor()).unwrap(), Occupancy::Hit);
    }
}
