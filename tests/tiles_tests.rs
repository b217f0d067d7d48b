use rand::rngs::SmallRng;
use rand::SeedableRng;
use twenty48::{Board, BoardError, ScriptedTiles, TileSource};

#[test]
fn test_rng_value_odds() {
    let mut rng = SmallRng::seed_from_u64(2048);
    let draws = 10_000;
    let mut twos = 0;
    for _ in 0..draws {
        match rng.pick_value() {
            2 => twos += 1,
            4 => {}
            other => panic!("unexpected spawn value {}", other),
        }
    }
    let share = twos as f64 / draws as f64;
    assert!((share - 0.9).abs() < 0.015, "share of 2s was {}", share);
}

#[test]
fn test_rng_cell_covers_every_index() {
    let mut rng = SmallRng::seed_from_u64(7);
    for empty in 1..=16 {
        let mut hits = [0usize; 16];
        for _ in 0..empty * 200 {
            let pick = rng.pick_cell(empty);
            assert!(pick < empty);
            hits[pick] += 1;
        }
        // 200 expected per index
        for (i, &n) in hits[..empty].iter().enumerate() {
            assert!(n > 120 && n < 280, "index {} of {} drawn {} times", i, empty, n);
        }
    }
}

#[test]
fn test_spawn_cells_roughly_uniform() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut hits = [[0usize; 4]; 4];
    for _ in 0..16_000 {
        let mut board = Board::EMPTY;
        let spawn = board.spawn_tile(&mut rng).unwrap();
        hits[spawn.row][spawn.col] += 1;
    }
    for n in hits.iter().flatten() {
        assert!(*n > 800 && *n < 1200, "cell drawn {} times", n);
    }
}

#[test]
fn test_scripted_rejects_bad_values() {
    assert_eq!(
        ScriptedTiles::new(&[(0, 2), (1, 3)]).unwrap_err(),
        BoardError::InvalidSpawn { value: 3 }
    );
    assert_eq!(
        ScriptedTiles::new(&[(0, 0)]).unwrap_err(),
        BoardError::InvalidSpawn { value: 0 }
    );
    assert!(ScriptedTiles::new(&[(0, 2), (5, 4)]).is_ok());
}

#[test]
fn test_scripted_falls_back_when_exhausted() {
    let picks = [(3, 4)];
    let mut src = ScriptedTiles::new(&picks).unwrap();
    assert_eq!(src.pick_cell(2), 1);
    assert_eq!(src.pick_value(), 4);
    assert_eq!(src.remaining(), 0);
    assert_eq!(src.pick_cell(5), 0);
    assert_eq!(src.pick_value(), 2);
}
