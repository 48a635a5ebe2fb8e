use othello_canon::ai::state_encoding::canonical_position_counts;
use othello_canon::ai::{CornerWeighted, MinimaxAgent, RandomAgent, SearchConfig};
use othello_canon::config::AppConfig;
use othello_canon::game::{play_game, MoveRecord};
use othello_canon::hash;
use othello_canon::symmetry::canonicalize;

fn seeded_game(size: usize, seed: u64) -> othello_canon::game::GameSummary {
    let mut dark = MinimaxAgent::with_seed(Box::new(CornerWeighted), 2, seed);
    let mut light = RandomAgent::with_seed(seed);
    play_game(size, &mut dark, &mut light).unwrap()
}

#[test]
fn test_played_game_record_replays_to_final_board() {
    for seed in 0..4 {
        let summary = seeded_game(6, seed);
        assert!(summary.final_board.is_terminal());

        let text = summary.record().to_string();
        let record: MoveRecord = text.parse().unwrap();
        let boards = record.replay(6).unwrap();
        assert_eq!(boards.len(), summary.placements());
        assert_eq!(boards.last(), Some(&summary.final_board));
    }
}

#[test]
fn test_symmetric_records_share_canonical_hashes() {
    let summary = seeded_game(8, 5);
    let images = summary.record().augmented(8);
    assert_eq!(images.len(), 4);

    let finals: Vec<String> = images
        .iter()
        .map(|image| {
            let last = image.replay(8).unwrap().pop().unwrap();
            hash::encode(&canonicalize(&last).board)
        })
        .collect();
    assert!(finals.iter().all(|h| h == &finals[0]));

    // every position of every image collapses onto the original's positions
    let counts = canonical_position_counts(&images, 8).unwrap();
    let single = canonical_position_counts(&images[..1], 8).unwrap();
    assert_eq!(counts.len(), single.len());
    assert_eq!(
        counts.values().sum::<usize>(),
        4 * single.values().sum::<usize>()
    );
}

#[test]
fn test_canonical_hash_decodes_and_restores() {
    let summary = seeded_game(8, 9);
    let canonical = canonicalize(&summary.final_board);
    let key = hash::encode(&canonical.board);
    assert_eq!(key.len(), hash::hash_len(8));

    let decoded = hash::decode(&key, 8).unwrap();
    assert_eq!(decoded, canonical.board);
    assert_eq!(canonical.restore(), summary.final_board);
}

#[test]
fn test_agent_built_from_config_file_plays_to_completion() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[game]\nsize = 6\n\n[search]\ndepth = 2\nevaluator = \"hybrid\"\nhybrid_threshold = 20\nseed = 3\n",
    )
    .unwrap();

    let config = AppConfig::load(&path).unwrap();
    let search: &SearchConfig = &config.search;
    let mut dark = RandomAgent::with_seed(1);
    let mut light = MinimaxAgent::from_config(search);
    let summary = play_game(config.game.size, &mut dark, &mut light).unwrap();
    assert_eq!(summary.final_board.size(), 6);
    assert!(summary.outcome == summary.final_board.outcome().unwrap());
}
