use blackjack_engine::{
    BlackjackGame, FileJournal, GameRules, MemoryJournal, Outcome, Phase, RandomSource, Session,
    StackedSource, TableConfig,
};

// Cards are dealt player, dealer, player, dealer; later ids feed hits and the dealer.
fn table(ids: &[u8]) -> Session<StackedSource, MemoryJournal> {
    let game = BlackjackGame::new(StackedSource::from_ids(ids).unwrap(), GameRules::default());
    Session::new(game, MemoryJournal::new())
}

#[test]
fn natural_blackjack_settles_on_the_deal() {
    let mut session = table(&[1, 5, 13, 6]);
    let view = session.new_game(Some("100"));

    assert_eq!(view.phase, Phase::Finished);
    assert_eq!(view.outcome, Some(Outcome::PlayerBlackjack));
    assert_eq!(view.player_total, 21);
    assert_eq!(view.winnings, Some(150.0));
    assert_eq!(view.dealer_cards, vec![5, 6]);
    assert_eq!(
        session.journal().lines(),
        ["Player Score : 21 | Dealer Score : 11 | Bet Amount : 100.00$ | Player wins with Blackjack! 150.00$"]
    );
}

#[test]
fn bust_on_hit_loses_the_stake() {
    let mut session = table(&[9, 10, 6, 7, 26]);
    session.new_game(Some("20"));
    let view = session.hit();

    assert_eq!(view.player_total, 25);
    assert_eq!(view.outcome, Some(Outcome::PlayerBust));
    assert_eq!(view.winnings, Some(-20.0));
    assert_eq!(view.message.as_deref(), Some("Player busts! Dealer wins."));
    assert_eq!(
        session.journal().lines(),
        ["Player Score : 25 | Dealer Score : 17 | Bet Amount : 20.00$ | Dealer wins"]
    );
}

#[test]
fn player_can_hit_then_stand_and_tie() {
    // player 2+5, hits 3 and 10 for 20; dealer 10+10
    let mut session = table(&[2, 10, 5, 23, 3, 36]);
    session.new_game(Some("8"));
    assert_eq!(session.hit().phase, Phase::InProgress);
    assert_eq!(session.hit().player_total, 20);

    let view = session.stand();
    assert_eq!(view.outcome, Some(Outcome::Tie));
    assert_eq!(view.winnings, Some(8.0));
    assert_eq!(view.message.as_deref(), Some("It's a tie! You get your bet back."));
}

#[test]
fn dealer_hits_up_to_twenty() {
    let mut session = table(&[10, 2, 8, 3, 2, 13]);
    session.new_game(Some("15"));
    let view = session.stand();

    assert_eq!(view.dealer_cards, vec![2, 3, 2, 13]);
    assert_eq!(view.dealer_total, 17);
    assert_eq!(view.outcome, Some(Outcome::PlayerWin));
    assert_eq!(view.winnings, Some(30.0));
}

#[test]
fn actions_after_the_round_are_refused() {
    let mut session = table(&[10, 10, 8, 10, 5, 5]);
    session.new_game(Some("1"));
    let finished = session.stand();
    assert_eq!(finished.outcome, Some(Outcome::DealerWin));

    let after_hit = session.hit();
    let after_stand = session.stand();
    assert_eq!(after_hit.player_cards, finished.player_cards);
    assert_eq!(after_stand.dealer_cards, finished.dealer_cards);
    assert_eq!(
        after_stand.message.as_deref(),
        Some("No active game to stand. Start a new game.")
    );
    assert_eq!(session.journal().lines().len(), 1);
}

#[test]
fn random_rounds_always_deal_two_and_two() {
    let game = BlackjackGame::new(RandomSource::new(Some(2024)), GameRules::default());
    let mut session = Session::new(game, MemoryJournal::new());

    for _ in 0..200 {
        let view = session.new_game(Some("10"));
        assert_eq!(view.player_cards.len(), 2);
        assert_eq!(view.dealer_cards.len(), 2);
        if view.phase == Phase::InProgress {
            let view = session.stand();
            assert!(view.dealer_total >= 17);
            assert_eq!(view.phase, Phase::Finished);
        }
    }
    assert_eq!(session.journal().lines().len(), 200);
}

#[test]
fn config_built_table_writes_its_journal_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.txt");
    let config = TableConfig::from_json(&format!(
        r#"{{"seed": 1, "journal_path": {}}}"#,
        serde_json::to_string(path.to_str().unwrap()).unwrap()
    ))
    .unwrap();

    let game = BlackjackGame::new(
        RandomSource::new(config.seed),
        config.to_game_rules().unwrap(),
    );
    let mut session = Session::new(game, FileJournal::new(&config.journal_path));
    if session.new_game(Some("3.5")).phase == Phase::InProgress {
        session.stand();
    }

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 1);
    assert!(contents.contains("Bet Amount : 3.50$"));
}
