use poker_coach::{
    api::{
        analyze, errors::ApiError, handle_command, handle_query, AnalyzeCommand, Command,
        CommandResponse, GuessTextureCommand, Query, QueryResponse,
    },
    config::ScenarioConfig,
    domain::{
        card::{Card, CardParseError, Rank, Suit},
        chips::Chips,
        Action, Street,
    },
    eval::{lookup_tables::DrawCategory, texture::BoardTexture},
    infra::DeterministicRng,
};

/// Утилита: токены карт из строки.
fn tokens(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_string).collect()
}

/// Утилита: команда разбора с дефолтным банком.
fn analyze_cmd(hand: &str, board: &str, action: Action) -> AnalyzeCommand {
    AnalyzeCommand {
        hand: tokens(hand),
        board: tokens(board),
        action,
        pot: Chips::new(100),
        to_call: Chips::new(50),
    }
}

#[test]
fn outs_table_query_lists_nine_rows() {
    let QueryResponse::OutsTable(rows) = handle_query(Query::OutsTable).unwrap() else {
        panic!("expected OutsTable");
    };

    assert_eq!(rows.len(), 9);
    assert_eq!(rows[0].category, DrawCategory::OpenEndedStraightAndFlushDraw);
    assert_eq!(rows[0].outs, 15);
    assert_eq!(rows[8].label, "Pair to Set Draw");
}

#[test]
fn texture_tips_query_covers_every_texture() {
    let QueryResponse::TextureTips(tips) = handle_query(Query::TextureTips).unwrap() else {
        panic!("expected TextureTips");
    };

    assert_eq!(tips.len(), 8);
    assert!(tips.iter().any(|t| t.texture == BoardTexture::Unknown));
    assert!(tips.iter().all(|t| !t.tip.is_empty()));
}

#[test]
fn classify_query_with_ten_token() {
    let query = Query::Classify {
        hand: tokens("9♥ 10♥"),
        board: tokens("J♥ Q♥ 2♣"),
    };
    let QueryResponse::Classification(dto) = handle_query(query).unwrap() else {
        panic!("expected Classification");
    };

    assert_eq!(dto.hand[1], Card::new(Rank::Ten, Suit::Hearts));
    assert_eq!(dto.street, Some(Street::Flop));
    assert_eq!(
        dto.category,
        Some(DrawCategory::OpenEndedStraightAndFlushDraw)
    );
    assert_eq!(dto.hand_type, "Open-ended straight and flush draw");
    assert_eq!(dto.outs, 15);
    assert_eq!(dto.equity, 66);
    assert_eq!(dto.made_hand, None);
}

#[test]
fn classify_without_street_has_zero_equity() {
    let query = Query::Classify {
        hand: tokens("A♠ K♦"),
        board: vec![],
    };
    let QueryResponse::Classification(dto) = handle_query(query).unwrap() else {
        panic!("expected Classification");
    };

    assert_eq!(dto.street, None);
    assert_eq!(dto.category, Some(DrawCategory::TwoOvercards));
    assert_eq!(dto.equity, 0);
    assert_eq!(dto.texture, BoardTexture::Unknown);
}

#[test]
fn bad_hand_size_is_bad_request() {
    let err = analyze(&analyze_cmd("A♠ K♠ Q♠", "2♦ 3♦ 4♦", Action::Check)).unwrap_err();
    assert_eq!(
        err,
        ApiError::BadRequest("hand must have exactly 2 cards, got 3".to_string())
    );
}

#[test]
fn too_long_board_is_bad_request() {
    let err = analyze(&analyze_cmd("A♠ K♠", "2♦ 3♦ 4♦ 5♦ 6♦ 7♦", Action::Check)).unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
}

#[test]
fn duplicate_card_is_bad_request() {
    let err = analyze(&analyze_cmd("A♠ K♠", "A♠ 7♦ 2♣", Action::Bet)).unwrap_err();
    assert_eq!(err, ApiError::BadRequest("duplicate card A♠".to_string()));
}

#[test]
fn garbage_card_is_invalid_card() {
    let err = analyze(&analyze_cmd("A♠ Zz", "2♦ 3♦ 4♦", Action::Check)).unwrap_err();
    assert!(matches!(
        err,
        ApiError::InvalidCard(CardParseError::InvalidSuit { suit: 'z', .. })
    ));
}

#[test]
fn analyze_returns_feedback_and_pot_odds() {
    let dto = analyze(&analyze_cmd("8♣ 9♦", "T♥ J♠ 2♣", Action::Raise)).unwrap();

    assert_eq!(dto.action, Action::Raise);
    assert_eq!(dto.pot_odds.as_deref(), Some("33.3"));
    assert_eq!(dto.classification.equity, 35);

    let lines: Vec<&str> = dto.feedback.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Aggressive play! Make sure your outs are clean.");
    assert!(lines[1].starts_with("Board Texture Tip: "));
}

#[test]
fn analyze_without_to_call_has_no_pot_odds() {
    let mut cmd = analyze_cmd("8♣ 9♦", "T♥ J♠ 2♣", Action::Check);
    cmd.to_call = Chips::ZERO;

    let dto = analyze(&cmd).unwrap();
    assert_eq!(dto.pot_odds, None);
}

#[test]
fn guess_texture_command() {
    let mut rng = DeterministicRng::from_seed(1);
    let cmd = Command::GuessTexture(GuessTextureCommand {
        board: tokens("K♠ Q♠ J♠"),
        guess: "Wet".to_string(),
    });

    let CommandResponse::TextureGuess(verdict) =
        handle_command(cmd, &mut rng, &ScenarioConfig::default()).unwrap()
    else {
        panic!("expected TextureGuess");
    };
    assert!(verdict.correct);

    let bad = Command::GuessTexture(GuessTextureCommand {
        board: tokens("K♠ Q♠ J♠"),
        guess: "soggy".to_string(),
    });
    assert!(matches!(
        handle_command(bad, &mut rng, &ScenarioConfig::default()),
        Err(ApiError::BadRequest(_))
    ));
}

#[test]
fn deal_scenario_command_is_consistent() {
    let mut rng = DeterministicRng::from_seed(42);
    let response =
        handle_command(Command::DealScenario, &mut rng, &ScenarioConfig::default()).unwrap();

    let CommandResponse::Scenario(dto) = response else {
        panic!("expected Scenario");
    };

    let scenario = &dto.scenario;
    assert!((3..=5).contains(&scenario.board.len()));
    assert!(scenario.to_call <= scenario.pot);
    assert_eq!(dto.classification.hand, scenario.hand.to_vec());
    assert_eq!(dto.classification.street, scenario.street());
    assert_eq!(
        dto.available_actions,
        Action::available(scenario.to_call).to_vec()
    );
}

#[test]
fn command_json_roundtrip() {
    let cmd = Command::Analyze(analyze_cmd("A♠ K♠", "Q♠ J♠ 2♦", Action::Call));

    let json = serde_json::to_string(&cmd).unwrap();
    let back: Command = serde_json::from_str(&json).unwrap();

    let Command::Analyze(back) = back else {
        panic!("expected Analyze");
    };
    assert_eq!(back.hand, tokens("A♠ K♠"));
    assert_eq!(back.action, Action::Call);
    assert_eq!(back.pot, Chips::new(100));
}
