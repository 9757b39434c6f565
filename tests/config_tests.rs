use salvo::{
    ConfigError, GameConfig, BOARD_SIZE, DEFAULT_MISS_STRIKE_THRESHOLD, DEFAULT_STRIKE_LIMIT,
    FLEET_LENGTHS,
};

#[test]
fn test_presets() {
    let strikes = GameConfig::default();
    assert_eq!(strikes, GameConfig::strikes());
    assert_eq!(strikes.board_size, BOARD_SIZE);
    assert_eq!(strikes.fleet_lengths, FLEET_LENGTHS.to_vec());
    assert_eq!(strikes.miss_strike_threshold, Some(DEFAULT_MISS_STRIKE_THRESHOLD));
    assert_eq!(strikes.strike_limit, Some(DEFAULT_STRIKE_LIMIT));
    assert_eq!(strikes.fleet_cells(), 17);
    assert!(strikes.validate().is_ok());

    let simple = GameConfig::simple();
    assert_eq!(simple.miss_strike_threshold, None);
    assert_eq!(simple.strike_limit, None);
    assert!(simple.validate().is_ok());
}

#[test]
fn test_validate_rejects_bad_values() {
    let base = GameConfig::strikes();
    assert_eq!(
        base.clone().with_board_size(0).validate(),
        Err(ConfigError::EmptyBoard)
    );
    assert_eq!(
        base.clone().with_fleet(&[]).validate(),
        Err(ConfigError::EmptyFleet)
    );
    assert_eq!(
        base.clone().with_fleet(&[2, 0]).validate(),
        Err(ConfigError::ZeroLengthShip { index: 1 })
    );
    assert_eq!(
        base.clone().with_board_size(4).validate(),
        Err(ConfigError::ShipTooLong {
            index: 4,
            length: 5,
            board_size: 4
        })
    );
    assert_eq!(
        base.clone().with_miss_strike_threshold(Some(0)).validate(),
        Err(ConfigError::ZeroMissThreshold)
    );
    assert_eq!(
        base.with_strike_limit(Some(0)).validate(),
        Err(ConfigError::ZeroStrikeLimit)
    );
}

#[test]
fn test_error_messages_are_descriptive() {
    let err = ConfigError::ShipTooLong {
        index: 2,
        length: 7,
        board_size: 6,
    };
    assert_eq!(
        err.to_string(),
        "ship 2 has length 7 which does not fit a 6x6 board"
    );
}

#[test]
fn test_json_fills_missing_fields_from_defaults() {
    let cfg: GameConfig =
        serde_json::from_str(r#"{"miss_strike_threshold": null, "strike_limit": null}"#).unwrap();
    assert_eq!(cfg, GameConfig::simple());

    let cfg: GameConfig = serde_json::from_str(r#"{"board_size": 8, "fleet_lengths": [2, 2]}"#).unwrap();
    assert_eq!(cfg.board_size, 8);
    assert_eq!(cfg.fleet_lengths, vec![2, 2]);
    assert_eq!(cfg.strike_limit, Some(DEFAULT_STRIKE_LIMIT));
}
