//! End-to-end battle flow against the shipped content.

use game_core::{
    Actor, Battle, BattleCommand, BattleOutcome, BattleRecord, EconomyCondition, GameError,
    MonsterOracle, Party,
};
use runtime::{GameService, ServiceError, SessionState};

/// Install a hand-built battle into the session so the scenario is exact.
fn install_battle(session: &mut SessionState, service: &GameService, enemies: Party) {
    let players = session
        .player
        .rehydrate(service.registry(), service.registry())
        .expect("session party should rehydrate")
        .party;
    let battle = Battle::new(players, enemies, 0xfeed);
    session.battle = Some(BattleRecord::from_battle(&battle));
}

/// The reference scenario: a fresh hero (500 gold, 15 ATK) against one
/// Inflation Goblin (50 HP, 5 DEF, 20 gold reward). Five attacks of 10
/// damage win the battle and the wallet lands on exactly 520 gold.
#[test]
fn five_hits_and_twenty_gold() {
    let service = GameService::new();
    let mut session = service.start_game("Taylor", Some(7));

    let mut enemies = Party::new();
    let goblin = service
        .registry()
        .template("Inflation Goblin")
        .expect("shipped roster has the goblin")
        .spawn(1);
    enemies.add_member(goblin).unwrap();
    install_battle(&mut session, &service, enemies);

    let mut conclusion = None;
    for _ in 0..5 {
        let turn = service
            .battle_action(&mut session, &BattleCommand::Attack { target: Some(0) })
            .expect("attack should resolve");
        if turn.conclusion.is_some() {
            conclusion = turn.conclusion;
        }
    }

    let conclusion = conclusion.expect("fifth hit ends the battle");
    assert_eq!(conclusion.outcome, BattleOutcome::Victory);
    assert_eq!(conclusion.gold_gained, 20);
    assert_eq!(conclusion.tickets_gained, 1);
    assert_eq!(conclusion.experience_each, 20);

    assert_eq!(session.player.gold, 520);
    assert_eq!(session.player.tickets, 1);
    assert!(session.battle.is_none(), "battle record is cleared");
    assert_eq!(session.story_progress, 1);
}

#[test]
fn item_command_goes_through_the_wrong_channel() {
    let service = GameService::new();
    let mut session = service.start_game("Taylor", Some(7));
    service.start_encounter(&mut session).unwrap();

    let before = session.clone();
    let err = service
        .battle_action(&mut session, &BattleCommand::UseItem)
        .unwrap_err();
    assert_eq!(err.error_code(), "WRONG_CHANNEL");
    assert_eq!(session, before, "failed action leaves the session untouched");
}

#[test]
fn acting_without_a_battle_fails() {
    let service = GameService::new();
    let mut session = service.start_game("Taylor", Some(7));
    let err = service
        .battle_action(&mut session, &BattleCommand::Guard)
        .unwrap_err();
    assert!(matches!(err, ServiceError::NoBattle));
}

#[test]
fn defeat_applies_the_gold_penalty() {
    let service = GameService::new();
    let mut session = service.start_game("Taylor", Some(7));

    // a doomed stand-in party against the strongest boss
    let mut players = Party::new();
    players.add_member(Actor::new_human("Doomed", 10, 0, 1, 0)).unwrap();
    let mut enemies = Party::new();
    enemies
        .add_member(
            service
                .registry()
                .template("Market Overlord")
                .expect("shipped roster has the overlord")
                .spawn(20),
        )
        .unwrap();
    let battle = Battle::new(players, enemies, 0xdead);
    session.battle = Some(BattleRecord::from_battle(&battle));

    let turn = service
        .battle_action(&mut session, &BattleCommand::Guard)
        .expect("guarding resolves even against a boss");

    let conclusion = turn.conclusion.expect("the counterattack ends it");
    assert_eq!(conclusion.outcome, BattleOutcome::Defeat);
    assert_eq!(conclusion.gold_gained, 0);
    assert_eq!(conclusion.gold_lost, 50);
    assert_eq!(session.player.gold, 450);
    assert!(session.battle.is_none());
    assert_eq!(session.story_progress, 0);
}

#[test]
fn encounter_generates_a_bounded_enemy_party() {
    let service = GameService::new();
    for seed in 0..20 {
        let mut session = service.start_game("Taylor", Some(seed));
        let report = service.start_encounter(&mut session).unwrap();
        assert!((1..=3).contains(&report.enemies.len()));
        for enemy in &report.enemies {
            assert_eq!(enemy.kind, "monster");
            assert!(enemy.level >= 1);
            assert!(enemy.hp > 0);
        }

        let view = service.battle_state(&session).unwrap();
        assert_eq!(view.turn, 1);
        assert!(view.is_player_turn);
        assert!(!view.is_over);
        assert!(!view.recent_log.is_empty(), "appearance lines are logged");
    }
}

#[test]
fn economy_changed_tracks_an_actual_condition_move() {
    let service = GameService::new();
    // a shift step can re-draw Stable; the report flags only real moves
    for seed in 0..60 {
        let mut session = service.start_game("Taylor", Some(seed));
        let report = service.start_encounter(&mut session).unwrap();
        let moved = session.economy.condition != EconomyCondition::Stable;
        assert_eq!(report.economy_changed, moved);
    }
}

#[test]
fn starting_an_encounter_mid_battle_fails() {
    let service = GameService::new();
    let mut session = service.start_game("Taylor", Some(7));
    service.start_encounter(&mut session).unwrap();
    assert!(matches!(
        service.start_encounter(&mut session),
        Err(ServiceError::BattleInProgress)
    ));
}

#[test]
fn battles_replay_deterministically() {
    let service = GameService::new();

    let run = || {
        let mut session = service.start_game("Taylor", Some(99));
        service.start_encounter(&mut session).unwrap();
        loop {
            let turn = service
                .battle_action(&mut session, &BattleCommand::Attack { target: None })
                .unwrap();
            if turn.outcome.is_some() {
                return session;
            }
        }
    };

    assert_eq!(run(), run());
}
