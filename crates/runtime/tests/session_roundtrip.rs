//! Session persistence, shop, and party management through the service.

use game_core::{BattleCommand, Currency, GameError};
use runtime::{EquipmentKind, GameService, ServiceError, SessionState};

#[test]
fn fresh_session_matches_the_starting_contract() {
    let service = GameService::new();
    let session = service.start_game("Taylor", Some(1));

    assert_eq!(session.player.gold, 500);
    assert_eq!(session.player.tickets, 0);
    assert_eq!(session.player.party.len(), 1);
    let hero = &session.player.party[0];
    assert_eq!(hero.kind, "human");
    assert_eq!(hero.max_hp, 100);
    assert_eq!(hero.max_mp, 20);
    assert_eq!(hero.attack, 15);
    assert_eq!(hero.defense, 10);
    assert_eq!(hero.level, 1);
    assert_eq!(hero.glyph, "👤");
    assert_eq!(session.economy.condition.to_string(), "Stable");
}

#[test]
fn json_round_trip_preserves_everything() {
    let service = GameService::new();
    let mut session = service.start_game("Taylor", Some(5));

    service
        .buy_item(&mut session, EquipmentKind::Weapon, "Ledger Blade", Currency::Gold)
        .unwrap();
    service
        .equip_item(&mut session, EquipmentKind::Weapon, 0, "Ledger Blade")
        .unwrap();
    service
        .buy_consumable(&mut session, "Dividend Potion", Currency::Gold, 2)
        .unwrap();
    service.start_encounter(&mut session).unwrap();
    service
        .battle_action(&mut session, &BattleCommand::Guard)
        .unwrap();

    let json = session.to_json().unwrap();
    let restored = SessionState::from_json(&json).unwrap();
    assert_eq!(restored, session);

    // the restored session keeps playing from where it left off
    let mut a = session.clone();
    let mut b = restored;
    let turn_a = service.battle_action(&mut a, &BattleCommand::Attack { target: None });
    let turn_b = service.battle_action(&mut b, &BattleCommand::Attack { target: None });
    assert_eq!(turn_a.unwrap(), turn_b.unwrap());
    assert_eq!(a, b);
}

#[test]
fn session_survives_a_trip_through_disk() {
    let service = GameService::new();
    let mut session = service.start_game("Taylor", Some(10));
    service.start_encounter(&mut session).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");
    std::fs::write(&path, session.to_json().unwrap()).unwrap();

    let loaded = SessionState::from_json(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(loaded, session);
}

#[test]
fn insufficient_funds_is_atomic_through_the_service() {
    let service = GameService::new();
    let mut session = service.start_game("Taylor", Some(2));

    let before = session.clone();
    let err = service
        .buy_item(&mut session, EquipmentKind::Weapon, "Invisible Hand", Currency::Gold)
        .unwrap_err();
    assert_eq!(err.error_code(), "INSUFFICIENT_FUNDS");
    assert_eq!(session, before);

    let err = service
        .buy_item(&mut session, EquipmentKind::Weapon, "Excalibur", Currency::Gold)
        .unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_CATALOG_ENTRY");
    assert_eq!(session, before);
}

#[test]
fn consumables_restore_members_outside_battle() {
    let service = GameService::new();
    let mut session = service.start_game("Taylor", Some(3));
    service
        .buy_consumable(&mut session, "Dividend Potion", Currency::Gold, 1)
        .unwrap();

    session.player.party[0].hp = 60;
    service.use_consumable(&mut session, 0, "Dividend Potion").unwrap();
    assert_eq!(session.player.party[0].hp, 90);
    assert!(session.player.consumables.is_empty());
}

#[test]
fn recruit_and_release_manage_the_party() {
    let service = GameService::new();
    let mut session = service.start_game("Taylor", Some(4));

    service
        .recruit_monster(&mut session, "Inflation Goblin", None)
        .unwrap();
    assert_eq!(session.player.party.len(), 2);
    assert_eq!(session.player.party[1].name, "Inflation Goblin");
    assert_eq!(session.player.party[1].glyph, "👹");

    // fill the party, then a swap recruit
    service.recruit_monster(&mut session, "Coin Slime", None).unwrap();
    service.recruit_monster(&mut session, "Risk Slime", None).unwrap();
    assert!(matches!(
        service.recruit_monster(&mut session, "Deflation Slime", None),
        Err(ServiceError::Party(_))
    ));
    service
        .recruit_monster(&mut session, "Deflation Slime", Some("Coin Slime"))
        .unwrap();
    assert_eq!(session.player.party.len(), 4);
    assert!(session.player.party.iter().all(|m| m.name != "Coin Slime"));

    service.release_monster(&mut session, "Risk Slime").unwrap();
    assert_eq!(session.player.party.len(), 3);

    assert!(matches!(
        service.release_monster(&mut session, "Taylor"),
        Err(ServiceError::CannotReleaseHuman { .. })
    ));
    assert!(matches!(
        service.release_monster(&mut session, "Bond Witch"),
        Err(ServiceError::MemberNotFound { .. })
    ));
}

#[test]
fn unknown_recruit_is_rejected() {
    let service = GameService::new();
    let mut session = service.start_game("Taylor", Some(6));
    let err = service
        .recruit_monster(&mut session, "Friendly Accountant", None)
        .unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_TEMPLATE");
}

#[test]
fn corrupt_session_surfaces_an_integrity_error() {
    let service = GameService::new();
    let mut session = service.start_game("Taylor", Some(8));
    session.player.weapons.push("Vaporware Sword".to_string());

    let err = service
        .buy_consumable(&mut session, "Dividend Potion", Currency::Gold, 1)
        .unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_ITEM");
    assert_eq!(err.severity().as_str(), "integrity");
}

#[test]
fn economy_report_reflects_holdings() {
    let service = GameService::new();
    let mut session = service.start_game("Taylor", Some(9));
    session.player.tickets = 4;

    let report = service.economy_report(&session);
    assert_eq!(report.condition, "Stable");
    assert_eq!(report.ticket_value, 50);
    assert_eq!(report.tickets_held, 4);
    assert_eq!(report.holdings_value, 200);
    assert!(report.history.is_empty());
}

#[test]
fn economy_report_saturates_on_absurd_holdings() {
    let service = GameService::new();
    let mut session = service.start_game("Taylor", Some(11));
    session.player.tickets = u32::MAX;

    // a hand-edited blob with a huge holding still reports, never panics
    let report = service.economy_report(&session);
    assert_eq!(report.holdings_value, u32::MAX);
}

#[test]
fn shop_catalog_lists_the_shipped_items() {
    let service = GameService::new();
    let catalog = service.shop_catalog();
    assert_eq!(catalog.weapons.len(), 6);
    assert_eq!(catalog.armors.len(), 5);
    assert_eq!(catalog.consumables.len(), 4);
    assert!(catalog.weapons.iter().any(|w| w.name == "Ledger Blade"));
}
