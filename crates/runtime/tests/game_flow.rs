use game_content::ContentFactory;
use game_core::{
    BaseStats, BattleOutcome, Direction, GameConfig, GameEvent, HasStats, Item, Npc, Player,
    PlayerCommand, Room, ScriptedRng, ShopError, TurnPrompt, World,
};
use runtime::{
    FileSaveRepository, Game, InMemorySaveRepo, Interaction, RuntimeError, SaveData,
    SaveRepository,
};

/// Built-in world where every d100 roll is 100 (no loot) and every enemy
/// picks Attack with the maximum variance.
fn reference_game() -> Game<ScriptedRng> {
    Game::from_content(
        &ContentFactory::builtin(),
        Player::new("Aria"),
        ScriptedRng::new([99]),
    )
    .expect("built-in content loads")
}

fn always(command: PlayerCommand) -> impl FnMut(&TurnPrompt<'_>) -> PlayerCommand {
    move |_| command.clone()
}

#[test]
fn forest_wolf_fight_from_start_to_finish() {
    let mut game = reference_game();
    let mut events = Vec::new();

    let forest = game.travel(Direction::North, &mut events).unwrap();
    assert_eq!(forest.name(), "Dark Forest");
    assert_eq!(
        events,
        [GameEvent::RoomEntered {
            room: "Dark Forest".into(),
            first_visit: true
        }]
    );
    assert!(game.explore().is_visited());

    let outcome = game
        .fight_first_enemy(&mut always(PlayerCommand::UseSkill(1)), &mut events)
        .unwrap();

    let BattleOutcome::Victory(report) = outcome else {
        panic!("expected victory, got {outcome:?}");
    };
    assert_eq!((report.experience, report.gold), (30, 15));
    assert!(report.loot.is_none());

    // three wolf hits of 16 - 1, then a quarter of max HP back
    let player = game.player();
    assert_eq!(player.stats().hp(), 80);
    assert_eq!(player.stats().mp(), 42);
    assert_eq!(player.gold(), 65);
    assert_eq!(player.experience(), 30);
    assert!(game.current_room().enemies().is_empty());
}

#[test]
fn walking_into_a_wall_changes_nothing() {
    let mut game = reference_game();
    let start = game.current_room_id();
    let mut events = Vec::new();

    let err = game.travel(Direction::South, &mut events).unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::NoExit {
            direction: Direction::South,
            ..
        }
    ));
    assert_eq!(game.current_room_id(), start);
    assert!(events.is_empty());

    assert!(matches!(
        game.fight_first_enemy(&mut always(PlayerCommand::Defend), &mut events),
        Err(RuntimeError::NoEnemy { .. })
    ));
}

#[test]
fn blacksmith_sells_until_the_gold_runs_out() {
    let mut game = reference_game();
    let mut events = Vec::new();
    game.travel(Direction::East, &mut events).unwrap();

    let smith = game.talk(0).unwrap();
    assert_eq!(smith.dialogue(), "Need some gear? I've got good stuff!");

    let sword = game.buy(0, 0, &mut events).unwrap();
    assert_eq!(sword.name(), "Steel Sword");
    assert_eq!(game.player().gold(), 0);
    assert!(events.contains(&GameEvent::ItemPurchased {
        item: sword.clone(),
        price: 50,
        gold_left: 0,
    }));

    let err = game.buy(0, 2, &mut events).unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Shop(ShopError::InsufficientGold {
            price: 20,
            gold: 0,
            ..
        })
    ));
    assert!(matches!(
        game.buy(0, 9, &mut events),
        Err(RuntimeError::Shop(ShopError::UnknownItem { index: 9 }))
    ));
    assert!(matches!(game.talk(3), Err(RuntimeError::UnknownNpc { index: 3 })));
    assert_eq!(game.player().inventory(), [sword]);
}

#[test]
fn interact_menu_lists_npcs_then_items() {
    let mut game = reference_game();
    let mut events = Vec::new();

    assert_eq!(game.interaction(0), Some(Interaction::Talk(0)));
    assert_eq!(game.interaction(1), Some(Interaction::PickUp(0)));
    assert_eq!(game.interaction(2), Some(Interaction::PickUp(1)));
    assert_eq!(game.interaction(3), None);

    let potion = game.pick_up(0, &mut events).unwrap();
    assert_eq!(potion.name(), "Healing Potion");
    assert_eq!(game.current_room().items().len(), 1);
    assert_eq!(game.interaction(2), None);

    let sword = game.pick_up(0, &mut events).unwrap();
    assert!(matches!(
        game.pick_up(0, &mut events),
        Err(RuntimeError::UnknownItem { index: 0 })
    ));

    assert!(matches!(game.use_item(1, &mut events), Err(RuntimeError::Inventory(_))));
    let used = game.use_item(0, &mut events).unwrap();
    assert_eq!(used.item, potion);
    assert_eq!(used.healed, 0);
    assert_eq!(game.player().inventory(), [sword]);
}

#[test]
fn hostile_npc_can_be_confronted_and_stays() {
    let mut world = World::new();
    let mut camp = Room::new("Bandit Camp", "Smoke and stolen goods.");
    camp.add_npc(Npc::new(
        "Bandit",
        BaseStats::new(30, 0, 5, 0),
        false,
        "Your gold or your life.",
    ));
    camp.add_npc(Npc::new("Captive", BaseStats::new(20, 0, 1, 0), true, "Help me!"));
    world.add_room(camp);

    let mut game = Game::new(
        world,
        Player::new("Aria"),
        GameConfig::default(),
        ScriptedRng::new([99]),
    )
    .unwrap();
    let mut events = Vec::new();

    assert!(matches!(
        game.confront(1, &mut always(PlayerCommand::UseSkill(0)), &mut events),
        Err(RuntimeError::NotHostile { .. })
    ));
    assert!(matches!(
        game.buy(0, 0, &mut events),
        Err(RuntimeError::NotFriendly { .. })
    ));

    let outcome = game
        .confront(0, &mut always(PlayerCommand::UseSkill(0)), &mut events)
        .unwrap();

    assert!(outcome.is_victory());
    assert_eq!(game.player().gold(), 57);
    assert_eq!(game.player().experience(), 15);
    assert_eq!(game.player().stats().hp(), 100);
    assert_eq!(game.current_room().npcs().len(), 2);
    assert!(events.contains(&GameEvent::BattleStarted {
        enemy: "Bandit".into(),
        level: 1,
    }));
}

#[test]
fn save_and_load_restore_player_and_room() {
    let repo = InMemorySaveRepo::new();
    let mut events = Vec::new();

    let mut game = reference_game();
    game.travel(Direction::North, &mut events).unwrap();
    game.pick_up(0, &mut events).unwrap();
    game.save(&repo, "slot1").unwrap();

    let mut fresh = reference_game();
    assert_eq!(fresh.current_room().name(), "Entrance Hall");
    fresh.load(&repo, "slot1").unwrap();

    assert_eq!(fresh.current_room().name(), "Dark Forest");
    assert_eq!(fresh.player(), game.player());
    assert_eq!(fresh.player().inventory()[0].name(), "Herb");
}

#[test]
fn loading_an_empty_slot_keeps_the_current_game() {
    let repo = InMemorySaveRepo::new();
    let mut game = reference_game();

    assert!(matches!(
        game.load(&repo, "missing"),
        Err(RuntimeError::NoSave { .. })
    ));
    assert_eq!(game.player().name(), "Aria");
}

#[test]
fn unknown_saved_room_falls_back_to_start() {
    let mut game = reference_game();
    let start = game.world().start();
    let mut events = Vec::new();
    game.travel(Direction::East, &mut events).unwrap();

    let room = game.restore(SaveData {
        player: Player::new("Borin").with_gold(999),
        room: "Sunken Temple".into(),
    });

    assert_eq!(room, start);
    assert_eq!(game.current_room_id(), start);
    assert_eq!(game.player().gold(), 999);
}

#[test]
fn file_repository_round_trip_through_game() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileSaveRepository::new(dir.path()).unwrap();
    let mut events = Vec::new();

    let mut game = reference_game();
    game.travel(Direction::East, &mut events).unwrap();
    game.buy(0, 2, &mut events).unwrap();
    game.save(&repo, "default").unwrap();
    assert_eq!(repo.list_slots().unwrap(), ["default"]);

    let mut fresh = reference_game();
    fresh.load(&repo, "default").unwrap();
    assert_eq!(fresh.current_room().name(), "Quiet Village");
    assert_eq!(fresh.player().gold(), 30);
    assert_eq!(
        fresh.player().inventory(),
        [Item::new("Greater Healing Potion", "Restores more HP", 20)]
    );
}
