//! Scripted terminal sessions against the built-in world.

use std::io::Cursor;

use game_content::ContentFactory;
use game_core::{HasStats, ScriptedRng};
use mud_client::App;
use runtime::{FileSaveRepository, SaveRepository};
use tempfile::tempdir;

#[test]
fn play_save_and_continue() {
    let dir = tempdir().unwrap();

    // Create a character, walk north, beat the wolf with Power Strikes, save.
    let script = "Aria\n2\nnorth\n1\ny\n1\n1\n1\n1\n3\n6\n7\n";
    let repo = FileSaveRepository::new(dir.path()).unwrap();
    let mut app = App::new(Cursor::new(script), Vec::new(), repo, "hero");
    let mut game = app
        .start(&ContentFactory::builtin(), ScriptedRng::new([99]))
        .unwrap();
    app.run(&mut game).unwrap();

    assert_eq!(game.current_room().name(), "Dark Forest");
    assert_eq!(game.player().stats().hp(), 80);
    assert_eq!(game.player().gold(), 65);

    let text = String::from_utf8(app.into_output()).unwrap();
    assert!(text.contains("Welcome to this world, Aria!"));
    assert!(text.contains("Forest Wolf Lv.2"));
    assert_eq!(text.matches("=== Your turn ===").count(), 4);
    assert!(text.contains("Victory! You defeated Forest Wolf."));
    assert!(text.contains("Gained 15 gold (now 65)."));
    assert!(text.contains("HP: 80/100"));
    assert!(text.contains("Game saved."));
    assert!(dir.path().join("hero.sav").exists());

    // A new process finds the save and resumes in the forest.
    let repo = FileSaveRepository::new(dir.path()).unwrap();
    assert!(repo.exists("hero"));
    let mut app = App::new(Cursor::new("y\n7\n"), Vec::new(), repo, "hero");
    let mut game = app
        .start(&ContentFactory::builtin(), ScriptedRng::new([99]))
        .unwrap();
    app.run(&mut game).unwrap();

    assert_eq!(game.player().name(), "Aria");
    assert_eq!(game.current_room().name(), "Dark Forest");
    assert_eq!(game.player().stats().hp(), 80);

    let text = String::from_utf8(app.into_output()).unwrap();
    assert!(text.contains("Welcome back, Aria!"));
    assert!(text.contains("Location: Dark Forest"));
}

#[test]
fn walls_and_empty_rooms() {
    let script = "Bram\n2\nsouth\n5\n0\n7\n";
    let mut app = App::new(
        Cursor::new(script),
        Vec::new(),
        runtime::InMemorySaveRepo::new(),
        "default",
    );
    let mut game = app
        .start(&ContentFactory::builtin(), ScriptedRng::new([99]))
        .unwrap();
    app.run(&mut game).unwrap();

    assert_eq!(game.current_room().name(), "Entrance Hall");
    let text = String::from_utf8(app.into_output()).unwrap();
    assert!(text.contains("There is no way in that direction!"));
    // NPC 0 in the hall is the old man.
    assert!(text.contains("Mysterious Old Man: \""));
}

#[test]
fn corrupt_save_falls_back_to_a_new_character() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("hero.sav"), b"garbage").unwrap();

    let repo = FileSaveRepository::new(dir.path()).unwrap();
    assert!(repo.exists("hero"));
    let mut app = App::new(Cursor::new("y\nBram\n"), Vec::new(), repo, "hero");
    let game = app
        .start(&ContentFactory::builtin(), ScriptedRng::new([99]))
        .unwrap();

    assert_eq!(game.player().name(), "Bram");
    assert_eq!(game.current_room().name(), "Entrance Hall");

    let text = String::from_utf8(app.into_output()).unwrap();
    assert!(text.contains("Failed to load the game"));
    assert!(text.contains("Welcome to this world, Bram!"));
    assert!(!text.contains("Welcome back"));
}
