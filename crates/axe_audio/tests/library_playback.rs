//! Installing a library and playing through contexts across level changes

use std::cell::Cell;
use std::rc::Rc;

use axe_audio::{AudioConfig, AudioLibraryDef, AudioManager, AudioState, SilentBackend};
use axe_math::MatchType;

const SFX: u64 = 1;
const MUSIC: u64 = 2;

fn library_def() -> AudioLibraryDef {
    AudioLibraryDef::from_ron(
        r#"AudioLibraryDef(
            sounds: [
                SoundDef(name: "click", asset: "ui/click"),
                SoundDef(name: "jump", asset: "sfx/jump"),
                SoundDef(name: "forest", asset: "music/forest"),
                SoundDef(name: "cave", asset: "music/cave"),
            ],
            banks: [BankDef(name: "jumps", weights: [("jump", 1)])],
            queues: [QueueDef(name: "tracks", sounds: ["forest", "cave"])],
            contexts: [
                ContextDef(name: "menu", sources: ["click"]),
                ContextDef(name: "level", sources: ["click", "jumps", "tracks"]),
            ],
        )"#,
    )
    .unwrap()
}

fn manager() -> AudioManager {
    let backend = SilentBackend::new()
        .with_duration("ui/click", 0.1)
        .with_duration("music/forest", 30.0)
        .with_duration("music/cave", 30.0);
    AudioManager::with_config(backend, AudioConfig { seed: Some(9), ..AudioConfig::default() })
}

#[test]
fn test_level_change_keeps_shared_sounds() {
    let mut manager = manager();
    let library = library_def().install(&mut manager).unwrap();
    let click = library.sound("click").unwrap();
    let jump = library.sound("jump").unwrap();

    library.load_context(&mut manager, "menu").unwrap();
    library.load_context(&mut manager, "level").unwrap();
    library.unload_context(&mut manager, "menu", true).unwrap();

    assert!(manager.audio(click).unwrap().is_loaded());
    assert_eq!(manager.references(click), 1);

    library.unload_context(&mut manager, "level", false).unwrap();
    assert!(manager.audio(jump).unwrap().is_loaded());
    manager.cleanup();
    assert!(!manager.audio(jump).unwrap().is_loaded());
    assert!(!manager.audio(click).unwrap().is_loaded());
}

#[test]
fn test_music_and_effects_lifecycle() {
    let mut manager = manager();
    let mut library = library_def().install(&mut manager).unwrap();
    library.load_context(&mut manager, "level").unwrap();

    let music = library.play(&mut manager, "tracks", MUSIC).unwrap().unwrap();
    let stopped = Rc::new(Cell::new(false));
    let flag = stopped.clone();
    manager
        .instance_mut(music)
        .unwrap()
        .on_state_change(move |_, new, _| flag.set(new == AudioState::Stopped));

    library.play(&mut manager, "click", SFX).unwrap();
    library.play(&mut manager, "jumps", SFX).unwrap();
    manager.update(0.05);
    assert_eq!(manager.count(SFX, MatchType::AnyOf), 2);

    manager.update(0.1);
    assert_eq!(manager.count(SFX, MatchType::AnyOf), 1);
    assert_eq!(manager.count_in_state(MUSIC, MatchType::All, AudioState::Playing), 1);

    manager.stop(MUSIC, MatchType::All);
    manager.update(0.0);
    assert!(stopped.get());
    assert!(manager.instance(music).is_none());
}
