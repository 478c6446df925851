//! End-to-end runs of typed commands through a studio.

use barista_studio_lib::input::parse;
use barista_studio_lib::state::{ConfigState, SETTINGS_FILE_NAME};
use barista_studio_lib::studio::Studio;

fn studio_in(dir: &std::path::Path) -> Studio {
    Studio::from_config(ConfigState {
        currency_symbol: "$".to_string(),
        settings_path: Some(dir.join(SETTINGS_FILE_NAME)),
    })
}

fn run(studio: &Studio, line: &str) -> String {
    studio.handle(parse(line).unwrap()).text
}

#[test]
fn latte_with_milk_and_whipped_cream() {
    let dir = tempfile::tempdir().unwrap();
    let studio = studio_in(dir.path());

    run(&studio, "base latte");
    run(&studio, "toggle milk");
    let text = run(&studio, "toggle whipped cream");

    assert!(text.contains("Latte + Milk + Whipped Cream\nTotal: $4.20\n"));
    assert!(text.contains(
        "new WhippedCreamDecorator(\n  new MilkDecorator(\n    new Latte()\n  )\n)"
    ));

    let text = run(&studio, "base black coffee");
    assert!(text.contains("Black Coffee + Milk\nTotal: $2.50\n"));
    assert!(text.contains("note: Removed for Black Coffee: Whipped Cream"));
}

#[test]
fn sound_settings_survive_restart() {
    let dir = tempfile::tempdir().unwrap();

    let first = studio_in(dir.path());
    run(&first, "volume 0.2");
    run(&first, "sound off");
    drop(first);

    let second = studio_in(dir.path());
    assert_eq!(run(&second, "test click"), "Sound: off, volume 20%\n");
}

#[test]
fn corrupt_settings_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(SETTINGS_FILE_NAME), "{ not json").unwrap();

    let studio = studio_in(dir.path());
    assert_eq!(run(&studio, "test add"), "Sound: on, volume 50%\n");
}
