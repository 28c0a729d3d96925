use super::*;

#[test]
fn start_clears_title_and_waits() {
    let mut writer = Typewriter::default();
    let actions = writer.start("Hi", Some("Dev"), &PageConfig::default());
    assert_eq!(actions, vec![
        Action::text(Target::HeroTitle, ""),
        Action::defer_ms(500, Task::Type { line: HeroLine::Title, next: 0 }),
    ]);
}

#[test]
fn each_step_writes_prefix_and_schedules_next() {
    let config = PageConfig::default();
    let mut writer = Typewriter::default();
    writer.start("Hey", None, &config);
    assert_eq!(writer.type_next(HeroLine::Title, 1, &config), vec![
        Action::text(Target::HeroTitle, "He"),
        Action::defer_ms(100, Task::Type { line: HeroLine::Title, next: 2 }),
    ]);
}

#[test]
fn finished_title_hands_over_to_tagline_after_pause() {
    let config = PageConfig::default();
    let mut writer = Typewriter::default();
    writer.start("Hi", Some("Dev"), &config);
    assert_eq!(writer.type_next(HeroLine::Title, 2, &config), vec![
        Action::text(Target::HeroTagline, ""),
        Action::defer_ms(500, Task::Type { line: HeroLine::Tagline, next: 0 }),
    ]);
    assert_eq!(writer.type_next(HeroLine::Tagline, 0, &config), vec![
        Action::text(Target::HeroTagline, "D"),
        Action::defer_ms(80, Task::Type { line: HeroLine::Tagline, next: 1 }),
    ]);
}

#[test]
fn finished_title_without_tagline_stops() {
    let config = PageConfig::default();
    let mut writer = Typewriter::default();
    writer.start("Hi", None, &config);
    assert!(writer.type_next(HeroLine::Title, 2, &config).is_empty());
    assert!(writer.type_next(HeroLine::Tagline, 0, &config).is_empty());
}

#[test]
fn finished_tagline_stops() {
    let config = PageConfig::default();
    let mut writer = Typewriter::default();
    writer.start("Hi", Some("Dev"), &config);
    assert!(writer.type_next(HeroLine::Tagline, 3, &config).is_empty());
}

#[test]
fn multibyte_characters_are_typed_whole() {
    let config = PageConfig::default();
    let mut writer = Typewriter::default();
    writer.start("héllo 👋", None, &config);
    let actions = writer.type_next(HeroLine::Title, 1, &config);
    assert_eq!(actions[0], Action::text(Target::HeroTitle, "hé"));
    let actions = writer.type_next(HeroLine::Title, 6, &config);
    assert_eq!(actions[0], Action::text(Target::HeroTitle, "héllo 👋"));
}
