use super::*;
use crate::action::Target;
use crate::reveal::{Intersection, RevealKind};

#[test]
fn absorb_keeps_immediate_actions_and_queues_deferred() {
    let mut timeline = Timeline::new();
    let immediate = timeline.absorb(vec![
        Action::ScrollToTop,
        Action::Defer { delay: Duration::from_millis(10), task: Task::ActivateModal },
        Action::ResetForm,
    ]);
    assert_eq!(immediate, vec![Action::ScrollToTop, Action::ResetForm]);
    assert_eq!(timeline.pending(), 1);
}

#[test]
fn advance_runs_only_due_tasks() {
    let mut controller = PageController::default();
    let mut timeline = Timeline::new();
    timeline.absorb(vec![Action::Defer { delay: Duration::from_millis(300), task: Task::ClearThemeTransition }]);

    assert!(timeline.advance_ms(299, &mut controller).is_empty());
    assert_eq!(timeline.pending(), 1);
    assert_eq!(timeline.advance_ms(1, &mut controller), vec![Action::SetStyle {
        target: Target::Root,
        property: "transition",
        value: String::new()
    }]);
    assert_eq!(timeline.now(), Duration::from_millis(300));
    assert_eq!(timeline.pending(), 0);
}

#[test]
fn equal_due_times_run_in_schedule_order() {
    let mut controller = PageController::default();
    let mut timeline = Timeline::new();
    let batch = controller.intersections(RevealKind::Card, &[
        Intersection { index: 0, intersecting: true },
    ]);
    timeline.absorb(batch);
    let batch = controller.intersections(RevealKind::Section, &[
        Intersection { index: 0, intersecting: true },
    ]);
    timeline.absorb(batch);

    let applied = timeline.advance_ms(0, &mut controller);
    assert_eq!(applied[0], Action::SetStyle { target: Target::Card(0), property: "opacity", value: "1".to_owned() });
    assert_eq!(applied[2], Action::SetStyle { target: Target::Section(0), property: "opacity", value: "1".to_owned() });
}

#[test]
fn run_until_idle_drains_chained_tasks() {
    let mut controller = PageController::default();
    let mut timeline = Timeline::new();
    let start = controller.start_typing("ab", Some("c"));
    timeline.absorb(start);

    let applied = timeline.run_until_idle(&mut controller);
    assert_eq!(timeline.pending(), 0);
    // start delay, one title step per char, tagline pause, one tagline step
    assert_eq!(timeline.now(), Duration::from_millis(500 + 2 * 100 + 500 + 80));
    assert_eq!(applied.last(), Some(&Action::SetText { target: Target::HeroTagline, text: "c".to_owned() }));
}
