use super::*;
use std::sync::Arc;

use autopick_config::Config;
use autopick_dom_memory::{MemoryDocument, MemoryNode};
use autopick_protocols::{BoundingBox, DomNode};

fn automator(children: &[MemoryNode]) -> Automator<MemoryDocument> {
    automator_with(children, &Config::default())
}

fn automator_with(children: &[MemoryNode], config: &Config) -> Automator<MemoryDocument> {
    let mut body = MemoryNode::element("body");
    for child in children {
        body = body.with_child(child.clone());
    }
    Automator::new(Arc::new(MemoryDocument::new(body)), config)
}

fn cards(n: usize) -> Vec<MemoryNode> {
    (0..n)
        .map(|_| MemoryNode::element("div").with_class("card"))
        .collect()
}

#[test]
fn test_initial_state() {
    let auto = automator(&cards(1));
    assert_eq!(auto.step(), Step::Picking);
    assert_eq!(auto.sub_action(), None);
    assert_eq!(auto.input_value(), "");
    assert!(auto.active_set().is_empty());
    assert_eq!(auto.predicted_parents_count(), -2);
    assert!(auto.inspector_enabled());
}

#[test]
fn test_reselect_deselects_and_clears_markers() {
    let cards = cards(3);
    let mut auto = automator(&cards);

    let outcome = auto.select_or_toggle(&cards[0], Origin::User);
    assert_eq!(outcome, SelectOutcome::Selected { subsumed: 0, inferred: 0 });
    assert!(cards[0].has_class("--user-selected"));

    let outcome = auto.select_or_toggle(&cards[0], Origin::User);
    assert_eq!(outcome, SelectOutcome::Deselected);
    assert!(auto.primary_selection().is_empty());
    assert_eq!(cards[0].class_names(), vec!["card"]);
}

#[test]
fn test_deselect_does_not_generalize() {
    let cards = cards(4);
    let mut auto = automator(&cards);
    auto.select_or_toggle(&cards[0], Origin::User);
    auto.select_or_toggle(&cards[1], Origin::User);
    assert_eq!(auto.primary_selection().len(), 4);

    let outcome = auto.select_or_toggle(&cards[3], Origin::User);
    assert_eq!(outcome, SelectOutcome::Deselected);
    assert_eq!(auto.primary_selection().len(), 3);
    assert!(!auto.primary_selection().contains(&cards[3]));
}

#[test]
fn test_inferred_picks_never_generalize() {
    let cards = cards(3);
    let mut auto = automator(&cards);
    auto.select_or_toggle(&cards[0], Origin::Inferred);
    let outcome = auto.select_or_toggle(&cards[1], Origin::Inferred);
    assert_eq!(outcome, SelectOutcome::Selected { subsumed: 0, inferred: 0 });
    assert_eq!(auto.primary_selection().len(), 2);
    assert!(cards[0].has_class("--algo-selected"));
}

#[test]
fn test_first_pick_does_not_generalize() {
    let cards = cards(3);
    let mut auto = automator(&cards);
    auto.select_or_toggle(&cards[0], Origin::User);
    assert_eq!(auto.primary_selection().len(), 1);
}

#[test]
fn test_second_pick_generalizes() {
    let cards = cards(3);
    let mut auto = automator(&cards);
    auto.select_or_toggle(&cards[0], Origin::User);
    let outcome = auto.select_or_toggle(&cards[1], Origin::User);
    assert_eq!(outcome, SelectOutcome::Selected { subsumed: 0, inferred: 1 });
    assert!(cards[2].has_class("--algo-selected"));
    assert!(!cards[2].has_class("--user-selected"));
}

#[test]
fn test_configured_pick_threshold() {
    let mut config = Config::default();
    config.generalization.min_primary_picks = 3;
    let cards = cards(5);
    let mut auto = automator_with(&cards, &config);

    auto.select_or_toggle(&cards[0], Origin::User);
    auto.select_or_toggle(&cards[1], Origin::User);
    assert_eq!(auto.primary_selection().len(), 2);
    auto.select_or_toggle(&cards[2], Origin::User);
    assert_eq!(auto.primary_selection().len(), 5);
}

#[test]
fn test_ancestor_subsumes_selected_descendants() {
    let leaf = MemoryNode::element("span");
    let item = MemoryNode::element("li").with_child(leaf.clone());
    let list = MemoryNode::element("ul").with_child(item);
    let mut auto = automator(&[list.clone()]);

    auto.select_or_toggle(&leaf, Origin::User);
    let outcome = auto.select_or_toggle(&list, Origin::User);

    assert!(matches!(outcome, SelectOutcome::Selected { subsumed: 1, .. }));
    assert_eq!(auto.primary_selection().as_slice(), &[list]);
    assert!(leaf.class_names().is_empty());
}

#[test]
fn test_finish_picking_requires_anchor() {
    let cards = cards(2);
    let mut auto = automator(&cards);
    assert!(!auto.finish_picking());
    assert_eq!(auto.step(), Step::Picking);

    auto.select_or_toggle(&cards[0], Origin::User);
    assert!(auto.finish_picking());
    assert_eq!(auto.step(), Step::ChoosingAction);
    assert!(!auto.finish_picking());
}

#[test]
fn test_selection_locked_while_choosing_action() {
    let cards = cards(3);
    let mut auto = automator(&cards);
    auto.select_or_toggle(&cards[0], Origin::User);
    auto.finish_picking();

    assert_eq!(auto.select_or_toggle(&cards[1], Origin::User), SelectOutcome::Locked);
    assert_eq!(auto.select_or_toggle(&cards[0], Origin::User), SelectOutcome::Locked);
    assert_eq!(auto.primary_selection().as_slice(), &[cards[0].clone()]);
    assert!(!cards[1].has_class("--user-selected"));
}

#[test]
fn test_sub_action_locks_primary_and_targets_sub_selection() {
    let button = MemoryNode::element("button");
    let anchor = MemoryNode::element("div").with_class("row").with_child(button.clone());
    let mut auto = automator(&[anchor.clone()]);

    auto.select_or_toggle(&anchor, Origin::User);
    auto.finish_picking();
    auto.advance_to_sub_action_choice(SubAction::Click);

    assert_eq!(auto.step(), Step::Configuring);
    assert!(auto.is_click_sub_action());
    assert!(!auto.is_input_sub_action());
    assert!(anchor.has_class("--dashed"));

    auto.select_or_toggle(&button, Origin::User);
    assert_eq!(auto.sub_selection().as_slice(), &[button.clone()]);
    assert_eq!(auto.primary_selection().as_slice(), &[anchor]);
    assert!(button.has_class("--user-selected"));
    assert!(button.has_class("--dark"));
}

#[test]
fn test_reset_two_step() {
    let input = MemoryNode::element("input");
    let anchor = MemoryNode::element("form").with_child(input.clone());
    let mut auto = automator(&[anchor.clone()]);

    auto.select_or_toggle(&anchor, Origin::User);
    auto.finish_picking();
    auto.advance_to_sub_action_choice(SubAction::Input);
    auto.set_input_value("hello");
    auto.select_or_toggle(&input, Origin::User);

    auto.reset();
    assert_eq!(auto.step(), Step::ChoosingAction);
    assert_eq!(auto.sub_action(), None);
    assert_eq!(auto.input_value(), "");
    assert!(auto.sub_selection().is_empty());
    assert!(input.class_names().is_empty());
    assert_eq!(auto.primary_selection().as_slice(), &[anchor.clone()]);

    auto.reset();
    assert_eq!(auto.step(), Step::Picking);
    assert!(auto.primary_selection().is_empty());
    assert!(anchor.class_names().is_empty());
}

#[test]
fn test_selected_classes_and_tags() {
    let a = MemoryNode::element("li").with_classes(["item", "odd"]);
    let b = MemoryNode::element("li").with_classes(["item", "even"]);
    let mut auto = automator(&[a.clone(), b.clone()]);

    auto.select_or_toggle(&a, Origin::User);
    auto.select_or_toggle(&b, Origin::User);
    assert_eq!(auto.selected_classes(), vec!["item"]);
    assert_eq!(auto.selected_tag_names(), vec!["li"]);
    assert_eq!(auto.predicted_parents_count(), 0);
}

#[test]
fn test_action_plan_snapshot() {
    let input = MemoryNode::element("input");
    let anchor = MemoryNode::element("form").with_child(input.clone());
    let mut auto = automator(&[anchor.clone()]);

    let plan = auto.action_plan();
    assert_eq!(plan.action, None);
    assert!(plan.targets.is_empty());

    auto.select_or_toggle(&anchor, Origin::User);
    auto.finish_picking();
    auto.advance_to_sub_action_choice(SubAction::Input);
    auto.set_input_value("v");
    auto.select_or_toggle(&input, Origin::User);

    let plan = auto.action_plan();
    assert_eq!(plan.action, Some(SubAction::Input));
    assert_eq!(plan.value, "v");
    assert_eq!(plan.targets, vec![input]);
}

#[test]
fn test_pointer_click_selects_target() {
    let cards = cards(1);
    let mut auto = automator(&cards);
    let event = PointerEvent::at(&cards[0]);

    assert_eq!(auto.pointer_click(&event), ClickDisposition::Consumed);
    assert!(auto.primary_selection().contains(&cards[0]));
}

#[test]
fn test_pointer_click_inside_panel_passes_through() {
    let button = MemoryNode::element("button");
    let panel = MemoryNode::element("aside")
        .with_attribute("inspector-ignore", "")
        .with_child(button.clone());
    let mut auto = automator(&[panel]);

    assert_eq!(
        auto.pointer_click(&PointerEvent::at(&button)),
        ClickDisposition::PassThrough
    );
    assert!(auto.primary_selection().is_empty());
}

#[test]
fn test_pointer_click_empty_path_passes_through() {
    let mut auto = automator(&cards(1));
    let event: PointerEvent<MemoryNode> = PointerEvent::new(Vec::new());
    assert_eq!(auto.pointer_click(&event), ClickDisposition::PassThrough);
}

#[test]
fn test_pointer_click_ignored_when_inspector_disabled() {
    let mut config = Config::default();
    config.inspector.enabled = false;
    let cards = cards(1);
    let mut auto = automator_with(&cards, &config);

    assert!(!auto.inspector_enabled());
    assert_eq!(
        auto.pointer_click(&PointerEvent::at(&cards[0])),
        ClickDisposition::PassThrough
    );
    assert!(auto.primary_selection().is_empty());
}

#[test]
fn test_pointer_click_while_locked_is_consumed_but_ignored() {
    let cards = cards(2);
    let mut auto = automator(&cards);
    auto.select_or_toggle(&cards[0], Origin::User);
    auto.finish_picking();

    assert_eq!(
        auto.pointer_click(&PointerEvent::at(&cards[1])),
        ClickDisposition::Consumed
    );
    assert_eq!(auto.primary_selection().len(), 1);
}

#[test]
fn test_pointer_move_overlay() {
    let bounds = BoundingBox::new(10.0, 20.0, 30.0, 40.0);
    let target = MemoryNode::element("div").with_bounds(bounds);
    let hidden = MemoryNode::element("span");
    let panel = MemoryNode::element("aside")
        .with_attribute("inspector-ignore", "")
        .with_child(hidden.clone());
    let mut auto = automator(&[target.clone(), panel]);

    let overlay = *auto.pointer_move(&PointerEvent::at(&target));
    assert!(overlay.visible);
    assert_eq!(overlay.bounds, bounds);

    let overlay = *auto.pointer_move(&PointerEvent::at(&hidden));
    assert!(!overlay.visible);
    assert!(!auto.overlay().visible);
}

#[test]
fn test_custom_ignore_attribute() {
    let mut config = Config::default();
    config.inspector.ignore_attribute = "data-panel".to_string();
    let inside = MemoryNode::element("button");
    let panel = MemoryNode::element("div")
        .with_attribute("data-panel", "true")
        .with_child(inside.clone());
    let mut auto = automator_with(&[panel], &config);

    assert_eq!(
        auto.pointer_click(&PointerEvent::at(&inside)),
        ClickDisposition::PassThrough
    );
}
