//! Footprint tests built from parsed annotations.

use marginalia_engine::{Footprint, PassabilityRule, passability_rule, screen_position};
use marginalia_foundation::types::{Direction, MovementMode};
use marginalia_parser::parse;

#[test]
fn two_cell_wide_door() {
    // A door occupying its own cell and one to the left.
    let page = parse("<Left Size: 1>");
    let door = Footprint::new(&page, 10, 4);

    assert!(door.covers(10, 4));
    assert!(door.covers(9, 4));
    assert!(!door.covers(11, 4));
    assert!(!door.covers(10, 5));
}

#[test]
fn occupies_makes_non_rectangular_shapes() {
    let page = parse("<Occupies: (1,1), (-1,1)>");
    let fountain = Footprint::new(&page, 0, 0);

    assert!(fountain.covers(0, 0));
    assert!(fountain.covers(1, 1));
    assert!(fountain.covers(-1, 1));
    assert!(!fountain.covers(1, 0));
}

#[test]
fn entry_cells_for_a_wide_mover() {
    let page = parse("<Left Size: 1>\n<Right Size: 1>");
    let cart = Footprint::new(&page, 5, 5);

    // Moving down into row 6 must clear all three spanned columns.
    let cells = cart.entry_cells(5, 6, Direction::Down);
    assert_eq!(cells, vec![(5, 6), (4, 6), (6, 6)]);

    // Moving right into column 6 only needs the single row.
    let cells = cart.entry_cells(6, 5, Direction::Right);
    assert_eq!(cells, vec![(6, 5)]);
}

#[test]
fn draw_offset_shifts_screen_position() {
    let page = parse("<Adjusted X: -4>\n<Adjusted Y: 12>");
    assert_eq!(screen_position(&page, 160, 96), (156, 108));
}

#[test]
fn movement_tag_selects_passability_rule() {
    let page = parse("<Movement: Fly>");
    assert_eq!(page.movement_mode, MovementMode::Flying);
    assert_eq!(
        passability_rule(page.movement_mode),
        PassabilityRule::Unrestricted
    );

    let untagged = parse("");
    assert_eq!(passability_rule(untagged.movement_mode), PassabilityRule::Ground);
}
