//! Tests related to the reduction ladder

use num_bigint::BigInt;

use crate::indentation::{DisplayIndented, Indentation};
use crate::literal::Literal;

use super::{Ladder, MAX_POWER_LIMIT, REDUCTION_SIGNAL};


fn ladder(angle_width: u32) -> Ladder {
    Ladder::derive(angle_width, &Literal::new(angle_width, 0xC90Fu32))
}

fn render(ladder: &Ladder) -> String {
    let mut s = String::new();
    DisplayIndented::fmt(&ladder.template(REDUCTION_SIGNAL), &mut Indentation::root(), &mut s)
        .expect("Failed to render template");
    s
}


#[quickcheck]
fn descending_to_zero(angle_width: u16) -> bool {
    let angle_width = u32::from(angle_width) + 4;
    let ladder = ladder(angle_width);
    let max_power = std::cmp::min(angle_width - 4, MAX_POWER_LIMIT);
    let powers: Vec<_> = ladder.iter().map(|l| l.power()).collect();

    let terminal = ladder.iter().last().map(|l| l.is_terminal()).unwrap_or(false);

    ladder.len() == max_power as usize + 1
        && powers == (0..=max_power).rev().collect::<Vec<_>>()
        && terminal
}


#[quickcheck]
fn amounts_are_shifted(angle_width: u8) -> bool {
    let ladder = ladder(u32::from(angle_width) + 4);
    let shifted = ladder.iter().all(|l| *l.amount() == BigInt::from(0xC90Fu32) * (1u32 << l.power()));
    shifted
}


#[test]
fn capped_power() {
    let ladder = ladder(32);
    assert_eq!(ladder.max_power(), 10);
    assert_eq!(ladder.len(), 11);
    assert_eq!(ladder.reducible_degrees(), 368640);
    assert_eq!(ladder.reducible_half_turns(), 2048);
    assert_eq!(ladder.max_cycles(), 13);

    assert_eq!(super::Ladder::derive(16, &Literal::new(16, 0)).max_power(), 10);
}


#[test]
fn narrow_power() {
    assert_eq!(ladder(4).max_power(), 0);
    assert_eq!(ladder(4).len(), 1);
    assert_eq!(ladder(4).reducible_degrees(), 360);
    assert_eq!(ladder(9).max_power(), 5);
}


#[test]
fn terminal_template() {
    let expected = "\
if (temp_angle >= TWO_PI) begin  // >= 360°
    temp_angle <= temp_angle - TWO_PI;
end else if (temp_angle <= -TWO_PI) begin
    temp_angle <= temp_angle + TWO_PI;
end else begin
    // Proceed to quadrant correction
    // ... (quadrant correction logic)
end
";
    assert_eq!(render(&ladder(4)), expected);
}


#[test]
fn chained_template() {
    let expected = "\
if (temp_angle >= (TWO_PI << 1)) begin  // >= 720°
    temp_angle <= temp_angle - (TWO_PI << 1);
end else if (temp_angle <= -(TWO_PI << 1)) begin
    temp_angle <= temp_angle + (TWO_PI << 1);
end else if (temp_angle >= TWO_PI) begin  // >= 360°
    temp_angle <= temp_angle - TWO_PI;
end else if (temp_angle <= -TWO_PI) begin
    temp_angle <= temp_angle + TWO_PI;
end else begin
    // Proceed to quadrant correction
    // ... (quadrant correction logic)
end
";
    assert_eq!(render(&ladder(5)), expected);
}
