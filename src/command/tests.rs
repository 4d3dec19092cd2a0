//! Tests related to command selection and execution

use quickcheck::TestResult;

use crate::error::Error;
use crate::params::{OverflowPolicy, Params};

use super::{Command, DEMO_CONFIGS};


fn run(command: &Command) -> String {
    let mut out = Vec::new();
    command.run(&mut out).expect("Failed to run command");
    String::from_utf8(out).expect("Output is not UTF-8")
}


#[quickcheck]
fn three_numbers_generate(angle_width: u32, iterations: u32, data_width: u32) -> bool {
    let args = [angle_width.to_string(), iterations.to_string(), data_width.to_string()];
    let expected = Command::Generate(Params::new(angle_width, iterations, data_width));
    Command::from_args(&args).map(|c| c == expected).unwrap_or(false)
}


#[quickcheck]
fn other_counts_demo(args: Vec<u8>) -> TestResult {
    if args.len() == 3 || args.len() == 2 {
        return TestResult::discard()
    }
    let args: Vec<_> = args.iter().map(ToString::to_string).collect();
    TestResult::from_bool(matches!(Command::from_args(&args), Ok(Command::DemoSweep)))
}


#[test]
fn module_keyword() {
    assert_eq!(Command::from_args(&["module", "24"]).ok(), Some(Command::ModuleTemplate(24)));
    assert_eq!(Command::from_args(&["32", "15"]).ok(), Some(Command::DemoSweep));
    assert_eq!(Command::from_args::<&str>(&[]).ok(), Some(Command::DemoSweep));
}


#[test]
fn conversion_failures() {
    assert!(matches!(Command::from_args(&["32", "fifteen", "16"]), Err(Error::Parse(_))));
    assert!(matches!(Command::from_args(&["32", "-15", "16"]), Err(Error::Parse(_))));
    assert!(matches!(Command::from_args(&["32", "15", "16.5"]), Err(Error::Parse(_))));
    assert!(matches!(Command::from_args(&["module", "x"]), Err(Error::Parse(_))));
}


#[test]
fn generate() {
    let out = run(&Command::Generate(Params::new(32, 15, 16)));
    assert!(out.starts_with("// Generated CORDIC constants for ANGLE_WIDTH=32\n"));
    assert!(out.contains("localparam signed [ANGLE_WIDTH-1:0] PI = 32'h6487ED51;"));
}


#[test]
fn generate_out_of_range() {
    let mut out = Vec::new();
    let res = Command::Generate(Params::new(5, 4, 8)).run(&mut out);
    assert!(matches!(res, Err(Error::OutOfRange{..})));
}


#[test]
fn demo_sweep() {
    let out = run(&Command::DemoSweep);
    assert!(out.starts_with("Usage: cordic-constgen [--permissive] <angle_width> <iterations> <width>\n"));
    assert_eq!(out.matches("=== Configuration: ").count(), DEMO_CONFIGS.len());
    assert_eq!(out.matches(&"=".repeat(80)).count(), DEMO_CONFIGS.len());
    assert!(out.contains("=== Configuration: 48-bit angles, 20 iterations, 24-bit data ===\n"));
    assert!(out.contains("localparam signed [WIDTH-1:0] CORDIC_GAIN = 24'h26DD3B;"));
}


#[test]
fn demo_sweep_idempotent() {
    assert_eq!(run(&Command::DemoSweep), run(&Command::DemoSweep));
}


#[test]
fn module_template() {
    let out = run(&Command::ModuleTemplate(32));
    assert!(out.contains("module CORDIC_32bit #("));
    assert!(out.ends_with("endmodule\n"));
}


#[quickcheck]
fn permissive_flag_anywhere(position: u8) -> bool {
    let mut args = vec!["4", "12", "16"];
    args.insert(usize::from(position) % 4, "--permissive");
    let expected = Params::new(4, 12, 16).with_overflow(OverflowPolicy::Permissive);
    Command::from_args(&args).map(|c| c == Command::Generate(expected)).unwrap_or(false)
}


#[test]
fn narrow_angles_permissive() {
    let command = Command::from_args(&["--permissive", "4", "12", "16"]).expect("Failed to parse arguments");
    let out = run(&command);
    assert!(out.contains("// Fractional bits: 5, Angle scale: 32"));
    assert!(out.contains("localparam signed [ANGLE_WIDTH-1:0] PI = 4'h64;"));
    assert!(out.contains("localparam signed [ANGLE_WIDTH-1:0] TWO_PI = 4'hC9;"));
    assert!(out.contains("localparam MAX_REDUCTION_POWER = 0;"));

    let mut out = Vec::new();
    let strict = Command::from_args(&["4", "12", "16"]).expect("Failed to parse arguments");
    assert!(matches!(strict.run(&mut out), Err(Error::OutOfRange{..})));
}


#[test]
fn permissive_flag_not_counted() {
    assert_eq!(Command::from_args(&["--permissive"]).ok(), Some(Command::DemoSweep));
    assert_eq!(Command::from_args(&["module", "--permissive", "8"]).ok(), Some(Command::ModuleTemplate(8)));
}
