//! Moon simulation driven from input files on disk.

use std::fs;
use std::path::PathBuf;

use moonfuel_data::read_input;
use moonfuel_moons::test_utils::*;
use moonfuel_moons::{Axis, MoonError, MoonSystem, Vec3};

fn make_test_dir(suffix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "moonfuel_moons_it_{suffix}_{}",
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn load(text: &str, suffix: &str) -> MoonSystem {
    let dir = make_test_dir(suffix);
    let path = dir.join("input_day12.txt");
    fs::write(&path, text).unwrap();
    let system = read_input(&path).unwrap().parse().unwrap();
    let _ = fs::remove_dir_all(&dir);
    system
}

#[test]
fn first_sample_from_file() {
    let mut system = load(FIRST_SAMPLE, "first");
    let period = system.period(None).unwrap();
    system.simulate(10);
    assert_eq!(system.total_energy(), FIRST_SAMPLE_ENERGY_AFTER_10);
    assert_eq!(period.steps, FIRST_SAMPLE_PERIOD);
}

#[test]
fn second_sample_from_file() {
    let mut system = load(SECOND_SAMPLE, "second");
    let period = system.period(None).unwrap();
    system.simulate(100);
    assert_eq!(system.total_energy(), SECOND_SAMPLE_ENERGY_AFTER_100);
    assert_eq!(period.steps, SECOND_SAMPLE_PERIOD);
}

#[test]
fn simulating_one_period_restores_the_start() {
    let initial = first_sample();
    let mut system = initial.clone();
    system.simulate(FIRST_SAMPLE_PERIOD);
    assert_eq!(system.moons(), initial.moons());
    assert_eq!(system.tick(), FIRST_SAMPLE_PERIOD);
}

#[test]
fn period_is_relative_to_current_state() {
    // A periodic orbit has the same period from any point on it.
    let mut system = first_sample();
    system.simulate(17);
    assert_eq!(system.period(None).unwrap().steps, FIRST_SAMPLE_PERIOD);
}

#[test]
fn axis_periods_combine() {
    let report = second_sample().period(None).unwrap();
    for axis in Axis::ALL {
        let p = report.axis(axis);
        assert!(p > 0);
        assert_eq!(report.steps % p, 0);
    }
}

#[test]
fn more_than_four_moons() {
    let text = "\
<x=0, y=0, z=5>
<x=2, y=1, z=5>
<x=4, y=2, z=5>
<x=6, y=3, z=5>
<x=8, y=4, z=5>
";
    let mut system: MoonSystem = text.parse().unwrap();
    assert_eq!(system.len(), 5);
    let start = system.clone();
    let period = start.period(Some(1000)).unwrap();
    assert_eq!(period.axes, [6, 4, 1]);
    assert_eq!(period.steps, 12);

    system.simulate(5);
    let momentum = system
        .moons()
        .iter()
        .fold(Vec3::ZERO, |acc, m| acc + m.velocity);
    assert_eq!(momentum, Vec3::ZERO);
    system.simulate(7);
    assert_eq!(system.moons(), start.moons());
}

#[test]
fn parse_error_reports_line() {
    let err = "<x=1, y=2, z=3>\n<x=1, y=2 z=3>\n"
        .parse::<MoonSystem>()
        .unwrap_err();
    match err {
        MoonError::Parse { line, .. } => assert_eq!(line, 2),
        other => panic!("expected Parse, got: {other:?}"),
    }
}

#[test]
fn energy_report_serializes() {
    let mut system = first_sample();
    system.simulate(10);
    let value = serde_json::to_value(system.energy()).unwrap();
    assert_eq!(value["total"], 179);
    assert_eq!(value["moons"].as_array().unwrap().len(), 4);
}
