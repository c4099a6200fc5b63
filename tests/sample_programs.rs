// Integration tests running the bundled sample programs

use fungetty::samples::{self, SAMPLES};
use fungetty::{interpret_with, InterpreterConfig};

fn run_sample(name: &str) -> String {
    let sample = samples::find(name).expect("Unknown sample");
    interpret_with(sample.source, &InterpreterConfig::seeded(0)).expect("Execution failed")
}

#[test]
fn test_countdown() {
    assert_eq!(run_sample("countdown"), "123456789");
}

#[test]
fn test_factorial() {
    assert_eq!(run_sample("factorial"), "40320");
}

#[test]
fn test_hello_world() {
    assert_eq!(run_sample("hello"), "Hello World!\n");
}

#[test]
fn test_quine_prints_itself() {
    let sample = samples::find("quine").unwrap();
    assert_eq!(run_sample("quine"), sample.source);
}

#[test]
fn test_sieve() {
    assert_eq!(run_sample("sieve"), "23571113171923293137");
}

#[test]
fn test_lookup_by_number() {
    assert_eq!(samples::find("1").unwrap().name, "countdown");
    assert_eq!(samples::find("5").unwrap().name, "sieve");
    assert!(samples::find("6").is_none());
    assert!(samples::find("0").is_none());
}

#[test]
fn test_samples_are_deterministic() {
    for sample in SAMPLES.iter() {
        let first = interpret_with(sample.source, &InterpreterConfig::default());
        let second = interpret_with(sample.source, &InterpreterConfig::default());
        assert_eq!(first, second, "{} differs between runs", sample.name);
    }
}
