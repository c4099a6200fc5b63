// fungetty: Time-Travel Befunge Interpreter with Grid Visualization

use std::io;
use std::process;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use fungetty::interpreter::debugger::Debugger;
use fungetty::samples::{self, SAMPLES};
use fungetty::ui::App;
use fungetty::{Interpreter, InterpreterConfig};

/// What to run and how
struct Options {
    config: InterpreterConfig,
    headless: bool,
    run_all_samples: bool,
    /// (display name, program text)
    program: Option<(String, String)>,
}

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [--seed N] [--run] <sample>", program_name);
    eprintln!("       {} [--seed N] [--run] -e <program>", program_name);
    eprintln!("       {} --samples", program_name);
    eprintln!();
    eprintln!("  <sample>   sample number (1-{}) or name", SAMPLES.len());
    eprintln!("  -e         run the given program text");
    eprintln!("  --run      print the output instead of opening the debugger");
    eprintln!("  --samples  run every sample and print its output");
    eprintln!("  --seed N   seed for the `?` instruction");
    eprintln!();
    eprintln!("Samples:");
    for (i, sample) in SAMPLES.iter().enumerate() {
        eprintln!("  {}  {}", i + 1, sample.name);
    }
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        config: InterpreterConfig::default(),
        headless: false,
        run_all_samples: false,
        program: None,
    };

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--run" => options.headless = true,
            "--samples" => options.run_all_samples = true,
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid seed '{}'", value))?;
                options.config.seed = Some(seed);
            }
            "-e" => {
                let text = iter.next().ok_or("-e needs a program")?;
                options.program = Some(("inline program".to_string(), text.clone()));
            }
            key => {
                let sample =
                    samples::find(key).ok_or_else(|| format!("Unknown sample '{}'", key))?;
                options.program = Some((sample.name.to_string(), sample.source.to_string()));
            }
        }
    }

    Ok(options)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("fungetty");

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(program_name);
            process::exit(1);
        }
    };

    if options.run_all_samples {
        let mut failed = false;
        for sample in SAMPLES.iter() {
            match fungetty::interpret_with(sample.source, &options.config) {
                Ok(output) => println!("{}", output),
                Err(e) => {
                    eprintln!("{}: runtime error: {}", sample.name, e);
                    failed = true;
                }
            }
        }
        if failed {
            process::exit(1);
        }
        return Ok(());
    }

    let Some((name, source)) = options.program else {
        eprintln!("Error: No program selected");
        eprintln!();
        print_usage(program_name);
        process::exit(1);
    };

    if options.headless {
        match fungetty::interpret_with(&source, &options.config) {
            Ok(output) => {
                print!("{}", output);
                return Ok(());
            }
            Err(e) => {
                eprintln!("Runtime error: {}", e);
                process::exit(1);
            }
        }
    }

    eprintln!("Loading {}...", name);
    let interpreter = Interpreter::new(&source, &options.config);
    let debugger = match Debugger::new(interpreter, options.config.snapshot_memory_limit) {
        Ok(debugger) => debugger,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(debugger, &name);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("fungetty")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_sample_by_number_and_name() {
        let opts = parse_args(&args(&["--run", "3"])).unwrap();
        assert!(opts.headless);
        assert_eq!(opts.program.unwrap().0, "hello");

        let opts = parse_args(&args(&["factorial", "--seed", "9"])).unwrap();
        assert_eq!(opts.config.seed, Some(9));
        assert_eq!(opts.program.unwrap().0, "factorial");
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&["--seed"])).is_err());
        assert!(parse_args(&args(&["--seed", "x"])).is_err());
        assert!(parse_args(&args(&["nope"])).is_err());
        assert!(parse_args(&args(&["0"])).is_err());
    }
}
