use clap::Parser;
use screwtape::Interpreter;
use screwtape::batch::{Batch, BatchConfig};
use screwtape::metrics::{high_order_entropy, instruction_histogram, max_loop_depth};
use screwtape::program::{INSTRUCTIONS, disassemble};

/// Prints "-==qqq".
const DEMO: &str =
    "+++++>++++++++[<+++++>-]<.>++++[<++++>-]<.>+++++<.>++++++++[<++++>-]<.>+++<.>+++++++<.";

#[derive(Parser)]
#[command(name = "screwtape", about = "Screwtape: a tape-based esoteric language interpreter")]
struct Cli {
    /// Program text to execute.
    program: Option<String>,

    /// Read the program from a file instead.
    #[arg(long, conflicts_with = "program")]
    file: Option<std::path::PathBuf>,

    /// Run the bundled demo program.
    #[arg(long, conflicts_with_all = ["program", "file"])]
    demo: bool,

    /// Max steps per execution (0 for no limit).
    #[arg(long, default_value_t = 0)]
    step_limit: usize,

    /// Print the final tape and cursor value to stderr.
    #[arg(long)]
    tape: bool,

    /// Print a listing of the program instead of running it.
    #[arg(long)]
    disassemble: bool,

    /// Print instruction statistics to stderr.
    #[arg(long)]
    stats: bool,

    /// Run in benchmark mode: execute a batch of random programs.
    #[arg(long)]
    benchmark: bool,

    /// Random seed for benchmark programs.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of benchmark programs.
    #[arg(long, default_value_t = 1 << 12)]
    programs: usize,

    /// Characters per benchmark program.
    #[arg(long, default_value_t = 64)]
    program_size: usize,
}

fn main() {
    let cli = Cli::parse();

    if cli.benchmark {
        let step_limit = if cli.step_limit == 0 { 1 << 13 } else { cli.step_limit };
        let config = BatchConfig {
            program_count: cli.programs,
            program_size: cli.program_size,
            step_limit,
        };
        run_benchmark(config, cli.seed);
        return;
    }

    let source = match load_program(&cli) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if cli.stats {
        print_stats(&source);
    }

    if cli.disassemble {
        match disassemble(&source) {
            Ok(listing) => print!("{listing}"),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let step_limit = if cli.step_limit == 0 { usize::MAX } else { cli.step_limit };
    let mut interp = Interpreter::new();
    let run = match interp.run(&source, step_limit) {
        Ok(run) => run,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    println!("{}", run.output);

    if !run.halted {
        eprintln!("stopped after {} steps (step limit reached)", run.steps);
    }
    if cli.tape {
        eprintln!("tape:   {:?}", interp.tape_data());
        eprintln!("cursor: {} (value {})", interp.tape().cursor(), interp.tape_pointer_value());
    }
}

fn load_program(cli: &Cli) -> Result<String, String> {
    if cli.demo {
        return Ok(DEMO.to_string());
    }
    if let Some(ref path) = cli.file {
        return std::fs::read_to_string(path)
            .map_err(|e| format!("Cannot read {}: {e}", path.display()));
    }
    cli.program
        .clone()
        .ok_or_else(|| "No program given. Pass program text, --file, or --demo".to_string())
}

fn print_stats(source: &str) {
    let hist = instruction_histogram(source);
    eprintln!("Program statistics:");
    eprintln!("  Characters:        {}", source.chars().count());
    for (c, count) in INSTRUCTIONS.iter().zip(hist) {
        eprintln!("  '{c}':               {count}");
    }
    eprintln!("  Max loop depth:    {}", max_loop_depth(source));
}

fn run_benchmark(config: BatchConfig, seed: u64) {
    let program_count = config.program_count;
    let program_size = config.program_size;

    let start = std::time::Instant::now();
    let batch = Batch::new(config, seed);
    let generated = start.elapsed();
    let report = batch.run();
    let elapsed = start.elapsed();

    let steps_per_sec = per_second(report.total_steps, (elapsed - generated).as_secs_f64());
    let hoe = high_order_entropy(report.output.as_bytes());

    eprintln!("Benchmark results:");
    eprintln!("  Programs:          {program_count}");
    eprintln!("  Program size:      {program_size}");
    eprintln!("  Halted:            {}", report.halted);
    eprintln!("  Failed:            {}", report.failed);
    eprintln!("  Total steps:       {}", report.total_steps);
    eprintln!("  Output chars:      {}", report.output_chars);
    eprintln!("  Output HOE:        {hoe:.6}");
    eprintln!("  Generation:        {generated:.2?}");
    eprintln!("  Elapsed:           {elapsed:.2?}");
    eprintln!("  Steps/sec:         {steps_per_sec}");
}

/// Format `count / secs`, or "n/a" when no measurable time passed.
fn per_second(count: u64, secs: f64) -> String {
    if secs > 0.0 {
        format!("{:.0}", count as f64 / secs)
    } else {
        "n/a".to_string()
    }
}
