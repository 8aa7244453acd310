use std::io;
use std::process::ExitCode;

use colored::Colorize;
use falsi::driver::{self, cli};

fn main() -> ExitCode {
    let args = match cli::parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{} {e}", "Error:".red().bold());
            eprintln!("{}", cli::USAGE);
            return ExitCode::FAILURE;
        }
    };
    if args.help {
        println!("{}", cli::USAGE);
        return ExitCode::SUCCESS;
    }

    init_logging(args.verbose);

    println!("{}", "Regula Falsi Root Finder".cyan().bold());
    println!("{}", "-".repeat(24).cyan());

    let cfg = {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        match cli::resolve(args, &mut input, &mut output) {
            Ok(cfg) => cfg,
            Err(e) => return fail(&e),
        }
    };

    let solution = match driver::solve(&cfg) {
        Ok(s) => s,
        Err(e) => return fail(&e),
    };

    println!("\n{}", "Result:".green().bold());
    println!("{}", solution.summary());
    println!("\n{}", "Iteration table:".green().bold());
    print!("{}", solution.table());

    if let Some(plot_cfg) = cfg.plot() {
        match driver::plot(&solution, plot_cfg) {
            Ok(path) => println!("\nPlot saved to {}", path.display()),
            Err(e) => return fail(&e),
        }
    }

    ExitCode::SUCCESS
}

fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn fail(err: &dyn std::error::Error) -> ExitCode {
    eprintln!("{} {err}", "Error:".red().bold());
    ExitCode::FAILURE
}
