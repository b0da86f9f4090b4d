use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use rondo::config::Config;
use rondo::planner::{leveler, parser, Plan};
use rondo::{rlog, rlog_error, Result};

/// Rondo - dependency-aware execution planner
#[derive(Parser, Debug)]
#[command(name = "rondo")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RONDO_DEBUG=1     Enable debug logging (alternative to --debug)")]
pub struct Cli {
    /// Enable debug logging (writes to ~/.rondo/rondo.log)
    #[arg(short = 'd', long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Planning commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Build the full execution plan for an input file
    Plan {
        /// Path to the task description file
        input: PathBuf,

        /// Override the executor capacity from the input header
        #[arg(long, short = 'e')]
        executors: Option<usize>,

        /// Print the plan as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Parse and level an input file without assigning executors
    Check {
        /// Path to the task description file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    rondo::log::init_with_debug(cli.debug);

    let result = match cli.command {
        Command::Plan {
            input,
            executors,
            json,
        } => run_plan(input, executors, json),
        Command::Check { input } => run_check(input),
    };

    if let Err(ref e) = result {
        rlog_error!("Run failed: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    result
}

/// Build a plan from the input file and print it.
///
/// Executor capacity precedence: the `--executors` flag, then the config
/// file's `default_executors`, then the input header's M value.
fn run_plan(input: PathBuf, executors: Option<usize>, json: bool) -> Result<()> {
    rlog!(
        "Plan command: input={}, executors={:?}, json={}",
        input.display(),
        executors,
        json
    );

    let text = fs::read_to_string(&input)?;
    let config = Config::load()?;
    let executors = executors.or(config.default_executors);

    let plan = Plan::build_with_executors(&text, executors)?;
    rlog!(
        "Planned {} task(s) onto {} executor(s) over {} iteration(s)",
        plan.task_count(),
        plan.executors,
        plan.iterations()
    );

    if json {
        print_plan_json(&plan)?;
    } else {
        print_plan_table(&plan);
    }

    Ok(())
}

/// Parse and level the input file, reporting validity without scheduling.
fn run_check(input: PathBuf) -> Result<()> {
    rlog!("Check command: input={}", input.display());

    let text = fs::read_to_string(&input)?;
    let mut parsed = parser::parse(&text)?;
    leveler::assign_priorities(&mut parsed.graph)?;

    println!("Input is plannable.");
    println!("  Tasks:        {}", parsed.graph.task_count());
    println!("  Dependencies: {}", parsed.graph.dependency_count());
    println!("  Declared (N): {}", parsed.declared_count);
    println!("  Executors (M): {}", parsed.executors);

    Ok(())
}

/// Print the plan as an aligned table, in priority order.
fn print_plan_table(plan: &Plan) {
    println!(
        "Plan: {} task(s), {} executor(s), {} iteration(s)",
        plan.task_count(),
        plan.executors,
        plan.iterations()
    );

    if plan.task_count() == 0 {
        return;
    }

    let name_width = plan
        .tasks()
        .iter()
        .map(|task| task.name.len())
        .max()
        .unwrap_or(4)
        .max("TASK".len());

    println!();
    println!(
        "  {:<width$}  {:>8}  {:>9}  {:>8}",
        "TASK",
        "PRIORITY",
        "ITERATION",
        "EXECUTOR",
        width = name_width
    );
    for task in plan.tasks() {
        // Every task is scheduled once Plan::build succeeds.
        let (iteration, executor) = task
            .slot
            .map(|slot| (slot.iteration, slot.executor))
            .unwrap_or((0, 0));
        println!(
            "  {:<width$}  {:>8}  {:>9}  {:>8}",
            task.name,
            task.priority,
            iteration,
            executor,
            width = name_width
        );
    }
}

/// Print the plan as JSON, in priority order.
fn print_plan_json(plan: &Plan) -> Result<()> {
    let output = serde_json::json!({
        "declared_tasks": plan.declared_count,
        "executors": plan.executors,
        "iterations": plan.iterations(),
        "tasks": plan.tasks(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
