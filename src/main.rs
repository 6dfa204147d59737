use anyhow::Result;
use clap::Parser;
use cronista::cli::{Cli, OutputFormat, ReportMode};
use cronista::combine;
use cronista::json_output::JsonReport;
use cronista::recorder::Profiler;
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Innermost demo phase, annotated with the counter it was handed
fn phase_d(profiler: &mut Profiler, pause: Duration, len: usize) -> Result<()> {
    profiler.start_with_info("phase_d", &format!("len={}", len));
    thread::sleep(pause);
    profiler.end()?;
    Ok(())
}

fn phase_c(profiler: &mut Profiler, pause: Duration, counter: &mut usize) -> Result<()> {
    profiler.start("phase_c");
    phase_d(profiler, pause, *counter)?;
    *counter += 1;
    thread::sleep(pause);
    profiler.end()?;
    Ok(())
}

fn phase_b(profiler: &mut Profiler, pause: Duration, counter: &mut usize) -> Result<()> {
    profiler.start_with_info("phase_b", "some other info");
    phase_c(profiler, pause, counter)?;
    thread::sleep(pause);
    profiler.end()?;
    Ok(())
}

fn phase_a(profiler: &mut Profiler, pause: Duration, counter: &mut usize) -> Result<()> {
    profiler.start("phase_a");
    phase_b(profiler, pause, counter)?;
    phase_b(profiler, pause, counter)?;
    phase_c(profiler, pause, counter)?;
    profiler.end()?;
    Ok(())
}

/// Run the synthetic nested workload: repeated siblings at several levels so
/// the combined view has something to merge, plus a second top-level block
fn run_demo(profiler: &mut Profiler, pause: Duration) -> Result<()> {
    let mut counter = 0;
    phase_a(profiler, pause, &mut counter)?;
    phase_b(profiler, pause, &mut counter)?;
    Ok(())
}

fn print_text_reports(profiler: &Profiler, mode: ReportMode) -> Result<()> {
    match mode {
        ReportMode::Sorted => profiler.print_frame_sorted()?,
        ReportMode::All => profiler.print_all()?,
        ReportMode::Both => {
            profiler.print_frame_sorted()?;
            println!("-------------------\n");
            profiler.print_all()?;
        }
    }
    Ok(())
}

fn print_json_report(profiler: &Profiler, mode: ReportMode) -> Result<()> {
    let regions = profiler.top_level_regions();
    let mut report = JsonReport::from_regions(regions);
    if mode != ReportMode::All {
        let combined = combine::combine_forest(regions);
        report = report.with_combined(&combined);
    }
    println!("{}", report.to_string_pretty()?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let mut profiler = Profiler::new();
    run_demo(&mut profiler, Duration::from_millis(cli.sleep_ms))?;

    match cli.format {
        OutputFormat::Text => print_text_reports(&profiler, cli.report)?,
        OutputFormat::Json => print_json_report(&profiler, cli.report)?,
    }

    profiler.reset();
    Ok(())
}
