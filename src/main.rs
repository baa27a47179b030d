use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use kira_trialsdash::cli::{Cli, Commands};
use kira_trialsdash::ctx::Ctx;
use kira_trialsdash::dashboard::ViewDefaults;
use kira_trialsdash::io;
use kira_trialsdash::pipeline::Pipeline;
use kira_trialsdash::pipeline::stage0_scaffold::Stage0Scaffold;
use kira_trialsdash::pipeline::stage1_input::Stage1Input;
use kira_trialsdash::pipeline::stage2_views::Stage2Views;
use kira_trialsdash::pipeline::stage3_events::Stage3Events;
use kira_trialsdash::pipeline::stage4_output::Stage4Output;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            let mut ctx = Ctx::new(
                args.input.clone(),
                args.out.clone(),
                args.view_defaults(),
                args.json,
                args.tsv,
                env!("CARGO_PKG_VERSION"),
            );
            ctx.events_path = args.events.clone();

            let pipeline = Pipeline::new(vec![
                Box::new(Stage0Scaffold::new()),
                Box::new(Stage1Input::new()),
                Box::new(Stage2Views::new()),
                Box::new(Stage3Events::new()),
                Box::new(Stage4Output::new()),
            ]);
            pipeline.run(&mut ctx)?;

            print_summary(&ctx)?;
        }
        Commands::Validate(args) => {
            let mut ctx = Ctx::new(
                args.input,
                PathBuf::from("."),
                ViewDefaults::default(),
                false,
                false,
                env!("CARGO_PKG_VERSION"),
            );

            let pipeline = Pipeline::new(vec![Box::new(Stage1Input::new())]);
            pipeline.run(&mut ctx)?;

            print_validate_summary(&ctx)?;
        }
    }

    Ok(())
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    print_warnings(ctx);
    Ok(())
}

fn print_validate_summary(ctx: &Ctx) -> Result<()> {
    let dataset = ctx.dataset()?;
    println!("kira-trialsdash validate ok");
    println!("trials: {}", dataset.len());
    println!("dropped: {}", dataset.dropped());
    println!("phases: {}", dataset.phases().join(", "));
    println!("statuses: {}", dataset.statuses().join(", "));
    print_warnings(ctx);
    Ok(())
}

fn print_warnings(ctx: &Ctx) {
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
}
