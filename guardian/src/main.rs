// guardian/src/main.rs

use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging (Tracing)
    // RUST_LOG=debug guardian run ... for the details
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        // --- USE CASE: FULL MONITORING RUN ---
        Commands::Run {
            project_dir,
            input,
            sample,
        } => {
            let start = std::time::Instant::now();
            match commands::run::execute(project_dir, input, sample).await {
                Ok(true) => {
                    println!("\n✨ SUCCESS! Run finished in {:.2?}", start.elapsed());
                }
                Ok(false) => {
                    // Exit with error code for CI/CD
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("\n💥 CRITICAL PIPELINE ERROR: {}", e);
                    std::process::exit(1);
                }
            }
        }

        // --- USE CASE: CI HEALTH CHECK ---
        Commands::Check {
            project_dir,
            input,
            sample,
            threshold,
        } => match commands::check::execute(project_dir, input, sample, threshold).await {
            Ok(true) => {}
            Ok(false) => std::process::exit(1),
            Err(e) => {
                eprintln!("❌ Check failed: {}", e);
                std::process::exit(1);
            }
        },

        // --- USE CASE: GENERATED REGRESSION TESTS ONLY ---
        Commands::GenTests {
            project_dir,
            input,
            sample,
            output_dir,
        } => {
            if let Err(e) = commands::gen_tests::execute(project_dir, input, sample, output_dir).await
            {
                eprintln!("❌ Test generation failed: {}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
