use std::process::ExitCode;

use dimload::{
    config::Config,
    service::orchestrator::{run_full_load, LoadPlan},
    startup,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match startup::init_logging(&config.log_file) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let plan = LoadPlan::from(&config);

    match run_full_load(&config.database_url, &plan).await {
        Ok(_) => {
            println!(
                "\nLoad completed. See {} for details.",
                config.log_file.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("\nLoad failed: {}", e);
            eprintln!("See {} for details.", config.log_file.display());
            ExitCode::FAILURE
        }
    }
}
