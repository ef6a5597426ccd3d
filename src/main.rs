use anyhow::Result;
use clap::Parser;
use flowgen::cli::{parse_policy, Cli, Commands, GenerateArgs};
use flowgen::commands::{self, GenerateConfig, ListConfig};
use std::path::PathBuf;

fn main() -> Result<()> {
    let cli = Cli::parse();
    flowgen::observability::init_tracing(cli.verbose);

    match cli.command.unwrap_or_else(|| Commands::Generate(default_generate_args())) {
        Commands::Generate(args) => handle_generate_command(args)?,
        Commands::List {
            dir,
            config,
            strict,
            json,
        } => {
            let options = ListConfig {
                dir,
                config_path: config,
                policy: parse_policy(strict),
            };
            let functions = commands::list_functions(&options)?;
            commands::list::print_functions(&functions, json);
        }
        Commands::Init { config, force } => {
            commands::init::init_config(&config, force)?;
            println!("Created {}", config.display());
        }
    }

    Ok(())
}

fn default_generate_args() -> GenerateArgs {
    GenerateArgs {
        config: PathBuf::from(flowgen::config::DEFAULT_CONFIG_FILE),
        module_dir: std::env::var_os("FLOWGEN_MODULE_DIR").map(PathBuf::from),
        strict: false,
    }
}

fn handle_generate_command(args: GenerateArgs) -> Result<()> {
    let module_dir = match args.module_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let options = GenerateConfig {
        config_path: args.config,
        module_dir,
        policy: parse_policy(args.strict),
    };

    let outcome = commands::process_functions(&options).inspect_err(|e| {
        tracing::error!(category = e.category(), "{}", e);
    })?;

    println!(
        "Generated {} with {} handler(s) from {}",
        outcome.output.display(),
        outcome.registry.len(),
        outcome.import_path
    );
    Ok(())
}
