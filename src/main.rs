use clap::Parser;
use coderemark::application::{
    add_remark, find_stale, import_remarks, init::init, list_remarks, remove_remarks,
    show_remark, ConfigService,
};
use coderemark::cli::{format_remark, format_remark_list, Cli, Commands};
use coderemark::domain::Blake3Hasher;
use coderemark::error::RemarkError;
use coderemark::infrastructure::{Project, ProjectDir};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn open_project() -> Result<Project, RemarkError> {
    Project::open(ProjectDir::discover()?)
}

fn run(cli: Cli) -> Result<(), RemarkError> {
    let hasher = Blake3Hasher;

    match cli.command {
        Commands::Init { path } => init(&path),
        Commands::Add { file, line, text } => {
            let mut project = open_project()?;
            let remark = add_remark(&mut project, &file, line, &text.join(" "), &hasher)?;
            project.close()?;
            println!("Saved remark on {}:{}", remark.file_name, remark.line_number);
            Ok(())
        }
        Commands::List { file } => {
            let project = open_project()?;
            let remarks = list_remarks(&project, file.as_deref(), &hasher)?;
            println!("{}", format_remark_list(&remarks).trim_end());
            Ok(())
        }
        Commands::Show { file, line } => {
            let project = open_project()?;
            let remark = show_remark(&project, &file, line, &hasher)?;
            print!("{}", format_remark(&remark));
            Ok(())
        }
        Commands::Rm { file, line } => {
            let mut project = open_project()?;
            let removed = remove_remarks(&mut project, &file, line, &hasher)?;
            project.close()?;
            println!("Removed {} remark(s)", removed);
            Ok(())
        }
        Commands::Import { state_file } => {
            let mut project = open_project()?;
            let count = import_remarks(&mut project, &state_file)?;
            project.close()?;
            println!("Imported {} remark(s)", count);
            Ok(())
        }
        Commands::Stale => {
            let project = open_project()?;
            let stale = find_stale(&project, &hasher)?;
            println!("{}", format_remark_list(&stale).trim_end());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(ProjectDir::discover()?);

            if list {
                let config = service.list()?;
                println!("parallel_threshold = {}", config.parallel_threshold);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    println!("{}", service.get(&k)?);
                    Ok(())
                }
            } else {
                println!("Usage: coderemark config [--list | <key> [<value>]]");
                println!("Valid keys: parallel_threshold, created");
                Ok(())
            }
        }
    }
}
