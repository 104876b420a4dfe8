//! ds2save CLI
//!
//! Command-line editor for Devil Survivor 2 RB saves.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ds2save::io::{FileSink, FileSource};
use ds2save::model::Snapshot;
use ds2save::schema::ds2_registry;
use ds2save::{format, Config, SaveError, Session};
use tracing_subscriber::{fmt, EnvFilter};

/// ds2save CLI
#[derive(Parser, Debug)]
#[command(name = "ds2save")]
#[command(about = "Inspect and edit Devil Survivor 2 Record Breaker saves")]
#[command(version)]
struct Args {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check whether a file is a DS2 save
    Info {
        /// Save file
        save: PathBuf,
    },

    /// List editable fields
    Fields,

    /// Read a field
    Get {
        /// Save file
        save: PathBuf,

        /// Field name (e.g. Macca, EXP)
        field: String,

        /// Party member index (0-3) for party fields
        #[arg(short, long)]
        member: Option<usize>,
    },

    /// Write a field and save the file
    Set {
        /// Save file
        save: PathBuf,

        /// Field name (e.g. Macca, EXP)
        field: String,

        /// New value; clamped into the field's range
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Party member index (0-3) for party fields
        #[arg(short, long)]
        member: Option<usize>,

        /// Write into this directory instead of replacing the input
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Do not keep a .bak copy of a replaced file
        #[arg(long)]
        no_backup: bool,

        /// Reject out-of-range or non-numeric values instead of clamping
        #[arg(long)]
        strict: bool,
    },

    /// Print every field
    Dump {
        /// Save file
        save: PathBuf,

        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let args = Args::parse();

    // Initialize tracing/logging
    let default_filter = if args.verbose { "debug" } else { "warn,ds2save=info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("ds2save v{}", ds2save::VERSION);

    if let Err(e) = run(args.command) {
        match &e {
            SaveError::InvalidFormat(_) => eprintln!("Invalid Devil Survivor 2 RB save"),
            other => eprintln!("error: {}", other),
        }
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> ds2save::Result<()> {
    match command {
        Commands::Info { save } => {
            let bytes = std::fs::read(&save)?;
            let verdict = if format::is_valid(&bytes) {
                "valid DS2 save"
            } else {
                "not a DS2 save"
            };
            println!("{}: {} bytes, {}", save.display(), bytes.len(), verdict);
        }

        Commands::Fields => {
            let registry = ds2_registry();
            for desc in registry.simple_fields() {
                println!(
                    "{:<6} offset 0x{:03X}  {} byte(s)  max {}",
                    desc.name,
                    desc.offset,
                    desc.width.bytes(),
                    desc.max
                );
            }
            for group in registry.groups() {
                println!(
                    "{} (members 0-{}, stride 0x{:X})",
                    group.name,
                    group.labels.len() - 1,
                    group.stride
                );
                for desc in &group.fields {
                    println!(
                        "  {:<6} offset 0x{:03X}  {} byte(s)  max {}",
                        desc.name,
                        desc.offset,
                        desc.width.bytes(),
                        desc.max
                    );
                }
            }
        }

        Commands::Get {
            save,
            field,
            member,
        } => {
            let mut session = Session::new();
            let model = session.open_from(&mut FileSource::new(&save))?;
            println!("{}", model.get(&field, member)?);
        }

        Commands::Set {
            save,
            field,
            value,
            member,
            output,
            no_backup,
            strict,
        } => {
            let mut builder = Config::builder().backup(!no_backup).strict_input(strict);
            if let Some(dir) = output {
                builder = builder.output_dir(dir);
            }
            let config = builder.build();

            let mut session = Session::new();
            let model = session.open_from(&mut FileSource::new(&save))?;

            let stored = if config.strict_input {
                model.set_strict(&field, &value, member)?
            } else {
                model.set_input(&field, &value, member)?
            };
            println!("{} = {}", field, stored);

            let mut sink = FileSink::from_config(&config, &save);
            session.save_as(&mut sink)?;
        }

        Commands::Dump { save, json } => {
            let mut session = Session::new();
            let snapshot = session.open_from(&mut FileSource::new(&save))?.snapshot()?;

            if json {
                let text = serde_json::to_string_pretty(&snapshot)
                    .map_err(|e| SaveError::Serialization(e.to_string()))?;
                println!("{}", text);
            } else {
                print_snapshot(&snapshot);
            }
        }
    }

    Ok(())
}

fn print_snapshot(snapshot: &Snapshot) {
    println!("{} ({} bytes)", snapshot.name, snapshot.size);
    for field in &snapshot.fields {
        println!("{:<6} {}", field.name, field.value);
    }
    for group in &snapshot.groups {
        println!("{}", group.name);
        for member in &group.members {
            let values: Vec<String> = member
                .fields
                .iter()
                .map(|f| format!("{}={}", f.name, f.value))
                .collect();
            println!("  [{}] {:<6} {}", member.index, member.label, values.join(" "));
        }
    }
}
