//! filekit - CLI entry point.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use filekit::{
    cli::{Args, Command},
    config::{validate_settings, Settings},
    error::{exit_codes, Error, Result},
    fs::{FileManager, FolderManager, SearchPath},
    output::{print_document, print_error, print_info, print_listing, print_success, print_warning},
    yaml::YamlManager,
};

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::from(exit_codes::SUCCESS as u8),
        Ok(false) => ExitCode::from(exit_codes::OPERATION_FAILED as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::TomlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::ResourceNotFound(_) | Error::InvalidLocation(_) | Error::UrlParse(_) => {
                    ExitCode::from(exit_codes::RESOURCE_ERROR as u8)
                }
                Error::Format(_) => ExitCode::from(exit_codes::FORMAT_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

/// Run the selected command. `Ok(false)` means a filesystem operation failed.
fn run() -> Result<bool> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    // Load settings
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => match Settings::default_path() {
            Some(path) => Settings::load_or_default(&path)?,
            None => {
                print_warning("No per-user config directory, using default settings");
                Settings::default()
            }
        },
    };

    args.merge_into_settings(&mut settings);
    validate_settings(&settings)?;

    let charset = settings.io.charset;

    let ok = match args.command {
        Command::List { dir } => {
            let folder = FolderManager::new(&dir);
            print_info(&format!("Listing {}", folder));
            print_listing(&folder.list());
            true
        }
        Command::Mkdir { dir } => {
            let folder = FolderManager::new(&dir);
            report(folder.create_dir(), &format!("Directory ready: {}", folder))
        }
        Command::Touch { file } => {
            let file = FileManager::from_path(&file);
            report(file.create_file(), &format!("Created {}", file))
        }
        Command::Rm { file } => {
            let file = FileManager::from_path(&file);
            report(file.delete_file(), &format!("Deleted {}", file))
        }
        Command::Cat { file } => {
            let file = FileManager::from_path(&file);
            if !file.exists() {
                print_warning(&format!("{} does not exist", file));
                false
            } else {
                print_document(&file.read().text(charset));
                true
            }
        }
        Command::Append { file, text } => {
            let file = FileManager::from_path(&file);
            report(
                file.write().text(&text, charset),
                &format!("Appended {} bytes to {}", text.len(), file),
            )
        }
        Command::Put { file, text } => {
            let file = FileManager::from_path(&file);
            let copied = match text {
                Some(text) => file.copy().text(&text, charset),
                None => file.copy().reader(io::stdin().lock()),
            };
            report(copied, &format!("Wrote {}", file))
        }
        Command::Cp { source, dest } => {
            let source = FileManager::from_path(&source);
            let dest = FileManager::from_path(&dest);
            report(
                dest.copy().file(&source),
                &format!("Copied {} to {}", source, dest),
            )
        }
        Command::Resource { name, dir } => {
            let loader = SearchPath::from_settings(&settings);
            let file = FileManager::from_resource(&loader, &dir, &name)?;
            print_info(&format!("Reading {}", file));
            print_document(&file.read().text(charset));
            true
        }
        Command::Yaml {
            target,
            resource,
            dir,
        } => {
            let document = if resource {
                YamlManager::<serde_yaml::Value>::with_loader(SearchPath::from_settings(&settings))
                    .load_resource(&dir, &target)?
            } else {
                YamlManager::<serde_yaml::Value>::new()
                    .load_file(&FileManager::from_path(&target))?
            };
            print_document(&YamlManager::new().dump(&document)?);
            true
        }
    };

    Ok(ok)
}

/// Turn a boolean outcome into console feedback.
fn report(ok: bool, success: &str) -> bool {
    if ok {
        print_success(success);
    } else {
        print_error("Operation failed");
    }
    ok
}
