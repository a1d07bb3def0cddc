//! Command-line argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::charset::Charset;
use crate::config::Settings;

/// File, folder, resource and YAML helper.
#[derive(Parser, Debug)]
#[command(
    name = "filekit",
    version,
    about = "Inspect and edit files, folders, resources and YAML documents",
    long_about = "A small front end over the filekit managers.\n\n\
                  Filesystem commands report failure through the exit code; \
                  YAML commands print the normalized block-style document."
)]
pub struct Args {
    /// Path to settings file (defaults to the per-user config directory).
    #[arg(short, long, env = "FILEKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Charset for text commands (utf-8, utf-16be, utf-16le, iso-8859-1, us-ascii).
    #[arg(long)]
    pub charset: Option<Charset>,

    /// Extra resource root, searched after the configured ones.
    /// Can be repeated.
    #[arg(short, long = "root")]
    pub roots: Vec<PathBuf>,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the entries of a directory.
    List { dir: PathBuf },

    /// Create a directory and its missing parents.
    Mkdir { dir: PathBuf },

    /// Create a new, empty file. Fails if it already exists.
    Touch { file: PathBuf },

    /// Delete a file. Fails if it does not exist.
    Rm { file: PathBuf },

    /// Print a file.
    Cat { file: PathBuf },

    /// Append text to an existing file.
    Append { file: PathBuf, text: String },

    /// Replace a file's contents with TEXT, or with stdin when TEXT is omitted.
    Put { file: PathBuf, text: Option<String> },

    /// Copy SOURCE over DEST.
    Cp { source: PathBuf, dest: PathBuf },

    /// Resolve a resource through the search path and print it.
    Resource {
        /// Resource file name.
        name: String,

        /// Resource directory, relative to a root (empty means the root itself).
        #[arg(short, long, default_value = "")]
        dir: String,
    },

    /// Load a YAML document and print it in block style.
    Yaml {
        /// YAML file, or a resource name with --resource.
        target: String,

        /// Treat TARGET as a resource name instead of a path.
        #[arg(long)]
        resource: bool,

        /// Resource directory used with --resource.
        #[arg(short, long, default_value = "")]
        dir: String,
    },
}

impl Args {
    /// Merge CLI arguments into loaded settings, overriding where specified.
    pub fn merge_into_settings(&self, settings: &mut Settings) {
        if let Some(charset) = self.charset {
            settings.io.charset = charset;
        }

        settings
            .resources
            .roots
            .extend(self.roots.iter().cloned());
    }
}
