// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and the build and validate subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pagebuilder")]
#[command(about = "Render a directory of Handlebars templates into HTML pages")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Render every template in the input directory (the default)
    Build {
        #[arg(short, long, help = "Directory containing templates")]
        input_dir: Option<PathBuf>,

        #[arg(short, long, help = "Directory rendered pages are written to")]
        output_dir: Option<PathBuf>,

        #[arg(long, help = "Template file extension, e.g. .hbs")]
        template_ext: Option<String>,

        #[arg(long, help = "Output file extension, e.g. .html")]
        output_ext: Option<String>,
    },

    /// Check template syntax without writing any pages
    Validate {
        #[arg(short, long, help = "Directory containing templates")]
        input_dir: Option<PathBuf>,

        #[arg(long, help = "Template file extension, e.g. .hbs")]
        template_ext: Option<String>,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The subcommand to run; a bare invocation builds with configured paths
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Build {
            input_dir: None,
            output_dir: None,
            template_ext: None,
            output_ext: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_invocation_defaults_to_build() {
        let args = Args::try_parse_from(["pagebuilder"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(
            args.command(),
            Commands::Build {
                input_dir: None,
                output_dir: None,
                template_ext: None,
                output_ext: None,
            }
        );
    }

    #[test]
    fn test_build_flags() {
        let args = Args::try_parse_from([
            "pagebuilder",
            "build",
            "-i",
            "pages",
            "--output-dir",
            "public",
            "--template-ext",
            ".jelly",
            "--verbose",
        ])
        .unwrap();

        assert!(args.verbose);
        assert_eq!(
            args.command(),
            Commands::Build {
                input_dir: Some(PathBuf::from("pages")),
                output_dir: Some(PathBuf::from("public")),
                template_ext: Some(".jelly".to_string()),
                output_ext: None,
            }
        );
    }

    #[test]
    fn test_validate_with_global_config() {
        let args =
            Args::try_parse_from(["pagebuilder", "validate", "--config", "site.yaml"]).unwrap();

        assert_eq!(args.config, Some(PathBuf::from("site.yaml")));
        assert!(matches!(args.command(), Commands::Validate { .. }));
    }
}
