use anyhow::{Context, anyhow};
use clap::{Parser, ValueEnum};
use modeline::config::{RcConfig, RcLoader};
use modeline::{Document, IndentType, LifecycleEvent, logging};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Event {
    Open,
    Save,
}

impl From<Event> for LifecycleEvent {
    fn from(event: Event) -> Self {
        match event {
            Event::Open => LifecycleEvent::DocumentOpen,
            Event::Save => LifecycleEvent::DocumentSave,
        }
    }
}

/// Apply vim/geany modelines to documents and report the resulting settings
#[derive(Parser, Debug)]
#[command(name = "modeline", version)]
struct Args {
    /// Host event to simulate; opening also reloads with the modeline's encoding
    #[arg(long, value_enum, default_value_t = Event::Open)]
    event: Event,

    /// Read defaults from this rc file instead of searching for .modelinerc
    #[arg(long, value_name = "PATH", conflicts_with = "no_rc")]
    rc: Option<PathBuf>,

    /// Ignore any .modelinerc and use built-in defaults
    #[arg(long)]
    no_rc: bool,

    /// Print a sample .modelinerc and exit
    #[arg(long)]
    sample_rc: bool,

    #[arg(required_unless_present = "sample_rc")]
    files: Vec<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    logging::init().map_err(|err| anyhow!(err)).context("failed to initialize logging")?;

    if args.sample_rc {
        print!("{}", RcLoader::generate_sample_rc());
        return Ok(ExitCode::SUCCESS);
    }

    let config = if args.no_rc {
        RcConfig::default()
    } else if let Some(rc_path) = &args.rc {
        RcLoader::load_config_from(rc_path)
    } else {
        RcLoader::load_config()
    };

    let mut failed = false;
    for path in &args.files {
        match process_file(path, args.event.into(), &config) {
            Ok(report) => println!("{report}"),
            Err(err) => {
                eprintln!("{}: {err:#}", path.display());
                failed = true;
            }
        }
    }

    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

fn process_file(path: &Path, event: LifecycleEvent, config: &RcConfig) -> anyhow::Result<String> {
    let mut document = Document::from_file(path.to_path_buf())?;
    RcLoader::apply_config_to_document(&mut document, config);

    let applied = if config.modeline {
        event
            .dispatch_within(&mut document, config.modelines)
            .with_context(|| format!("reloading as {}", document.encoding))?
    } else {
        0
    };

    Ok(describe(path, &document, applied))
}

fn describe(path: &Path, document: &Document, applied: usize) -> String {
    let indent = match document.indent_type {
        IndentType::Tabs => "tabs",
        IndentType::Spaces => "spaces",
    };
    let wrap = if document.wrap_mode.is_enabled() { "on" } else { "off" };

    format!(
        "{}: indent={indent} width={} wrap={wrap} encoding={} applied={applied}",
        path.display(),
        document.indent_width,
        document.encoding,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_files_required_without_sample_rc() {
        assert!(Args::try_parse_from(["modeline"]).is_err());
        assert!(Args::try_parse_from(["modeline", "--sample-rc"]).is_ok());
        assert!(Args::try_parse_from(["modeline", "--rc", "x", "--no-rc", "a.txt"]).is_err());
    }

    #[test]
    fn test_event_parsing() {
        let args = Args::try_parse_from(["modeline", "--event", "save", "a.txt"]).unwrap();
        assert_eq!(args.event, Event::Save);
        assert_eq!(LifecycleEvent::from(args.event), LifecycleEvent::DocumentSave);
    }

    #[test]
    fn test_describe() {
        let mut document = Document::from_str("# vim: et ts=2 wrap");
        modeline::apply_modelines(&mut document, false).unwrap();
        assert_eq!(
            describe(Path::new("a.rs"), &document, 3),
            "a.rs: indent=spaces width=2 wrap=on encoding=UTF-8 applied=3"
        );
    }
}
