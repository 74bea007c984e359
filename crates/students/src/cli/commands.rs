//! Dispatch for the `students` binary.
//!
//! 1. **Argument Parsing**: clap turns the shell arguments into a [`Cli`]
//! 2. **Context Setup**: [`initialize`] loads configuration and seeds the roster
//! 3. **Dispatch**: roster commands go through [`execute`] to the API
//! 4. **Output Formatting**: [`render`] turns each `CmdResult` into text or JSON
//!
//! Errors bubble up to `main`, which prints them and exits non-zero.

use super::logging;
use super::render::render;
use super::setup::{Cli, Commands, OutputMode, RosterCommands};
use super::shell;
use anyhow::Context;
use clap::Parser;
use studentapp::api::{CheckedFilter, CmdMessage, CmdResult, StudentApi, StudentDraft, StudentPatch};
use studentapp::config::StudentsConfig;
use studentapp::error::{Result, StudentError};
use studentapp::init::{initialize, StudentsContext};
use studentapp::model::ImageRef;
use studentapp::store::DataStore;
use std::io::{self, IsTerminal, Write};
use tracing::debug;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let cwd = std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
    let StudentsContext { mut api, config } =
        initialize(&cwd, cli.seed).context("failed to initialize roster")?;

    // Naked `students` lists the roster
    let command = cli
        .command
        .unwrap_or(Commands::Roster(RosterCommands::List {
            checked: false,
            unchecked: false,
        }));
    debug!(?command, "dispatching");

    match command {
        Commands::Roster(cmd) => {
            let result = execute(&mut api, cmd)?;
            print!("{}", render(&result, cli.output)?);
        }
        Commands::Config { template } => {
            print!("{}", render_config(&config, template, cli.output)?);
        }
        Commands::Shell => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            let mut stdout = io::stdout();
            shell::run_session(&mut api, stdin.lock(), &mut stdout, cli.output, interactive)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Runs one roster command against `api`.
pub fn execute<S: DataStore>(api: &mut StudentApi<S>, command: RosterCommands) -> Result<CmdResult> {
    match command {
        RosterCommands::List { checked, unchecked } => {
            let filter = match (checked, unchecked) {
                (true, _) => CheckedFilter::Checked,
                (_, true) => CheckedFilter::Unchecked,
                _ => CheckedFilter::All,
            };
            api.list_students(filter)
        }
        RosterCommands::Show { ids } => api.view_students(ids.as_slice()),
        RosterCommands::Add {
            name,
            id,
            phone,
            address,
            checked,
            image,
        } => {
            let mut draft = StudentDraft::new(name, id, phone, address).with_checked(checked);
            draft.image = image.map(ImageRef::new);
            api.add_student(draft)
        }
        RosterCommands::Edit {
            id,
            name,
            new_id,
            phone,
            address,
            checked,
            image,
        } => {
            let patch = StudentPatch {
                name,
                id: new_id,
                phone,
                address,
                checked,
                image: image.map(ImageRef::new),
            };
            if patch.is_empty() {
                return Err(StudentError::Api(
                    "Nothing to change: pass at least one of --name, --new-id, --phone, --address, --checked or --image".to_string(),
                ));
            }
            api.edit_student(&id, patch)
        }
        RosterCommands::Delete { ids } => api.delete_students(ids.as_slice()),
        RosterCommands::Toggle { ids } => api.toggle_students(ids.as_slice()),
        RosterCommands::Count => api.count(),
        RosterCommands::FormatPhone { phone } => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(api.format_phone(&phone)));
            Ok(result)
        }
    }
}

fn render_config(
    config: &StudentsConfig,
    template: bool,
    mode: OutputMode,
) -> anyhow::Result<String> {
    if template {
        return Ok(StudentsConfig::template());
    }
    match mode {
        OutputMode::Json => Ok(serde_json::to_string_pretty(config)? + "\n"),
        OutputMode::Text => toml::to_string(config).context("failed to serialize configuration"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studentapp::init::context_with;
    use studentapp::store::memory::InMemoryStore;

    fn api() -> StudentApi<InMemoryStore> {
        context_with(StudentsConfig::default()).api
    }

    fn add(id: &str) -> RosterCommands {
        RosterCommands::Add {
            name: "Alice".into(),
            id: id.into(),
            phone: "0501234567".into(),
            address: "Main St".into(),
            checked: false,
            image: None,
        }
    }

    #[test]
    fn list_maps_filters() {
        let mut api = api();
        execute(&mut api, RosterCommands::Toggle { ids: vec!["4".into()] }).unwrap();

        let checked = execute(
            &mut api,
            RosterCommands::List {
                checked: true,
                unchecked: false,
            },
        )
        .unwrap();
        assert_eq!(checked.count, Some(1));

        let unchecked = execute(
            &mut api,
            RosterCommands::List {
                checked: false,
                unchecked: true,
            },
        )
        .unwrap();
        assert_eq!(unchecked.count, Some(19));
    }

    #[test]
    fn add_fills_configured_image() {
        let mut api = api();
        let result = execute(&mut api, add("abc")).unwrap();
        assert_eq!(result.affected[0].image.as_str(), "student");
    }

    #[test]
    fn add_rejects_duplicate() {
        let mut api = api();
        execute(&mut api, add("abc")).unwrap();
        assert!(matches!(
            execute(&mut api, add("abc")),
            Err(StudentError::DuplicateId(_))
        ));
    }

    #[test]
    fn edit_without_changes_is_an_error() {
        let mut api = api();
        let err = execute(
            &mut api,
            RosterCommands::Edit {
                id: "1".into(),
                name: None,
                new_id: None,
                phone: None,
                address: None,
                checked: None,
                image: None,
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("Nothing to change"));
    }

    #[test]
    fn edit_maps_new_id() {
        let mut api = api();
        execute(
            &mut api,
            RosterCommands::Edit {
                id: "2".into(),
                name: None,
                new_id: Some("s-002".into()),
                phone: None,
                address: None,
                checked: Some(true),
                image: None,
            },
        )
        .unwrap();

        assert!(api.get_student("2").is_none());
        assert!(api.get_student("s-002").unwrap().checked);
    }

    #[test]
    fn format_phone_reports_as_info() {
        let mut api = api();
        let result = execute(
            &mut api,
            RosterCommands::FormatPhone {
                phone: "512345678".into(),
            },
        )
        .unwrap();
        assert_eq!(result.messages, vec![CmdMessage::info("051-2345678")]);
    }

    #[test]
    fn config_renders_toml_and_json() {
        let config = StudentsConfig::default();
        let text = render_config(&config, false, OutputMode::Text).unwrap();
        assert!(text.contains("seed_count = 20"));
        assert!(text.contains("default_image = \"student\""));

        let json = render_config(&config, false, OutputMode::Json).unwrap();
        assert!(json.contains("\"seed_count\": 20"));
    }
}
