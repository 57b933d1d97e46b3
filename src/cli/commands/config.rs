use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::Messenger;
use std::process::Command;

fn run_editor(editor: &str, path: &std::path::Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, colors: bool) -> AppResult<()> {
    let msg = Messenger::new(colors);
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if !*print_config && !*edit_config {
            msg.info(format!("Config file: {}", path.display()));
            msg.info("Use --print to show it or --edit to change it.");
            return Ok(());
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            print!("{}", cfg.to_yaml()?);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            if !path.exists() {
                Config::init(false)?;
            }

            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            if run_editor(&editor_to_use, &path) {
                msg.success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor_to_use
                ));
            } else if editor_to_use != default_editor {
                msg.warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    editor_to_use, default_editor
                ));
                if run_editor(&default_editor, &path) {
                    msg.success(format!(
                        "Configuration file edited successfully using fallback '{}'",
                        default_editor
                    ));
                } else {
                    msg.error(format!(
                        "Failed to edit configuration file using fallback '{}'",
                        default_editor
                    ));
                }
            } else {
                msg.error(format!(
                    "Failed to edit configuration file using '{}'",
                    editor_to_use
                ));
            }
        }
    }

    Ok(())
}
