use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::Messenger;

/// Handle the `init` command: write the default configuration file.
pub fn handle(cmd: &Commands, colors: bool) -> AppResult<()> {
    let msg = Messenger::new(colors);
    if let Commands::Init { force } = cmd {
        let existed = Config::config_file().exists();
        let path = Config::init(*force)?;

        if existed && !*force {
            msg.info(format!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            ));
        } else {
            msg.success(format!("Config file: {}", path.display()));
        }
    }

    Ok(())
}
