use crate::cli::parser::Commands;
use crate::cli::repl::{HELP, ShellCommand};
use crate::config::Config;
use crate::core::store::SlotStore;
use crate::core::summary::Summary;
use crate::errors::AppResult;
use crate::models::locale::DurationUnits;
use crate::ui::messages::Messenger;
use crate::ui::render::render_summary;
use crate::utils::formatting::parse_rate;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// What the shell should do after a command has been applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// State changed (or was re-requested): render the new summary.
    Render(Summary),
    /// A mutation that the store ignored (last slot, unknown id).
    Ignored(String),
    Text(String),
    Quit,
    Nothing,
}

/// One interactive session: the store plus the display settings.
pub struct Session {
    pub store: SlotStore,
    pub units: DurationUnits,
    pub currencies: Vec<String>,
}

impl Session {
    pub fn new(store: SlotStore, cfg: &Config) -> Self {
        Self {
            store,
            units: cfg.locale.units(),
            currencies: cfg.currencies.clone(),
        }
    }

    pub fn summary(&self) -> Summary {
        Summary::compute(&self.store, &self.units)
    }

    /// Apply one command; every mutation is followed by a full recompute.
    pub fn apply(&mut self, cmd: ShellCommand) -> Outcome {
        match cmd {
            ShellCommand::Add => {
                self.store.add_slot();
            }
            ShellCommand::Remove(id) => {
                if !self.store.remove_slot(id) {
                    let reason = if self.store.get(id).is_some() {
                        "at least one slot must remain".to_string()
                    } else {
                        format!("no slot with id {}", id)
                    };
                    return Outcome::Ignored(reason);
                }
            }
            ShellCommand::Update(id, field, value) => {
                if !self.store.update_slot(id, field, &value) {
                    return Outcome::Ignored(format!("no slot with id {}", id));
                }
            }
            ShellCommand::Rate(value) => self.store.set_hourly_rate(value),
            ShellCommand::Currency(symbol) => self.store.set_currency(&symbol),
            ShellCommand::Show => {}
            ShellCommand::Currencies => {
                return Outcome::Text(format!(
                    "Suggested currencies: {}",
                    self.currencies.join(" ")
                ));
            }
            ShellCommand::Help => return Outcome::Text(HELP.to_string()),
            ShellCommand::Quit => return Outcome::Quit,
            ShellCommand::Nothing => return Outcome::Nothing,
        }

        Outcome::Render(self.summary())
    }
}

/// Build the initial store from CLI overrides and configuration defaults.
pub fn initial_store(rate: Option<&String>, currency: Option<&String>, cfg: &Config) -> SlotStore {
    let rate = rate.map(|r| parse_rate(r)).unwrap_or(cfg.default_rate);
    let currency = currency
        .cloned()
        .unwrap_or_else(|| cfg.default_currency.clone());
    SlotStore::new(rate, &currency)
}

/// Read commands from `input` until `quit` or end of input.
pub fn run_loop<R: BufRead>(session: &mut Session, input: R, colors: bool) -> AppResult<()> {
    let msg = Messenger::new(colors);
    print!("{}", render_summary(&session.summary(), colors));
    prompt()?;

    for line in input.lines() {
        let line = line?;
        debug!(line = line.as_str(), "shell input");

        let outcome = match ShellCommand::parse(&line) {
            Ok(cmd) => {
                let mutating = cmd.is_mutation();
                let outcome = session.apply(cmd);
                if mutating {
                    debug!(slots = session.store.len(), "state changed, summary recomputed");
                }
                outcome
            }
            Err(e) => {
                msg.warning(format!("{} (type 'help' for the command list)", e));
                Outcome::Nothing
            }
        };

        match outcome {
            Outcome::Render(summary) => print!("{}", render_summary(&summary, colors)),
            Outcome::Ignored(reason) => msg.warning(format!("Ignored: {}", reason)),
            Outcome::Text(text) => println!("{}", text),
            Outcome::Quit => break,
            Outcome::Nothing => {}
        }
        prompt()?;
    }

    println!();
    msg.info("Session closed, nothing was saved.");
    Ok(())
}

fn prompt() -> AppResult<()> {
    print!("rslotpay> ");
    io::stdout().flush()?;
    Ok(())
}

pub fn handle(cmd: Option<&Commands>, cfg: &Config, colors: bool) -> AppResult<()> {
    let (rate, currency) = match cmd {
        Some(Commands::Shell { rate, currency }) => (rate.as_ref(), currency.as_ref()),
        _ => (None, None),
    };

    let mut session = Session::new(initial_store(rate, currency, cfg), cfg);

    Messenger::new(colors).header("rSlotPay: type 'help' for commands, 'quit' to leave");
    let stdin = io::stdin();
    run_loop(&mut session, stdin.lock(), colors)
}
