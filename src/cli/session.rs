//! The interactive session: one run of the binary, one store lifetime.

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use roster::{
    store::{export, view},
    Config, Query, RecordId, RecordStore, Role, StoreError,
};
use tracing::instrument;

use super::{form::Prompter, table, terminal::Colorize};

/// One parsed session command.
///
/// Commands arrive as lines; the surface mirrors the actions of the record
/// view: form-driven create and edit, confirmed destructive actions, live
/// filters, seed and export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Edit(RecordId),
    Delete(RecordId),
    Clear,
    Seed,
    Search(Option<String>),
    RoleFilter(Option<Role>),
    List,
    Export(Option<PathBuf>),
    Help,
    Quit,
}

impl Command {
    /// Parses a command line.
    ///
    /// This is a CLI boundary function: keywords are case-insensitive and
    /// errors are plain messages for the user.
    pub fn parse(line: &str) -> Result<Self, String> {
        let trimmed = line.trim();
        let (keyword, rest) = trimmed
            .split_once(char::is_whitespace)
            .map_or((trimmed, ""), |(keyword, rest)| (keyword, rest.trim()));

        match keyword.to_ascii_lowercase().as_str() {
            "add" | "new" => Ok(Self::Add),
            "edit" => rest.parse().map(Self::Edit).map_err(|e| e.to_string()),
            "delete" | "del" | "rm" => rest.parse().map(Self::Delete).map_err(|e| e.to_string()),
            "clear" => Ok(Self::Clear),
            "seed" => Ok(Self::Seed),
            "search" => Ok(Self::Search(
                (!rest.is_empty()).then(|| rest.to_string()),
            )),
            "role" => {
                if rest.is_empty() {
                    Ok(Self::RoleFilter(None))
                } else {
                    rest.parse()
                        .map(|role| Self::RoleFilter(Some(role)))
                        .map_err(|e| e.to_string())
                }
            }
            "list" | "ls" => Ok(Self::List),
            "export" => Ok(Self::Export(
                (!rest.is_empty()).then(|| PathBuf::from(rest)),
            )),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(format!(
                "unknown command '{other}'; type 'help' for the command list"
            )),
        }
    }
}

/// A transient confirmation line, consumed by the next render pass.
///
/// Only the most recent notice survives a burst of actions; older ones are
/// superseded before they are ever shown.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Notice {
    Info(String),
    Warn(String),
}

/// What the loop does after a command was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Run a render pass, consuming the pending notice.
    Render,
    /// Nothing on screen changed.
    Silent,
    /// End the session.
    Quit,
}

/// The interactive session.
///
/// Owns the single store instance of this run, the active query and the
/// pending notice. Mutations happen here and nowhere else; every handled
/// command is followed by exactly one render pass.
pub struct Session<P> {
    store: RecordStore,
    query: Query,
    config: Config,
    prompter: P,
    notice: Option<Notice>,
}

impl<P: Prompter> Session<P> {
    /// Creates a session with an empty store.
    pub fn new(config: Config, prompter: P) -> Self {
        Self {
            store: RecordStore::new(),
            query: Query::new(),
            config,
            prompter,
            notice: None,
        }
    }

    /// Runs the read loop until `quit` or end of input.
    #[instrument(level = "debug", skip_all)]
    pub fn run(&mut self, preseed: bool) -> anyhow::Result<()> {
        if preseed {
            let count = self.store.seed();
            self.note(Notice::Info(format!("Seeded {count} sample records")));
        }

        println!(
            "{}",
            "roster session (records are discarded on exit). Type 'help' for commands.".info()
        );
        self.render_pass();

        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            print!("> ");
            io::stdout().flush()?;

            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                break; // end of input ends the session
            }
            if line.trim().is_empty() {
                continue;
            }

            match Command::parse(&line) {
                Ok(command) => match self.handle(command)? {
                    Flow::Render => self.render_pass(),
                    Flow::Silent => {}
                    Flow::Quit => break,
                },
                Err(message) => println!("{}", message.warning()),
            }
        }

        Ok(())
    }

    /// Applies one command to the session state.
    ///
    /// Mutations and the resulting notice happen here; the caller performs
    /// the render pass the returned [`Flow`] asks for.
    pub fn handle(&mut self, command: Command) -> anyhow::Result<Flow> {
        match command {
            Command::Add => {
                match self.prompter.record_form(None)? {
                    Some(draft) => match draft.validate() {
                        Ok(fields) => {
                            let id = self.store.create(fields).id();
                            self.note(Notice::Info(format!("Created record {id}")));
                        }
                        Err(error) => self.note(Notice::Warn(error.to_string())),
                    },
                    None => self.note(Notice::Info("Cancelled".to_string())),
                }
                Ok(Flow::Render)
            }

            Command::Edit(id) => {
                let Some(existing) = self.store.get(id).cloned() else {
                    self.note(Notice::Warn(StoreError::NotFound { id }.to_string()));
                    return Ok(Flow::Render);
                };
                match self.prompter.record_form(Some(&existing))? {
                    Some(draft) => match draft.validate() {
                        Ok(fields) => {
                            match self.store.update(id, fields).map(|record| record.id()) {
                                Ok(id) => self.note(Notice::Info(format!("Updated record {id}"))),
                                Err(error) => self.note(Notice::Warn(error.to_string())),
                            }
                        }
                        Err(error) => self.note(Notice::Warn(error.to_string())),
                    },
                    None => self.note(Notice::Info("Cancelled".to_string())),
                }
                Ok(Flow::Render)
            }

            Command::Delete(id) => {
                if self.store.get(id).is_none() {
                    self.note(Notice::Warn(StoreError::NotFound { id }.to_string()));
                } else if self.prompter.confirm(&format!("Delete record {id}?"))? {
                    match self.store.remove(id).map(|record| record.id()) {
                        Ok(id) => self.note(Notice::Info(format!("Deleted record {id}"))),
                        Err(error) => self.note(Notice::Warn(error.to_string())),
                    }
                } else {
                    self.note(Notice::Info("Cancelled".to_string()));
                }
                Ok(Flow::Render)
            }

            Command::Clear => {
                if self.prompter.confirm("Clear all records?")? {
                    self.store.clear();
                    self.note(Notice::Info("Cleared".to_string()));
                } else {
                    self.note(Notice::Info("Cancelled".to_string()));
                }
                Ok(Flow::Render)
            }

            Command::Seed => {
                let count = self.store.seed();
                self.note(Notice::Info(format!("Seeded {count} sample records")));
                Ok(Flow::Render)
            }

            Command::Search(text) => {
                self.query.set_text(text);
                Ok(Flow::Render)
            }

            Command::RoleFilter(role) => {
                self.query.set_role(role);
                Ok(Flow::Render)
            }

            Command::List => Ok(Flow::Render),

            Command::Export(path) => {
                let path = path.unwrap_or_else(|| self.config.export_file().to_path_buf());
                match export::export_to_path(&self.store, &self.query, &path) {
                    Ok(count) => self.note(Notice::Info(format!(
                        "Exported {count} records to {}",
                        path.display()
                    ))),
                    Err(error) => self.note(Notice::Warn(error.to_string())),
                }
                Ok(Flow::Render)
            }

            Command::Help => {
                Self::print_help();
                Ok(Flow::Silent)
            }

            Command::Quit => Ok(Flow::Quit),
        }
    }

    /// Queues a notice. Latest wins; an unshown older notice is dropped.
    fn note(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    /// Renders the current projection and consumes the pending notice.
    fn render_pass(&mut self) {
        let state = view::render(&self.store, &self.query, &self.config);
        table::print(&state);

        if !self.query.is_unfiltered() {
            let mut parts = Vec::new();
            if let Some(text) = self.query.text() {
                parts.push(format!("text ~ '{text}'"));
            }
            if let Some(role) = self.query.role() {
                parts.push(format!("role = {role}"));
            }
            println!("{}", format!("filter: {}", parts.join(", ")).dim());
        }

        if let Some(notice) = self.notice.take() {
            match notice {
                Notice::Info(message) => println!("{}", message.success()),
                Notice::Warn(message) => println!("{}", message.warning()),
            }
        }
    }

    fn print_help() {
        println!("{}", "Records".info());
        println!("  add                 create a record (form)");
        println!("  edit <id>           edit a record (form, prefilled)");
        println!("  delete <id>         delete a record (asks first)");
        println!("  clear               delete every record (asks first)");
        println!("  seed                insert the 8 sample records");
        println!("{}", "View".info());
        println!("  search [text]       set or clear the text filter");
        println!("  role [name]         set or clear the role filter");
        println!("  list                redraw the table");
        println!("  export [path]       write the filtered view as JSON");
        println!("{}", "Session".info());
        println!("  help, quit");
        println!(
            "{}",
            "Nothing is saved: the roster lives in memory until quit.".dim()
        );
    }
}
