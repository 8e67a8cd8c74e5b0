//! User prompts: the record form and confirmation questions.
//!
//! The session talks to the user through the [`Prompter`] trait so that the
//! destructive-action confirmation is an explicit control-flow step, and so
//! tests can drive the session without a terminal.

use dialoguer::{Confirm, Input, Select};
use roster::{Record, RecordDraft, Role, Status};

/// Collects form input and confirmations from the user.
pub trait Prompter {
    /// Runs the record form, prefilled from `existing` when editing.
    ///
    /// Returns `None` if the user cancelled the form. The returned draft is
    /// unvalidated; the session runs it through validation before committing.
    fn record_form(&mut self, existing: Option<&Record>) -> anyhow::Result<Option<RecordDraft>>;

    /// Asks a yes/no question, defaulting to no.
    ///
    /// Destructive operations run only when this returns `true`.
    fn confirm(&mut self, prompt: &str) -> anyhow::Result<bool>;
}

/// Interactive prompts on the controlling terminal.
#[derive(Debug)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn record_form(&mut self, existing: Option<&Record>) -> anyhow::Result<Option<RecordDraft>> {
        let name: String = Input::new()
            .with_prompt("Name")
            .allow_empty(true)
            .with_initial_text(existing.map(Record::name).unwrap_or_default())
            .interact_text()?;

        let email: String = Input::new()
            .with_prompt("Email")
            .allow_empty(true)
            .with_initial_text(existing.map(Record::email).unwrap_or_default())
            .interact_text()?;

        let role_default = existing
            .and_then(|record| Role::VARIANTS.iter().position(|role| *role == record.role()))
            .unwrap_or(0);
        let Some(role_index) = Select::new()
            .with_prompt("Role")
            .items(&Role::VARIANTS)
            .default(role_default)
            .interact_opt()?
        else {
            return Ok(None);
        };

        let status_default = existing
            .and_then(|record| {
                Status::VARIANTS
                    .iter()
                    .position(|status| *status == record.status())
            })
            .unwrap_or(0);
        let Some(status_index) = Select::new()
            .with_prompt("Status")
            .items(&Status::VARIANTS)
            .default(status_default)
            .interact_opt()?
        else {
            return Ok(None);
        };

        Ok(Some(RecordDraft {
            name,
            email,
            role: Role::VARIANTS[role_index].to_string(),
            status: Status::VARIANTS[status_index].to_string(),
        }))
    }

    fn confirm(&mut self, prompt: &str) -> anyhow::Result<bool> {
        Ok(Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()?)
    }
}
