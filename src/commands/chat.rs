//! Interactive chat on the terminal.
//!
//! Drives the same conversation sessions a chat bot would, with the
//! terminal as the transport: menus become select prompts, everything else
//! is free text.

use crate::{
    api::Todoist,
    libs::{config::Config, conversation::Conversations, messages::Message},
    msg_print,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};

const LOCAL_CONVERSATION: &str = "local";
pub const QUIT_COMMAND: &str = "/quit";

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let todoist = Todoist::new(&config.todoist)?;
    let mut conversations = Conversations::new(todoist, config.projects.clone(), config.labels.clone());

    msg_print!(Message::ChatStarted);
    let mut menu: Vec<String> = Vec::new();

    loop {
        let selected = if menu.is_empty() {
            None
        } else {
            let options = with_quit(&menu);
            Select::with_theme(&ColorfulTheme::default())
                .items(&options)
                .default(0)
                .interact_opt()?
                .map(|selection| options[selection].clone())
        };

        // Esc in a menu falls back to free text
        let input = match selected {
            Some(choice) => choice,
            None => Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::ChatPrompt.to_string())
                .interact_text()?,
        };

        if input.trim() == QUIT_COMMAND {
            msg_print!(Message::ChatFinished);
            return Ok(());
        }

        let reply = conversations.handle(LOCAL_CONVERSATION, &input).await;
        for chunk in &reply.chunks {
            msg_print!(chunk);
        }
        menu = reply.menu;
    }
}

/// Menu entries as shown on the terminal: the reply's choices, then `/quit`.
pub fn with_quit(menu: &[String]) -> Vec<String> {
    menu.iter()
        .cloned()
        .chain(std::iter::once(QUIT_COMMAND.to_string()))
        .collect()
}
