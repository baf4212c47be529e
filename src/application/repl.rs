use std::io::Write;
use std::path;

use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use dialoguer::Input;
use dialoguer::Password;
use tokio::io::AsyncBufReadExt;
use tokio::io::BufReader;
use tokio::sync::mpsc;
use yansi::Paint;

use crate::domain::models::Confirmation;
use crate::domain::models::ContentSegment;
use crate::domain::models::DocumentClientBox;
use crate::domain::models::Event;
use crate::domain::models::Message;
use crate::domain::models::ProfileUpdate;
use crate::domain::models::Role;
use crate::domain::models::SessionStatus;
use crate::domain::models::SlashCommand;
use crate::domain::services::segmenter;
use crate::domain::services::ConversationStore;
use crate::domain::services::MessageDispatcher;
use crate::domain::services::SessionManager;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
Type a message and press enter to send it. Slash commands control the rest:

- /login - Sign in with your email and password.
- /signup (/register) - Create a new account.
- /logout - Sign out and remove saved tokens.
- /whoami (/me) - Show the signed in user.
- /refresh - Reload your profile from the server.
- /rename [NAME] - Change your display name.
- /delete-account - Permanently delete your account.
- /conversations (/ls, /list) - List your conversations.
- /open (/o) [CONVERSATION_ID] - Open a conversation.
- /new (/n) - Start a new conversation.
- /delete (/d, /rm) [CONVERSATION_ID?] - Delete a conversation. Defaults to the active one.
- /remember [TEXT] - Save a note to the knowledge base.
- /upload [PATH] - Upload a file to the knowledge base.
- /help (/h) - Provides this help menu.
- /quit /exit (/q) - Exit Parley.
        "#;

    return text.trim().to_string();
}

fn render_message(message: &Message) {
    if message.is_error {
        println!("{}", Paint::red(&message.content));
        return;
    }

    match message.role {
        Role::User => {
            println!("{}", Paint::blue(format!("You: {}", message.content)));
        }
        Role::Assistant | Role::System => {
            for segment in segmenter::segment(&message.content) {
                match segment {
                    ContentSegment::Text { content } => {
                        println!("{content}");
                    }
                    ContentSegment::Code { language, body } => {
                        println!("{}", Paint::new(format!("```{language}")).dimmed());
                        println!("{body}");
                        println!("{}", Paint::new("```").dimmed());
                    }
                }
            }
        }
    }
}

fn prompt_login() -> Result<(String, String)> {
    let email: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Email")
        .interact_text()?;
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Password")
        .interact()?;

    return Ok((email, password));
}

fn confirm(prompt: &str) -> Result<Confirmation> {
    let accepted = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()?;

    if accepted {
        return Ok(Confirmation::Confirmed);
    }

    return Ok(Confirmation::Declined);
}

pub struct Repl {
    session: SessionManager,
    store: ConversationStore,
    dispatcher: MessageDispatcher,
    documents: DocumentClientBox,
    rx: mpsc::UnboundedReceiver<Event>,
}

pub async fn start(
    session: SessionManager,
    store: ConversationStore,
    dispatcher: MessageDispatcher,
    documents: DocumentClientBox,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut repl = Repl {
        session,
        store,
        dispatcher,
        documents,
        rx,
    };

    return repl.run().await;
}

impl Repl {
    async fn run(&mut self) -> Result<()> {
        println!(
            "{}",
            Paint::new("Welcome to Parley! Run /help for the list of commands.").dimmed()
        );
        self.render_events();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            self.prompt();
            let line = match lines.next_line().await? {
                Some(line) => line,
                None => break,
            };

            let text = line.trim().to_string();
            if text.is_empty() {
                continue;
            }

            if let Some(command) = SlashCommand::parse(&text) {
                if command.is_quit() {
                    break;
                }

                if let Err(err) = self.handle_command(&command).await {
                    println!("{}", Paint::red(format!("{err}")));
                }
            } else if text.starts_with('/') {
                println!(
                    "{}",
                    Paint::red(format!("Unknown command {text}. Run /help for the full list."))
                );
            } else if let Err(err) = self
                .dispatcher
                .send_message(&mut self.session, &mut self.store, &text)
                .await
            {
                println!("{}", Paint::red(format!("{err}")));
            }

            self.render_events();
        }

        return Ok(());
    }

    fn prompt(&self) {
        let who = match self.session.state().user() {
            Some(user) => user.display_name(),
            None => "anonymous".to_string(),
        };

        print!("{} ", Paint::new(format!("{who}>")).dimmed());
        let _ = std::io::stdout().flush();
    }

    fn render_events(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            match event {
                Event::SessionChanged(SessionStatus::Authenticated) => {
                    if let Some(user) = self.session.state().user() {
                        println!(
                            "{}",
                            Paint::green(format!("Signed in as {}.", user.display_name()))
                        );
                    }
                }
                Event::SessionChanged(SessionStatus::Anonymous) => {
                    println!("Signed out.");
                }
                Event::SessionChanged(SessionStatus::Expired) => {
                    println!(
                        "{}",
                        Paint::red("Your session has expired. Run /login to sign in again.")
                    );
                }
                Event::SessionChanged(_) => {}
                Event::ActiveConversationChanged(Some(id)) => {
                    println!("{}", Paint::new(format!("Conversation {id}")).dimmed());
                }
                Event::ActiveConversationChanged(None) => {
                    println!("{}", Paint::new("New conversation").dimmed());
                }
                Event::MessageAppended(message) => {
                    render_message(&message);
                }
                Event::SummariesReloaded(count) => {
                    tracing::debug!(count, "Conversation summaries reloaded");
                }
            }
        }
    }

    async fn handle_command(&mut self, command: &SlashCommand) -> Result<()> {
        if command.is_help() {
            println!("{}", help_text());
            return Ok(());
        }

        if command.is_login() {
            let (email, password) = prompt_login()?;
            self.session.login(&email, &password).await?;
            self.store.load_summaries(self.session.state()).await;
            return Ok(());
        }

        if command.is_signup() {
            let email: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Email")
                .interact_text()?;
            let name: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Name")
                .interact_text()?;
            let password = Password::with_theme(&ColorfulTheme::default())
                .with_prompt("Password")
                .interact()?;
            let password_confirm = Password::with_theme(&ColorfulTheme::default())
                .with_prompt("Confirm password")
                .interact()?;

            self.session
                .signup(&email, &name, &password, &password_confirm)
                .await?;
            self.store.load_summaries(self.session.state()).await;
            return Ok(());
        }

        if command.is_logout() {
            self.session.logout().await;
            self.store.new_conversation();
            return Ok(());
        }

        if command.is_whoami() {
            match self.session.state().user() {
                Some(user) => println!("{} <{}>", user.display_name(), user.email),
                None => println!("You are not signed in."),
            }
            return Ok(());
        }

        if command.is_refresh() {
            self.session.refresh_profile().await?;
            return Ok(());
        }

        if command.is_rename() {
            let mut name = command.args.join(" ");
            if name.trim().is_empty() {
                name = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt("New name")
                    .interact_text()?;
            }

            self.session
                .update_profile(&ProfileUpdate {
                    name: Some(name),
                    password: None,
                })
                .await?;
            println!("Name updated.");
            return Ok(());
        }

        if command.is_delete_account() {
            let confirmation =
                confirm("This permanently deletes your account and conversations. Continue?")?;
            if confirmation == Confirmation::Declined {
                return Ok(());
            }

            self.session.delete_account().await?;
            self.store.new_conversation();
            return Ok(());
        }

        if command.is_conversations() {
            if !self.session.state().is_authenticated() {
                println!("You are not signed in.");
                return Ok(());
            }

            self.store.load_summaries(self.session.state()).await;
            if self.store.summaries().is_empty() {
                println!("There are no conversations yet. Say something to start one!");
                return Ok(());
            }

            for summary in self.store.summaries() {
                println!("- ({}) {}, {}", summary.id, summary.title, summary.updated_at);
            }
            return Ok(());
        }

        if command.is_open() {
            let id = match command.args.first() {
                Some(id) => id.to_string(),
                None => {
                    println!(
                        "{}",
                        Paint::red(
                            "You must pass a conversation ID. Run /conversations to list them."
                        )
                    );
                    return Ok(());
                }
            };

            self.store
                .select_conversation(self.session.state(), &id)
                .await?;
            self.render_events();
            for message in self.store.active().messages() {
                render_message(message);
            }
            return Ok(());
        }

        if command.is_new() {
            self.store.new_conversation();
            return Ok(());
        }

        if command.is_delete() {
            let id = match command.args.first() {
                Some(id) => id.to_string(),
                None => match self.store.active_id() {
                    Some(id) => id.to_string(),
                    None => {
                        println!(
                            "{}",
                            Paint::red("There is no active conversation to delete.")
                        );
                        return Ok(());
                    }
                },
            };

            let confirmation = confirm(&format!("Delete conversation {id}?"))?;
            self.store
                .delete_conversation(self.session.state(), &id, confirmation)
                .await?;
            return Ok(());
        }

        if command.is_remember() {
            let text = command.args.join(" ");
            if text.trim().is_empty() {
                println!("{}", Paint::red("You must pass the text to remember."));
                return Ok(());
            }

            let access_token = self.session.require_token()?;
            let receipt = self.documents.add_text(&access_token, &text, "note").await?;
            println!("Remembered, {} chunks added.", receipt.chunks_added);
            return Ok(());
        }

        if command.is_upload() {
            let file_path = match command.args.first() {
                Some(arg) => path::PathBuf::from(arg),
                None => {
                    println!("{}", Paint::red("You must pass a path to a file to upload."));
                    return Ok(());
                }
            };

            let access_token = self.session.require_token()?;
            let receipt = self.documents.upload_file(&access_token, &file_path).await?;
            println!(
                "Uploaded {}, {} chunks added.",
                file_path.display(),
                receipt.chunks_added
            );
            return Ok(());
        }

        return Ok(());
    }
}
