//! Interactive location chat.

use std::io::{BufRead, Write};

use tracing::info;

use gazarch_resolve::LocationSession;

use super::build_resolver;

/// Input parameters for the Chat command strategy.
#[derive(Debug, Clone)]
pub struct ChatInput {
    /// Optional single message to resolve (non-interactive mode)
    pub message: Option<String>,
}

/// Strategy for executing the Chat command.
///
/// Runs one conversation session: either a single message or a stdin
/// read loop where each line is one turn. The pending-number state lives
/// in the session, so "4" followed by "дотуур байр" works across lines
/// exactly as it does across chat messages.
#[derive(Debug, Clone, Copy)]
pub struct ChatStrategy;

impl super::CommandStrategy for ChatStrategy {
    type Input = ChatInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let (config, resolver) = build_resolver()?;
        let mut session = LocationSession::new(config.language.default);

        info!("Starting location session: {}", session.id);

        if let Some(message) = input.message {
            let reply = session.turn(&resolver, &message);
            println!("{}", reply.message);
            return Ok(());
        }

        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        loop {
            write!(stdout, "you> ")?;
            stdout.flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            let text = line.trim();
            if text.is_empty() {
                continue;
            }
            if matches!(text, "exit" | "quit") {
                break;
            }

            let reply = session.turn(&resolver, text);
            println!("{}", reply.message);
        }

        info!(
            "Session {} ended after {} turns",
            session.id,
            session.turn_count()
        );
        Ok(())
    }
}
