//! Implementation of the `blogspark chat` command.
//!
//! A line-oriented request/response loop around the pipeline. `exit` and
//! `quit` (case-insensitive) end the session; blank input is rejected with
//! a retry prompt instead of touching the pipeline or the state. Pipeline
//! errors are reported and the loop continues; nothing here terminates
//! the session except the sentinels and end of input.

use crate::commands::build_client;
use crate::context::AgentContext;
use crate::error::Result;
use crate::gemini::TextGenerator;
use crate::pipeline::Agent;
use std::io::{BufRead, Write};

/// Whether a line is one of the loop-terminating sentinels.
fn is_exit_command(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "exit" | "quit")
}

/// Drive the interactive loop over arbitrary reader/writer pairs.
///
/// Split out from `cmd_chat` so tests can feed scripted input and capture
/// output without a terminal.
fn run_chat_loop<G, R, W>(agent: &mut Agent<G>, mut input: R, out: &mut W) -> Result<()>
where
    G: TextGenerator,
    R: BufRead,
    W: Write,
{
    let write_err = |e: std::io::Error| {
        crate::error::SparkError::UserError(format!("failed to write output: {}", e))
    };

    writeln!(out, "BlogSpark - Ready to spark your creativity!").map_err(write_err)?;
    writeln!(
        out,
        "Type your request (e.g. 'fun prompt about sustainable fashion for beginners')"
    )
    .map_err(write_err)?;
    writeln!(out, "Type 'exit' to quit\n").map_err(write_err)?;

    let mut line = String::new();
    loop {
        write!(out, "You: ").map_err(write_err)?;
        out.flush().map_err(write_err)?;

        line.clear();
        match input.read_line(&mut line) {
            // End of input or unreadable input both end the session.
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        if is_exit_command(&line) {
            break;
        }

        let request = line.trim_end_matches(['\r', '\n']);
        if request.trim().is_empty() {
            writeln!(out, "Agent: Please enter a valid request").map_err(write_err)?;
            continue;
        }

        match agent.run(request) {
            Ok(response) => {
                writeln!(out, "\nBlogSpark:\n{}\n", response).map_err(write_err)?;
            }
            Err(e) => {
                // Report and keep serving; there are no fatal errors here.
                writeln!(out, "Error: {}", e).map_err(write_err)?;
            }
        }
    }

    writeln!(
        out,
        "\nSession ended. Your preferences are saved for next time!"
    )
    .map_err(write_err)?;
    Ok(())
}

/// Execute the `blogspark chat` command.
pub fn cmd_chat(ctx: &AgentContext) -> Result<()> {
    let client = build_client(&ctx.config)?;
    let mut agent = Agent::new(client, ctx.state_path.clone())?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_chat_loop(&mut agent, stdin.lock(), &mut stdout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    struct CannedGenerator {
        responses: std::cell::RefCell<std::collections::VecDeque<String>>,
    }

    impl CannedGenerator {
        fn new(responses: &[&str]) -> Self {
            Self {
                responses: std::cell::RefCell::new(
                    responses.iter().map(|s| s.to_string()).collect(),
                ),
            }
        }
    }

    impl TextGenerator for CannedGenerator {
        fn generate(&self, _prompt: &str) -> String {
            self.responses
                .borrow_mut()
                .pop_front()
                .expect("canned generator ran out of responses")
        }
    }

    fn agent_with(temp: &TempDir, responses: &[&str]) -> Agent<CannedGenerator> {
        let state_path = temp.path().join("agent_state.json");
        Agent::new(CannedGenerator::new(responses), state_path).unwrap()
    }

    #[test]
    fn exit_and_quit_are_recognized_case_insensitively() {
        assert!(is_exit_command("exit"));
        assert!(is_exit_command("QUIT"));
        assert!(is_exit_command("  Exit  "));
        assert!(!is_exit_command("exits"));
        assert!(!is_exit_command("please exit"));
    }

    #[test]
    fn exit_ends_the_loop_with_a_farewell() {
        let temp = TempDir::new().unwrap();
        let mut agent = agent_with(&temp, &[]);
        let mut out = Vec::new();

        run_chat_loop(&mut agent, Cursor::new("exit\n"), &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Ready to spark your creativity"));
        assert!(output.contains("Session ended"));
    }

    #[test]
    fn end_of_input_ends_the_loop() {
        let temp = TempDir::new().unwrap();
        let mut agent = agent_with(&temp, &[]);
        let mut out = Vec::new();

        run_chat_loop(&mut agent, Cursor::new(""), &mut out).unwrap();

        assert!(String::from_utf8(out).unwrap().contains("Session ended"));
    }

    #[test]
    fn blank_input_is_rejected_with_a_retry_prompt() {
        let temp = TempDir::new().unwrap();
        let mut agent = agent_with(&temp, &[]);
        let mut out = Vec::new();

        run_chat_loop(&mut agent, Cursor::new("   \nquit\n"), &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Please enter a valid request"));
        // No pipeline call happened, so the state stays empty.
        assert!(agent.state().history.is_empty());
    }

    #[test]
    fn a_request_runs_the_pipeline_and_prints_the_result() {
        let temp = TempDir::new().unwrap();
        let mut agent = agent_with(
            &temp,
            &[
                r#"{"topic": "tea", "tone": "calm", "constraints": ""}"#,
                "the plan",
                "your finished prompt",
            ],
        );
        let mut out = Vec::new();

        run_chat_loop(
            &mut agent,
            Cursor::new("a prompt about tea\nexit\n"),
            &mut out,
        )
        .unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("BlogSpark:\nyour finished prompt"));
        assert_eq!(agent.state().niches, vec!["tea"]);
    }

    #[test]
    fn multiple_requests_are_served_in_one_session() {
        let temp = TempDir::new().unwrap();
        let mut agent = agent_with(
            &temp,
            &[
                r#"{"topic": "tea", "tone": "", "constraints": ""}"#,
                "plan one",
                "prompt one",
                r#"{"topic": "coffee", "tone": "", "constraints": ""}"#,
                "plan two",
                "prompt two",
            ],
        );
        let mut out = Vec::new();

        run_chat_loop(
            &mut agent,
            Cursor::new("about tea\nabout coffee\nexit\n"),
            &mut out,
        )
        .unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("prompt one"));
        assert!(output.contains("prompt two"));
        assert_eq!(agent.state().niches, vec!["tea", "coffee"]);
        assert_eq!(agent.state().history.len(), 2);
    }
}
