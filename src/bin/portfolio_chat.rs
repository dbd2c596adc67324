use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use portfolio_assistant::chat::{AnswerView, ChatMessage, ChatRole, Pacing};
use portfolio_assistant::config::load_or_default;
use portfolio_assistant::logging::init_logging;
use portfolio_assistant::{
    ChatSession, ChatView, PlaceholderAssistant, ProfileLoader, ProfileSource, ProfileStore,
};

const THINKING_LABEL: &str = "assistant is thinking...";

fn main() -> Result<()> {
    let args = CliArgs::parse()?;
    let mut config = load_or_default()?;
    if let Some(path) = args.profile.clone() {
        config.profile.document_path = path;
    }
    let _logger = init_logging(&config.logging)?;

    let store = Arc::new(ProfileStore::new());
    let loader = ProfileLoader::new(ProfileSource::file(&config.profile.document_path));
    let load = loader.spawn(Arc::clone(&store))?;

    let mut session = ChatSession::from_config(&config, store, Box::new(PlaceholderAssistant));
    if args.no_delay {
        session = session.with_pacing(Pacing::none());
    }
    let mut view = TerminalView::default();

    if args.ask.is_some() || args.quick.is_some() {
        // One-shot answers should see the loaded document.
        load.join()
            .map_err(|_| anyhow!("Profile loader thread panicked"))?;
        view.echo_user = true;
        view.expand_answers = true;
        if let Some(query) = args.ask.as_deref() {
            session.submit(query, &mut view);
        }
        if let Some(position) = args.quick {
            session.ask_quick(position, &mut view)?;
        }
        return Ok(());
    }

    run_repl(&mut session, &mut view)
}

fn run_repl(session: &mut ChatSession, view: &mut TerminalView) -> Result<()> {
    println!("Ask me about projects, skills, experience, tools, or education.");
    print_quick_questions(session);
    println!("Commands: /quick [N], /more, /remote <prompt>, /help, /quit");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("you> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read from stdin")?;
        let input = line.trim();

        match Command::parse(input) {
            Command::Quit => break,
            Command::Help => print_help(),
            Command::ListQuick => print_quick_questions(session),
            Command::Quick(position) => {
                view.echo_user = true;
                if let Err(err) = session.ask_quick(position, view) {
                    println!("{err}");
                }
                view.echo_user = false;
            }
            Command::More => view.print_detail(),
            Command::Remote(prompt) => match session.remote_preview(prompt) {
                Ok(reply) => println!("remote> {}", reply.text),
                Err(err) => println!("{err}"),
            },
            Command::Unknown(command) => {
                println!("Unknown command `{command}`. Type /help for the list.")
            }
            Command::Query(query) => {
                session.submit(query, view);
            }
        }
    }
    Ok(())
}

enum Command<'a> {
    Quit,
    Help,
    ListQuick,
    Quick(usize),
    More,
    Remote(&'a str),
    Unknown(&'a str),
    Query(&'a str),
}

impl<'a> Command<'a> {
    fn parse(input: &'a str) -> Self {
        if !input.starts_with('/') {
            return Self::Query(input);
        }
        let (command, rest) = input
            .split_once(char::is_whitespace)
            .map(|(command, rest)| (command, rest.trim()))
            .unwrap_or((input, ""));
        match command {
            "/quit" | "/exit" => Self::Quit,
            "/help" => Self::Help,
            "/more" => Self::More,
            "/remote" => Self::Remote(rest),
            "/quick" if rest.is_empty() => Self::ListQuick,
            "/quick" => match rest.parse::<usize>() {
                Ok(position) => Self::Quick(position),
                Err(_) => Self::Unknown(input),
            },
            _ => Self::Unknown(input),
        }
    }
}

#[derive(Default)]
struct TerminalView {
    echo_user: bool,
    expand_answers: bool,
    last_detail: Option<String>,
}

impl TerminalView {
    fn print_detail(&mut self) {
        match self.last_detail.take() {
            Some(detail) => println!("{detail}"),
            None => println!("Nothing more to show."),
        }
    }
}

impl ChatView for TerminalView {
    fn show_message(&mut self, message: &ChatMessage) {
        match message.role {
            ChatRole::User => {
                if self.echo_user {
                    println!("you> {}", message.text);
                }
            }
            ChatRole::Assistant if self.expand_answers => {
                println!("ai> {}", message.text.trim_end());
            }
            ChatRole::Assistant => {
                let view = AnswerView::from_text(&message.text);
                if view.is_expandable() {
                    println!("ai> {} (more)", view.summary);
                } else {
                    println!("ai> {}", view.summary);
                }
                self.last_detail = view.detail;
            }
        }
    }

    fn show_thinking(&mut self) {
        print!("{THINKING_LABEL}");
        let _ = io::stdout().flush();
    }

    fn clear_thinking(&mut self) {
        print!("\r{}\r", " ".repeat(THINKING_LABEL.len()));
        let _ = io::stdout().flush();
    }
}

fn print_quick_questions(session: &ChatSession) {
    if session.quick_questions().is_empty() {
        return;
    }
    println!("Quick questions:");
    for (position, question) in session.quick_questions().iter() {
        println!("  {position}. {question}");
    }
}

fn print_help() {
    println!("Type a question, or use one of:");
    println!("  /quick        List the quick questions");
    println!("  /quick <N>    Ask quick question N");
    println!("  /more         Show the rest of the last answer");
    println!("  /remote <p>   Send a prompt to the remote assistant (if enabled)");
    println!("  /quit         Leave the chat");
}

struct CliArgs {
    profile: Option<PathBuf>,
    ask: Option<String>,
    quick: Option<usize>,
    no_delay: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut profile = None;
        let mut ask = None;
        let mut quick = None;
        let mut no_delay = false;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--profile" => {
                    let value = args
                        .next()
                        .context("Expected a document path after --profile")?;
                    profile = Some(PathBuf::from(value));
                }
                "--ask" => {
                    let value = args.next().context("Expected a question after --ask")?;
                    ask = Some(value);
                }
                "--quick" => {
                    let value = args
                        .next()
                        .context("Expected a quick question number after --quick")?;
                    let position = value
                        .parse::<usize>()
                        .with_context(|| format!("Invalid quick question number '{value}'"))?;
                    quick = Some(position);
                }
                "--no-delay" => no_delay = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => {
                    return Err(anyhow!(
                        "Unknown argument '{other}'. Run with --help for usage instructions."
                    ));
                }
            }
        }
        Ok(Self {
            profile,
            ask,
            quick,
            no_delay,
        })
    }
}

fn print_usage() {
    println!("Portfolio assistant chat");
    println!("Answers questions about the portfolio owner from a static profile document.");
    println!("Usage: portfolio-chat [options]");
    println!("Options:");
    println!("  --profile <path>   Profile document to load (default: config profile.document_path)");
    println!("  --ask <question>   Answer one question and exit");
    println!("  --quick <N>        Ask quick question N and exit");
    println!("  --no-delay         Skip the thinking delay");
}
