use rustyline::{
    Config as RustyConfig, Editor, error::ReadlineError,
    completion::{Completer, Pair},
    hint::{Hinter, HistoryHinter},
    highlight::{Highlighter, MatchingBracketHighlighter, CmdKind},
    validate::Validator,
    Helper, history::FileHistory
};
use colored::Colorize;
use crate::{config::Config, llm::LlmClient, roles};

const COMMANDS: [&str; 4] = ["role", "roles", "help", "exit"];

struct AigenHelper {
    roles: Vec<String>,
    hinter: HistoryHinter,
    bracket_highlighter: MatchingBracketHighlighter,
}

impl Helper for AigenHelper {}

impl Completer for AigenHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let before_cursor = &line[..pos];

        // After "role " - complete role labels
        if let Some(arg) = before_cursor.strip_prefix("role ") {
            let start = pos - arg.len();
            let candidates: Vec<Pair> = self
                .roles
                .iter()
                .filter(|role| role.starts_with(arg))
                .map(|role| Pair {
                    display: role.clone(),
                    replacement: role.clone(),
                })
                .collect();
            return Ok((start, candidates));
        }

        // At start of line - complete command words
        if !before_cursor.contains(' ') {
            let candidates: Vec<Pair> = COMMANDS
                .iter()
                .filter(|cmd| cmd.starts_with(before_cursor))
                .map(|cmd| Pair {
                    display: cmd.to_string(),
                    replacement: cmd.to_string(),
                })
                .collect();
            return Ok((0, candidates));
        }

        Ok((pos, Vec::new()))
    }
}

impl Hinter for AigenHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &rustyline::Context<'_>) -> Option<String> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Highlighter for AigenHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> std::borrow::Cow<'h, str> {
        std::borrow::Cow::Owned(hint.truecolor(128, 128, 128).to_string())
    }

    fn highlight<'l>(&self, line: &'l str, pos: usize) -> std::borrow::Cow<'l, str> {
        self.bracket_highlighter.highlight(line, pos)
    }

    fn highlight_char(&self, line: &str, pos: usize, forced: CmdKind) -> bool {
        self.bracket_highlighter.highlight_char(line, pos, forced)
    }
}

impl Validator for AigenHelper {}

#[derive(Debug, PartialEq, Eq)]
pub enum Action<'a> {
    Exit,
    Help,
    ListRoles,
    SelectRole(&'a str),
    Blank,
    Query(&'a str),
}

pub fn parse_input(line: &str) -> Action<'_> {
    let input = line.trim();
    match input {
        "" => Action::Blank,
        "exit" => Action::Exit,
        "help" => Action::Help,
        "role" | "roles" => Action::ListRoles,
        _ => {
            if let Some(arg) = input.strip_prefix("role ") {
                Action::SelectRole(arg.trim())
            } else {
                Action::Query(input)
            }
        }
    }
}

pub fn run_cli(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let client = LlmClient::new(&config);
    let mut role = config.role.clone();

    let rusty_config = RustyConfig::builder()
        .completion_type(rustyline::CompletionType::List)
        .build();

    let mut rl: Editor<AigenHelper, FileHistory> = Editor::with_config(rusty_config)?;
    rl.set_helper(Some(AigenHelper {
        roles: config.roles.clone(),
        hinter: HistoryHinter {},
        bracket_highlighter: MatchingBracketHighlighter::new(),
    }));

    loop {
        match rl.readline(&format!("aigen [{}]> ", role).green()) {
            Ok(line) => {
                let input = line.trim();
                rl.add_history_entry(input)?;
                match parse_input(input) {
                    Action::Exit => break,
                    Action::Help => println!(
                        "{}",
                        "Workflow:\n\
                        - Pick a system role, enter your instruction and wait for the answer\n\
                        \n\
                        Available commands:\n\
                        - role <name|number>: Select the system role used for the next requests\n\
                        - roles: List the available system roles\n\
                        - exit: Exit the program\n\
                        - help: Show this help message\n"
                            .blue()
                    ),
                    Action::ListRoles => {
                        println!("{}", "Available roles:".yellow());
                        for (i, label) in config.roles.iter().enumerate() {
                            let marker = if *label == role { "*" } else { " " };
                            println!(" {} {}. {}", marker, i + 1, label.white());
                        }
                    }
                    Action::SelectRole(selector) => match roles::resolve(&config.roles, selector) {
                        Some(selected) => {
                            role = selected.to_string();
                            println!("{}", format!("Role set to: {}", role).yellow());
                        }
                        None => println!(
                            "{}",
                            format!("Unknown role: '{}'. Use 'roles' to list the available roles.", selector).red()
                        ),
                    },
                    Action::Blank => println!("{}", "Please enter a prompt.".yellow()),
                    Action::Query(query) => {
                        println!("{}", "Calling the LLM...".truecolor(128, 128, 128));
                        match client.generate(&role, query) {
                            Ok(answer) => println!("{}", answer.white()),
                            Err(e) => println!(
                                "{}",
                                format!("Failed to generate an answer: {}", e).red()
                            ),
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(Box::new(e)),
        }
    }

    println!("{}", "Goodbye!".blue());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_whitespace_input_send_nothing() {
        assert_eq!(parse_input(""), Action::Blank);
        assert_eq!(parse_input("   "), Action::Blank);
        assert_eq!(parse_input("\t \t"), Action::Blank);
    }

    #[test]
    fn command_words_are_recognized() {
        assert_eq!(parse_input("exit"), Action::Exit);
        assert_eq!(parse_input("help"), Action::Help);
        assert_eq!(parse_input("roles"), Action::ListRoles);
        assert_eq!(parse_input("role"), Action::ListRoles);
        assert_eq!(parse_input("role 2"), Action::SelectRole("2"));
        assert_eq!(parse_input("role Web開発者"), Action::SelectRole("Web開発者"));
    }

    #[test]
    fn everything_else_is_a_query() {
        assert_eq!(parse_input("Pythonとは何ですか？"), Action::Query("Pythonとは何ですか？"));
        assert_eq!(parse_input("  explain traits  "), Action::Query("explain traits"));
        // a query that merely starts with a command word still goes to the model
        assert_eq!(parse_input("roles of a scrum master"), Action::Query("roles of a scrum master"));
    }
}
