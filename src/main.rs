use clap::Parser;
use colored::*;
use std::io::{self, Write};
use std::process;

use deskmate::cli::Args;
use deskmate::config::Config;
use deskmate::models::{Message, Session};
use deskmate::orchestrator::run_turn;
use deskmate::tools::ToolRegistry;
use deskmate::ui::display_content;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = match Config::from_env_and_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    let registry = if config.tools_enabled {
        ToolRegistry::from_config(&config)
    } else {
        ToolRegistry::new()
    };

    if config.verbose {
        eprintln!("{}", format!("[ai] using model: {}", config.model).dimmed());
        eprintln!(
            "{}",
            format!("[tools] registered: {}", registry.names().join(", ")).dimmed()
        );
    }

    let mut session = Session::new();
    let date_prompt = format!("Today's date is {}.", Config::current_date());
    let system_content = match &config.system_prompt {
        Some(prompt) => format!("{}\n\n{}", date_prompt, prompt),
        None => date_prompt,
    };
    session.push(Message {
        role: "system".to_string(),
        content: Some(system_content),
        tool_calls: None,
        tool_call_id: None,
    });

    // One-shot mode: answer the query from the command line and exit.
    if !args.query.is_empty() {
        let query = args.query.join(" ");
        match run_turn(&config, &registry, &mut session, &query).await {
            Ok(answer) => display_content(&answer),
            Err(e) => {
                eprintln!("{} {}", "Error:".red(), e);
                process::exit(1);
            }
        }
        return;
    }

    println!(
        "{}",
        "deskmate — weather, news, stocks and messages over chat".cyan()
    );
    println!("{}", "Type 'exit' or 'quit' to leave.".dimmed());

    loop {
        print!("{} ", "you ›".yellow());
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("{} {}", "Error:".red(), e);
                break;
            }
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        if input == "exit" || input == "quit" {
            break;
        }

        // A failed turn is reported and the shell keeps going; the history
        // accumulated so far stays usable for the next line.
        match run_turn(&config, &registry, &mut session, input).await {
            Ok(answer) => {
                display_content(&answer);
                println!();
            }
            Err(e) => eprintln!("{} {}", "Error:".red(), e),
        }
    }
}
