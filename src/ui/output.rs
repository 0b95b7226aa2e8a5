use colored::Colorize;

/// Print the final assistant answer.
pub fn display_content(content: &str) {
    println!("{}", content.trim_end());
}

pub fn display_tool_call(name: &str) {
    println!("{}", format!("Calling tool: {}...", name).cyan());
}

/// Show a tool result between dimmed rules so it reads apart from the
/// assistant's own text.
pub fn display_tool_result(name: &str, result: &str) {
    println!("{}", format!("── tool: {} ──", name).dimmed());
    println!("{}", result.trim_end().dimmed());
    println!("{}", "──".dimmed());
}

pub fn display_tool_error(name: &str, error: &str) {
    println!("{}", format!("── tool error: {} ──", name).red());
    println!("{}", error.trim_end().red());
    println!("{}", "──".dimmed());
}
