//! Terminal styling utilities

use console::{style, Emoji};

use crate::converter::{ConversionMode, FormatOptions};

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static CLIPBOARD: Emoji<'_, '_> = Emoji("📋 ", "");
pub static ARROW: Emoji<'_, '_> = Emoji("➜ ", "> ");

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {} {}",
        style("bitconv").cyan().bold(),
        style(format!("v{}", version)).dim()
    );
    println!("    {}", style("Decimal ⇄ binary, any size").dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print the active mode and options as a single settings line
pub fn print_settings(mode: ConversionMode, options: &FormatOptions) {
    let flag = |on: bool, name: &str| {
        if on {
            style(format!("[x] {}", name)).green().to_string()
        } else {
            style(format!("[ ] {}", name)).dim().to_string()
        }
    };

    println!(
        "    {} {}  {}  {}  {}",
        style(mode.title()).cyan().bold(),
        style("│").dim(),
        flag(options.prefix, "prefix"),
        flag(options.group, "group"),
        flag(options.trim, "trim"),
    );
}

/// Print a conversion result
pub fn print_result(input: &str, output: &str, show_input: bool) {
    if show_input {
        println!("{} {}{}", style(input).dim(), ARROW, style(output).green().bold());
    } else {
        println!("{}", output);
    }
}

/// Print an error message to stderr
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print the clipboard confirmation to stderr
pub fn print_copied() {
    eprintln!("{}{}", CLIPBOARD, style("Result copied.").green());
}
