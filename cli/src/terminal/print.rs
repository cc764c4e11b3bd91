use std::fmt::Display;
use std::io::{self, Write};

use crate::terminal::colors;
use colored::*;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

const BANNER: &str = r#"
           _  __ ___  _   _  _   _  ___  _
          | |/ /| __|| \ | || \ | || __|| |
          | ' < | _| |  \| ||  \| || _| | |__
          |_|\_\|___||_|\_||_|\_||___||____|
"#;

pub fn banner<W: Write>(out: &mut W, show: bool) -> io::Result<()> {
    if !show {
        return Ok(());
    }

    let text_content: String = format!("⟦ KENNEL v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═"
        .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
        .bright_black();

    writeln!(out, "{}{}{}", sep, text, sep)?;
    writeln!(out, "{}", BANNER.bright_green())?;
    centerln(out, "Welcome to the animal register!")
}

pub fn header<W: Write>(out: &mut W, msg: &str, q_level: u8) -> io::Result<()> {
    if q_level > 0 {
        return Ok(());
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    writeln!(out, "{}", line)
}

pub fn fat_separator<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR))
}

pub fn status<W: Write, T: AsRef<str>>(out: &mut W, msg: T) -> io::Result<()> {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    writeln!(out, "{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT))
}

pub fn success<W: Write, T: AsRef<str>>(out: &mut W, msg: T) -> io::Result<()> {
    writeln!(out, "{} {}", "[+]".green().bold(), msg.as_ref())
}

pub fn error<W: Write, T: Display>(out: &mut W, msg: T) -> io::Result<()> {
    writeln!(out, "{} {}", "[-]".red().bold(), format!("Error: {msg}").red())
}

pub fn tree_head<W: Write>(out: &mut W, idx: usize, name: &str) -> io::Result<()> {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    writeln!(
        out,
        "{} {}",
        idx_str.color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    )
}

/// Prints `(key, value)` pairs as one tree level with the keys padded to the
/// widest one.
pub fn as_tree_one_level<W: Write>(
    out: &mut W,
    key_value_pair: &[(String, ColoredString)],
) -> io::Result<()> {
    let key_width: usize = key_value_pair
        .iter()
        .map(|(key, _)| UnicodeWidthStr::width(key.as_str()))
        .max()
        .unwrap_or(0);

    for (i, (key, value)) in key_value_pair.iter().enumerate() {
        let last: bool = i + 1 == key_value_pair.len();
        let branch: ColoredString = if !last {
            "├─".bright_black()
        } else {
            "└─".bright_black()
        };
        let dots: String = ".".repeat(key_width - UnicodeWidthStr::width(key.as_str()));
        writeln!(
            out,
            " {} {}{}{} {}",
            branch,
            key.color(colors::TEXT_DEFAULT),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        )?;
    }
    Ok(())
}

pub fn centerln<W: Write>(out: &mut W, msg: &str) -> io::Result<()> {
    let space: String = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    writeln!(out, "{}{}{}", space, msg, space)
}

pub fn end_of_program<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR))
}
