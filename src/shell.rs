//! Line-oriented command shell driving the orchestrator.
//!
//! The thread running the shell is the main sequence: commands call the
//! orchestrator directly, and completions posted by background saves are
//! drained between commands.

use crate::content::{ContentHandle, ContentKind, ContentTag};
use crate::main_sequence::MainSequence;
use crate::orchestrator::Control;
use crate::pane::Region;
use crate::save::spawn_save;
use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;

const HELP: &str = "\
commands:
  terminal        show the terminal on the left pane
  files           toggle the file browser on the right pane
  open <path>     open an editor for <path>
  scratch         open an editor without a file
  write <text>    append a line to the visible editor
  save            save the visible editor and close it
  close           close the visible editor
  editors         list open editors
  focus <n>       show open editor number <n>
  ls              list the file browser's directory
  status          show pane and pool state
  quit            leave the shell";

/// One parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Terminal,
    Files,
    Open(PathBuf),
    Scratch,
    Write(String),
    Save,
    Close,
    Editors,
    Focus(usize),
    Ls,
    Status,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines and `#` comments yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, String> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word {
            "terminal" => Command::Terminal,
            "files" => Command::Files,
            "open" if rest.is_empty() => return Err("usage: open <path>".to_string()),
            "open" => Command::Open(PathBuf::from(rest)),
            "scratch" => Command::Scratch,
            "write" => Command::Write(rest.to_string()),
            "save" => Command::Save,
            "close" => Command::Close,
            "editors" => Command::Editors,
            "focus" => match rest.parse::<usize>() {
                Ok(n) if n >= 1 => Command::Focus(n),
                _ => return Err("usage: focus <n> (see `editors`)".to_string()),
            },
            "ls" => Command::Ls,
            "status" => Command::Status,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(format!("unknown command '{other}' (try `help`)")),
        };
        Ok(Some(command))
    }
}

pub struct Shell<'a> {
    sequence: &'a mut MainSequence,
    runtime: tokio::runtime::Handle,
}

impl<'a> Shell<'a> {
    pub fn new(sequence: &'a mut MainSequence, runtime: tokio::runtime::Handle) -> Self {
        Self { sequence, runtime }
    }

    /// Read commands until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            match Command::parse(&line) {
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => self.execute(command, &mut out)?,
                Ok(None) => {}
                Err(e) => writeln!(out, "error: {e}")?,
            }
            self.sequence.pump(None);
            if self.sequence.is_stopped() {
                break;
            }
        }
        out.flush()?;
        Ok(())
    }

    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<()> {
        crate::debug_log!("SHELL", "{:?}", command);
        let orch = std::sync::Arc::clone(self.sequence.orchestrator());
        match command {
            Command::Terminal => report(out, orch.dispatch_input(Control::TerminalButton))?,
            Command::Files => report(out, orch.dispatch_input(Control::FileBrowserButton))?,
            Command::Open(path) => report(out, orch.open_editor(Some(&path)))?,
            Command::Scratch => report(out, orch.open_editor(None))?,
            Command::Write(text) => match self.visible_editor() {
                Some(editor) => {
                    if let Some(doc) = editor.view().as_document() {
                        let mut contents = doc.contents();
                        contents.push_str(&text);
                        contents.push('\n');
                        doc.set_contents(&contents);
                    }
                }
                None => writeln!(out, "error: no editor is visible")?,
            },
            Command::Save => match self.visible_editor() {
                Some(editor) => {
                    let poster = self.sequence.poster();
                    if let Some(job) = spawn_save(&self.runtime, editor.clone(), poster) {
                        if let Err(e) = self.runtime.block_on(job) {
                            writeln!(out, "error: save task failed: {e}")?;
                        }
                        self.sequence.pump(None);
                        if orch.is_live(&editor) {
                            writeln!(out, "error: could not save {}", editor.tag())?;
                        } else {
                            writeln!(out, "saved {}", editor.tag())?;
                        }
                    } else {
                        writeln!(out, "error: {} cannot be saved", editor.tag())?;
                    }
                }
                None => writeln!(out, "error: no editor is visible")?,
            },
            Command::Close => match self.visible_editor() {
                Some(editor) => {
                    orch.remove(&editor);
                    report(out, orch.switch_to(ContentKind::Terminal))?;
                }
                None => writeln!(out, "error: no editor is visible")?,
            },
            Command::Editors => {
                let visible = self.visible_editor();
                let tags = orch.editor_tags();
                if tags.is_empty() {
                    writeln!(out, "no editors open")?;
                }
                for (i, tag) in tags.iter().enumerate() {
                    let marker = match &visible {
                        Some(v) if v.tag() == tag => "*",
                        _ => " ",
                    };
                    writeln!(out, "{marker} {}. {tag}", i + 1)?;
                }
            }
            Command::Focus(n) => {
                let handle = orch
                    .editor_tags()
                    .get(n - 1)
                    .and_then(|tag| orch.lookup(tag));
                match handle {
                    Some(editor) => report(out, orch.focus_editor(&editor))?,
                    None => writeln!(out, "error: no editor number {n}")?,
                }
            }
            Command::Ls => {
                let listing = orch
                    .lookup(&ContentTag::FileBrowser)
                    .and_then(|h| h.view().as_listing().map(|l| (l.root(), l.entries())));
                match listing {
                    Some((root, entries)) => {
                        writeln!(out, "{}:", root.display())?;
                        for entry in entries {
                            writeln!(out, "  {entry}")?;
                        }
                    }
                    None => writeln!(out, "error: file browser not open (try `files`)")?,
                }
            }
            Command::Status => {
                for region in Region::all() {
                    let snap = orch.snapshot(region);
                    let content = orch
                        .currently_bound(region)
                        .map(|h| format!("{} \"{}\"", h.tag(), h.view().title()))
                        .unwrap_or_else(|| "empty".to_string());
                    let state = if snap.visible { "visible" } else { "hidden" };
                    writeln!(out, "{region}: {content} ({state})")?;
                }
                let pool = orch.pool();
                writeln!(
                    out,
                    "editors: {} open, {} of {} permits free ({})",
                    orch.live_editors(),
                    pool.available(),
                    pool.capacity(),
                    orch.acquire_mode().display_name()
                )?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => {}
        }
        Ok(())
    }

    /// Editor shown on the Left pane, if any
    fn visible_editor(&self) -> Option<ContentHandle> {
        let orch = self.sequence.orchestrator();
        orch.currently_bound(Region::Left)
            .filter(|h| h.kind() == ContentKind::Editor && orch.is_visible(Region::Left))
    }
}

fn report<T, E: std::fmt::Display, W: Write>(
    out: &mut W,
    result: std::result::Result<T, E>,
) -> Result<()> {
    if let Err(e) = result {
        writeln!(out, "error: {e}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("terminal"), Ok(Some(Command::Terminal)));
        assert_eq!(
            Command::parse("  open notes/todo.md "),
            Ok(Some(Command::Open(PathBuf::from("notes/todo.md"))))
        );
        assert_eq!(
            Command::parse("write hello world"),
            Ok(Some(Command::Write("hello world".to_string())))
        );
        assert_eq!(Command::parse("focus 2"), Ok(Some(Command::Focus(2))));
        assert_eq!(Command::parse("exit"), Ok(Some(Command::Quit)));
    }

    #[test]
    fn test_parse_blank_and_comments() {
        assert_eq!(Command::parse(""), Ok(None));
        assert_eq!(Command::parse("   # note"), Ok(None));
    }

    #[test]
    fn test_parse_errors() {
        assert!(Command::parse("open").is_err());
        assert!(Command::parse("focus 0").is_err());
        assert!(Command::parse("focus x").is_err());
        assert!(Command::parse("dance").unwrap_err().contains("dance"));
    }
}
