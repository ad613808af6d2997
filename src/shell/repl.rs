//! Read-eval loop over the numbered menus.
//!
//! File errors are printed and the loop continues; only failures of the console
//! streams themselves end [`Shell::run`]. End of input behaves like choosing exit.

use crate::config::ShellConfig;
use crate::error::{FileIoError, Result};
use crate::file_handler::{uppercase, AccessMode, FileAccess, FileSystem, OsFileSystem};
use crate::shell::menu::{MainChoice, MenuChoice, ReadChoice, WriteChoice};
use log::debug;
use std::io::{self, BufRead, Write};

const ONE_STRING: &str = "This is a test string.\n";
const FIRST_STRING: &str = "This is a text string.\n";
const SECOND_STRING: &str = "This is an another text string.\n";
const MORE_LINES: [&str; 2] = [
    "This is a third text string.\n",
    "This is a fourth text string.\n",
];
const NEW_ENDING: &str = "A new ending for my text file.\n";

/// Outcome of one prompt.
enum Prompt<C> {
    Choice(C),
    Invalid,
    Eof,
}

/// How a submenu was left.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Back,
    Quit,
}

/// Interactive console over a [`FileAccess`].
pub struct Shell<R, W, F: FileSystem = OsFileSystem> {
    access: FileAccess<F>,
    config: ShellConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write, F: FileSystem> Shell<R, W, F> {
    pub fn new(access: FileAccess<F>, config: ShellConfig, input: R, output: W) -> Self {
        Self {
            access,
            config,
            input,
            output,
        }
    }

    /// Give back the output stream, e.g. to inspect a transcript.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the main menu until "0) Exit" or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let choice = match self.prompt::<MainChoice>()? {
                Prompt::Eof => return Ok(()),
                Prompt::Invalid => continue,
                Prompt::Choice(choice) => choice,
            };
            let flow = match choice {
                MainChoice::Exit => return Ok(()),
                MainChoice::ReadMenu => self.submenu(Self::read_action)?,
                MainChoice::WriteMenu => self.submenu(Self::write_action)?,
                other => {
                    self.main_action(other)?;
                    Flow::Back
                }
            };
            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    fn submenu<C: MenuChoice>(
        &mut self,
        action: fn(&mut Self, C) -> io::Result<()>,
    ) -> io::Result<Flow> {
        loop {
            match self.prompt::<C>()? {
                Prompt::Eof => return Ok(Flow::Quit),
                Prompt::Invalid => {}
                Prompt::Choice(choice) if choice.leaves() => return Ok(Flow::Back),
                Prompt::Choice(choice) => action(self, choice)?,
            }
        }
    }

    fn prompt<C: MenuChoice>(&mut self) -> io::Result<Prompt<C>> {
        writeln!(self.output, "{}", C::MENU)?;
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(Prompt::Eof);
        }
        match C::parse(&line) {
            Some(choice) => {
                debug!("menu choice {:?}", choice);
                Ok(Prompt::Choice(choice))
            }
            None => {
                writeln!(self.output, "Invalid choice!")?;
                Ok(Prompt::Invalid)
            }
        }
    }

    fn main_action(&mut self, choice: MainChoice) -> io::Result<()> {
        let path = self.config.resolve(&self.config.read_file);
        match choice {
            MainChoice::OpenClose => match self.access.open(&path, AccessMode::Read) {
                Ok(handle) => {
                    writeln!(self.output, "file is open!")?;
                    let closed = handle.close();
                    self.report(closed, |()| "file is closed".to_string())
                }
                Err(err) => self.report_error(&err),
            },
            MainChoice::OpenCloseTry => {
                let output = &mut self.output;
                let result = self.access.with_file(&path, AccessMode::Read, |handle| {
                    Ok(writeln!(output, "file is open! ({} mode)", handle.mode()))
                });
                match result {
                    Ok(written) => {
                        written?;
                        writeln!(self.output, "file is closed")
                    }
                    Err(err) => self.report_error(&err),
                }
            }
            MainChoice::OpenCloseScoped => {
                let result = self.access.open_close(&path);
                self.report(result, |()| "file was opened and is closed".to_string())
            }
            MainChoice::Append => {
                let result = self.access.append_all(&path, NEW_ENDING);
                self.report(result, |()| format!("appended to {}", path.display()))
            }
            MainChoice::FolderPath => {
                let result = self.access.folder_path(&path);
                self.report(result, |(folder, name)| format!("({:?}, {:?})", folder, name))
            }
            MainChoice::ReadMenu | MainChoice::WriteMenu | MainChoice::Exit => Ok(()),
        }
    }

    fn read_action(&mut self, choice: ReadChoice) -> io::Result<()> {
        let path = self.config.resolve(&self.config.read_file);
        match choice {
            ReadChoice::ReadBytes => {
                let result = self.access.read_all(&path, Some(self.config.read_bytes));
                self.report(result, |content| content)
            }
            ReadChoice::ReadOneLine => {
                let result = self.access.read_line(&path);
                self.report(result, |line| line)
            }
            ReadChoice::ReadTwoLines => {
                let result = self.access.read_lines(&path, Some(2));
                self.report(result, |lines| lines.concat())
            }
            ReadChoice::ReadAllLines => {
                let result = self.access.read_lines(&path, None);
                self.report(result, |lines| format!("{:?}", lines))
            }
            ReadChoice::Back => Ok(()),
        }
    }

    fn write_action(&mut self, choice: WriteChoice) -> io::Result<()> {
        let path = self.config.resolve(&self.config.write_file);
        let wrote = |()| format!("wrote {}", path.display());
        let result = match choice {
            WriteChoice::Truncate => self.access.write_all(&path, ""),
            WriteChoice::WriteOneString => self.access.write_all(&path, ONE_STRING),
            WriteChoice::WriteTwoStrings => {
                self.access
                    .with_file(&path, AccessMode::WriteTruncate, |handle| {
                        handle.write_str(FIRST_STRING)?;
                        handle.write_str(SECOND_STRING)
                    })
            }
            WriteChoice::WriteLines => self
                .access
                .write_lines(&path, [FIRST_STRING, SECOND_STRING]),
            WriteChoice::WriteMultipleLines => {
                self.access
                    .with_file(&path, AccessMode::WriteTruncate, |handle| {
                        handle.write_lines([FIRST_STRING, SECOND_STRING])?;
                        handle.write_lines(MORE_LINES)
                    })
            }
            WriteChoice::CopyUppercase => {
                let src = self.config.resolve(&self.config.copy_from);
                let dst = self.config.resolve(&self.config.copy_to);
                let copied = self.access.copy_transform(&src, &dst, uppercase);
                return self.report(copied, |count| {
                    format!(
                        "copied {} lines from {} to {}",
                        count,
                        src.display(),
                        dst.display()
                    )
                });
            }
            WriteChoice::Back => return Ok(()),
        };
        self.report(result, wrote)
    }

    fn report<T>(&mut self, result: Result<T>, describe: impl FnOnce(T) -> String) -> io::Result<()> {
        match result {
            Ok(value) => writeln!(self.output, "{}", describe(value)),
            Err(err) => self.report_error(&err),
        }
    }

    fn report_error(&mut self, err: &FileIoError) -> io::Result<()> {
        debug!("operation failed ({}): {}", err.kind(), err);
        writeln!(self.output, "Error: {}", err)
    }
}
