use std::process::{Child, Stdio};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, TileError};

use super::{Command, CommandError, DenormalizeCommandFunction, Kind, NormalizedCommand};

inventory::submit! {DenormalizeCommandFunction::new::<Spawn>()}

/// Starts an external program. The command line is split into argv, it is
/// not handed to a shell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Spawn {
    pub command: String,
}

impl Spawn {
    pub fn new<T: ToString>(command: T) -> Self {
        Self {
            command: command.to_string(),
        }
    }

    /// Splits the command line the way a POSIX shell splits words. Single
    /// quotes keep everything literal. Inside double quotes a backslash only
    /// escapes `"`, `\`, `$` and `` ` ``; outside of quotes it escapes any
    /// char.
    ///
    /// # Errors
    ///
    /// Errors on a quote that is never closed or a trailing backslash.
    pub fn argv(&self) -> Result<Vec<String>> {
        let mut argv = Vec::new();
        let mut word = String::new();
        let mut in_word = false;
        let mut quote: Option<char> = None;
        let mut chars = self.command.chars().peekable();

        while let Some(c) = chars.next() {
            match (quote, c) {
                (Some('\''), '\'') | (Some('"'), '"') => quote = None,
                (Some('"'), '\\') => match chars.peek() {
                    Some(&next @ ('"' | '\\' | '$' | '`')) => {
                        word.push(next);
                        chars.next();
                    }
                    _ => word.push('\\'),
                },
                (None, '\\') => {
                    let escaped = chars
                        .next()
                        .ok_or_else(|| TileError::DanglingEscape(self.command.clone()))?;
                    word.push(escaped);
                    in_word = true;
                }
                (Some(_), c) => word.push(c),
                (None, '\'' | '"') => {
                    quote = Some(c);
                    in_word = true;
                }
                (None, c) if c.is_whitespace() => {
                    if in_word {
                        argv.push(std::mem::take(&mut word));
                        in_word = false;
                    }
                }
                (None, c) => {
                    word.push(c);
                    in_word = true;
                }
            }
        }
        if quote.is_some() {
            return Err(TileError::UnterminatedQuote(self.command.clone()));
        }
        if in_word {
            argv.push(word);
        }
        Ok(argv)
    }
}

impl Command for Spawn {
    fn normalize(&self) -> std::result::Result<NormalizedCommand, CommandError> {
        NormalizedCommand::from_command(self)
    }

    fn denormalize(generalized: &NormalizedCommand) -> Option<Box<Self>> {
        generalized.to_command()
    }

    fn describe(&self) -> String {
        format!("spawn({:?})", self.command)
    }

    fn kind(&self) -> Kind {
        Kind::Spawn
    }

    fn execute(&self) -> Result<Child> {
        let argv = self.argv()?;
        let (program, args) = argv.split_first().ok_or(TileError::EmptySpawn)?;
        let child = std::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .spawn()?;
        tracing::debug!("Spawned `{}` as pid {}", self.command, child.id());
        Ok(child)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Command;
    use crate::errors::TileError;

    use super::Spawn;

    #[test]
    fn normalize_process() {
        let command = Spawn::new("alacritty --command btm");

        let normalized = command.normalize().unwrap();
        let denormalized = Spawn::denormalize(&normalized).unwrap();

        assert_eq!(
            Box::new(command.clone()),
            denormalized,
            "{:?}, {:?}",
            normalized,
            denormalized,
        );
    }

    #[test]
    fn argv_splits_on_whitespace() {
        let command = Spawn::new("brightnessctl  set +10%");
        assert_eq!(command.argv().unwrap(), vec!["brightnessctl", "set", "+10%"]);
    }

    #[test]
    fn argv_keeps_quoted_words_together() {
        let command = Spawn::new(
            r#"alacritty --working-directory "/home/me/My Projects" -e 'nvim config.py'"#,
        );
        assert_eq!(
            command.argv().unwrap(),
            vec![
                "alacritty",
                "--working-directory",
                "/home/me/My Projects",
                "-e",
                "nvim config.py"
            ]
        );
    }

    #[test]
    fn argv_keeps_empty_quoted_word() {
        let command = Spawn::new(r#"notify-send "" body\ text"#);
        assert_eq!(command.argv().unwrap(), vec!["notify-send", "", "body text"]);
    }

    #[test]
    fn argv_rejects_unterminated_quote() {
        let command = Spawn::new(r#"alacritty -e "nvim config.py"#);
        assert!(matches!(
            command.argv(),
            Err(TileError::UnterminatedQuote(line)) if line == command.command
        ));
        assert!(matches!(
            command.execute(),
            Err(TileError::UnterminatedQuote(_))
        ));
        assert!(matches!(
            Spawn::new("echo 'a").argv(),
            Err(TileError::UnterminatedQuote(_))
        ));
    }

    #[test]
    fn argv_rejects_trailing_backslash() {
        assert!(matches!(
            Spawn::new(r"echo a\").argv(),
            Err(TileError::DanglingEscape(_))
        ));
    }

    #[test]
    fn backslash_in_double_quotes_only_escapes_specials() {
        let command = Spawn::new(r#"echo "a\b" "c\"d" "e\\f" "\$HOME" 'g\h'"#);
        assert_eq!(
            command.argv().unwrap(),
            vec!["echo", r"a\b", r#"c"d"#, r"e\f", "$HOME", r"g\h"]
        );
    }

    #[test]
    fn execute_without_program_errors() {
        let command = Spawn::new("   ");
        assert!(matches!(command.execute(), Err(TileError::EmptySpawn)));
    }
}
