#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CommandError {
    #[error("Given String doesn't match any command.")]
    UnmatchingCommand,
    #[error("Command could not be serialized: {0}")]
    Unserializable(String),
}
