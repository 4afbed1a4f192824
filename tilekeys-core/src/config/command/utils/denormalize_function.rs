use crate::config::Command;

use super::normalized_command::NormalizedCommand;

pub struct DenormalizeCommandFunction(pub fn(&NormalizedCommand) -> Option<Box<dyn Command>>);

impl DenormalizeCommandFunction {
    #[must_use]
    pub const fn new<T: Command + 'static>() -> Self {
        Self(denormalize_boxed::<T>)
    }
}

fn denormalize_boxed<T: Command + 'static>(
    normalized: &NormalizedCommand,
) -> Option<Box<dyn Command>> {
    T::denormalize(normalized).map(|cmd| cmd as Box<dyn Command>)
}
