use crate::domain::model::Target;
use std::io::{self, Write};

const NO_ONE_ANSWERED: &str = "...but no one answered.";
const NOBODY_ANSWERED: &str = "...but nobody answered.";

#[derive(Debug, Clone, Default)]
pub struct Greeter {
    target: Target,
}

impl Greeter {
    pub fn new(target: impl Into<Target>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn set_target(&mut self, target: impl Into<Target>) {
        self.target = target.into();
    }

    /// One line per name for a sequence, none if it is empty.
    pub fn greet(&self) -> Vec<String> {
        match &self.target {
            Target::Absent => vec![NO_ONE_ANSWERED.to_string()],
            Target::Sequence(names) => names.iter().map(|name| format!("Hello {}!", name)).collect(),
            Target::Scalar(name) => vec![format!("Hello {}!", name)],
        }
    }

    /// Always a single line; a sequence is comma-joined.
    pub fn farewell(&self) -> String {
        match &self.target {
            Target::Absent => NOBODY_ANSWERED.to_string(),
            Target::Sequence(names) => format!("Goodbye {}. Come back soon.", names.join(", ")),
            Target::Scalar(name) => format!("Goodbye {}. Come back soon.", name),
        }
    }

    pub fn write_greeting<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.greet() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    pub fn write_farewell<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.farewell())
    }
}
