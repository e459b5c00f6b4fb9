use clap::Parser;
use greet_ages::utils::logger;
use greet_ages::{Greeter, Target};
use std::io::{self, Write};

#[derive(Parser)]
#[command(name = "mega-greeter")]
#[command(about = "Greet and say goodbye to nobody, one name, or a list of names")]
struct Args {
    /// Names to greet; with none, the built-in demonstration is replayed
    names: Vec<String>,

    /// Treat a single name as a one-element list
    #[arg(short, long, requires = "names")]
    list: bool,

    /// Greet nobody
    #[arg(long, conflicts_with_all = ["names", "list"])]
    nobody: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn target(&self) -> Option<Target> {
        if self.nobody {
            return Some(Target::Absent);
        }
        match self.names.as_slice() {
            [] => None,
            [name] if !self.list => Some(Target::Scalar(name.clone())),
            names => Some(Target::Sequence(names.to_vec())),
        }
    }
}

fn say_hi_and_bye<W: Write>(greeter: &Greeter, out: &mut W) -> io::Result<()> {
    tracing::debug!("Target: {:?}", greeter.target());
    greeter.write_greeting(out)?;
    greeter.write_farewell(out)
}

fn run_demo<W: Write>(out: &mut W) -> io::Result<()> {
    let mut greeter = Greeter::default();
    say_hi_and_bye(&greeter, out)?;

    greeter.set_target("Zeek");
    say_hi_and_bye(&greeter, out)?;

    greeter.set_target(vec!["Albert", "Brenda", "Charles III", "Dave", "Engelbert"]);
    say_hi_and_bye(&greeter, out)?;

    greeter.set_target(Target::Absent);
    say_hi_and_bye(&greeter, out)
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.target() {
        Some(target) => say_hi_and_bye(&Greeter::new(target), &mut out),
        None => {
            tracing::debug!("No names given, replaying demonstration");
            run_demo(&mut out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target_of(argv: &[&str]) -> Option<Target> {
        Args::try_parse_from(argv).unwrap().target()
    }

    #[test]
    fn test_no_names_replays_demo() {
        assert_eq!(target_of(&["mega-greeter"]), None);
    }

    #[test]
    fn test_flags_select_target_shape() {
        assert_eq!(target_of(&["mega-greeter", "--nobody"]), Some(Target::Absent));
        assert_eq!(
            target_of(&["mega-greeter", "Zeek"]),
            Some(Target::Scalar("Zeek".to_string()))
        );
        assert_eq!(
            target_of(&["mega-greeter", "--list", "Zeek"]),
            Some(Target::Sequence(vec!["Zeek".to_string()]))
        );
        assert_eq!(
            target_of(&["mega-greeter", "Albert", "Brenda"]),
            Some(Target::Sequence(vec!["Albert".to_string(), "Brenda".to_string()]))
        );
    }

    #[test]
    fn test_conflicting_flags_are_rejected() {
        assert!(Args::try_parse_from(["mega-greeter", "--list"]).is_err());
        assert!(Args::try_parse_from(["mega-greeter", "--nobody", "Zeek"]).is_err());
    }

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        run_demo(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.first(), Some(&"Hello World!"));
        assert!(lines.contains(&"Goodbye Albert, Brenda, Charles III, Dave, Engelbert. Come back soon."));
        assert_eq!(&lines[lines.len() - 2..], ["...but no one answered.", "...but nobody answered."]);
    }
}
