use std::io::Write;

use crate::{find_repo, Cli, Result};

use clap::{App, Arg, ArgMatches, Error, ErrorKind, SubCommand};
use minigit::config;

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("config")
        .about("Get or set a repository option")
        .arg(
            Arg::with_name("name")
                .required(true)
                .help("The option to read or write, as section.key"),
        )
        .arg(Arg::with_name("value").help("The new value; omit to print the current one"))
}

pub(crate) fn run(cli: &mut Cli, args: &ArgMatches) -> Result<()> {
    let name = args.value_of("name").unwrap();
    let (section, key) = split_name(name)?;

    let mut repo = find_repo::from_path(cli.resolve("."))?;

    match args.value_of("value") {
        Some(value) => {
            repo.config_mut()?.set(section, key, value);
            repo.save_config()?;
        }
        None => {
            let value = repo
                .config()
                .and_then(|c| c.get(section, key))
                .ok_or_else(|| config::Error::MissingKey {
                    section: section.to_owned(),
                    key: key.to_owned(),
                })?;
            writeln!(cli, "{}", value)?;
        }
    }

    Ok(())
}

fn split_name(name: &str) -> Result<(&str, &str)> {
    match name.rfind('.') {
        Some(i) if i > 0 && i + 1 < name.len() => Ok((&name[..i], &name[i + 1..])),
        _ => Err(Box::new(Error {
            message: format!("key does not contain a section: {}", name),
            kind: ErrorKind::InvalidValue,
            info: None,
        })),
    }
}
