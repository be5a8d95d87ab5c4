use std::{
    io::Write,
    path::{Path, PathBuf},
};

use crate::{cmds, Result};

use clap::{crate_version, App, AppSettings, Arg, ArgMatches};

pub(crate) fn app<'a, 'b>() -> App<'a, 'b> {
    let app = App::new("minigit")
        .version(crate_version!())
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .setting(AppSettings::VersionlessSubcommands)
        .arg(
            Arg::with_name("C")
                .short("C")
                .takes_value(true)
                .value_name("path")
                .help("Run as if minigit was started in <path>"),
        );

    cmds::add_subcommands(app)
}

/// Parsed command line plus the stream that command output goes to.
pub(crate) struct Cli<'a> {
    pub arg_matches: ArgMatches<'a>,
    pub stdout: &'a mut dyn Write,
}

impl<'a> Cli<'a> {
    pub fn run(&mut self) -> Result<()> {
        cmds::dispatch(self)
    }

    // Interpret a path from the command line relative to `-C`, if given.
    pub fn resolve<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        let path = path.as_ref();
        match self.arg_matches.value_of("C") {
            Some(dir) if path == Path::new(".") => PathBuf::from(dir),
            Some(dir) => Path::new(dir).join(path),
            None => path.to_path_buf(),
        }
    }

    // Run a command line as if started in `dir` and capture what it prints.
    #[cfg(test)]
    pub fn run_in<P: AsRef<Path>>(dir: P, args: &[&str]) -> Result<String> {
        let dir = dir.as_ref().to_str().unwrap();

        let mut argv = vec!["minigit", "-C", dir];
        argv.extend_from_slice(args);

        let mut stdout = Vec::new();

        Cli {
            arg_matches: app().get_matches_from_safe(argv)?,
            stdout: &mut stdout,
        }
        .run()?;

        Ok(String::from_utf8(stdout)?)
    }
}

impl<'a> Write for Cli<'a> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.stdout.write(buf)
    }

    #[cfg(not(tarpaulin_include))]
    fn flush(&mut self) -> std::io::Result<()> {
        self.stdout.flush()
    }
}
