use std::ffi::OsStr;

/// What a single invocation does, decided from the raw arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print the usage screen. Never touches the data file.
    Help,
    /// Print every fact, numbered.
    List,
    /// Print one fact chosen at random.
    Random,
}

impl Mode {
    /// Pick the mode from the arguments following the program name.
    ///
    /// `--help`/`-h` wins over `--all` wherever they appear. Anything else
    /// is ignored.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut list = false;
        for arg in args {
            match arg.as_ref().to_str() {
                Some("--help" | "-h") => return Mode::Help,
                Some("--all") => list = true,
                _ => {}
            }
        }
        if list { Mode::List } else { Mode::Random }
    }
}
