use ember_core::SeqConfig;

pub(crate) struct CliArgs {
    pub cmd: String,
    pub max_capacity: Option<usize>,
    pub stats: bool,
    pub positional: Vec<String>,
}

impl CliArgs {
    pub fn seq_config(&self) -> SeqConfig {
        SeqConfig {
            max_capacity: self.max_capacity,
        }
    }
}

pub(crate) fn usage() -> &'static str {
    "Usage: ember <demo|chars|ints> [--max-capacity <n>] [--stats] <args>"
}

/// Parses everything after the program name. Options may appear anywhere
/// after the command; a lone `-3` is a positional value, not an option.
pub(crate) fn parse_args<I>(argv: I) -> Result<CliArgs, String>
where
    I: IntoIterator<Item = String>,
{
    let mut argv = argv.into_iter();
    let cmd = argv.next().ok_or_else(|| usage().to_string())?;

    let mut max_capacity = None;
    let mut stats = false;
    let mut positional: Vec<String> = Vec::new();

    while let Some(a) = argv.next() {
        if a == "--stats" {
            stats = true;
        } else if a == "--max-capacity" {
            let v = argv
                .next()
                .ok_or_else(|| "Missing value for --max-capacity".to_string())?;
            let n = v
                .parse::<usize>()
                .map_err(|_| format!("Invalid value for --max-capacity: {v}"))?;
            max_capacity = Some(n);
        } else if a.starts_with("--") {
            return Err(format!("Unknown option: {a}"));
        } else {
            positional.push(a);
        }
    }

    Ok(CliArgs {
        cmd,
        max_capacity,
        stats,
        positional,
    })
}
