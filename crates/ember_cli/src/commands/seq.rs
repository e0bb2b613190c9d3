use ember_core::{CharSeq, IntSeq};

use crate::args::CliArgs;
use crate::commands::{emit_seq, emit_stats};

/// Adds every argument to one character sequence and prints it.
pub(crate) fn chars(args: &CliArgs) {
    let mut seq = CharSeq::make_with(args.seq_config());
    for text in &args.positional {
        seq.add(text);
    }
    emit_seq(&seq);
    if args.stats {
        emit_stats(&seq);
    }
}

pub(crate) fn ints(args: &CliArgs) {
    let values = match parse_ints(&args.positional) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    let mut seq = IntSeq::make_with(args.seq_config());
    seq.add(&values);
    emit_seq(&seq);
    if args.stats {
        emit_stats(&seq);
    }
}

fn parse_ints(raw: &[String]) -> Result<Vec<i32>, String> {
    raw.iter()
        .map(|s| {
            s.parse::<i32>()
                .map_err(|_| format!("Invalid integer: {s}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_ints;

    #[test]
    fn parses_signed_values_in_order() {
        let raw = vec!["3".to_string(), "-1".to_string(), "0".to_string()];
        assert_eq!(parse_ints(&raw).unwrap(), vec![3, -1, 0]);
    }

    #[test]
    fn reports_the_first_bad_value() {
        let raw = vec!["1".to_string(), "x".to_string(), "99999999999".to_string()];
        assert_eq!(parse_ints(&raw).unwrap_err(), "Invalid integer: x");
    }
}
