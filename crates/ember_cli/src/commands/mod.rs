use std::io;

use ember_core::{Element, GrowSeq};

pub(crate) mod demo;
pub(crate) mod seq;

/// Prints `seq` on its own line. A closed stdout ends the process quietly;
/// any other write error exits with status 2.
pub(crate) fn emit_seq<T: Element>(seq: &GrowSeq<T>) {
    if let Err(e) = seq.print() {
        exit_on_write_error(e);
    }
}

pub(crate) fn emit_stats<T: Element>(seq: &GrowSeq<T>) {
    eprintln!("length={} capacity={}", seq.len(), seq.capacity());
}

pub(crate) fn exit_on_write_error(e: io::Error) -> ! {
    if e.kind() == io::ErrorKind::BrokenPipe {
        std::process::exit(0);
    }
    eprintln!("stdout error: {e}");
    std::process::exit(2);
}
