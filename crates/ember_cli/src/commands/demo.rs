//! The sample program the compiler's test suite generates: a few user-defined
//! types built on `Text`, followed by both sequence kinds.

use std::io::Write;

use ember_core::{CharSeq, IntSeq, SeqConfig, Text};

use crate::args::CliArgs;
use crate::commands::{emit_seq, exit_on_write_error};

struct Person {
    name: Text,
}

impl Person {
    fn make(name: Text) -> Self {
        Self { name }
    }

    fn to_text(&self) -> &Text {
        &self.name
    }
}

struct Point {
    x: i32,
    y: i32,
}

struct Square {
    width: i32,
    height: i32,
}

impl Square {
    fn area(&self) -> i32 {
        self.width * self.height
    }
}

pub(crate) fn run(args: &CliArgs) {
    if let Err(e) = write_objects(&mut std::io::stdout().lock()) {
        exit_on_write_error(e);
    }
    let (chars, ints) = build_sequences(args.seq_config());
    emit_seq(&chars);
    emit_seq(&ints);
}

fn write_objects<W: Write>(out: &mut W) -> std::io::Result<()> {
    let person = Person::make(Text::make("Alex"));
    writeln!(out, "{} {}", Text::make("name:"), person.to_text())?;

    let square = Square {
        width: 5,
        height: 5,
    };
    writeln!(out, "{} {}", Text::make("area:"), square.area())?;

    let point = Point { x: 3, y: 4 };
    writeln!(out, "{} {} {}", Text::make("point:"), point.x, point.y)?;

    let msg = Text::make("Hello, World!");
    writeln!(out, "{msg}")?;
    out.flush()
}

fn build_sequences(config: SeqConfig) -> (CharSeq, IntSeq) {
    let mut chars = CharSeq::make_with(config);
    for c in ['a', 'l', 'e', 'x'] {
        chars.push(c);
    }
    let mut ints = IntSeq::make_with(config);
    for i in 1..=5 {
        ints.push(i);
    }
    (chars, ints)
}
