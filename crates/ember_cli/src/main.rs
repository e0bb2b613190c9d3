mod args;
mod commands;
mod logging;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() {
    let args = match args::parse_args(std::env::args().skip(1)) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    logging::init();
    tracing::debug!(cmd = %args.cmd, max_capacity = ?args.max_capacity, "starting");

    match args.cmd.as_str() {
        "demo" => commands::demo::run(&args),
        "chars" => commands::seq::chars(&args),
        "ints" => commands::seq::ints(&args),
        _ => {
            eprintln!("Unknown command: {}", args.cmd);
            eprintln!("{}", args::usage());
            std::process::exit(2);
        }
    }
}
