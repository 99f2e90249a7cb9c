use std::process;

fn main() {
    process::exit(prun::cli::run());
}
