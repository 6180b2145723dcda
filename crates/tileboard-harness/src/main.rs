#![forbid(unsafe_code)]

fn main() {
    tileboard_harness::logging::init();
    match tileboard_harness::run_from_env() {
        Ok(output) => println!("{output}"),
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(error.exit_code());
        }
    }
}
