use alphadex::cli::run_app;

fn main() {
    env_logger::init();

    if let Err(e) = run_app() {
        eprintln!("{e}");
    }
}
