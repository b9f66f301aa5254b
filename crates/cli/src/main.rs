fn main() {
    if let Err(e) = abmaker_cli::run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
