fn main() {
    if let Err(err) = asyncapi_readme::cli::run_cli() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
