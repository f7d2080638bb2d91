fn main() {
    if let Err(e) = equilibria_rs::adapters::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
