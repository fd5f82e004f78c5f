fn main() {
    if let Err(err) = fly::run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}
