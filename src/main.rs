fn main() {
    if let Err(err) = closet_layout::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
