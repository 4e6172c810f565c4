fn main() {
    let code = new_project::run_cli();
    if code != 0 {
        std::process::exit(code);
    }
}
