fn main() -> std::process::ExitCode {
    subsort_lib::run()
}
