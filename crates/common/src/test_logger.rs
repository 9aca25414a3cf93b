/// Logger for tests. Safe to call from every test, only the first call
/// installs it
pub fn init_logger() {
    let _ = simplelog::TermLogger::init(
        log::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
}
