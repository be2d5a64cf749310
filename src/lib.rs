pub mod play;
pub mod players;
pub mod symbols;

/// One-time process-wide logger initialization.
///
/// The terminal carries Info and above so interactive play stays readable;
/// logs/roshambo.log carries the full Debug trace of each session.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        simplelog::Config::default(),
        std::fs::File::create("logs/roshambo.log").expect("create log file"),
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
