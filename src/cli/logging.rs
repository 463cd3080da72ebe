use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

/// Writes logs at or above `level` to stderr, each line prefixed as a DIMACS comment.
pub fn init(level: LevelFilter) {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("c {l} [{t}] {m}{n}")))
        .build();

    let config = match Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
    {
        Ok(config) => config,
        Err(e) => {
            println!("c Failed to configure logging: {e}");
            return;
        }
    };

    if let Err(e) = log4rs::init_config(config) {
        println!("c Failed to start logging: {e}");
    }
}
