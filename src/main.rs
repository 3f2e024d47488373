use std::error::Error;
use std::time::Instant;

use castlejau::{RenderConfig, Renderer};
use log::{info, LevelFilter};
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

/// Sends log records at `level` and above to stdout
fn init_log(level: LevelFilter) -> Result<(), Box<dyn Error>> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}",
        )))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    init_log(LevelFilter::Info)?;
    let start_time = Instant::now();

    let mut renderer = Renderer::new(
        [
            [100.0, 300.0],
            [300.0, 500.0],
            [500.0, 500.0],
            [400.0, 50.0],
            [300.0, 100.0],
            [200.0, 250.0],
        ],
        RenderConfig::default(),
    )?;
    renderer.draw_all();
    renderer.save()?;

    info!("Time: {} seconds", start_time.elapsed().as_secs_f64());
    Ok(())
}
