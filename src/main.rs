use clap::Parser;
use ipv4_subnet_calc::config::Config;
use ipv4_subnet_calc::run;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use std::error::Error;
use std::path::Path;

fn init_logging(log_config: &str) -> Result<(), Box<dyn Error>> {
    if Path::new(log_config).exists() {
        log4rs::init_file(log_config, Default::default())?;
    } else {
        // no config file, warnings and errors to stderr
        let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
        let config = log4rs::Config::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
        log4rs::init_config(config)?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::parse();
    init_logging(&config.log_config)?;
    //
    log::info!("#Start main()");
    log::debug!("config: {config:?}");

    run(&config)?;

    Ok(())
}
