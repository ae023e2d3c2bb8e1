// src/bin/airq-poll/main.rs

mod args;

use std::{process::ExitCode, thread};

use anyhow::{Context as _, Result};
use args::Args;
use clap::Parser as _;
use iaq_uart::{
    input::{InputConfig, MeasurementInput},
    poller::{SensorPoller, SerialPortChannel},
    SensorReading,
};
use log::{info, warn};

fn main() -> ExitCode {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("{e:#}");
        return ExitCode::from(1);
    }

    ExitCode::from(0)
}

fn run() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args)?;
    info!("Input config: {:#?}", config);

    let mut poller = <SensorPoller<SerialPortChannel> as MeasurementInput>::open(&config)
        .context("failed to open sensor")?;

    let mut polls: u64 = 0;
    loop {
        match MeasurementInput::poll(&mut poller) {
            Ok(reading) => report(&reading),
            Err(e) => warn!("no reading this period: {e}"),
        }

        polls += 1;
        if args.count.is_some_and(|n| polls >= n) {
            break;
        }

        thread::sleep(config.period());
    }

    Ok(())
}

fn load_config(args: &Args) -> Result<InputConfig> {
    let mut input_config = match &args.config {
        Some(path) => config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()
            .with_context(|| format!("failed to read configuration file {path}"))?
            .try_deserialize::<InputConfig>()
            .context("invalid configuration")?,
        None => InputConfig::default(),
    };

    if let Some(device) = &args.device {
        input_config.uart_location = device.clone();
    }
    if let Some(baud) = args.baud {
        input_config.baud_rate = baud;
    }
    if let Some(fields) = args.fields {
        input_config.measurements = fields;
    }
    if let Some(period) = args.period {
        input_config.period = period;
    }

    input_config.validate().context("invalid configuration")?;
    Ok(input_config)
}

fn report(reading: &SensorReading) {
    for channel in reading.channels() {
        let flag = if channel.valid { "" } else { " (invalid)" };
        info!(
            "{} {}: {} {}{}",
            reading.received_at.to_rfc3339(),
            channel.descriptor.measurement,
            channel.value,
            channel.descriptor.unit,
            flag
        );
    }
}
