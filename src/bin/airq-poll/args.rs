// src/bin/airq-poll/args.rs

use clap::Parser;
use iaq_uart::FieldSelection;

/// Poll a serial air-quality monitor once per period and log its readings
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Configuration file (any format the `config` crate understands)
    #[arg(short, long, env = "AIRQ_CONFIG")]
    pub config: Option<String>,

    /// Serial device path
    #[arg(long, env = "AIRQ_DEVICE")]
    pub device: Option<String>,

    /// Baud rate
    #[arg(long)]
    pub baud: Option<u32>,

    /// Comma separated channels to report: co2, voc, temperature, humidity
    #[arg(long)]
    pub fields: Option<FieldSelection>,

    /// Sampling period in seconds
    #[arg(long)]
    pub period: Option<u64>,

    /// Stop after this many polls
    #[arg(long)]
    pub count: Option<u64>,
}
