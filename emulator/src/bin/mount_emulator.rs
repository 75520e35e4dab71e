//! LX200 mount emulator over TCP or a local serial port.
//!
//! Exposes the simulated mount to any LX200 client (planetarium software,
//! INDI/ASCOM drivers) on a TCP socket or a serial device. Mount state
//! lives for the lifetime of the process; TCP clients can disconnect and
//! reconnect without resetting the pointing direction.

use std::net::TcpListener;

use anyhow::Result;
use clap::{Parser, Subcommand};
use emulator::{
    run_session, LogIndicator, Mount, SerialTransport, StatusIndicator, SystemClock, TcpTransport,
};
use tracing::{info, warn};

/// Default TCP listen address.
const DEFAULT_LISTEN: &str = "127.0.0.1:4030";

/// Default serial baud rate (the LX200's native 9600 8N1).
const DEFAULT_BAUD: u32 = 9600;

/// LX200 telescope mount emulator
#[derive(Parser, Debug)]
#[command(name = "mount_emulator")]
#[command(about = "Emulates an LX200 mount controller")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve LX200 clients over TCP
    Tcp {
        /// Address to listen on
        #[arg(short, long, default_value = DEFAULT_LISTEN)]
        listen: String,
    },

    /// Serve LX200 clients over a serial port
    Serial {
        /// Serial device path (e.g. /dev/ttyUSB0)
        port: String,

        /// Baud rate
        #[arg(short, long, default_value_t = DEFAULT_BAUD)]
        baud: u32,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let clock = SystemClock::new();
    let mut mount = Mount::new();
    let mut indicator = StatusIndicator::new();
    let mut output = LogIndicator::default();

    match args.command {
        Command::Tcp { listen } => {
            let listener = TcpListener::bind(&listen)?;
            info!("listening on {}", listen);

            for stream in listener.incoming() {
                let stream = stream?;
                info!("client connected: {}", stream.peer_addr()?);
                let mut transport = TcpTransport::new(stream)?;
                if let Err(e) = run_session(
                    &mut transport,
                    &mut mount,
                    &mut indicator,
                    &mut output,
                    &clock,
                ) {
                    warn!("session ended: {}", e);
                }
            }
            Ok(())
        }
        Command::Serial { port, baud } => {
            info!("serving on {} at {} baud", port, baud);
            let mut transport = SerialTransport::open(&port, baud)?;
            run_session(
                &mut transport,
                &mut mount,
                &mut indicator,
                &mut output,
                &clock,
            )?;
            Ok(())
        }
    }
}
