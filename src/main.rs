//! Dayflow credentials - Entry Point
//!
//! Issues a login ID and a temporary password for a new employee.

use std::process::ExitCode;

use log::info;

use dayflow_credentials::utils::setup_logging;
use dayflow_credentials::{
    CredentialConfig, CredentialError, FixedSerial, LoginId, LoginIdGenerator, SerialRegistry,
    generate_password,
};

const USAGE: &str = "usage: dayflow-credentials <company> <first-name> <last-name> [serial]";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !(3..=4).contains(&args.len()) {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    }

    let serial = match args.get(3).map(|s| s.parse::<u32>()) {
        Some(Ok(serial)) => Some(serial),
        Some(Err(_)) => {
            eprintln!("serial must be a non-negative integer\n{USAGE}");
            return ExitCode::from(2);
        }
        None => None,
    };

    match run(&args[0], &args[1], &args[2], serial) {
        Ok((login_id, password)) => {
            println!("Login ID: {login_id}");
            println!("Password: {password}");
            ExitCode::SUCCESS
        }
        // logging may not be set up yet if the config failed to load
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    company: &str,
    first: &str,
    last: &str,
    serial: Option<u32>,
) -> Result<(LoginId, String), CredentialError> {
    let config = CredentialConfig::load()?;
    setup_logging(&config.log_level);

    info!("Issuing credentials for {} {} at {}", first, last, company);

    let login_id = match serial {
        Some(serial) => {
            LoginIdGenerator::with_system_clock(FixedSerial(serial)).generate(company, first, last)?
        }
        None => {
            let registry = SerialRegistry::with_max_serial(config.max_serial);
            LoginIdGenerator::with_system_clock(registry).generate(company, first, last)?
        }
    };

    Ok((login_id, generate_password()))
}
