use std::env;
use std::process;

use pairlink_core::config::ConnectorConfig;
use pairlink_host::qr::{pairing_url, PairingParams};

fn main() {
    let mut args = env::args().skip(1);
    let (Some(session_id), Some(session_secret)) = (args.next(), args.next()) else {
        eprintln!("Usage: gen_pairing_url <session-id> <session-secret>");
        process::exit(1);
    };

    let config = match ConnectorConfig::load_from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("failed to load connector config: {err}");
            process::exit(1);
        }
    };

    let params = PairingParams::from_config(&config, &session_id, &session_secret, false);
    println!("{}", pairing_url(&params));
}
