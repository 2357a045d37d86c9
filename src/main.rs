//! RAX Mod Sandbox - Entry Point
//!
//! Evaluates one filesystem access query against the configured sandbox
//! policy, for auditing an installation from the command line.

use env_logger;
use log::{error, info};
use std::process::ExitCode;

use rax_mod_sandbox::config::SecurityConfig;
use rax_mod_sandbox::guard::ScriptCaller;

fn main() -> ExitCode {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (caller_arg, mode, path) = match args.as_slice() {
        [caller, mode, path] => (caller.as_str(), mode.as_str(), path.as_str()),
        _ => {
            eprintln!("usage: rax-mod-sandbox <mod-name|--builtin> <read|write> <path>");
            return ExitCode::from(2);
        }
    };

    let write_required = match mode {
        "read" => false,
        "write" => true,
        _ => {
            eprintln!("access mode must be 'read' or 'write', got '{}'", mode);
            return ExitCode::from(2);
        }
    };

    let config = match SecurityConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return ExitCode::from(2);
        }
    };

    let policy = match config.build_policy() {
        Ok(policy) => policy,
        Err(e) => {
            error!("Failed to build sandbox policy: {}", e);
            return ExitCode::from(2);
        }
    };

    let caller = if caller_arg == "--builtin" {
        ScriptCaller::Builtin
    } else {
        ScriptCaller::from_mod_name(caller_arg)
    };

    let decision = policy.check_path(path, write_required, &caller);
    info!("{:?} {} {:?} -> {:?}", caller, mode, path, decision);

    if decision.permits(write_required) {
        if decision.write_allowed {
            println!("ALLOW (write)");
        } else {
            println!("ALLOW (read-only)");
        }
        ExitCode::SUCCESS
    } else {
        println!("DENY");
        ExitCode::FAILURE
    }
}
