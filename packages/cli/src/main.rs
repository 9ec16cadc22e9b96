use clap::Parser;

use dkv_client::{Endpoint, KvClient, KvResponse};

/// dkv - exercise a key-value store end to end
///
/// Runs every operation once against a live store: set, get, delete,
/// a TTL write, and both sides of a test-and-set.
#[derive(Parser, Debug)]
#[command(name = "dkv")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Store endpoint as host:port (defaults to 127.0.0.1:4001)
    endpoint: Option<String>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let endpoint = match args.endpoint {
        Some(raw) => match raw.parse::<Endpoint>() {
            Ok(endpoint) => endpoint,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => Endpoint::default(),
    };

    if let Err(e) = run(endpoint) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(endpoint: Endpoint) -> Result<(), String> {
    let client = KvClient::new(endpoint).map_err(|e| e.to_string())?;

    check("set key1=value1", client.set("key1", "value1", 0))?;

    let response = check("get key1", client.get("key1"))?;
    if response.value != "value1" {
        return Err(format!(
            "get returned '{}', expected 'value1'",
            response.value
        ));
    }

    check("delete key1", client.delete("key1"))?;

    match client.get("key1") {
        Ok(response) => {
            return Err(format!(
                "get after delete returned '{}', expected an error",
                response.value
            ))
        }
        Err(e) => println!("get key1 ... rejected as expected ({})", e),
    }

    check("set key1=value1 (ttl 5)", client.set("key1", "value1", 5))?;

    check(
        "test-and-set key1 value1 -> value2",
        client.test_and_set("key1", "value2", Some("value1"), 0),
    )?;

    match client.test_and_set("key1", "value2", Some("value1"), 0) {
        Ok(response) => {
            return Err(format!(
                "test-and-set with a stale value returned '{}', expected an error",
                response.value
            ))
        }
        Err(e) => println!("test-and-set key1 ... rejected as expected ({})", e),
    }

    println!("all checks passed against {}", client.endpoint());
    Ok(())
}

fn check(step: &str, result: dkv_client::Result<KvResponse>) -> Result<KvResponse, String> {
    match result {
        Ok(response) => {
            println!("{} ... ok (value '{}')", step, response.value);
            Ok(response)
        }
        Err(e) => Err(format!("{} failed: {}", step, e)),
    }
}
