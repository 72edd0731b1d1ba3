//! Runs the full device lifecycle against a live API: add, list, update,
//! delete, then a lookup that is expected to miss.
//!
//! ```text
//! RUST_LOG=debug cargo run --example walkthrough
//! DEVICE_API_URL=http://localhost:8080/api cargo run --example walkthrough
//! ```
//!
//! Failures are only reported through the log; the process always exits 0.

use std::env;

use device_client::{DeviceClient, DEFAULT_BASE_URL};
use serde_json::Value;

fn print_json(label: &str, value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(pretty) => println!("{label}: {pretty}"),
        Err(_) => println!("{label}: {value}"),
    }
}

#[tokio::main]
async fn main() {
    // Enable logging
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let base_url = env::var("DEVICE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    println!("Device Management Walkthrough");
    println!("=============================");
    println!("API: {base_url}");

    let client = match DeviceClient::new(&base_url) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Could not create client: {e}");
            return;
        }
    };

    println!("\n1. Adding a device");
    if let Some(created) = client.add_device("Router-Principal", "Core-Gateway").await {
        print_json("Response JSON", &created);
        if let Some(id) = created.get("id") {
            println!("Assigned id: {id}");
        }
    }

    println!("\n2. Listing devices");
    if let Some(listing) = client.list_devices(2).await {
        print_json("Response JSON", &listing);
    }

    println!("\n3. Updating device 2");
    if let Some(updated) = client.update_device(2, "Switch-Acceso-01", "Capa 2").await {
        print_json("Response JSON", &updated);
    }

    println!("\n4. Deleting device 2");
    client.delete_device(2).await;

    println!("\n5. Probing a page that does not exist");
    client.list_devices(999).await;
}
