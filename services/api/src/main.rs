#[tokio::main]
async fn main() {
    if let Err(error) = holland_inventory_api::run().await {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
