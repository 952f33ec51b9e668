#[tokio::main]
async fn main() -> anyhow::Result<()> {
    lexibridge_server::start().await
}
