#[tokio::main]
async fn main() {
    agendly_backend::run().await;
}
