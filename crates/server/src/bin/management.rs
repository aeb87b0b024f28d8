use log::error;
use server::{app::run, config::Service};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    if let Err(err) = run(Service::Management).await {
        error!("{err}");
        std::process::exit(1);
    }
}
