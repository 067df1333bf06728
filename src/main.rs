use clap::Parser;
use dotenv::dotenv;
use foggy_fork_backend::config::Config;
use foggy_fork_backend::controller::{self, AppState};
use foggy_fork_backend::repositories::truck_data_repo::TruckDataRepo;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();

    let truck_repo = TruckDataRepo::new(&config)?;
    controller::serve(AppState::new(truck_repo), &config).await
}
