use campus_portal::config::Config;
use campus_portal::errors::AppError;
use campus_portal::ids::RandomIds;
use campus_portal::models::event;
use campus_portal::render;
use campus_portal::seed;
use campus_portal::store::FileStore;

fn main() -> Result<(), AppError> {
    let config = Config::from_env();
    env_logger::init();

    let mut store = FileStore::open(&config.store_path)?;
    log::info!("Using store {}", store.path().display());

    let report = seed::ensure_seed_data(&mut store, &mut RandomIds)?;
    if report.events || report.admin {
        log::info!("First run: baseline data written");
    }

    let events = event::list_upcoming(&store);
    println!("{}", render::upcoming_events(&events)?);
    Ok(())
}
