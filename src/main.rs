use gardenguide::{
    logic::{grid::GridGeometry, watering::WateringStatus, zone::zone_compatibility},
    store::{GardenStorage, JsonFileStore},
    Config, Garden, HardinessZoneTracker, SystemClock,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let store = JsonFileStore::open(&config.data_dir)?;
    let garden = Garden::load(GardenStorage::new(store.clone()), SystemClock)
        .with_geometry(GridGeometry::new(0.0, 0.0, config.cell_size));
    let zone = HardinessZoneTracker::load(GardenStorage::new(store))
        .with_timeout(config.geolocation_timeout);

    println!("🌱 Garden data in {}", config.data_dir.display());
    match zone.zone_data() {
        Some(z) => println!("   Hardiness zone {} ({})", z.zone, z.description),
        None => println!("   No hardiness zone set"),
    }
    println!("   {} garden bed(s)", garden.beds().len());
    let cell = garden.geometry().cell_size;
    for bed in garden.beds() {
        println!(
            "   • {} ({}×{}, {} plants, {}×{} px)",
            bed.name,
            bed.width,
            bed.height,
            bed.plants.len(),
            f64::from(bed.width) * cell,
            f64::from(bed.height) * cell
        );
    }

    let worklist = garden.watering_worklist();
    if worklist.is_empty() {
        println!("💧 Nothing to water.");
        return Ok(());
    }

    let summary = garden.watering_summary();
    println!(
        "💧 {} overdue, {} due today, {} upcoming",
        summary.overdue, summary.due_today, summary.upcoming
    );
    for item in &worklist {
        let status = match item.status {
            WateringStatus::Overdue => "OVERDUE ",
            WateringStatus::DueToday => "today   ",
            WateringStatus::DueTomorrow => "tomorrow",
            WateringStatus::Upcoming => "upcoming",
        };
        let fit = zone
            .zone_number()
            .map(|z| format!(" [{:?}]", zone_compatibility(&item.plant.id, z)))
            .unwrap_or_default();
        println!(
            "   {status} {} {} in {}{fit}",
            item.plant.emoji, item.plant.name, item.bed.name
        );
    }
    Ok(())
}
