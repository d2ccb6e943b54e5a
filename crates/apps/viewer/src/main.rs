use std::collections::HashSet;
use std::env;
use std::sync::Arc;

use clap::Parser;
use cluster::GridParams;
use fetch::{FetchConfig, FetchUpdate, OpenApiSource, SessionController};
use model::{DEFAULT_ZOOM, IconId, MapPoint};
use surface::{
    MapSurface, MemorySurface, StaticPermissions, StaticProvider, locate_or_default,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless viewer for the Seoul public-restroom dataset")]
struct Args {
    /// Open-data API key (falls back to SEOUL_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Open-data API base URL
    #[arg(long, default_value = "http://openapi.seoul.go.kr:8088")]
    base: String,

    /// Dataset service name
    #[arg(long, default_value = "SearchPublicToiletPOIService")]
    service: String,

    /// Records per page request (the service caps slices at 1000)
    #[arg(long, default_value_t = 1000)]
    step: u32,

    /// Zoom level for the cluster summary
    #[arg(long, default_value_t = 17)]
    zoom: u8,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let api_key = args
        .api_key
        .or_else(|| env::var("SEOUL_API_KEY").ok())
        .unwrap_or_else(|| {
            error!("No API key: pass --api-key or set SEOUL_API_KEY");
            std::process::exit(2);
        });

    let source = Arc::new(OpenApiSource::new(
        reqwest::Client::new(),
        &args.base,
        &api_key,
        &args.service,
    ));

    let mut surface = MemorySurface::new();

    // Headless run: no platform location service, so this lands on City Hall.
    let target = locate_or_default(&StaticProvider::empty(), &StaticPermissions::none());
    surface.move_camera(target, DEFAULT_ZOOM);
    info!(lat = target.lat, lon = target.lon, "camera placed");

    let mut controller = SessionController::new();
    let mut updates = controller.start(source, FetchConfig { step: args.step });

    surface.clear();
    let mut points: Vec<MapPoint> = Vec::new();

    while let Some(update) = updates.recv().await {
        match update {
            FetchUpdate::Page(page) => {
                for record in &page.records {
                    let point = record.to_point(IconId::RESTROOM);
                    surface.add_marker(point.clone());
                    points.push(point);
                }
                info!(
                    rows = page.len(),
                    fetched = points.len(),
                    total = page.total_count,
                    "page rendered"
                );
            }
            FetchUpdate::Completed { total_fetched } => {
                info!(total_fetched, "fetch complete");
            }
            FetchUpdate::Cancelled { total_fetched } => {
                warn!(total_fetched, "fetch cancelled");
            }
            FetchUpdate::Failed { message } => {
                error!("fetch failed: {message}");
                std::process::exit(1);
            }
        }
    }

    let unique: HashSet<&MapPoint> = points.iter().collect();
    let clusters = cluster::cluster(&points, GridParams::at_zoom(args.zoom));
    let singletons = clusters.iter().filter(|c| c.is_singleton()).count();
    info!(
        markers = surface.markers().len(),
        unique = unique.len(),
        clusters = clusters.len(),
        singletons,
        zoom = args.zoom,
        "cluster summary"
    );
}
