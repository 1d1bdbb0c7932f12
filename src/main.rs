use clap::Parser;
use rental_pager::{
    KeyEvent, KeyOutcome, ListingPage, NavigationController, Navigator, PagerConfig,
};
use rental_pager::{ExtractedListing, FieldExtractor, Result};
use serde::Serialize;
use url::Url;

mod args;
use args::{Args, Mode};

/// Stands in for the browser: reports the target instead of loading it
struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn open_in_place(&mut self, url: &Url) {
        println!("{}", url);
    }
}

/// One line of `extract` output: the listing plus its derived rent per m²
#[derive(Serialize)]
struct ListingReport<'a> {
    #[serde(flatten)]
    listing: &'a ExtractedListing,
    price_per_sqm: Option<f64>,
}

fn main() {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();
    ::log::info!("Inspecting {} as {}", args.html_file.display(), args.url);

    if let Err(e) = run(&args) {
        ::log::error!("Failed to inspect {}: {}", args.html_file.display(), e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => PagerConfig::from_file(path)?,
        None => PagerConfig::default(),
    };
    let html = std::fs::read_to_string(&args.html_file)?;
    let page = ListingPage::parse(&html, &args.url)?;

    match args.mode {
        Mode::Status => {
            let controller = NavigationController::new(PrintNavigator, config);
            println!("{}", serde_json::to_string_pretty(&controller.status(&page))?);
        }
        Mode::Extract => {
            let listings = FieldExtractor::extract_all(&page);
            let reports: Vec<_> = listings
                .iter()
                .map(|listing| ListingReport {
                    listing,
                    price_per_sqm: listing.price_per_sqm(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
        Mode::Key => {
            let mut controller = NavigationController::new(PrintNavigator, config);
            controller.enable_shortcuts(None);
            match controller.handle_key(&page, &KeyEvent::new(&args.key)) {
                KeyOutcome::Navigated(url) => ::log::debug!("Navigated to {}", url),
                KeyOutcome::Blocked(reason) => ::log::warn!("Navigation blocked: {:?}", reason),
                KeyOutcome::Ignored => ::log::warn!("Key {:?} is not bound", args.key),
            }
        }
    }
    Ok(())
}
