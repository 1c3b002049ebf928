//! Rank command handler
//!
//! Loads candidates from a file or the live collaborators, resolves the
//! reference point, and prints the ranked display records.

use crate::candidate::wire::SlotPolicy;
use crate::candidate::{Candidate, CandidateKind};
use crate::config::Config;
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::format::{available_formats, get_formatter};
use crate::geo::{get_geocoder, ReferenceInput};
use crate::query::QueryTracker;
use crate::rank::{CandidateFilter, RankOptions, SortDirection, SortKey};
use crate::source::file::load_candidates;
use crate::source::http::HttpSource;
use crate::source::{
    fetch_listing_candidates, fetch_prediction_candidates, ListingQuery, PredictionQuery,
};
use crate::view::RankReport;
use clap::Args;
use std::str::FromStr;
use tracing::{debug, info};

/// Rank command arguments
#[derive(Args)]
pub struct RankArgs {
    /// Candidate kind: free (hotspots) or paid (listings)
    #[arg(long, short = 'k')]
    pub kind: Option<String>,

    /// Read candidates from a JSON file
    #[arg(long, short = 'i', conflicts_with = "fetch", required_unless_present_any = ["fetch", "list_formats"])]
    pub input: Option<String>,

    /// Fetch candidates from the configured services
    #[arg(long)]
    pub fetch: bool,

    /// Reference latitude
    #[arg(long, allow_hyphen_values = true, requires = "lng")]
    pub lat: Option<f64>,

    /// Reference longitude
    #[arg(long, allow_hyphen_values = true, requires = "lat")]
    pub lng: Option<f64>,

    /// Reference place name (geocoded)
    #[arg(long, conflicts_with_all = ["lat", "lng"])]
    pub location: Option<String>,

    /// Maximum results around the reference point
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Re-sort results: price, distance, availability or rating
    #[arg(long, short = 's')]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Minimum hourly price (listings)
    #[arg(long)]
    pub price_min: Option<f64>,

    /// Maximum hourly price (listings)
    #[arg(long)]
    pub price_max: Option<f64>,

    /// Only keep candidates within this many kilometers of the reference
    #[arg(long)]
    pub within_km: Option<f64>,

    /// Required amenity (repeatable)
    #[arg(long = "amenity")]
    pub amenities: Vec<String>,

    /// Minimum probability (hotspots)
    #[arg(long)]
    pub min_probability: Option<f64>,

    /// Slot policy: pass_through, clamp or reject
    #[arg(long)]
    pub slot_policy: Option<String>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

impl RankArgs {
    fn options(&self, limit: usize) -> Result<RankOptions> {
        let sort = match &self.sort {
            Some(key) => {
                let key = SortKey::from_str(key).map_err(Error::Config)?;
                let direction = if self.desc {
                    SortDirection::Desc
                } else {
                    SortDirection::Asc
                };
                Some((key, direction))
            }
            None => None,
        };

        if let Some(radius) = self.within_km {
            if radius <= 0.0 {
                return Err(Error::InvalidRadius(format!(
                    "radius must be positive: {}",
                    radius
                )));
            }
        }

        Ok(RankOptions {
            limit,
            filter: CandidateFilter {
                price_min: self.price_min,
                price_max: self.price_max,
                radius_km: self.within_km,
                amenities: self.amenities.iter().cloned().collect(),
                min_probability: self.min_probability,
            },
            sort,
        })
    }
}

/// Run the rank command
pub async fn run(args: RankArgs) -> Result<()> {
    if args.list_formats {
        list_formats();
        return Ok(());
    }

    super::init_logging("warn");

    let config = Config::load()?;

    let kind = match &args.kind {
        Some(kind) => CandidateKind::from_str(kind).map_err(Error::Config)?,
        None => CandidateKind::default(),
    };
    let policy = match &args.slot_policy {
        Some(policy) => SlotPolicy::from_str(policy).map_err(Error::Config)?,
        None => config.ranking.slot_policy,
    };
    let limit = args.limit.unwrap_or_else(|| config.limit_for(kind));
    let options = args.options(limit)?;
    let format = args.format.clone().unwrap_or_else(|| config.output.format.clone());

    let formatter = get_formatter(&format)
        .ok_or_else(|| Error::Config(format!("Unknown format: {}", format)))?;

    let input = ReferenceInput::from_parts(args.lat, args.lng, args.location.clone())?;
    let geocoded = matches!(input, ReferenceInput::Place(_));
    let reference = input.resolve(&get_geocoder()?).await?;
    if let (true, Some(coords)) = (geocoded, reference) {
        eprintln!("Geocoded to: {}", coords);
    }

    let candidates = match &args.input {
        Some(path) => load_candidates(path, kind, policy)?,
        None => fetch(kind, reference, policy, &config).await?,
    };
    debug!(count = candidates.len(), %kind, "candidates loaded");

    let report = RankReport::build(kind, &candidates, reference, &options);
    let output = formatter.format(&report)?;

    if let Some(path) = args.output {
        std::fs::write(&path, &output)?;
        eprintln!("Output written to {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// Query the live collaborators around `reference`
async fn fetch(
    kind: CandidateKind,
    reference: Option<Coordinates>,
    policy: SlotPolicy,
    config: &Config,
) -> Result<Vec<Candidate>> {
    let center = reference.ok_or_else(|| {
        Error::InvalidCoordinates(
            "fetching needs a reference point (--lat/--lng or --location)".to_string(),
        )
    })?;

    let source = HttpSource::new(&config.services)?;
    let tracker = QueryTracker::new();

    info!(%center, %kind, "fetching candidates");
    let fetched = match kind {
        CandidateKind::Paid => {
            let query = ListingQuery {
                center,
                radius_meters: config.search.listing_radius_meters,
                price_min: config.search.price_min,
                price_max: config.search.price_max,
            };
            fetch_listing_candidates(&source, &query, policy, &tracker).await?
        }
        CandidateKind::Free => {
            let query = PredictionQuery {
                center,
                radius_meters: config.search.hotspot_radius_meters,
            };
            fetch_prediction_candidates(&source, &query, &tracker).await?
        }
    };

    // Only one query is ever issued here, so the result is always current
    fetched.ok_or_else(|| Error::Source("query superseded".to_string()))
}

/// Print available output formats
fn list_formats() {
    println!("Available output formats:");
    for format in available_formats() {
        println!("  {:6} - {}", format.name, format.description);
    }
}
