use crate::models::{
    DemandLevel, GeoPoint, MarketBand, RateBasis, RateFactors, RateSuggestion, SuggestedRates,
    WorkerProfile,
};

/// Comparable workers are drawn from this radius around the requested location
pub const RATE_RADIUS_M: f64 = 25_000.0;

/// Comparable workers are within this many years of the requested experience
pub const EXPERIENCE_WINDOW_YEARS: u32 = 2;

/// Rates rise 5% per year of experience
const EXPERIENCE_STEP: f64 = 0.05;

/// Project quotes assume a five day job
const PROJECT_DAYS: f64 = 5.0;

/// Working hours in a day, used to put daily rates on the hourly scale
const HOURS_PER_DAY: f64 = 8.0;

/// Fallback market band around the base hourly rate
const DEFAULT_MARKET_MIN_FACTOR: f64 = 0.8;
const DEFAULT_MARKET_MAX_FACTOR: f64 = 1.5;

/// Base (hourly, daily) rates in INR when no local market data exists
const DEFAULT_RATES: &[(&str, f64, f64)] = &[
    ("Carpenter", 150.0, 800.0),
    ("Plumber", 120.0, 700.0),
    ("Electrician", 180.0, 900.0),
    ("Painter", 100.0, 600.0),
    ("Mason", 130.0, 750.0),
    ("Cleaner", 80.0, 500.0),
    ("Gardner", 90.0, 550.0),
    ("Driver", 150.0, 800.0),
    ("Cook", 120.0, 700.0),
    ("Security Guard", 100.0, 600.0),
    ("Handyman", 110.0, 650.0),
    ("Welder", 160.0, 850.0),
];

const FALLBACK_RATE: (f64, f64) = (100.0, 600.0);

/// Base (hourly, daily) rate for a skill, falling back for unknown skills
pub fn default_base_rate(skill: &str) -> (f64, f64) {
    DEFAULT_RATES
        .iter()
        .find(|(name, _, _)| *name == skill)
        .map(|(_, hourly, daily)| (*hourly, *daily))
        .unwrap_or(FALLBACK_RATE)
}

#[inline]
pub fn experience_multiplier(experience_years: u32) -> f64 {
    1.0 + experience_years as f64 * EXPERIENCE_STEP
}

/// Fewer comparable workers means scarcer supply and higher demand
pub fn demand_level(comparable_count: usize) -> DemandLevel {
    if comparable_count < 5 {
        DemandLevel::High
    } else if comparable_count < 15 {
        DemandLevel::Medium
    } else {
        DemandLevel::Low
    }
}

/// Experience window for comparable workers, saturating at zero
pub fn experience_window(experience_years: u32) -> (u32, u32) {
    (
        experience_years.saturating_sub(EXPERIENCE_WINDOW_YEARS),
        experience_years.saturating_add(EXPERIENCE_WINDOW_YEARS),
    )
}

/// Build a rate suggestion from comparable workers
///
/// With no comparables (or no usable positive rates) the static table is
/// used instead; the demand level still reflects how many comparables exist.
pub fn suggest_rates(
    skill: &str,
    experience_years: u32,
    location: GeoPoint,
    comparables: &[WorkerProfile],
) -> RateSuggestion {
    let multiplier = experience_multiplier(experience_years);

    let hourly: Vec<f64> = comparables.iter().map(|p| p.rate.hourly).filter(|r| *r > 0.0).collect();
    let daily: Vec<f64> = comparables.iter().map(|p| p.rate.daily).filter(|r| *r > 0.0).collect();

    let (suggested, market, basis) = match (mean(&hourly), mean(&daily)) {
        (Some(avg_hourly), Some(avg_daily)) => {
            let pooled = hourly
                .iter()
                .copied()
                .chain(daily.iter().map(|d| d / HOURS_PER_DAY));
            let (min, max) = pooled.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
                (lo.min(r), hi.max(r))
            });

            (
                scaled_rates(avg_hourly, avg_daily, multiplier),
                MarketBand {
                    min,
                    max,
                    avg: (avg_hourly + avg_daily / HOURS_PER_DAY) / 2.0,
                },
                RateBasis::Market,
            )
        }
        _ => {
            let (base_hourly, base_daily) = default_base_rate(skill);
            (
                scaled_rates(base_hourly, base_daily, multiplier),
                MarketBand {
                    min: (base_hourly * DEFAULT_MARKET_MIN_FACTOR).round(),
                    max: (base_hourly * DEFAULT_MARKET_MAX_FACTOR).round(),
                    avg: base_hourly,
                },
                RateBasis::Default,
            )
        }
    };

    let demand = if comparables.is_empty() {
        DemandLevel::Medium
    } else {
        demand_level(comparables.len())
    };

    RateSuggestion {
        suggested,
        market,
        factors: RateFactors {
            skill: skill.to_string(),
            experience: experience_years,
            location,
            basis,
            comparables: comparables.len(),
            demand,
        },
    }
}

fn scaled_rates(hourly: f64, daily: f64, multiplier: f64) -> SuggestedRates {
    SuggestedRates {
        hourly: round_rate(hourly * multiplier),
        daily: round_rate(daily * multiplier),
        project: round_rate(daily * multiplier * PROJECT_DAYS),
    }
}

#[inline]
fn round_rate(value: f64) -> u32 {
    value.round().clamp(0.0, u32::MAX as f64) as u32
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
