use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// Geographic point stored as `[longitude, latitude]` in decimal degrees
///
/// Serialized as a two-element array, matching GeoJSON coordinate order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

impl GeoPoint {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self { longitude, latitude }
    }

    /// Both components finite and within WGS84 bounds
    pub fn is_valid(&self) -> bool {
        self.longitude.is_finite()
            && self.latitude.is_finite()
            && (-180.0..=180.0).contains(&self.longitude)
            && (-90.0..=90.0).contains(&self.latitude)
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from(coords: [f64; 2]) -> Self {
        Self::new(coords[0], coords[1])
    }
}

impl From<GeoPoint> for [f64; 2] {
    fn from(point: GeoPoint) -> Self {
        [point.longitude, point.latitude]
    }
}

/// How a job pays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayType {
    Hourly,
    Daily,
    Project,
}

impl std::str::FromStr for PayType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hourly" => Ok(PayType::Hourly),
            "daily" => Ok(PayType::Daily),
            "project" => Ok(PayType::Project),
            other => Err(format!("unknown pay type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pay {
    pub amount: f64,
    #[serde(rename = "type")]
    pub pay_type: PayType,
}

/// A posted job's matching requirements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSpec {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub skills: Vec<String>,
    pub location: GeoPoint,
    pub pay: Pay,
    #[serde(rename = "startDate")]
    pub start_date: DateTime<Utc>,
}

/// Worker rate card
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateCard {
    pub hourly: f64,
    pub daily: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<f64>,
}

impl RateCard {
    /// Rate comparable to a job's pay; anything other than hourly compares against daily
    pub fn for_pay_type(&self, pay_type: PayType) -> f64 {
        match pay_type {
            PayType::Hourly => self.hourly,
            PayType::Daily | PayType::Project => self.daily,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub available: bool,
    #[serde(default)]
    pub slots: Vec<String>,
}

impl DayAvailability {
    fn open() -> Self {
        Self { available: true, slots: Vec::new() }
    }

    fn closed() -> Self {
        Self { available: false, slots: Vec::new() }
    }
}

/// Weekly availability; defaults to Monday through Saturday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeeklyAvailability {
    pub monday: DayAvailability,
    pub tuesday: DayAvailability,
    pub wednesday: DayAvailability,
    pub thursday: DayAvailability,
    pub friday: DayAvailability,
    pub saturday: DayAvailability,
    pub sunday: DayAvailability,
}

impl Default for WeeklyAvailability {
    fn default() -> Self {
        Self {
            monday: DayAvailability::open(),
            tuesday: DayAvailability::open(),
            wednesday: DayAvailability::open(),
            thursday: DayAvailability::open(),
            friday: DayAvailability::open(),
            saturday: DayAvailability::open(),
            sunday: DayAvailability::closed(),
        }
    }
}

impl WeeklyAvailability {
    pub fn day(&self, weekday: Weekday) -> &DayAvailability {
        match weekday {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    pub fn day_mut(&mut self, weekday: Weekday) -> &mut DayAvailability {
        match weekday {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        }
    }

    pub fn is_available_on(&self, weekday: Weekday) -> bool {
        self.day(weekday).available
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    pub avg: f64,
    pub count: u32,
}

/// Worker profile with skills, rates and location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerProfile {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub name: String,
    pub skills: Vec<String>,
    #[serde(rename = "experienceYears")]
    pub experience_years: u32,
    pub location: GeoPoint,
    pub rate: RateCard,
    #[serde(default)]
    pub availability: WeeklyAvailability,
    #[serde(default)]
    pub rating: Rating,
    #[serde(rename = "isAvailable", default = "default_true")]
    pub is_available: bool,
}

impl WorkerProfile {
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }
}

fn default_true() -> bool { true }

/// Six factor scores, each in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchFactors {
    #[serde(rename = "skillMatch")]
    pub skill_match: f64,
    #[serde(rename = "distanceScore")]
    pub distance_score: f64,
    #[serde(rename = "rateScore")]
    pub rate_score: f64,
    #[serde(rename = "availabilityScore")]
    pub availability_score: f64,
    #[serde(rename = "experienceScore")]
    pub experience_score: f64,
    #[serde(rename = "ratingScore")]
    pub rating_score: f64,
}

/// Scored candidate for a job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "labourerId")]
    pub labourer_id: String,
    pub profile: WorkerProfile,
    #[serde(rename = "distanceM")]
    pub distance_m: f64,
    pub score: u8,
    pub factors: MatchFactors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemandLevel {
    Low,
    Medium,
    High,
}

/// Where a rate suggestion came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateBasis {
    Market,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedRates {
    pub hourly: u32,
    pub daily: u32,
    pub project: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketBand {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateFactors {
    pub skill: String,
    pub experience: u32,
    pub location: GeoPoint,
    pub basis: RateBasis,
    pub comparables: usize,
    pub demand: DemandLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateSuggestion {
    pub suggested: SuggestedRates,
    pub market: MarketBand,
    pub factors: RateFactors,
}

/// Geospatial bounding box
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Longitude intervals inside [-180, 180] covered by the box
    ///
    /// A box crossing the antimeridian splits in two. Otherwise both entries
    /// are the same interval, so callers can always test against a pair.
    pub fn longitude_ranges(&self) -> [(f64, f64); 2] {
        if self.max_lon - self.min_lon >= 360.0 {
            [(-180.0, 180.0); 2]
        } else if self.min_lon < -180.0 {
            [(self.min_lon + 360.0, 180.0), (-180.0, self.max_lon)]
        } else if self.max_lon > 180.0 {
            [(self.min_lon, 180.0), (-180.0, self.max_lon - 360.0)]
        } else {
            [(self.min_lon, self.max_lon); 2]
        }
    }
}

/// Candidate lookup for a job: any shared skill, available, within radius
#[derive(Debug, Clone)]
pub struct CandidateQuery {
    pub skills: Vec<String>,
    pub center: GeoPoint,
    pub radius_m: f64,
}

/// Comparable-worker lookup for rate suggestions
#[derive(Debug, Clone)]
pub struct ComparableQuery {
    pub skill: String,
    pub min_experience: u32,
    pub max_experience: u32,
    pub center: GeoPoint,
    pub radius_m: f64,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub skill: f64,
    pub distance: f64,
    pub rate: f64,
    pub availability: f64,
    pub experience: f64,
    pub rating: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.skill + self.distance + self.rate + self.availability + self.experience + self.rating
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: 0.40,
            distance: 0.20,
            rate: 0.15,
            availability: 0.10,
            experience: 0.10,
            rating: 0.05,
        }
    }
}
