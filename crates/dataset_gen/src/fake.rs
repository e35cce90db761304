//! Fake value helpers.
//!
//! `FakeData` owns the run's random generator together with the little bit
//! of per-run state the record generators share: issued emails, the
//! category name pool and the reference time for date windows.

use ahash::AHashSet;
use chrono::{NaiveDateTime, TimeDelta, Utc};
use fake::faker::address::en::{BuildingNumber, CityName, StateAbbr, StreetName, ZipCode};
use fake::faker::company::en::{Bs, CatchPhrase};
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::Name;
use fake::Fake;
use rand::seq::{index, SliceRandom};
use rand::Rng;

/// Phrases drawn when building the category name pool
pub const CATEGORY_POOL_DRAWS: usize = 200;

/// Fresh email draws before falling back to a numbered local part
const MAX_UNIQUE_ATTEMPTS: usize = 1000;

const DAYS_PER_YEAR: i64 = 365;

/// Color names for product attributes
const COLORS: &[&str] = &[
    "AliceBlue", "Aqua", "Beige", "Black", "BlanchedAlmond", "Blue", "Brown", "Chartreuse",
    "Coral", "CornflowerBlue", "Crimson", "DarkGreen", "DarkOrange", "FireBrick", "Gold",
    "GoldenRod", "Gray", "Indigo", "Ivory", "Khaki", "Lavender", "LightSeaGreen", "Lime",
    "Maroon", "MintCream", "Navy", "Olive", "Orchid", "PeachPuff", "Plum", "Salmon", "SeaShell",
    "Sienna", "SlateBlue", "Teal", "Tomato", "Turquoise", "Violet", "Wheat", "YellowGreen",
];

/// Job titles for employees
const JOB_TITLES: &[&str] = &[
    "Software Engineer",
    "Senior Software Engineer",
    "Product Manager",
    "Data Analyst",
    "Data Scientist",
    "UX Designer",
    "Marketing Manager",
    "Content Strategist",
    "Sales Representative",
    "Account Executive",
    "Customer Support Specialist",
    "Operations Manager",
    "HR Generalist",
    "Recruiter",
    "Financial Analyst",
    "Accountant",
    "DevOps Engineer",
    "Site Reliability Engineer",
    "QA Engineer",
    "Technical Writer",
    "Office Manager",
    "Supply Chain Coordinator",
    "Business Analyst",
    "Engineering Manager",
];

/// Fake data source with an injected RNG
pub struct FakeData<R: Rng> {
    rng: R,
    now: NaiveDateTime,
    emails: AHashSet<String>,
    category_names: Vec<String>,
}

impl<R: Rng> FakeData<R> {
    /// Create a source anchored at the current UTC time.
    ///
    /// Builds the category name pool immediately, so the pool's contents
    /// are the first thing drawn from `rng`.
    pub fn new(rng: R) -> Self {
        Self::with_now(rng, Utc::now().naive_utc())
    }

    /// Create a source whose date windows end at `now`.
    pub fn with_now(rng: R, now: NaiveDateTime) -> Self {
        let mut fake = Self {
            rng,
            now,
            emails: AHashSet::new(),
            category_names: Vec::new(),
        };
        fake.category_names = fake.build_category_pool();
        fake
    }

    fn build_category_pool(&mut self) -> Vec<String> {
        let mut seen = AHashSet::new();
        let mut pool = Vec::with_capacity(CATEGORY_POOL_DRAWS);
        for _ in 0..CATEGORY_POOL_DRAWS {
            let phrase: String = Bs().fake_with_rng(&mut self.rng);
            let name = phrase.replace(' ', "_");
            if seen.insert(name.clone()) {
                pool.push(name);
            }
        }
        pool.shuffle(&mut self.rng);
        pool
    }

    /// Names left in the category pool
    pub fn category_names_left(&self) -> usize {
        self.category_names.len()
    }

    /// Take the next category name, or a numbered placeholder once the pool is empty
    pub fn category_name(&mut self) -> String {
        match self.category_names.pop() {
            Some(name) => name,
            None => format!(
                "fallback_category_{}",
                self.rng.random_range(1000..=9999)
            ),
        }
    }

    /// Generate a full name
    pub fn full_name(&mut self) -> String {
        Name().fake_with_rng(&mut self.rng)
    }

    /// Generate an email never issued before by this source
    pub fn unique_email(&mut self) -> String {
        for _ in 0..MAX_UNIQUE_ATTEMPTS {
            let email: String = SafeEmail().fake_with_rng(&mut self.rng);
            if self.emails.insert(email.clone()) {
                return email;
            }
        }

        let base: String = SafeEmail().fake_with_rng(&mut self.rng);
        let (local, domain) = base.split_once('@').unwrap_or((base.as_str(), "example.com"));
        let mut n = self.emails.len();
        loop {
            let candidate = format!("{}+{}@{}", local, n, domain);
            if self.emails.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }

    /// Generate a marketing-style product name
    pub fn catch_phrase(&mut self) -> String {
        CatchPhrase().fake_with_rng(&mut self.rng)
    }

    /// Generate lorem text of whole sentences, at most `max_chars` long
    pub fn text(&mut self, max_chars: usize) -> String {
        let mut text = String::new();
        loop {
            let sentence: String = Sentence(3..10).fake_with_rng(&mut self.rng);
            let needed = if text.is_empty() {
                sentence.len()
            } else {
                text.len() + 1 + sentence.len()
            };
            if needed > max_chars {
                break;
            }
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(&sentence);
        }

        if text.is_empty() {
            let sentence: String = Sentence(3..6).fake_with_rng(&mut self.rng);
            text = sentence.chars().take(max_chars).collect();
        }
        text
    }

    /// Generate a street address such as "742 Evergreen Terrace"
    pub fn street_address(&mut self) -> String {
        let number: String = BuildingNumber().fake_with_rng(&mut self.rng);
        let street: String = StreetName().fake_with_rng(&mut self.rng);
        format!("{} {}", number, street)
    }

    pub fn city(&mut self) -> String {
        CityName().fake_with_rng(&mut self.rng)
    }

    pub fn state_abbr(&mut self) -> String {
        StateAbbr().fake_with_rng(&mut self.rng)
    }

    pub fn zip_code(&mut self) -> String {
        ZipCode().fake_with_rng(&mut self.rng)
    }

    pub fn color_name(&mut self) -> &'static str {
        *self.pick(COLORS)
    }

    pub fn job_title(&mut self) -> &'static str {
        *self.pick(JOB_TITLES)
    }

    /// Generate a random version 4 UUID string
    pub fn uuid4(&mut self) -> String {
        format!(
            "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
            self.rng.random::<u32>(),
            self.rng.random::<u16>(),
            (self.rng.random::<u16>() & 0x0FFF) | 0x4000, // Version 4
            (self.rng.random::<u16>() & 0x3FFF) | 0x8000, // Variant
            self.rng.random::<u64>() & 0xFFFF_FFFF_FFFF_u64
        )
    }

    /// ISO-8601 datetime within the last `years` years
    pub fn datetime_within_years(&mut self, years: i64) -> String {
        let span = years * DAYS_PER_YEAR * 86_400 * 1_000_000;
        let offset = self.rng.random_range(0..=span);
        let at = self.now - TimeDelta::microseconds(offset);
        at.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }

    /// ISO-8601 date within the last `years` years
    pub fn date_within_years(&mut self, years: i64) -> String {
        let offset = self.rng.random_range(0..=years * DAYS_PER_YEAR);
        let day = self.now.date() - TimeDelta::days(offset);
        day.format("%Y-%m-%d").to_string()
    }

    /// Generate a price rounded to cents
    pub fn price(&mut self, min: f64, max: f64) -> f64 {
        let value = self.rng.random_range(min..=max);
        (value * 100.0).round() / 100.0
    }

    /// Generate a random integer in range
    pub fn int_range(&mut self, min: i64, max: i64) -> i64 {
        self.rng.random_range(min..=max)
    }

    /// Generate a float in range
    pub fn float_range(&mut self, min: f64, max: f64) -> f64 {
        self.rng.random_range(min..=max)
    }

    /// Fair coin
    pub fn coin_flip(&mut self) -> bool {
        self.rng.random::<f64>() < 0.5
    }

    /// Pick a random element from a non-empty slice
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.rng.random_range(0..items.len())]
    }

    /// Pick a random element, or `None` for an empty slice
    pub fn pick_opt<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(self.pick(items))
        }
    }

    /// Pick `count` distinct elements (capped at the slice length)
    pub fn pick_distinct<T: Clone>(&mut self, items: &[T], count: usize) -> Vec<T> {
        index::sample(&mut self.rng, items.len(), count.min(items.len()))
            .iter()
            .map(|i| items[i].clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn fake(seed: u64) -> FakeData<StdRng> {
        FakeData::with_now(StdRng::seed_from_u64(seed), fixed_now())
    }

    #[test]
    fn test_deterministic_generation() {
        let mut fake1 = fake(42);
        let mut fake2 = fake(42);

        assert_eq!(fake1.full_name(), fake2.full_name());
        assert_eq!(fake1.category_name(), fake2.category_name());
        assert_eq!(fake1.price(10.0, 100.0), fake2.price(10.0, 100.0));
    }

    #[test]
    fn test_unique_emails() {
        let mut fake = fake(7);
        let mut seen = AHashSet::new();
        for _ in 0..500 {
            let email = fake.unique_email();
            assert!(email.contains('@'));
            assert!(seen.insert(email), "email issued twice");
        }
    }

    #[test]
    fn test_category_pool_falls_back() {
        let mut fake = fake(1);
        let pool_size = fake.category_names_left();
        assert!(pool_size > 0 && pool_size <= CATEGORY_POOL_DRAWS);

        let mut names = AHashSet::new();
        for _ in 0..pool_size {
            let name = fake.category_name();
            assert!(!name.contains(' '));
            assert!(names.insert(name));
        }

        let fallback = fake.category_name();
        assert!(fallback.starts_with("fallback_category_"));
        let n: u32 = fallback["fallback_category_".len()..].parse().unwrap();
        assert!((1000..=9999).contains(&n));
    }

    #[test]
    fn test_text_respects_limit() {
        let mut fake = fake(3);
        for limit in [20, 150, 200] {
            let text = fake.text(limit);
            assert!(!text.is_empty());
            assert!(text.chars().count() <= limit, "{} > {}", text.len(), limit);
        }
    }

    #[test]
    fn test_date_windows() {
        let mut fake = fake(9);
        let now = fixed_now();
        for _ in 0..100 {
            let dt = NaiveDateTime::parse_from_str(
                &fake.datetime_within_years(2),
                "%Y-%m-%dT%H:%M:%S%.6f",
            )
            .unwrap();
            assert!(dt <= now);
            assert!(dt >= now - TimeDelta::days(730));

            let d = NaiveDate::parse_from_str(&fake.date_within_years(5), "%Y-%m-%d").unwrap();
            assert!(d <= now.date());
            assert!(d >= now.date() - TimeDelta::days(5 * 365));
        }
    }

    #[test]
    fn test_uuid_shape() {
        let mut fake = fake(11);
        let id = fake.uuid4();
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.iter().map(|p| p.len()).collect::<Vec<_>>(), [8, 4, 4, 4, 12]);
        assert!(parts[2].starts_with('4'));
    }

    #[test]
    fn test_pick_distinct() {
        let mut fake = fake(5);
        let items = ["a", "b", "c", "d"];
        let picked = fake.pick_distinct(&items, 3);
        assert_eq!(picked.len(), 3);
        let unique: AHashSet<_> = picked.iter().collect();
        assert_eq!(unique.len(), 3);

        assert_eq!(fake.pick_distinct(&items, 10).len(), 4);
        assert!(fake.pick_opt::<&str>(&[]).is_none());
    }

    #[test]
    fn test_price_precision() {
        let mut fake = fake(42);
        let price = fake.price(10.0, 999.99);
        assert!((10.0..=999.99).contains(&price));
        assert_eq!(price, (price * 100.0).round() / 100.0);
    }
}
