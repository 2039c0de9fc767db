use anyhow::{Context, Result};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;

/// Output file, matching the default input of the chart binary.
const OUTPUT_PATH: &str = "fcc-forum-pageviews.csv";

#[derive(Serialize)]
struct Row {
    date: NaiveDate,
    value: u32,
}

const SEED: u64 = 42;

/// Minimal deterministic PRNG (xoshiro256**). Seeded with a constant so every
/// run writes the same sample file and chart output can be compared across runs.
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Forum growth: slow start after launch, then levelling off around 130k.
fn trend(day: f64) -> f64 {
    130_000.0 / (1.0 + (-(day - 500.0) / 150.0).exp())
}

/// Relative traffic per calendar month (January first).
const MONTH_FACTOR: [f64; 12] = [
    1.00, 1.02, 1.08, 1.03, 0.97, 0.92, 0.95, 0.96, 1.01, 1.07, 1.04, 0.85,
];

fn weekday_factor(weekday: Weekday) -> f64 {
    match weekday {
        Weekday::Sat => 0.72,
        Weekday::Sun => 0.78,
        _ => 1.0,
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(SEED);

    let start = NaiveDate::from_ymd_opt(2016, 5, 9).context("start date")?;
    let end = NaiveDate::from_ymd_opt(2019, 12, 3).context("end date")?;

    let mut writer = csv::Writer::from_path(OUTPUT_PATH)
        .with_context(|| format!("creating {OUTPUT_PATH}"))?;

    let mut date = start;
    let mut day = 0u64;
    while date <= end {
        let expected = trend(day as f64)
            * MONTH_FACTOR[date.month0() as usize]
            * weekday_factor(date.weekday());
        let mut value = rng.gauss(expected, expected * 0.08);
        // Occasional viral days well outside the usual range.
        if rng.next_f64() < 0.01 {
            value *= 2.5 + rng.next_f64() * 2.0;
        }
        let value = if day == 0 { 1201 } else { value.max(0.0).round() as u32 };

        writer
            .serialize(Row { date, value })
            .with_context(|| format!("writing {date}"))?;

        date = date + Days::new(1);
        day += 1;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {day} daily records ({start} to {end}) to {OUTPUT_PATH}");
    Ok(())
}
