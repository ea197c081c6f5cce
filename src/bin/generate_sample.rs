use std::fmt::Write as _;

use anyhow::{Context, Result};

/// Minimal deterministic PRNG (64-bit LCG, top bits only).
struct SimpleRng(u64);

impl SimpleRng {
    fn next_below(&mut self, bound: i64) -> i64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 33) % bound as u64) as i64
    }
}

const MODULES: [&str; 6] = [
    "BODY_LWR_FRT_STRUCTURE_EVEK_SCC_LHD_V0",
    "BODY_UPR_REAR_STRUCTURE_V2",
    "HOOD-OUTER_LH",
    "HOOD-OUTER_RH",
    "DOOR_FRT_INNER_V1",
    "ROOF_PANEL",
];

fn main() -> Result<()> {
    let mut rng = SimpleRng(42);

    let mut manifest = String::from("*KEYWORD\n$ Generated sample manifest\n$ Module ID Range\n");
    let mut csv = String::from("Items,Start,End,Owner\n");

    for (i, module) in MODULES.iter().enumerate() {
        let start = 1_000_000 * (i as i64 + 1);
        let end = start + 999_999;
        writeln!(manifest, "$ {start:>10} {end:>10} M_{module}.k")?;

        let item = module
            .split("_V")
            .next()
            .unwrap_or(*module)
            .replace('_', "-");
        for row in 0..4 {
            let (lo, hi) = match row {
                // Fully inside
                0 | 1 => {
                    let lo = start + rng.next_below(500_000);
                    (lo, lo + rng.next_below(400_000))
                }
                // Straddles the upper bound
                2 => (end - rng.next_below(1000), end + 1 + rng.next_below(1000)),
                // Inverted
                _ => (end - 10, start + 10),
            };
            writeln!(csv, "{item},{lo},{hi},owner{}", row % 2)?;
        }
    }
    writeln!(csv, "UNKNOWN-PART,1,2,owner0")?;
    writeln!(csv, "ROOF-PANEL,n/a,2,owner1")?;

    std::fs::write("sample_manifest.k", &manifest).context("writing sample_manifest.k")?;
    std::fs::write("sample_parts.csv", &csv).context("writing sample_parts.csv")?;

    println!(
        "Wrote {} manifest ranges to sample_manifest.k and {} rows to sample_parts.csv",
        MODULES.len(),
        csv.lines().count() - 1
    );
    Ok(())
}
