//! Differential verification driver for the q15-dsp kernels.
//!
//! Runs the fixed scenario suite and a randomized stress run, comparing
//! the vectorized kernel element-wise against the scalar reference. One
//! pass/fail line per scenario, first mismatching index on failure, and
//! an aggregate count at the end.

use anyhow::{bail, Result};
use q15_dsp::fixed::axpy::{reference_axpy_q15, vector_axpy_q15};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::env;

const DEFAULT_SEED: u64 = 0x51D4_27F0_3C65_AA11;
const DEFAULT_ITERATIONS: usize = 1000;

struct Options {
    seed: u64,
    iterations: usize,
}

fn parse_options() -> Result<Options> {
    let mut options = Options {
        seed: DEFAULT_SEED,
        iterations: DEFAULT_ITERATIONS,
    };
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next();
                options.seed = value
                    .as_deref()
                    .and_then(|v| v.parse().ok())
                    .ok_or_else(|| anyhow::anyhow!("--seed expects an unsigned integer"))?;
            }
            "--iterations" => {
                let value = args.next();
                options.iterations = value
                    .as_deref()
                    .and_then(|v| v.parse().ok())
                    .ok_or_else(|| anyhow::anyhow!("--iterations expects an unsigned integer"))?;
            }
            other => bail!("unknown argument `{other}` (expected --seed N or --iterations N)"),
        }
    }
    Ok(options)
}

struct Mismatch {
    index: usize,
    expected: i16,
    actual: i16,
}

fn first_mismatch(expected: &[i16], actual: &[i16]) -> Option<Mismatch> {
    expected
        .iter()
        .zip(actual.iter())
        .enumerate()
        .find(|(_, (e, a))| e != a)
        .map(|(index, (&expected, &actual))| Mismatch {
            index,
            expected,
            actual,
        })
}

/// Run both kernels over one input set and compare element-wise.
fn differential_case(a: &[i16], b: &[i16], alpha: i16) -> Result<Option<Mismatch>> {
    let mut expected = vec![0i16; a.len()];
    reference_axpy_q15(a, b, &mut expected, alpha)?;
    let mut actual = vec![0i16; a.len()];
    vector_axpy_q15(a, b, &mut actual, alpha)?;
    Ok(first_mismatch(&expected, &actual))
}

/// Report one named scenario; returns 1 on mismatch for aggregation.
fn report_case(name: &str, a: &[i16], b: &[i16], alpha: i16) -> Result<usize> {
    match differential_case(a, b, alpha)? {
        None => {
            println!("  {name}: PASS");
            Ok(0)
        }
        Some(m) => {
            println!(
                "  {name}: FAIL at index {} (expected {}, got {})",
                m.index, m.expected, m.actual
            );
            Ok(1)
        }
    }
}

fn basic_scenario() -> Result<usize> {
    println!("Basic functionality");
    let a: Vec<i16> = (1..=16).collect();
    let b: Vec<i16> = (1..=16).rev().collect();
    report_case("descending ramp, alpha=100, n=16", &a, &b, 100)
}

fn saturation_scenario() -> Result<usize> {
    println!("Saturation at both rails");
    let a = [32767i16, -32768, 30000, -30000, 32000, -32000, 0, 0];
    let b = [32767i16, -32768, 32767, -32768, 1000, -1000, 32767, -32768];
    report_case("extreme operands, alpha=32767, n=8", &a, &b, 32767)
}

fn edge_scenarios() -> Result<usize> {
    println!("Edge cases");
    let mut failures = 0;

    let empty: [i16; 0] = [];
    failures += report_case("n=0", &empty, &empty, 100)?;
    failures += report_case("n=1", &[100], &[200], 300)?;

    let a = [1i16, 2, 3, 4];
    let b = [5i16, 6, 7, 8];
    failures += report_case("alpha=0", &a, &b, 0)?;

    Ok(failures)
}

fn odd_length_scenarios(rng: &mut SmallRng) -> Result<usize> {
    println!("Non-power-of-two lengths");
    let mut failures = 0;
    for n in [7usize, 13, 31, 63, 100, 127, 255] {
        let a: Vec<i16> = (0..n).map(|_| rng.random()).collect();
        let b: Vec<i16> = (0..n).map(|_| rng.random()).collect();
        let alpha = rng.random();
        failures += report_case(&format!("n={n}"), &a, &b, alpha)?;
    }
    Ok(failures)
}

fn stress_run(rng: &mut SmallRng, iterations: usize) -> Result<usize> {
    println!("Randomized stress ({iterations} iterations)");
    let mut failures = 0;
    for _ in 0..iterations {
        let n = rng.random_range(1..=256);
        let a: Vec<i16> = (0..n).map(|_| rng.random()).collect();
        let b: Vec<i16> = (0..n).map(|_| rng.random()).collect();
        let alpha: i16 = rng.random();

        if let Some(m) = differential_case(&a, &b, alpha)? {
            failures += 1;
            if failures <= 5 {
                println!(
                    "  failure {failures}: n={n}, alpha={alpha}, index {} (expected {}, got {})",
                    m.index, m.expected, m.actual
                );
            }
        }
    }
    if failures == 0 {
        println!("  all {iterations} iterations PASS");
    } else {
        println!("  {failures}/{iterations} iterations FAIL");
    }
    Ok(failures)
}

fn main() -> Result<()> {
    let options = parse_options()?;
    let mut rng = SmallRng::seed_from_u64(options.seed);

    println!("q15-dsp differential verification (seed {})", options.seed);

    let mut failures = 0;
    failures += basic_scenario()?;
    failures += saturation_scenario()?;
    failures += edge_scenarios()?;
    failures += odd_length_scenarios(&mut rng)?;
    failures += stress_run(&mut rng, options.iterations)?;

    if failures > 0 {
        bail!("{failures} case(s) diverged from the scalar reference");
    }
    println!("All cases match the scalar reference.");
    Ok(())
}
