//! Checks every state kind against hand-computed answers.
//!
//! Prints one `Name: 1` (ok) or `Name: 0` (mismatch) line per kind.
//!
//! ```bash
//! cargo run --example selftest
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use states_rs::prelude::*;

fn cont() -> Vec<Segment> {
    vec![Segment::new(0, 10), Segment::new(20, 30), Segment::new(40, 50)]
}

fn discretes(values: &[i64]) -> Vec<Discrete> {
    values.iter().copied().map(Discrete::new).collect()
}

fn check_discrete() -> bool {
    let mut rng = ChaCha8Rng::seed_from_u64(1903);
    let value = rng.gen_range(0..=100);
    let d = Discrete::new(value);
    (0..=100).all(|x| d.contains(x) == (x == value))
}

fn check_segment() -> bool {
    let mut rng = ChaCha8Rng::seed_from_u64(1917);
    let begin = rng.gen_range(0..=100);
    let s = Segment::new(begin, 100);
    (0..=100).all(|x| s.contains(x) == (begin <= x && x <= 100))
}

fn check_gapped() -> bool {
    let s = Gapped::new(cont(), discretes(&[7, 25, 41]));
    s.accepted([2, 7, 29, 25, 50, 1, 41]) == [true, false, true, false, true, true, false]
}

fn check_augmented() -> bool {
    let s = Augmented::new(cont(), discretes(&[13, 25, 69]));
    s.accepted([13, 25, 69, 100, 3, 37]) == [true, true, true, false, true, false]
}

fn check_gapped_augmented() -> bool {
    let s = GappedAugmented::new(cont(), discretes(&[13, 25, 69]), discretes(&[1, 29, 41]));
    s.accepted([13, 25, 69, 1, 29, 41, 100, 7, 82, 21, 32])
        == [true, true, true, false, false, false, false, true, false, true, false]
}

fn check_set() -> bool {
    let s = SetState::new([1, 2, 7, 10, 23, 34, 19, 83, 100, 77]);
    s.accepted([83, 100, 5, 77, 2, 1, 20, 35, 4, 10])
        == [true, true, false, true, true, true, false, false, false, true]
}

fn random_operands(seed: u64) -> (i64, i64, Segment, Segment) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let t: Vec<i64> = (0..4).map(|_| rng.gen_range(0..=100)).collect();
    let s1 = Segment::new(t[0].min(t[1]), t[0].max(t[1]));
    let s2 = Segment::new(t[2].min(t[3]), t[2].max(t[3]));
    (t[0], t[1], s1, s2)
}

fn check_union() -> bool {
    let (t1, t2, s1, s2) = random_operands(1895);
    let (d1, d2) = (Discrete::new(t1), Discrete::new(t2));
    let u1 = Union::new(&d1, &d2);
    let u2 = Union::new(&s1, &s2);
    (0..=100).all(|x| {
        let union = u2.contains(x) == (s1.contains(x) || s2.contains(x));
        u1.contains(x) == (x == t1 || x == t2) && union
    })
}

fn check_intersection() -> bool {
    let (t1, t2, s1, s2) = random_operands(1914);
    let (d1, d2) = (Discrete::new(t1), Discrete::new(t2));
    let i1 = Intersection::new(&d1, &d2);
    let i2 = Intersection::new(&s1, &s2);
    (0..=100).all(|x| {
        let intersection = i2.contains(x) == (s1.contains(x) && s2.contains(x));
        i1.contains(x) == (x == t1 && x == t2) && intersection
    })
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Warn,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let checks: [(&str, fn() -> bool); 8] = [
        ("Discrete", check_discrete),
        ("Segment", check_segment),
        ("Gapped", check_gapped),
        ("Augmented", check_augmented),
        ("GappedAugmented", check_gapped_augmented),
        ("SetState", check_set),
        ("Union", check_union),
        ("Intersection", check_intersection),
    ];

    println!("Testing: 1 - OK, 0 - something is wrong");
    println!();
    for (name, check) in checks {
        println!("{}: {}", name, check() as u8);
    }

    Ok(())
}
