use decinterval::{arith, canonicalize, Decimal, Interval, IntervalError};

fn describe(interval: &Interval) -> String {
    let lower = match interval.min() {
        Some(min) if interval.include_min() => format!("[{min}"),
        Some(min) => format!("({min}"),
        None => "(-inf".to_string(),
    };
    let upper = match interval.max() {
        Some(max) if interval.include_max() => format!("{max}]"),
        Some(max) => format!("{max})"),
        None => "+inf)".to_string(),
    };
    format!("{lower}, {upper}")
}

fn main() -> Result<(), IntervalError> {
    println!("=== Canonicalization ===\n");

    let raw_values = ["1.500", ".5", "-0.000", "007.25", "not a number"];
    for raw in raw_values {
        println!("  {raw:>12} -> {}", canonicalize(raw));
    }

    println!("\n=== Exact arithmetic ===\n");

    let price: Decimal = "2.675".parse().expect("literal is valid");
    println!("  round(2.675, 2)  = {}", arith::round(&price, 2));
    println!("  ceil(-5.3)       = {}", arith::ceil(&"-5.3".parse().unwrap()));
    println!("  floor(-5.3)      = {}", arith::floor(&"-5.3".parse().unwrap()));
    println!(
        "  9.99 + 0.01      = {}",
        arith::add_truncated(&"9.99".parse().unwrap(), &"0.01".parse().unwrap(), 2)
    );

    println!("\n=== Intersection ===\n");

    let positive = Interval::from_bounds("0", "", false, false)?;
    let capped = Interval::from_bounds("", "100", false, true)?;
    let tenths = Interval::from_bounds("0.1", "99.9", true, true)?;

    println!("  A = {}", describe(&positive));
    println!("  B = {}", describe(&capped));
    println!("  C = {}", describe(&tenths));

    let joined = Interval::intersect(&[positive, capped, tenths])?;
    println!("  A ∩ B ∩ C = {}", describe(&joined));

    println!("\n=== Membership ===\n");

    for candidate in ["0", "0.1", "42.42", "99.9", "100"] {
        let verdict = if joined.contains_str(candidate)? {
            "inside"
        } else {
            "outside"
        };
        println!("  {candidate:>8} is {verdict}");
    }

    println!("\n=== Digit-range analysis ===\n");

    let samples = [
        Interval::from_bounds("1.2", "1.8", true, true)?,
        Interval::from_bounds("-2", "3", true, true)?,
        Interval::from_bounds("0.1", "0.1", true, true)?,
        joined,
    ];
    for interval in &samples {
        println!("  {}", describe(interval));
        println!(
            "    fractional digits in {}",
            describe(&interval.fractional_digit_range()?)
        );
        println!(
            "    integer digits in    {}",
            describe(&interval.integer_digit_range()?)
        );
    }

    println!("\n=== Demo complete ===");
    Ok(())
}
