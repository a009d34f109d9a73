// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with `--features logging` to see overflow and truncation traces.

use fixed_point::numeric::{shift, Operation};
use fixed_point::prelude::*;

fn main() -> Result<(), NumericError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Fixed-Point Example ===\n");

    // Construction shifts the native value into the scaled domain
    let price = Decimal32::from_value_and_scale(125, ScaleExponent::new(-2))?;
    println!("125 at scale -2        -> {:?}", price);
    println!("back to i32            -> {}", price.to::<i32>()?);

    let tenth = Decimal32::from_scaled(11, ScaleExponent::new(-1));
    println!("raw 11 at scale -1     -> {}", tenth);

    // Mixed-scale arithmetic
    println!("\n=== Arithmetic ===");
    println!("{} + {} = {}", price, tenth, price + tenth);
    println!("{} * {} = {:?}", price, tenth, price * tenth);

    let coarse = Decimal32::from_scaled(100, ScaleExponent::ZERO);
    let fine = Decimal32::from_scaled(1, ScaleExponent::new(1));
    let sum = coarse + fine;
    println!(
        "raw 100 @ 0 + raw 1 @ 1 = raw {} @ {} (= {:?})",
        sum.unscaled_value(),
        sum.scale(),
        shift::<Base10>(sum.unscaled_value() as i128, -sum.scale())
    );

    // Division keeps only the digits its scale allows unless asked otherwise
    println!("\n=== Division ===");
    let one = Decimal64::from_value_and_scale(1, ScaleExponent::ZERO)?;
    let three = Decimal64::from_value_and_scale(3, ScaleExponent::ZERO)?;
    println!("1 / 3 (truncating)     -> {}", one.checked_div(three)?);

    let config = ArithmeticConfig::new()
        .with_rounding(RoundingMode::HalfAwayFromZero)
        .with_division_guard_digits(6);
    println!("1 / 3 (6 guard digits) -> {}", one.div_with(three, &config)?);

    // Overflow is reported in checked mode, wraps in unchecked mode
    println!("\n=== Overflow ===");
    let min = Decimal32::from_value_and_scale(i32::MIN, ScaleExponent::ZERO)?;
    let minus_one = Decimal32::from_value_and_scale(-1, ScaleExponent::ZERO)?;
    match min.checked_div(minus_one) {
        Err(
            err @ NumericError::Overflow {
                operation: Operation::Division,
                ..
            },
        ) => println!("checked MIN / -1       -> error: {}", err),
        other => println!("checked MIN / -1       -> unexpected {:?}", other),
    }
    println!(
        "unchecked MIN / -1     -> {:?}",
        min.div_with_policy(minus_one, OverflowPolicy::Unchecked)?
    );

    // Decimal interop at the boundaries
    println!("\n=== Decimal Interop ===");
    let parsed: Decimal64 = "-98765.4321".parse()?;
    println!("parsed                 -> {:?}", parsed);
    println!("as rust_decimal        -> {}", parsed.to_decimal()?);

    let binary = Binary16::from_value_and_scale(2.75, ScaleExponent::new(-2))?;
    println!("2.75 in radix 2        -> {:?}", binary);

    Ok(())
}
