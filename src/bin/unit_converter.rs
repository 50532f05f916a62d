//! Interactive unit converter for weights and lengths

use std::io::{self, BufRead, Write};

use doughcalc::dough::{Quantity, UnitConverter};

fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn join_units(units: impl Iterator<Item = &'static str>) -> String {
    units.collect::<Vec<_>>().join(", ")
}

/// Ask for a value and two units, then print the conversion
fn run_conversion(
    input: &mut impl BufRead,
    converter: &UnitConverter,
    quantity: Quantity,
) -> io::Result<Option<()>> {
    let label = match quantity {
        Quantity::Weight => "Available weight units",
        Quantity::Length => "Available length units",
    };
    println!("{}: {}", label, join_units(converter.table(quantity).symbols()));

    let Some(raw_value) = prompt(input, "Value: ")? else { return Ok(None) };
    let Some(from_unit) = prompt(input, "From unit: ")? else { return Ok(None) };
    let Some(to_unit) = prompt(input, "To unit: ")? else { return Ok(None) };

    let value: f64 = match raw_value.parse() {
        Ok(v) => v,
        Err(_) => {
            println!("Error: '{}' is not a number", raw_value);
            return Ok(Some(()));
        }
    };

    let from_unit = from_unit.to_lowercase();
    let to_unit = to_unit.to_lowercase();

    match converter.convert(quantity, value, &from_unit, &to_unit) {
        Ok(result) => println!("{} {} = {:.6} {}", value, from_unit, result, to_unit),
        Err(e) => println!("Error: {}", e),
    }
    Ok(Some(()))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let converter = UnitConverter::default();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("=== Unit Converter ===");
    println!("1. Convert weight");
    println!("2. Convert length");
    println!("3. Show available units");
    println!("4. Quit");

    loop {
        let Some(choice) = prompt(&mut input, "\nChoose an option (1-4): ")? else { break };

        let outcome = match choice.as_str() {
            "1" => run_conversion(&mut input, &converter, Quantity::Weight)?,
            "2" => run_conversion(&mut input, &converter, Quantity::Length)?,
            "3" => {
                println!("Weight units: {}", join_units(converter.weight_units()));
                println!("Length units: {}", join_units(converter.length_units()));
                Some(())
            }
            "4" => {
                println!("Goodbye!");
                break;
            }
            _ => {
                println!("Invalid choice. Please choose 1-4.");
                Some(())
            }
        };

        // End of input mid-conversion
        if outcome.is_none() {
            break;
        }
    }

    Ok(())
}
