use std::io::{self, BufRead, Write};

use anyhow::Result;

use cityhall::warehouse::{CellAddress, Warehouse, WarehouseReport};

fn parse_quantity(field: &str) -> Option<u32> {
    field.parse().ok()
}

fn store(warehouse: &mut Warehouse, product: &str, quantity: &str, address: &str) {
    let Some(quantity) = parse_quantity(quantity) else {
        println!("Error: invalid quantity");
        return;
    };
    let address: CellAddress = match address.parse() {
        Ok(address) => address,
        Err(e) => {
            println!("Error: {e}");
            return;
        }
    };

    match warehouse.store(product, quantity, address.clone()) {
        Ok(()) => println!("Added {quantity} units of '{product}' to cell {address}"),
        Err(e) => println!("Error: {e}"),
    }
}

fn take(warehouse: &mut Warehouse, product: &str, quantity: &str, address: &str) {
    let Some(quantity) = parse_quantity(quantity) else {
        println!("Error: invalid quantity");
        return;
    };
    let address: CellAddress = match address.parse() {
        Ok(address) => address,
        Err(e) => {
            println!("Error: {e}");
            return;
        }
    };

    match warehouse.take(product, quantity, address.clone()) {
        Ok(()) => println!("Removed {quantity} units of '{product}' from cell {address}"),
        Err(e) => println!("Error: {e}"),
    }
}

fn print_report(report: &WarehouseReport) {
    println!();
    println!("GENERAL INFORMATION");
    println!("Warehouse load: {:.2}%", report.fill_percent());
    println!("Cells used: {} of {}", report.used_cells(), report.total_cells);
    println!("Total stock: {} units", report.total_units);

    println!();
    println!("ZONE LOAD");
    println!("Zone A: {:.2}%", report.fill_percent());

    println!();
    println!("OCCUPIED CELLS");
    if report.occupied.is_empty() {
        println!("No occupied cells");
    } else {
        for (address, slot) in &report.occupied {
            println!("{address}: {}, {} units", slot.product, slot.quantity);
        }
    }

    println!();
    println!("EMPTY CELLS");
    if report.empty.is_empty() {
        println!("No empty cells");
    } else {
        for address in &report.empty {
            println!("{address}");
        }
    }
}

fn main() -> Result<()> {
    cityhall::init_tracing();

    println!("WAREHOUSE INVENTORY SYSTEM");
    println!("Available commands:");
    println!("ADD <product> <quantity> <cell address (A-1-1-1)>");
    println!("REMOVE <product> <quantity> <cell address (A-1-1-1)>");
    println!("INFO - warehouse summary");
    println!("EXIT - quit");

    let mut warehouse = Warehouse::new();
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("\n> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = fields.first() else {
            continue;
        };

        match command {
            "ADD" | "REMOVE" => {
                if fields.len() != 4 {
                    println!("Error: malformed command");
                    continue;
                }
                if command == "ADD" {
                    store(&mut warehouse, fields[1], fields[2], fields[3]);
                } else {
                    take(&mut warehouse, fields[1], fields[2], fields[3]);
                }
            }
            "INFO" => print_report(&warehouse.report()),
            "EXIT" => break,
            _ => println!("Unknown command"),
        }
    }

    Ok(())
}
