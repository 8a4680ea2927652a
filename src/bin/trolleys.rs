use std::io::{self, BufRead, Write};

use anyhow::Result;
use itertools::Itertools;

use cityhall::routes::RouteIndex;

/// One decoded input line. The first token selects the command; anything
/// unrecognized falls through to `Unknown` and keeps the loop alive.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    CreateRoute { name: String, stops: Vec<String> },
    RoutesAtStop(String),
    StopsOfRoute(String),
    ListAll,
    Exit,
    Unknown(String),
}

fn parse(line: &str) -> Command {
    let mut fields = line.split_whitespace();
    let keyword = fields.next().unwrap_or_default();

    match keyword {
        "CREATE_TRL" => Command::CreateRoute {
            name: fields.next().unwrap_or_default().to_string(),
            stops: fields.map(str::to_string).collect(),
        },
        "TRL_IN_STOP" => Command::RoutesAtStop(fields.next().unwrap_or_default().to_string()),
        "STOPS_IN_TRL" => Command::StopsOfRoute(fields.next().unwrap_or_default().to_string()),
        "TRLS" => Command::ListAll,
        "exit" => Command::Exit,
        other => Command::Unknown(other.to_string()),
    }
}

fn create_route(index: &mut RouteIndex, name: String, stops: Vec<String>) {
    if stops.is_empty() {
        println!("Error: no stops provided for trolley {name}");
        return;
    }

    let count = stops.len();
    index.define_route(&name, stops);
    println!("Trolley {name} route created with {count} stops.");
}

fn routes_at_stop(index: &RouteIndex, stop: &str) {
    let routes = index.routes_at(stop);
    if routes.is_empty() {
        println!("No trolleys pass through stop {stop}");
        return;
    }

    println!("Trolleys passing through {stop}:");
    for route in &routes {
        println!("- {route}");
    }
}

fn stops_of_route(index: &RouteIndex, route: &str) {
    let transfers = index.transfers_along(route);
    if transfers.is_empty() {
        println!("No information available for trolley {route}");
        return;
    }

    println!("Stops for trolley {route} with connecting trolleys:");
    for (stop, others) in &transfers {
        println!("- {stop} (connecting trolleys: {})", others.iter().join(" "));
    }
}

fn list_all(index: &RouteIndex) {
    if index.is_empty() {
        println!("No trolleys registered in the system.");
        return;
    }

    println!("All trolleys and their routes:");
    for (name, stops) in index.all_routes() {
        println!("- {name}: {}", stops.iter().join(" "));
    }
}

fn main() -> Result<()> {
    cityhall::init_tracing();

    println!("Trolley route management system");
    println!("Available commands:");
    println!("CREATE_TRL trl stop1 ... stopN");
    println!("TRL_IN_STOP stop");
    println!("STOPS_IN_TRL trl");
    println!("TRLS");
    println!("Enter 'exit' to quit");
    println!();

    let mut index = RouteIndex::new();
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match parse(&line) {
            Command::CreateRoute { name, stops } => create_route(&mut index, name, stops),
            Command::RoutesAtStop(stop) => routes_at_stop(&index, &stop),
            Command::StopsOfRoute(route) => stops_of_route(&index, &route),
            Command::ListAll => list_all(&index),
            Command::Unknown(keyword) => println!("Unknown command: {keyword}"),
            Command::Exit => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_known_commands() {
        assert_eq!(
            parse("CREATE_TRL T1 Park Mall"),
            Command::CreateRoute {
                name: "T1".to_string(),
                stops: vec!["Park".to_string(), "Mall".to_string()],
            }
        );
        assert_eq!(
            parse("TRL_IN_STOP Mall"),
            Command::RoutesAtStop("Mall".to_string())
        );
        assert_eq!(
            parse("STOPS_IN_TRL T1"),
            Command::StopsOfRoute("T1".to_string())
        );
        assert_eq!(parse("TRLS"), Command::ListAll);
        assert_eq!(parse("exit"), Command::Exit);
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(parse("trls"), Command::Unknown("trls".to_string()));
        assert_eq!(
            parse("create_trl T1 Park"),
            Command::Unknown("create_trl".to_string())
        );
    }

    #[test]
    fn create_without_stops_decodes_to_empty_list() {
        assert_eq!(
            parse("CREATE_TRL T1"),
            Command::CreateRoute {
                name: "T1".to_string(),
                stops: Vec::new(),
            }
        );
    }
}
