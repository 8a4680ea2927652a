use std::io::{self, BufRead, Write};

use anyhow::Result;
use itertools::Itertools;

use cityhall::dispatch::{distribute, TicketQueue};

fn read_window_count(stdin: &io::Stdin, line: &mut String) -> Result<Option<usize>> {
    loop {
        print!(">>> Enter the number of windows\n<<< ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(line)? == 0 {
            return Ok(None);
        }
        match line.trim().parse() {
            Ok(count) => return Ok(Some(count)),
            Err(_) => println!(">>> Expected a number"),
        }
    }
}

fn main() -> Result<()> {
    cityhall::init_tracing();

    let stdin = io::stdin();
    let mut line = String::new();

    let Some(window_count) = read_window_count(&stdin, &mut line)? else {
        return Ok(());
    };

    let mut queue = TicketQueue::new();

    loop {
        print!("<<< ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();

        match fields.as_slice() {
            ["ENQUEUE", minutes] => match minutes.parse() {
                Ok(minutes) => println!(">>> {}", queue.enqueue(minutes)),
                Err(_) => println!(">>> Expected a number of minutes"),
            },
            ["DISTRIBUTE"] => {
                for window in distribute(queue.visitors(), window_count) {
                    println!(
                        ">>> Window {} ({} min): {}",
                        window.number,
                        window.total_minutes,
                        window.tickets.iter().join(", ")
                    );
                }
                break;
            }
            [] => continue,
            _ => println!(">>> Unknown command"),
        }
    }

    Ok(())
}
