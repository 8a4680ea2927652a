use std::io::{self, BufRead};

use anyhow::Result;
use itertools::Itertools;

use cityhall::roster::Roster;

fn admit(roster: &mut Roster, count: i64) {
    // A negative intake is a farewell, not an admission; the total is
    // left unchanged.
    if count < 0 {
        eprintln!("GoodBye {} clever students!", -count);
        return;
    }

    let Ok(count) = u32::try_from(count) else {
        eprintln!("Incorrect");
        return;
    };
    roster.admit(count);
    println!("Welcome {count} clever students!");
}

fn suspect(roster: &mut Roster, student: u32) {
    match roster.suspect(student) {
        Ok(true) => println!("The suspected student {student}"),
        Ok(false) => {}
        Err(_) => eprintln!("Incorrect"),
    }
}

fn grant_immunity(roster: &mut Roster, student: u32) {
    match roster.grant_immunity(student) {
        Ok(()) => println!("Student {student} is immortal!"),
        Err(_) => eprintln!("Incorrect"),
    }
}

fn print_list(roster: &Roster) {
    let list = roster
        .expulsion_list()
        .map(|student| format!("Student {student}"))
        .join(", ");

    if list.is_empty() {
        println!("List of students for expulsion:");
    } else {
        println!("List of students for expulsion: {list}");
    }
}

fn run_command(roster: &mut Roster, fields: &[&str]) {
    match fields {
        ["NEW_STUDENTS", count] => match count.parse() {
            Ok(count) => admit(roster, count),
            Err(_) => eprintln!("Incorrect"),
        },
        ["SUSPICIOUS", student] => match student.parse() {
            Ok(student) => suspect(roster, student),
            Err(_) => eprintln!("Incorrect"),
        },
        ["IMMORTAL", student] => match student.parse() {
            Ok(student) => grant_immunity(roster, student),
            Err(_) => eprintln!("Incorrect"),
        },
        ["TOP-LIST"] => print_list(roster),
        ["SCOUNT"] => println!(
            "List of students for expulsion consists of {} students",
            roster.suspect_count()
        ),
        _ => tracing::warn!(?fields, "unrecognized command"),
    }
}

fn main() -> Result<()> {
    cityhall::init_tracing();

    let stdin = io::stdin();
    let mut line = String::new();

    // The first line carries the number of commands to process.
    if stdin.lock().read_line(&mut line)? == 0 {
        return Ok(());
    }
    let commands: u64 = match line.trim().parse() {
        Ok(count) => count,
        Err(_) => {
            eprintln!("Incorrect");
            return Ok(());
        }
    };

    let mut roster = Roster::new();
    for _ in 0..commands {
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if !fields.is_empty() {
            run_command(&mut roster, &fields);
        }
    }

    Ok(())
}
