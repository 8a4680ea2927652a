use itertools::Itertools;

/// Visitor waiting in the queue, identified by the issued ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visitor {
    pub ticket: String,
    pub minutes: u32,
}

/// One service window after distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub number: usize,
    pub total_minutes: u32,
    pub tickets: Vec<String>,
}

/// FIFO queue that hands out zero-padded tickets (`T001`, `T002`, ...).
#[derive(Debug, Default)]
pub struct TicketQueue {
    visitors: Vec<Visitor>,
    issued: u32,
}

impl TicketQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next ticket and appends the visitor to the queue.
    pub fn enqueue(&mut self, minutes: u32) -> String {
        self.issued += 1;
        let ticket = format!("T{:03}", self.issued);
        self.visitors.push(Visitor {
            ticket: ticket.clone(),
            minutes,
        });
        ticket
    }

    pub fn visitors(&self) -> &[Visitor] {
        &self.visitors
    }
}

/// Greedy balance: every visitor, in arrival order, goes to the window with
/// the least accumulated minutes; ties pick the lowest-numbered window.
pub fn distribute(visitors: &[Visitor], window_count: usize) -> Vec<Window> {
    let mut windows: Vec<Window> = (1..=window_count)
        .map(|number| Window {
            number,
            total_minutes: 0,
            tickets: Vec::new(),
        })
        .collect();

    for visitor in visitors {
        let Some(pick) = windows
            .iter()
            .position_min_by_key(|window| window.total_minutes)
        else {
            break;
        };
        windows[pick].total_minutes += visitor.minutes;
        windows[pick].tickets.push(visitor.ticket.clone());
    }

    windows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_are_sequential_and_padded() {
        let mut queue = TicketQueue::new();
        assert_eq!(queue.enqueue(10), "T001");
        assert_eq!(queue.enqueue(5), "T002");
        for _ in 0..8 {
            queue.enqueue(1);
        }
        assert_eq!(queue.enqueue(1), "T011");
        assert_eq!(queue.visitors().len(), 11);
    }

    #[test]
    fn visitors_go_to_least_loaded_window() {
        let mut queue = TicketQueue::new();
        for minutes in [10, 3, 3, 5] {
            queue.enqueue(minutes);
        }

        let windows = distribute(queue.visitors(), 2);
        assert_eq!(windows[0].total_minutes, 10);
        assert_eq!(windows[0].tickets, vec!["T001"]);
        assert_eq!(windows[1].total_minutes, 11);
        assert_eq!(windows[1].tickets, vec!["T002", "T003", "T004"]);
    }

    #[test]
    fn ties_favor_the_first_window() {
        let mut queue = TicketQueue::new();
        for minutes in [5, 5, 5] {
            queue.enqueue(minutes);
        }

        let windows = distribute(queue.visitors(), 2);
        assert_eq!(windows[0].tickets, vec!["T001", "T003"]);
        assert_eq!(windows[1].tickets, vec!["T002"]);
    }

    #[test]
    fn empty_queue_yields_idle_windows() {
        let windows = distribute(&[], 3);
        assert_eq!(windows.len(), 3);
        assert!(windows.iter().all(|window| window.tickets.is_empty()));
        assert_eq!(windows[2].number, 3);
    }

    #[test]
    fn no_windows_means_no_assignment() {
        let mut queue = TicketQueue::new();
        queue.enqueue(5);
        assert!(distribute(queue.visitors(), 0).is_empty());
    }
}
