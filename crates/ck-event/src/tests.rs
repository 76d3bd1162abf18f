//! Unit tests for ck-event.

use ck_core::{CustomerId, ServerId, SimTime};
use ck_entity::Customer;

use crate::{ActionKind, Event, EventQueue};

fn customer(id: u32, at: f64) -> Customer {
    Customer::new(CustomerId(id), SimTime::new(at), false)
}

fn t(x: f64) -> SimTime {
    SimTime::new(x)
}

#[cfg(test)]
mod actions {
    use super::*;
    use crate::Action;

    #[test]
    fn priority_follows_declaration_order() {
        let order = [
            ActionKind::ServerRest,
            ActionKind::ServerBack,
            ActionKind::Arrives,
            ActionKind::Leaves,
            ActionKind::Waits,
            ActionKind::Served,
            ActionKind::Done,
        ];
        for pair in order.windows(2) {
            assert!(pair[0].priority() < pair[1].priority(), "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn only_rest_events_are_internal() {
        assert!(ActionKind::ServerRest.is_internal());
        assert!(ActionKind::ServerBack.is_internal());
        assert!(!ActionKind::Arrives.is_internal());
        assert!(!ActionKind::Done.is_internal());
    }

    #[test]
    fn actions_carry_the_right_entities() {
        let c = customer(1, 0.0);
        let arrives = Action::Arrives { customer: c };
        assert_eq!(arrives.customer().map(|c| c.id), Some(CustomerId(1)));
        assert_eq!(arrives.server(), None);

        let rest = Action::ServerRest { server: ServerId(2) };
        assert!(rest.customer().is_none());
        assert_eq!(rest.server(), Some(ServerId(2)));

        let served = Action::Served { customer: c, server: ServerId(3) };
        assert_eq!(served.kind(), ActionKind::Served);
        assert_eq!(served.server(), Some(ServerId(3)));
    }
}

#[cfg(test)]
mod ordering {
    use super::*;

    #[test]
    fn earlier_time_first() {
        let a = Event::done(t(1.0), customer(5, 0.0), ServerId(1));
        let b = Event::arrives(customer(1, 2.0));
        assert!(a < b);
    }

    #[test]
    fn same_time_smaller_customer_first() {
        let a = Event::done(t(3.0), customer(1, 0.0), ServerId(1));
        let b = Event::arrives(customer(2, 3.0));
        assert!(a < b);
    }

    #[test]
    fn same_time_same_customer_uses_priority() {
        let c = customer(4, 1.0);
        let mut events = vec![
            Event::done(t(1.0), c, ServerId(1)),
            Event::served(t(1.0), c, ServerId(1)),
            Event::waits(t(1.0), c, ServerId(1)),
            Event::leaves(t(1.0), c),
            Event::arrives(c),
        ];
        events.sort();
        let kinds: Vec<ActionKind> = events.iter().map(|e| e.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                ActionKind::Arrives,
                ActionKind::Leaves,
                ActionKind::Waits,
                ActionKind::Served,
                ActionKind::Done,
            ]
        );
    }

    #[test]
    fn rest_events_precede_customer_events_at_the_same_instant() {
        let rest = Event::server_rest(t(2.0), ServerId(3));
        let back = Event::server_back(t(2.0), ServerId(1));
        let arrive = Event::arrives(customer(1, 2.0));
        assert!(rest < arrive);
        assert!(back < arrive);
        assert!(rest < back);
    }

    #[test]
    fn server_id_separates_simultaneous_server_events() {
        let a = Event::server_back(t(2.0), ServerId(1));
        let b = Event::server_back(t(2.0), ServerId(2));
        assert!(a < b);
        assert_ne!(a, b);
    }

    #[test]
    fn visibility() {
        assert!(Event::arrives(customer(1, 0.0)).is_visible());
        assert!(!Event::server_rest(t(0.0), ServerId(1)).is_visible());
    }
}

#[cfg(test)]
mod queue {
    use super::*;

    #[test]
    fn seeds_arrivals_in_order() {
        let customers = [customer(1, 0.0), customer(2, 0.5), customer(3, 0.5)];
        let mut queue = EventQueue::from_arrivals(&customers);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.next_time(), Some(SimTime::ZERO));

        let ids: Vec<u32> = std::iter::from_fn(|| queue.pop())
            .map(|e| e.customer().map(|c| c.id.0).unwrap_or(0))
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(queue.is_empty());
    }

    #[test]
    fn pops_in_total_order_regardless_of_push_order() {
        let c1 = customer(1, 0.0);
        let c2 = customer(2, 1.0);
        let mut queue = EventQueue::new();
        queue.push(Event::done(t(5.0), c1, ServerId(1)));
        queue.push(Event::leaves(t(1.0), c2));
        queue.push(Event::arrives(c2));
        queue.push(Event::served(t(0.0), c1, ServerId(1)));
        queue.push(Event::arrives(c1));
        queue.push(Event::server_rest(t(5.0), ServerId(1)));

        let order: Vec<(f64, ActionKind)> = std::iter::from_fn(|| queue.pop())
            .map(|e| (e.time.as_f64(), e.kind()))
            .collect();
        assert_eq!(
            order,
            vec![
                (0.0, ActionKind::Arrives),
                (0.0, ActionKind::Served),
                (1.0, ActionKind::Arrives),
                (1.0, ActionKind::Leaves),
                (5.0, ActionKind::ServerRest),
                (5.0, ActionKind::Done),
            ]
        );
    }

    #[test]
    fn peek_does_not_remove() {
        let mut queue = EventQueue::new();
        queue.push(Event::arrives(customer(1, 0.0)));
        assert!(queue.peek().is_some());
        assert_eq!(queue.len(), 1);
        assert!(queue.pop().is_some());
        assert!(queue.pop().is_none());
    }
}
