//! Integration tests for ck-sim.

use ck_core::{CheckoutConfig, CustomerId, ScriptedRandom, ServerId, SimRandom, SimTime};
use ck_entity::Customer;
use ck_event::{ActionKind, Event};

use crate::{Anomaly, NoopObserver, Sim, SimBuilder, SimError, SimObserver, Summary};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(humans: u32, self_checkouts: u32, qmax: usize, customers: u32) -> CheckoutConfig {
    CheckoutConfig {
        seed: 42,
        human_servers: humans,
        self_checkouts,
        max_queue_length: qmax,
        customers,
        ..CheckoutConfig::default()
    }
}

fn typical(id: u32, at: f64) -> Customer {
    Customer::new(CustomerId(id), SimTime::new(at), false)
}

fn greedy(id: u32, at: f64) -> Customer {
    Customer::new(CustomerId(id), SimTime::new(at), true)
}

fn scripted_sim(config: CheckoutConfig, rng: ScriptedRandom) -> Sim<ScriptedRandom> {
    SimBuilder::new(config, rng).build().unwrap()
}

/// Run to completion and return the visible events as (time, kind, customer, server).
fn visible(sim: &mut Sim<ScriptedRandom>) -> Vec<(f64, ActionKind, u32, u32)> {
    let mut events: Vec<Event> = Vec::new();
    sim.run(&mut events).unwrap();
    events
        .iter()
        .filter(|e| e.is_visible())
        .map(|e| {
            (
                e.time.as_f64(),
                e.kind(),
                e.customer().map(|c| c.id.0).unwrap_or(0),
                e.server().map(|s| s.0).unwrap_or(0),
            )
        })
        .collect()
}

fn busy_config() -> CheckoutConfig {
    CheckoutConfig {
        seed:               7,
        human_servers:      2,
        self_checkouts:     2,
        max_queue_length:   2,
        customers:          300,
        arrival_rate:       1.5,
        service_rate:       0.6,
        resting_rate:       1.0,
        rest_probability:   0.3,
        greedy_probability: 0.4,
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn generates_customers_when_none_supplied() {
        let sim = scripted_sim(config(1, 0, 1, 3), ScriptedRandom::new().inter_arrivals([0.5]));
        let times: Vec<f64> = sim.customers.iter().map(|c| c.arrival_time.as_f64()).collect();
        assert_eq!(times, vec![0.0, 0.5, 1.0]);
        assert_eq!(sim.queue.len(), 3);
        assert_eq!(sim.floor.len(), 1);
    }

    #[test]
    fn customer_count_mismatch_errors() {
        let result = SimBuilder::new(config(1, 0, 1, 3), ScriptedRandom::new())
            .customers(vec![typical(1, 0.0), typical(2, 1.0)])
            .build();
        assert!(matches!(
            result,
            Err(SimError::CustomerCountMismatch { expected: 3, got: 2 })
        ));
    }

    #[test]
    fn out_of_sequence_ids_error() {
        let result = SimBuilder::new(config(1, 0, 1, 2), ScriptedRandom::new())
            .customers(vec![typical(2, 0.0), typical(1, 1.0)])
            .build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn decreasing_arrivals_error() {
        let result = SimBuilder::new(config(1, 0, 1, 2), ScriptedRandom::new())
            .customers(vec![typical(1, 2.0), typical(2, 1.0)])
            .build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn invalid_config_errors() {
        let bad = CheckoutConfig { arrival_rate: 0.0, ..config(1, 0, 1, 2) };
        let result = SimBuilder::new(bad, ScriptedRandom::new()).build();
        assert!(matches!(result, Err(SimError::Core(_))));
    }
}

// ── Scripted scenarios ────────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use super::*;
    use ActionKind::*;

    #[test]
    fn second_customer_leaves_when_nobody_may_wait() {
        let rng = ScriptedRandom::new().inter_arrivals([1.0]).service_times([5.0]);
        let mut sim = scripted_sim(config(1, 0, 0, 2), rng);

        assert_eq!(
            visible(&mut sim),
            vec![
                (0.0, Arrives, 1, 0),
                (0.0, Served, 1, 1),
                (1.0, Arrives, 2, 0),
                (1.0, Leaves, 2, 0),
                (5.0, Done, 1, 1),
            ]
        );
        assert_eq!(sim.summary(), Summary { average_wait: 0.0, served: 1, not_served: 1 });
        assert!(sim.anomalies().is_empty());
    }

    #[test]
    fn waiting_customer_is_served_when_the_server_is_done() {
        let rng = ScriptedRandom::new().inter_arrivals([1.0]).service_times([5.0, 2.0]);
        let mut sim = scripted_sim(config(1, 0, 1, 2), rng);

        assert_eq!(
            visible(&mut sim),
            vec![
                (0.0, Arrives, 1, 0),
                (0.0, Served, 1, 1),
                (1.0, Arrives, 2, 0),
                (1.0, Waits, 2, 1),
                (5.0, Done, 1, 1),
                (5.0, Served, 2, 1),
                (7.0, Done, 2, 1),
            ]
        );
        assert_eq!(sim.summary(), Summary { average_wait: 2.0, served: 2, not_served: 0 });
    }

    #[test]
    fn self_checkout_counters_pull_from_one_line() {
        let rng = ScriptedRandom::new()
            .inter_arrivals([0.5])
            .service_times([10.0, 10.0, 3.0, 4.0]);
        let mut sim = scripted_sim(config(0, 2, 2, 4), rng);

        // Run until both late customers are queued.
        while sim.floor.queue_length(ServerId(1)) < 2 {
            sim.step().unwrap();
            assert_eq!(
                sim.floor.queue_length(ServerId(1)),
                sim.floor.queue_length(ServerId(2)),
            );
        }

        let events = visible(&mut sim);
        assert!(events.contains(&(10.0, Served, 3, 1)));
        assert!(events.contains(&(10.5, Served, 4, 2)));
        assert_eq!(sim.summary(), Summary { average_wait: 4.5, served: 4, not_served: 0 });
    }

    #[test]
    fn counters_freeing_up_together_serve_different_customers() {
        let customers = vec![typical(1, 0.0), typical(2, 0.5), typical(3, 0.75), typical(4, 0.875)];
        let mut sim = SimBuilder::new(
            config(0, 2, 5, 4),
            ScriptedRandom::new().service_times([1.5, 1.0]),
        )
        .customers(customers)
        .strict(true)
        .build()
        .unwrap();

        // Both counters finish at 1.5 and pull from the shared line together.
        let events = visible(&mut sim);
        let served: Vec<_> = events
            .iter()
            .filter(|e| e.1 == Served)
            .map(|&(at, _, c, s)| (at, c, s))
            .collect();
        assert_eq!(served, [(0.0, 1, 1), (0.5, 2, 2), (1.5, 3, 1), (1.5, 4, 2)]);

        assert!(sim.anomalies().is_empty());
        assert!(sim.floor.shared_line().is_some_and(|l| l.is_empty() && l.claimed() == 0));
        let summary = sim.summary();
        assert_eq!((summary.served, summary.not_served), (4, 0));
    }

    #[test]
    fn mixed_floor_fills_human_lines_before_the_self_checkout_line() {
        let customers = (1..=7).map(|i| typical(i, f64::from(i - 1))).collect();
        let mut sim = SimBuilder::new(
            config(2, 1, 1, 7),
            ScriptedRandom::new().service_times([10.0]),
        )
        .customers(customers)
        .build()
        .unwrap();

        // Three served straight away, one wait per human line, one in the
        // self-checkout line, and then every line is full.
        while sim.floor.shared_line().is_some_and(|l| l.is_empty()) {
            sim.step().unwrap();
        }
        assert_eq!(sim.floor.queue_length(ServerId(1)), 1);
        assert_eq!(sim.floor.queue_length(ServerId(2)), 1);
        assert_eq!(sim.floor.queue_length(ServerId(3)), 1);

        let events = visible(&mut sim);
        assert!(events.contains(&(6.0, Leaves, 7, 0)));
        assert!(events.contains(&(10.0, Served, 4, 1)));
        assert!(events.contains(&(11.0, Served, 5, 2)));
        assert!(events.contains(&(12.0, Served, 6, 3)));
        assert_eq!(sim.summary(), Summary { average_wait: 3.5, served: 6, not_served: 1 });
    }

    #[test]
    fn greedy_customer_skips_to_the_shortest_line() {
        let customers = vec![
            typical(1, 0.0),
            typical(2, 0.1),
            typical(3, 0.2),
            greedy(4, 0.3),
            typical(5, 0.4),
        ];
        let mut sim = SimBuilder::new(
            config(2, 0, 3, 5),
            ScriptedRandom::new().service_times([10.0]),
        )
        .customers(customers)
        .build()
        .unwrap();

        let events = visible(&mut sim);
        assert!(events.contains(&(0.2, Waits, 3, 1)));
        assert!(events.contains(&(0.3, Waits, 4, 2)));
        assert!(events.contains(&(0.4, Waits, 5, 1)));
    }

    #[test]
    fn resting_server_comes_back_and_serves() {
        let cfg = CheckoutConfig {
            resting_rate: 1.0,
            rest_probability: 0.5,
            ..config(1, 0, 1, 2)
        };
        let rng = ScriptedRandom::new()
            .inter_arrivals([1.0])
            .service_times([2.0])
            .rest_trials([0.1, 0.9])
            .rest_periods([3.0]);
        let mut sim = scripted_sim(cfg, rng);

        let mut events: Vec<Event> = Vec::new();
        sim.run(&mut events).unwrap();

        let kinds: Vec<(f64, ActionKind)> =
            events.iter().map(|e| (e.time.as_f64(), e.kind())).collect();
        assert!(kinds.contains(&(2.0, ServerRest)));
        assert!(kinds.contains(&(5.0, ServerBack)));
        assert!(kinds.contains(&(5.0, Served)));
        assert!(events.iter().filter(|e| !e.is_visible()).count() == 2);
        assert_eq!(sim.summary(), Summary { average_wait: 2.0, served: 2, not_served: 0 });
    }
}

// ── Properties over seeded runs ───────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use super::*;

    fn seeded(config: CheckoutConfig) -> Sim<SimRandom> {
        let rng = SimRandom::from_config(&config).unwrap();
        SimBuilder::new(config, rng).strict(true).build().unwrap()
    }

    #[test]
    fn same_seed_same_run() {
        let mut a: Vec<Event> = Vec::new();
        let mut b: Vec<Event> = Vec::new();
        let sa = seeded(busy_config()).run(&mut a).unwrap();
        let sb = seeded(busy_config()).run(&mut b).unwrap();

        let key = |e: &Event| (e.time, e.action);
        assert_eq!(a.iter().map(key).collect::<Vec<_>>(), b.iter().map(key).collect::<Vec<_>>());
        assert_eq!(sa, sb);
    }

    #[test]
    fn every_customer_is_served_or_not() {
        for seed in 1..=5 {
            let cfg = CheckoutConfig { seed, ..busy_config() };
            let summary = seeded(cfg.clone()).run(&mut NoopObserver).unwrap();
            assert_eq!(summary.customers(), u64::from(cfg.customers), "seed {seed}");
            assert!(summary.average_wait >= 0.0);
        }
    }

    #[test]
    fn lines_never_exceed_capacity_and_time_never_goes_back() {
        let cfg = busy_config();
        let qmax = cfg.max_queue_length;
        let mut sim = seeded(cfg);
        let mut last = SimTime::ZERO;

        while let Some(event) = sim.step().unwrap() {
            assert!(event.time >= last);
            last = event.time;
            for line in sim.floor.lines() {
                assert!(line.len() <= qmax, "line of {} at {}", line.len(), event.time);
            }
        }
        assert!(sim.is_finished());
        assert!(sim.anomalies().is_empty());
    }

    #[test]
    fn nobody_is_served_before_arriving() {
        let mut events: Vec<Event> = Vec::new();
        seeded(busy_config()).run(&mut events).unwrap();

        let served: Vec<&Event> = events.iter().filter(|e| e.kind() == ActionKind::Served).collect();
        assert!(!served.is_empty());
        for e in served {
            let customer = e.customer().unwrap();
            assert!(e.time >= customer.arrival_time);
        }
    }

    #[test]
    fn greedy_customers_join_a_shortest_line() {
        let mut sim = seeded(busy_config());

        loop {
            let before: Vec<usize> = sim
                .floor
                .servers()
                .iter()
                .map(|s| sim.floor.queue_length(s.id))
                .collect();
            let Some(event) = sim.step().unwrap() else { break };

            if event.kind() != ActionKind::Waits {
                continue;
            }
            let (Some(customer), Some(server)) = (event.customer(), event.server()) else {
                unreachable!()
            };
            if customer.greedy {
                let joined = before[server.slot()];
                assert!(before.iter().all(|&len| joined <= len));
                assert!(before[..server.slot()].iter().all(|&len| len > joined));
            }
        }
    }
}

// ── Anomalies ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod anomalies {
    use super::*;

    #[test]
    fn empty_floor_sends_everyone_away() {
        let mut sim = scripted_sim(config(0, 0, 1, 3), ScriptedRandom::new());
        let summary = sim.run(&mut NoopObserver).unwrap();

        assert_eq!(summary, Summary { average_wait: 0.0, served: 0, not_served: 3 });
        assert_eq!(sim.anomalies().len(), 3);
        assert!(matches!(
            sim.anomalies()[0],
            Anomaly::NoServers { customer: CustomerId(1), .. }
        ));
    }

    #[test]
    fn strict_run_fails_on_first_anomaly() {
        let mut sim = SimBuilder::new(config(0, 0, 1, 3), ScriptedRandom::new())
            .strict(true)
            .build()
            .unwrap();
        let result = sim.run(&mut NoopObserver);
        assert!(matches!(
            result,
            Err(SimError::Invariant(Anomaly::NoServers { customer: CustomerId(1), .. }))
        ));
        assert_eq!(sim.processed(), 1);
    }

    #[test]
    fn serving_past_the_front_is_reported() {
        let customers = vec![typical(1, 0.0), typical(2, 0.1), typical(3, 0.2)];
        let mut sim = SimBuilder::new(
            config(1, 0, 2, 3),
            ScriptedRandom::new().service_times([10.0]),
        )
        .customers(customers.clone())
        .build()
        .unwrap();

        while sim.floor.queue_length(ServerId(1)) < 2 {
            sim.step().unwrap();
        }
        sim.queue.push(Event::served(SimTime::new(1.0), customers[2], ServerId(1)));
        sim.step().unwrap();

        assert_eq!(
            sim.anomalies(),
            &[Anomaly::OutOfTurn {
                at:       SimTime::new(1.0),
                server:   ServerId(1),
                customer: CustomerId(3),
                expected: CustomerId(2),
            }]
        );
        let line = sim.floor.line(ServerId(1));
        assert_eq!(line.len(), 1);
        assert_eq!(line.front().map(|c| c.id), Some(CustomerId(2)));
    }

    #[derive(Default)]
    struct Counting {
        events:    usize,
        anomalies: usize,
        ends:      usize,
    }

    impl SimObserver for Counting {
        fn on_event(&mut self, _event: &Event) {
            self.events += 1;
        }
        fn on_anomaly(&mut self, _anomaly: &Anomaly) {
            self.anomalies += 1;
        }
        fn on_sim_end(&mut self, _summary: &Summary) {
            self.ends += 1;
        }
    }

    #[test]
    fn observer_sees_events_anomalies_and_end() {
        let mut sim = scripted_sim(config(0, 0, 1, 2), ScriptedRandom::new());
        let mut obs = Counting::default();
        sim.run(&mut obs).unwrap();

        // Two arrivals and two departures.
        assert_eq!(obs.events, 4);
        assert_eq!(obs.anomalies, 2);
        assert_eq!(obs.ends, 1);
        assert_eq!(sim.processed(), 4);
    }
}

// ── Batch runs ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod batch_tests {
    use super::*;
    use crate::batch::{run_batch, with_seeds};

    #[test]
    fn one_result_per_seed_in_order() {
        let configs = with_seeds(&busy_config(), [3, 1, 2]);
        assert_eq!(configs.iter().map(|c| c.seed).collect::<Vec<_>>(), vec![3, 1, 2]);

        let results = run_batch(&configs);
        assert_eq!(results.len(), 3);
        for (cfg, result) in configs.iter().zip(&results) {
            let summary = result.as_ref().unwrap();
            assert_eq!(summary.customers(), u64::from(cfg.customers));
        }
    }

    #[test]
    fn batch_matches_a_single_run() {
        let cfg = busy_config();
        let single = {
            let rng = SimRandom::from_config(&cfg).unwrap();
            SimBuilder::new(cfg.clone(), rng).build().unwrap().run(&mut NoopObserver).unwrap()
        };
        let batch = run_batch(&[cfg.clone(), cfg]);
        assert_eq!(batch[0].as_ref().unwrap(), &single);
        assert_eq!(batch[1].as_ref().unwrap(), &single);
    }

    #[test]
    fn invalid_config_fails_only_its_own_run() {
        let good = busy_config();
        let bad = CheckoutConfig { service_rate: -1.0, ..busy_config() };
        let results = run_batch(&[good, bad]);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
    }
}
