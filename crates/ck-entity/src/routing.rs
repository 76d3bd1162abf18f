//! Where an arriving customer goes.

use ck_core::ServerId;

use crate::{Customer, RoutingError, RoutingResult, ServerFloor};

/// Outcome of [`choose_server`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// The server is idle with an empty line: service starts on arrival.
    ServeNow(ServerId),
    /// Join the line this server pulls from.
    Wait(ServerId),
    /// Every line is full.
    Leave,
}

/// Pick a server for a newly arrived customer.
///
/// 1. The first server (id order) that can serve immediately.
/// 2. Otherwise the first server whose line is shorter than
///    `max_queue_length`.  A greedy customer instead joins the globally
///    shortest line (ties to the smallest id), as long as some line has room.
/// 3. Otherwise the customer leaves.
///
/// Pure: the floor is not modified.  Fails only when there are no servers.
pub fn choose_server(
    customer:         &Customer,
    floor:            &ServerFloor,
    max_queue_length: usize,
) -> RoutingResult<Route> {
    if floor.is_empty() {
        return Err(RoutingError::NoServers(customer.id));
    }

    let servers = floor.servers();

    if let Some(idle) = servers
        .iter()
        .find(|s| floor.can_serve_immediately(s.id, customer))
    {
        return Ok(Route::ServeNow(idle.id));
    }

    let Some(first_with_room) = servers
        .iter()
        .find(|s| floor.queue_length(s.id) < max_queue_length)
    else {
        return Ok(Route::Leave);
    };

    if !customer.greedy {
        return Ok(Route::Wait(first_with_room.id));
    }

    // The shortest line is never longer than the first line with room, so it
    // has room as well.
    let shortest = floor.shortest_line().unwrap_or(first_with_room.id);
    Ok(Route::Wait(shortest))
}
