//! PriceLevel (C2): the FIFO queue of resting orders at one price.

use std::collections::{HashMap, VecDeque};

use tracing::trace;

use crate::{Order, OrderId, PriceLevelError, Side, Trade};

/// All resting orders at one price on one side, in strict FIFO order.
///
/// Storage is a `HashMap<OrderId, Order>` (owning, O(1) lookup/removal) plus
/// a `VecDeque<OrderId>` carrying insertion order. Cancelling an order drops
/// it from the map but leaves its id in the deque as a tombstone; the head
/// of the deque is lazily skipped past tombstones by every operation that
/// looks at it, so cancel stays O(1) and the FIFO never needs to shift
/// elements to splice one out. This is the "per-level hash set over order
/// ids with an auxiliary FIFO of ids carrying a still-live check" shape the
/// level's redesign notes call out as an acceptable alternative to an
/// intrusive linked list.
#[derive(Debug)]
pub struct PriceLevel {
    price: u64,
    side: Side,
    volume: u64,
    orders: HashMap<OrderId, Order>,
    queue: VecDeque<OrderId>,
}

impl PriceLevel {
    /// Creates an empty level at `price` for the given side.
    pub fn new(price: u64, side: Side) -> Self {
        Self {
            price,
            side,
            volume: 0,
            orders: HashMap::new(),
            queue: VecDeque::new(),
        }
    }

    /// This level's price.
    pub fn price(&self) -> u64 {
        self.price
    }

    /// Which side of the book this level belongs to.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Total resting volume at this level.
    pub fn volume(&self) -> u64 {
        self.volume
    }

    /// `true` once no live order remains (tombstones may still linger in
    /// the FIFO; they carry no volume and are skipped on the next walk).
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Number of live orders resting at this level.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Appends a resting order to the tail of the FIFO.
    pub fn add(&mut self, order: Order) {
        self.volume += order.volume();
        self.queue.push_back(order.id());
        self.orders.insert(order.id(), order);
    }

    /// A specific resident order, by id, without removing it.
    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(&id)
    }

    /// Every resident order, in no particular order.
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.values()
    }

    /// The oldest live order still resting, without removing it.
    pub fn head(&mut self) -> Option<&Order> {
        self.skip_tombstones();
        let id = *self.queue.front()?;
        self.orders.get(&id)
    }

    /// Matches `incoming` against this level's FIFO, oldest order first.
    ///
    /// Stops when either this level runs out of volume or `incoming` is
    /// exhausted. Returns every trade produced, in the order they executed,
    /// plus every resting order that was fully filled (and therefore
    /// already removed from this level) so the caller can drop it from its
    /// own id index.
    pub fn fill(&mut self, incoming: &mut Order) -> (Vec<Trade>, Vec<Order>) {
        let mut trades = Vec::new();
        let mut fully_filled = Vec::new();

        loop {
            if incoming.volume() == 0 {
                break;
            }
            self.skip_tombstones();
            let Some(&head_id) = self.queue.front() else {
                break;
            };
            let head = self.orders.get_mut(&head_id).expect("tombstones skipped");

            let trade_volume = head.volume().min(incoming.volume());
            head.fill(trade_volume);
            incoming.fill(trade_volume);
            self.volume -= trade_volume;

            let (bid, ask) = match self.side {
                Side::Bid => (&*head, &*incoming),
                Side::Ask => (&*incoming, &*head),
            };
            trades.push(Trade::new(
                bid.id(),
                ask.id(),
                bid.trader_id(),
                ask.trader_id(),
                self.price,
                trade_volume,
            ));

            if head.is_filled() {
                self.queue.pop_front();
                let filled = self.orders.remove(&head_id).expect("just matched");
                fully_filled.push(filled);
            }
        }

        trace!(
            price = self.price,
            trades = trades.len(),
            fully_filled = fully_filled.len(),
            "level fill complete"
        );
        (trades, fully_filled)
    }

    /// Removes a specific resting order by id.
    pub fn cancel(&mut self, id: OrderId) -> Result<Order, PriceLevelError> {
        let order = self
            .orders
            .remove(&id)
            .ok_or(PriceLevelError::OrderNotFound(id))?;
        self.volume -= order.volume();
        trace!(price = self.price, order_id = %id, "order cancelled at level");
        Ok(order)
    }

    fn skip_tombstones(&mut self) {
        while let Some(&id) = self.queue.front() {
            if self.orders.contains_key(&id) {
                break;
            }
            self.queue.pop_front();
        }
    }
}
