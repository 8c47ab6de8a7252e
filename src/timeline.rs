/// Deferred actions on the frame clock.
///
/// Actions fire in due-time order, ties in the order they were scheduled.
/// Nothing is ever cancelled.
pub struct Timeline<A> {
    now: f32,
    pending: Vec<Pending<A>>,
    next_seq: u64,
}

struct Pending<A> {
    due: f32,
    seq: u64,
    action: A,
}

impl<A> Timeline<A> {
    pub fn new() -> Self {
        Self {
            now: 0.0,
            pending: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn schedule(&mut self, delay: f32, action: A) {
        self.pending.push(Pending {
            due: self.now + delay.max(0.0),
            seq: self.next_seq,
            action,
        });
        self.next_seq += 1;
    }

    /// Moves the clock forward and returns the actions that became due.
    pub fn advance(&mut self, dt: f32) -> Vec<A> {
        self.now += dt.max(0.0);

        let now = self.now;
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due <= now);
        self.pending = rest;

        due.sort_by(|a, b| a.due.total_cmp(&b.due).then(a.seq.cmp(&b.seq)));
        due.into_iter().map(|p| p.action).collect()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<A> Default for Timeline<A> {
    fn default() -> Self {
        Self::new()
    }
}
