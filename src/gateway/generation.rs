/// Guards against applying the result of a superseded request.
///
/// Requests are never cancelled. Instead each fetch takes a ticket before it
/// starts and only applies its result if the ticket is still the latest one
/// issued when the response arrives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestGeneration {
    current: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestGeneration {
    pub fn issue(&mut self) -> RequestTicket {
        self.current = self.current.wrapping_add(1);
        RequestTicket(self.current)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.current
    }

    /// Make every outstanding ticket stale without starting a new request.
    pub fn invalidate(&mut self) {
        self.current = self.current.wrapping_add(1);
    }
}
