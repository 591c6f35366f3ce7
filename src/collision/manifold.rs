/// Two balls found overlapping during one inner step's detection pass,
/// kept for the impulse pass that follows.
///
/// Holds indices into the engine's ball collection; a pair never outlives
/// the step that recorded it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionPair {
    /// Index of the ball whose query found the overlap.
    pub body_a_idx: usize,
    /// Index of the ball it overlapped.
    pub body_b_idx: usize,
}

impl CollisionPair {
    pub fn new(body_a_idx: usize, body_b_idx: usize) -> Self {
        Self {
            body_a_idx,
            body_b_idx,
        }
    }
}
