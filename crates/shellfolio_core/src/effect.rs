#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// A block was appended at `index` in the transcript.
    BlockAppended { index: usize },
    /// Bring the newest block into view. Only emitted once the visitor has interacted.
    ScrollToEnd,
}
