#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Visitor edited the command line.
    InputChanged(String),
    /// Visitor pressed the confirm key on the current input.
    Submitted,
    /// Input gained focus before anything was typed.
    Focused,
    /// Fallback for placeholder wiring.
    NoOp,
}
