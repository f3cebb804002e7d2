//! Augment player adapters: the concrete native-side infrastructure behind
//! the ports in `augment-player-ports`.

pub mod infrastructure;
