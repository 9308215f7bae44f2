//! Technical indicator library.
//!
//! Every indicator is a pure function of the cleaned series plus its period
//! parameters; none reads another indicator's state. Functions return
//! `None` when the series is too short for the requested period.

pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volatility;
pub mod volume;
