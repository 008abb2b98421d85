//! Business logic: the voting data-access façade.

pub mod voting;

pub use voting::VotingService;
