// Terminal-facing collaborators used by the binary.

pub mod console;
pub mod payment;
