mod proposal;

pub use proposal::{ProposalCategory, ProposalDocument};
