mod renderer;

pub use renderer::ProposalRenderer;
