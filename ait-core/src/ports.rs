mod optimizer;

pub use optimizer::PortfolioOptimizer;
