mod closure_finder;

pub use closure_finder::ClosureFinder;
