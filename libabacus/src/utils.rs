mod iter;
pub use iter::PeekIter;
