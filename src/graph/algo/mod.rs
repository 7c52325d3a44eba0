use core::ops::Add;

pub mod prim;

pub use prim::{prim, SpanningTree};

/// Edge weights usable by the graph model and Prim's builder.
/// `Self::default()` is the zero weight, which encodes "no edge" in a weight matrix.
pub trait Measure: PartialOrd + Default + Add<Output = Self> + Copy {}

impl<T> Measure for T where T: PartialOrd + Default + Add<Output = Self> + Copy {}
