use derive_more::{Display, Error, From, IsVariant, TryInto};

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("index {index} out of bounds for collection with {len} elements")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("capacity of {capacity} exceeded, {required} elements required")]
pub struct CapacityExceeded {
    pub capacity: usize,
    pub required: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, From, TryInto, IsVariant)]
pub enum IndexOrCapacity {
    IndexOutOfBounds(IndexOutOfBounds),
    CapacityExceeded(CapacityExceeded),
}
