pub mod booking_flow;
pub mod gateway;
pub mod identity;
pub mod sample_data;
pub mod slots;
pub mod slug;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;
