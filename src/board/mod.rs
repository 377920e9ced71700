//! Pure transforms from decoded feed data to what the widgets draw.
//! Nothing in here touches the terminal or the network.

pub mod buckets;
pub mod layout;
pub mod sentinel;
pub mod severity;
pub mod ticker;
