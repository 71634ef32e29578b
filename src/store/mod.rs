pub mod card_store;

pub use card_store::{CardStore, StoreError};
