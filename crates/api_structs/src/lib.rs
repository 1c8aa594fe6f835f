mod event;

pub mod dtos {
    pub use crate::event::dtos::*;
}

pub use crate::event::api::*;
