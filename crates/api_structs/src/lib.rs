mod history;
mod owner;
mod recovery_queue;
mod reminder;
mod status;
mod system;

pub mod dtos {
    pub use crate::history::dtos::*;
    pub use crate::recovery_queue::dtos::*;
}

pub use crate::history::api::*;
pub use crate::owner::api::*;
pub use crate::recovery_queue::api::*;
pub use crate::reminder::api::*;
pub use crate::status::api::*;
pub use crate::system::api::*;
